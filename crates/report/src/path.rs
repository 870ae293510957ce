//! 경로 해석기 -- dot notation 기반 중첩 필드 조회
//!
//! [`PathResolver`]는 파싱된 JSON 트리에서 `"report.metadata.assessments"` 같은
//! 점(.) 구분 경로를 따라 내려가며 값을 찾습니다. 각 세그먼트는 직전 세그먼트의
//! 결과를 기준으로 조회됩니다 (`"a.b.c"`는 `a`의 `b`의 `c`).
//!
//! 조회 실패는 에러가 아니라 `None`(miss)이며, 기본값은 호출하는 쪽이 정합니다.
//! 리포트는 외부 도구가 생성하므로 필드가 빠져 있거나 타입이 다를 수 있습니다.
//!
//! # 사용 예시
//! ```
//! use rlsummary_report::path::PathResolver;
//!
//! let root = serde_json::json!({"info": {"file": {"identity": {"name": "app.tgz"}}}});
//! let resolver = PathResolver::new(&root);
//! assert_eq!(resolver.str("info.file.identity.name"), Some("app.tgz"));
//! assert_eq!(resolver.string_or("info.file.identity.purl", "<no purl>"), "<no purl>");
//! ```

use serde_json::{Map, Value};

/// JSON 트리 위의 경로 조회 뷰
///
/// 트리를 빌려 쓰기만 하므로 복사 비용 없이 여러 번 만들 수 있습니다.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    root: &'a Value,
}

impl<'a> PathResolver<'a> {
    /// 주어진 노드를 루트로 하는 해석기를 생성합니다.
    pub fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// 루트 노드를 반환합니다.
    pub fn root(&self) -> &'a Value {
        self.root
    }

    /// 경로의 값을 조회합니다.
    ///
    /// 빈 경로는 루트 자신을 가리킵니다. 배열 노드에서는 숫자 세그먼트를
    /// 인덱스로 해석합니다.
    pub fn get(&self, path: &str) -> Option<&'a Value> {
        if path.is_empty() {
            return Some(self.root);
        }

        let mut current = self.root;
        for segment in path.split('.') {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// 하위 트리를 루트로 하는 해석기를 반환합니다.
    pub fn at(&self, path: &str) -> Option<PathResolver<'a>> {
        self.get(path).map(PathResolver::new)
    }

    /// 현재 객체의 키 하나를 그대로 조회합니다.
    ///
    /// 키에 점(.)이 들어 있어도 분리하지 않으므로 ID 조회에 사용합니다.
    pub fn child(&self, key: &str) -> Option<PathResolver<'a>> {
        self.root.as_object()?.get(key).map(PathResolver::new)
    }

    /// 문자열 값을 조회합니다. 문자열이 아니면 `None`입니다.
    pub fn str(&self, path: &str) -> Option<&'a str> {
        self.get(path)?.as_str()
    }

    /// 문자열 값을 조회하고, 없으면 `default`를 반환합니다.
    pub fn string_or(&self, path: &str, default: &str) -> String {
        self.str(path).unwrap_or(default).to_owned()
    }

    /// 문자열 목록을 조회합니다.
    ///
    /// 배열이 아니면 빈 목록이며, 문자열이 아닌 원소는 건너뜁니다.
    pub fn string_list(&self, path: &str) -> Vec<&'a str> {
        match self.get(path) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// 숫자 값을 `f64`로 조회합니다.
    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path)?.as_f64()
    }

    /// 0 이상의 정수 값을 조회합니다. 음수나 소수는 `None`입니다.
    pub fn unsigned(&self, path: &str) -> Option<u64> {
        self.get(path)?.as_u64()
    }

    /// 정수 값을 조회합니다. 소수는 `None`입니다.
    pub fn integer(&self, path: &str) -> Option<i64> {
        self.get(path)?.as_i64()
    }

    /// 객체 값을 조회합니다.
    pub fn object(&self, path: &str) -> Option<&'a Map<String, Value>> {
        self.get(path)?.as_object()
    }

    /// 객체 값의 (키, 하위 해석기) 목록을 문서 순서대로 반환합니다.
    ///
    /// 객체가 아니면 빈 목록입니다.
    pub fn entries(&self, path: &str) -> Vec<(&'a str, PathResolver<'a>)> {
        self.object(path)
            .map(|map| {
                map.iter()
                    .map(|(key, value)| (key.as_str(), PathResolver::new(value)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// 배열 값의 원소별 해석기 목록을 반환합니다. 배열이 아니면 빈 목록입니다.
    pub fn items(&self, path: &str) -> Vec<PathResolver<'a>> {
        match self.get(path) {
            Some(Value::Array(items)) => items.iter().map(PathResolver::new).collect(),
            _ => Vec::new(),
        }
    }
}

//! 위반 레지스트리 -- 평가 항목에서 참조된 위반 ID 누적
//!
//! 한 번의 변환 실행 동안 참조된 위반 ID를 처음 본 순서대로, 중복 없이 모읍니다.
//! 평가 단계가 끝나면 위반 섹션이 이 목록을 정렬해 사용합니다.

use std::collections::HashSet;

/// 순서를 보존하는 위반 ID 집합
#[derive(Debug, Clone, Default)]
pub struct ViolationRegistry {
    /// 처음 참조된 순서
    order: Vec<String>,
    /// 중복 확인용
    seen: HashSet<String>,
}

impl ViolationRegistry {
    /// 빈 레지스트리를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 참조 목록을 기록하고 인라인 링크 목록을 반환합니다.
    ///
    /// 새 ID만 레지스트리에 추가되지만, 반환값에는 이번 호출로 받은 모든 ID가
    /// `[id](#id)` 형식으로 쉼표 구분되어 들어갑니다. 빈 입력은 빈 문자열입니다.
    pub fn record_references<S: AsRef<str>>(&mut self, ids: &[S]) -> String {
        let mut links = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            if self.seen.insert(id.to_owned()) {
                self.order.push(id.to_owned());
            }
            links.push(format!("[{id}](#{id})"));
        }
        links.join(", ")
    }

    /// 처음 참조된 순서의 ID 목록을 반환합니다.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    /// 사전순으로 정렬된 ID 목록을 반환합니다.
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.order.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// 기록된 ID 수를 반환합니다.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

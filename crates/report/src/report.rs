//! 리포트 문서 -- 파싱된 JSON과 섹션 뷰
//!
//! [`ReportDocument`]는 입력 바이트를 한 번 파싱해 소유하고, [`Report`]는 그 위의
//! 읽기 전용 뷰로 파일 식별 정보와 네 개의 섹션(assessments, violations,
//! components, vulnerabilities)을 제공합니다.
//!
//! 섹션이 없거나 객체가 아니면 빈 섹션으로 취급합니다. 입력 자체를 해석할 수 없을
//! 때만 에러입니다.

use serde_json::Value;
use tracing::debug;

use crate::error::SummaryError;
use crate::path::PathResolver;

/// 파일 이름 경로
pub const IDENTITY_NAME_PATH: &str = "info.file.identity.name";
/// 파일 purl 경로
pub const IDENTITY_PURL_PATH: &str = "info.file.identity.purl";
/// 평가 섹션 경로
pub const ASSESSMENTS_PATH: &str = "report.metadata.assessments";
/// 위반 섹션 경로
pub const VIOLATIONS_PATH: &str = "report.metadata.violations";
/// 컴포넌트 섹션 경로
pub const COMPONENTS_PATH: &str = "report.metadata.components";
/// 취약점 섹션 경로
pub const VULNERABILITIES_PATH: &str = "report.metadata.vulnerabilities";

/// 이름이 없을 때 표시값
pub const NO_NAME: &str = "<no name>";
/// purl이 없을 때 표시값
pub const NO_PURL: &str = "<no purl>";

/// 누락된 섹션 자리에 쓰는 빈 노드
static EMPTY_SECTION: Value = Value::Null;

/// 파싱된 리포트 문서 (소유)
#[derive(Debug, Clone)]
pub struct ReportDocument {
    root: Value,
}

impl ReportDocument {
    /// 입력 바이트를 파싱합니다.
    ///
    /// 크기 제한을 먼저 확인하고, 최상위가 JSON 객체인지 검증합니다.
    pub fn from_slice(raw: &[u8], max_input_size: usize) -> Result<Self, SummaryError> {
        if raw.len() > max_input_size {
            return Err(SummaryError::InputTooLarge {
                size: raw.len(),
                max: max_input_size,
            });
        }

        let root: Value = serde_json::from_slice(raw).map_err(|e| SummaryError::Parse {
            line: e.line(),
            column: e.column(),
            reason: e.to_string(),
        })?;

        Self::from_value(root)
    }

    /// 이미 파싱된 값으로 문서를 만듭니다. 최상위는 객체여야 합니다.
    pub fn from_value(root: Value) -> Result<Self, SummaryError> {
        if !root.is_object() {
            return Err(SummaryError::NotAnObject);
        }
        Ok(Self { root })
    }

    /// 루트 값을 반환합니다.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// 섹션 뷰를 만듭니다.
    pub fn view(&self) -> Report<'_> {
        Report::new(&self.root)
    }
}

/// 스캔된 파일의 식별 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIdentity {
    /// 파일 이름 (없으면 `<no name>`)
    pub name: String,
    /// package URL (없으면 `<no purl>`)
    pub purl: String,
}

/// 리포트 섹션 뷰
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    root: PathResolver<'a>,
    assessments: PathResolver<'a>,
    violations: PathResolver<'a>,
    components: PathResolver<'a>,
    vulnerabilities: PathResolver<'a>,
}

impl<'a> Report<'a> {
    /// 루트 노드에서 섹션을 찾아 뷰를 만듭니다.
    pub fn new(root: &'a Value) -> Self {
        let root = PathResolver::new(root);
        let section = |path: &str| {
            root.at(path)
                .unwrap_or_else(|| PathResolver::new(&EMPTY_SECTION))
        };

        let report = Self {
            root,
            assessments: section(ASSESSMENTS_PATH),
            violations: section(VIOLATIONS_PATH),
            components: section(COMPONENTS_PATH),
            vulnerabilities: section(VULNERABILITIES_PATH),
        };

        debug!(
            assessments = report.assessments.entries("").len(),
            violations = report.violations.entries("").len(),
            components = report.components.entries("").len(),
            vulnerabilities = report.vulnerabilities.entries("").len(),
            "report sections resolved"
        );

        report
    }

    /// 파일 식별 정보를 반환합니다.
    pub fn identity(&self) -> FileIdentity {
        FileIdentity {
            name: self.root.string_or(IDENTITY_NAME_PATH, NO_NAME),
            purl: self.root.string_or(IDENTITY_PURL_PATH, NO_PURL),
        }
    }

    /// 평가 섹션
    pub fn assessments(&self) -> PathResolver<'a> {
        self.assessments
    }

    /// 위반 섹션
    pub fn violations(&self) -> PathResolver<'a> {
        self.violations
    }

    /// 컴포넌트 섹션
    pub fn components(&self) -> PathResolver<'a> {
        self.components
    }

    /// 취약점 섹션
    pub fn vulnerabilities(&self) -> PathResolver<'a> {
        self.vulnerabilities
    }
}

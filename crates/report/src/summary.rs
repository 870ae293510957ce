//! 요약 실행기 -- 리포트 한 건을 마크다운 문서로 변환
//!
//! [`ReportSummarizer`]는 입력 바이트를 파싱한 뒤 두 단계로 문서를 만듭니다.
//!
//! 1. 평가 섹션: 카테고리별 요약 줄을 만들며 참조된 위반 ID를 레지스트리에 모읍니다.
//! 2. 위반 섹션: 모인 ID를 사전순으로 정렬해 ID마다 블록 하나를 출력합니다.
//!
//! 레지스트리와 출력 버퍼는 실행마다 새로 만들어지며 실행 간에 공유되지 않습니다.
//! 결과는 전부 성공하거나([`Summary`]) 전부 실패합니다([`SummaryError`]).

use tracing::{debug, info};

use crate::aggregate::summarize_category;
use crate::config::SummaryConfig;
use crate::error::SummaryError;
use crate::expand::ViolationExpander;
use crate::registry::ViolationRegistry;
use crate::render::MarkdownDocument;
use crate::report::{FileIdentity, ReportDocument};

/// 평가 섹션 제목
pub const ASSESSMENTS_TITLE: &str = "Assessments";
/// 위반 섹션 제목
pub const VIOLATIONS_TITLE: &str = "Violations";

/// 변환 결과
#[derive(Debug, Clone)]
pub struct Summary {
    /// 스캔된 파일 식별 정보
    pub identity: FileIdentity,
    /// 평가에서 참조된 위반 ID (사전순)
    pub violation_ids: Vec<String>,
    /// 렌더링된 문서
    pub document: MarkdownDocument,
}

impl Summary {
    /// 문서의 줄 목록을 반환합니다.
    pub fn lines(&self) -> &[String] {
        self.document.lines()
    }

    /// 참조된 위반 ID 수를 반환합니다.
    pub fn violation_count(&self) -> usize {
        self.violation_ids.len()
    }
}

/// 리포트 요약 실행기
#[derive(Debug, Clone, Default)]
pub struct ReportSummarizer {
    config: SummaryConfig,
}

impl ReportSummarizer {
    /// 설정으로 실행기를 생성합니다.
    pub fn new(config: SummaryConfig) -> Self {
        Self { config }
    }

    /// 설정 참조를 반환합니다.
    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// 입력 바이트를 변환합니다.
    ///
    /// # Errors
    ///
    /// 입력이 크기 제한을 넘거나, JSON이 아니거나, 최상위가 객체가 아니면 에러를
    /// 반환합니다. 이 경우 출력 줄은 만들어지지 않습니다.
    pub fn summarize(&self, raw: &[u8]) -> Result<Summary, SummaryError> {
        let document = ReportDocument::from_slice(raw, self.config.max_input_size)?;
        Ok(self.summarize_document(&document))
    }

    /// 파싱된 문서를 변환합니다. 이 단계는 실패하지 않습니다.
    pub fn summarize_document(&self, document: &ReportDocument) -> Summary {
        let report = document.view();
        let identity = report.identity();
        debug!(name = %identity.name, purl = %identity.purl, "summarizing report");

        let mut registry = ViolationRegistry::new();
        let mut assessment_lines = Vec::new();
        for (category, entry) in report.assessments().entries("") {
            assessment_lines.extend(summarize_category(category, entry, &mut registry));
        }

        let mut output = MarkdownDocument::new();
        output.section(1, ASSESSMENTS_TITLE, assessment_lines);

        let expander = ViolationExpander::new(&report);
        let plain = !self.config.collapsible;
        let violation_ids = registry.sorted_ids();

        let mut blocks = MarkdownDocument::new();
        for id in &violation_ids {
            blocks.collapsible(id, expander.render_violation_detail(id), plain);
        }
        output.section(2, VIOLATIONS_TITLE, blocks.into_lines());

        info!(
            name = %identity.name,
            violations = violation_ids.len(),
            lines = output.len(),
            "report summarized"
        );

        Summary {
            identity,
            violation_ids: violation_ids.into_iter().map(str::to_owned).collect(),
            document: output,
        }
    }
}

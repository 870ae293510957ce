//! 위반 상세 전개 -- 위반 → 컴포넌트 → CVE
//!
//! [`ViolationExpander`]는 위반 ID(`rule_id`) 하나에 대해 설명, 분류, 상태,
//! 심각도를 출력하고, 위반이 참조하는 컴포넌트와 각 컴포넌트의 활성 CVE를
//! 중첩해서 출력합니다.
//!
//! 참조된 컴포넌트나 CVE가 리포트에 없으면 해당 필드를 빈 값으로 둔 채 줄을
//! 그대로 출력합니다. 렌더링은 중단되지 않습니다.

use crate::classify::{
    capitalize, decorate, decorate_severity, decorate_status, severity_from_score,
};
use crate::path::PathResolver;
use crate::report::Report;

/// CVE 레코드 URL 접두사
pub const CVE_RECORD_URL: &str = "https://www.cve.org/CVERecord?id=";

/// 위반/컴포넌트/취약점 섹션을 묶은 전개기
#[derive(Debug, Clone, Copy)]
pub struct ViolationExpander<'a> {
    violations: PathResolver<'a>,
    components: PathResolver<'a>,
    vulnerabilities: PathResolver<'a>,
}

impl<'a> ViolationExpander<'a> {
    /// 리포트 뷰에서 전개기를 만듭니다.
    pub fn new(report: &Report<'a>) -> Self {
        Self {
            violations: report.violations(),
            components: report.components(),
            vulnerabilities: report.vulnerabilities(),
        }
    }

    /// `rule_id`가 일치하는 모든 위반 항목의 상세 줄을 만듭니다.
    ///
    /// 맵 키가 아니라 각 항목의 `rule_id` 값으로 찾으며, 같은 `rule_id`를 가진
    /// 항목이 여러 개면 모두 출력합니다. 일치하는 항목이 없으면 네 필드를 빈
    /// 값으로 한 번 출력합니다.
    pub fn render_violation_detail(&self, rule_id: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut matched = false;

        for (_, violation) in self.violations.entries("") {
            if violation.str("rule_id") != Some(rule_id) {
                continue;
            }
            matched = true;

            push_violation_fields(
                &mut lines,
                violation.str("description").unwrap_or_default(),
                violation.str("category").unwrap_or_default(),
                violation.str("status").unwrap_or_default(),
                violation.str("severity").unwrap_or_default(),
            );

            for component_id in violation.string_list("references.component") {
                lines.extend(self.render_component(component_id));
            }
        }

        if !matched {
            push_violation_fields(&mut lines, "", "", "", "");
        }

        lines
    }

    /// 컴포넌트 하나의 블록을 만듭니다.
    ///
    /// purl이 비어 있지 않으면 purl을, 아니면 이름과 버전을 출력합니다.
    /// 활성 CVE가 있을 때만 `#### Vulnerabilities:` 소제목을 붙입니다.
    pub fn render_component(&self, component_id: &str) -> Vec<String> {
        let component = self.components.child(component_id);
        let field = |path: &str| {
            component
                .and_then(|c| c.str(path))
                .unwrap_or_default()
                .to_owned()
        };

        let mut lines = vec![
            "### Component:".to_owned(),
            format!("- Path: {}", field("path")),
        ];

        let purl = field("identity.purl");
        if purl.is_empty() {
            lines.push(format!("- Name: {}", field("name")));
            lines.push(format!("- Version: {}", field("identity.version")));
        } else {
            lines.push(format!("- Purl: {purl}"));
        }

        let active = component
            .map(|c| c.string_list("identity.vulnerabilities.active"))
            .unwrap_or_default();
        if !active.is_empty() {
            lines.push("#### Vulnerabilities:".to_owned());
            lines.extend(active.into_iter().map(|cve| self.render_vulnerability(cve)));
        }

        lines
    }

    /// CVE 하나의 항목 줄을 만듭니다.
    ///
    /// 점수가 없으면 심각도와 점수 자리를 비워 둡니다.
    pub fn render_vulnerability(&self, cve: &str) -> String {
        let score = self
            .vulnerabilities
            .child(cve)
            .and_then(|v| v.number("cve.cvss.baseScore"));

        let (severity, score) = match score {
            Some(score) => (decorate(severity_from_score(score)), score.to_string()),
            None => (String::new(), String::new()),
        };

        format!("- [{cve}]({CVE_RECORD_URL}{cve}); Severity: {severity}, base-score: {score}")
    }
}

/// 위반 항목의 설명, 분류, 상태, 심각도 줄을 추가합니다.
fn push_violation_fields(
    lines: &mut Vec<String>,
    description: &str,
    category: &str,
    status: &str,
    severity: &str,
) {
    lines.push(format!("- **Description:** ***{description}***"));
    lines.push(format!("- **Category: {category}**"));
    lines.push(format!(
        "- **Status: {}**",
        decorate_status(&capitalize(status))
    ));
    lines.push(format!(
        "- **Severity: {}**",
        decorate_severity(&capitalize(severity))
    ));
}

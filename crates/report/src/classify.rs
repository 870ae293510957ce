//! 분류기 -- CVSS 점수 구간화와 상태/심각도 배지 장식
//!
//! 모든 함수는 순수 함수입니다. 알 수 없는 상태/심각도 문자열은 변경 없이 통과시킵니다.

use rlsummary_core::types::{AssessmentStatus, Severity};

/// CVSS 기본 점수를 심각도 구간으로 변환합니다.
///
/// | 점수         | 심각도   |
/// |--------------|----------|
/// | < 0.1        | None     |
/// | 0.1 - < 4.0  | Low      |
/// | 4.0 - < 7.0  | Medium   |
/// | 7.0 - < 9.0  | High     |
/// | >= 9.0       | Critical |
///
/// 10.0을 넘는 점수도 Critical이며, NaN은 None으로 취급합니다.
pub fn severity_from_score(score: f64) -> Severity {
    if score.is_nan() || score < 0.1 {
        Severity::None
    } else if score < 4.0 {
        Severity::Low
    } else if score < 7.0 {
        Severity::Medium
    } else if score < 9.0 {
        Severity::High
    } else {
        Severity::Critical
    }
}

/// 상태 문자열 앞에 배지를 붙입니다.
///
/// Pass/Warning/Fail(대소문자 무관)만 장식하고 나머지는 그대로 반환합니다.
pub fn decorate_status(status: &str) -> String {
    match AssessmentStatus::from_str_loose(status) {
        Some(known) => format!("{} {}", known.marker(), status),
        None => status.to_owned(),
    }
}

/// 심각도 문자열 앞에 배지를 붙입니다.
///
/// Critical/High/Medium/Low/None(대소문자 무관)만 장식하고 나머지는 그대로 반환합니다.
pub fn decorate_severity(severity: &str) -> String {
    match Severity::from_str_loose(severity) {
        Some(known) => decorate(known),
        None => severity.to_owned(),
    }
}

/// 심각도 값을 배지와 함께 표시합니다.
pub fn decorate(severity: Severity) -> String {
    format!("{} {}", severity.marker(), severity)
}

/// 첫 글자만 대문자로 바꿉니다. 빈 문자열은 빈 문자열입니다.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! 도메인 타입 -- 평가 상태와 심각도
//!
//! 리포트에 기록된 상태/심각도 문자열을 닫힌 열거형으로 다룹니다.
//! 각 값은 마크다운에 표시할 고정 배지(emoji shortcode)를 가집니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 평가(assessment) 상태
///
/// 리포트의 `status` 필드 값 중 알려진 세 가지만 표현합니다.
/// 그 밖의 문자열은 파싱되지 않으며 호출자가 그대로 출력합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssessmentStatus {
    /// 통과
    Pass,
    /// 경고
    Warning,
    /// 실패
    Fail,
}

impl AssessmentStatus {
    /// 문자열에서 상태를 파싱합니다.
    ///
    /// 대소문자를 구분하지 않습니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pass" => Some(Self::Pass),
            "warning" => Some(Self::Warning),
            "fail" => Some(Self::Fail),
            _ => None,
        }
    }

    /// 상태 배지를 반환합니다.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Fail => ":red_square:",
            Self::Warning => ":yellow_square:",
            Self::Pass => ":green_square:",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "Pass"),
            Self::Warning => write!(f, "Warning"),
            Self::Fail => write!(f, "Fail"),
        }
    }
}

/// 심각도 레벨
///
/// CVSS 기본 점수 구간에 대응합니다.
/// `Ord` 구현으로 비교가 가능합니다 (`None < Low < Medium < High < Critical`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// 점수 0.0 -- 영향 없음
    #[default]
    None,
    /// 낮은 심각도
    Low,
    /// 중간 심각도
    Medium,
    /// 높은 심각도
    High,
    /// 치명적
    Critical,
}

impl Severity {
    /// 문자열에서 심각도를 파싱합니다.
    ///
    /// 대소문자를 구분하지 않습니다.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Self::None),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// 심각도 배지를 반환합니다.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Critical => ":red_circle:",
            Self::High => ":orange_circle:",
            Self::Medium => ":yellow_circle:",
            Self::Low => ":large_blue_circle:",
            Self::None => ":white_circle:",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(Severity::None < Severity::Low);
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn severity_default_is_none() {
        assert_eq!(Severity::default(), Severity::None);
    }

    #[test]
    fn severity_display() {
        assert_eq!(Severity::None.to_string(), "None");
        assert_eq!(Severity::Low.to_string(), "Low");
        assert_eq!(Severity::Medium.to_string(), "Medium");
        assert_eq!(Severity::High.to_string(), "High");
        assert_eq!(Severity::Critical.to_string(), "Critical");
    }

    #[test]
    fn severity_from_str_loose() {
        assert_eq!(Severity::from_str_loose("HIGH"), Some(Severity::High));
        assert_eq!(Severity::from_str_loose("critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_str_loose("None"), Some(Severity::None));
        assert_eq!(Severity::from_str_loose("crit"), None);
        assert_eq!(Severity::from_str_loose(""), None);
    }

    #[test]
    fn severity_markers_are_distinct() {
        let all = [
            Severity::None,
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ];
        let markers: std::collections::HashSet<&str> = all.iter().map(|s| s.marker()).collect();
        assert_eq!(markers.len(), all.len());
    }

    #[test]
    fn status_from_str_loose() {
        assert_eq!(AssessmentStatus::from_str_loose("pass"), Some(AssessmentStatus::Pass));
        assert_eq!(
            AssessmentStatus::from_str_loose("Warning"),
            Some(AssessmentStatus::Warning)
        );
        assert_eq!(AssessmentStatus::from_str_loose("FAIL"), Some(AssessmentStatus::Fail));
        assert_eq!(AssessmentStatus::from_str_loose("warn"), None);
        assert_eq!(AssessmentStatus::from_str_loose("unknown"), None);
    }

    #[test]
    fn status_markers() {
        assert_eq!(AssessmentStatus::Pass.marker(), ":green_square:");
        assert_eq!(AssessmentStatus::Warning.marker(), ":yellow_square:");
        assert_eq!(AssessmentStatus::Fail.marker(), ":red_square:");
    }

    #[test]
    fn severity_serialize_deserialize() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Critical);
    }
}

//! rlsummary 공통 크레이트
//!
//! 리포트 변환 엔진과 CLI가 공유하는 설정, 에러, 도메인 타입을 제공합니다.
//!
//! - [`config`]: `rlsummary.toml` 로딩, 환경변수 오버라이드, 검증
//! - [`error`]: 최상위 에러 타입 (`RlSummaryError`)
//! - [`types`]: 평가 상태와 심각도 열거형

pub mod config;
pub mod error;
pub mod types;

// --- 주요 타입 re-export ---

// 에러
pub use error::{ConfigError, RlSummaryError};

// 설정
pub use config::{GeneralConfig, RenderConfig, RlSummaryConfig};

// 도메인 타입
pub use types::{AssessmentStatus, Severity};

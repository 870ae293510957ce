//! 리포트 변환 설정
//!
//! [`SummaryConfig`]는 core의 [`RenderConfig`](rlsummary_core::config::RenderConfig)에서
//! 파생됩니다.
//!
//! # 사용 예시
//!
//! ```
//! use rlsummary_report::{SummaryConfig, SummaryConfigBuilder};
//!
//! // 기본값으로 생성
//! let config = SummaryConfig::default();
//! config.validate().unwrap();
//!
//! // 빌더로 생성
//! let config = SummaryConfigBuilder::new()
//!     .collapsible(false)
//!     .max_input_size(1024 * 1024)
//!     .build()
//!     .unwrap();
//! assert!(!config.collapsible);
//! ```

use serde::{Deserialize, Serialize};

use rlsummary_core::config::{DEFAULT_MAX_INPUT_SIZE, MAX_INPUT_SIZE_LIMIT};

use crate::error::SummaryError;

/// 리포트 변환 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// 위반 블록을 `<details>`로 접을지 여부 (false면 앵커 + 원본 줄)
    pub collapsible: bool,
    /// 입력 리포트 최대 허용 크기 (바이트)
    pub max_input_size: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            collapsible: true,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl SummaryConfig {
    /// core의 `RenderConfig`에서 설정을 생성합니다.
    pub fn from_core(core: &rlsummary_core::config::RenderConfig) -> Self {
        Self {
            collapsible: core.collapsible,
            max_input_size: core.max_input_size,
        }
    }

    /// 설정 값의 유효성을 검증합니다.
    ///
    /// - `max_input_size`: 1-536870912 (512 MiB)
    pub fn validate(&self) -> Result<(), SummaryError> {
        if self.max_input_size == 0 || self.max_input_size > MAX_INPUT_SIZE_LIMIT {
            return Err(SummaryError::Config {
                field: "max_input_size".to_owned(),
                reason: format!("must be 1-{MAX_INPUT_SIZE_LIMIT}"),
            });
        }
        Ok(())
    }
}

/// [`SummaryConfig`] 빌더
///
/// 빌드 시 유효성 검증을 수행합니다.
#[derive(Default)]
pub struct SummaryConfigBuilder {
    config: SummaryConfig,
}

impl SummaryConfigBuilder {
    /// 기본값을 가진 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 접힘 여부를 설정합니다.
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.config.collapsible = collapsible;
        self
    }

    /// 입력 최대 크기를 설정합니다.
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.config.max_input_size = size;
        self
    }

    /// 설정을 검증하고 반환합니다.
    pub fn build(self) -> Result<SummaryConfig, SummaryError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

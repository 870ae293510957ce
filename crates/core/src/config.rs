//! 설정 관리 -- rlsummary.toml 파싱 및 런타임 설정
//!
//! [`RlSummaryConfig`]는 로깅과 렌더링 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`RLSUMMARY_RENDER_COLLAPSIBLE=false` 형식)
//! 3. 설정 파일 (`rlsummary.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), rlsummary_core::error::RlSummaryError> {
//! use rlsummary_core::config::RlSummaryConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = RlSummaryConfig::load("rlsummary.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = RlSummaryConfig::parse("[render]\ncollapsible = false")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, RlSummaryError};

/// 입력 리포트 기본 최대 크기 (50 MiB)
pub const DEFAULT_MAX_INPUT_SIZE: usize = 50 * 1024 * 1024;

/// 입력 리포트 최대 크기 상한 (512 MiB)
pub const MAX_INPUT_SIZE_LIMIT: usize = 512 * 1024 * 1024;

/// rlsummary 통합 설정
///
/// `rlsummary.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RlSummaryConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 렌더링 설정
    #[serde(default)]
    pub render: RenderConfig,
}

impl RlSummaryConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RlSummaryError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 설정 파일이 없으면 기본값에서 시작합니다.
    ///
    /// 파일이 존재하지 않는 경우에만 기본값을 사용하며, 파싱/검증 에러는 그대로 반환합니다.
    /// 환경변수 오버라이드는 두 경우 모두 적용됩니다.
    pub async fn load_or_default(path: impl AsRef<Path>) -> Result<Self, RlSummaryError> {
        let path = path.as_ref();
        match Self::load(path).await {
            Err(RlSummaryError::Config(ConfigError::FileNotFound { .. })) => {
                debug!(path = %path.display(), "config file not found, using defaults");
                let mut config = Self::default();
                config.apply_env_overrides();
                config.validate()?;
                Ok(config)
            }
            other => other,
        }
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, RlSummaryError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RlSummaryError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                RlSummaryError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, RlSummaryError> {
        toml::from_str(toml_str).map_err(|e| {
            RlSummaryError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `RLSUMMARY_{SECTION}_{FIELD}`
    /// 예: `RLSUMMARY_GENERAL_LOG_LEVEL=debug`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "RLSUMMARY_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "RLSUMMARY_GENERAL_LOG_FORMAT");

        // Render
        override_bool(&mut self.render.collapsible, "RLSUMMARY_RENDER_COLLAPSIBLE");
        override_usize(
            &mut self.render.max_input_size,
            "RLSUMMARY_RENDER_MAX_INPUT_SIZE",
        );
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), RlSummaryError> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.render.max_input_size == 0 || self.render.max_input_size > MAX_INPUT_SIZE_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "render.max_input_size".to_owned(),
                reason: format!("must be 1-{MAX_INPUT_SIZE_LIMIT}"),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 렌더링 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// 위반 항목을 `<details>` 블록으로 접을지 여부 (false면 앵커만 출력)
    pub collapsible: bool,
    /// 입력 리포트 최대 허용 크기 (바이트)
    pub max_input_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            collapsible: true,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_bool(target: &mut bool, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<bool>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse bool from env var, ignoring"
            ),
        }
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}

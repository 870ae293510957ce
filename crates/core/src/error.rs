//! 에러 타입 -- 도메인별 에러 정의

/// rlsummary 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum RlSummaryError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_to_top_level() {
        let err: RlSummaryError = ConfigError::FileNotFound {
            path: "rlsummary.toml".to_owned(),
        }
        .into();
        assert!(matches!(err, RlSummaryError::Config(_)));
        assert!(err.to_string().contains("rlsummary.toml"));
    }

    #[test]
    fn invalid_value_display_names_field() {
        let err = ConfigError::InvalidValue {
            field: "render.max_input_size".to_owned(),
            reason: "must be greater than 0".to_owned(),
        };
        assert!(err.to_string().contains("render.max_input_size"));
    }

    #[test]
    fn io_error_converts_to_top_level() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: RlSummaryError = io_err.into();
        assert!(matches!(err, RlSummaryError::Io(_)));
    }
}

//! rlsummary.toml 통합 설정 테스트
//!
//! - rlsummary.toml.example 파싱 테스트
//! - 부분 설정 (일부 섹션만) 로딩 테스트
//! - 환경변수 우선순위 테스트
//! - 빈 파일 / 잘못된 형식 에러 테스트

use std::fs;

use rlsummary_core::config::{DEFAULT_MAX_INPUT_SIZE, RlSummaryConfig};
use rlsummary_core::error::{ConfigError, RlSummaryError};
use tempfile::TempDir;

// =============================================================================
// rlsummary.toml.example 파싱 테스트
// =============================================================================

#[test]
fn example_config_parses_successfully() {
    let content = include_str!("../../../rlsummary.toml.example");
    let config = RlSummaryConfig::parse(content).expect("example config should parse");

    assert_eq!(config.general.log_level, "info");
    assert_eq!(config.general.log_format, "pretty");
    assert!(config.render.collapsible);
    assert_eq!(config.render.max_input_size, 52_428_800);
}

#[test]
fn example_config_matches_code_defaults() {
    let content = include_str!("../../../rlsummary.toml.example");
    let config = RlSummaryConfig::parse(content).expect("should parse");
    let defaults = RlSummaryConfig::default();

    assert_eq!(config.general.log_level, defaults.general.log_level);
    assert_eq!(config.general.log_format, defaults.general.log_format);
    assert_eq!(config.render.collapsible, defaults.render.collapsible);
    assert_eq!(config.render.max_input_size, defaults.render.max_input_size);
}

// =============================================================================
// 부분 설정 테스트
// =============================================================================

#[test]
fn partial_config_general_only() {
    let toml = r#"
[general]
log_level = "debug"
log_format = "json"
"#;
    let config = RlSummaryConfig::parse(toml).expect("should parse");
    config.validate().expect("should validate");

    assert_eq!(config.general.log_level, "debug");
    assert_eq!(config.general.log_format, "json");
    assert!(config.render.collapsible);
    assert_eq!(config.render.max_input_size, DEFAULT_MAX_INPUT_SIZE);
}

#[test]
fn partial_config_render_only() {
    let toml = r#"
[render]
max_input_size = 1024
"#;
    let config = RlSummaryConfig::parse(toml).expect("should parse");
    config.validate().expect("should validate");

    assert_eq!(config.render.max_input_size, 1024);
    assert!(config.render.collapsible);
    assert_eq!(config.general.log_level, "info");
}

// =============================================================================
// 환경변수 우선순위 테스트
// =============================================================================

#[test]
#[serial_test::serial]
fn env_override_takes_precedence_over_toml() {
    let toml = r#"
[general]
log_level = "warn"
"#;

    let original = std::env::var("RLSUMMARY_GENERAL_LOG_LEVEL").ok();
    // SAFETY: serial 테스트로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("RLSUMMARY_GENERAL_LOG_LEVEL", "error");
    }

    let mut config = RlSummaryConfig::parse(toml).expect("should parse");
    config.apply_env_overrides();
    let result = config.general.log_level.clone();

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("RLSUMMARY_GENERAL_LOG_LEVEL", val),
            None => std::env::remove_var("RLSUMMARY_GENERAL_LOG_LEVEL"),
        }
    }

    assert_eq!(result, "error");
}

#[test]
#[serial_test::serial]
fn env_override_bool_field() {
    let original = std::env::var("RLSUMMARY_RENDER_COLLAPSIBLE").ok();
    // SAFETY: serial 테스트로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("RLSUMMARY_RENDER_COLLAPSIBLE", "false");
    }

    let mut config = RlSummaryConfig::parse("").expect("should parse");
    config.apply_env_overrides();
    let result = config.render.collapsible;

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("RLSUMMARY_RENDER_COLLAPSIBLE", val),
            None => std::env::remove_var("RLSUMMARY_RENDER_COLLAPSIBLE"),
        }
    }

    assert!(!result);
}

#[test]
#[serial_test::serial]
fn env_override_numeric_field() {
    let original = std::env::var("RLSUMMARY_RENDER_MAX_INPUT_SIZE").ok();
    // SAFETY: serial 테스트로 직렬화되어 환경변수 조작이 안전합니다.
    unsafe {
        std::env::set_var("RLSUMMARY_RENDER_MAX_INPUT_SIZE", "2048");
    }

    let mut config = RlSummaryConfig::parse("").expect("should parse");
    config.apply_env_overrides();
    let result = config.render.max_input_size;

    // SAFETY: 테스트 정리
    unsafe {
        match original {
            Some(val) => std::env::set_var("RLSUMMARY_RENDER_MAX_INPUT_SIZE", val),
            None => std::env::remove_var("RLSUMMARY_RENDER_MAX_INPUT_SIZE"),
        }
    }

    assert_eq!(result, 2048);
}

#[test]
#[serial_test::serial]
fn env_override_missing_var_keeps_toml_value() {
    let toml = r#"
[general]
log_level = "warn"
"#;

    // SAFETY: 존재하지 않는 변수를 명시적으로 제거
    unsafe {
        std::env::remove_var("RLSUMMARY_GENERAL_LOG_LEVEL");
    }

    let mut config = RlSummaryConfig::parse(toml).expect("should parse");
    config.apply_env_overrides();

    assert_eq!(config.general.log_level, "warn");
}

// =============================================================================
// 파일 로딩 / 에러 테스트
// =============================================================================

#[tokio::test]
#[serial_test::serial]
async fn load_from_file_applies_values() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("rlsummary.toml");
    fs::write(&config_path, "[render]\ncollapsible = false\n").expect("should write config");

    let config = RlSummaryConfig::load(&config_path)
        .await
        .expect("config should load");
    assert!(!config.render.collapsible);
}

#[tokio::test]
async fn load_malformed_file_fails() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[render\ncollapsible = false\n").expect("should write config");

    let err = RlSummaryConfig::load(&config_path)
        .await
        .expect_err("malformed TOML should fail");
    assert!(matches!(
        err,
        RlSummaryError::Config(ConfigError::ParseFailed { .. })
    ));
}

#[tokio::test]
async fn load_invalid_value_fails_validation() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(&config_path, "[render]\nmax_input_size = 0\n").expect("should write config");

    let err = RlSummaryConfig::load(&config_path)
        .await
        .expect_err("zero max_input_size should fail");
    assert!(matches!(
        err,
        RlSummaryError::Config(ConfigError::InvalidValue { .. })
    ));
}

#[tokio::test]
async fn load_or_default_propagates_parse_errors() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "not = [valid").expect("should write config");

    assert!(RlSummaryConfig::load_or_default(&config_path).await.is_err());
}

#[test]
fn wrong_type_is_parse_error() {
    let toml = r#"
[render]
collapsible = "yes"
"#;
    let err = RlSummaryConfig::parse(toml).expect_err("string for bool should fail");
    assert!(matches!(
        err,
        RlSummaryError::Config(ConfigError::ParseFailed { .. })
    ));
}

//! 리포트 변환 에러 타입
//!
//! [`SummaryError`]는 리포트 변환 중 발생할 수 있는 치명적 에러만 나타냅니다.
//! 누락된 필드나 끊어진 참조는 에러가 아니라 빈 값으로 렌더링됩니다.
//! 변환은 메모리 안에서만 일어나므로 출력 쓰기 에러는 호출자 쪽에서 다룹니다.
//!
//! # 에러 카테고리
//!
//! - **입력 파싱**: `Parse`, `NotAnObject`, `InputTooLarge`
//! - **설정**: `Config`

/// 리포트 변환 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    /// JSON 파싱 실패
    #[error("report parse error at line {line}, column {column}: {reason}")]
    Parse {
        /// 에러 위치 (줄)
        line: usize,
        /// 에러 위치 (열)
        column: usize,
        /// 파싱 실패 사유
        reason: String,
    },

    /// 최상위 값이 JSON 객체가 아님
    #[error("report root must be a JSON object")]
    NotAnObject,

    /// 입력 크기 초과
    #[error("report too large: {size} bytes (max: {max})")]
    InputTooLarge {
        /// 실제 입력 크기 (바이트)
        size: usize,
        /// 최대 허용 크기 (바이트)
        max: usize,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },
}

//! 감성 캐시 핵심 에러 타입.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type SentimentResult<T> = Result<T, SentimentError>;

impl SentimentError {
    /// 설정 문제로 인한 에러인지 확인합니다.
    pub fn is_config(&self) -> bool {
        matches!(self, SentimentError::Config(_))
    }
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Serialization(err.to_string())
    }
}

impl From<config::ConfigError> for SentimentError {
    fn from(err: config::ConfigError) -> Self {
        SentimentError::Config(err.to_string())
    }
}

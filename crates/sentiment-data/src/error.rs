//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 외부 소스 호출 실패 (비정상 상태 코드 또는 전송 오류)
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// 외부 소스 응답 본문 해석 실패
    #[error("Invalid source response: {0}")]
    InvalidResponse(String),

    /// 저장소가 개별 문서 쓰기를 거부함
    #[error("Store rejected write for {key}: {message}")]
    StoreWriteRejected { key: String, message: String },

    /// 스냅샷 읽기 실패 (키 열거, 누락 문서, 파싱)
    #[error("Store read failure: {0}")]
    StoreReadFailure(String),

    /// 그 외 저장소 오류
    #[error("Cache error: {0}")]
    CacheError(String),

    /// 직렬화/역직렬화 오류
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DataError {
    /// 배치를 중단하지 않고 건너뛸 수 있는 쓰기 거부인지 확인합니다.
    pub fn is_write_rejection(&self) -> bool {
        matches!(self, DataError::StoreWriteRejected { .. })
    }
}

impl From<redis::RedisError> for DataError {
    fn from(err: redis::RedisError) -> Self {
        DataError::CacheError(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::SerializationError(err.to_string())
    }
}

impl From<sentiment_core::SentimentError> for DataError {
    fn from(err: sentiment_core::SentimentError) -> Self {
        DataError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

//! 외부 감성 데이터 소스.

pub mod http;

pub use http::HttpSentimentSource;

use crate::error::Result;
use async_trait::async_trait;
use sentiment_core::SentimentRecord;

/// 감성 레코드 제공자 트레잇.
///
/// 한 번의 호출로 전체 데이터셋을 반환합니다. 페이지네이션이나 재시도는 없습니다.
#[async_trait]
pub trait SentimentSource: Send + Sync {
    /// 전체 레코드를 가져옵니다.
    async fn fetch_records(&self) -> Result<Vec<SentimentRecord>>;

    /// 소스 이름 (로그용).
    fn name(&self) -> &str;
}

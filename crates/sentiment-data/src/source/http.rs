//! HTTP 감성 API 클라이언트.
//!
//! 기본 엔드포인트는 Tradestie의 Reddit 감성 API이며 응답 본문은 객체 배열입니다.
//!
//! ```json
//! [
//!   {"no_of_comments": 179, "sentiment": "Bullish", "sentiment_score": 0.142, "ticker": "AMC"},
//!   {"no_of_comments": 46, "sentiment": "Bearish", "sentiment_score": -0.081, "ticker": "TSLA"}
//! ]
//! ```
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use sentiment_core::SourceConfig;
//! use sentiment_data::{HttpSentimentSource, SentimentSource};
//!
//! let source = HttpSentimentSource::new(&SourceConfig::default())?;
//! let records = source.fetch_records().await?;
//! ```

use super::SentimentSource;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use sentiment_core::{SentimentRecord, SourceConfig};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// HTTP 감성 API 클라이언트.
#[derive(Debug, Clone)]
pub struct HttpSentimentSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSentimentSource {
    /// 새로운 클라이언트 생성.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DataError::SourceUnavailable(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

/// 응답 본문을 레코드 목록으로 변환합니다.
///
/// 본문은 배열이어야 하고 각 원소는 객체여야 합니다. 필드 검증은 하지 않습니다.
pub fn parse_records(body: Value) -> Result<Vec<SentimentRecord>> {
    let items = match body {
        Value::Array(items) => items,
        _ => {
            return Err(DataError::InvalidResponse(
                "expected a JSON array of records".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            SentimentRecord::try_from(item)
                .map_err(|e| DataError::InvalidResponse(format!("item {}: {}", index, e)))
        })
        .collect()
}

#[async_trait]
impl SentimentSource for HttpSentimentSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_records(&self) -> Result<Vec<SentimentRecord>> {
        debug!("Requesting sentiment data");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DataError::SourceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DataError::SourceUnavailable(format!(
                "status {} - {}",
                status, body
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| DataError::InvalidResponse(e.to_string()))?;

        let records = parse_records(body)?;
        info!(count = records.len(), "Sentiment data fetched");
        Ok(records)
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_records() {
        let records = parse_records(json!([
            {"ticker": "AMC", "sentiment": "Bullish", "sentiment_score": 0.142, "no_of_comments": 179},
            {"ticker": "TSLA", "sentiment": "Bearish", "sentiment_score": -0.081}
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ticker(), Some("AMC"));
        assert_eq!(records[0].get("no_of_comments"), Some(&json!(179)));
        assert_eq!(records[1].sentiment(), Some("Bearish"));
    }

    #[test]
    fn test_parse_records_empty() {
        assert!(parse_records(json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_parse_records_rejects_non_array() {
        let err = parse_records(json!({"ticker": "AMC"})).unwrap_err();
        assert!(matches!(err, DataError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_records_rejects_non_object_item() {
        let err = parse_records(json!([{"ticker": "AMC"}, "GME"])).unwrap_err();
        match err {
            DataError::InvalidResponse(msg) => assert!(msg.starts_with("item 1")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

//! 감성 레코드 모델과 캐시 키 규칙.
//!
//! 레코드는 외부 소스가 내려준 JSON 객체를 그대로 보관합니다.
//! 집계 연산은 `ticker`, `sentiment`, `sentiment_score` 세 필드만 요구하며
//! 나머지 필드(예: `no_of_comments`)는 저장/복원 시 그대로 전달됩니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{SentimentError, SentimentResult};

/// 강세 감성 레이블.
pub const BULLISH: &str = "Bullish";

/// 약세 감성 레이블.
pub const BEARISH: &str = "Bearish";

/// 스냅샷 레코드가 사용하는 예약 키 접두사.
pub const RECORD_KEY_PREFIX: &str = "Object:";

/// 티커 필드명
pub const FIELD_TICKER: &str = "ticker";
/// 감성 필드명
pub const FIELD_SENTIMENT: &str = "sentiment";
/// 감성 점수 필드명
pub const FIELD_SENTIMENT_SCORE: &str = "sentiment_score";

/// 티커 감성 레코드.
///
/// 스키마 검증 없이 JSON 객체를 보관합니다. 필수 필드가 없거나 타입이
/// 맞지 않으면 해당 접근자가 `None`을 반환합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentRecord {
    fields: Map<String, Value>,
}

impl SentimentRecord {
    /// 세 필수 필드를 가진 레코드를 생성합니다.
    pub fn new(ticker: impl Into<String>, sentiment: impl Into<String>, score: f64) -> Self {
        Self::default()
            .with_field(FIELD_TICKER, ticker.into())
            .with_field(FIELD_SENTIMENT, sentiment.into())
            .with_field(FIELD_SENTIMENT_SCORE, score)
    }

    /// 필드를 추가하거나 덮어씁니다.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// 티커.
    pub fn ticker(&self) -> Option<&str> {
        self.fields.get(FIELD_TICKER).and_then(Value::as_str)
    }

    /// 감성 레이블.
    pub fn sentiment(&self) -> Option<&str> {
        self.fields.get(FIELD_SENTIMENT).and_then(Value::as_str)
    }

    /// 감성 점수.
    pub fn sentiment_score(&self) -> Option<f64> {
        self.fields.get(FIELD_SENTIMENT_SCORE).and_then(Value::as_f64)
    }

    /// 임의 필드를 조회합니다.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// JSON 텍스트로부터 레코드를 파싱합니다.
    ///
    /// 최상위 값이 객체가 아니면 실패합니다.
    pub fn from_json(json: &str) -> SentimentResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::try_from(value)
    }

    /// JSON 텍스트로 직렬화합니다.
    pub fn to_json(&self) -> SentimentResult<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

impl TryFrom<Value> for SentimentRecord {
    type Error = SentimentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(SentimentError::InvalidInput(format!(
                "expected JSON object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<SentimentRecord> for Value {
    fn from(record: SentimentRecord) -> Self {
        Value::Object(record.fields)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// 위치 인덱스에 해당하는 캐시 키 (`Object:<index>`).
pub fn record_key(index: usize) -> String {
    format!("{}{}", RECORD_KEY_PREFIX, index)
}

/// 캐시 키에서 위치 인덱스를 추출합니다.
pub fn record_index(key: &str) -> Option<usize> {
    key.strip_prefix(RECORD_KEY_PREFIX)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_required_field_accessors() {
        let record = SentimentRecord::new("TSLA", BULLISH, 0.25);
        assert_eq!(record.ticker(), Some("TSLA"));
        assert_eq!(record.sentiment(), Some("Bullish"));
        assert_eq!(record.sentiment_score(), Some(0.25));
    }

    #[test]
    fn test_missing_or_mistyped_fields() {
        let record = SentimentRecord::default()
            .with_field(FIELD_TICKER, 42)
            .with_field(FIELD_SENTIMENT_SCORE, "high");

        assert_eq!(record.ticker(), None);
        assert_eq!(record.sentiment(), None);
        assert_eq!(record.sentiment_score(), None);
    }

    #[test]
    fn test_integer_score_is_numeric() {
        let record = SentimentRecord::try_from(json!({
            "ticker": "GME",
            "sentiment": "Bearish",
            "sentiment_score": -1
        }))
        .unwrap();

        assert_eq!(record.sentiment_score(), Some(-1.0));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let json = r#"{"no_of_comments":179,"sentiment":"Bullish","sentiment_score":0.142,"ticker":"AMC"}"#;
        let record = SentimentRecord::from_json(json).unwrap();

        assert_eq!(record.get("no_of_comments"), Some(&json!(179)));

        let restored = SentimentRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = SentimentRecord::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, SentimentError::InvalidInput(_)));

        let err = SentimentRecord::from_json("not json").unwrap_err();
        assert!(matches!(err, SentimentError::Serialization(_)));
    }

    #[test]
    fn test_record_key() {
        assert_eq!(record_key(0), "Object:0");
        assert_eq!(record_key(17), "Object:17");
    }

    #[test]
    fn test_record_index() {
        assert_eq!(record_index("Object:3"), Some(3));
        assert_eq!(record_index("Object:abc"), None);
        assert_eq!(record_index("Other:3"), None);
        assert_eq!(record_index("Object:"), None);
    }

    proptest! {
        #[test]
        fn prop_key_index_inverse(index in 0usize..1_000_000) {
            prop_assert_eq!(record_index(&record_key(index)), Some(index));
        }
    }
}

//! 티커별 감성 조회.

use sentiment_core::SentimentRecord;

/// 티커가 일치하는 첫 번째 레코드의 감성 레이블을 반환합니다.
///
/// 중복 티커는 반복 순서상 첫 번째 레코드가 우선합니다. 없으면 `None`.
pub fn find_sentiment_for_ticker<'a>(
    records: &'a [SentimentRecord],
    ticker: &str,
) -> Option<&'a str> {
    records
        .iter()
        .find(|record| record.ticker() == Some(ticker))
        .and_then(SentimentRecord::sentiment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_core::{BEARISH, BULLISH};

    #[test]
    fn test_first_match_wins() {
        let records = vec![
            SentimentRecord::new("TSLA", BULLISH, 0.4),
            SentimentRecord::new("TSLA", BEARISH, -0.4),
        ];

        assert_eq!(find_sentiment_for_ticker(&records, "TSLA"), Some("Bullish"));
    }

    #[test]
    fn test_absent_ticker() {
        let records = vec![SentimentRecord::new("AMC", BULLISH, 0.1)];

        assert_eq!(find_sentiment_for_ticker(&records, "TSLA"), None);
        assert_eq!(find_sentiment_for_ticker(&[], "TSLA"), None);
    }

    #[test]
    fn test_ticker_match_is_exact() {
        let records = vec![SentimentRecord::new("tsla", BEARISH, -0.1)];
        assert_eq!(find_sentiment_for_ticker(&records, "TSLA"), None);
    }
}

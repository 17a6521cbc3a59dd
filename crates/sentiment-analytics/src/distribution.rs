//! 감성 분포 집계.

use sentiment_core::SentimentRecord;
use std::collections::BTreeMap;

/// 감성 레이블별 레코드 수를 셉니다.
///
/// `sentiment` 필드가 없거나 문자열이 아닌 레코드는 세지 않습니다.
pub fn distribution_counts(records: &[SentimentRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for sentiment in records.iter().filter_map(SentimentRecord::sentiment) {
        *counts.entry(sentiment.to_string()).or_insert(0) += 1;
    }
    counts
}

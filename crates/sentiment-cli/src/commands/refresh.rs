//! 소스 데이터를 가져와 캐시 스냅샷을 교체합니다.

use anyhow::Result;
use sentiment_core::SentimentRecord;
use sentiment_data::{DocumentStore, SentimentCache, SentimentSource};
use std::io::Write;
use tracing::info;

/// 소스에서 가져온 데이터를 출력하고 스냅샷을 교체합니다.
///
/// 소스 오류는 그대로 반환되어 실행을 종료시킵니다.
pub async fn refresh_snapshot<S: DocumentStore>(
    cache: &SentimentCache<S>,
    source: &dyn SentimentSource,
    out: &mut impl Write,
) -> Result<Vec<SentimentRecord>> {
    info!(source = source.name(), "Fetching sentiment data");
    let records = source.fetch_records().await?;

    writeln!(out, "Data fetched from API:")?;
    writeln!(out, "{}", serde_json::to_string(&records)?)?;

    let inserted = cache.refresh(&records).await?;
    writeln!(out, "\nInserted {} items into cache.", inserted)?;

    Ok(records)
}

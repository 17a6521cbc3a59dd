//! 스냅샷 리포트와 티커 조회.

use anyhow::{Context, Result};
use sentiment_analytics::{
    average_scores_by_category, distribution_counts, find_sentiment_for_ticker, BarChart,
    ChartSink, TextChartSink,
};
use sentiment_core::SentimentRecord;
use sentiment_data::{DocumentStore, SentimentCache};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 리포트 옵션.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// 감성을 조회할 티커
    pub ticker: String,
    /// 텍스트 차트 출력 여부
    pub chart: bool,
    /// 차트 데이터를 JSON으로 저장할 경로
    pub chart_json: Option<PathBuf>,
}

/// 레코드 목록에 대한 리포트를 출력합니다.
pub fn write_report(
    records: &[SentimentRecord],
    options: &ReportOptions,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "\nData fetched from cache:")?;
    writeln!(out, "{}", serde_json::to_string(records)?)?;

    let chart = BarChart::from_distribution(&distribution_counts(records));
    if options.chart {
        writeln!(out)?;
        TextChartSink::new(&mut *out).render(&chart)?;
    }
    if let Some(path) = &options.chart_json {
        export_chart(&chart, path)?;
    }

    writeln!(out, "\nAggregate sentiment scores:")?;
    writeln!(out, "{}", average_scores_by_category(records))?;

    write_lookup(records, &options.ticker, out)
}

/// 캐시 스냅샷을 읽어 리포트를 출력합니다.
///
/// 스냅샷을 읽지 못하면 리포트 대신 안내 문구만 출력합니다.
pub async fn report_from_cache<S: DocumentStore>(
    cache: &SentimentCache<S>,
    options: &ReportOptions,
    out: &mut impl Write,
) -> Result<bool> {
    match cache.load_from_cache().await {
        Some(records) => {
            write_report(&records, options, out)?;
            Ok(true)
        }
        None => {
            writeln!(out, "\nNo cached data available.")?;
            Ok(false)
        }
    }
}

/// 캐시 스냅샷에서 한 티커의 감성을 조회합니다.
pub async fn lookup_from_cache<S: DocumentStore>(
    cache: &SentimentCache<S>,
    ticker: &str,
    out: &mut impl Write,
) -> Result<Option<String>> {
    let Some(records) = cache.load_from_cache().await else {
        writeln!(out, "No cached data available.")?;
        return Ok(None);
    };

    write_lookup(&records, ticker, out)?;
    Ok(find_sentiment_for_ticker(&records, ticker).map(str::to_string))
}

fn write_lookup(records: &[SentimentRecord], ticker: &str, out: &mut impl Write) -> Result<()> {
    match find_sentiment_for_ticker(records, ticker) {
        Some(sentiment) => writeln!(
            out,
            "\nSentiment associated with ticker '{}': {}",
            ticker, sentiment
        )?,
        None => writeln!(out, "\nSentiment associated with ticker '{}': not found", ticker)?,
    }
    Ok(())
}

fn export_chart(chart: &BarChart, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create chart file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, chart)?;
    writer.flush()?;

    if chart.is_empty() {
        warn!(path = %path.display(), "Exported empty chart");
    } else {
        info!(path = %path.display(), bars = chart.bars.len(), "Chart exported");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment_data::MemoryStore;

    fn options(ticker: &str) -> ReportOptions {
        ReportOptions {
            ticker: ticker.to_string(),
            chart: true,
            chart_json: None,
        }
    }

    fn records() -> Vec<SentimentRecord> {
        vec![
            SentimentRecord::new("TSLA", "Bullish", 2.0),
            SentimentRecord::new("AMC", "Bullish", 4.0),
            SentimentRecord::new("TSLA", "Bearish", -1.0),
        ]
    }

    #[test]
    fn test_write_report() {
        let mut out = Vec::new();
        write_report(&records(), &options("TSLA"), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Sentiment Analysis"));
        assert!(output.contains("Bullish Average: 3, Bearish Average: -1"));
        assert!(output.contains("Sentiment associated with ticker 'TSLA': Bullish"));
    }

    #[test]
    fn test_write_report_without_chart() {
        let mut opts = options("NIO");
        opts.chart = false;
        let mut out = Vec::new();
        write_report(&records(), &opts, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("Sentiment Analysis"));
        assert!(output.contains("Sentiment associated with ticker 'NIO': not found"));
    }

    #[test]
    fn test_chart_json_export() {
        let path = std::env::temp_dir().join(format!("sentiment-chart-{}.json", std::process::id()));
        let mut opts = options("TSLA");
        opts.chart = false;
        opts.chart_json = Some(path.clone());

        let mut out = Vec::new();
        write_report(&records(), &opts, &mut out).unwrap();

        let chart: BarChart =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.y_label, "Count");
    }

    #[tokio::test]
    async fn test_report_from_empty_cache() {
        let cache = SentimentCache::new(MemoryStore::new());
        let mut out = Vec::new();

        assert!(report_from_cache(&cache, &options("TSLA"), &mut out).await.unwrap());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Bullish Average: 0, Bearish Average: 0"));
    }

    #[tokio::test]
    async fn test_report_from_unreadable_cache() {
        let store = MemoryStore::new();
        store.set_document("Object:0", "\"scalar\"").await.unwrap();
        let cache = SentimentCache::new(store);
        let mut out = Vec::new();

        assert!(!report_from_cache(&cache, &options("TSLA"), &mut out).await.unwrap());
        assert!(String::from_utf8(out).unwrap().contains("No cached data available."));
    }

    #[tokio::test]
    async fn test_lookup_from_cache() {
        let cache = SentimentCache::new(MemoryStore::new());
        cache.refresh(&records()).await.unwrap();
        let mut out = Vec::new();

        let found = lookup_from_cache(&cache, "TSLA", &mut out).await.unwrap();
        assert_eq!(found.as_deref(), Some("Bullish"));

        let missing = lookup_from_cache(&cache, "GME", &mut out).await.unwrap();
        assert_eq!(missing, None);
    }
}

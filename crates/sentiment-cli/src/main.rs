//! 티커 감성 캐시 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 전체 사이클: 소스 → 캐시 새로고침 → 리포트
//! sentiment
//!
//! # Redis 없이 인메모리 저장소로 실행
//! sentiment run --dry-run --ticker GME
//!
//! # 캐시된 스냅샷으로 리포트만 출력
//! sentiment report --chart-json chart.json
//!
//! # 티커 하나 조회
//! sentiment lookup TSLA
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use sentiment_cli::commands::{
    health::check_health,
    refresh::refresh_snapshot,
    report::{lookup_from_cache, report_from_cache, write_report, ReportOptions},
};
use sentiment_core::{init_logging, AppConfig, LogConfig};
use sentiment_data::{
    DocumentStore, HttpSentimentSource, MemoryStore, RedisDocumentStore, SentimentCache,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "sentiment")]
#[command(about = "Ticker sentiment cache - fetch, cache and summarize social sentiment", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 (기본: config/default.toml, 없으면 기본값)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 전체 사이클 실행 (기본 명령)
    Run(RunArgs),

    /// 소스에서 가져와 Redis 스냅샷만 새로고침
    Refresh,

    /// 캐시된 스냅샷으로 리포트 출력
    Report(ReportArgs),

    /// 캐시된 스냅샷에서 티커 감성 조회
    Lookup {
        /// 티커 (예: TSLA)
        ticker: String,
    },

    /// 저장소 상태 확인
    Health,
}

#[derive(Args, Default)]
struct RunArgs {
    /// 인메모리 저장소 사용 (Redis 미사용)
    #[arg(long, default_value = "false")]
    dry_run: bool,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Args, Default)]
struct ReportArgs {
    /// 조회할 티커 (기본: report.ticker 설정)
    #[arg(short, long)]
    ticker: Option<String>,

    /// 텍스트 차트 생략
    #[arg(long, default_value = "false")]
    no_chart: bool,

    /// 차트 데이터를 JSON 파일로 저장
    #[arg(long)]
    chart_json: Option<PathBuf>,
}

impl ReportArgs {
    fn options(self, config: &AppConfig) -> ReportOptions {
        ReportOptions {
            ticker: self.ticker.unwrap_or_else(|| config.report.ticker.clone()),
            chart: config.report.chart && !self.no_chart,
            chart_json: self.chart_json,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::load_default().context("failed to load default config")?,
    };
    config.validate()?;
    Ok(config)
}

async fn connect_store(config: &AppConfig) -> Result<RedisDocumentStore> {
    RedisDocumentStore::connect(&config.redis)
        .await
        .with_context(|| format!("failed to connect to {}", config.redis.url))
}

/// 새로고침 후 같은 저장소에서 다시 읽어 리포트를 출력합니다.
async fn run_cycle<S: DocumentStore>(
    cache: &SentimentCache<S>,
    config: &AppConfig,
    options: &ReportOptions,
    out: &mut impl Write,
) -> Result<()> {
    let source = HttpSentimentSource::new(&config.source)?;
    refresh_snapshot(cache, &source, out).await?;
    report_from_cache(cache, options, out).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    let log_config = LogConfig::from_settings(&config.logging).map_err(|e| anyhow!(e))?;
    init_logging(log_config).map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    let mut out = io::stdout();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            let options = args.report.options(&config);
            if args.dry_run {
                warn!("Dry run: using in-memory store");
                let cache = SentimentCache::new(MemoryStore::new());
                run_cycle(&cache, &config, &options, &mut out).await?;
            } else {
                let cache = SentimentCache::new(connect_store(&config).await?);
                run_cycle(&cache, &config, &options, &mut out).await?;
            }
        }

        Commands::Refresh => {
            let source = HttpSentimentSource::new(&config.source)?;
            let cache = SentimentCache::new(connect_store(&config).await?);
            refresh_snapshot(&cache, &source, &mut out).await?;
        }

        Commands::Report(args) => {
            let options = args.options(&config);
            let cache = SentimentCache::new(connect_store(&config).await?);
            report_from_cache(&cache, &options, &mut out).await?;
        }

        Commands::Lookup { ticker } => {
            let cache = SentimentCache::new(connect_store(&config).await?);
            lookup_from_cache(&cache, &ticker, &mut out).await?;
        }

        Commands::Health => {
            let healthy = match connect_store(&config).await {
                Ok(store) => check_health(&store, &mut out).await?,
                Err(e) => {
                    warn!(error = %e, "Store connection failed");
                    writeln!(out, "store: unavailable")?;
                    false
                }
            };
            if !healthy {
                return Err(anyhow!("store is unavailable"));
            }
        }
    }

    info!("Done");
    Ok(())
}

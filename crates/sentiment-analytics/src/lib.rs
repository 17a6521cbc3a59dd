//! # Sentiment Analytics
//!
//! 스냅샷 레코드에 대한 읽기 전용 분석을 제공합니다.
//!
//! - [`distribution`]: 감성 레이블별 레코드 수
//! - [`aggregate`]: 강세/약세 평균 점수
//! - [`lookup`]: 티커별 감성 조회
//! - [`chart`]: 분포 막대 차트 모델과 텍스트 렌더러

pub mod aggregate;
pub mod chart;
pub mod distribution;
pub mod lookup;

pub use aggregate::{average_scores_by_category, SentimentAverages};
pub use chart::{Bar, BarChart, ChartSink, TextChartSink};
pub use distribution::distribution_counts;
pub use lookup::find_sentiment_for_ticker;

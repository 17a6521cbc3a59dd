//! 감성 분포 차트.
//!
//! 분포 집계 결과를 막대 차트 모델로 만들고 출력 대상(sink)에 넘깁니다.
//! 모델은 JSON으로 직렬화하여 대시보드 등 외부 렌더러에 넘길 수도 있습니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// 차트 제목
pub const CHART_TITLE: &str = "Sentiment Analysis";
/// X축 레이블
pub const X_LABEL: &str = "Sentiment";
/// Y축 레이블
pub const Y_LABEL: &str = "Count";

/// 막대 하나.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// 카테고리 레이블
    pub label: String,
    /// 높이
    pub count: usize,
}

/// 막대 차트 데이터.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarChart {
    /// 차트 제목
    pub title: String,
    /// X축 레이블
    pub x_label: String,
    /// Y축 레이블
    pub y_label: String,
    /// 카테고리 순(사전순) 막대 목록
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// 감성 분포로부터 차트를 생성합니다.
    pub fn from_distribution(counts: &BTreeMap<String, usize>) -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            bars: counts
                .iter()
                .map(|(label, count)| Bar {
                    label: label.clone(),
                    count: *count,
                })
                .collect(),
        }
    }

    /// 가장 높은 막대의 값.
    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|bar| bar.count).max().unwrap_or(0)
    }

    /// 막대가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// 차트 출력 대상.
pub trait ChartSink {
    /// 차트를 렌더링합니다. 표시 전용이며 결과값은 없습니다.
    fn render(&mut self, chart: &BarChart) -> io::Result<()>;
}

/// 텍스트 가로 막대 차트 렌더러.
///
/// ```text
/// Sentiment Analysis
/// Sentiment | Count
/// Bearish   | ############################ 14
/// Bullish   | ######################################## 20
/// ```
pub struct TextChartSink<W: Write> {
    writer: W,
    width: usize,
}

impl<W: Write> TextChartSink<W> {
    /// 기본 막대 폭은 40칸입니다.
    pub fn new(writer: W) -> Self {
        Self { writer, width: 40 }
    }

    /// 가장 긴 막대의 폭을 설정합니다.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// 내부 writer를 돌려받습니다.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn bar_length(&self, count: usize, max: usize) -> usize {
        if max == 0 || count == 0 {
            return 0;
        }
        // 0이 아닌 값은 최소 한 칸
        ((count * self.width + max / 2) / max).max(1)
    }
}

impl<W: Write> ChartSink for TextChartSink<W> {
    fn render(&mut self, chart: &BarChart) -> io::Result<()> {
        let label_width = chart
            .bars
            .iter()
            .map(|bar| bar.label.chars().count())
            .chain(std::iter::once(chart.x_label.chars().count()))
            .max()
            .unwrap_or(0);
        let max = chart.max_count();

        writeln!(self.writer, "{}", chart.title)?;
        writeln!(
            self.writer,
            "{:<width$} | {}",
            chart.x_label,
            chart.y_label,
            width = label_width
        )?;

        if chart.is_empty() {
            writeln!(self.writer, "(no data)")?;
        }

        for bar in &chart.bars {
            let length = self.bar_length(bar.count, max);
            writeln!(
                self.writer,
                "{:<width$} | {} {}",
                bar.label,
                "#".repeat(length),
                bar.count,
                width = label_width
            )?;
        }

        self.writer.flush()
    }
}

//! 강세/약세 평균 점수 집계.

use sentiment_core::{SentimentRecord, BEARISH, BULLISH};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// 카테고리별 평균 감성 점수.
///
/// 해당 카테고리 레코드가 없으면 평균은 `0.0`입니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentAverages {
    /// "Bullish" 레코드의 평균 점수
    pub bullish_average: f64,
    /// "Bearish" 레코드의 평균 점수
    pub bearish_average: f64,
}

impl fmt::Display for SentimentAverages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bullish Average: {}, Bearish Average: {}",
            self.bullish_average, self.bearish_average
        )
    }
}

/// 평균 계산용 누적기.
#[derive(Default)]
struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn value(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

/// "Bullish"/"Bearish" 레코드별 평균 `sentiment_score`를 계산합니다.
///
/// 다른 레이블과 점수가 숫자가 아닌 레코드는 제외합니다.
pub fn average_scores_by_category(records: &[SentimentRecord]) -> SentimentAverages {
    let mut bullish = Mean::default();
    let mut bearish = Mean::default();

    for record in records {
        let Some(score) = record.sentiment_score() else {
            continue;
        };
        match record.sentiment() {
            Some(BULLISH) => bullish.push(score),
            Some(BEARISH) => bearish.push(score),
            _ => {}
        }
    }

    debug!(
        bullish = bullish.count,
        bearish = bearish.count,
        "Aggregated sentiment scores"
    );

    SentimentAverages {
        bullish_average: bullish.value(),
        bearish_average: bearish.value(),
    }
}

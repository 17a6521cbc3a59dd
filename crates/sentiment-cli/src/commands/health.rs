//! 저장소 상태 점검.

use anyhow::Result;
use sentiment_data::DocumentStore;
use std::io::Write;
use tracing::{error, info};

/// 저장소에 PING을 보내 결과를 출력합니다.
pub async fn check_health<S: DocumentStore>(store: &S, out: &mut impl Write) -> Result<bool> {
    let healthy = match store.health_check().await {
        Ok(healthy) => healthy,
        Err(e) => {
            error!(error = %e, "Store health check failed");
            false
        }
    };

    if healthy {
        info!("Store is healthy");
        writeln!(out, "store: ok")?;
    } else {
        writeln!(out, "store: unavailable")?;
    }
    Ok(healthy)
}

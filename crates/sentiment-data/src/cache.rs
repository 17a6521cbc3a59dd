//! 감성 스냅샷 캐시.
//!
//! 저장소에는 항상 하나의 스냅샷만 존재합니다. 새로고침은 `Object:*` 키를
//! 모두 삭제한 뒤 입력 순서대로 `Object:<index>` 키에 다시 씁니다.
//! 삭제와 쓰기 사이에는 데이터가 없는 구간이 있습니다.

use crate::error::{DataError, Result};
use crate::source::SentimentSource;
use crate::storage::DocumentStore;
use sentiment_core::{record_index, record_key, SentimentRecord, RECORD_KEY_PREFIX};
use tracing::{debug, error, info, instrument, warn};

/// 저장소 위의 스냅샷 캐시.
#[derive(Debug, Clone)]
pub struct SentimentCache<S> {
    store: S,
}

impl<S: DocumentStore> SentimentCache<S> {
    /// 저장소를 감싸는 캐시를 생성합니다.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 내부 저장소를 가져옵니다.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// 예약 접두사 아래의 모든 키를 삭제합니다.
    ///
    /// 트랜잭션이 아니므로 도중에 실패하면 일부 키만 삭제된 상태로 남습니다.
    pub async fn clear_cache(&self) -> Result<usize> {
        let keys = self.store.keys(RECORD_KEY_PREFIX).await?;

        let mut deleted = 0;
        for key in &keys {
            if self.store.delete(key).await? {
                deleted += 1;
            }
        }

        debug!(deleted, "Cleared cached snapshot");
        Ok(deleted)
    }

    /// 스냅샷을 교체합니다.
    ///
    /// 저장소가 거부한 레코드는 경고 로그만 남기고 건너뜁니다. 반환값은
    /// 실제로 저장된 수가 아니라 입력 레코드 수입니다.
    #[instrument(skip(self, records), fields(requested = records.len()))]
    pub async fn refresh(&self, records: &[SentimentRecord]) -> Result<usize> {
        self.clear_cache().await?;

        let mut stored = 0;
        for (index, record) in records.iter().enumerate() {
            let key = record_key(index);
            let json = record.to_json()?;

            match self.store.set_document(&key, &json).await {
                Ok(()) => stored += 1,
                Err(e) if e.is_write_rejection() => {
                    warn!(key = %key, error = %e, "Skipping record rejected by store");
                }
                Err(e) => return Err(e),
            }
        }

        if stored < records.len() {
            warn!(
                stored,
                skipped = records.len() - stored,
                "Snapshot refreshed with skipped records"
            );
        } else {
            info!(stored, "Snapshot refreshed");
        }

        Ok(records.len())
    }

    /// 소스에서 가져온 뒤 스냅샷을 교체합니다.
    ///
    /// 소스 호출이 실패하면 기존 스냅샷은 그대로 남습니다.
    pub async fn refresh_from(&self, source: &dyn SentimentSource) -> Result<Vec<SentimentRecord>> {
        let records = source.fetch_records().await?;
        self.refresh(&records).await?;
        Ok(records)
    }

    /// 스냅샷을 읽어 옵니다.
    ///
    /// 키 열거, 문서 조회, 파싱 중 하나라도 실패하면 오류를 로그로 남기고
    /// 부분 결과 대신 `None`을 반환합니다. 결과는 위치 인덱스 오름차순입니다.
    pub async fn load_from_cache(&self) -> Option<Vec<SentimentRecord>> {
        match self.try_load().await {
            Ok(records) => {
                info!(count = records.len(), "Snapshot loaded from cache");
                Some(records)
            }
            Err(e) => {
                error!(error = %e, "Error retrieving snapshot from cache");
                None
            }
        }
    }

    async fn try_load(&self) -> Result<Vec<SentimentRecord>> {
        let mut keys = self
            .store
            .keys(RECORD_KEY_PREFIX)
            .await
            .map_err(|e| DataError::StoreReadFailure(e.to_string()))?;
        sort_snapshot_keys(&mut keys);

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let json = self
                .store
                .get_document(key)
                .await
                .map_err(|e| DataError::StoreReadFailure(e.to_string()))?
                .ok_or_else(|| DataError::StoreReadFailure(format!("{} has no document", key)))?;

            let record = SentimentRecord::from_json(&json)
                .map_err(|e| DataError::StoreReadFailure(format!("{}: {}", key, e)))?;
            records.push(record);
        }

        Ok(records)
    }
}

/// 위치 인덱스 순으로 정렬합니다. 인덱스가 없는 키는 뒤로 보냅니다.
fn sort_snapshot_keys(keys: &mut [String]) {
    keys.sort_by(|a, b| match (record_index(a), record_index(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_snapshot_keys() {
        let mut keys: Vec<String> = ["Object:10", "Object:x", "Object:2", "Object:0"]
            .iter()
            .map(|k| k.to_string())
            .collect();
        sort_snapshot_keys(&mut keys);

        assert_eq!(keys, vec!["Object:0", "Object:2", "Object:10", "Object:x"]);
    }
}

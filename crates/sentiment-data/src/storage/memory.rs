//! 인메모리 문서 저장소.

use super::DocumentStore;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 프로세스 내부 문서 저장소.
///
/// Redis JSON과 마찬가지로 JSON으로 파싱되지 않는 문서는 거부합니다.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// 빈 저장소를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 문서 수.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// 저장된 문서가 없는지 확인합니다.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn set_document(&self, key: &str, json: &str) -> Result<()> {
        if let Err(e) = serde_json::from_str::<serde_json::Value>(json) {
            return Err(DataError::StoreWriteRejected {
                key: key.to_string(),
                message: e.to_string(),
            });
        }

        self.documents
            .write()
            .await
            .insert(key.to_string(), json.to_string());
        Ok(())
    }

    async fn get_document(&self, key: &str) -> Result<Option<String>> {
        Ok(self.documents.read().await.get(key).cloned())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.documents.write().await.remove(key).is_some())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        let documents = self.documents.read().await;
        Ok(documents
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(true)
    }
}

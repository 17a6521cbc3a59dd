//! Redis JSON 문서 저장소.
//!
//! RedisJSON 모듈의 `JSON.SET` / `JSON.GET`으로 문서를 저장하고,
//! 키 열거와 삭제는 일반 `KEYS` / `DEL` 명령을 사용합니다.

use super::DocumentStore;
use crate::error::{DataError, Result};
use async_trait::async_trait;
use redis::{aio::MultiplexedConnection, AsyncCommands, Client, ErrorKind, RedisError};
use sentiment_core::RedisConfig;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Redis 연결 래퍼.
#[derive(Clone)]
pub struct RedisDocumentStore {
    connection: Arc<RwLock<MultiplexedConnection>>,
    url: String,
}

impl std::fmt::Debug for RedisDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisDocumentStore")
            .field("url", &self.url)
            .field("connection", &"<MultiplexedConnection>")
            .finish()
    }
}

impl RedisDocumentStore {
    /// 새로운 Redis 연결을 생성합니다.
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        info!("Connecting to Redis...");

        let client =
            Client::open(config.url.as_str()).map_err(|e| DataError::CacheError(e.to_string()))?;

        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| DataError::CacheError(e.to_string()))?;

        info!("Redis connection established");

        Ok(Self {
            connection: Arc::new(RwLock::new(connection)),
            url: config.url.clone(),
        })
    }

    /// 접두사에 해당하는 `KEYS` 패턴.
    fn key_pattern(prefix: &str) -> String {
        format!("{}*", prefix)
    }

    /// 서버가 응답으로 거부한 쓰기는 개별 문서 오류로 분류합니다.
    fn write_error(key: &str, err: RedisError) -> DataError {
        match err.kind() {
            ErrorKind::ResponseError | ErrorKind::ExtensionError => DataError::StoreWriteRejected {
                key: key.to_string(),
                message: err.to_string(),
            },
            _ => DataError::CacheError(err.to_string()),
        }
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn set_document(&self, key: &str, json: &str) -> Result<()> {
        let mut conn = self.connection.write().await;
        let _: () = redis::cmd("JSON.SET")
            .arg(key)
            .arg(".")
            .arg(json)
            .query_async(&mut *conn)
            .await
            .map_err(|e| Self::write_error(key, e))?;

        debug!(key = key, "JSON.SET");
        Ok(())
    }

    async fn get_document(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.connection.write().await;
        let value: Option<String> = redis::cmd("JSON.GET")
            .arg(key)
            .query_async(&mut *conn)
            .await
            .map_err(|e| DataError::CacheError(e.to_string()))?;

        Ok(value)
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.connection.write().await;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| DataError::CacheError(e.to_string()))?;

        Ok(deleted > 0)
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        let mut conn = self.connection.write().await;
        let keys: Vec<String> = conn
            .keys(Self::key_pattern(prefix))
            .await
            .map_err(|e| DataError::CacheError(e.to_string()))?;

        Ok(keys)
    }

    async fn health_check(&self) -> Result<bool> {
        let mut conn = self.connection.write().await;
        let result: String = redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .map_err(|e| DataError::CacheError(e.to_string()))?;

        Ok(result == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_pattern() {
        assert_eq!(RedisDocumentStore::key_pattern("Object:"), "Object:*");
    }

    #[test]
    fn test_write_error_classification() {
        let err = RedisDocumentStore::write_error(
            "Object:1",
            RedisError::from((ErrorKind::ResponseError, "ERR invalid JSON")),
        );
        assert!(err.is_write_rejection());

        let err = RedisDocumentStore::write_error(
            "Object:1",
            RedisError::from((ErrorKind::IoError, "broken pipe")),
        );
        assert!(matches!(err, DataError::CacheError(_)));
    }

    #[tokio::test]
    #[ignore] // 실제 Redis (RedisJSON 모듈) 필요
    async fn test_redis_roundtrip_integration() {
        let store = RedisDocumentStore::connect(&RedisConfig::default())
            .await
            .expect("Redis 연결 실패");

        assert!(store.health_check().await.unwrap());

        store
            .set_document("ItTest:0", r#"{"ticker":"TSLA"}"#)
            .await
            .unwrap();
        let doc = store.get_document("ItTest:0").await.unwrap();
        assert_eq!(doc.as_deref(), Some(r#"{"ticker":"TSLA"}"#));

        assert!(store.keys("ItTest:").await.unwrap().contains(&"ItTest:0".to_string()));
        assert!(store.delete("ItTest:0").await.unwrap());
    }
}

//! 문서 저장소.
//!
//! - Redis JSON 저장소: 운영 환경용
//! - 인메모리 저장소: 드라이런 및 테스트용

pub mod memory;
pub mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisDocumentStore;

use crate::error::Result;
use async_trait::async_trait;

/// 키 기반 JSON 문서 저장소.
///
/// 문서는 JSON 텍스트로 주고받습니다. 파싱은 호출자의 몫입니다.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 문서를 저장합니다. 저장소가 문서를 거부하면 `StoreWriteRejected`를 반환합니다.
    async fn set_document(&self, key: &str, json: &str) -> Result<()>;

    /// 문서를 가져옵니다.
    async fn get_document(&self, key: &str) -> Result<Option<String>>;

    /// 키를 삭제합니다. 실제로 삭제되었으면 `true`.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// 접두사로 시작하는 모든 키를 나열합니다. 순서는 저장소가 정합니다.
    async fn keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// 저장소 상태를 확인합니다.
    async fn health_check(&self) -> Result<bool>;
}

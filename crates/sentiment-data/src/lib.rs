//! 감성 데이터 수집 및 캐싱.
//!
//! 이 crate는 다음을 제공합니다:
//! - 외부 감성 API 클라이언트
//! - 문서 저장소 추상화 (Redis JSON, 인메모리)
//! - 스냅샷 캐시 (전체 삭제 후 재적재, 읽기 복원)

pub mod cache;
pub mod error;
pub mod source;
pub mod storage;

pub use cache::SentimentCache;
pub use error::{DataError, Result};
pub use source::{HttpSentimentSource, SentimentSource};
pub use storage::{DocumentStore, MemoryStore, RedisDocumentStore};

//! # Sentiment Core
//!
//! 티커 감성 캐시 전반에서 사용하는 기본 타입을 제공합니다:
//! - 감성 레코드 모델 (느슨한 타입의 JSON 문서)
//! - 캐시 키 규칙 (`Object:<index>`)
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod record;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use record::*;

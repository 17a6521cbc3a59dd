//! 감성 캐시 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 소스 → 캐시 새로고침
//! - 캐시 스냅샷 리포트 (분포 차트, 평균 점수, 티커 조회)
//! - 저장소 상태 점검

pub mod commands;

//! 클레임 도메인 모델
//!
//! - [`claim`] - 단일 클레임과 타입/값 타입 상수
//! - [`claim_set`] - 순서 보존 + "없을 때만 추가" 의미를 갖는 클레임 집합

pub mod claim;
pub mod claim_set;

pub use claim::*;
pub use claim_set::*;

//! 프로필 공급자 호출 모델
//!
//! 서브젝트와 호스트가 전달하는 요청 컨텍스트를 정의합니다.

pub mod subject;
pub mod context;

pub use subject::*;
pub use context::*;

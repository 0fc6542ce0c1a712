//! 프로필 공급자 호스트 표면의 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

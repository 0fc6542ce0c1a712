//! Users Entity Module
//!
//! 사용자 디렉터리의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::UserRecord;
//!
//! let user = UserRecord::new("42", "alice")
//!     .with_display_name("Alice Kim")
//!     .with_roles(["user"]);
//! ```

pub mod user;

pub use user::*;

//! 사용자 디렉터리 모듈
//!
//! [`UserDirectory`](directory::UserDirectory) 인터페이스와 두 가지 구현체를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{InMemoryUserDirectory, UserDirectory};
//!
//! let directory = InMemoryUserDirectory::from_json_file("users.json")?;
//! let user = directory.resolve_user("42").await?;
//! ```

pub mod directory;
pub mod user_repo;
pub mod memory_repo;

pub use directory::*;
pub use user_repo::*;
pub use memory_repo::*;

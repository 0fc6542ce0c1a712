//! # Data Transfer Objects Module
//!
//! 호스트 HTTP 표면에서 주고받는 요청/응답 구조체를 정의합니다.
//! 요청 DTO는 `validator`로 검증한 뒤 도메인 컨텍스트로 변환됩니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::profile::ProfileDataRequest;
//!
//! let request: ProfileDataRequest = serde_json::from_str(body)?;
//! request.validate()?;
//! let context = request.into_context();
//! ```

pub mod profile;

pub use profile::*;

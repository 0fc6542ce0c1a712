//! 프로필 공급자 서비스 모듈
//!
//! 토큰 발급 시 클레임 보강과 활성 상태 판정을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::profile::{ProfileProvider, ProfileService};
//!
//! let service = ProfileService::from_env();
//! let mut context = ProfileDataRequestContext::new(subject, "UserInfoEndpoint");
//! service.get_profile_data(directory.as_ref(), &mut context).await?;
//! ```

pub mod profile_service;

pub use profile_service::*;

//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! # Features
//!
//! - 토큰 발급 시 서브젝트 클레임 보강 (username, name, birthdate, picture, social_number, role)
//! - 잠금 상태와 관리자 역할에 기반한 활성 판정
//! - 사용자 디렉터리는 호출마다 `&dyn UserDirectory`로 주입
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::profile::ProfileService;
//!
//! let service = ProfileService::from_env();
//! let active = service.check_active(directory.as_ref(), "42").await?;
//! ```

pub mod profile;

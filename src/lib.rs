//! SSO 프로필 공급자 서비스
//!
//! 토큰 발급 시점에 호스트 아이덴티티 서버가 호출하는 프로필 데이터 공급자입니다.
//! 서브젝트의 클레임 집합을 사용자 디렉터리 정보로 보강하고,
//! 인증된 서브젝트가 토큰을 받을 수 있는 활성 상태인지 판정합니다.
//!
//! # Features
//!
//! - **클레임 보강**: username, name, birthdate, picture, social_number, role
//! - **활성 판정**: 잠금 정책 + 관리자 역할 예외
//! - **디렉터리 백엔드**: MongoDB 또는 메모리 (시드 파일)
//! - **호스트 인증**: 공유 API 키 미들웨어
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /health, /api/v1/profile/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증, 컨텍스트 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ ProfileService  │ ← 클레임 보강 / 활성 판정
//! └─────────────────┘
//!          │  &dyn UserDirectory
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB / Memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use sso_profile_service::domain::models::profile::Subject;
//! use sso_profile_service::repositories::users::InMemoryUserDirectory;
//! use sso_profile_service::services::profile::ProfileService;
//!
//! let directory = InMemoryUserDirectory::from_json_file("users.json")?;
//! let service = ProfileService::from_env();
//!
//! let claims = service
//!     .enrich_claims(&directory, &Subject::new("bob-id", vec![]), service.options().default_locale)
//!     .await?;
//! let active = service.check_active(&directory, "bob-id").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

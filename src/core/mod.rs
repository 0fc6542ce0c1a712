//! # Core Module
//!
//! 애플리케이션 조립에 필요한 핵심 구성 요소를 제공합니다.
//!
//! ### [`state`] - 공유 애플리케이션 상태
//! - **AppState**: 사용자 디렉터리 + 프로필 서비스
//! - **백엔드 선택**: `DIRECTORY_BACKEND`에 따라 MongoDB 또는 메모리 디렉터리 구성
//!
//! 서비스는 디렉터리를 직접 보관하지 않으며, 핸들러가 `AppState`에서 꺼내
//! 각 연산에 `&dyn UserDirectory`로 넘깁니다.
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::core::AppState;
//!
//! let state = web::Data::new(AppState::from_env().await?);
//! App::new().app_data(state.clone()).configure(configure_all_routes);
//! ```

pub mod state;

pub use state::*;

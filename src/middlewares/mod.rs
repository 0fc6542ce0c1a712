//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### API 키 미들웨어 (ApiKeyMiddleware)
//! - 호스트 아이덴티티 서버와 공유하는 API 키 검증
//! - `Authorization: Bearer <key>` 또는 `X-Api-Key` 헤더 지원
//! - 키가 설정되지 않으면 통과
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::ApiKeyMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/profile")
//!             .wrap(ApiKeyMiddleware::from_env())
//!             .service(handlers::profile::get_profile_data)
//!     )
//! ```

pub mod api_key_middleware;
mod api_key_inner;

// 미들웨어 재export
pub use api_key_middleware::ApiKeyMiddleware;

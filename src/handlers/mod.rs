//! # HTTP Request Handlers Module
//!
//! 호스트 아이덴티티 서버가 호출하는 HTTP 엔드포인트 핸들러입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Host Identity Server (token issuance)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                             ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   ProfileService                                ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   UserDirectory (MongoDB / Memory)              ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! - **`profile`**: 클레임 보강 (`POST /claims`), 활성 판정 (`POST /active`)
//!
//! 입력 검증은 `validator`로 수행하고, 실패는 `AppError::ValidationError`(400)로 변환합니다.

pub mod profile;

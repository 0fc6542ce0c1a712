//! # Domain Models Module
//!
//! 비즈니스 로직에서 사용하는 값 객체와 호출 컨텍스트를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 사용자 레코드 (저장소와 매핑)
//! ├── models/       ← 이 모듈 (클레임, 서브젝트, 요청 컨텍스트)
//! └── dto/          ← HTTP 요청/응답 객체
//! ```
//!
//! ## 구성
//!
//! - [`claims`] - `Claim`, `ClaimSet`, 클레임 타입 상수
//! - [`profile`] - `Subject`, `ProfileDataRequestContext`, `IsActiveContext`

pub mod claims;
pub mod profile;

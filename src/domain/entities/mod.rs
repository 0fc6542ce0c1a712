//! # Domain Entities Module
//!
//! 사용자 디렉터리 저장소와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! - `UserRecord`: 프로필 보강에 쓰이는 도메인 표현 (JSON 시드와 호환)
//! - `UserDocument`: MongoDB 문서 표현 (BSON DateTime 사용)

pub mod users;

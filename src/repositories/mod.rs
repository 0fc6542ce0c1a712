//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 프로필 서비스가 소비하는 사용자 디렉터리 구현을 제공합니다.
//!
//! # Features
//!
//! - `UserDirectory` trait: 서브젝트 조회, 역할 멤버십, 주체 클레임 도출
//! - MongoDB 기반 `UserRepository`
//! - 개발/테스트용 `InMemoryUserDirectory`

pub mod users;

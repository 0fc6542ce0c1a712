//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 프로필 보강과 활성 판정에 쓰이는
//! 데이터 구조를 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 사용자 레코드 (MongoDB 문서 / JSON 시드)
//! ├── DTOs          - 호스트 HTTP 요청/응답
//! └── Models        - 클레임, 서브젝트, 프로필 요청 컨텍스트
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (User Directory: MongoDB / Memory)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{UserDocument, UserRecord};
pub use models::claims::{Claim, ClaimSet};
pub use models::profile::{IsActiveContext, ProfileDataRequestContext, Subject};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_reexports_resolve_to_models() {
        let subject = Subject::new("42", vec![Claim::new("sub", "42")]);
        let context = ProfileDataRequestContext::new(subject, "UserInfoEndpoint");
        let record = UserRecord::new("42", "alice");

        assert_eq!(context.subject.id, record.id);
        assert!(ClaimSet::from(context.subject.claims).contains("sub", "42"));
        assert!(dto::ProfileDataResponse { subject_id: "42".into(), claims: vec![] }.claims.is_empty());
    }
}

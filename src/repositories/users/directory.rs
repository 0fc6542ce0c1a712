//! # 사용자 디렉터리 인터페이스
//!
//! 프로필 서비스가 소비하는 유일한 외부 협력자입니다.
//! 서브젝트 조회, 역할 멤버십, 잠금 상태를 제공합니다.
//!
//! ## 구현체
//!
//! - [`UserRepository`](super::user_repo::UserRepository) - MongoDB 기반
//! - [`InMemoryUserDirectory`](super::memory_repo::InMemoryUserDirectory) - 프로세스 내 메모리
//!
//! 서비스는 디렉터리를 필드로 보관하지 않고 각 연산에 `&dyn UserDirectory`로 전달받습니다.

use async_trait::async_trait;
use crate::domain::entities::users::UserRecord;
use crate::domain::models::claims::{claim_types, Claim};
use crate::errors::AppResult;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 서브젝트 식별자로 사용자 레코드를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 서브젝트의 레코드가 없는 경우
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn resolve_user(&self, subject_id: &str) -> AppResult<UserRecord>;

    /// 사용자의 역할 멤버십을 조회합니다.
    async fn get_roles(&self, user: &UserRecord) -> AppResult<Vec<String>>;

    /// 사용자가 특정 역할에 속하는지 확인합니다.
    async fn is_in_role(&self, user: &UserRecord, role: &str) -> AppResult<bool>;

    /// 사용자 레코드에서 주체(principal) 클레임을 도출합니다.
    ///
    /// 기본 구현은 `sub`, 이메일(있는 경우), 저장된 사용자 클레임 순서입니다.
    async fn principal_claims(&self, user: &UserRecord) -> AppResult<Vec<Claim>> {
        let mut claims = Vec::with_capacity(user.claims.len() + 2);
        claims.push(Claim::new(claim_types::SUBJECT, user.id.clone()));

        if let Some(email) = user.email.as_deref().filter(|e| !e.trim().is_empty()) {
            claims.push(Claim::new(claim_types::EMAIL, email));
        }

        claims.extend(user.claims.iter().cloned());
        Ok(claims)
    }
}

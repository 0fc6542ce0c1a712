//! 인증 서브젝트
//!
//! 상위 인증 단계가 첨부한 클레임 시퀀스를 가진 인증 주체입니다.

use serde::{Deserialize, Serialize};
use crate::domain::models::claims::{claim_types, Claim};
use crate::errors::AppError;

/// 토큰 발급 대상 주체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// 사용자 레코드와 대응되는 불투명 식별자 (`sub`)
    pub id: String,
    /// 인증 단계에서 부착된 클레임 (타입 중복 허용)
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl Subject {
    pub fn new(id: impl Into<String>, claims: Vec<Claim>) -> Self {
        Self { id: id.into(), claims }
    }

    /// `sub` 클레임에서 식별자를 꺼내 서브젝트를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `sub` 클레임이 없거나 비어있는 경우
    pub fn from_claims(claims: Vec<Claim>) -> Result<Self, AppError> {
        let id = claims
            .iter()
            .find(|claim| claim.is_type(claim_types::SUBJECT))
            .map(|claim| claim.value.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::ValidationError("subject has no 'sub' claim".to_string()))?;

        Ok(Self { id, claims })
    }
}

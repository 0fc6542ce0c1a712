//! 프로필 공급자 HTTP 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::models::claims::Claim;

/// 공통 API 응답 래퍼
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// 실패 응답 (`data` 없음)
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// 발급 클레임 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileDataResponse {
    pub subject_id: String,
    pub claims: Vec<Claim>,
}

/// 활성 상태 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct IsActiveResponse {
    pub subject_id: String,
    pub is_active: bool,
}

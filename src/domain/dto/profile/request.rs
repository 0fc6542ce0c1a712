//! 프로필 공급자 HTTP 요청 DTO

use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::config::DateLocale;
use crate::domain::models::claims::Claim;
use crate::domain::models::profile::{IsActiveContext, ProfileDataRequestContext, Subject};
use crate::utils::string_utils::{deserialize_optional_string, is_valid_string};

fn default_caller() -> String {
    "Unknown".to_string()
}

/// 공백만으로 이루어진 서브젝트 ID 거부
fn validate_subject_id(subject_id: &str) -> Result<(), ValidationError> {
    if !is_valid_string(subject_id) {
        let mut error = ValidationError::new("blank_subject_id");
        error.message = Some("subject_id는 공백일 수 없습니다".into());
        return Err(error);
    }

    Ok(())
}

/// `POST /api/v1/profile/claims` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct ProfileDataRequest {
    #[validate(length(min = 1, max = 256, message = "subject_id는 1-256자 사이여야 합니다"))]
    #[validate(custom(function = "validate_subject_id"))]
    pub subject_id: String,
    /// 상위 인증 단계가 부착한 서브젝트 클레임
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default)]
    pub requested_claim_types: Option<Vec<String>>,
    /// 생년월일 형식 로케일 태그 (예: "ko-KR")
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub locale: Option<String>,
    #[serde(default = "default_caller")]
    pub caller: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub client_id: Option<String>,
}

impl ProfileDataRequest {
    pub fn into_context(self) -> ProfileDataRequestContext {
        let subject = Subject::new(self.subject_id.trim(), self.claims);

        ProfileDataRequestContext {
            subject,
            caller: self.caller,
            client_id: self.client_id,
            requested_claim_types: self.requested_claim_types,
            locale: self.locale.as_deref().map(DateLocale::parse),
            issued_claims: Vec::new(),
        }
    }
}

/// `POST /api/v1/profile/active` 요청 본문
#[derive(Debug, Deserialize, Validate)]
pub struct IsActiveRequest {
    #[validate(length(min = 1, max = 256, message = "subject_id는 1-256자 사이여야 합니다"))]
    #[validate(custom(function = "validate_subject_id"))]
    pub subject_id: String,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default = "default_caller")]
    pub caller: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub client_id: Option<String>,
}

impl IsActiveRequest {
    pub fn into_context(self) -> IsActiveContext {
        IsActiveContext {
            subject: Subject::new(self.subject_id.trim(), self.claims),
            caller: self.caller,
            client_id: self.client_id,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_request_defaults() {
        let request: ProfileDataRequest = serde_json::from_str(r#"{"subject_id": " 42 ", "locale": "  "}"#).unwrap();
        assert!(request.validate().is_ok());

        let context = request.into_context();
        assert_eq!(context.subject.id, "42");
        assert_eq!(context.caller, "Unknown");
        assert!(context.locale.is_none());
        assert!(context.requested_claim_types.is_none());
    }

    #[test]
    fn test_profile_request_locale_is_parsed() {
        let request: ProfileDataRequest = serde_json::from_str(
            r#"{"subject_id": "42", "locale": "de-DE", "caller": "UserInfoEndpoint"}"#,
        ).unwrap();

        let context = request.into_context();
        assert_eq!(context.locale, Some(DateLocale::DayMonthYearDotted));
        assert_eq!(context.caller, "UserInfoEndpoint");
    }

    #[test]
    fn test_blank_subject_id_fails_validation() {
        let profile: ProfileDataRequest = serde_json::from_str(r#"{"subject_id": "   "}"#).unwrap();
        let active: IsActiveRequest = serde_json::from_str(r#"{"subject_id": "\t "}"#).unwrap();

        let errors = profile.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("subject_id"));
        assert!(active.validate().is_err());
    }

    #[test]
    fn test_empty_subject_id_fails_validation() {
        let request: IsActiveRequest = serde_json::from_str(r#"{"subject_id": ""}"#).unwrap();

        assert!(request.validate().is_err());
    }
}

//! 클레임 타입 정의
//!
//! 발급 토큰에 포함되는 `(type, value, value_type)` 단위의 주장(assertion)입니다.

use serde::{Deserialize, Serialize};

/// 표준/애플리케이션 클레임 타입 이름
pub mod claim_types {
    pub const SUBJECT: &str = "sub";
    pub const USERNAME: &str = "username";
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PICTURE: &str = "picture";
    pub const BIRTHDATE: &str = "birthdate";
    pub const ROLE: &str = "role";
    pub const SOCIAL_NUMBER: &str = "social_number";
}

/// XML Schema 기반 클레임 값 타입 URI
pub mod claim_value_types {
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
}

fn default_value_type() -> String {
    claim_value_types::STRING.to_string()
}

/// 단일 클레임
///
/// JSON 표현에서는 `type` 필드명을 사용하며, `value_type`이 없으면 문자열 타입으로 간주합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub value: String,
    #[serde(default = "default_value_type")]
    pub value_type: String,
}

impl Claim {
    /// 문자열 값 타입의 클레임을 생성합니다.
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value_type(claim_type, value, claim_value_types::STRING)
    }

    /// 값 타입을 지정하여 클레임을 생성합니다.
    pub fn with_value_type(
        claim_type: impl Into<String>,
        value: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
            value_type: value_type.into(),
        }
    }

    pub fn is_type(&self, claim_type: &str) -> bool {
        self.claim_type == claim_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_defaults_to_string_value_type() {
        let claim = Claim::new(claim_types::NAME, "Alice");

        assert_eq!(claim.value_type, claim_value_types::STRING);
        assert!(claim.is_type("name"));
        assert!(!claim.is_type("username"));
    }

    #[test]
    fn test_claim_json_shape() {
        let claim: Claim = serde_json::from_str(r#"{"type": "role", "value": "admin"}"#).unwrap();
        assert_eq!(claim, Claim::new("role", "admin"));

        let json = serde_json::to_value(Claim::with_value_type("birthdate", "1990-03-07", claim_value_types::DATE)).unwrap();
        assert_eq!(json["type"], "birthdate");
        assert_eq!(json["value_type"], claim_value_types::DATE);
    }
}

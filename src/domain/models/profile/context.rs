//! 프로필 공급자 호출 컨텍스트
//!
//! 호스트 아이덴티티 서버가 프로필 공급자를 호출할 때 전달하는 요청 컨텍스트입니다.
//! 결과(발급 클레임, 활성 여부)는 컨텍스트에 기록되어 호스트로 되돌아갑니다.

use log::debug;
use crate::config::DateLocale;
use crate::domain::models::claims::Claim;
use super::subject::Subject;

/// 토큰 발급 시 프로필 데이터 요청 컨텍스트
#[derive(Debug, Clone)]
pub struct ProfileDataRequestContext {
    pub subject: Subject,
    /// 호출 지점 (예: "ClaimsProviderIdentityToken", "UserInfoEndpoint")
    pub caller: String,
    pub client_id: Option<String>,
    /// 요청된 클레임 타입. `None`이면 보강된 모든 클레임을 발급합니다.
    pub requested_claim_types: Option<Vec<String>>,
    /// 생년월일 형식 로케일. `None`이면 서비스 기본값을 사용합니다.
    pub locale: Option<DateLocale>,
    /// 발급될 클레임 (requested-claims sink)
    pub issued_claims: Vec<Claim>,
}

impl ProfileDataRequestContext {
    pub fn new(subject: Subject, caller: impl Into<String>) -> Self {
        Self {
            subject,
            caller: caller.into(),
            client_id: None,
            requested_claim_types: None,
            locale: None,
            issued_claims: Vec::new(),
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_requested_claim_types(mut self, claim_types: Vec<String>) -> Self {
        self.requested_claim_types = Some(claim_types);
        self
    }

    pub fn with_locale(mut self, locale: DateLocale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// 요청된 클레임 타입에 해당하는 클레임만 발급 목록에 추가합니다.
    pub fn add_requested_claims<I>(&mut self, claims: I)
    where
        I: IntoIterator<Item = Claim>,
    {
        match &self.requested_claim_types {
            Some(requested) => {
                let accepted = claims
                    .into_iter()
                    .filter(|claim| requested.iter().any(|t| t == &claim.claim_type));
                self.issued_claims.extend(accepted);
            }
            None => self.issued_claims.extend(claims),
        }
    }

    pub fn log_profile_request(&self) {
        debug!(
            "프로필 요청: subject={}, caller={}, client={:?}, requested={:?}",
            self.subject.id,
            self.caller,
            self.client_id,
            self.requested_claim_types
        );
    }

    pub fn log_issued_claims(&self) {
        let issued: Vec<&str> = self.issued_claims
            .iter()
            .map(|claim| claim.claim_type.as_str())
            .collect();

        debug!(
            "발급 클레임: subject={}, caller={}, types={:?}",
            self.subject.id,
            self.caller,
            issued
        );
    }
}

/// 활성 상태 확인 컨텍스트
#[derive(Debug, Clone)]
pub struct IsActiveContext {
    pub subject: Subject,
    pub caller: String,
    pub client_id: Option<String>,
    /// 판정 결과. 공급자가 덮어쓰기 전까지는 `true`
    pub is_active: bool,
}

impl IsActiveContext {
    pub fn new(subject: Subject, caller: impl Into<String>) -> Self {
        Self {
            subject,
            caller: caller.into(),
            client_id: None,
            is_active: true,
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject() -> Subject {
        Subject::new("1", Vec::new())
    }

    #[test]
    fn test_add_requested_claims_without_filter_issues_everything() {
        let mut context = ProfileDataRequestContext::new(subject(), "UserInfoEndpoint");
        context.add_requested_claims(vec![Claim::new("name", "a"), Claim::new("role", "r")]);

        assert_eq!(context.issued_claims.len(), 2);
    }

    #[test]
    fn test_add_requested_claims_filters_by_type() {
        let mut context = ProfileDataRequestContext::new(subject(), "ClaimsProviderIdentityToken")
            .with_requested_claim_types(vec!["name".to_string()]);
        context.add_requested_claims(vec![
            Claim::new("name", "a"),
            Claim::new("role", "r"),
            Claim::new("name", "b"),
        ]);

        let values: Vec<_> = context.issued_claims.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn test_is_active_context_starts_active() {
        let context = IsActiveContext::new(subject(), "AuthorizeEndpoint").with_client_id("spa");

        assert!(context.is_active);
        assert_eq!(context.client_id.as_deref(), Some("spa"));
    }
}

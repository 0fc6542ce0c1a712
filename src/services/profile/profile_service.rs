//! # 프로필 공급자 서비스 구현
//!
//! 토큰 발급 시점에 서브젝트의 클레임 집합을 보강하고,
//! 인증된 서브젝트가 여전히 "활성" 상태인지 판정합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! Host (token issuance)
//!     │  ProfileDataRequestContext / IsActiveContext
//!     ▼
//! ┌───────────────────────────────────────────────┐
//! │                 ProfileService                │
//! │  enrich_claims ─┬─ resolve_user               │
//! │                 ├─ principal_claims (merge)   │
//! │                 ├─ username/birthdate/name/   │
//! │                 │  picture/social_number      │
//! │                 └─ get_roles (role 없을 때만)   │
//! │  check_active ──┬─ resolve_user               │
//! │                 └─ is_in_role(admin)          │
//! └───────────────────────────────────────────────┘
//!     │  &dyn UserDirectory (호출마다 전달)
//!     ▼
//! UserRepository (MongoDB) / InMemoryUserDirectory
//! ```
//!
//! 서비스는 불변 설정(`ProfileOptions`)만 보유하므로 여러 워커에서 동시에 호출해도 안전합니다.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use crate::config::{DateLocale, LockoutPolicy, ProfileOptions};
use crate::domain::entities::users::UserRecord;
use crate::domain::models::claims::{claim_types, claim_value_types, Claim, ClaimSet};
use crate::domain::models::profile::{IsActiveContext, ProfileDataRequestContext, Subject};
use crate::errors::AppResult;
use crate::repositories::users::UserDirectory;
use crate::utils::string_utils::non_blank;

/// 호스트 아이덴티티 프레임워크가 호출하는 프로필 공급자 계약
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// 발급할 클레임을 계산하여 `context.issued_claims`에 기록합니다.
    async fn get_profile_data(
        &self,
        directory: &dyn UserDirectory,
        context: &mut ProfileDataRequestContext,
    ) -> AppResult<()>;

    /// 활성 여부를 판정하여 `context.is_active`에 기록합니다.
    async fn is_active(
        &self,
        directory: &dyn UserDirectory,
        context: &mut IsActiveContext,
    ) -> AppResult<()>;
}

/// 프로필 보강 서비스
#[derive(Debug, Clone, Default)]
pub struct ProfileService {
    options: ProfileOptions,
}

impl ProfileService {
    pub fn new(options: ProfileOptions) -> Self {
        Self { options }
    }

    /// 환경 변수 설정으로 서비스를 생성합니다.
    pub fn from_env() -> Self {
        Self::new(ProfileOptions::from_env())
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// 서브젝트의 클레임을 보강합니다.
    ///
    /// 기존 클레임과 디렉터리에서 도출한 주체 클레임을 병합한 뒤,
    /// 프로필 클레임을 "해당 타입이 없을 때만" 추가하고,
    /// `role` 클레임이 하나도 없으면 역할 멤버십을 덧붙입니다.
    /// 어떤 클레임도 제거하지 않으며, 결과를 다시 입력으로 넣어도 동일한 시퀀스가 나옵니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 서브젝트가 사용자 레코드로 해석되지 않는 경우
    /// * 디렉터리 호출에서 발생한 기타 에러
    pub async fn enrich_claims(
        &self,
        directory: &dyn UserDirectory,
        subject: &Subject,
        locale: DateLocale,
    ) -> AppResult<Vec<Claim>> {
        let user = directory.resolve_user(&subject.id).await?;
        let principal_claims = directory.principal_claims(&user).await?;

        let mut claims = ClaimSet::from_claims(subject.claims.iter().cloned());
        claims.merge(principal_claims);

        apply_profile_claims(&mut claims, &user, locale);

        if !claims.contains_type(claim_types::ROLE) {
            let roles = directory.get_roles(&user).await?;
            claims.extend(roles.into_iter().map(|role| Claim::new(claim_types::ROLE, role)));
        }

        Ok(claims.into_vec())
    }

    /// 현재 시각 기준으로 활성 여부를 판정합니다.
    pub async fn check_active(&self, directory: &dyn UserDirectory, subject_id: &str) -> AppResult<bool> {
        self.check_active_at(directory, subject_id, Utc::now()).await
    }

    /// 주어진 시각 기준으로 활성 여부를 판정합니다.
    ///
    /// 잠금 정책으로 비활성 판정이 나더라도 관리자 역할이면 활성으로 간주합니다.
    pub async fn check_active_at(
        &self,
        directory: &dyn UserDirectory,
        subject_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        let user = directory.resolve_user(subject_id).await?;

        if lockout_allows(self.options.lockout_policy, &user, now) {
            return Ok(true);
        }

        directory.is_in_role(&user, &self.options.admin_role).await
    }
}

/// 잠금 상태만으로 본 활성 여부
fn lockout_allows(policy: LockoutPolicy, user: &UserRecord, now: DateTime<Utc>) -> bool {
    let locked_until_future = user.lockout_enabled && user.lockout_end_after(now);

    match policy {
        LockoutPolicy::Legacy => locked_until_future,
        LockoutPolicy::Conventional => !locked_until_future,
    }
}

/// username, birthdate, name, picture, social_number 클레임을 없을 때만 추가
fn apply_profile_claims(claims: &mut ClaimSet, user: &UserRecord, locale: DateLocale) {
    claims.insert_if_absent(Claim::new(claim_types::USERNAME, user.username.as_str()));

    if let Some(birthdate) = &user.birthdate {
        claims.insert_if_absent(Claim::with_value_type(
            claim_types::BIRTHDATE,
            locale.format(birthdate),
            claim_value_types::DATE,
        ));
    }

    let name = non_blank(user.display_name.as_deref()).unwrap_or(user.username.as_str());
    claims.insert_if_absent(Claim::new(claim_types::NAME, name));

    if let Some(picture) = non_blank(user.picture.as_deref()) {
        claims.insert_if_absent(Claim::new(claim_types::PICTURE, picture));
    }

    if let Some(social_number) = non_blank(user.social_number.as_deref()) {
        claims.insert_if_absent(Claim::new(claim_types::SOCIAL_NUMBER, social_number));
    }
}

#[async_trait]
impl ProfileProvider for ProfileService {
    async fn get_profile_data(
        &self,
        directory: &dyn UserDirectory,
        context: &mut ProfileDataRequestContext,
    ) -> AppResult<()> {
        let locale = context.locale.unwrap_or(self.options.default_locale);
        let claims = self.enrich_claims(directory, &context.subject, locale).await?;

        context.log_profile_request();
        context.add_requested_claims(claims);
        context.log_issued_claims();

        Ok(())
    }

    async fn is_active(
        &self,
        directory: &dyn UserDirectory,
        context: &mut IsActiveContext,
    ) -> AppResult<()> {
        context.is_active = self.check_active(directory, &context.subject.id).await?;

        log::debug!(
            "활성 판정: subject={}, caller={}, active={}",
            context.subject.id,
            context.caller,
            context.is_active
        );

        Ok(())
    }
}

//! User Entity Implementation
//!
//! 사용자 디렉터리가 관리하는 사용자 레코드입니다.
//! 도메인 표현(`UserRecord`)과 MongoDB 문서 표현(`UserDocument`)을 함께 정의합니다.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};
use crate::domain::models::claims::Claim;

/// 사용자 레코드
///
/// 프로필 보강과 활성 판정에 필요한 속성만 가집니다.
/// JSON 시드 파일과 메모리 디렉터리에서도 이 형태를 그대로 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// 서브젝트 식별자 (`sub`)
    pub id: String,
    /// 사용자 이름
    pub username: String,
    /// 표시 이름
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// 프로필 이미지 URL
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub social_number: Option<String>,
    /// 잠금 기능 사용 여부
    #[serde(default)]
    pub lockout_enabled: bool,
    /// 잠금 만료 시각 (UTC)
    #[serde(default)]
    pub lockout_end: Option<DateTime<Utc>>,
    /// 역할 멤버십
    #[serde(default)]
    pub roles: Vec<String>,
    /// 사용자에게 저장된 추가 클레임
    #[serde(default)]
    pub claims: Vec<Claim>,
}

impl UserRecord {
    /// 필수 속성만으로 레코드를 생성합니다.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            display_name: None,
            email: None,
            birthdate: None,
            picture: None,
            social_number: None,
            lockout_enabled: false,
            lockout_end: None,
            roles: Vec::new(),
            claims: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_birthdate(mut self, birthdate: NaiveDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn with_social_number(mut self, social_number: impl Into<String>) -> Self {
        self.social_number = Some(social_number.into());
        self
    }

    pub fn with_lockout(mut self, enabled: bool, end: Option<DateTime<Utc>>) -> Self {
        self.lockout_enabled = enabled;
        self.lockout_end = end;
        self
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_claims(mut self, claims: Vec<Claim>) -> Self {
        self.claims = claims;
        self
    }

    /// 역할 보유 여부 (대소문자 구분)
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// 잠금 만료 시각이 `now`보다 미래인지 확인합니다.
    ///
    /// 만료 시각이 없으면 `now`가 속한 날짜의 00:00 UTC를 사용하므로 결과는 항상 `false`입니다.
    pub fn lockout_end_after(&self, now: DateTime<Utc>) -> bool {
        let start_of_today = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        self.lockout_end.unwrap_or(start_of_today) > now
    }
}

/// MongoDB `users` 컬렉션 문서
///
/// 날짜는 BSON DateTime으로 저장하며, 생년월일은 해당 날짜 00:00 UTC로 표현합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<bson::DateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_number: Option<String>,
    #[serde(default)]
    pub lockout_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lockout_end: Option<bson::DateTime>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub claims: Vec<Claim>,
}

fn to_chrono(value: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis())
}

fn to_bson(value: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}

impl From<UserDocument> for UserRecord {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            username: doc.username,
            display_name: doc.display_name,
            email: doc.email,
            birthdate: doc.birthdate.and_then(to_chrono).map(|dt| dt.date_naive()),
            picture: doc.picture,
            social_number: doc.social_number,
            lockout_enabled: doc.lockout_enabled,
            lockout_end: doc.lockout_end.and_then(to_chrono),
            roles: doc.roles,
            claims: doc.claims,
        }
    }
}

impl From<UserRecord> for UserDocument {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            display_name: record.display_name,
            email: record.email,
            birthdate: record
                .birthdate
                .map(|date| to_bson(date.and_time(NaiveTime::MIN).and_utc())),
            picture: record.picture,
            social_number: record.social_number,
            lockout_enabled: record.lockout_enabled,
            lockout_end: record.lockout_end.map(to_bson),
            roles: record.roles,
            claims: record.claims,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_lockout_end_defaults_to_start_of_today() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = UserRecord::new("1", "alice").with_lockout(true, None);

        assert!(!record.lockout_end_after(now));
    }

    #[test]
    fn test_lockout_end_in_future() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let locked = UserRecord::new("1", "alice").with_lockout(true, Some(now + Duration::hours(1)));
        let expired = UserRecord::new("2", "bob").with_lockout(true, Some(now - Duration::hours(1)));

        assert!(locked.lockout_end_after(now));
        assert!(!expired.lockout_end_after(now));
    }

    #[test]
    fn test_document_conversion_keeps_dates() {
        let lockout_end = Utc.with_ymd_and_hms(2030, 1, 2, 3, 4, 5).unwrap();
        let record = UserRecord::new("1", "alice")
            .with_birthdate(NaiveDate::from_ymd_opt(1990, 3, 7).unwrap())
            .with_lockout(true, Some(lockout_end))
            .with_roles(["Administrator"]);

        let restored = UserRecord::from(UserDocument::from(record.clone()));

        assert_eq!(restored, record);
    }

    #[test]
    fn test_record_from_seed_json() {
        let json = r#"{
            "id": "7",
            "username": "carol",
            "birthdate": "1985-12-24",
            "roles": ["user"]
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.birthdate, NaiveDate::from_ymd_opt(1985, 12, 24));
        assert!(record.has_role("user"));
        assert!(!record.lockout_enabled);
        assert!(record.claims.is_empty());
    }
}

//! # Profile Configuration Module
//!
//! 프로필 보강(claim enrichment)과 활성 상태 판정 정책에 관련된 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 잠금 상태와 무관하게 항상 활성으로 간주되는 역할
//! export PROFILE_ADMIN_ROLE="Administrator"
//!
//! # 활성 판정 정책: legacy (기본값) | conventional
//! export PROFILE_LOCKOUT_POLICY="legacy"
//!
//! # 생년월일 클레임의 기본 날짜 형식 로케일
//! export PROFILE_DATE_LOCALE="en-US"
//!
//! # 호스트 HTTP 표면의 공유 API 키 (미설정 시 인증 없음)
//! export PROFILE_API_KEY="change-me"
//! ```

use std::env;
use chrono::NaiveDate;
use log::warn;

/// 관리자 역할 기본값
pub const DEFAULT_ADMIN_ROLE: &str = "Administrator";

/// 활성 상태 판정 정책
///
/// `Legacy`는 "잠금이 활성화되어 있고 잠금 만료 시각이 미래이면 활성"으로 판정합니다.
/// 일반적인 잠금 의미와 반대로 읽히지만 기존 동작이므로 기본값으로 유지합니다.
/// `Conventional`은 명시적으로 설정한 경우에만 사용되며 "현재 잠겨 있지 않으면 활성"입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LockoutPolicy {
    #[default]
    Legacy,
    Conventional,
}

impl LockoutPolicy {
    /// 문자열에서 정책을 생성합니다. 알 수 없는 값은 `Legacy`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "conventional" | "standard" => LockoutPolicy::Conventional,
            _ => LockoutPolicy::Legacy,
        }
    }
}

/// 생년월일 클레임에 사용하는 날짜 형식 로케일
///
/// 로케일 태그(BCP-47, `en-US`, `ko_KR` 등)를 날짜 패턴으로 매핑합니다.
/// 지역이 없는 언어 태그(`en`, `de`)는 해당 언어의 대표 지역 패턴을 사용하고,
/// 알 수 없는 태그는 ISO-8601 형식으로 처리합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateLocale {
    /// `M/D/YYYY` (en-US)
    #[default]
    UnitedStates,
    /// `DD/MM/YYYY` (en-GB, fr-FR, es-ES, it-IT, pt-BR)
    DayMonthYear,
    /// `DD.MM.YYYY` (de-DE, ru-RU)
    DayMonthYearDotted,
    /// `YYYY. M. D.` (ko-KR)
    Korean,
    /// `YYYY/MM/DD` (ja-JP, zh-CN)
    YearMonthDay,
    /// `YYYY-MM-DD` (invariant)
    Iso,
}

impl DateLocale {
    /// 로케일 태그를 해석합니다.
    pub fn parse(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        match normalized.as_str() {
            "en-us" => return DateLocale::UnitedStates,
            "en-gb" | "en-au" | "en-nz" | "en-ie" | "en-in" => return DateLocale::DayMonthYear,
            "en-ca" | "sv-se" | "invariant" | "iso" | "" => return DateLocale::Iso,
            _ => {}
        }

        match language {
            "en" => DateLocale::UnitedStates,
            "fr" | "es" | "it" | "pt" | "nl" => DateLocale::DayMonthYear,
            "de" | "ru" | "pl" | "cs" | "fi" | "nb" => DateLocale::DayMonthYearDotted,
            "ko" => DateLocale::Korean,
            "ja" | "zh" => DateLocale::YearMonthDay,
            _ => DateLocale::Iso,
        }
    }

    /// chrono 포맷 패턴
    pub fn pattern(&self) -> &'static str {
        match self {
            DateLocale::UnitedStates => "%-m/%-d/%Y",
            DateLocale::DayMonthYear => "%d/%m/%Y",
            DateLocale::DayMonthYearDotted => "%d.%m.%Y",
            DateLocale::Korean => "%Y. %-m. %-d.",
            DateLocale::YearMonthDay => "%Y/%m/%d",
            DateLocale::Iso => "%Y-%m-%d",
        }
    }

    /// 날짜를 로케일 형식 문자열로 변환합니다.
    pub fn format(&self, date: &NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// 프로필 정책 설정 (환경 변수 접근자)
pub struct ProfileConfig;

impl ProfileConfig {
    /// 항상 활성으로 간주되는 역할 이름. 기본값: "Administrator"
    pub fn admin_role() -> String {
        env::var("PROFILE_ADMIN_ROLE")
            .ok()
            .filter(|role| !role.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_ROLE.to_string())
    }

    /// 활성 판정 정책. 기본값: `Legacy`
    pub fn lockout_policy() -> LockoutPolicy {
        let raw = env::var("PROFILE_LOCKOUT_POLICY").unwrap_or_default();
        let policy = LockoutPolicy::from_str(&raw);

        if !raw.is_empty() && policy == LockoutPolicy::Legacy && raw.trim().to_lowercase() != "legacy" {
            warn!("PROFILE_LOCKOUT_POLICY 값 '{}' 인식 불가. legacy 정책 사용", raw);
        }

        policy
    }

    /// 요청에 로케일이 없을 때 사용하는 날짜 로케일. 기본값: en-US
    pub fn date_locale() -> DateLocale {
        env::var("PROFILE_DATE_LOCALE")
            .map(|tag| DateLocale::parse(&tag))
            .unwrap_or_default()
    }

    /// 호스트 HTTP 표면의 공유 API 키
    pub fn api_key() -> Option<String> {
        env::var("PROFILE_API_KEY")
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// `ProfileService`가 사용하는 불변 설정 스냅샷
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOptions {
    pub admin_role: String,
    pub lockout_policy: LockoutPolicy,
    pub default_locale: DateLocale,
}

impl ProfileOptions {
    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self {
            admin_role: ProfileConfig::admin_role(),
            lockout_policy: ProfileConfig::lockout_policy(),
            default_locale: ProfileConfig::date_locale(),
        }
    }
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            admin_role: DEFAULT_ADMIN_ROLE.to_string(),
            lockout_policy: LockoutPolicy::Legacy,
            default_locale: DateLocale::UnitedStates,
        }
    }
}

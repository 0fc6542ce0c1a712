//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 사용자 디렉터리 백엔드 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// 프로덕션 환경인지 확인
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Returns
    ///
    /// 포트 번호. 기본값: 8080
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Returns
    ///
    /// 호스트 주소. 기본값: "0.0.0.0" (모든 인터페이스)
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 디렉터리 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum DirectoryBackend {
    /// MongoDB `users` 컬렉션
    MongoDb,
    /// 프로세스 내 메모리 (개발/테스트용, 시드 파일로 채움)
    Memory,
}

impl DirectoryBackend {
    /// 문자열에서 DirectoryBackend를 생성합니다. 알 수 없는 값은 `MongoDb`.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => DirectoryBackend::Memory,
            _ => DirectoryBackend::MongoDb,
        }
    }
}

/// 사용자 디렉터리 설정
///
/// ## 환경 변수
/// - `DIRECTORY_BACKEND`: `mongodb` (기본값) 또는 `memory`
/// - `USER_SEED_FILE`: 사용자 레코드 JSON 파일 경로 (memory 초기 데이터, mongodb 시작 시 upsert)
/// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
/// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "sso_profile_dev")
/// - `USERS_COLLECTION`: 사용자 컬렉션 이름 (기본값: "users")
pub struct DirectoryConfig;

impl DirectoryConfig {
    pub fn backend() -> DirectoryBackend {
        DirectoryBackend::from_str(&env::var("DIRECTORY_BACKEND").unwrap_or_default())
    }

    pub fn seed_file() -> Option<String> {
        env::var("USER_SEED_FILE").ok().filter(|path| !path.trim().is_empty())
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "sso_profile_dev".to_string())
    }

    pub fn users_collection() -> String {
        env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string())
    }
}

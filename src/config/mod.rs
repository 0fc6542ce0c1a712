//! # Configuration Module
//!
//! 프로필 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 사용자 디렉터리 백엔드 설정
//! - [`profile_config`] - 관리자 역할, 활성 판정 정책, 날짜 로케일, API 키
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DirectoryConfig, ProfileOptions, ServerConfig};
//!
//! let bind = ServerConfig::bind_address();
//! let backend = DirectoryConfig::backend();
//! let options = ProfileOptions::from_env();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="production"      # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! export DIRECTORY_BACKEND="mongodb"   # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="sso_profile"
//! export USER_SEED_FILE="./users.json" # memory: 초기 데이터, mongodb: 시작 시 upsert
//!
//! export PROFILE_ADMIN_ROLE="Administrator"
//! export PROFILE_LOCKOUT_POLICY="legacy"
//! export PROFILE_DATE_LOCALE="en-US"
//! export PROFILE_API_KEY="shared-secret"
//! ```

pub mod data_config;
pub mod profile_config;

pub use data_config::*;
pub use profile_config::*;

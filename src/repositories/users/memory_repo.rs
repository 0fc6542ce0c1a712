//! # 메모리 사용자 디렉터리
//!
//! 개발 환경과 테스트에서 사용하는 프로세스 내 사용자 디렉터리입니다.
//! `USER_SEED_FILE`로 지정한 JSON 배열(`UserRecord` 형식)에서 초기 데이터를 읽을 수 있습니다.
//!
//! ```json
//! [
//!   { "id": "1", "username": "alice", "display_name": "Alice", "roles": ["Administrator"] },
//!   { "id": "2", "username": "bob", "birthdate": "1990-03-07", "lockout_enabled": true }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;
use async_trait::async_trait;
use log::{info, warn};
use crate::domain::entities::users::UserRecord;
use crate::errors::{AppError, AppResult, ErrorContext};
use super::directory::UserDirectory;

#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let users = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Self { users: RwLock::new(users) }
    }

    /// JSON 시드 파일에서 디렉터리를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 파일을 읽을 수 없거나 형식이 잘못된 경우
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self::from_records(load_seed_records(path)?))
    }

    /// 레코드를 추가하거나 교체합니다.
    pub fn insert(&self, record: UserRecord) -> AppResult<()> {
        let mut users = self.users
            .write()
            .map_err(|e| AppError::InternalError(format!("user directory lock poisoned: {}", e)))?;

        users.insert(record.id.clone(), record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.users.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn find(&self, subject_id: &str) -> AppResult<Option<UserRecord>> {
        let users = self.users
            .read()
            .context("user directory lock poisoned")?;

        Ok(users.get(subject_id).cloned())
    }
}

/// JSON 배열 형식의 사용자 시드 파일을 읽습니다.
///
/// memory 백엔드 초기화와 MongoDB 컬렉션 시드에 함께 사용됩니다.
///
/// # Errors
///
/// * `AppError::ConfigError` - 파일을 읽을 수 없거나 형식이 잘못된 경우
pub fn load_seed_records(path: impl AsRef<Path>) -> AppResult<Vec<UserRecord>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("{} 읽기 실패: {}", path.display(), e)))?;

    let records: Vec<UserRecord> = serde_json::from_str(&raw)
        .map_err(|e| AppError::ConfigError(format!("{} 파싱 실패: {}", path.display(), e)))?;

    info!("📄 사용자 시드 로드: {} ({}명)", path.display(), records.len());
    Ok(records)
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn resolve_user(&self, subject_id: &str) -> AppResult<UserRecord> {
        match self.find(subject_id)? {
            Some(user) => Ok(user),
            None => {
                warn!("사용자 없음: subject={}", subject_id);
                Err(AppError::user_not_found(subject_id))
            }
        }
    }

    async fn get_roles(&self, user: &UserRecord) -> AppResult<Vec<String>> {
        Ok(self.find(&user.id)?
            .map(|stored| stored.roles)
            .unwrap_or_default())
    }

    async fn is_in_role(&self, user: &UserRecord, role: &str) -> AppResult<bool> {
        Ok(self.find(&user.id)?
            .map(|stored| stored.has_role(role))
            .unwrap_or(false))
    }
}

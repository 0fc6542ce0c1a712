//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션을 백엔드로 하는 사용자 디렉터리입니다.
//!
//! ## 문서 구조
//!
//! ```json
//! {
//!   "_id": "5f0c...",
//!   "username": "alice",
//!   "display_name": "Alice Kim",
//!   "birthdate": { "$date": "1990-03-07T00:00:00Z" },
//!   "lockout_enabled": true,
//!   "lockout_end": { "$date": "2030-01-01T00:00:00Z" },
//!   "roles": ["Administrator"],
//!   "claims": [{ "type": "tenant", "value": "acme" }]
//! }
//! ```
//!
//! 역할은 문서에 내장되어 있으며, `get_roles`/`is_in_role`은 항상 저장소를 다시 조회합니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::warn;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::Deserialize;
use crate::{
    config::DirectoryConfig,
    db::Database,
    domain::entities::users::{UserDocument, UserRecord},
    errors::{AppError, AppResult},
};
use super::directory::UserDirectory;

/// 역할 조회용 프로젝션
#[derive(Debug, Deserialize)]
struct RoleProjection {
    #[serde(default)]
    roles: Vec<String>,
}

/// MongoDB 사용자 디렉터리
///
/// ## 에러 처리
///
/// - **NotFound**: 서브젝트에 해당하는 문서가 없음
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// 컬렉션 이름 (`USERS_COLLECTION`, 기본값 "users")
    collection_name: String,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self::with_collection(db, DirectoryConfig::users_collection())
    }

    pub fn with_collection(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(&self.collection_name)
    }

    /// ID로 사용자 문서 조회
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<UserRecord>> {
        let document = self.collection::<UserDocument>()
            .find_one(doc! { "_id": id })
            .await?;

        Ok(document.map(UserRecord::from))
    }

    /// 사용자 문서 생성 또는 교체 (시드/관리 도구용)
    pub async fn upsert(&self, record: UserRecord) -> AppResult<()> {
        let id = record.id.clone();

        self.collection::<UserDocument>()
            .replace_one(doc! { "_id": id.as_str() }, UserDocument::from(record))
            .upsert(true)
            .await?;

        Ok(())
    }

    /// 시드 레코드를 컬렉션에 반영합니다. 같은 `_id` 문서는 교체됩니다.
    pub async fn seed(&self, records: Vec<UserRecord>) -> AppResult<usize> {
        let count = records.len();

        for record in records {
            self.upsert(record).await?;
        }

        Ok(count)
    }

    /// 컬렉션 인덱스 생성
    ///
    /// - `username_unique`: 사용자명 유니크 인덱스
    /// - `roles`: 역할 멤버십 조회 인덱스
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let roles_index = IndexModel::builder()
            .keys(doc! { "roles": 1 })
            .options(IndexOptions::builder()
                .name("roles".to_string())
                .build())
            .build();

        self.collection::<UserDocument>()
            .create_indexes([username_index, roles_index])
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserDirectory for UserRepository {
    async fn resolve_user(&self, subject_id: &str) -> AppResult<UserRecord> {
        self.find_by_id(subject_id)
            .await?
            .ok_or_else(|| {
                warn!("사용자 없음: subject={}, collection={}", subject_id, self.collection_name);
                AppError::user_not_found(subject_id)
            })
    }

    async fn get_roles(&self, user: &UserRecord) -> AppResult<Vec<String>> {
        let projection = self.collection::<RoleProjection>()
            .find_one(doc! { "_id": user.id.as_str() })
            .projection(doc! { "roles": 1, "_id": 0 })
            .await?;

        Ok(projection.map(|p| p.roles).unwrap_or_default())
    }

    async fn is_in_role(&self, user: &UserRecord, role: &str) -> AppResult<bool> {
        let count = self.collection::<UserDocument>()
            .count_documents(doc! { "_id": user.id.as_str(), "roles": role })
            .await?;

        Ok(count > 0)
    }
}

//! # Application State
//!
//! 워커 간에 공유되는 애플리케이션 상태입니다.
//! 사용자 디렉터리와 프로필 서비스를 한 번 생성하여 `web::Data<AppState>`로 핸들러에 전달합니다.
//!
//! ```text
//! main ── AppState::from_env() ──┬── Arc<dyn UserDirectory>  (MongoDB | Memory)
//!                                └── Arc<ProfileService>     (ProfileOptions)
//! ```

use std::sync::Arc;
use log::{info, warn};
use crate::config::{DirectoryBackend, DirectoryConfig};
use crate::db::Database;
use crate::errors::AppResult;
use crate::repositories::users::{load_seed_records, InMemoryUserDirectory, UserDirectory, UserRepository};
use crate::services::profile::ProfileService;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn UserDirectory>,
    pub profile_service: Arc<ProfileService>,
    pub backend: DirectoryBackend,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        profile_service: ProfileService,
        backend: DirectoryBackend,
    ) -> Self {
        Self {
            directory,
            profile_service: Arc::new(profile_service),
            backend,
        }
    }

    /// 환경 변수 설정에 따라 사용자 디렉터리와 프로필 서비스를 구성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
    /// * `AppError::ConfigError` - 시드 파일을 읽을 수 없는 경우
    pub async fn from_env() -> AppResult<Self> {
        let backend = DirectoryConfig::backend();
        let directory = build_directory(&backend).await?;
        let profile_service = ProfileService::from_env();

        info!(
            "⚙️ 프로필 설정: admin_role={}, lockout_policy={:?}, locale={:?}",
            profile_service.options().admin_role,
            profile_service.options().lockout_policy,
            profile_service.options().default_locale
        );

        Ok(Self::new(directory, profile_service, backend))
    }

    pub fn backend_name(&self) -> &'static str {
        match self.backend {
            DirectoryBackend::MongoDb => "MongoDB",
            DirectoryBackend::Memory => "Memory",
        }
    }
}

async fn build_directory(backend: &DirectoryBackend) -> AppResult<Arc<dyn UserDirectory>> {
    match backend {
        DirectoryBackend::MongoDb => {
            info!("📡 MongoDB 사용자 디렉터리 연결 중...");
            let database = Arc::new(Database::new().await?);
            let repository = UserRepository::new(database);
            repository.create_indexes().await?;

            if let Some(path) = DirectoryConfig::seed_file() {
                let seeded = repository.seed(load_seed_records(path)?).await?;
                info!("🌱 사용자 시드 반영: {}건", seeded);
            }

            info!("✅ 사용자 컬렉션 준비 완료: {}", repository.collection_name());

            Ok(Arc::new(repository))
        }
        DirectoryBackend::Memory => {
            let directory = match DirectoryConfig::seed_file() {
                Some(path) => InMemoryUserDirectory::from_json_file(path)?,
                None => {
                    warn!("USER_SEED_FILE 미설정: 빈 메모리 디렉터리로 시작합니다");
                    InMemoryUserDirectory::new()
                }
            };

            Ok(Arc::new(directory))
        }
    }
}

//! API 라우트 설정 모듈
//!
//! 프로필 공급자 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크 (인증 불필요)
//! - `POST /api/v1/profile/claims` - 발급 클레임 계산 (API 키)
//! - `POST /api/v1/profile/active` - 활성 여부 판정 (API 키)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::config::ProfileConfig;
use crate::core::AppState;
use crate::handlers;
use crate::middlewares::ApiKeyMiddleware;
use actix_web::{web, HttpResponse};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// API 키는 `PROFILE_API_KEY` 환경 변수에서 읽습니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_routes(cfg, ProfileConfig::api_key());
}

/// 지정한 API 키로 모든 라우트를 설정합니다 (`None`이면 인증 없음)
pub fn configure_routes(cfg: &mut web::ServiceConfig, api_key: Option<String>) {
    cfg.service(health_check);

    configure_profile_routes(cfg, api_key);
}

/// 프로필 공급자 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/profile/claims \
///   -H "Content-Type: application/json" \
///   -H "X-Api-Key: $PROFILE_API_KEY" \
///   -d '{"subject_id":"bob-id","locale":"ko-KR"}'
/// ```
fn configure_profile_routes(cfg: &mut web::ServiceConfig, api_key: Option<String>) {
    cfg.service(
        web::scope("/api/v1/profile")
            .wrap(ApiKeyMiddleware::new(api_key))
            .service(handlers::profile::get_profile_data)
            .service(handlers::profile::is_active)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "sso_profile_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "directory": "MongoDB",
///     "lockout_policy": "Legacy"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "sso_profile_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "directory": state.backend_name(),
            "lockout_policy": format!("{:?}", state.profile_service.options().lockout_policy),
        }
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use super::*;
    use crate::config::DirectoryBackend;
    use crate::domain::entities::users::UserRecord;
    use crate::repositories::users::InMemoryUserDirectory;
    use crate::services::profile::ProfileService;

    fn state() -> web::Data<AppState> {
        let directory = InMemoryUserDirectory::from_records(vec![UserRecord::new("1", "alice")]);

        web::Data::new(AppState::new(
            Arc::new(directory),
            ProfileService::default(),
            DirectoryBackend::Memory,
        ))
    }

    #[actix_web::test]
    async fn test_health_check_reports_directory() {
        let app = test::init_service(
            App::new().app_data(state()).configure(|cfg| configure_routes(cfg, None)),
        ).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "sso_profile_service");
        assert_eq!(body["features"]["directory"], "Memory");
    }

    #[actix_web::test]
    async fn test_profile_routes_require_api_key_when_configured() {
        let app = test::init_service(
            App::new()
                .app_data(state())
                .configure(|cfg| configure_routes(cfg, Some("host-secret".to_string()))),
        ).await;

        let anonymous = test::TestRequest::post()
            .uri("/api/v1/profile/claims")
            .set_json(serde_json::json!({ "subject_id": "1" }))
            .to_request();
        assert_eq!(test::call_service(&app, anonymous).await.status(), StatusCode::UNAUTHORIZED);

        let authorized = test::TestRequest::post()
            .uri("/api/v1/profile/claims")
            .insert_header(("X-Api-Key", "host-secret"))
            .set_json(serde_json::json!({ "subject_id": "1" }))
            .to_request();
        assert_eq!(test::call_service(&app, authorized).await.status(), StatusCode::OK);

        let health = test::TestRequest::get().uri("/health").to_request();
        assert!(test::call_service(&app, health).await.status().is_success());
    }
}

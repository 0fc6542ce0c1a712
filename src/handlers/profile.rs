//! # Profile Provider HTTP Handlers
//!
//! 호스트 아이덴티티 서버가 토큰 발급 중에 호출하는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/profile/claims` | 발급 클레임 계산 | 200 / 400 / 404 |
//! | `POST` | `/api/v1/profile/active` | 활성 여부 판정 | 200 / 400 / 404 |
//!
//! 두 핸들러 모두 `AppState`에서 디렉터리를 꺼내 서비스 연산에 그대로 넘깁니다.

use actix_web::{post, web, HttpResponse};
use log::info;
use validator::Validate;
use crate::core::AppState;
use crate::domain::dto::{
    ApiResponse, IsActiveRequest, IsActiveResponse, ProfileDataRequest, ProfileDataResponse,
};
use crate::errors::AppError;
use crate::services::profile::ProfileProvider;

/// 발급 클레임 계산 핸들러
///
/// # 요청
///
/// ```json
/// {
///   "subject_id": "bob-id",
///   "claims": [{ "type": "sub", "value": "bob-id" }],
///   "requested_claim_types": ["name", "birthdate"],
///   "locale": "ko-KR",
///   "caller": "ClaimsProviderAccessToken",
///   "client_id": "web-app"
/// }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "success": true,
///   "data": {
///     "subject_id": "bob-id",
///     "claims": [{ "type": "name", "value": "Bob Lee", "value_type": "http://www.w3.org/2001/XMLSchema#string" }]
///   },
///   "message": null
/// }
/// ```
#[post("/claims")]
pub async fn get_profile_data(
    state: web::Data<AppState>,
    payload: web::Json<ProfileDataRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut context = payload.into_inner().into_context();

    state.profile_service
        .get_profile_data(state.directory.as_ref(), &mut context)
        .await?;

    info!(
        "🎫 클레임 발급: subject={}, caller={}, count={}",
        context.subject.id,
        context.caller,
        context.issued_claims.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(ProfileDataResponse {
        subject_id: context.subject.id,
        claims: context.issued_claims,
    })))
}

/// 활성 여부 판정 핸들러
#[post("/active")]
pub async fn is_active(
    state: web::Data<AppState>,
    payload: web::Json<IsActiveRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let mut context = payload.into_inner().into_context();

    state.profile_service
        .is_active(state.directory.as_ref(), &mut context)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(IsActiveResponse {
        subject_id: context.subject.id,
        is_active: context.is_active,
    })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use super::*;
    use crate::config::DirectoryBackend;
    use crate::domain::entities::users::UserRecord;
    use crate::repositories::users::InMemoryUserDirectory;
    use crate::services::profile::ProfileService;

    fn state() -> web::Data<AppState> {
        let directory = InMemoryUserDirectory::from_records(vec![
            UserRecord::new("bob-id", "bob")
                .with_display_name("Bob Lee")
                .with_birthdate(NaiveDate::from_ymd_opt(1990, 3, 7).unwrap())
                .with_roles(["user"]),
            UserRecord::new("root-id", "root").with_roles(["Administrator"]),
        ]);

        web::Data::new(AppState::new(
            Arc::new(directory),
            ProfileService::default(),
            DirectoryBackend::Memory,
        ))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(state())
                    .service(web::scope("/api/v1/profile").service(get_profile_data).service(is_active)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_get_profile_data_returns_enriched_claims() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/profile/claims")
            .set_json(json!({ "subject_id": "bob-id", "locale": "ko-KR" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["subject_id"], "bob-id");

        let claims = body["data"]["claims"].as_array().unwrap();
        let pairs: Vec<(&str, &str)> = claims
            .iter()
            .map(|c| (c["type"].as_str().unwrap(), c["value"].as_str().unwrap()))
            .collect();
        assert!(pairs.contains(&("name", "Bob Lee")));
        assert!(pairs.contains(&("birthdate", "1990. 3. 7.")));
        assert!(pairs.contains(&("role", "user")));
    }

    #[actix_web::test]
    async fn test_requested_claim_types_filter_response() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/profile/claims")
            .set_json(json!({ "subject_id": "bob-id", "requested_claim_types": ["name"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["claims"], json!([{
            "type": "name",
            "value": "Bob Lee",
            "value_type": "http://www.w3.org/2001/XMLSchema#string"
        }]));
    }

    #[actix_web::test]
    async fn test_unknown_subject_is_not_found() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/profile/claims")
            .set_json(json!({ "subject_id": "ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_unknown_subject_is_not_found_for_active() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/profile/active")
            .set_json(json!({ "subject_id": "ghost" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_whitespace_subject_id_is_bad_request() {
        let app = app!();

        for uri in ["/api/v1/profile/claims", "/api/v1/profile/active"] {
            let req = test::TestRequest::post()
                .uri(uri)
                .set_json(json!({ "subject_id": "   " }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_empty_subject_id_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/profile/active")
            .set_json(json!({ "subject_id": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_is_active_follows_lockout_and_admin_rules() {
        let app = app!();

        // 잠금 비활성 사용자는 기본(legacy) 정책에서 비활성
        let req = test::TestRequest::post()
            .uri("/api/v1/profile/active")
            .set_json(json!({ "subject_id": "bob-id" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_active"], false);

        let req = test::TestRequest::post()
            .uri("/api/v1/profile/active")
            .set_json(json!({ "subject_id": "root-id" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["is_active"], true);
    }
}

//! API 키 인증 미들웨어
//!
//! 호스트 아이덴티티 서버만 프로필 엔드포인트를 호출할 수 있도록
//! 공유 API 키(`PROFILE_API_KEY`)를 검증합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::config::ProfileConfig;
use crate::middlewares::api_key_inner::ApiKeyMiddlewareService;

/// API 키 인증 미들웨어
///
/// 키가 설정되지 않았으면 모든 요청을 통과시킵니다.
pub struct ApiKeyMiddleware {
    api_key: Option<Rc<str>>,
}

impl ApiKeyMiddleware {
    /// 키 앞뒤 공백은 제거하며, 공백뿐인 키는 미설정으로 취급합니다.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(Rc::from),
        }
    }

    /// `PROFILE_API_KEY` 환경 변수로 미들웨어 생성
    pub fn from_env() -> Self {
        Self::new(ProfileConfig::api_key())
    }

    /// 인증 없이 통과시키는 미들웨어 생성
    pub fn disabled() -> Self {
        Self::new(None)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for ApiKeyMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ApiKeyMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ApiKeyMiddlewareService {
            service: Rc::new(service),
            api_key: self.api_key.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, test, App, HttpResponse};

    #[get("/ping")]
    async fn ping() -> HttpResponse {
        HttpResponse::Ok().body("pong")
    }

    #[actix_web::test]
    async fn test_missing_key_is_rejected() {
        let app = test::init_service(
            App::new().wrap(ApiKeyMiddleware::new(Some("secret".to_string()))).service(ping),
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_bearer_and_header_keys_are_accepted() {
        let app = test::init_service(
            App::new().wrap(ApiKeyMiddleware::new(Some("secret".to_string()))).service(ping),
        ).await;

        let bearer = test::TestRequest::get()
            .uri("/ping")
            .insert_header(("Authorization", "Bearer secret"))
            .to_request();
        assert!(test::call_service(&app, bearer).await.status().is_success());

        let header = test::TestRequest::get()
            .uri("/ping")
            .insert_header(("X-Api-Key", "secret"))
            .to_request();
        assert!(test::call_service(&app, header).await.status().is_success());

        let wrong = test::TestRequest::get()
            .uri("/ping")
            .insert_header(("Authorization", "Bearer secreT"))
            .to_request();
        assert_eq!(test::call_service(&app, wrong).await.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_rejection_uses_api_response_body() {
        let app = test::init_service(
            App::new().wrap(ApiKeyMiddleware::new(Some("secret".to_string()))).service(ping),
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert!(body["data"].is_null());
        assert!(body["message"].as_str().unwrap().contains("API 키"));
    }

    #[actix_web::test]
    async fn test_padded_configured_key_still_matches() {
        let app = test::init_service(
            App::new().wrap(ApiKeyMiddleware::new(Some("  secret\n".to_string()))).service(ping),
        ).await;

        let req = test::TestRequest::get()
            .uri("/ping")
            .insert_header(("X-Api-Key", "secret"))
            .to_request();

        assert!(test::call_service(&app, req).await.status().is_success());
    }

    #[actix_web::test]
    async fn test_blank_configured_key_disables_check() {
        let app = test::init_service(
            App::new().wrap(ApiKeyMiddleware::new(Some("   ".to_string()))).service(ping),
        ).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;

        assert!(resp.status().is_success());
    }

    #[actix_web::test]
    async fn test_disabled_middleware_passes_through() {
        let app = test::init_service(App::new().wrap(ApiKeyMiddleware::disabled()).service(ping)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/ping").to_request()).await;

        assert!(resp.status().is_success());
    }
}

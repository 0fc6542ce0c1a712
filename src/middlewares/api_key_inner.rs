//! ApiKeyMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::dto::ApiResponse;
use crate::errors::AppError;

/// 실제 인증 로직을 수행하는 서비스
pub struct ApiKeyMiddlewareService<S> {
    pub service: Rc<S>,
    pub api_key: Option<Rc<str>>,
}

impl<S, B> Service<ServiceRequest> for ApiKeyMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let api_key = self.api_key.clone();

        Box::pin(async move {
            if let Some(expected) = api_key {
                if let Err(err) = verify_api_key(&req, &expected) {
                    log::warn!("호스트 인증 실패: {} ({})", err, req.path());
                    let response = HttpResponse::Unauthorized()
                        .json(ApiResponse::error(format!("유효한 API 키가 필요합니다: {}", err)));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// `Authorization: Bearer <key>` 또는 `X-Api-Key: <key>` 헤더에서 키를 추출하여 검증
fn verify_api_key(req: &ServiceRequest, expected: &str) -> Result<(), AppError> {
    let headers = req.headers();

    let provided = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .or_else(|| headers.get("X-Api-Key").and_then(|h| h.to_str().ok()))
        .ok_or_else(|| AppError::AuthenticationError("API 키 헤더가 없습니다".to_string()))?;

    if constant_time_eq(provided.trim().as_bytes(), expected.trim().as_bytes()) {
        Ok(())
    } else {
        Err(AppError::AuthenticationError("API 키가 일치하지 않습니다".to_string()))
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"secret", b"secret"));
        assert!(!constant_time_eq(b"secret", b"secreT"));
        assert!(!constant_time_eq(b"secret", b"secret2"));
    }
}

use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::routes::ApiError;

use super::jwt::{Claims, Tokenizer};

// Extractor for admin role, carries the admin's user id
pub struct IsAdmin(pub i32);

fn bearer_claims(req: &HttpRequest) -> Result<Claims, ApiError>{
    let tokenizer = req.app_data::<web::Data<Tokenizer>>()
        .ok_or_else(|| ApiError::internal(anyhow::anyhow!("Tokenizer is not registered as app data")))?;

    let token = req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

    tokenizer.decode_key(token)
        .ok_or_else(|| ApiError::unauthorized("invalid or expired token"))
}

impl FromRequest for IsAdmin {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let outcome = bearer_claims(req).and_then(|claims| {
            if claims.is_admin() {
                Ok(IsAdmin(claims.sub))
            } else {
                Err(ApiError::forbidden("admin role required"))
            }
        });

        ready(outcome)
    }
}

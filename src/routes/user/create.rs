use actix_web::{web, HttpResponse};

use crate::{domain::{CustomResponse, SignupRequest}, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "User registration started",
    skip(service, request),
    fields(user_email = %request.email)
)]
pub async fn create_user(
    service: web::Data<dyn FoodService>,
    request: web::Json<SignupRequest>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    // Argon2 hashing is CPU bound, keep it off the executor
    let user_id = spawn_blocking_with_tracing(move || {
        service.create_user(request.into_inner())
    })
    .await??;

    Ok(HttpResponse::Created().json(CustomResponse::created("user created", user_id)))
}

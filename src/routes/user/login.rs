use actix_web::{web, HttpResponse};

use crate::{domain::LoginRequest, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Logging in user",
    skip(service, request),
    fields(user_email = %request.email)
)]
pub async fn login(
    service: web::Data<dyn FoodService>,
    request: web::Json<LoginRequest>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    let response = spawn_blocking_with_tracing(move || {
        service.user_login(request.into_inner())
    })
    .await??;

    Ok(HttpResponse::Ok().json(response))
}

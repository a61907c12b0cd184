use actix_web::{web, HttpResponse};

use crate::{routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Getting user",
    skip(service)
)]
pub async fn get_user(
    service: web::Data<dyn FoodService>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let service = service.into_inner();

    let user = spawn_blocking_with_tracing(move || service.get_user_by_id(user_id))
        .await??;

    Ok(HttpResponse::Ok().json(user))
}

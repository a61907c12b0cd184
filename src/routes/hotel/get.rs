use actix_web::{web, HttpResponse};

use crate::{routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Getting list of hotels",
    skip(service)
)]
pub async fn get_hotels(
    service: web::Data<dyn FoodService>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    let hotels = spawn_blocking_with_tracing(move || service.get_hotels())
        .await??;

    Ok(HttpResponse::Ok().json(hotels))
}

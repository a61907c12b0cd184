use actix_web::{web, HttpResponse};

use crate::{domain::CustomResponse, models::NewHotel, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Creating hotel",
    skip(service, hotel),
    fields(hotel_name = %hotel.name)
)]
pub async fn create_hotel(
    service: web::Data<dyn FoodService>,
    hotel: web::Json<NewHotel>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    let hotel_id = spawn_blocking_with_tracing(move || {
        service.create_hotel(hotel.into_inner())
    })
    .await??;

    Ok(HttpResponse::Created().json(CustomResponse::created("hotel created", hotel_id)))
}

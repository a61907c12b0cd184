use actix_web::{web, HttpResponse};

use crate::{domain::CustomResponse, models::NewProduct, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Creating product",
    skip(service, product),
    fields(product_name = %product.name, hotel_id = product.hotel_id)
)]
pub async fn create_product(
    service: web::Data<dyn FoodService>,
    product: web::Json<NewProduct>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    let product_id = spawn_blocking_with_tracing(move || {
        service.create_product(product.into_inner())
    })
    .await??;

    Ok(HttpResponse::Created().json(CustomResponse::created("product created", product_id)))
}

use actix_web::{web, HttpResponse};

use crate::{domain::{CartProducts, CustomResponse}, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Adding product to cart",
    skip(service)
)]
pub async fn add_to_cart(
    service: web::Data<dyn FoodService>,
    item: web::Json<CartProducts>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    spawn_blocking_with_tracing(move || service.add_product_to_cart(item.into_inner()))
        .await??;

    Ok(HttpResponse::Ok().json(CustomResponse::ok("product added to cart")))
}

use actix_web::{web, HttpResponse};

use crate::{domain::{CartProductKey, CustomResponse}, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Removing product from cart",
    skip(service)
)]
pub async fn delete_from_cart(
    service: web::Data<dyn FoodService>,
    key: web::Json<CartProductKey>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    spawn_blocking_with_tracing(move || service.delete_product_from_cart(key.into_inner()))
        .await??;

    Ok(HttpResponse::Ok().json(CustomResponse::ok("product removed from cart")))
}

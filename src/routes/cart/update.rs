use actix_web::{web, HttpResponse};

use crate::{domain::{CartProducts, CustomResponse}, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Updating quantity in cart",
    skip(service)
)]
pub async fn update_cart(
    service: web::Data<dyn FoodService>,
    item: web::Json<CartProducts>
) -> Result<HttpResponse, ApiError> {
    let service = service.into_inner();

    spawn_blocking_with_tracing(move || service.update_quantity_in_cart(item.into_inner()))
        .await??;

    Ok(HttpResponse::Ok().json(CustomResponse::ok("cart quantity updated")))
}

use actix_web::{web, HttpResponse};

use crate::{routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Getting product",
    skip(service)
)]
pub async fn get_product(
    service: web::Data<dyn FoodService>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let product_id = path.into_inner();
    let service = service.into_inner();

    let product = spawn_blocking_with_tracing(move || service.get_product_by_id(product_id))
        .await??;

    Ok(HttpResponse::Ok().json(product))
}

#[tracing::instrument(
    "Getting products of hotel",
    skip(service)
)]
pub async fn get_hotel_products(
    service: web::Data<dyn FoodService>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let hotel_id = path.into_inner();
    let service = service.into_inner();

    let products = spawn_blocking_with_tracing(move || service.get_products_by_hotel(hotel_id))
        .await??;

    Ok(HttpResponse::Ok().json(products))
}

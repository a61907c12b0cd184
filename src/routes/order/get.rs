use actix_web::{web, HttpResponse};

use crate::{routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Getting list of orders",
    skip(service)
)]
pub async fn get_orders(
    service: web::Data<dyn FoodService>,
    path: web::Path<i32>
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let service = service.into_inner();

    let orders = spawn_blocking_with_tracing(move || service.get_user_orders(user_id))
        .await??;

    Ok(HttpResponse::Ok().json(orders))
}

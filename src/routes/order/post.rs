use actix_web::{web, HttpResponse};

use crate::{domain::{CreateOrderRequest, CustomResponse}, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Posting order",
    skip(service, order),
    fields(user_id = order.user_id)
)]
pub async fn post_order(
    service: web::Data<dyn FoodService>,
    path: web::Path<i32>,
    order: web::Json<CreateOrderRequest>
) -> Result<HttpResponse, ApiError> {
    let hotel_id = path.into_inner();
    let service = service.into_inner();

    let order_id = spawn_blocking_with_tracing(move || {
        service.create_order(hotel_id, order.into_inner())
    })
    .await??;

    Ok(HttpResponse::Created().json(CustomResponse::created("order created", order_id)))
}

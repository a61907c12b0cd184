use actix_web::{web, HttpResponse};

use crate::{domain::CartQuery, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

#[tracing::instrument(
    "Getting user cart",
    skip(service)
)]
pub async fn get_cart(
    service: web::Data<dyn FoodService>,
    query: web::Query<CartQuery>
) -> Result<HttpResponse, ApiError> {
    let user_id = query.into_inner().user_id;
    let service = service.into_inner();

    let cart = spawn_blocking_with_tracing(move || service.get_user_cart(user_id))
        .await??;

    Ok(HttpResponse::Ok().json(cart))
}

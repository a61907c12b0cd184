use actix_web::{web, HttpResponse};

use crate::{auth::extractors::IsAdmin, domain::CustomResponse, routes::ApiError, services::FoodService, telemetry::spawn_blocking_with_tracing};

// Admin only, the extractor rejects other roles before the body runs
#[tracing::instrument(
    "Marking order as completed",
    skip(service, admin),
    fields(admin_id = admin.0)
)]
pub async fn complete_order(
    service: web::Data<dyn FoodService>,
    path: web::Path<i32>,
    admin: IsAdmin
) -> Result<HttpResponse, ApiError> {
    let order_id = path.into_inner();
    let service = service.into_inner();

    spawn_blocking_with_tracing(move || service.mark_order_completed(order_id))
        .await??;

    Ok(HttpResponse::Ok().json(CustomResponse::ok("order marked as completed")))
}

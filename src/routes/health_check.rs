use actix_web::HttpResponse;

use crate::domain::CustomResponse;

#[tracing::instrument(
    "Checking if api is online"
)]
pub async fn health_check() -> HttpResponse{
    HttpResponse::Ok().json(CustomResponse::ok("server is up and running"))
}

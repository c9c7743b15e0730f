use actix_web::{HttpResponse, Responder, get};

/// Liveness probe.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json("API is active")
}

use crate::util::ResponseMessage;
use actix_web::HttpResponse;

pub async fn handler() -> HttpResponse {
    tracing::info!("Root Handler");
    HttpResponse::Ok().json(ResponseMessage::new("Movies API is running"))
}

pub async fn hello_api() -> HttpResponse {
    tracing::info!("Hello Handler");
    HttpResponse::Ok().json(ResponseMessage::new("Hello from the backend API!"))
}

use actix_web::http::header::ContentType;
use actix_web::{get, HttpResponse};

/// Upload page, embedded at compile time
const UPLOAD_PAGE: &str = include_str!("../../templates/upload.html");

/// Serve the static upload page
#[get("/")]
pub async fn upload_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(UPLOAD_PAGE)
}

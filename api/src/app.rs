//! Application state and factory
//!
//! This module holds the state shared by the handlers and builds the
//! Actix-web application with its static route table.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header::ContentType,
    middleware::Logger,
    web, App, Error, HttpResponse,
};

use vp_core::services::{VerificationProvider, VerificationService};

/// Application state that holds shared services
pub struct AppState<P: VerificationProvider> {
    pub verification_service: VerificationService<P>,
}

impl<P: VerificationProvider> AppState<P> {
    pub fn new(verification_service: VerificationService<P>) -> Self {
        Self {
            verification_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    P: VerificationProvider + 'static,
{
    use crate::routes::verification::{request_code, verify_code};

    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .route("/health", web::get().to(health_check))
        .service(web::resource("/request").route(web::post().to(request_code::<P>)))
        .service(web::resource("/verify").route(web::post().to(verify_code::<P>)))
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "verify-proxy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("404 page not found")
}

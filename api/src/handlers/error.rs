use actix_web::{http::header::ContentType, HttpResponse};
use std::fmt::Display;

use vp_core::errors::DomainError;

/// Plain-text 400 carrying the error's own message
pub fn bad_request(error: impl Display) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(ContentType::plaintext())
        .body(error.to_string())
}

/// Handle domain errors and convert them to appropriate HTTP responses.
///
/// A rejected code is 406 `not valid`; every provider-side failure
/// (transport, status, payload) is a 400 with the underlying message.
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match error {
        rejected @ DomainError::CodeNotValid => {
            log::info!("Verification code rejected");
            HttpResponse::NotAcceptable()
                .content_type(ContentType::plaintext())
                .body(rejected.to_string())
        }
        other => {
            log::error!("Provider call failed ({}): {}", other.kind(), other);
            bad_request(other)
        }
    }
}

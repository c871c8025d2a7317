use actix_web::{web, HttpResponse};

use vp_core::services::VerificationProvider;
use vp_shared::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::{decode_body, RequestCodeRequest};
use crate::handlers::{bad_request, handle_domain_error};

/// Handler for POST /request
///
/// Asks the provider to deliver a verification code.
///
/// # Request Body
///
/// ```json
/// {
///     "to": "+15551234567",
///     "channel": "sms"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The provider's verification object, e.g.
/// ```json
/// {
///     "sid": "VE...",
///     "service_sid": "VA...",
///     "account_sid": "AC...",
///     "to": "+15551234567",
///     "channel": "sms",
///     "status": "pending",
///     "valid": false,
///     "date_created": "2023-05-01T12:00:00Z",
///     "date_updated": "2023-05-01T12:00:00Z"
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed body, provider unreachable, provider error
///   status, or unreadable provider response
pub async fn request_code<P>(state: web::Data<AppState<P>>, body: web::Bytes) -> HttpResponse
where
    P: VerificationProvider + 'static,
{
    let request: RequestCodeRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(error) => {
            log::warn!("Rejected /request body: {}", error);
            return bad_request(error);
        }
    };

    match state
        .verification_service
        .request_code(&request.to, &request.channel)
        .await
    {
        Ok(verification) => {
            log::info!(
                "Verification {} requested for {} via {}",
                verification.sid,
                mask_phone_number(&request.to),
                request.channel
            );
            HttpResponse::Ok().json(verification)
        }
        Err(error) => handle_domain_error(error),
    }
}

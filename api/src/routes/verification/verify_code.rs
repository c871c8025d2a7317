use actix_web::{web, HttpResponse};

use vp_core::services::VerificationProvider;
use vp_shared::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::{decode_body, VerifyCodeRequest};
use crate::handlers::{bad_request, handle_domain_error};

/// Handler for POST /verify
///
/// Checks the code the user entered against the provider.
///
/// # Request Body
///
/// ```json
/// {
///     "to": "+15551234567",
///     "code": "123456"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// The provider's verification object with `"valid": true`.
///
/// ## Errors
/// - 400 Bad Request: malformed body or any provider failure
/// - 406 Not Acceptable: body `not valid`, the provider rejected the code
pub async fn verify_code<P>(state: web::Data<AppState<P>>, body: web::Bytes) -> HttpResponse
where
    P: VerificationProvider + 'static,
{
    let request: VerifyCodeRequest = match decode_body(&body) {
        Ok(request) => request,
        Err(error) => {
            log::warn!("Rejected /verify body: {}", error);
            return bad_request(error);
        }
    };

    match state
        .verification_service
        .check_code(&request.to, &request.code)
        .await
    {
        Ok(verification) => {
            log::info!(
                "Verification {} approved for {}",
                verification.sid,
                mask_phone_number(&request.to)
            );
            HttpResponse::Ok().json(verification)
        }
        Err(error) => handle_domain_error(error),
    }
}

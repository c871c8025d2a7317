pub mod verification;

pub use verification::{decode_body, RequestCodeRequest, VerifyCodeRequest};

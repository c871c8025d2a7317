use actix_web::{web, HttpServer};
use log::{error, info};
use std::sync::Arc;

use vp_api::{create_app, AppState};
use vp_core::services::VerificationService;
use vp_infra::verify::{TwilioVerifyClient, TwilioVerifyConfig};
use vp_shared::config::{Credentials, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Credentials are mandatory; never bind without them
    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let server_config = ServerConfig::from_env();

    let provider = match TwilioVerifyClient::new(TwilioVerifyConfig::from_env(credentials)) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to initialize Twilio Verify client: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = web::Data::new(AppState::new(VerificationService::new(provider)));

    let bind_address = server_config.bind_address();
    info!("Start listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .client_request_timeout(server_config.read_timeout())
        .client_disconnect_timeout(server_config.write_timeout())
        .bind(&bind_address)?
        .run()
        .await
}

//! Application factory
//!
//! Builds the Actix-web application around an already constructed
//! [`AppState`]. The binary and the route tests both go through
//! [`create_app`], so they exercise the same middleware and routing.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};

use cg_core::services::{CodeStore, MessagingGateway};
use cg_shared::config::CorsConfig;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::cors::create_cors;
use crate::routes::{self, auth::AppState};

/// Create and configure the application with all dependencies
pub fn create_app<G, S>(
    app_state: web::Data<AppState<G, S>>,
    cors: &CorsConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    G: MessagingGateway + 'static,
    S: CodeStore + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(create_cors(cors))
        .wrap(Logger::default())
        .configure(configure::<G, S>)
        .default_service(web::route().to(not_found))
}

/// Register JSON handling and every route on a service config
pub fn configure<G, S>(cfg: &mut web::ServiceConfig)
where
    G: MessagingGateway + 'static,
    S: CodeStore + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(routes::health::health_check))
        .service(routes::auth::scope::<G, S>());
}

//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpRequest, HttpServer, ResponseError, web};

use crate::domain::Error;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::notes::{create_note, delete_note, get_note, list_notes};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, list_users};
use crate::middleware::RequestId;

/// Map JSON deserialization failures onto the standard error envelope.
///
/// Without this, a payload with a mistyped field (e.g. a string where a
/// boolean belongs) would answer with Actix's plain-text body instead of the
/// JSON shape every other failure uses.
fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = Error::invalid_request(format!("malformed JSON payload: {err}")).error_response();
    actix_web::error::InternalError::from_response(err, response).into()
}

/// Assemble the application with its routes, middleware, and shared state.
///
/// Exposed so integration tests can drive the exact app the binary serves.
pub fn build_app(
    state: web::Data<HttpState>,
    health_state: web::Data<HealthState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(list_notes)
        .service(get_note)
        .service(create_note)
        .service(delete_note)
        .service(create_user)
        .service(list_users);

    App::new()
        .app_data(state)
        .app_data(health_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(RequestId)
        .service(api)
        .service(ready)
        .service(live)
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        notes,
        users,
    } = config;
    let state = web::Data::new(HttpState::new(notes, users));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(state.clone(), server_health_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

pub mod handlers;
pub mod models;
pub mod routes;

use actix_web::{error, web, HttpResponse};
use serde_json::json;

// Bodies with missing or ill-typed fields become a 400 carrying the
// deserialization message, so clients see what was wrong.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

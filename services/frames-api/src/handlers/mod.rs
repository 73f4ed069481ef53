//! HTTP request handlers for the frames API.

pub mod frames;
pub mod health;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

/// JSON body with a single `key: message` field.
pub(crate) fn json_response(status: StatusCode, key: &str, message: &str) -> Response {
    let mut body = Map::new();
    body.insert(key.to_string(), Value::String(message.to_string()));
    let json = Value::Object(body).to_string();
    (status, [(header::CONTENT_TYPE, "application/json")], json).into_response()
}

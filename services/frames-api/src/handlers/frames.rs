//! Frame listing and rendering handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use metrics::{counter, histogram};
use serde::Serialize;

use frames_common::{FramesError, Scanline};

use super::json_response;
use crate::state::AppState;

const INVALID_RANGE_PARAMS: &str = "Invalid or missing depth_min/depth_max parameters.";
const INVALID_DEPTH_PARAMS: &str = "Invalid or missing depth parameters.";

/// Query parameters for the range listing endpoint.
#[derive(Debug)]
pub struct FramesQueryParams {
    pub depth_min: Option<String>,
    pub depth_max: Option<String>,
}

impl FramesQueryParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            depth_min: first_value(pairs, "depth_min"),
            depth_max: first_value(pairs, "depth_max"),
        }
    }
}

/// Query parameters for the render endpoint.
#[derive(Debug)]
pub struct ColoredFrameQueryParams {
    pub depth: Option<String>,
    pub colormap: Option<String>,
}

impl ColoredFrameQueryParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            depth: first_value(pairs, "depth"),
            colormap: first_value(pairs, "colormap"),
        }
    }
}

/// First value given for `key`. Repeated keys are allowed and later ones ignored.
fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

/// Batch listing body. Rows keep their flat `depth, pixel_0, ...` layout.
#[derive(Serialize)]
struct FramesResponse<'a> {
    message: &'a [Scanline],
}

/// GET /api/get_frames
pub async fn get_frames_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = FramesQueryParams::from_pairs(&pairs);
    let start = Instant::now();
    counter!("frames_requests_total", "endpoint" => "get_frames").increment(1);

    let (Some(depth_min), Some(depth_max)) = (
        parse_number(params.depth_min.as_deref()),
        parse_number(params.depth_max.as_deref()),
    ) else {
        return client_error(INVALID_RANGE_PARAMS);
    };

    let response = match state.query.range_fetch(depth_min, depth_max).await {
        Ok(rows) => {
            tracing::debug!(depth_min, depth_max, rows = rows.len(), "Range fetch");
            match serde_json::to_string(&FramesResponse { message: &rows }) {
                Ok(body) => {
                    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response()
                }
                Err(e) => error_response(FramesError::Render(e.to_string()), "get_frames"),
            }
        }
        Err(err) => error_response(err, "get_frames"),
    };

    histogram!("frames_request_duration_ms", "endpoint" => "get_frames")
        .record(start.elapsed().as_secs_f64() * 1000.0);
    response
}

/// GET /api/get_colored_frames
pub async fn get_colored_frames_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = ColoredFrameQueryParams::from_pairs(&pairs);
    let start = Instant::now();
    counter!("frames_requests_total", "endpoint" => "get_colored_frames").increment(1);

    let Some(depth) = parse_number(params.depth.as_deref()) else {
        return client_error(INVALID_DEPTH_PARAMS);
    };

    let response = match state.query.point_render(depth, params.colormap.as_deref()).await {
        Ok(png) => {
            tracing::debug!(depth, colormap = ?params.colormap, bytes = png.len(), "Rendered frame");
            (StatusCode::OK, [(header::CONTENT_TYPE, "image/png")], png).into_response()
        }
        Err(FramesError::InvalidDepth(_)) => client_error(INVALID_DEPTH_PARAMS),
        Err(err) => error_response(err, "get_colored_frames"),
    };

    histogram!("frames_request_duration_ms", "endpoint" => "get_colored_frames")
        .record(start.elapsed().as_secs_f64() * 1000.0);
    response
}

/// Parse an optional query value as a number. Non-finite values pass
/// through so the query layer can reject them with its own message.
fn parse_number(value: Option<&str>) -> Option<f64> {
    value?.trim().parse().ok()
}

fn client_error(message: &str) -> Response {
    counter!("frames_client_errors_total").increment(1);
    json_response(StatusCode::BAD_REQUEST, "error", message)
}

fn error_response(err: FramesError, endpoint: &'static str) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if err.is_client_error() {
        tracing::debug!(endpoint, error = %err, "Rejected request");
    }

    match err {
        FramesError::InvalidRange(message) | FramesError::InvalidDepth(message) => {
            client_error(&message)
        }
        FramesError::NotFound(message) => json_response(status, "message", &message),
        other => {
            tracing::error!(endpoint, error = %other, "Request failed");
            counter!("frames_server_errors_total", "endpoint" => endpoint).increment(1);
            json_response(
                status,
                "error",
                &format!("Failed to process frames: {}", other),
            )
        }
    }
}

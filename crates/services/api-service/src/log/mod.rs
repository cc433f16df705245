use crate::error::{Error, Result};
use axum::http::{Method, Uri};
use chrono::Utc;
use lib_core::ctx::Ctx;
use serde::Serialize;
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Serialize)]
struct RequestLogLine {
    uuid: String,
    timestamp: String,

    request_id: Option<String>,
    http_method: String,
    http_path: String,

    error: Option<String>,
}

pub async fn log_request(
    uuid: String,
    http_method: Method,
    uri: Uri,
    ctx: Option<Ctx>,
    web_error: Option<Error>,
) -> Result<()> {
    let request_id = ctx.map(|c| c.request_id().to_string());
    let http_method = http_method.to_string();
    let http_path = uri.path().to_string();

    let error = web_error.as_ref().map(|e| format!("{e:?}"));

    let log_line = RequestLogLine {
        uuid,
        timestamp: Utc::now().to_rfc3339(),
        request_id,
        http_method,
        http_path,
        error,
    };

    let log_line = serde_json::to_string(&log_line)?;
    println!("{log_line}");
    Ok(())
}
use crate::error::Error;
use crate::log::log_request;
use crate::middleware::mw_auth::Ctm;
use axum::http::{Method, Uri};
use axum::response::Response;
use tracing::info;
use uuid::Uuid;

/// Logs one structured JSON line per response: generates a request uuid,
/// pulls the resolved `Ctm` context and any domain error out of the
/// response extensions, then forwards the response unmodified.
pub async fn mw_response_map(res: Response) -> Response {
    info!("MIDDLEWARE: Logging Response");

    let uuid = Uuid::new_v4().to_string();
    let web_error = res.extensions().get::<Error>().cloned();
    let ctx = res.extensions().get::<Ctm>().map(|c| c.0.clone());
    let uri = res.extensions().get::<Uri>().cloned().unwrap_or_default();
    let http_method = res
        .extensions()
        .get::<Method>()
        .cloned()
        .unwrap_or(Method::GET);

    let _ = log_request(uuid, http_method, uri, ctx, web_error).await;

    res
}

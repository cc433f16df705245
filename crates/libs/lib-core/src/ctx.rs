use crate::error::{Error, Result};

/// Per-request context. There is no per-user session model in this service
/// (multi-tenant authentication is an explicit non-goal); `Ctx` exists to
/// carry a request identity through to the structured request log.
#[derive(Clone, Debug)]
pub struct Ctx {
    request_id: String,
}

impl Ctx {
    pub fn root_ctx() -> Self {
        Ctx {
            request_id: "root".to_string(),
        }
    }

    pub fn new(request_id: String) -> Result<Self> {
        if request_id.is_empty() {
            return Err(Error::CtxCannotNewRootCtx);
        }
        Ok(Self { request_id })
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

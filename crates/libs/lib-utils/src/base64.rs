use crate::error::{Error, Result};
use base64::engine::{general_purpose, Engine};

pub fn b64u_encode(data: impl AsRef<[u8]>) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(data)
}

pub fn b64u_decode(data: &str) -> Result<Vec<u8>> {
    general_purpose::URL_SAFE_NO_PAD
        .decode(data)
        .map_err(|_| Error::FailToB64uDecode)
}

pub fn b64u_decode_to_string(data: &str) -> Result<String> {
    b64u_decode(data)
        .ok()
        .and_then(|v| String::from_utf8(v).ok())
        .ok_or(Error::FailToB64uDecode)
}


// endregion: Unit Test

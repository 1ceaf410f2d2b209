use rand::Rng;

use crate::model::structs::Mode;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Per-client state the portal correlates requests by.
#[derive(Debug, Clone)]
pub struct Session {
    pub base_url: String,
    /// Raw `Cookie` header value, e.g. `JSESSIONID=...; X-Oracle-BMC-LBS-Route=...;`
    pub auth_cookies: String,
    pub unique_session_id: String,
    pub mode: Mode,
}

impl Session {
    pub fn new(base_url: impl Into<String>, auth_cookies: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_cookies: auth_cookies.into(),
            unique_session_id: generate_unique_session_id(),
            mode: Mode::default(),
        }
    }
}

/// Three random base-36 characters followed by the current Unix time in
/// milliseconds. Only used as a correlation token, not a secret.
pub fn generate_unique_session_id() -> String {
    let mut rng = rand::thread_rng();
    let prefix: String = (0..3)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!("{prefix}{}", chrono::Utc::now().timestamp_millis())
}

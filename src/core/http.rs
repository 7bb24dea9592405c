//! HTTP utilities for Garmin Connect communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, COOKIE};
use std::fmt;

pub const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// Routing header the Connect web app sends alongside every API call.
pub const DI_BACKEND: &str = "di-backend";

/// Session credentials copied from a logged-in browser.
///
/// Both values are opaque and sent verbatim.
#[derive(Clone)]
pub struct Credentials {
    authorization: String,
    cookie: String,
}

impl Credentials {
    pub fn new(authorization: impl Into<String>, cookie: impl Into<String>) -> Self {
        Self {
            authorization: authorization.into(),
            cookie: cookie.into(),
        }
    }

    pub fn authorization(&self) -> &str {
        &self.authorization
    }

    pub fn cookie(&self) -> &str {
        &self.cookie
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("authorization", &"<redacted>")
            .field("cookie", &"<redacted>")
            .finish()
    }
}

/// Build the fixed header set sent with every request.
///
/// Authorization and Cookie are flagged sensitive so they never show up in
/// debug output of the request.
pub fn build_header_map(credentials: &Credentials, backend: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

    let mut auth = HeaderValue::from_str(credentials.authorization())?;
    auth.set_sensitive(true);
    h.insert(AUTHORIZATION, auth);

    let mut cookie = HeaderValue::from_str(credentials.cookie())?;
    cookie.set_sensitive(true);
    h.insert(COOKIE, cookie);

    h.insert(
        HeaderName::from_static(DI_BACKEND),
        HeaderValue::from_str(backend)?,
    );
    Ok(h)
}

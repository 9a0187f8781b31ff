pub mod client;
pub mod endpoints;
pub mod keys;

use std::time::Duration;

use reqwest::blocking::Client;

use crate::utils::errors::{OutlineError, Result};

const USER_AGENT: &str = concat!("outline-rs/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by every operation of one [`client::OutlineClient`].
///
/// The timeout applies to the whole round trip (connect, handshake, write,
/// read). When `cert` carries a PEM certificate it is installed as the trust
/// anchor so a self-signed Outline server verifies against its own pinned
/// cert; otherwise the system roots are used. Verification is always on here;
/// the legacy verify-none behavior is only reachable through
/// [`client::OutlineClient::insecure`].
pub fn create_http_client(cert: Option<&str>, timeout_secs: u64, insecure: bool) -> Result<Client> {
    let mut builder = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .use_rustls_tls();

    if let Some(pem) = cert {
        let anchor = reqwest::Certificate::from_pem(pem.as_bytes())
            .map_err(|e| OutlineError::Parse(format!("Unable to parse certificate: {e}")))?;
        builder = builder.add_root_certificate(anchor);
    }

    if insecure {
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(OutlineError::from)
}

//! Synchronous client for the Outline management API's access-key endpoints.
//!
//! Every public operation performs exactly one blocking HTTP round trip:
//! build the target URL from the base URL and an endpoint template, send the
//! request, check the status code against the single value the operation
//! expects, and round-trip the JSON body to canonical compact text. The base
//! URL is read-only after construction and each call computes its target URL
//! as a local value, so one client can be shared across threads.

use std::collections::HashMap;

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::outline::endpoints;
use crate::outline::keys::{CreateAccessKeyParams, UpdateAccessKeyParams};
use crate::utils::errors::{OutlineError, Result};
use crate::utils::urls::{append_url, replace_placeholders};

#[derive(Debug)]
pub struct OutlineClient {
    http: reqwest::blocking::Client,
    api_url: Url,
}

impl OutlineClient {
    /// Create a client for the management API at `api_url`.
    ///
    /// `cert`, when given, is the server's certificate in PEM form and is
    /// pinned as the trust anchor for TLS verification. `timeout_secs` is a
    /// hard deadline on each round trip.
    pub fn new(api_url: &str, cert: Option<&str>, timeout_secs: u64) -> Result<Self> {
        Self::build(api_url, cert, timeout_secs, false)
    }

    /// Create a client that skips TLS certificate verification.
    ///
    /// This reproduces the legacy client's verify-none behavior for servers
    /// whose certificate is not available for pinning. Prefer [`Self::new`]
    /// with a pinned certificate.
    pub fn insecure(api_url: &str, timeout_secs: u64) -> Result<Self> {
        Self::build(api_url, None, timeout_secs, true)
    }

    fn build(api_url: &str, cert: Option<&str>, timeout_secs: u64, insecure: bool) -> Result<Self> {
        let api_url = Url::parse(api_url)
            .map_err(|e| OutlineError::Parse(format!("Unable to parse API URL: {e}")))?;
        let http = super::create_http_client(cert, timeout_secs, insecure)?;

        Ok(Self { http, api_url })
    }

    /// Base management API URL this client was constructed with.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// List all access keys. Returns the server's JSON document
    /// (`{"accessKeys":[...]}`) in canonical compact form.
    pub fn get_access_keys(&self) -> Result<String> {
        let url = append_url(&self.api_url, endpoints::GET_ACCESS_KEYS);
        let (status, body) = self.round_trip(Method::GET, url, None)?;

        check_status("Get access keys", 200, status)?;
        canonical_json("access keys", &body)
    }

    /// Fetch one access key by id.
    pub fn get_access_key(&self, access_key_id: &str) -> Result<String> {
        let url = append_url(&self.api_url, &key_endpoint(endpoints::GET_ACCESS_KEY_BY_ID, access_key_id));
        let (status, body) = self.round_trip(Method::GET, url, None)?;

        check_status("Get access key", 200, status)?;
        canonical_json("access key", &body)
    }

    /// Create an access key. Absent params are omitted from the request body
    /// so the server picks its defaults.
    pub fn create_access_key(&self, params: &CreateAccessKeyParams) -> Result<String> {
        let url = append_url(&self.api_url, endpoints::CREATE_ACCESS_KEY);
        let body = params.to_json().to_string();
        let (status, body) = self.round_trip(Method::POST, url, Some(body))?;

        check_status("Create access key", 201, status)?;
        canonical_json("access key", &body)
    }

    /// Update an access key. Only the params that are set are sent, so the
    /// server leaves the other fields untouched.
    ///
    /// The management API answers a successful update with 201, not the
    /// conventional 200/204; that contract is kept here as observed.
    pub fn update_access_key(
        &self,
        access_key_id: u64,
        params: &UpdateAccessKeyParams,
    ) -> Result<String> {
        let endpoint = key_endpoint(endpoints::UPDATE_ACCESS_KEY, &access_key_id.to_string());
        let url = append_url(&self.api_url, &endpoint);
        let body = params.to_json().to_string();
        let (status, body) = self.round_trip(Method::PUT, url, Some(body))?;

        check_status("Update access key", 201, status)?;
        canonical_json("access key", &body)
    }

    /// Delete an access key. A 204 response carries no body, so success
    /// returns nothing.
    pub fn delete_access_key(&self, access_key_id: &str) -> Result<()> {
        let url = append_url(&self.api_url, &key_endpoint(endpoints::DELETE_ACCESS_KEY, access_key_id));
        let (status, _body) = self.round_trip(Method::DELETE, url, None)?;

        check_status("Delete access key", 204, status)
    }

    /// Perform one blocking HTTP round trip and return the raw status/body
    /// pair. Transport failures at any stage (resolution, connect, TLS
    /// handshake, write, read, timeout) propagate as
    /// [`OutlineError::Transport`]; no retry.
    fn round_trip(&self, method: Method, url: Url, body: Option<String>) -> Result<(u16, String)> {
        tracing::debug!("{method} {url}");

        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        tracing::debug!("Response status: {status}");
        Ok((status, body))
    }
}

fn key_endpoint(template: &str, access_key_id: &str) -> String {
    let mut placeholders = HashMap::new();
    placeholders.insert(endpoints::KEY_ID, access_key_id.to_string());
    replace_placeholders(template, &placeholders)
}

fn check_status(operation: &'static str, expected: u16, status: u16) -> Result<()> {
    if status == expected {
        Ok(())
    } else {
        Err(OutlineError::Server { operation, status })
    }
}

/// Validate that `body` is well-formed JSON and re-serialize it to canonical
/// compact text. Parsing its own output again yields identical text.
fn canonical_json(what: &str, body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| OutlineError::Parse(format!("JSON parse error for {what}: {e}")))?;
    Ok(value.to_string())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

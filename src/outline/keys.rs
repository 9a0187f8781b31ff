//! Access-key request parameters and response views.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Optional fields for creating an access key.
///
/// Fields left as `None` are omitted from the request body entirely (not
/// serialized as `null`), so the server applies its own defaults.
#[derive(Debug, Default, Clone)]
pub struct CreateAccessKeyParams {
    pub name: Option<String>,
    pub password: Option<String>,
    /// Cipher/auth method identifier, e.g. `aes-256-gcm`.
    pub method: Option<String>,
    pub data_limit_bytes: Option<u64>,
}

/// Optional fields for updating an access key.
///
/// Partial updates rely on absent fields staying absent from the emitted
/// JSON, so only the fields set here are touched on the server.
#[derive(Debug, Default, Clone)]
pub struct UpdateAccessKeyParams {
    pub name: Option<String>,
    pub password: Option<String>,
    pub method: Option<String>,
    pub data_limit_bytes: Option<u64>,
}

/// Build the request payload, emitting only the fields that are present.
///
/// `data_limit_bytes` nests as `{"limit":{"bytes":N}}` - that shape is the
/// server's expected schema and must not be flattened.
fn key_payload(
    name: &Option<String>,
    password: &Option<String>,
    method: &Option<String>,
    data_limit_bytes: Option<u64>,
) -> Value {
    let mut payload = json!({});

    if let Some(name) = name {
        payload["name"] = json!(name);
    }
    if let Some(password) = password {
        payload["password"] = json!(password);
    }
    if let Some(method) = method {
        payload["method"] = json!(method);
    }
    if let Some(bytes) = data_limit_bytes {
        payload["limit"] = json!({ "bytes": bytes });
    }

    payload
}

impl CreateAccessKeyParams {
    pub fn to_json(&self) -> Value {
        key_payload(&self.name, &self.password, &self.method, self.data_limit_bytes)
    }
}

impl UpdateAccessKeyParams {
    pub fn to_json(&self) -> Value {
        key_payload(&self.name, &self.password, &self.method, self.data_limit_bytes)
    }
}

/// A data-transfer limit attached to an access key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DataLimit {
    pub bytes: u64,
}

/// One access key as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessKey {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(rename = "accessUrl", default)]
    pub access_url: Option<String>,
    #[serde(rename = "dataLimit", default)]
    pub data_limit: Option<DataLimit>,
}

/// The `{"accessKeys":[...]}` wrapper returned by the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessKeyList {
    #[serde(rename = "accessKeys")]
    pub access_keys: Vec<AccessKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params_emit_only_present_fields() {
        let params = CreateAccessKeyParams {
            name: Some("alice".to_string()),
            data_limit_bytes: Some(1000),
            ..Default::default()
        };
        let payload = params.to_json();

        assert_eq!(payload["name"], "alice");
        assert_eq!(payload["limit"]["bytes"], 1000);
        assert!(payload.get("password").is_none());
        assert!(payload.get("method").is_none());
        assert_eq!(payload.as_object().unwrap().len(), 2);
    }

    #[test]
    fn empty_params_emit_empty_object() {
        let payload = CreateAccessKeyParams::default().to_json();
        assert_eq!(payload, serde_json::json!({}));
        assert_eq!(payload.to_string(), "{}");
    }

    #[test]
    fn data_limit_is_nested_not_flat() {
        let params = UpdateAccessKeyParams {
            data_limit_bytes: Some(5_000_000_000),
            ..Default::default()
        };
        let payload = params.to_json();

        assert!(payload.get("data_limit_bytes").is_none());
        assert!(payload.get("bytes").is_none());
        assert_eq!(payload["limit"]["bytes"], 5_000_000_000u64);
    }

    #[test]
    fn update_params_single_field() {
        let params = UpdateAccessKeyParams {
            method: Some("aes-256-gcm".to_string()),
            ..Default::default()
        };
        let payload = params.to_json();
        assert_eq!(payload.to_string(), r#"{"method":"aes-256-gcm"}"#);
    }

    #[test]
    fn access_key_list_deserializes() {
        let body = r#"{"accessKeys":[{"id":"1","name":"alice","port":443,
            "accessUrl":"ss://abc@host:443","dataLimit":{"bytes":1000}}]}"#;
        let list: AccessKeyList = serde_json::from_str(body).unwrap();
        assert_eq!(list.access_keys.len(), 1);
        assert_eq!(list.access_keys[0].id, "1");
        assert_eq!(list.access_keys[0].name, "alice");
        assert_eq!(list.access_keys[0].data_limit.unwrap().bytes, 1000);
    }

    #[test]
    fn access_key_tolerates_missing_optional_fields() {
        let key: AccessKey = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(key.id, "7");
        assert_eq!(key.name, "");
        assert!(key.data_limit.is_none());
    }
}

use std::collections::HashMap;

use url::Url;

/// Append an endpoint path to a base URL without duplicating separators.
///
/// Only the path is touched; scheme, host, port and any query string on
/// the base URL are preserved.
pub fn append_url(base: &Url, endpoint: &str) -> Url {
    let mut url = base.clone();
    let path = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    );
    url.set_path(&path);
    url
}

/// Substitute every `{name}` placeholder in `template` with its mapped value.
pub fn replace_placeholders(template: &str, placeholders: &HashMap<&str, String>) -> String {
    let mut resolved = template.to_string();
    for (name, value) in placeholders {
        resolved = resolved.replace(&format!("{{{name}}}"), value);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_url_joins_paths() {
        let base = Url::parse("https://server.example.com:8081/SecretPath").unwrap();
        let url = append_url(&base, "access-keys");
        assert_eq!(
            url.as_str(),
            "https://server.example.com:8081/SecretPath/access-keys"
        );
    }

    #[test]
    fn append_url_does_not_duplicate_separators() {
        let base = Url::parse("https://server.example.com/prefix/").unwrap();
        let url = append_url(&base, "/access-keys");
        assert_eq!(url.path(), "/prefix/access-keys");
    }

    #[test]
    fn append_url_preserves_query() {
        let base = Url::parse("https://server.example.com/api?token=abc").unwrap();
        let url = append_url(&base, "access-keys");
        assert_eq!(url.path(), "/api/access-keys");
        assert_eq!(url.query(), Some("token=abc"));
    }

    #[test]
    fn replace_placeholders_substitutes_all() {
        let mut placeholders = HashMap::new();
        placeholders.insert("keyId", "42".to_string());
        let resolved = replace_placeholders("access-keys/{keyId}", &placeholders);
        assert_eq!(resolved, "access-keys/42");
    }

    #[test]
    fn replace_placeholders_leaves_unknown_names_alone() {
        let placeholders = HashMap::new();
        let resolved = replace_placeholders("access-keys/{keyId}", &placeholders);
        assert_eq!(resolved, "access-keys/{keyId}");
    }
}

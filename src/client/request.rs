//! Request construction: URL, form body, headers, and redacted debug dumps.

use crate::call::Call;
use crate::client::Client;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, COOKIE, ORIGIN, REFERER};

// =============================================================================

impl Client {
    // -------------------------------------------------------------------------
    //
    /// Builds the batchexecute URL for one call:
    /// `https://{host}/_/{app}/data/batchexecute?…`.
    ///
    /// Query parameters start from the built-in set (`rpcids`, `source-path`,
    /// `bl`, `hl`, `_reqid`, `rt`), then the config's extra parameters, then
    /// the call's overrides; later values replace earlier ones by name.
    #[must_use]
    pub(crate) fn request_url(&self, call: &Call, request_id: &str) -> String {
        let mut parameters: Vec<(String, String)> = vec![
            ("rpcids".to_string(), call.rpc_id.clone()),
            ("source-path".to_string(), call.source_path()),
            ("bl".to_string(), self.config.build_id.clone()),
            ("hl".to_string(), self.config.language.clone()),
            ("_reqid".to_string(), request_id.to_string()),
            ("rt".to_string(), "c".to_string()),
        ];
        for (name, value) in &self.config.url_params {
            merge_parameter(&mut parameters, name, value);
        } // for
        for (name, value) in &call.url_params {
            merge_parameter(&mut parameters, name, value);
        } // for

        let query = parameters
            .iter()
            .map(|(name, value)| {
                format!(
                    "{name}={value}",
                    value = utf8_percent_encode(value, NON_ALPHANUMERIC),
                )
            })
            .collect::<Vec<String>>()
            .join("&");

        format!(
            "{scheme}://{host}/_/{app}/data/batchexecute?{query}",
            scheme = self.config.scheme,
            host = self.config.host,
            app = self.config.app,
        )
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Builds the form-encoded request body: `f.req` carries the envelope,
    /// `at` carries the auth token.
    ///
    /// # Errors
    ///
    /// Returns an error when the argument array cannot be serialized.
    pub(crate) fn form_body(&self, call: &Call) -> Result<String, crate::Error> {
        let envelope = call.envelope()?;
        Ok(format!(
            "f.req={envelope}&at={token}",
            envelope = utf8_percent_encode(&envelope, NON_ALPHANUMERIC),
            token = utf8_percent_encode(self.credentials.auth_token(), NON_ALPHANUMERIC),
        ))
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The request headers: the built-in batchexecute set, the config's
    /// additions, then the session cookie. Invalid names or values are
    /// skipped with a warning rather than failing the call.
    #[must_use]
    pub(crate) fn request_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded;charset=UTF-8"),
        );
        let base = format!("{}://{}", self.config.scheme, self.config.host);
        if let Ok(origin) = HeaderValue::from_str(&base) {
            headers.insert(ORIGIN, origin);
        } // if
        if let Ok(referer) = HeaderValue::from_str(&format!("{base}/")) {
            headers.insert(REFERER, referer);
        } // if
        headers.insert(
            HeaderName::from_static("x-same-domain"),
            HeaderValue::from_static("1"),
        );

        for (name, value) in &self.config.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(header_name), Ok(header_value)) => {
                    headers.insert(header_name, header_value);
                } // Ok
                _ => tracing::warn!(header = %name, "skipping invalid header"),
            } // match
        } // for

        if !self.credentials.cookies().is_empty() {
            match HeaderValue::from_str(self.credentials.cookies()) {
                Ok(cookie) => {
                    headers.insert(COOKIE, cookie);
                } // Ok
                Err(_) => tracing::warn!("skipping cookie header with invalid value"),
            } // match
        } // if

        headers
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Renders a redacted request dump. The token and every cookie value are
    /// masked; the dump is rebuilt from parts so neither secret ever enters
    /// the string.
    #[must_use]
    pub(crate) fn masked_request_dump(
        &self,
        url: &str,
        headers: &HeaderMap,
        call: &Call,
    ) -> String {
        let masked_body = call.envelope().map_or_else(
            |_| "<unserializable>".to_string(),
            |envelope| {
                format!(
                    "f.req={envelope}&at={token}",
                    token = crate::redact::mask_token(self.credentials.auth_token()),
                )
            },
        );

        let masked_headers = headers
            .iter()
            .map(|(name, value)| {
                if name == &COOKIE {
                    format!(
                        "{name}: {cookies}",
                        cookies = crate::redact::mask_cookies(self.credentials.cookies()),
                    )
                } else {
                    format!("{name}: {value}", value = value.to_str().unwrap_or("<binary>"))
                } // if
            })
            .collect::<Vec<String>>()
            .join("\n");

        format!("POST {url}\n{masked_headers}\n\n{masked_body}")
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Emits the redacted request dump through `tracing`.
    pub(crate) fn dump_request(&self, url: &str, headers: &HeaderMap, call: &Call) {
        tracing::debug!(
            "batchexecute request:\n{dump}",
            dump = self.masked_request_dump(url, headers, call),
        );
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// Emits a bounded response dump through `tracing`.
pub(crate) fn dump_response(status: reqwest::StatusCode, body: &str) {
    tracing::debug!(
        status = %status,
        body = %crate::status::excerpt(body),
        "batchexecute response"
    );
} // fn

// -----------------------------------------------------------------------------
//
/// Replaces a parameter by name, or appends it.
fn merge_parameter(parameters: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some(existing) = parameters
        .iter_mut()
        .find(|(existing_name, _)| existing_name.as_str() == name)
    {
        existing.1 = value.to_string();
    } else {
        parameters.push((name.to_string(), value.to_string()));
    } // if
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::credentials::Credentials;
    use serde_json::json;

    fn test_client() -> Client {
        Client::try_new(
            Credentials::new("secret-token-value-12345", "SID=cookiesecret; HSID=other"),
            ClientConfig::new().with_url_param("f.sid", "12345").build(),
        )
        .unwrap()
    }

    #[test]
    fn test_request_url_contains_required_parameters() {
        let client = test_client();
        let call = Call::new("wXbhsf", json!([])).with_notebook("abc-123");
        let url = client.request_url(&call, "4217");
        assert!(url.starts_with(
            "https://notebooklm.google.com/_/LabsTailwindUi/data/batchexecute?"
        ));
        assert!(url.contains("rpcids=wXbhsf"));
        assert!(url.contains("source-path=%2Fnotebook%2Fabc%2D123"));
        assert!(url.contains("_reqid=4217"));
        assert!(url.contains("f.sid=12345"));
    }

    #[test]
    fn test_per_call_parameters_override_config() {
        let client = test_client();
        let call = Call::new("wXbhsf", json!([])).with_url_param("f.sid", "67890");
        let url = client.request_url(&call, "1000");
        assert!(url.contains("f.sid=67890"));
        assert!(!url.contains("f.sid=12345"));
    }

    #[test]
    fn test_form_body_carries_envelope_and_token() {
        let client = test_client();
        let call = Call::new("wXbhsf", json!([null, 1]));
        let body = client.form_body(&call).unwrap();
        assert!(body.starts_with("f.req="));
        assert!(body.contains("&at=secret%2Dtoken%2Dvalue%2D12345"));
    }

    #[test]
    fn test_headers_include_batchexecute_set() {
        let client = test_client();
        let headers = client.request_headers();
        assert_eq!(
            headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded;charset=UTF-8",
        );
        assert_eq!(headers.get(ORIGIN).unwrap(), "https://notebooklm.google.com");
        assert_eq!(headers.get("x-same-domain").unwrap(), "1");
        assert!(headers.get(COOKIE).is_some());
    }

    #[test]
    fn test_dump_never_contains_secrets() {
        let client = test_client();
        let call = Call::new("wXbhsf", json!([null, 1]));
        let url = client.request_url(&call, "1000");
        let headers = client.request_headers();
        let dump = client.masked_request_dump(&url, &headers, &call);
        assert!(!dump.contains("secret-token-value-12345"));
        assert!(!dump.contains("cookiesecret"));
        assert!(dump.contains("cookie"));
        assert!(dump.contains("SID="));
    }
}

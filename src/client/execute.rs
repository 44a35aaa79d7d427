//! The transport loop: send, retry, frame, classify, extract.

use crate::call::Call;
use crate::client::Client;
use crate::response::{Error as ResponseError, RawResponse, ResponseTuple};
use crate::traits::ClassifiableError;
use backon::{ExponentialBuilder, Retryable};
use reqwest::StatusCode;

// -----------------------------------------------------------------------------
//
/// One successful exchange: the first result tuple plus the raw body, which
/// the resilient list parser re-reads when structured decoding falls short.
#[derive(Clone, Debug)]
pub(crate) struct Executed {
    /// The first `wrb.fr` (or synthetic numeric) tuple.
    pub tuple: ResponseTuple,

    /// The raw response body.
    pub body: String,
} // struct

// =============================================================================

impl Client {
    // -------------------------------------------------------------------------
    //
    /// Executes one batchexecute call and returns its first result tuple.
    ///
    /// The call is retried per the configured policy on transient failures:
    /// the network-error pattern list and HTTP 429/500/502/503/504. Other
    /// failures surface immediately with their original cause. Dropping the
    /// returned future cancels the in-flight request and any pending retry
    /// sleep.
    ///
    /// # Errors
    ///
    /// * A typed API error when the server answers with an error status.
    /// * A transport error when every attempt failed at the HTTP level.
    /// * A response error when a 2xx body cannot be interpreted.
    /// * `DeadlineExceeded` when the configured wall-clock budget, which
    ///   spans all attempts, elapses first.
    pub async fn execute(&self, call: &Call) -> Result<ResponseTuple, crate::Error> {
        self.execute_with_body(call)
            .await
            .map(|executed| executed.tuple)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// `execute`, keeping the raw body for callers that re-parse it.
    pub(crate) async fn execute_with_body(&self, call: &Call) -> Result<Executed, crate::Error> {
        match self.config.timeout {
            Some(deadline) => tokio::time::timeout(deadline, self.execute_inner(call))
                .await
                .map_err(|_| crate::Error::DeadlineExceeded(deadline))?,
            None => self.execute_inner(call).await,
        } // match
    } // fn

    // -------------------------------------------------------------------------
    //
    #[tracing::instrument(level = "info", skip(self, call), fields(rpc_id = %call.rpc_id))]
    async fn execute_inner(&self, call: &Call) -> Result<Executed, crate::Error> {
        let request_id = self.request_ids.next_id();
        let url = self.request_url(call, &request_id);
        let body = self.form_body(call)?;
        let headers = self.request_headers();

        if self.debug {
            self.dump_request(&url, &headers, call);
        } // if

        // One attempt: POST, read, interpret. The closure is re-invoked by
        // `backon` with exponential back-off while failures classify as
        // transient.
        let http_requestor = || async {
            let response = self
                .reqwest_client
                .post(&url)
                .headers(headers.clone())
                .body(body.clone())
                .send()
                .await?;
            let status = response.status();
            let text = response.text().await?;
            if self.debug {
                crate::client::request::dump_response(status, &text);
            } // if
            interpret_response(status, &text)
        }; // async function closure

        let executed = http_requestor
            .retry(self.retry_policy())
            .when(|error: &crate::Error| error.classify().is_transient())
            .notify(|error, delay: std::time::Duration| {
                tracing::warn!("transient failure: {error}; retrying after {delay:?}");
            })
            .await?;

        Ok(executed)
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The back-off schedule from the config: `min(initial · 2^(k−1), max)`
    /// before attempt `k`, up to `max_retries` additional attempts.
    fn retry_policy(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(self.config.initial_delay)
            .with_max_delay(self.config.max_delay)
            .with_max_times(self.config.max_retries as usize)
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// Interprets one HTTP exchange.
///
/// Non-2xx statuses map through the error dictionary. 2xx bodies are framed
/// and the first result tuple extracted; its payload is then checked for an
/// RPC-level error status before being handed back.
pub(crate) fn interpret_response(
    status: StatusCode,
    body: &str,
) -> Result<Executed, crate::Error> {
    if !status.is_success() {
        return Err(crate::Error::Api(crate::status::parse_body_error(
            body,
            status.as_u16(),
        )));
    } // if

    let response = RawResponse::parse(body);
    let tuple = response
        .first_result()
        .cloned()
        .ok_or_else(|| ResponseError::NoRpcResult {
            excerpt: crate::status::excerpt(body),
        })?;

    let payload = tuple.payload()?;
    if let Some(api_error) = crate::status::is_error_response(&payload) {
        return Err(crate::Error::Api(api_error));
    } // if

    Ok(Executed {
        tuple,
        body: body.to_string(),
    }) // Executed
} // fn

// -----------------------------------------------------------------------------
//
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::ErrorCategory;
    use serde_json::json;

    #[test]
    fn test_success_marker_bodies() {
        for body in [")]}'\n0", ")]}'\n1"] {
            let executed = interpret_response(StatusCode::OK, body).unwrap();
            assert_eq!(executed.tuple.discriminator, "numeric");
        }
    }

    #[test]
    fn test_error_code_body() {
        let error = interpret_response(StatusCode::OK, ")]}'\n277567").unwrap_err();
        let api_error = error.as_api().unwrap();
        assert_eq!(api_error.category(), ErrorCategory::Authentication);
        assert_eq!(api_error.numeric_code(), Some(277567));
        assert_eq!(api_error.message, "Authentication token expired");
        assert!(!api_error.is_retryable());
    }

    #[test]
    fn test_empty_list_scenario_succeeds() {
        let body = ")]}'\n107\n[[\"wrb.fr\",\"wXbhsf\",null,null,null,[16],\"generic\"]]\
            \n25\n[[\"e\",4,null,null,143]]";
        let executed = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(executed.tuple.rpc_id, "wXbhsf");
        assert_eq!(executed.tuple.payload().unwrap(), json!([16]));
    }

    #[test]
    fn test_index_five_fallback_scenario() {
        let body = r#"[["wrb.fr","izAoDd",null,null,null,[3],"generic"]]"#;
        let executed = interpret_response(StatusCode::OK, body).unwrap();
        assert_eq!(executed.tuple.payload().unwrap(), json!([3]));
    }

    #[test]
    fn test_deep_nested_payload_round_trips() {
        let body = ")]}'\n250\n[[\"wrb.fr\",\"nested\",\
            \"[{\\\"data\\\":{\\\"items\\\":[{\\\"id\\\":\\\"test\\\",\
            \\\"metadata\\\":{\\\"created\\\":1234567890,\\\"modified\\\":1234567891},\
            \\\"content\\\":{\\\"text\\\":\\\"Hello, World!\\\",\\\"format\\\":\\\"plain\\\"}}]}}]\",\
            null,null,null,\"generic\"]]";
        let executed = interpret_response(StatusCode::OK, body).unwrap();
        let payload = executed.tuple.payload().unwrap();
        assert_eq!(
            payload[0]["data"]["items"][0]["content"]["text"],
            json!("Hello, World!"),
        );
        assert_eq!(payload[0]["data"]["items"][0]["metadata"]["created"], json!(1234567890));
    }

    #[test]
    fn test_known_codes_surface_with_table_retryability() {
        for code in [3, 5, 7, 143, 277566, 277567, 80620, 324934, 429, 500] {
            let body = format!(")]}}'\n{code}");
            let error = interpret_response(StatusCode::OK, &body).unwrap_err();
            let api_error = error.as_api().unwrap();
            assert_eq!(api_error.numeric_code(), Some(code));
            let table_entry = crate::status::dictionary::lookup(code).unwrap();
            assert_eq!(
                api_error.code.as_ref().unwrap().retryable,
                table_entry.retryable,
            );
        }
    }

    #[test]
    fn test_http_error_maps_through_dictionary() {
        let error = interpret_response(StatusCode::TOO_MANY_REQUESTS, "whatever").unwrap_err();
        assert!(error.is_retryable());
        let error = interpret_response(StatusCode::BAD_REQUEST, "whatever").unwrap_err();
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_garbage_body_is_a_parse_error() {
        let error = interpret_response(StatusCode::OK, "<html>sorry</html>").unwrap_err();
        assert!(matches!(error, crate::Error::Response(_)));
    }
}

// -----------------------------------------------------------------------------
//
// Round-trip tests against a local mock server.

#[cfg(test)]
mod integration_tests {
    use crate::call::Call;
    use crate::client::Client;
    use crate::config::ClientConfig;
    use crate::credentials::Credentials;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    /// A client aimed at the mock server, with millisecond back-off so the
    /// retry tests stay fast.
    fn test_client(server: &MockServer) -> Client {
        let address = server.address();
        Client::try_new(
            Credentials::new("test-auth-token-value", "SID=test-cookie"),
            ClientConfig::new()
                .with_scheme("http")
                .with_host(format!("{address}"))
                .with_max_retries(2)
                .with_initial_delay(Duration::from_millis(1))
                .with_max_delay(Duration::from_millis(5))
                .build(),
        )
        .unwrap()
        .with_reqwest_client(reqwest::Client::new())
    }

    fn batchexecute_path() -> &'static str {
        "/_/LabsTailwindUi/data/batchexecute"
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let server = MockServer::start().await;
        let body = ")]}'\n[[\"wrb.fr\",\"wXbhsf\",null,null,null,[16],\"generic\"]]";

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tuple = client.execute(&Call::new("wXbhsf", json!([null, 1])))
            .await
            .unwrap();
        assert_eq!(tuple.rpc_id, "wXbhsf");
        assert_eq!(tuple.payload().unwrap(), json!([16]));
    }

    #[tokio::test]
    async fn test_rate_limited_then_success() {
        let server = MockServer::start().await;
        let attempt = AtomicU32::new(0);
        let success = ")]}'\n145\n[[\"wrb.fr\",\"VUsiyb\",\
            \"[null,null,[3,null,\\\"fec1780c-5a14-4f07-8ee6-f8c3ee2930fa\\\",\\\"nbname2\\\",null,true],null,[false]]\",\
            null,null,null,\"generic\"]]";

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(move |_: &Request| {
                if attempt.fetch_add(1, Ordering::SeqCst) == 0 {
                    ResponseTemplate::new(429).set_body_string("slow down")
                } else {
                    ResponseTemplate::new(200).set_body_string(success)
                } // if
            })
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let tuple = client.execute(&Call::new("VUsiyb", json!(["nbname2", "📔"])))
            .await
            .unwrap();
        let payload = tuple.payload().unwrap();
        assert_eq!(payload[2][2], json!("fec1780c-5a14-4f07-8ee6-f8c3ee2930fa"));
        assert_eq!(payload[2][3], json!("nbname2"));
    }

    #[tokio::test]
    async fn test_non_retryable_status_fails_once() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let error = client.execute(&Call::new("wXbhsf", json!([])))
            .await
            .unwrap_err();
        let api_error = error.as_api().unwrap();
        assert_eq!(api_error.http_status, Some(400));
        assert!(!error.is_retryable());
    }

    #[tokio::test]
    async fn test_retries_exhaust_then_surface() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .expect(3) // initial + 2 retries
            .mount(&server)
            .await;

        let client = test_client(&server);
        let error = client.execute(&Call::new("wXbhsf", json!([])))
            .await
            .unwrap_err();
        assert_eq!(error.as_api().unwrap().http_status, Some(503));
    }

    #[tokio::test]
    async fn test_rpc_level_auth_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(ResponseTemplate::new(200).set_body_string(")]}'\n277567"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        let error = client.execute(&Call::new("wXbhsf", json!([])))
            .await
            .unwrap_err();
        let api_error = error.as_api().unwrap();
        assert_eq!(api_error.numeric_code(), Some(277567));
        assert_eq!(api_error.message, "Authentication token expired");
    }

    #[tokio::test]
    async fn test_request_shape_on_the_wire() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(|request: &Request| {
                let query = request.url.query().unwrap_or("");
                assert!(query.contains("rpcids=wXbhsf"));
                assert!(query.contains("_reqid="));
                assert!(query.contains("rt=c"));

                let body = String::from_utf8_lossy(&request.body);
                assert!(body.starts_with("f.req="));
                assert!(body.contains("at=test%2Dauth%2Dtoken%2Dvalue"));

                let content_type = request
                    .headers
                    .get("content-type")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or_default();
                assert!(content_type.starts_with("application/x-www-form-urlencoded"));

                ResponseTemplate::new(200).set_body_string(")]}'\n0")
            })
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.execute(&Call::new("wXbhsf", json!([null, 1])))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_wall_clock_timeout_spans_retries() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(batchexecute_path()))
            .respond_with(
                ResponseTemplate::new(503).set_delay(Duration::from_millis(50)),
            )
            .mount(&server)
            .await;

        let address = *server.address();
        let client = Client::try_new(
            Credentials::new("token", "cookie=1"),
            ClientConfig::new()
                .with_scheme("http")
                .with_host(format!("{address}"))
                .with_max_retries(10)
                .with_initial_delay(Duration::from_millis(1))
                .with_max_delay(Duration::from_millis(2))
                .with_timeout(Duration::from_millis(120))
                .build(),
        )
        .unwrap();

        let error = client
            .execute(&Call::new("wXbhsf", json!([])))
            .await
            .unwrap_err();
        assert!(matches!(error, crate::Error::DeadlineExceeded(_)));
    }
}

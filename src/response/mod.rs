//! Interpretation of batchexecute response bodies as RPC result tuples.

pub mod error;
pub mod framer;

pub use error::Error;

use serde_json::Value;

// -----------------------------------------------------------------------------
//
/// Discriminator of a tuple carrying one RPC's result.
pub const RPC_RESULT: &str = "wrb.fr";

/// Discriminator of the synthetic tuple built from a bare-number body, so
/// that numeric statuses classify through the same path as framed results.
pub const NUMERIC: &str = "numeric";

/// Discriminators of bookkeeping tuples that carry no RPC result.
pub const BOOKKEEPING: [&str; 3] = ["di", "af.httprm", "e"];

// -----------------------------------------------------------------------------
//
/// One response tuple as it appears on the wire: a discriminator, the echoed
/// rpc id, a payload slot, and trailing bookkeeping slots.
#[derive(Clone, Debug)]
pub struct ResponseTuple {
    /// Almost always `"wrb.fr"`. `"numeric"` marks a synthetic tuple built
    /// from a bare-number body.
    pub discriminator: String,

    /// The rpc id echoed back by the server.
    pub rpc_id: String,

    /// Raw payload slot (index 2): a JSON string that itself decodes to a
    /// positional array, a direct value, or null.
    payload: Value,

    /// Fallback payload slot (index 5), used when index 2 is null.
    fallback: Value,

    /// The tuple's position in the batch, decoded from index 6: `"generic"`
    /// means position 0, a decimal string is its numeric value, and any other
    /// value is dropped.
    pub batch_index: Option<usize>,
} // struct

// -----------------------------------------------------------------------------

impl ResponseTuple {
    // -------------------------------------------------------------------------
    //
    /// Reads one tuple out of a decoded JSON array. Bookkeeping tuples are
    /// kept; callers filter with `is_rpc_result`. Returns `None` when the
    /// value is not an array or carries no discriminator.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let elements = value.as_array()?;
        let discriminator = elements.first()?.as_str()?.to_string();

        // Slot 1 is normally the rpc id string; bookkeeping tuples put other
        // scalars there.
        let rpc_id = match elements.get(1) {
            Some(Value::String(id)) => id.clone(),
            Some(other) if !other.is_null() => other.to_string(),
            _ => String::new(),
        };

        Some(Self {
            discriminator,
            rpc_id,
            payload: elements.get(2).cloned().unwrap_or(Value::Null),
            fallback: elements.get(5).cloned().unwrap_or(Value::Null),
            batch_index: parse_batch_index(elements.get(6)),
        }) // ResponseTuple
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Wraps a bare numeric status in a synthetic tuple.
    #[must_use]
    pub fn from_number(number: i64) -> Self {
        Self {
            discriminator: NUMERIC.to_string(),
            rpc_id: String::new(),
            payload: Value::from(number),
            fallback: Value::Null,
            batch_index: Some(0),
        } // ResponseTuple
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Whether this tuple carries an RPC result (as opposed to bookkeeping).
    #[must_use]
    pub fn is_rpc_result(&self) -> bool {
        self.discriminator == RPC_RESULT || self.discriminator == NUMERIC
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Extracts the tuple's payload.
    ///
    /// A string in the primary slot is itself JSON and is decoded; a null
    /// primary slot falls back to index 5; anything else is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns an error when the primary slot holds a string that is not
    /// valid JSON.
    pub fn payload(&self) -> Result<Value, Error> {
        match &self.payload {
            Value::String(encoded) => {
                serde_json::from_str(encoded).map_err(|source| Error::PayloadJson {
                    source,
                    excerpt: crate::status::excerpt(encoded),
                })
            } // String
            Value::Null => Ok(self.fallback.clone()),
            direct => Ok(direct.clone()),
        } // match
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
/// Index 6 is `"generic"` for position 0 or a decimal string for the tuple's
/// position in the batch. Other observed values are dropped silently.
fn parse_batch_index(slot: Option<&Value>) -> Option<usize> {
    match slot {
        Some(Value::String(text)) if text == "generic" => Some(0),
        Some(Value::String(text)) => text.parse().ok(),
        _ => None,
    } // match
} // fn

// -----------------------------------------------------------------------------
//
/// An ordered sequence of response tuples decoded from one response body.
#[derive(Clone, Debug, Default)]
pub struct RawResponse {
    /// All tuples in arrival order, bookkeeping included.
    pub tuples: Vec<ResponseTuple>,
} // struct

// -----------------------------------------------------------------------------

impl RawResponse {
    // -------------------------------------------------------------------------
    //
    /// Frames a response body and decodes every tuple it contains. Fragments
    /// and elements that do not parse are skipped; the caller decides whether
    /// an empty result is an error.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        Self::from_fragments(framer::frames(body))
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Decodes tuples out of already-framed fragments. Used by the resilient
    /// list parser, which re-joins fragments before tuple extraction.
    #[must_use]
    pub fn from_fragments(fragments: Vec<String>) -> Self {
        let mut tuples = Vec::new();

        for fragment in fragments {
            let Ok(value) = serde_json::from_str::<Value>(&fragment) else {
                tracing::debug!(
                    fragment = %crate::status::excerpt(&fragment),
                    "skipping unparseable fragment"
                );
                continue;
            };

            match value {
                Value::Number(ref number) => {
                    if let Some(code) = number.as_i64() {
                        tuples.push(ResponseTuple::from_number(code));
                    } // if
                } // Number

                Value::Array(chunk) => {
                    for element in &chunk {
                        if let Some(tuple) = ResponseTuple::from_value(element) {
                            tuples.push(tuple);
                        } // if
                    } // for
                } // Array

                other => {
                    tracing::debug!(kind = ?other, "skipping non-chunk fragment");
                } // _
            } // match
        } // for

        Self { tuples }
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The first tuple carrying an RPC result, if any.
    #[must_use]
    pub fn first_result(&self) -> Option<&ResponseTuple> {
        self.tuples.iter().find(|tuple| tuple.is_rpc_result())
    } // fn

    // -------------------------------------------------------------------------
    //
    /// The first result tuple echoing the given rpc id.
    #[must_use]
    pub fn result_for(&self, rpc_id: &str) -> Option<&ResponseTuple> {
        self.tuples
            .iter()
            .find(|tuple| tuple.is_rpc_result() && tuple.rpc_id == rpc_id)
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests

//! Generates the `_reqid` correlators that the batchexecute endpoint expects
//! on every request.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

// -----------------------------------------------------------------------------
//
/// Produces monotonically-increasing per-process request correlators in the
/// pattern used by the upstream service: a random four-digit base `B`, then
/// `B + n · 100,000` for the `n`-th request.
///
/// The counter is atomic, so concurrent callers observe a total order over the
/// generated identifiers. Cloning a client shares the generator through the
/// client itself; a fresh generator starts a fresh sequence from a new base.
#[derive(Debug)]
pub struct RequestIdGenerator {
    /// Random four-digit base drawn at construction. Stable for the lifetime
    /// of the generator, including across `reset`.
    base: u64,

    /// Number of identifiers handed out so far.
    count: AtomicU64,
} // struct

// -----------------------------------------------------------------------------

impl RequestIdGenerator {
    // -------------------------------------------------------------------------
    //
    /// Instantiates a new generator with a uniformly random base in
    /// `[1000, 9999]`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: rand::thread_rng().gen_range(1000..=9999),
            count: AtomicU64::new(0),
        } // RequestIdGenerator
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Instantiates a generator with a caller-chosen base. Used by tests that
    /// need deterministic identifiers.
    #[must_use]
    pub const fn with_base(base: u64) -> Self {
        Self {
            base,
            count: AtomicU64::new(0),
        } // RequestIdGenerator
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Returns the next request identifier in decimal form.
    ///
    /// The first call returns the base itself, the second the base plus
    /// `100,000`, and so on.
    pub fn next_id(&self) -> String {
        let n = self.count.fetch_add(1, Ordering::SeqCst);
        (self.base + n * 100_000).to_string()
    } // fn

    // -------------------------------------------------------------------------
    //
    /// Rewinds the sequence to the beginning. The random base is preserved, so
    /// a reset generator repeats its earlier identifiers.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    } // fn
} // impl

// -----------------------------------------------------------------------------

impl Default for RequestIdGenerator {
    fn default() -> Self {
        Self::new()
    } // fn
} // impl

// -----------------------------------------------------------------------------
//
// Tests

//! Contains `trait` declarations that are used internally in the
//! `notebooklm` crate, particularly for deciding which failures the
//! transport retries.

pub mod classifiable_error;

pub use classifiable_error::ClassifiableError;

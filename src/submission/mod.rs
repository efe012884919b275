//! Client-side questionnaire contract.
//!
//! The server stores `answer` as an opaque string; the typed schema of
//! that blob lives here and nowhere else. Assembly produces the
//! envelope (`question`/`description`) plus the serialized blob, and
//! decoding is defensive: missing fields default, unknown enum values
//! map to a placeholder, and non-JSON blobs fall back to raw display.

pub mod schema;
pub mod view;

//! Utility modules for xmloutput.
//!
//! Contains the `%g`-compatible floating point formatter used for numeric
//! element and attribute values.

pub mod numfmt;

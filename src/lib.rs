//! # xmloutput
//!
//! A small incremental XML writer. Markup is streamed straight to any
//! [`std::io::Write`] sink while the writer tracks element nesting and
//! attribute state, so call sequences that would produce malformed XML are
//! caught as contract violations instead of silently written.
//!
//! ## Quick Start
//!
//! ```
//! use xmloutput::{Mode, XmlWriter};
//!
//! let mut w = XmlWriter::new(Vec::new());
//! w.begin_document("1.0", "UTF-8", true).unwrap();
//! w.begin_element_attrs("shape").unwrap();
//! w.write_attr("kind", "circle").unwrap();
//! w.write_attr("filled", false).unwrap();
//! w.end_attrs(Mode::Normal).unwrap();
//! w.write_element("radius", 2.5).unwrap();
//! w.end_element(Mode::Normal).unwrap();
//!
//! let xml = String::from_utf8(w.finish()).unwrap();
//! assert!(xml.contains("<shape kind=\"circle\" filled=\"False\">\n"));
//! assert!(xml.contains("\t<radius>2.5</radius>\n"));
//! ```
//!
//! The writer performs no character escaping. Text and attribute values are
//! written exactly as given.

pub mod error;
pub mod util;
pub mod writer;

// Re-export primary types at the crate root for convenience.
pub use error::ContractViolation;
pub use writer::{Mode, WriterOptions, XmlValue, XmlWriter};

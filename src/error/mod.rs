//! Contract violations raised by the XML writer.
//!
//! The writer distinguishes two kinds of failure. Sink failures are plain
//! [`std::io::Error`]s and are returned to the caller untouched. Contract
//! violations are malformed call sequences (closing an element that was never
//! opened, writing an attribute after the start tag was closed, ...). They
//! indicate a bug in the calling code and are fatal: the writer panics with
//! the [`ContractViolation`] as its message.
//!
//! [`XmlWriter::check_complete`](crate::XmlWriter::check_complete) exposes the
//! end-of-document check as a `Result` for callers that want to inspect it
//! without panicking.

use std::fmt;

/// A call sequence that would produce malformed XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// An element or attribute name was empty.
    EmptyName,
    /// The XML declaration was given an empty version string.
    EmptyVersion,
    /// The XML declaration was given an empty encoding string.
    EmptyEncoding,
    /// A start tag is still accepting attributes, so content, a new element,
    /// or an end tag cannot be written yet.
    AttributesOpen {
        /// The element whose attribute section is open.
        element: String,
    },
    /// An attribute was written, or an attribute section closed, while no
    /// start tag was accepting attributes.
    AttributesNotOpen,
    /// `end_element` was called with no element open.
    NoOpenElement,
    /// The document was ended while elements were still open.
    UnclosedElements {
        /// Number of elements left open.
        depth: usize,
        /// Name of the innermost open element.
        innermost: String,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "element and attribute names must not be empty"),
            Self::EmptyVersion => write!(f, "XML declaration version must not be empty"),
            Self::EmptyEncoding => write!(f, "XML declaration encoding must not be empty"),
            Self::AttributesOpen { element } => {
                write!(f, "attribute section of <{element}> is still open")
            }
            Self::AttributesNotOpen => write!(f, "no start tag is accepting attributes"),
            Self::NoOpenElement => write!(f, "end_element called with no open element"),
            Self::UnclosedElements { depth, innermost } => write!(
                f,
                "document ended with {depth} unclosed element(s), innermost <{innermost}>"
            ),
        }
    }
}

impl std::error::Error for ContractViolation {}

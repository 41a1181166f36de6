//! Incremental XML writer.
//!
//! [`XmlWriter`] emits XML text straight to an [`io::Write`] sink while
//! tracking which elements are open and whether the current start tag is
//! still accepting attributes. Call sequences that would produce malformed
//! markup are contract violations and panic (see [`crate::error`]).
//!
//! Output is byte-exact and deliberately simple:
//!
//! - one indentation unit (a tab by default) per nesting level before every
//!   start tag, and before every end tag written in [`Mode::Normal`],
//! - a newline after each start tag in [`Mode::Normal`] and after every end
//!   tag,
//! - no escaping of any kind. Callers must pre-escape `<`, `>`, `&` and `"`
//!   in element text and attribute values.
//!
//! # Examples
//!
//! ```
//! use xmloutput::{Mode, XmlWriter};
//!
//! let mut w = XmlWriter::new(Vec::new());
//! w.begin_document("1.0", "UTF-8", true).unwrap();
//! w.begin_element("root", Mode::Normal).unwrap();
//! w.write_element("child", 42).unwrap();
//! w.end_element(Mode::Normal).unwrap();
//! let out = w.finish();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
//!      <root>\n\
//!      \t<child>42</child>\n\
//!      </root>\n"
//! );
//! ```

pub mod value;

use std::io::{self, Write};

use crate::error::ContractViolation;

pub use value::XmlValue;

/// Layout of a start or end tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The tag sits on its own line: start tags are followed by a newline and
    /// end tags are indented.
    #[default]
    Normal,
    /// Compact layout for leaf elements: no newline after a start tag, no
    /// indentation before an end tag.
    Terse,
}

/// Options controlling [`XmlWriter`] output.
#[derive(Debug, Clone)]
pub struct WriterOptions {
    /// The string written once per nesting level before a tag.
    /// Defaults to a single tab.
    pub indent_str: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent_str: "\t".to_string(),
        }
    }
}

impl WriterOptions {
    /// Sets the indentation unit written for each nesting level.
    ///
    /// The default is a tab (`"\t"`). Passing an empty string disables
    /// indentation entirely.
    #[must_use]
    pub fn indent_str(mut self, s: &str) -> Self {
        self.indent_str = s.to_string();
        self
    }
}

/// Streams well-formed XML to a byte sink.
///
/// The writer keeps an owned stack of open element names, so the nesting
/// depth is always `open_elements().len()`. Every operation checks its
/// preconditions before writing a single byte and updates the stack only
/// after the sink accepted the operation's output.
///
/// # Errors and panics
///
/// Emitting methods return the sink's [`io::Error`] unchanged. A sink error
/// may leave part of a tag written, but the writer state still reflects the
/// last fully written operation.
///
/// Contract violations panic. They are listed under *Panics* on each method.
///
/// # Borrowing the sink
///
/// `XmlWriter` takes `W` by value. Pass `&mut sink` to keep ownership with
/// the caller, since `&mut W` is itself [`Write`].
#[derive(Debug)]
pub struct XmlWriter<W: Write> {
    sink: W,
    options: WriterOptions,
    open_elements: Vec<String>,
    in_attributes: bool,
}

impl<W: Write> XmlWriter<W> {
    /// Creates a writer with default options.
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Creates a writer with the given options.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        Self {
            sink,
            options,
            open_elements: Vec::new(),
            in_attributes: false,
        }
    }

    // -----------------------------------------------------------------------
    // State
    // -----------------------------------------------------------------------

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open_elements.len()
    }

    /// Names of the open elements, outermost first.
    #[must_use]
    pub fn open_elements(&self) -> &[String] {
        &self.open_elements
    }

    /// Returns `true` while a start tag is accepting attributes.
    #[must_use]
    pub fn in_attributes(&self) -> bool {
        self.in_attributes
    }

    /// Returns `true` if the document could be ended now.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.check_complete().is_ok()
    }

    /// Checks the end-of-document conditions without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::AttributesOpen`] if a start tag is still
    /// accepting attributes, or [`ContractViolation::UnclosedElements`] if
    /// any element is open.
    pub fn check_complete(&self) -> Result<(), ContractViolation> {
        if self.in_attributes {
            return Err(self.attributes_open());
        }
        match self.open_elements.last() {
            Some(innermost) => Err(ContractViolation::UnclosedElements {
                depth: self.open_elements.len(),
                innermost: innermost.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Returns a reference to the sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// Returns a mutable reference to the sink.
    ///
    /// Bytes written directly to the sink bypass all nesting checks.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.sink
    }

    /// Returns the sink without checking that the document is complete.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Ends the document and returns the sink.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`end_document`](Self::end_document).
    pub fn finish(self) -> W {
        self.end_document();
        self.sink
    }

    // -----------------------------------------------------------------------
    // Document structure
    // -----------------------------------------------------------------------

    /// Writes the XML declaration followed by a newline:
    ///
    /// ```text
    /// <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
    /// ```
    ///
    /// The writer does not track whether this has been called; writing it
    /// after any element produces invalid XML.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if `version` or `encoding` is empty.
    pub fn begin_document(
        &mut self,
        version: &str,
        encoding: &str,
        standalone: bool,
    ) -> io::Result<()> {
        if version.is_empty() {
            violation(&ContractViolation::EmptyVersion);
        }
        if encoding.is_empty() {
            violation(&ContractViolation::EmptyEncoding);
        }
        let standalone = if standalone { "yes" } else { "no" };
        writeln!(
            self.sink,
            "<?xml version=\"{version}\" encoding=\"{encoding}\" standalone=\"{standalone}\"?>"
        )
    }

    /// Marks the logical end of the document. Writes nothing.
    ///
    /// # Panics
    ///
    /// Panics if a start tag is accepting attributes or any element is still
    /// open. Use [`check_complete`](Self::check_complete) to test first.
    pub fn end_document(&self) {
        if let Err(v) = self.check_complete() {
            violation(&v);
        }
        log::trace!("XML document complete");
    }

    /// Writes the indentation for the current depth and `<name>`, followed by
    /// a newline unless `mode` is [`Mode::Terse`].
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or a start tag is accepting attributes.
    pub fn begin_element(&mut self, name: &str, mode: Mode) -> io::Result<()> {
        require_name(name);
        self.require_content_allowed();
        self.write_indent(self.depth())?;
        self.sink.write_all(b"<")?;
        self.sink.write_all(name.as_bytes())?;
        self.sink.write_all(b">")?;
        if mode == Mode::Normal {
            self.sink.write_all(b"\n")?;
        }
        self.push_element(name);
        Ok(())
    }

    /// Writes the indentation for the current depth and `<name`, leaving the
    /// start tag open for [`write_attr`](Self::write_attr). Close it with
    /// [`end_attrs`](Self::end_attrs).
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or a start tag is already accepting
    /// attributes.
    pub fn begin_element_attrs(&mut self, name: &str) -> io::Result<()> {
        require_name(name);
        self.require_content_allowed();
        self.write_indent(self.depth())?;
        self.sink.write_all(b"<")?;
        self.sink.write_all(name.as_bytes())?;
        self.push_element(name);
        self.in_attributes = true;
        Ok(())
    }

    /// Closes the open start tag with `>`, followed by a newline unless
    /// `mode` is [`Mode::Terse`].
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if no start tag is accepting attributes.
    pub fn end_attrs(&mut self, mode: Mode) -> io::Result<()> {
        if !self.in_attributes {
            violation(&ContractViolation::AttributesNotOpen);
        }
        self.sink.write_all(b">")?;
        if mode == Mode::Normal {
            self.sink.write_all(b"\n")?;
        }
        self.in_attributes = false;
        Ok(())
    }

    /// Writes `</name>` and a newline for the innermost open element.
    ///
    /// In [`Mode::Normal`] the end tag is first indented to the depth of its
    /// start tag. In [`Mode::Terse`] it follows the preceding output directly.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if a start tag is accepting attributes or no element is open.
    pub fn end_element(&mut self, mode: Mode) -> io::Result<()> {
        self.require_content_allowed();
        let Some(depth) = self.depth().checked_sub(1) else {
            violation(&ContractViolation::NoOpenElement);
        };
        if mode == Mode::Normal {
            self.write_indent(depth)?;
        }
        let name = &self.open_elements[depth];
        self.sink.write_all(b"</")?;
        self.sink.write_all(name.as_bytes())?;
        self.sink.write_all(b">\n")?;
        if let Some(name) = self.open_elements.pop() {
            log::trace!("closed <{name}> at depth {depth}");
        }
        Ok(())
    }

    /// Writes a leaf element holding `value` on a single line:
    /// `<name>value</name>`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or a start tag is accepting attributes.
    pub fn write_element<V: XmlValue>(&mut self, name: &str, value: V) -> io::Result<()> {
        self.begin_element(name, Mode::Terse)?;
        value.write_xml(&mut self.sink)?;
        self.end_element(Mode::Terse)
    }

    /// Writes ` name="value"` into the open start tag. The value is not
    /// escaped.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty or no start tag is accepting attributes.
    pub fn write_attr<V: XmlValue>(&mut self, name: &str, value: V) -> io::Result<()> {
        if !self.in_attributes {
            violation(&ContractViolation::AttributesNotOpen);
        }
        require_name(name);
        self.sink.write_all(b" ")?;
        self.sink.write_all(name.as_bytes())?;
        self.sink.write_all(b"=\"")?;
        value.write_xml(&mut self.sink)?;
        self.sink.write_all(b"\"")
    }

    // -----------------------------------------------------------------------
    // Raw output
    //
    // These bypass the nesting checks and write exactly what they are given.
    // -----------------------------------------------------------------------

    /// Writes `bytes` to the sink.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    pub fn write_raw(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes)
    }

    /// Writes `text` to the sink.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.write_raw(text.as_bytes())
    }

    /// Writes `text` followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write_raw(text.as_bytes())?;
        self.write_raw(b"\n")
    }

    /// Writes the textual form of `value` and returns the writer, so calls
    /// can be chained:
    ///
    /// ```
    /// use xmloutput::{Mode, XmlWriter};
    ///
    /// let mut w = XmlWriter::new(Vec::new());
    /// w.begin_element("point", Mode::Terse).unwrap();
    /// w.write_value(1.5).unwrap().write_value(",").unwrap().write_value(-2).unwrap();
    /// w.end_element(Mode::Terse).unwrap();
    /// assert_eq!(w.finish(), b"<point>1.5,-2</point>\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns any error reported by the sink.
    pub fn write_value<V: XmlValue>(&mut self, value: V) -> io::Result<&mut Self> {
        value.write_xml(&mut self.sink)?;
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn write_indent(&mut self, depth: usize) -> io::Result<()> {
        for _ in 0..depth {
            self.sink.write_all(self.options.indent_str.as_bytes())?;
        }
        Ok(())
    }

    fn push_element(&mut self, name: &str) {
        log::trace!("opened <{name}> at depth {}", self.depth());
        self.open_elements.push(name.to_string());
    }

    #[track_caller]
    fn require_content_allowed(&self) {
        if self.in_attributes {
            violation(&self.attributes_open());
        }
    }

    fn attributes_open(&self) -> ContractViolation {
        ContractViolation::AttributesOpen {
            element: self.open_elements.last().cloned().unwrap_or_default(),
        }
    }
}

#[track_caller]
fn require_name(name: &str) {
    if name.is_empty() {
        violation(&ContractViolation::EmptyName);
    }
}

#[cold]
#[track_caller]
fn violation(v: &ContractViolation) -> ! {
    log::error!("XML writer contract violation: {v}");
    panic!("XML writer contract violation: {v}");
}

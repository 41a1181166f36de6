//! Writes a small configuration document to stdout.
//!
//! Run with: `cargo run --example write_document`

use std::io::{self, Write};

use xmloutput::{Mode, XmlWriter};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut w = XmlWriter::new(stdout.lock());

    w.begin_document("1.0", "UTF-8", true)?;
    w.begin_element_attrs("settings")?;
    w.write_attr("version", 3)?;
    w.end_attrs(Mode::Normal)?;

    w.write_element("name", "demo")?;
    w.write_element("verbose", true)?;
    w.write_element("ratio", 2.0 / 3.0)?;

    w.begin_element_attrs("window")?;
    w.write_attr("width", 800_u32)?;
    w.write_attr("height", 600_u32)?;
    w.write_attr("scale", 1.5)?;
    w.end_attrs(Mode::Terse)?;
    w.end_element(Mode::Terse)?;

    w.end_element(Mode::Normal)?;
    let mut out = w.finish();
    out.flush()
}

#![no_main]
use libfuzzer_sys::fuzz_target;
use xmloutput::{Mode, XmlWriter};

const NAMES: [&str; 4] = ["a", "item", "x-y", "n_1"];

fuzz_target!(|data: &[u8]| {
    // Each byte selects an operation; operations invalid in the current
    // state are skipped, so the writer must never panic.
    let mut w = XmlWriter::new(Vec::new());
    for &b in data {
        let name = NAMES[usize::from(b >> 6)];
        let mode = if b & 0x20 == 0 { Mode::Normal } else { Mode::Terse };
        let result = match b & 0x07 {
            0 if !w.in_attributes() => w.begin_element(name, mode),
            1 if !w.in_attributes() => w.begin_element_attrs(name),
            2 if w.in_attributes() => w.write_attr(name, i32::from(b)),
            3 if w.in_attributes() => w.end_attrs(mode),
            4 if !w.in_attributes() && w.depth() > 0 => w.end_element(mode),
            5 if !w.in_attributes() => w.write_element(name, f64::from(b) / 7.0),
            6 => w.write_value(b % 2 == 0).map(|_| ()),
            _ => Ok(()),
        };
        assert!(result.is_ok());
        assert_eq!(w.depth(), w.open_elements().len());
    }
    if w.in_attributes() {
        let _ = w.end_attrs(Mode::Normal);
    }
    while w.depth() > 0 {
        let _ = w.end_element(Mode::Normal);
    }
    assert!(w.is_complete());
    let _ = w.finish();
});

//! Well-formedness tests: output of random valid call sequences is re-read
//! with `quick-xml` and must nest exactly as the writer was driven.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use quick_xml::events::Event;
use quick_xml::Reader;

use xmloutput::{Mode, XmlWriter};

/// One step of a generated call sequence.
#[derive(Debug, Clone)]
enum Op {
    Open {
        name: String,
        mode: Mode,
        attrs: Vec<(String, i32)>,
    },
    Leaf {
        name: String,
        value: f64,
    },
    Close(Mode),
}

fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Normal), Just(Mode::Terse)]
}

fn op() -> impl Strategy<Value = Op> {
    let name = "[a-z][a-z0-9_]{0,6}";
    prop_oneof![
        (
            name,
            mode(),
            prop::collection::vec(("[a-z]{1,4}", any::<i32>()), 0..3)
        )
            .prop_map(|(name, mode, mut attrs)| {
                attrs.sort();
                attrs.dedup_by(|a, b| a.0 == b.0);
                Op::Open { name, mode, attrs }
            }),
        (name, -1.0e9..1.0e9_f64).prop_map(|(name, value)| Op::Leaf { name, value }),
        mode().prop_map(Op::Close),
    ]
}

/// Drives a writer through `ops`, skipping closes with nothing open and
/// closing whatever remains at the end. Returns the output and the start
/// tag names in document order.
fn drive(ops: &[Op]) -> (String, Vec<String>) {
    let mut w = XmlWriter::new(Vec::new());
    let mut opened = Vec::new();
    w.begin_document("1.0", "UTF-8", true).unwrap();
    w.begin_element("root", Mode::Normal).unwrap();
    opened.push("root".to_string());

    for op in ops {
        match op {
            Op::Open { name, mode, attrs } => {
                if attrs.is_empty() {
                    w.begin_element(name, *mode).unwrap();
                } else {
                    w.begin_element_attrs(name).unwrap();
                    for (attr, value) in attrs {
                        w.write_attr(attr, value).unwrap();
                    }
                    w.end_attrs(*mode).unwrap();
                }
                opened.push(name.clone());
            }
            Op::Leaf { name, value } => {
                w.write_element(name, value).unwrap();
                opened.push(name.clone());
            }
            Op::Close(mode) => {
                if w.depth() > 1 {
                    w.end_element(*mode).unwrap();
                }
            }
        }
        assert_eq!(w.depth(), w.open_elements().len());
        assert!(!w.in_attributes());
    }
    while w.depth() > 0 {
        w.end_element(Mode::Normal).unwrap();
    }
    (String::from_utf8(w.finish()).unwrap(), opened)
}

/// Parses `xml`, checking that every end tag matches its start tag and that
/// nothing is left open. Returns the start tag names in document order.
fn parse_names(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut names = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                stack.push(name.clone());
                names.push(name);
            }
            Event::End(e) => {
                let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                assert_eq!(stack.pop().as_deref(), Some(name.as_str()));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    assert!(stack.is_empty(), "unclosed elements: {stack:?}");
    names
}

#[test]
fn test_fixed_document_is_well_formed() {
    let ops = vec![
        Op::Open {
            name: "config".to_string(),
            mode: Mode::Normal,
            attrs: vec![("version".to_string(), 2)],
        },
        Op::Leaf {
            name: "timeout".to_string(),
            value: 30.0,
        },
        Op::Open {
            name: "inline".to_string(),
            mode: Mode::Terse,
            attrs: vec![],
        },
        Op::Close(Mode::Terse),
        Op::Close(Mode::Normal),
    ];
    let (xml, opened) = drive(&ops);
    assert_eq!(parse_names(&xml), opened);
}

#[test]
fn test_deep_nesting_is_well_formed() {
    let mut w = XmlWriter::new(Vec::new());
    for _ in 0..200 {
        w.begin_element("n", Mode::Normal).unwrap();
    }
    assert_eq!(w.depth(), 200);
    for _ in 0..200 {
        w.end_element(Mode::Normal).unwrap();
    }
    let xml = String::from_utf8(w.finish()).unwrap();
    assert_eq!(parse_names(&xml).len(), 200);
    assert!(xml.contains(&format!("{}<n>\n", "\t".repeat(199))));
}

proptest! {
    #[test]
    fn prop_random_sequences_nest_correctly(ops in prop::collection::vec(op(), 0..40)) {
        let (xml, opened) = drive(&ops);
        prop_assert_eq!(parse_names(&xml), opened);
    }

    #[test]
    fn prop_every_tag_line_is_indented_by_depth(depth in 1_usize..12) {
        let mut w = XmlWriter::new(Vec::new());
        for _ in 0..depth {
            w.begin_element("e", Mode::Normal).unwrap();
        }
        for _ in 0..depth {
            w.end_element(Mode::Normal).unwrap();
        }
        let xml = String::from_utf8(w.finish()).unwrap();
        let lines: Vec<&str> = xml.lines().collect();
        prop_assert_eq!(lines.len(), depth * 2);
        for (i, line) in lines.iter().enumerate() {
            let level = if i < depth { i } else { 2 * depth - 1 - i };
            let tabs = line.len() - line.trim_start_matches('\t').len();
            prop_assert_eq!(tabs, level);
        }
    }
}

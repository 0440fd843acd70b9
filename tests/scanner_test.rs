//! Scanner behaviour over whole documents.
mod common;

use common::fixtures::{MIXED, READER, SHAPES_API, SHAPES_IMPL};
use golens::domain::cancel::CancelToken;
use golens::domain::error::ScanError;
use golens::domain::hint::{HintKind, HintMatcher};
use golens::domain::interface::InterfaceScanner;
use golens::domain::receiver::ReceiverMethodScanner;
use golens::domain::source::SourceText;

fn method_names(src: &str) -> Vec<(String, Vec<String>)> {
    InterfaceScanner::default()
        .scan(&SourceText::new(src))
        .into_iter()
        .map(|b| (b.name, b.methods.into_iter().map(|m| m.name).collect()))
        .collect()
}

#[test]
fn test_reader_example_yields_one_signature() {
    let blocks = InterfaceScanner::default().scan(&SourceText::new(READER));
    assert_eq!(blocks.len(), 1);
    let methods = &blocks[0].methods;
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].name, "Read");
    assert_eq!((methods[0].line, methods[0].span_end_line), (1, 2));
}

#[test]
fn test_mixed_document_interfaces() {
    let found = method_names(MIXED);
    assert_eq!(
        found,
        vec![
            ("Store".to_string(), vec!["Get".to_string(), "Put".to_string()]),
            ("Empty".to_string(), vec![]),
            (
                "Visitor".to_string(),
                vec!["Visit".to_string(), "Leave".to_string()]
            ),
        ]
    );

    let blocks = InterfaceScanner::default().scan(&SourceText::new(MIXED));
    let put = &blocks[0].methods[1];
    assert_eq!((put.line, put.span_end_line), (6, 9));
    let leave = &blocks[2].methods[1];
    assert_eq!((leave.line, leave.span_end_line), (32, 34));
}

#[test]
fn test_mixed_document_receivers() {
    let decls = ReceiverMethodScanner::new().scan(&SourceText::new(MIXED));
    assert_eq!(decls.len(), 2);
    assert_eq!(decls[0].receiver_type, "Handler");
    assert_eq!(decls[0].receiver_name, "");
    assert_eq!(decls[0].name, "Serve");
    assert_eq!(decls[1].receiver_type, "DB");
    assert_eq!(decls[1].receiver_name, "db");
    assert_eq!((decls[1].start_line, decls[1].end_line), (21, 26));
}

#[test]
fn test_blocks_never_overlap_and_contain_their_methods() {
    for src in [MIXED, READER, SHAPES_API, SHAPES_IMPL] {
        let blocks = InterfaceScanner::default().scan(&SourceText::new(src));
        for pair in blocks.windows(2) {
            assert!(pair[0].end_line < pair[1].start_line);
        }
        for block in &blocks {
            assert!(block.start_line <= block.end_line);
            for m in &block.methods {
                assert!(block.contains_line(m.line));
                assert!(m.span_end_line >= m.line);
                assert!(m.name.chars().all(|c| c.is_alphanumeric() || c == '_'));
            }
        }
    }
}

#[test]
fn test_each_line_and_name_reported_once() {
    for src in [MIXED, READER, SHAPES_API] {
        let blocks = InterfaceScanner::default().scan(&SourceText::new(src));
        let mut keys: Vec<(usize, String)> = blocks
            .iter()
            .flat_map(|b| b.methods.iter().map(|m| (m.line, m.name.clone())))
            .collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}

#[test]
fn test_scans_are_deterministic() {
    let matcher = HintMatcher::default();
    let text = SourceText::new(MIXED);
    assert_eq!(matcher.scan(&text), matcher.scan(&text));
    assert_eq!(matcher.hints(&text), matcher.hints(&text));
}

#[test]
fn test_hint_contexts_follow_their_owner() {
    let hints = HintMatcher::default().hints(&SourceText::new(SHAPES_API));
    let pairs: Vec<(&str, &str)> = hints
        .iter()
        .map(|h| (h.context.as_str(), h.method_name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("Shape", "Area"), ("Shape", "Scale"), ("Named", "Name")]
    );
    assert!(hints.iter().all(|h| h.kind == HintKind::InterfaceSide));
}

#[test]
fn test_receiver_hints_anchor_on_method_name() {
    let text = SourceText::new(SHAPES_IMPL);
    let hints = HintMatcher::default().hints(&text);
    assert_eq!(hints.len(), 4);
    for hint in &hints {
        assert_eq!(hint.kind, HintKind::ReceiverSide);
        let line: Vec<char> = text.line(hint.anchor_line).unwrap().text.chars().collect();
        let anchored: String = line[hint.anchor_start_col..hint.anchor_end_col].iter().collect();
        assert_eq!(anchored, hint.method_name);
    }
    let name = &hints[2];
    assert_eq!((name.context.as_str(), name.anchor_start_col), ("Square", 14));
    let circle = &hints[3];
    assert_eq!((circle.context.as_str(), circle.anchor_line), ("Circle", 16));
}

#[test]
fn test_empty_inputs() {
    let matcher = HintMatcher::default();
    assert!(matcher.hints(&SourceText::new("")).is_empty());
    let scan = matcher.scan(&SourceText::new("package main\n\nvar x = 1\n"));
    assert!(scan.interfaces.is_empty());
    assert!(scan.receiver_methods.is_empty());
}

#[test]
fn test_cancellation_publishes_nothing() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let result = HintMatcher::default().scan_cancellable(&SourceText::new(MIXED), &cancel);
    assert!(matches!(result, Err(ScanError::Cancelled { line: 0 })));

    let result = HintMatcher::default().scan_cancellable(&SourceText::new(MIXED), &CancelToken::new());
    assert_eq!(result.unwrap().hints().len(), 6);
}

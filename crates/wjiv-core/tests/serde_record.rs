//! JSON shape of parsed records.

#![cfg(feature = "serde")]

mod common;

use wjiv_core::{ParseOptions, ParsedReport, Record, parse_report};

#[test]
fn record_serializes_as_flat_ordered_object() {
    let mut record = Record::new();
    record.insert("Name", "S1");
    record.insert("Age", "87 Months");
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"Name":"S1","Age":"87 Months"}"#);
}

#[test]
fn parsed_report_round_trips() {
    let report = parse_report(&common::english_report(), &ParseOptions::default())
        .unwrap()
        .value;
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""language":"English""#));
    let restored: ParsedReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, report);
}

//! Preset round-trip fixtures
//!
//! The expected strings are normative: every preset must reproduce its
//! reference output byte for byte, trailing spaces included (which is why
//! the fixtures are written line by line).

use tabtext::{
    Alignment, Column, Delimiter, Encoding, IoSink, Record, Row, Sink, Table, TableFormat,
    TableError, row,
};

fn sample() -> Table {
    let mut table = Table::new(["one", "two", "three"]);
    table
        .add_row(row![1, 2, 3])
        .unwrap()
        .add_row(row!["hello", "world", "very long text very long text"])
        .unwrap();
    table
}

fn lines(parts: &[&str]) -> String {
    parts.join("\n")
}

#[test]
fn default_format() {
    let expected = lines(&[
        "-------------------------------------------------",
        "| one   | two   | three                         |",
        "-------------------------------------------------",
        "| 1     | 2     | 3                             |",
        "-------------------------------------------------",
        "| hello | world | very long text very long text |",
        "-------------------------------------------------",
    ]);
    assert_eq!(sample().render(&TableFormat::default()).unwrap(), expected);
}

#[test]
fn count_annotation() {
    let mut table = sample();
    table.options_mut().enable_count = true;

    let expected = lines(&[
        "-------------------------------------------------",
        "| one   | two   | three                         |",
        "-------------------------------------------------",
        "| 1     | 2     | 3                             |",
        "-------------------------------------------------",
        "| hello | world | very long text very long text |",
        "-------------------------------------------------",
        "",
        "Count: 2",
    ]);
    assert_eq!(table.render(&TableFormat::default()).unwrap(), expected);
}

#[test]
fn number_alignment() {
    let mut table = sample();
    table.options_mut().number_alignment = Some(Alignment::Right);

    let expected = lines(&[
        "-------------------------------------------------",
        "| one   | two   | three                         |",
        "-------------------------------------------------",
        "|     1 |     2 |                             3 |",
        "-------------------------------------------------",
        "| hello | world | very long text very long text |",
        "-------------------------------------------------",
    ]);
    assert_eq!(table.render(&TableFormat::default()).unwrap(), expected);
}

#[test]
fn number_alignment_yields_to_overrides() {
    let mut table = Table::new(vec![
        Column::new("n"),
        Column::new("m").with_value_alignment(Alignment::Left),
    ]);
    table.options_mut().number_alignment = Some(Alignment::Right);
    table.add_row(row![1, 2]).unwrap();
    table.add_row(row![tabtext::Value::new(10).with_alignment(Alignment::Left), 20]).unwrap();

    let expected = lines(&[
        "-----------",
        "| n  | m  |",
        "-----------",
        "|  1 | 2  |",
        "-----------",
        "| 10 | 20 |",
        "-----------",
    ]);
    assert_eq!(table.render(&TableFormat::default()).unwrap(), expected);
}

#[test]
fn alternative_format() {
    let expected = lines(&[
        "+-------+-------+-------------------------------+",
        "| one   | two   | three                         |",
        "+-------+-------+-------------------------------+",
        "| 1     | 2     | 3                             |",
        "+-------+-------+-------------------------------+",
        "| hello | world | very long text very long text |",
        "+-------+-------+-------------------------------+",
    ]);
    assert_eq!(sample().render(&TableFormat::alternative()).unwrap(), expected);
}

#[test]
fn simple_format() {
    let expected = lines(&[
        "+-------+-------+-------------------------------+",
        "| one   | two   | three                         |",
        "+-------+-------+-------------------------------+",
        "| 1     | 2     | 3                             |",
        "| hello | world | very long text very long text |",
        "+-------+-------+-------------------------------+",
    ]);
    assert_eq!(sample().render(&TableFormat::simple()).unwrap(), expected);
}

#[test]
fn minimal_format() {
    let expected = lines(&[
        "one    two    three                        ",
        "-------------------------------------------",
        "1      2      3                            ",
        "hello  world  very long text very long text",
    ]);
    assert_eq!(sample().render(&TableFormat::minimal()).unwrap(), expected);
}

#[test]
fn markdown_format() {
    let expected = lines(&[
        "| one   | two   | three                         |",
        "|-------|-------|-------------------------------|",
        "| 1     | 2     | 3                             |",
        "|-------|-------|-------------------------------|",
        "| hello | world | very long text very long text |",
    ]);
    assert_eq!(sample().render(&TableFormat::markdown()).unwrap(), expected);
}

#[test]
fn unicode_format() {
    let expected = lines(&[
        "┌───────┬───────┬───────────────────────────────┐",
        "│ one   │ two   │ three                         │",
        "├───────┼───────┼───────────────────────────────┤",
        "│ 1     │ 2     │ 3                             │",
        "├───────┼───────┼───────────────────────────────┤",
        "│ hello │ world │ very long text very long text │",
        "└───────┴───────┴───────────────────────────────┘",
    ]);
    assert_eq!(sample().render(&TableFormat::unicode()).unwrap(), expected);
}

#[test]
fn simple_unicode_format() {
    let expected = lines(&[
        "┌───────┬───────┬───────────────────────────────┐",
        "│ one   │ two   │ three                         │",
        "├───────┼───────┼───────────────────────────────┤",
        "│ 1     │ 2     │ 3                             │",
        "│ hello │ world │ very long text very long text │",
        "└───────┴───────┴───────────────────────────────┘",
    ]);
    assert_eq!(sample().render(&TableFormat::simple_unicode()).unwrap(), expected);
}

#[test]
fn custom_format() {
    let format = TableFormat::default()
        .show_top_divider('*', Delimiter::uniform('*'))
        .unwrap()
        .show_header_divider('*', Delimiter::uniform('*'))
        .unwrap()
        .hide_value_divider()
        .show_bottom_divider('-', Delimiter::uniform('-'))
        .unwrap()
        .set_line_delimiters(
            Delimiter::new(Some('*'), Some('|'), Some('*')),
            Delimiter::uniform('|'),
        )
        .unwrap();

    let expected = lines(&[
        "*************************************************",
        "* one   | two   | three                         *",
        "*************************************************",
        "| 1     | 2     | 3                             |",
        "| hello | world | very long text very long text |",
        "-------------------------------------------------",
    ]);
    assert_eq!(sample().render(&format).unwrap(), expected);
}

#[test]
fn hidden_header_omits_header_and_its_separator() {
    let mut table = Table::new(["a", "b"]);
    table.add_row(row![1, 2]).unwrap();

    let expected = lines(&[
        "---------",
        "| 1 | 2 |",
        "---------",
    ]);
    assert_eq!(table.render(&TableFormat::default().hide_header()).unwrap(), expected);
}

struct Measurement {
    first: &'static str,
    second: i64,
    third: f64,
}

impl Record for Measurement {
    fn columns() -> Vec<Column> {
        vec![Column::new("first"), Column::new("second"), Column::new("third")]
    }

    fn row(&self) -> Row {
        row![self.first, self.second, self.third]
    }
}

#[test]
fn record_collection_with_column_formatter() {
    let items = [
        Measurement { first: "hello", second: 1, third: 0.00 },
        Measurement { first: "hello world", second: 2, third: 2.34 },
        Measurement { first: "hello pi", second: 3, third: std::f64::consts::PI },
        Measurement { first: "goodbye world", second: 4, third: 4.56 },
    ];

    let mut table = Table::from_records(&items).unwrap();
    table
        .column_mut(2)
        .unwrap()
        .set_formatter(|v| format!("{:.2}", v.raw().as_float().unwrap_or_default()));

    let expected = lines(&[
        "----------------------------------",
        "| first         | second | third |",
        "----------------------------------",
        "| hello         |      1 |  0.00 |",
        "----------------------------------",
        "| hello world   |      2 |  2.34 |",
        "----------------------------------",
        "| hello pi      |      3 |  3.14 |",
        "----------------------------------",
        "| goodbye world |      4 |  4.56 |",
        "----------------------------------",
    ]);
    assert_eq!(table.render(&TableFormat::default()).unwrap(), expected);
}

#[test]
fn write_to_string_sink_matches_render() {
    let table = sample();
    let format = TableFormat::markdown();

    let mut sink = String::new();
    table.write_to(&mut sink, &format).unwrap();
    assert_eq!(sink, table.render(&format).unwrap());
}

#[test]
fn write_to_io_sink() {
    let table = sample();
    let mut sink = IoSink::new(Vec::new());
    table.write_to(&mut sink, &TableFormat::unicode()).unwrap();

    let bytes = sink.into_inner();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        table.render(&TableFormat::unicode()).unwrap()
    );
}

#[test]
fn ascii_sink_refuses_unicode_format() {
    let table = sample();
    let mut sink = IoSink::ascii(Vec::new());

    let err = table.write_to(&mut sink, &TableFormat::unicode()).unwrap_err();
    match err {
        TableError::Configuration(config) => {
            assert_eq!(config.to_string(), "sink does not support Unicode output");
        }
        other => panic!("expected a configuration error, got: {other}"),
    }
    // Nothing was written before the capability check failed.
    assert!(sink.into_inner().is_empty());

    // The same sink happily takes an all-ASCII format.
    let mut sink = IoSink::ascii(Vec::new());
    table.write_to(&mut sink, &TableFormat::alternative()).unwrap();
    assert!(!sink.into_inner().is_empty());
}

#[test]
fn ascii_sink_supports_report() {
    let sink = IoSink::ascii(Vec::new());
    assert!(sink.supports(Encoding::Ascii));
    assert!(!sink.supports(Encoding::Unicode));
}

//! End-to-end document emission tests

mod common;

use common::{emit, parse_output, record_types, values_of};
use minidxf::{
    DxfWriter, DxfWriterConfiguration, LineTypePattern, TableKind, Vector2,
};

fn diamond() -> Vec<Vector2> {
    vec![
        Vector2::new(10.0, 0.0),
        Vector2::new(0.0, 10.0),
        Vector2::new(-10.0, 0.0),
        Vector2::new(0.0, -10.0),
    ]
}

#[test]
fn test_entities_scenario_record_sequence() {
    let pairs = emit(|dxf| {
        dxf.entities_begin()?;
        dxf.line(0.0, 0.0, 5.0, 0.0)?;
        dxf.polygon(&diamond())?;
        dxf.text(1.0, 1.0, 4.0, "Test string")?;
        dxf.entities_end()?;
        dxf.end()
    });

    assert_eq!(
        record_types(&pairs),
        [
            "SECTION", "LINE", "POLYLINE", "VERTEX", "VERTEX", "VERTEX", "VERTEX", "SEQEND",
            "TEXT", "ENDSEC", "EOF"
        ]
    );
    assert_eq!(pairs[1], (2, "ENTITIES".to_string()));
    assert_eq!(pairs.last().unwrap(), &(0, "EOF".to_string()));
}

#[test]
fn test_entities_scenario_values() {
    let pairs = emit(|dxf| {
        dxf.entities_begin()?;
        dxf.line(0.0, 0.0, 5.0, 0.0)?;
        dxf.polygon(&diamond())?;
        dxf.text(1.0, 1.0, 4.0, "Test string")?;
        dxf.entities_end()?;
        dxf.end()
    });

    let line_start = pairs.iter().position(|p| *p == (0, "LINE".to_string())).unwrap();
    let line: Vec<_> = pairs[line_start + 2..line_start + 6].to_vec();
    assert_eq!(
        line,
        [
            (10, "0.000000".to_string()),
            (20, "0.000000".to_string()),
            (11, "5.000000".to_string()),
            (21, "0.000000".to_string()),
        ]
    );

    assert_eq!(values_of(&pairs, 66), ["1"]);
    assert_eq!(values_of(&pairs, 70), ["1"]);

    // VERTEX coordinates, in input order
    let xs: Vec<f64> = values_of(&pairs, 10)
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    let ys: Vec<f64> = values_of(&pairs, 20)
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    // LINE start, four vertices, TEXT insertion point
    assert_eq!(xs, [0.0, 10.0, 0.0, -10.0, 0.0, 1.0]);
    assert_eq!(ys, [0.0, 0.0, 10.0, 0.0, -10.0, 1.0]);

    let height: f64 = values_of(&pairs, 40)[0].parse().unwrap();
    assert_eq!(height, 4.0);
    assert_eq!(values_of(&pairs, 1), ["Test string"]);
}

#[test]
fn test_full_document_with_tables() {
    let dashed = LineTypePattern::new().dash(0.5).space(0.25);
    let pairs = emit(|dxf| {
        dxf.comment("minidxf test drawing")?;
        dxf.header_begin()?;
        dxf.acad_version("AC1015")?;
        dxf.header_end()?;

        dxf.tables_begin()?;
        dxf.table_begin(TableKind::VPort, 1)?;
        dxf.viewport("*ACTIVE", 0.0, 0.0, 25.0)?;
        dxf.table_end()?;
        dxf.table_begin(TableKind::LineType, 2)?;
        dxf.line_type("CONTINUOUS", &[])?;
        dxf.line_type("DASHED", dashed.lengths())?;
        dxf.table_end()?;
        dxf.table_begin(TableKind::Layer, 1)?;
        dxf.layer("OUTLINE", 1, "DASHED")?;
        dxf.table_end()?;
        dxf.tables_end()?;

        dxf.blocks_begin()?;
        dxf.blocks_end()?;

        dxf.entities_begin()?;
        dxf.set_layer(Some("OUTLINE"));
        dxf.polygon(&diamond())?;
        dxf.entities_end()?;

        dxf.objects_begin()?;
        dxf.objects_end()?;
        dxf.end()
    });

    assert_eq!(pairs[0], (999, "minidxf test drawing".to_string()));
    assert_eq!(
        values_of(&pairs, 2)
            .into_iter()
            .filter(|v| ["HEADER", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"].contains(v))
            .collect::<Vec<_>>(),
        ["HEADER", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"]
    );

    // Three tables and four records, each with one handle, numbered in order
    let handles: Vec<u64> = values_of(&pairs, 5)
        .iter()
        .map(|h| u64::from_str_radix(h, 16).unwrap())
        .collect();
    assert_eq!(handles, (1..=7).collect::<Vec<_>>());

    // Pattern length of DASHED, then its elements
    let lengths = values_of(&pairs, 40);
    assert!(lengths.contains(&"0.750000"));
    assert_eq!(values_of(&pairs, 49), ["0.500000", "-0.250000"]);

    // Every polygon record is tagged with the chosen layer
    let layers = values_of(&pairs, 8);
    assert_eq!(layers.len(), 5);
    assert!(layers.iter().all(|l| *l == "OUTLINE"));
}

#[test]
fn test_minimal_session_never_writes_handles() {
    let mut dxf = DxfWriter::minimal(Vec::new());
    dxf.tables_begin().unwrap();
    assert!(dxf.table_begin(TableKind::Layer, 1).is_err());
    dxf.tables_end().unwrap();
    dxf.entities_begin().unwrap();
    dxf.line(1.0, 1.0, 2.0, 2.0).unwrap();
    dxf.entities_end().unwrap();
    dxf.end().unwrap();

    let pairs = parse_output(dxf.into_inner());
    assert!(values_of(&pairs, 5).is_empty());
    assert_eq!(
        record_types(&pairs),
        ["SECTION", "ENDSEC", "SECTION", "LINE", "ENDSEC", "EOF"]
    );
}

#[test]
fn test_legacy_text_reproduces_reference_output() {
    let config = DxfWriterConfiguration {
        legacy_text: true,
        ..DxfWriterConfiguration::default()
    };
    let mut dxf = DxfWriter::with_configuration(Vec::new(), config);
    dxf.entities_begin().unwrap();
    dxf.text(1.0, 7.0, 4.0, "Test string").unwrap();
    let pairs = parse_output(dxf.into_inner());

    assert_eq!(values_of(&pairs, 10), ["1.000000"]);
    assert_eq!(values_of(&pairs, 20), ["1.000000"]);
    assert_eq!(values_of(&pairs, 40), ["4"]);
}

#[test]
fn test_lenient_session_allows_any_order() {
    let config = DxfWriterConfiguration {
        strict: false,
        ..DxfWriterConfiguration::default()
    };
    let mut dxf = DxfWriter::with_configuration(Vec::new(), config);
    dxf.line(0.0, 0.0, 1.0, 0.0).unwrap();
    dxf.end().unwrap();
    dxf.comment("after eof").unwrap();

    let pairs = parse_output(dxf.into_inner());
    assert_eq!(record_types(&pairs), ["LINE", "EOF"]);
    assert_eq!(values_of(&pairs, 999), ["after eof"]);
}

#[test]
fn test_flush_and_recover_sink() {
    let mut dxf = DxfWriter::new(Vec::new());
    dxf.end().unwrap();
    dxf.flush().unwrap();
    assert_eq!(dxf.into_inner(), b"\t0\nEOF\n");
}

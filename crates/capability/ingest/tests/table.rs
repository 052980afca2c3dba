use evlog_ingest::{IngestError, load_event_table};

/// 构造完整导出文本：15 行头部区 + 表头行 + 数据行（最新在前）。
fn export_text(header_row: &str, rows: &[&str]) -> String {
    let mut lines: Vec<String> = (0..15).map(|i| format!("header line {i}")).collect();
    lines.push(header_row.to_string());
    lines.extend(rows.iter().map(|row| row.to_string()));
    lines.join("\n")
}

const HEADER: &str = "DateTime yyyy-MM-dd hh:mm:ss,ID,Description";

#[test]
fn loads_rows_in_chronological_order() {
    let text = export_text(
        HEADER,
        &[
            "2023-05-02 10:00:00,2020,Network lost",
            "2023-05-01 08:30:00,213,Contactor open",
        ],
    );
    let seq = load_event_table(&text).expect("sequence");
    assert_eq!(seq.len(), 2);

    // 源文件最新在前，装载后应为时间升序
    let ids: Vec<i64> = seq.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![213, 2020]);
    assert_eq!(seq.records()[0].description, "Contactor open");
}

#[test]
fn rows_before_2023_are_discarded() {
    let text = export_text(
        HEADER,
        &[
            "2023-01-10 00:00:00,365,Safety trip",
            "2022-12-31 23:59:59,365,Placeholder",
            "2021-06-01 00:00:00,100,Placeholder",
        ],
    );
    let seq = load_event_table(&text).expect("sequence");
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.records()[0].id, 365);
    assert_eq!(seq.records()[0].description, "Safety trip");
}

#[test]
fn unparsable_timestamp_fails_the_file() {
    let text = export_text(
        HEADER,
        &[
            "2023-05-02 10:00:00,2020,Network lost",
            "02/05/2023 10:00,213,Wrong format",
        ],
    );
    let err = load_event_table(&text).expect_err("must fail");
    assert!(matches!(err, IngestError::Timestamp { .. }));
}

#[test]
fn missing_required_column_fails_the_file() {
    let text = export_text(
        "DateTime yyyy-MM-dd hh:mm:ss,Description",
        &["2023-05-02 10:00:00,Network lost"],
    );
    let err = load_event_table(&text).expect_err("must fail");
    match err {
        IngestError::MissingColumn(column) => assert_eq!(column, "ID"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_integer_id_fails_the_file() {
    let text = export_text(HEADER, &["2023-05-02 10:00:00,N/A,Network lost"]);
    let err = load_event_table(&text).expect_err("must fail");
    assert!(matches!(err, IngestError::Field { column: "ID", .. }));
}

#[test]
fn empty_table_area_reports_missing_column() {
    // 表格区为空（文件只有头部）按必需列缺失处理，文件失败
    let lines: Vec<String> = (0..10).map(|i| format!("header line {i}")).collect();
    let err = load_event_table(&lines.join("\n")).expect_err("must fail");
    assert!(matches!(err, IngestError::MissingColumn(_)));
}

#[test]
fn extra_columns_pass_through_in_file_order() {
    let text = export_text(
        "DateTime yyyy-MM-dd hh:mm:ss,Severity,ID,Description,Ack",
        &["2023-05-02 10:00:00,HIGH,2020,Network lost,yes"],
    );
    let seq = load_event_table(&text).expect("sequence");
    assert_eq!(seq.extra_columns(), ["Severity".to_string(), "Ack".to_string()]);
    assert_eq!(seq.records()[0].extra, vec!["HIGH".to_string(), "yes".to_string()]);
}

#[test]
fn empty_table_with_header_row_yields_empty_sequence() {
    let text = export_text(HEADER, &[]);
    let seq = load_event_table(&text).expect("sequence");
    assert!(seq.is_empty());
}

use evlog_telemetry::{
    metrics, new_run_id, record_file_failed, record_file_processed, record_rows_parsed,
};

#[test]
fn run_id_is_non_empty_and_unique() {
    let a = new_run_id();
    let b = new_run_id();
    assert!(!a.is_empty());
    assert_ne!(a, b);
}

#[test]
fn counters_accumulate() {
    let before = metrics().snapshot();
    record_file_processed();
    record_file_failed();
    record_rows_parsed(7);
    let after = metrics().snapshot();
    assert_eq!(after.files_processed, before.files_processed + 1);
    assert_eq!(after.files_failed, before.files_failed + 1);
    assert_eq!(after.rows_parsed, before.rows_parsed + 7);
}

use chrono::{NaiveDate, NaiveDateTime};
use domain::{DateWindow, EventRecord, EventSequence};
use evlog_normalize::{filter_window, parse_window, resolve_window};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn record(id: i64, timestamp: &str) -> EventRecord {
    EventRecord {
        timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S")
            .expect("timestamp"),
        id,
        description: String::new(),
        extra: Vec::new(),
    }
}

#[test]
fn parse_window_accepts_valid_pair() {
    let window = parse_window(Some("2024-03-01"), Some("2024-03-31"), date("2026-08-27"));
    assert_eq!(window.start, date("2024-03-01"));
    assert_eq!(window.end, date("2024-03-31"));
}

#[test]
fn parse_window_falls_back_on_garbage() {
    let today = date("2026-08-27");
    let fallback = DateWindow::default_window(today);

    assert_eq!(parse_window(Some("03/01/2024"), Some("2024-03-31"), today), fallback);
    assert_eq!(parse_window(Some("not a date"), None, today), fallback);
    assert_eq!(parse_window(Some("2024-03-31"), Some("2024-03-01"), today), fallback);
    assert_eq!(parse_window(None, Some("2024-03-31"), today), fallback);
    assert_eq!(parse_window(None, None, today), fallback);
}

#[test]
fn resolve_window_defaults_without_input() {
    let today = date("2026-08-27");
    let window = resolve_window(None, None, today);
    assert_eq!(window.start, date("2023-01-01"));
    assert_eq!(window.end, today);
}

#[test]
fn filter_is_inclusive_and_keeps_order() {
    let seq = EventSequence::new(
        vec![
            record(1, "2023-04-30 23:59:59"),
            record(2, "2023-05-01 00:00:00"),
            record(3, "2023-05-15 12:00:00"),
            record(4, "2023-05-31 23:59:59"),
            record(5, "2023-06-01 00:00:00"),
        ],
        Vec::new(),
    );
    let window = DateWindow::new(date("2023-05-01"), date("2023-05-31"));

    let filtered = filter_window(&seq, &window);
    let ids: Vec<i64> = filtered.iter().map(|r| r.id).collect();
    // 时分秒不参与比较，只按日历日取闭区间
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn filter_never_reorders_duplicate_timestamps() {
    let seq = EventSequence::new(
        vec![
            record(10, "2023-05-01 08:00:00"),
            record(11, "2023-05-01 08:00:00"),
            record(12, "2023-05-01 08:00:00"),
        ],
        Vec::new(),
    );
    let window = DateWindow::new(date("2023-05-01"), date("2023-05-01"));
    let ids: Vec<i64> = filter_window(&seq, &window).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![10, 11, 12]);
}

use evlog_config::AppConfig;

#[test]
fn load_config_from_env() {
    // Rust 2024 中 set_var 需要显式标注 unsafe（测试进程内可控）。
    unsafe {
        std::env::set_var("EVLOG_DATE_FROM", "2024-03-01");
        std::env::set_var("EVLOG_DATE_TO", "2024-03-31");
        std::env::set_var("EVLOG_REPORT_PATH", "/tmp/report.json");
    }

    let config = AppConfig::from_env().expect("config");
    assert_eq!(config.date_from.as_deref(), Some("2024-03-01"));
    assert_eq!(config.date_to.as_deref(), Some("2024-03-31"));
    assert_eq!(config.report_path, "/tmp/report.json");

    // 空值视为未设置
    unsafe {
        std::env::set_var("EVLOG_DATE_FROM", "");
        std::env::remove_var("EVLOG_DATE_TO");
        std::env::remove_var("EVLOG_REPORT_PATH");
    }
    let config = AppConfig::from_env().expect("config");
    assert!(config.date_from.is_none());
    assert!(config.date_to.is_none());
    assert_eq!(config.report_path, "event_report.json");
}

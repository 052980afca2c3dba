//! 日期窗口标准化：边界校验、静默回退与窗口过滤。

use chrono::NaiveDate;
use domain::{DateWindow, EventSequence};
use tracing::warn;

/// 配置/命令行边界接受的日期格式。
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 解析调用方给出的原始日期串并落窗。
///
/// 任一侧缺失、无法解析或区间倒挂都不报错，静默回退默认窗口
/// （配置错误绝不中止批处理）。
pub fn parse_window(
    raw_start: Option<&str>,
    raw_end: Option<&str>,
    today: NaiveDate,
) -> DateWindow {
    let start = parse_date(raw_start);
    let end = parse_date(raw_end);
    if (raw_start.is_some() && start.is_none()) || (raw_end.is_some() && end.is_none()) {
        warn!(
            start = raw_start.unwrap_or(""),
            end = raw_end.unwrap_or(""),
            "malformed date range, falling back to default window"
        );
        return DateWindow::default_window(today);
    }
    resolve_window(start, end, today)
}

/// 校验已解析的日期对并落窗；残缺或倒挂回退默认窗口。
pub fn resolve_window(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> DateWindow {
    match (start, end) {
        (Some(start), Some(end)) if start <= end => {}
        (None, None) => {}
        _ => warn!("incomplete or inverted date range, falling back to default window"),
    }
    DateWindow::resolve(start, end, today)
}

/// 按窗口过滤事件序列（两端闭、按日历日比较），保持时间顺序。
pub fn filter_window(sequence: &EventSequence, window: &DateWindow) -> EventSequence {
    sequence.within(window)
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

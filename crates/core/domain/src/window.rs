use chrono::NaiveDate;

/// 闭区间日期窗口，按日历日比较（忽略时分秒）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// 默认窗口起点（机群统一投运年份的元旦）。
    pub const DEFAULT_START: (i32, u32, u32) = (2023, 1, 1);

    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 默认窗口：[2023-01-01, today]。
    pub fn default_window(today: NaiveDate) -> Self {
        let (year, month, day) = Self::DEFAULT_START;
        let start = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or(today);
        Self { start, end: today }
    }

    /// 校验并落窗：起止齐全且不倒挂才接受，否则退回默认窗口。
    ///
    /// 调用方传入的残缺/倒挂区间不报错，静默回退（批处理不因配置失败）。
    pub fn resolve(start: Option<NaiveDate>, end: Option<NaiveDate>, today: NaiveDate) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if start <= end => Self { start, end },
            _ => Self::default_window(today),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

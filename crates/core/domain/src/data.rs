use chrono::NaiveDateTime;

use crate::window::DateWindow;

/// 单台设备的标识元数据（来自导出文件头部）。
///
/// 头部缺失的字段保持空串，不视为错误。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceMetadata {
    pub serial_no: String,
    pub name: String,
    pub com_software_version: String,
    pub control_software_version: String,
    pub software_version: String,
    pub plant_name: String,
    pub grid_code: String,
}

/// 一条设备事件记录。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub timestamp: NaiveDateTime,
    pub id: i64,
    pub description: String,
    /// 必需列之外的原始列值，按文件列序透传。
    pub extra: Vec<String>,
}

/// 单个文件的事件序列，按时间戳索引。
///
/// 装载完成后为时间升序；允许重复时间戳，保持相对顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSequence {
    records: Vec<EventRecord>,
    /// 透传列的列名，与 EventRecord::extra 对齐。
    extra_columns: Vec<String>,
}

impl EventSequence {
    pub fn new(records: Vec<EventRecord>, extra_columns: Vec<String>) -> Self {
        Self {
            records,
            extra_columns,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    /// 保留日期窗口内的记录，维持原有顺序。
    pub fn within(&self, window: &DateWindow) -> EventSequence {
        let records = self
            .records
            .iter()
            .filter(|record| window.contains(record.timestamp.date()))
            .cloned()
            .collect();
        Self {
            records,
            extra_columns: self.extra_columns.clone(),
        }
    }

    /// 按 id 谓词抽取子序列，维持相对顺序。
    pub fn filter_by_id(&self, predicate: impl Fn(i64) -> bool) -> EventSequence {
        let records = self
            .records
            .iter()
            .filter(|record| predicate(record.id))
            .cloned()
            .collect();
        Self {
            records,
            extra_columns: self.extra_columns.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a EventSequence {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

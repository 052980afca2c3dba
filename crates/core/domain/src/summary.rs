use crate::data::DeviceMetadata;

/// 单个文件的汇总行：设备标识 + 各分类计数。
///
/// total_events 为窗口过滤后的记录总数，与分类归属无关；
/// 分类允许重叠，各分类计数之和不要求等于 total_events。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryRow {
    pub metadata: DeviceMetadata,
    pub safety_events: usize,
    pub pv_events: usize,
    pub failsafe_events: usize,
    pub network_events: usize,
    pub contactor_events: usize,
    pub total_events: usize,
}

/// 汇总表：每个处理成功的文件一行，按输入顺序追加。
///
/// 处理失败的文件不产生行（不插入空行或错误行）。
#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn push(&mut self, row: SummaryRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

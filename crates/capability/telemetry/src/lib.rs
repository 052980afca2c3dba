//! 追踪初始化与批次计数。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 基础指标快照。
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnapshot {
    pub files_processed: u64,
    pub files_failed: u64,
    pub rows_parsed: u64,
    pub rows_outside_window: u64,
    pub rows_classified: u64,
}

/// 流水线基础指标。
pub struct PipelineMetrics {
    files_processed: AtomicU64,
    files_failed: AtomicU64,
    rows_parsed: AtomicU64,
    rows_outside_window: AtomicU64,
    rows_classified: AtomicU64,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            files_processed: AtomicU64::new(0),
            files_failed: AtomicU64::new(0),
            rows_parsed: AtomicU64::new(0),
            rows_outside_window: AtomicU64::new(0),
            rows_classified: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            files_processed: self.files_processed.load(Ordering::Relaxed),
            files_failed: self.files_failed.load(Ordering::Relaxed),
            rows_parsed: self.rows_parsed.load(Ordering::Relaxed),
            rows_outside_window: self.rows_outside_window.load(Ordering::Relaxed),
            rows_classified: self.rows_classified.load(Ordering::Relaxed),
        }
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<PipelineMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static PipelineMetrics {
    METRICS.get_or_init(PipelineMetrics::new)
}

/// 初始化 tracing（默认 info）。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();
}

/// 生成新的批次 run_id。
pub fn new_run_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 记录处理成功的文件数。
pub fn record_file_processed() {
    metrics().files_processed.fetch_add(1, Ordering::Relaxed);
}

/// 记录处理失败的文件数。
pub fn record_file_failed() {
    metrics().files_failed.fetch_add(1, Ordering::Relaxed);
}

/// 记录表格区解析出的行数。
pub fn record_rows_parsed(count: u64) {
    metrics().rows_parsed.fetch_add(count, Ordering::Relaxed);
}

/// 记录窗口外排除的行数。
pub fn record_rows_outside_window(count: u64) {
    metrics()
        .rows_outside_window
        .fetch_add(count, Ordering::Relaxed);
}

/// 记录进入分类的行数。
pub fn record_rows_classified(count: u64) {
    metrics().rows_classified.fetch_add(count, Ordering::Relaxed);
}

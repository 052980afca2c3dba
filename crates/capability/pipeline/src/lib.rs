//! 单文件流水线与批处理：解析 → 窗口过滤 → 分类 → 汇总。
//!
//! 文件之间彼此隔离：单个文件失败只记入失败清单，批次继续。

use domain::{
    ClassifiedEvents, DateWindow, DeviceMetadata, EventSequence, SummaryRow, SummaryTable,
    category_defs,
};
use evlog_ingest::{EventFileSource, decode_export, extract_metadata, load_event_table};
use evlog_normalize::filter_window;
use tracing::{info, info_span, warn};

/// 流水线处理错误。
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] evlog_ingest::IngestError),
}

/// 单个文件处理成功的产物束。
#[derive(Debug, Clone)]
pub struct FileArtifacts {
    pub file_name: String,
    pub metadata: DeviceMetadata,
    /// 窗口过滤后的完整事件序列（total_events 的依据）。
    pub filtered: EventSequence,
    pub classified: ClassifiedEvents,
    pub summary: SummaryRow,
}

/// 单个文件的失败描述。
#[derive(Debug)]
pub struct FileFailure {
    pub file_name: String,
    pub error: PipelineError,
}

/// 一次批处理的结果：成功产物、失败清单与汇总表，均按输入顺序。
#[derive(Debug, Default)]
pub struct BatchReport {
    pub artifacts: Vec<FileArtifacts>,
    pub failures: Vec<FileFailure>,
    pub summary: SummaryTable,
}

/// 按固定分类表独立判定每条记录，返回各分类的子序列。
///
/// 分类允许重叠：一条记录可进入多个子序列；
/// 无命中记录的分类返回空子序列而非缺项。
pub fn classify(sequence: &EventSequence) -> ClassifiedEvents {
    let entries = category_defs()
        .iter()
        .map(|def| {
            let subset = sequence.filter_by_id(|id| def.matcher.matches(id));
            (def.name, subset)
        })
        .collect();
    ClassifiedEvents::new(entries)
}

/// 归并单文件汇总行。
///
/// 纯函数：只依赖各序列的基数，与遍历顺序无关。
/// total_events 为过滤后序列长度，不受分类重叠影响。
pub fn summarize(
    metadata: &DeviceMetadata,
    filtered: &EventSequence,
    classified: &ClassifiedEvents,
) -> SummaryRow {
    SummaryRow {
        metadata: metadata.clone(),
        safety_events: classified.count("Safety"),
        pv_events: classified.count("PV"),
        failsafe_events: classified.count("Failsafe"),
        network_events: classified.count("Network"),
        contactor_events: classified.count("Contactor"),
        total_events: filtered.len(),
    }
}

/// 处理单个导出文件。
///
/// 表头字段缺失不致失败；解码/表格错误对该文件致命。
pub fn process_file(
    source: &dyn EventFileSource,
    window: &DateWindow,
) -> Result<FileArtifacts, FileFailure> {
    let file_name = source.name().to_string();
    let run = || -> Result<FileArtifacts, PipelineError> {
        let bytes = source.read()?;
        let text = decode_export(&bytes)?;
        let metadata = extract_metadata(&text);
        let events = load_event_table(&text)?;
        evlog_telemetry::record_rows_parsed(events.len() as u64);

        let filtered = filter_window(&events, window);
        evlog_telemetry::record_rows_outside_window((events.len() - filtered.len()) as u64);

        let classified = classify(&filtered);
        let classified_total: usize = classified.iter().map(|(_, seq)| seq.len()).sum();
        evlog_telemetry::record_rows_classified(classified_total as u64);

        let summary = summarize(&metadata, &filtered, &classified);
        Ok(FileArtifacts {
            file_name: file_name.clone(),
            metadata,
            filtered,
            classified,
            summary,
        })
    };

    run().map_err(|error| FileFailure {
        file_name: file_name.clone(),
        error,
    })
}

/// 按输入顺序串行处理一批文件。
///
/// 汇总表只收处理成功的文件，一文件一行，顺序与输入一致。
pub fn run_batch(sources: &[Box<dyn EventFileSource>], window: &DateWindow) -> BatchReport {
    let mut report = BatchReport::default();
    for source in sources {
        let span = info_span!("process_file", file = source.name());
        let _guard = span.enter();
        match process_file(source.as_ref(), window) {
            Ok(artifacts) => {
                evlog_telemetry::record_file_processed();
                info!(
                    total_events = artifacts.summary.total_events,
                    "file processed"
                );
                report.summary.push(artifacts.summary.clone());
                report.artifacts.push(artifacts);
            }
            Err(failure) => {
                evlog_telemetry::record_file_failed();
                warn!(error = %failure.error, "failed to process {}", failure.file_name);
                report.failures.push(failure);
            }
        }
    }
    report
}

//! 稳定的报表 DTO 契约。
//!
//! 外部报表装配器（图表渲染、PDF 排版）只消费此处的结构；
//! 字段名与列序一经发布即保持稳定。

use chrono::NaiveDate;
use domain::{ClassifiedEvents, DeviceMetadata, EventSequence, SummaryRow};
use serde::Serialize;

/// 图表时间戳的展示格式。
const CHART_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 散点图上的一个点：时间戳 + 事件描述。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPointDto {
    pub timestamp: String,
    pub description: String,
}

/// 一个分类对应的一条图表序列。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeriesDto {
    pub category: String,
    pub points: Vec<ChartPointDto>,
}

/// 单文件图表数据：标题字段沿用 Serial | Name | Plant 习惯。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceChartDto {
    pub file_name: String,
    pub serial_no: String,
    pub name: String,
    pub plant_name: String,
    /// 仅含非空分类，按固定分类表顺序。
    pub series: Vec<ChartSeriesDto>,
}

/// 汇总表一行。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRowDto {
    pub serial_no: String,
    pub name: String,
    pub plant: String,
    pub safety_events: usize,
    pub pv_events: usize,
    pub failsafe_events: usize,
    pub network_events: usize,
    pub contactor_events: usize,
    pub total_events: usize,
}

/// 单文件失败告警。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailureDto {
    pub file_name: String,
    pub error: String,
}

/// 报表生效的日期窗口。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDto {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// 一次批处理的完整报表工件。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDto {
    pub run_id: String,
    pub generated_at: String,
    pub window: WindowDto,
    pub charts: Vec<DeviceChartDto>,
    pub summary: Vec<SummaryRowDto>,
    pub failures: Vec<FileFailureDto>,
}

/// 由分类结果构造图表数据；空分类不产生序列。
pub fn device_chart_from(
    file_name: &str,
    metadata: &DeviceMetadata,
    classified: &ClassifiedEvents,
) -> DeviceChartDto {
    let series = classified
        .iter()
        .filter(|(_, seq)| !seq.is_empty())
        .map(|(name, seq)| ChartSeriesDto {
            category: name.to_string(),
            points: chart_points(seq),
        })
        .collect();
    DeviceChartDto {
        file_name: file_name.to_string(),
        serial_no: metadata.serial_no.clone(),
        name: metadata.name.clone(),
        plant_name: metadata.plant_name.clone(),
        series,
    }
}

/// 由汇总行构造表格行。
pub fn summary_row_from(row: &SummaryRow) -> SummaryRowDto {
    SummaryRowDto {
        serial_no: row.metadata.serial_no.clone(),
        name: row.metadata.name.clone(),
        plant: row.metadata.plant_name.clone(),
        safety_events: row.safety_events,
        pv_events: row.pv_events,
        failsafe_events: row.failsafe_events,
        network_events: row.network_events,
        contactor_events: row.contactor_events,
        total_events: row.total_events,
    }
}

fn chart_points(sequence: &EventSequence) -> Vec<ChartPointDto> {
    sequence
        .iter()
        .map(|record| ChartPointDto {
            timestamp: record.timestamp.format(CHART_TIMESTAMP_FORMAT).to_string(),
            description: record.description.clone(),
        })
        .collect()
}

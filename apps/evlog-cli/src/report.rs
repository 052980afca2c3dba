//! 报表工件组装与终端汇总表渲染。

use std::fs;
use std::path::Path;

use domain::{DateWindow, SummaryRow};
use evlog_pipeline::BatchReport;
use report_contract::{
    FileFailureDto, ReportDto, WindowDto, device_chart_from, summary_row_from,
};

/// 汇总表固定列序（与外部装配器约定一致）。
const SUMMARY_COLUMNS: [&str; 9] = [
    "Serial No",
    "Name",
    "Plant",
    "Safety Events",
    "PV Events",
    "Failsafe Events",
    "Network Events",
    "Contactor Events",
    "Total Events",
];

/// 把一次批处理结果装配为报表 DTO。
pub fn report_from_batch(run_id: &str, window: &DateWindow, batch: &BatchReport) -> ReportDto {
    let charts = batch
        .artifacts
        .iter()
        .map(|artifacts| {
            device_chart_from(&artifacts.file_name, &artifacts.metadata, &artifacts.classified)
        })
        .collect();
    let summary = batch.summary.rows().iter().map(summary_row_from).collect();
    let failures = batch
        .failures
        .iter()
        .map(|failure| FileFailureDto {
            file_name: failure.file_name.clone(),
            error: failure.error.to_string(),
        })
        .collect();

    ReportDto {
        run_id: run_id.to_string(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        window: WindowDto {
            start: window.start,
            end: window.end,
        },
        charts,
        summary,
        failures,
    }
}

/// 报表工件落盘（JSON）。
pub fn write_report(path: &Path, report: &ReportDto) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// 渲染终端汇总表（对齐的等宽文本）。
pub fn render_summary(rows: &[SummaryRow]) -> String {
    let mut table: Vec<Vec<String>> = vec![
        SUMMARY_COLUMNS.iter().map(|s| s.to_string()).collect(),
    ];
    for row in rows {
        table.push(vec![
            row.metadata.serial_no.clone(),
            row.metadata.name.clone(),
            row.metadata.plant_name.clone(),
            row.safety_events.to_string(),
            row.pv_events.to_string(),
            row.failsafe_events.to_string(),
            row.network_events.to_string(),
            row.contactor_events.to_string(),
            row.total_events.to_string(),
        ]);
    }

    let widths: Vec<usize> = (0..SUMMARY_COLUMNS.len())
        .map(|col| {
            table
                .iter()
                .map(|row| row[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in &table {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

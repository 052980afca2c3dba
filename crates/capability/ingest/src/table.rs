//! 事件表格解析。
//!
//! 导出文件跳过前 15 行后是带表头的逗号分隔表格，
//! 行序为最新在前，装载时反转为时间升序。

use chrono::{Datelike, NaiveDateTime};
use domain::{EventRecord, EventSequence};

use crate::IngestError;

/// 必需列：事件时间戳（列名含设备侧格式说明）。
pub const TIMESTAMP_COLUMN: &str = "DateTime yyyy-MM-dd hh:mm:ss";
/// 必需列：事件数字标识。
pub const ID_COLUMN: &str = "ID";
/// 必需列：事件可读描述。
pub const DESCRIPTION_COLUMN: &str = "Description";

/// 表格区之前要跳过的头部行数；表头行位于文件第 16 行。
const SKIP_LINES: usize = 15;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 年份 ≤ 2022 的记录视为损坏/占位数据，直接丢弃。
const MIN_EVENT_YEAR: i32 = 2023;

/// 解析导出文本的表格区为时间升序的事件序列。
///
/// 时间戳列不接受宽松解析：任何一行解析失败即整个文件失败。
pub fn load_event_table(text: &str) -> Result<EventSequence, IngestError> {
    let table: String = text
        .lines()
        .skip(SKIP_LINES)
        .collect::<Vec<&str>>()
        .join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(table.as_bytes());

    let headers = reader.headers()?.clone();
    let timestamp_idx = require_column(&headers, TIMESTAMP_COLUMN)?;
    let id_idx = require_column(&headers, ID_COLUMN)?;
    let description_idx = require_column(&headers, DESCRIPTION_COLUMN)?;

    // 必需列之外的列按文件顺序透传
    let extra_indices: Vec<usize> = (0..headers.len())
        .filter(|idx| *idx != timestamp_idx && *idx != id_idx && *idx != description_idx)
        .collect();
    let extra_columns: Vec<String> = extra_indices
        .iter()
        .map(|idx| headers[*idx].to_string())
        .collect();

    let mut records = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let raw = result?;

        let raw_timestamp = raw.get(timestamp_idx).unwrap_or("").trim();
        let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT).map_err(
            |_| IngestError::Timestamp {
                row,
                value: raw_timestamp.to_string(),
            },
        )?;
        if timestamp.year() < MIN_EVENT_YEAR {
            continue;
        }

        let raw_id = raw.get(id_idx).unwrap_or("").trim();
        let id = raw_id.parse::<i64>().map_err(|_| IngestError::Field {
            column: ID_COLUMN,
            row,
            value: raw_id.to_string(),
        })?;

        let description = raw.get(description_idx).unwrap_or("").to_string();
        let extra = extra_indices
            .iter()
            .map(|idx| raw.get(*idx).unwrap_or("").to_string())
            .collect();

        records.push(EventRecord {
            timestamp,
            id,
            description,
            extra,
        });
    }

    // 源文件最新在前，反转为时间升序
    records.reverse();
    Ok(EventSequence::new(records, extra_columns))
}

fn require_column(headers: &csv::StringRecord, name: &str) -> Result<usize, IngestError> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
}

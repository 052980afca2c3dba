//! 设备导出文件接入：解码、表头提取、事件表解析。

pub mod header;
pub mod source;
pub mod table;

pub use header::extract_metadata;
pub use source::{DiskFileSource, EventFileSource, MemoryFileSource};
pub use table::{DESCRIPTION_COLUMN, ID_COLUMN, TIMESTAMP_COLUMN, load_event_table};

/// 接入错误。
///
/// 表头字段缺失不在此列：元数据提取永不使单个文件失败。
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("read failure for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("decode failure: export is not valid {0} text")]
    Decode(&'static str),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(String),
    #[error("invalid timestamp at data row {row}: {value:?}")]
    Timestamp { row: usize, value: String },
    #[error("invalid value in column {column} at data row {row}: {value:?}")]
    Field {
        column: &'static str,
        row: usize,
        value: String,
    },
}

/// 设备导出使用的厂商代码页。
///
/// 必须精确还原，否则日期/描述列中的区域字符会损坏。
pub static EXPORT_ENCODING: &encoding_rs::Encoding = &encoding_rs::GB18030_INIT;

/// 严格解码导出文件字节流。
///
/// 出现非法字节序列视为整个文件解析失败（不做有损替换）。
pub fn decode_export(bytes: &[u8]) -> Result<String, IngestError> {
    let (text, _, had_errors) = EXPORT_ENCODING.decode(bytes);
    if had_errors {
        return Err(IngestError::Decode(EXPORT_ENCODING.name()));
    }
    Ok(text.into_owned())
}

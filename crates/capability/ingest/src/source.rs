//! 导出文件来源抽象。
//!
//! 流水线只依赖文件名与字节内容；磁盘文件与内存内容分别实现，
//! 后者用于接线与测试。

use std::fs;
use std::path::{Path, PathBuf};

use crate::IngestError;

/// 导出文件来源。
pub trait EventFileSource {
    /// 用于告警与报表的文件标识。
    fn name(&self) -> &str;

    /// 读取完整字节内容（文件已整体物化，单次读取）。
    fn read(&self) -> Result<Vec<u8>, IngestError>;
}

/// 磁盘上的导出文件。
#[derive(Debug, Clone)]
pub struct DiskFileSource {
    path: PathBuf,
    name: String,
}

impl DiskFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventFileSource for DiskFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Vec<u8>, IngestError> {
        fs::read(&self.path).map_err(|source| IngestError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }
}

/// 内存中的导出内容（用于接线与测试）。
#[derive(Debug, Clone)]
pub struct MemoryFileSource {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryFileSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl EventFileSource for MemoryFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> Result<Vec<u8>, IngestError> {
        Ok(self.bytes.clone())
    }
}

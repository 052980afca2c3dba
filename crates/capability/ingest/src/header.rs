//! 导出文件头部的定位字段提取。
//!
//! 头部为前 14 行的半结构化文本，字段与行号的对应关系固定。
//! 映射以数据表形式维护：格式调整改表项，不改逻辑。

use domain::DeviceMetadata;

/// 头部只检查前 14 行，之后属于表格区。
const HEADER_LINES: usize = 14;

/// 元数据字段选择器。
#[derive(Debug, Clone, Copy)]
enum MetaField {
    SerialNo,
    Name,
    ComSoftwareVersion,
    ControlSoftwareVersion,
    PlantName,
    SoftwareVersion,
    GridCode,
}

/// 一条定位提取规则：行号（0 起）、分隔符、目标字段。
struct HeaderRule {
    line: usize,
    delimiter: &'static str,
    field: MetaField,
}

// 第 9 行的标签以 n 结尾，须以 "n:" 切分；缺分隔符时该字段留空。
const HEADER_RULES: &[HeaderRule] = &[
    HeaderRule {
        line: 1,
        delimiter: ":",
        field: MetaField::SerialNo,
    },
    HeaderRule {
        line: 2,
        delimiter: ":",
        field: MetaField::Name,
    },
    HeaderRule {
        line: 3,
        delimiter: ":",
        field: MetaField::ComSoftwareVersion,
    },
    HeaderRule {
        line: 4,
        delimiter: ":",
        field: MetaField::ControlSoftwareVersion,
    },
    HeaderRule {
        line: 8,
        delimiter: ":",
        field: MetaField::PlantName,
    },
    HeaderRule {
        line: 9,
        delimiter: "n:",
        field: MetaField::SoftwareVersion,
    },
    HeaderRule {
        line: 11,
        delimiter: ":",
        field: MetaField::GridCode,
    },
];

/// 从导出文本提取设备元数据。
///
/// 行缺失或缺分隔符时对应字段保持空串；此步骤绝不让文件处理中止。
pub fn extract_metadata(text: &str) -> DeviceMetadata {
    let lines: Vec<&str> = text.lines().take(HEADER_LINES).collect();
    let mut metadata = DeviceMetadata::default();
    for rule in HEADER_RULES {
        let Some(line) = lines.get(rule.line) else {
            continue;
        };
        let Some((_, value)) = line.split_once(rule.delimiter) else {
            continue;
        };
        assign(&mut metadata, rule.field, value.trim());
    }
    metadata
}

fn assign(metadata: &mut DeviceMetadata, field: MetaField, value: &str) {
    let slot = match field {
        MetaField::SerialNo => &mut metadata.serial_no,
        MetaField::Name => &mut metadata.name,
        MetaField::ComSoftwareVersion => &mut metadata.com_software_version,
        MetaField::ControlSoftwareVersion => &mut metadata.control_software_version,
        MetaField::PlantName => &mut metadata.plant_name,
        MetaField::SoftwareVersion => &mut metadata.software_version,
        MetaField::GridCode => &mut metadata.grid_code,
    };
    *slot = value.to_string();
}

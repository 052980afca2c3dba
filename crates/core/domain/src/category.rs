use crate::data::EventSequence;

/// 事件 id 的分类谓词：离散集合或闭区间。
#[derive(Debug, Clone, Copy)]
pub enum IdMatcher {
    Set(&'static [i64]),
    Range { min: i64, max: i64 },
}

impl IdMatcher {
    pub fn matches(&self, id: i64) -> bool {
        match self {
            IdMatcher::Set(ids) => ids.contains(&id),
            IdMatcher::Range { min, max } => id >= *min && id <= *max,
        }
    }
}

/// 一条静态分类规则。
#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub matcher: IdMatcher,
}

/// 固定分类表，按报表渲染顺序排列。
///
/// 各分类独立判定，允许重叠（PV 与 Failsafe 在 224..=249 相交，
/// 失效保护事件同时属于 PV 域，这是领域语义而非缺陷）。
const CATEGORY_DEFS: &[CategoryDef] = &[
    CategoryDef {
        name: "Safety",
        matcher: IdMatcher::Set(&[365]),
    },
    CategoryDef {
        name: "PV",
        matcher: IdMatcher::Range { min: 100, max: 250 },
    },
    CategoryDef {
        name: "Failsafe",
        matcher: IdMatcher::Range { min: 224, max: 249 },
    },
    CategoryDef {
        name: "Network",
        matcher: IdMatcher::Range {
            min: 2012,
            max: 2056,
        },
    },
    CategoryDef {
        name: "Contactor",
        matcher: IdMatcher::Set(&[
            213, 214, 215, 216, 217, 218, 219, 220, 221, 362, 252, 253, 254,
        ]),
    },
];

/// 返回固定分类表。
pub fn category_defs() -> &'static [CategoryDef] {
    CATEGORY_DEFS
}

/// 分类结果：按分类表顺序，每个分类一个子序列（可为空）。
#[derive(Debug, Clone, Default)]
pub struct ClassifiedEvents {
    entries: Vec<(&'static str, EventSequence)>,
}

impl ClassifiedEvents {
    pub fn new(entries: Vec<(&'static str, EventSequence)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (&'static str, EventSequence)> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&EventSequence> {
        self.entries
            .iter()
            .find(|(entry_name, _)| *entry_name == name)
            .map(|(_, seq)| seq)
    }

    /// 分类计数；未知分类名计 0。
    pub fn count(&self, name: &str) -> usize {
        self.get(name).map(EventSequence::len).unwrap_or(0)
    }
}

pub mod category;
pub mod data;
pub mod summary;
pub mod window;

pub use category::{CategoryDef, ClassifiedEvents, IdMatcher, category_defs};
pub use data::{DeviceMetadata, EventRecord, EventSequence};
pub use summary::{SummaryRow, SummaryTable};
pub use window::DateWindow;

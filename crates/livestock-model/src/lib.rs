pub mod enums;
pub mod error;
pub mod gwp;
pub mod options;
pub mod records;

pub use enums::{ElementCode, ItemKind, Metric};
pub use error::{ModelError, Result};
pub use gwp::{GwpFactors, GwpSet};
pub use options::PrepareOptions;
pub use records::{
    MetricKey, MetricRecord, NormalizedRecord, RawRecord, RawTable, YearColumn,
};

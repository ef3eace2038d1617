//! Domain models and validation

pub mod category;
pub mod condition;
pub mod equipment;
pub mod sort;
pub mod validation;

pub use category::CategoryName;
pub use condition::ConditionName;
pub use equipment::{EquipmentName, NewEquipment, SerialNumber};
pub use sort::{CategorySortKey, ConditionSortKey, EquipmentSortKey, SortDirection, SortParams};
pub use validation::ValidationError;

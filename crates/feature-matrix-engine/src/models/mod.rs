pub mod normalize;
pub mod status_table;
pub mod support_status;
pub mod tables;

pub use normalize::{NormalizeError, classify, process_feature_data};
pub use status_table::{DEFAULT_STATE, SUPPORT_STATUS_ITEMS, StatusTable, SupportStatusItem};
pub use support_status::SupportStatus;
pub use tables::*;

pub mod flow;

pub use crate::domain::model::{
    Capability, IntervalRecord, PermissionGrants, RecordKind, SleepReport, TimeRange,
};
pub use crate::domain::ports::{ConfigProvider, HealthProvider, NoticeLength, Notifier, Screen};
pub use crate::utils::error::Result;

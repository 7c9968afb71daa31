use crate::domain::model::{Capability, IntervalRecord, PermissionGrants, RecordKind, TimeRange};
use crate::utils::error::Result;
use async_trait::async_trait;

/// External health-data service: answers consent prompts and serves reads.
#[async_trait]
pub trait HealthProvider: Send + Sync {
    async fn request_permissions(&self, capabilities: &[Capability]) -> Result<PermissionGrants>;

    async fn read_records(
        &self,
        kind: RecordKind,
        range: &TimeRange,
    ) -> Result<Vec<IntervalRecord>>;
}

/// How long a transient notice stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLength {
    Short,
    Long,
}

/// Fire-and-forget user feedback; no return value is consumed.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, length: NoticeLength);
}

/// Render target for the single text label.
pub trait Screen: Send + Sync {
    fn show(&self, text: &str);
}

pub trait ConfigProvider: Send + Sync {
    fn service_url(&self) -> &str;
    fn display_name(&self) -> &str;
}

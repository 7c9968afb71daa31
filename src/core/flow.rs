use crate::domain::model::{Capability, RecordKind, SleepReport, TimeRange};
use crate::domain::ports::{HealthProvider, NoticeLength, Notifier};
use crate::utils::error::Result;
use std::sync::Arc;

/// Capabilities the flow asks for before touching any records.
pub const REQUIRED_PERMISSIONS: [Capability; 2] =
    [Capability::ReadSleep, Capability::ReadHeartRate];

/// Window queried after a grant, in days before today.
pub const LOOKBACK_DAYS: i64 = 7;

/// The one workflow in this crate: ask for consent, and when every
/// capability is granted read the recent sleep records in the background.
pub struct SleepReadFlow<P: HealthProvider, N: Notifier> {
    provider: Arc<P>,
    notifier: Arc<N>,
}

impl<P, N> SleepReadFlow<P, N>
where
    P: HealthProvider + 'static,
    N: Notifier + 'static,
{
    pub fn new(provider: Arc<P>, notifier: Arc<N>) -> Self {
        Self { provider, notifier }
    }

    /// Runs the permission gate. On a full grant the sleep read is spawned
    /// fire-and-forget and this returns immediately; the task is abandoned
    /// if the runtime shuts down first. On any denial nothing is read.
    pub async fn start(&self) -> Result<()> {
        tracing::info!("Requesting health permissions");
        let grants = self
            .provider
            .request_permissions(&REQUIRED_PERMISSIONS)
            .await?;

        if !grants.all_granted(&REQUIRED_PERMISSIONS) {
            tracing::warn!(
                "Permissions denied: {:?}",
                grants.denied(&REQUIRED_PERMISSIONS)
            );
            self.notifier.notify("Permissions denied", NoticeLength::Short);
            return Ok(());
        }

        self.notifier.notify("Permissions granted", NoticeLength::Short);

        let provider = Arc::clone(&self.provider);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            let range = TimeRange::trailing_days(LOOKBACK_DAYS);
            match read_recent_sleep(provider.as_ref(), range).await {
                Ok(report) => println!("{}", report),
                Err(e) => {
                    tracing::error!("Sleep read failed: {}", e);
                    notifier.notify(
                        &format!("Failed to read sleep data: {}", e),
                        NoticeLength::Long,
                    );
                }
            }
        });

        Ok(())
    }
}

/// Issues the single record read and reports the first record of whatever
/// order the provider returned. No sorting, no pagination.
pub async fn read_recent_sleep<P: HealthProvider>(
    provider: &P,
    range: TimeRange,
) -> Result<SleepReport> {
    tracing::debug!(
        "Reading sleep records between {} and {}",
        range.start,
        range.end
    );
    let records = provider.read_records(RecordKind::Sleep, &range).await?;
    tracing::debug!("Provider returned {} records", records.len());

    Ok(match records.first() {
        Some(first) => SleepReport::First {
            start: first.start,
            end: first.end,
        },
        None => SleepReport::Empty,
    })
}

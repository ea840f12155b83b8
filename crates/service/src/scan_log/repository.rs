use async_trait::async_trait;

use super::domain::{NewScanLog, ScanLog};
use crate::errors::ServiceError;

/// Scan events are never updated or deduplicated.
#[async_trait]
pub trait ScanLogRepository: Send + Sync {
    /// Appends one event stamped with the current time.
    async fn insert(&self, new: NewScanLog) -> Result<ScanLog, ServiceError>;
    async fn list_by_item(&self, item: &str) -> Result<Vec<ScanLog>, ServiceError>;
}

pub mod memory {
    use super::*;
    use chrono::Utc;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct InMemoryScanLogRepository {
        logs: RwLock<Vec<ScanLog>>,
    }

    #[async_trait]
    impl ScanLogRepository for InMemoryScanLogRepository {
        async fn insert(&self, new: NewScanLog) -> Result<ScanLog, ServiceError> {
            let log = ScanLog {
                item: new.item,
                scanned_by: new.scanned_by,
                scan_time: Utc::now(),
                scan_type: new.scan_type,
                remarks: new.remarks,
            };
            self.logs.write().await.push(log.clone());
            Ok(log)
        }

        async fn list_by_item(&self, item: &str) -> Result<Vec<ScanLog>, ServiceError> {
            Ok(self.logs.read().await.iter().filter(|l| l.item == item).cloned().collect())
        }
    }
}

use std::sync::Arc;
use tracing::{info, instrument};

use models::scan_log::DEFAULT_SCAN_TYPE;
use super::domain::{LogScanInput, NewScanLog, ScanHistoryInput, ScanLog};
use super::repository::ScanLogRepository;
use crate::errors::ServiceError;
use crate::validate::{or_default, present, require_fields};

pub struct ScanLogService<R: ScanLogRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: ScanLogRepository + ?Sized> ScanLogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Append a scan event. The item code is not checked against the item store.
    #[instrument(skip(self, input), fields(item = ?input.item))]
    pub async fn log(&self, input: LogScanInput) -> Result<ScanLog, ServiceError> {
        let [item, scanned_by] = require_fields([
            ("item", &input.item),
            ("scanned_by", &input.scanned_by),
        ])?;
        let log = self.repo
            .insert(NewScanLog {
                item: item.to_string(),
                scanned_by: scanned_by.to_string(),
                scan_type: or_default(&input.scan_type, DEFAULT_SCAN_TYPE),
                remarks: present(&input.remarks).map(str::to_string),
            })
            .await?;
        info!(item = %log.item, scan_type = %log.scan_type, "scan_logged");
        Ok(log)
    }

    /// All scans of one item. An item with no scans is reported as not found.
    pub async fn history(&self, input: ScanHistoryInput) -> Result<Vec<ScanLog>, ServiceError> {
        let item = present(&input.item)
            .ok_or_else(|| ServiceError::Validation("Missing item parameter".into()))?;
        let logs = self.repo.list_by_item(item).await?;
        if logs.is_empty() {
            return Err(ServiceError::NotFound(format!("No scan logs found for item {item}")));
        }
        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_log::repository::memory::InMemoryScanLogRepository;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn svc() -> ScanLogService<InMemoryScanLogRepository> {
        ScanLogService::new(Arc::new(InMemoryScanLogRepository::default()))
    }

    fn scan(item: &str) -> LogScanInput {
        LogScanInput { item: Some(item.into()), scanned_by: Some("bob".into()), ..Default::default() }
    }

    fn history(item: &str) -> ScanHistoryInput { ScanHistoryInput { item: Some(item.into()) } }

    #[tokio::test]
    async fn history_returns_exactly_the_items_scans() -> Result<(), anyhow::Error> {
        let svc = svc();
        let first = svc.log(scan("SKU1")).await?;
        assert_eq!(first.scan_type, "Inward");
        svc.log(LogScanInput { scan_type: Some("Outward".into()), remarks: Some("damaged".into()), ..scan("SKU1") }).await?;
        svc.log(scan("SKU2")).await?;

        let logs = svc.history(history("SKU1")).await?;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].scan_type, "Inward");
        assert_eq!(logs[1].scan_type, "Outward");
        assert_eq!(logs[1].remarks.as_deref(), Some("damaged"));
        Ok(())
    }

    #[tokio::test]
    async fn identical_scans_are_both_kept() -> Result<(), anyhow::Error> {
        let svc = svc();
        svc.log(scan("SKU1")).await?;
        svc.log(scan("SKU1")).await?;
        assert_eq!(svc.history(history("SKU1")).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn empty_history_is_not_found() {
        let err = svc().history(history("nonexistent-item")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == "No scan logs found for item nonexistent-item"));
    }

    #[tokio::test]
    async fn missing_parameters() {
        let svc = svc();
        let err = svc.history(ScanHistoryInput::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing item parameter");
        let err = svc.log(LogScanInput { item: Some("SKU1".into()), ..Default::default() }).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: scanned_by");
    }

    #[derive(Default)]
    struct CountingRepo {
        inner: InMemoryScanLogRepository,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ScanLogRepository for CountingRepo {
        async fn insert(&self, new: NewScanLog) -> Result<ScanLog, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.insert(new).await
        }
        async fn list_by_item(&self, item: &str) -> Result<Vec<ScanLog>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_by_item(item).await
        }
    }

    #[tokio::test]
    async fn missing_fields_never_reach_the_store() {
        let repo = Arc::new(CountingRepo::default());
        let svc = ScanLogService::new(repo.clone());

        assert!(svc.log(LogScanInput { scanned_by: Some("bob".into()), ..Default::default() }).await.is_err());
        assert!(svc.log(LogScanInput { scanned_by: None, ..scan("SKU1") }).await.is_err());
        assert!(svc.history(ScanHistoryInput { item: Some("  ".into()) }).await.is_err());

        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }
}

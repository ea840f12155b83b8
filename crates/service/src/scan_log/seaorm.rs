use async_trait::async_trait;
use sea_orm::{DatabaseConnection, TransactionTrait};

use models::scan_log;
use super::domain::{NewScanLog, ScanLog};
use super::repository::ScanLogRepository;
use crate::errors::ServiceError;

pub struct SeaOrmScanLogRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ScanLogRepository for SeaOrmScanLogRepository {
    async fn insert(&self, new: NewScanLog) -> Result<ScanLog, ServiceError> {
        let created = self.db
            .transaction::<_, scan_log::Model, ServiceError>(|txn| {
                Box::pin(async move {
                    Ok(scan_log::create(txn, &new.item, &new.scanned_by, &new.scan_type, new.remarks.as_deref(), None).await?)
                })
            })
            .await?;
        Ok(created.into())
    }

    async fn list_by_item(&self, item: &str) -> Result<Vec<ScanLog>, ServiceError> {
        let rows = scan_log::list_by_item(&self.db, item).await?;
        Ok(rows.into_iter().map(ScanLog::from).collect())
    }
}

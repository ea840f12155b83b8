use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogScanInput {
    pub item: Option<String>,
    pub scanned_by: Option<String>,
    pub scan_type: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanHistoryInput {
    pub item: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewScanLog {
    pub item: String,
    pub scanned_by: String,
    pub scan_type: String,
    pub remarks: Option<String>,
}

/// One scan event. `scan_time` serialises as RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanLog {
    pub item: String,
    pub scanned_by: String,
    pub scan_time: DateTime<Utc>,
    pub scan_type: String,
    pub remarks: Option<String>,
}

impl From<models::scan_log::Model> for ScanLog {
    fn from(m: models::scan_log::Model) -> Self {
        Self {
            item: m.item,
            scanned_by: m.scanned_by,
            scan_time: m.scan_time.with_timezone(&Utc),
            scan_type: m.scan_type,
            remarks: m.remarks,
        }
    }
}

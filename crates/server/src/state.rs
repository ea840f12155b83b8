use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::item::{repository::{memory::InMemoryItemRepository, ItemRepository}, seaorm::SeaOrmItemRepository, ItemService};
use service::order::{repository::{memory::InMemoryOrderRepository, OrderRepository}, seaorm::SeaOrmOrderRepository, OrderService};
use service::scan_log::{repository::{memory::InMemoryScanLogRepository, ScanLogRepository}, seaorm::SeaOrmScanLogRepository, ScanLogService};
use service::warehouse_user::{
    repository::{memory::InMemoryWarehouseUserRepository, WarehouseUserRepository},
    seaorm::SeaOrmWarehouseUserRepository,
    WarehouseUserService,
};

/// Router state: one service handle per entity.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService<dyn ItemRepository>>,
    pub orders: Arc<OrderService<dyn OrderRepository>>,
    pub users: Arc<WarehouseUserService<dyn WarehouseUserRepository>>,
    pub scans: Arc<ScanLogService<dyn ScanLogRepository>>,
}

impl AppState {
    /// Services backed by the given database pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            items: Arc::new(ItemService::<dyn ItemRepository>::new(Arc::new(SeaOrmItemRepository { db: db.clone() }))),
            orders: Arc::new(OrderService::<dyn OrderRepository>::new(Arc::new(SeaOrmOrderRepository { db: db.clone() }))),
            users: Arc::new(WarehouseUserService::<dyn WarehouseUserRepository>::new(Arc::new(SeaOrmWarehouseUserRepository {
                db: db.clone(),
            }))),
            scans: Arc::new(ScanLogService::<dyn ScanLogRepository>::new(Arc::new(SeaOrmScanLogRepository { db }))),
        }
    }

    /// Services backed by process-local stores; nothing survives a restart.
    pub fn in_memory() -> Self {
        Self {
            items: Arc::new(ItemService::<dyn ItemRepository>::new(Arc::new(InMemoryItemRepository::default()))),
            orders: Arc::new(OrderService::<dyn OrderRepository>::new(Arc::new(InMemoryOrderRepository::default()))),
            users: Arc::new(WarehouseUserService::<dyn WarehouseUserRepository>::new(Arc::new(
                InMemoryWarehouseUserRepository::default(),
            ))),
            scans: Arc::new(ScanLogService::<dyn ScanLogRepository>::new(Arc::new(InMemoryScanLogRepository::default()))),
        }
    }
}

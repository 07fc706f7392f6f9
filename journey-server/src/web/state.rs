//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::PlaceCatalog;
use crate::contact::ContactClient;
use crate::expenses::ExpenseLedger;
use crate::planner::MapConfig;

/// Shared application state.
///
/// Catalogs and configuration are read-only; the expense ledger is the only
/// mutable state and sits behind a lock.
#[derive(Clone)]
pub struct AppState {
    /// Places offered as trip endpoints
    pub places: Arc<PlaceCatalog>,

    /// Trip map settings
    pub map: Arc<MapConfig>,

    /// Expenses recorded through the tracker page
    pub expenses: Arc<RwLock<ExpenseLedger>>,

    /// Contact form client, if an access key is configured
    pub contact: Option<Arc<ContactClient>>,
}

impl AppState {
    /// Create a new app state with an empty expense ledger.
    pub fn new(places: PlaceCatalog, map: MapConfig, contact: Option<ContactClient>) -> Self {
        Self {
            places: Arc::new(places),
            map: Arc::new(map),
            expenses: Arc::new(RwLock::new(ExpenseLedger::new())),
            contact: contact.map(Arc::new),
        }
    }
}

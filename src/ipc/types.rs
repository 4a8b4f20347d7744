use chrono::NaiveDate;
use serde::Deserialize;

use crate::store::Store;
use crate::view::ViewState;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything the sidecar owns. Handlers get it by `&mut`; there is no other
/// copy of the collections.
pub struct AppState {
    pub store: Store,
    pub view: ViewState,
}

impl AppState {
    pub fn new(store: Store, today: NaiveDate) -> Self {
        let view = ViewState::new(&store, today);
        Self { store, view }
    }
}

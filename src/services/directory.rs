use crate::common::DraftError;
use crate::models::{demo_stores, Position, Store};

/// Sentinel entry that selects every category in the filter dropdown.
pub const ALL_CATEGORIES: &str = "Tutte";

/// Category assigned to admin-added rows that leave the field blank.
pub const FALLBACK_CATEGORY: &str = "Altro";

/// Draft fields collected by the admin "Negozi" form before a row is
/// appended to the directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoreDraft {
    pub name: String,
    pub category: String,
    pub comune: String,
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    pub website: String,
    pub description: String,
}

/// The in-memory list of participating merchants. Seeded from demo data,
/// append-only during a session, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreDirectory {
    stores: Vec<Store>,
}

impl Default for StoreDirectory {
    fn default() -> Self {
        Self::demo()
    }
}

impl StoreDirectory {
    pub fn demo() -> Self {
        Self {
            stores: demo_stores(),
        }
    }

    pub fn from_stores(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    pub fn stores(&self) -> &[Store] {
        &self.stores
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Selectable filter values: the "Tutte" sentinel followed by the
    /// distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL_CATEGORIES.to_string()];
        for store in &self.stores {
            if !out.iter().any(|c| c == &store.category) {
                out.push(store.category.clone());
            }
        }
        out
    }

    /// Stores matching `category`, or the full list for the sentinel.
    pub fn filter_by_category(&self, category: &str) -> Vec<Store> {
        if category == ALL_CATEGORIES {
            return self.stores.clone();
        }
        self.stores
            .iter()
            .filter(|s| s.category == category)
            .cloned()
            .collect()
    }

    /// Arithmetic mean of the given stores' coordinates. An empty list
    /// falls back to the full directory so the map always has a center.
    pub fn compute_center(&self, list: &[Store]) -> Position {
        let list = if list.is_empty() {
            self.stores.as_slice()
        } else {
            list
        };
        if list.is_empty() {
            return Position::default();
        }
        let n = list.len() as f64;
        let lat = list.iter().map(|s| s.position.lat).sum::<f64>() / n;
        let lon = list.iter().map(|s| s.position.lon).sum::<f64>() / n;
        Position::new(lat, lon)
    }

    /// Appends a row built from the draft, assigning `max(id) + 1`. Ids
    /// are never reused; deletion is not supported. Returns the new id.
    pub fn add_store(&mut self, draft: StoreDraft) -> u32 {
        let id = self.stores.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let category = if draft.category.trim().is_empty() {
            FALLBACK_CATEGORY.to_string()
        } else {
            draft.category
        };
        self.stores.push(Store {
            id,
            name: draft.name,
            category,
            description: draft.description,
            address: draft.address,
            comune: draft.comune,
            position: Position::new(draft.lat, draft.lon),
            website: draft.website,
            telefono: String::new(),
        });
        id
    }
}

/// Parses an admin coordinate field. Blank means "not provided" and maps
/// to 0.0; anything else must be a valid float or the row is rejected.
pub fn parse_coord(raw: &str) -> Result<f64, DraftError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| DraftError::InvalidCoordinate(trimmed.to_string()))
}

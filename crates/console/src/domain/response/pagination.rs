use serde::{Deserialize, Serialize};

/// Paging cursor plus the absolute server-side count. `total` reflects the
/// state at the time of the last fetch; it goes stale across mutations
/// until the next list round-trip.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i32,
    pub size: i32,
    pub total: i32,
}

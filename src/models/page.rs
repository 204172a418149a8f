use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page<T> {
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub total: u64,
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub limit: u64,
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub offset: u64,
    pub results: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total: 0,
            limit: 0,
            offset: 0,
            results: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Whether items exist past this page.
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.results.len() as u64) < self.total
    }
}

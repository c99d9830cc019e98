//! One typed accessor for the two list response shapes.
//!
//! List endpoints answer with either a bare JSON array or a paginated
//! envelope `{count, next, previous, results}`.

use serde::{Deserialize, Deserializer};

/// Number of records the server returns per page.
pub const PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total matching records across all pages, when the server reports it.
    pub total: Option<u64>,
}

impl<T> Page<T> {
    pub fn unpaginated(items: Vec<T>) -> Self {
        Self { items, total: None }
    }

    pub fn paginated(items: Vec<T>, total: u64) -> Self {
        Self {
            items,
            total: Some(total),
        }
    }

    /// Page count derived from the reported total, if any.
    pub fn total_pages(&self) -> Option<u32> {
        self.total
            .map(|count| u32::try_from(count.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Paginated { count: u64, results: Vec<T> },
    Bare(Vec<T>),
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match ListEnvelope::<T>::deserialize(deserializer)? {
            ListEnvelope::Paginated { count, results } => Page::paginated(results, count),
            ListEnvelope::Bare(items) => Page::unpaginated(items),
        })
    }
}

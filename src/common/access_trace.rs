//! The ordered input of a simulation.

use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, PageId, Result};

/// An ordered, immutable sequence of page accesses.
///
/// A trace is read-only once built, so any number of runs (including
/// runs on different threads) can borrow the same trace.
///
/// # Parsing
/// Text traces list page numbers separated by commas and/or whitespace.
/// A blank string is the empty trace.
///
/// ```
/// use pagesim::{AccessTrace, PageId};
///
/// let trace: AccessTrace = "1, 2 3,1".parse().unwrap();
/// assert_eq!(trace.len(), 4);
/// assert_eq!(trace[3], PageId::new(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessTrace {
    pages: Vec<PageId>,
}

impl AccessTrace {
    /// Create a trace from a list of pages.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// The accessed pages, in order.
    #[inline]
    pub fn pages(&self) -> &[PageId] {
        &self.pages
    }

    /// Number of distinct pages in the trace.
    pub fn distinct_pages(&self) -> usize {
        let mut seen: Vec<PageId> = self.pages.clone();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

impl Deref for AccessTrace {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.pages
    }
}

impl From<Vec<PageId>> for AccessTrace {
    fn from(pages: Vec<PageId>) -> Self {
        Self::new(pages)
    }
}

impl From<&[u32]> for AccessTrace {
    fn from(pages: &[u32]) -> Self {
        pages.iter().copied().collect()
    }
}

impl<const N: usize> From<[u32; N]> for AccessTrace {
    fn from(pages: [u32; N]) -> Self {
        pages.into_iter().collect()
    }
}

impl FromIterator<PageId> for AccessTrace {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<u32> for AccessTrace {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter().map(PageId::new).collect()
    }
}

impl<'a> IntoIterator for &'a AccessTrace {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl FromStr for AccessTrace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u32>()
                    .map(PageId::new)
                    .map_err(|_| Error::InvalidPage(token.to_string()))
            })
            .collect()
    }
}

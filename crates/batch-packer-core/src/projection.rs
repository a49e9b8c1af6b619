use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{BatchPackError, Result};

/// Requested tray counts per item type, keyed by catalog name.
///
/// Counts are non-negative by construction (`u32`). Missing names read as
/// zero. Built fresh per packing run; the packer works on its own copy and
/// never mutates the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectionRequest {
    counts: HashMap<String, u32>,
}

impl ProjectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested count for `name`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, count: u32) -> &mut Self {
        self.counts.insert(name.into(), count);
        self
    }

    /// Requested count for `name`; names not present read as zero.
    pub fn get(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Names present in the request (in no particular order).
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    pub fn total_trays(&self) -> u64 {
        self.counts.values().map(|&c| c as u64).sum()
    }

    pub fn is_all_zero(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Lenient intake: parses raw user-supplied strings, defaulting anything
    /// that is not a non-negative integer to zero. Surrounding whitespace is
    /// ignored. This mirrors form input handling: a bad field means "none
    /// requested", not a failed run.
    pub fn from_raw<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::new();
        for (name, raw) in entries {
            let count = raw.trim().parse::<u32>().unwrap_or(0);
            request.set(name, count);
        }
        request
    }

    /// Strict intake: rejects values that are not non-negative integers with
    /// `InvalidCount` instead of substituting zero.
    pub fn from_raw_strict<'a, I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut request = Self::new();
        for (name, raw) in entries {
            let count = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| BatchPackError::InvalidCount {
                    item: name.to_string(),
                    value: raw.to_string(),
                })?;
            request.set(name, count);
        }
        Ok(request)
    }
}

impl FromIterator<(String, u32)> for ProjectionRequest {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

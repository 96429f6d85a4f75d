//! Custom model data bookkeeping
//!
//! Records every custom model data value assigned per material, reports
//! values claimed twice for the same material, and compacts the usage into
//! human-readable ranges such as `STICK: 1-3, 5, 7-9`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Two items claiming the same material and custom model data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub material: String,
    pub custom_model_data: i64,
    pub first: String,
    pub second: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "custom-model-data {} on {} is used by both {} and {}",
            self.custom_model_data, self.material, self.first, self.second
        )
    }
}

/// Inclusive run of consecutive identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: i64,
    pub end: i64,
}

impl IdRange {
    pub fn single(value: i64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Extend the run with `value` if it continues it; equal values are absorbed
    fn absorb(&mut self, value: i64) -> bool {
        if value == self.end || self.end.checked_add(1) == Some(value) {
            self.end = value;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Sort `values` and fold them into maximal runs of consecutive integers
pub fn compact_ranges(values: &[i64]) -> Vec<IdRange> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    sorted.into_iter().fold(Vec::<IdRange>::new(), |mut runs, value| {
        let extended = runs.last_mut().is_some_and(|run| run.absorb(value));
        if !extended {
            runs.push(IdRange::single(value));
        }
        runs
    })
}

/// Render runs as `1-3, 5, 7-9`
pub fn format_ranges(ranges: &[IdRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Per-run record of custom model data usage
#[derive(Debug, Default, Clone)]
pub struct IdentifierTracker {
    /// Material -> every value assigned, in registration order
    usage: BTreeMap<String, Vec<i64>>,
    /// (material, value) -> first item key that claimed it
    claims: HashMap<(String, i64), String>,
}

impl IdentifierTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `custom_model_data` for `item_key` on `material`
    ///
    /// The material is normalized to uppercase. Returns the collision when a
    /// different item already claimed the same pair; the value is recorded
    /// either way.
    pub fn register(
        &mut self,
        material: &str,
        custom_model_data: i64,
        item_key: &str,
    ) -> Option<Collision> {
        let material = material.to_uppercase();
        self.usage
            .entry(material.clone())
            .or_default()
            .push(custom_model_data);

        match self.claims.get(&(material.clone(), custom_model_data)) {
            Some(first) if first != item_key => Some(Collision {
                material,
                custom_model_data,
                first: first.clone(),
                second: item_key.to_string(),
            }),
            Some(_) => None,
            None => {
                self.claims
                    .insert((material, custom_model_data), item_key.to_string());
                None
            }
        }
    }

    /// Values recorded for `material` (any case), in registration order
    pub fn usage(&self, material: &str) -> Option<&[i64]> {
        self.usage
            .get(&material.to_uppercase())
            .map(Vec::as_slice)
    }

    /// Materials with at least one recorded value, sorted
    pub fn materials(&self) -> impl Iterator<Item = &str> {
        self.usage.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.usage.is_empty()
    }

    /// One `<MATERIAL>: <ranges>` line per material, sorted by material
    pub fn report(&self) -> String {
        self.usage
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(material, values)| {
                format!("{}: {}", material, format_ranges(&compact_ranges(values)))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

//! Cross-file item key deduplication
//!
//! The first file to define a namespaced key owns it for the rest of the run.

use crate::diagnostics::DiagnosticSink;
use crate::model::{ItemDefinition, NamespacedKey};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;

/// Items of one file after deduplication
#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Accepted items, in file order
    pub survivors: IndexMap<String, ItemDefinition>,
    /// Namespaced keys dropped because an earlier file owns them
    pub duplicates: Vec<NamespacedKey>,
}

/// Run-scoped set of accepted namespaced keys
#[derive(Debug, Clone, Default)]
pub struct DeduplicationGate {
    accepted: HashSet<NamespacedKey>,
}

impl DeduplicationGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_accepted(&self, key: &NamespacedKey) -> bool {
        self.accepted.contains(key)
    }

    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    /// Drop every item of `file` whose key is already owned; accept the rest
    pub fn filter<D>(
        &mut self,
        namespace: &str,
        file: &Path,
        items: IndexMap<String, ItemDefinition>,
        sink: &mut D,
    ) -> DedupOutcome
    where
        D: DiagnosticSink + ?Sized,
    {
        let mut outcome = DedupOutcome::default();

        for (key, item) in items {
            let namespaced = NamespacedKey::new(namespace, key.as_str());
            if self.accepted.contains(&namespaced) {
                sink.warn(format!(
                    "Duplicate item {} in {} skipped; the first definition wins",
                    namespaced,
                    file.display()
                ));
                outcome.duplicates.push(namespaced);
                continue;
            }

            self.accepted.insert(namespaced);
            outcome.survivors.insert(key, item);
        }

        outcome
    }
}

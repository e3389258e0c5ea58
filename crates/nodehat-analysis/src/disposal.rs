//! Disposal aggregation.
//!
//! Merges the disposal-eligible producers found by the enter-tree and ready
//! stages into one [`DisposalPlan`]. The plan owns a slot and a reset per
//! producer, an updater for auto-disposed producers, and the order in which
//! the aggregate reset releases them.

use nodehat_core::{ParamEntry, TypeEntry, Visibility};
use rustc_hash::FxHashMap;
use tracing::warn;

use crate::{Classification, naming};

/// One producer of a tracked resource.
#[derive(Debug, Clone, PartialEq)]
pub struct DisposalEntry {
    pub method: String,
    /// Producer carries the auto-dispose marker and gets an updater.
    pub auto_disposable: bool,
    pub updater_visibility: Visibility,
    /// Producer parameters, forwarded by the updater.
    pub params: Vec<ParamEntry>,
}

impl DisposalEntry {
    fn from_classification(c: &Classification) -> Self {
        Self {
            method: c.method.clone(),
            auto_disposable: c.is_auto_disposable(),
            updater_visibility: c.updater_visibility,
            params: c.params.clone(),
        }
    }

    pub fn slot_name(&self) -> String {
        naming::slot_name(&self.method)
    }

    pub fn reset_name(&self) -> String {
        naming::reset_name(&self.method, self.auto_disposable)
    }

    pub fn updater_name(&self) -> Option<String> {
        self.auto_disposable
            .then(|| naming::updater_name(&self.method))
    }
}

/// Every tracked resource of a class and the order they are released in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisposalPlan {
    /// Entries in member declaration order.
    entries: Vec<DisposalEntry>,
    /// Indexes into `entries`, in runtime acquisition order.
    acquisition: Vec<usize>,
}

impl DisposalPlan {
    /// Merge the enter-tree and ready stage classifications.
    ///
    /// Acquisition order is: enter-tree producers, then ready producers not
    /// already acquired on enter-tree, then auto-disposed producers that no
    /// hook calls. Each group follows declaration order.
    ///
    /// Slots are named after the method, so overloads share one entry: the
    /// first overload classified keeps it and the others are logged and
    /// skipped.
    pub fn merge(
        class: &TypeEntry,
        enter_tree: &[Classification],
        ready: &[Classification],
    ) -> Self {
        let mut eligible: Vec<(usize, &Classification)> = Vec::new();
        let mut kept: FxHashMap<&str, &Classification> = FxHashMap::default();
        for c in enter_tree.iter().chain(ready) {
            if !c.disposes_on_exit() {
                continue;
            }
            match kept.get(c.method.as_str()) {
                None => {
                    kept.insert(c.method.as_str(), c);
                    let position = class
                        .members
                        .iter()
                        .position(|m| m.name == c.method)
                        .unwrap_or(usize::MAX);
                    eligible.push((position, c));
                }
                Some(first) if first.params != c.params => {
                    warn!(
                        class = %class.name,
                        method = %c.method,
                        "overloaded producer shares a resource slot, only the first overload is tracked"
                    );
                }
                Some(_) => {}
            }
        }
        eligible.sort_by_key(|(position, _)| *position);

        let entries: Vec<DisposalEntry> = eligible
            .iter()
            .map(|(_, c)| DisposalEntry::from_classification(c))
            .collect();
        let index_of = |method: &str| entries.iter().position(|e| e.method == method);

        let mut acquisition = Vec::with_capacity(entries.len());
        let hooked = enter_tree
            .iter()
            .chain(ready)
            .filter(|c| c.is_primary() && c.disposes_on_exit());
        for c in hooked {
            if let Some(index) = index_of(&c.method)
                && !acquisition.contains(&index)
            {
                acquisition.push(index);
            }
        }
        for index in 0..entries.len() {
            if !acquisition.contains(&index) {
                acquisition.push(index);
            }
        }

        Self {
            entries,
            acquisition,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[DisposalEntry] {
        &self.entries
    }

    /// Entries in the order their resources are acquired at runtime.
    pub fn acquisition_order(&self) -> impl Iterator<Item = &DisposalEntry> {
        self.acquisition.iter().map(|&i| &self.entries[i])
    }

    /// Entries in release order: the exact reverse of acquisition.
    pub fn disposal_order(&self) -> impl Iterator<Item = &DisposalEntry> {
        self.acquisition.iter().rev().map(|&i| &self.entries[i])
    }

    /// Reset calls made by the aggregate, in release order.
    pub fn reset_calls(&self) -> Vec<String> {
        self.disposal_order().map(DisposalEntry::reset_name).collect()
    }
}

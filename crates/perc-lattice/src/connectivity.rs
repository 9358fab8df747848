//! Weighted quick-union over a fixed universe of integer labels.

use perc_core::errors::ErrorInfo;
use perc_core::PercError;

/// Disjoint-set forest with union by size.
///
/// The universe is fixed at construction: labels `0..capacity`, each
/// starting as its own singleton component. Both backing arrays are
/// allocated once and never resized; [`DisjointSets::reset`] reuses them.
///
/// Union by size keeps every tree's height at most `log2(capacity)`, so
/// `union` and `connected` are O(log capacity) without path compression.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSets {
    /// Creates `capacity` singleton components labelled `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).collect(),
            size: vec![1; capacity],
        }
    }

    /// Returns the fixed universe size.
    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Merges the components containing `a` and `b`.
    ///
    /// The smaller tree's root is attached under the larger tree's root and
    /// its size folded in; merging a component with itself is a no-op.
    pub fn union(&mut self, a: usize, b: usize) -> Result<(), PercError> {
        let root_a = self.root(self.checked(a)?);
        let root_b = self.root(self.checked(b)?);
        if root_a == root_b {
            return Ok(());
        }
        if self.size[root_a] > self.size[root_b] {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        } else {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        }
        Ok(())
    }

    /// Returns whether `a` and `b` are in the same component.
    pub fn connected(&self, a: usize, b: usize) -> Result<bool, PercError> {
        let root_a = self.root(self.checked(a)?);
        let root_b = self.root(self.checked(b)?);
        Ok(root_a == root_b)
    }

    /// Returns the number of labels in the component containing `label`.
    pub fn component_size(&self, label: usize) -> Result<usize, PercError> {
        let root = self.root(self.checked(label)?);
        Ok(self.size[root])
    }

    /// Restores the all-singleton state without reallocating.
    pub fn reset(&mut self) {
        for (label, slot) in self.parent.iter_mut().enumerate() {
            *slot = label;
        }
        self.size.fill(1);
    }

    fn checked(&self, label: usize) -> Result<usize, PercError> {
        if label >= self.parent.len() {
            return Err(PercError::Index(
                ErrorInfo::new("label-bounds", "label outside the fixed universe")
                    .with_context("label", label.to_string())
                    .with_context("capacity", self.parent.len().to_string()),
            ));
        }
        Ok(label)
    }

    fn root(&self, mut label: usize) -> usize {
        while self.parent[label] != label {
            label = self.parent[label];
        }
        label
    }
}

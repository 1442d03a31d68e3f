//! Relabelling oracle for disjoint-set property verification.
//!
//! Stores one class label per element and rewrites every matching label on
//! merge. Quadratic, but obviously correct.

use super::types::{Operation, Workload};

/// Naive partition of `0..len` keyed by explicit labels.
#[derive(Clone, Debug, Default)]
pub(super) struct LabelOracle {
    labels: Vec<usize>,
}

impl LabelOracle {
    pub(super) fn new(len: usize) -> Self {
        Self {
            labels: (0..len).collect(),
        }
    }

    /// Replays `workload`; `Find` is a no-op for the oracle.
    pub(super) fn from_workload(workload: &Workload) -> Self {
        let mut oracle = Self::new(workload.initial_len);
        for operation in &workload.operations {
            oracle.apply(*operation);
        }
        oracle
    }

    pub(super) fn apply(&mut self, operation: Operation) {
        match operation {
            Operation::Merge(left, right) => self.merge(usize::from(left), usize::from(right)),
            Operation::Grow(extra) => {
                let len = self.labels.len();
                self.labels.extend(len..len + usize::from(extra));
            }
            Operation::Find(_) => {}
        }
    }

    pub(super) fn merge(&mut self, left: usize, right: usize) {
        let keep = self.labels[left];
        let replace = self.labels[right];
        for label in &mut self.labels {
            if *label == replace {
                *label = keep;
            }
        }
    }

    pub(super) fn len(&self) -> usize {
        self.labels.len()
    }

    pub(super) fn equiv(&self, left: usize, right: usize) -> bool {
        self.labels[left] == self.labels[right]
    }

    pub(super) fn class_count(&self) -> usize {
        let mut seen = vec![false; self.labels.len()];
        let mut count = 0;
        for &label in &self.labels {
            if !seen[label] {
                seen[label] = true;
                count += 1;
            }
        }
        count
    }

    /// Classes ordered by smallest member, members ascending.
    pub(super) fn classes(&self) -> Vec<Vec<u16>> {
        let mut classes: Vec<Vec<u16>> = Vec::new();
        let mut group_of_label: Vec<Option<usize>> = vec![None; self.labels.len()];
        for (element, &label) in self.labels.iter().enumerate() {
            let member = u16::try_from(element).expect("oracle universes fit in u16");
            match group_of_label[label] {
                Some(group) => classes[group].push(member),
                None => {
                    group_of_label[label] = Some(classes.len());
                    classes.push(vec![member]);
                }
            }
        }
        classes
    }

    /// Join of two oracles over the same universe.
    pub(super) fn join(&self, other: &Self) -> Self {
        let mut joined = self.clone();
        for element in 0..other.len() {
            for candidate in (element + 1)..other.len() {
                if other.equiv(element, candidate) {
                    joined.merge(element, candidate);
                }
            }
        }
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::LabelOracle;

    #[test]
    fn oracle_merges_transitively() {
        let mut oracle = LabelOracle::new(5);
        oracle.merge(0, 1);
        oracle.merge(3, 4);
        oracle.merge(1, 4);
        assert!(oracle.equiv(0, 3));
        assert!(!oracle.equiv(0, 2));
        assert_eq!(oracle.class_count(), 2);
        assert_eq!(oracle.classes(), vec![vec![0, 1, 3, 4], vec![2]]);
    }

    #[test]
    fn oracle_join_unions_both_relations() {
        let mut left = LabelOracle::new(5);
        left.merge(2, 3);
        let mut right = LabelOracle::new(5);
        right.merge(3, 4);
        let joined = left.join(&right);
        assert_eq!(joined.classes(), vec![vec![0], vec![1], vec![2, 3, 4]]);
    }
}

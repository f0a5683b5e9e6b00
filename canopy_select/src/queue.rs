// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Commit queue: committed candidates grouped into descending-priority
//! buckets.
//!
//! ## Overview
//!
//! Buckets are `(priority, members)` pairs kept sorted by descending
//! priority in a plain vector; insertion finds the bucket by binary search.
//! Members are append-only and FIFO within a bucket, preserving the order in
//! which commit calls were issued. Draining clears member lists but keeps
//! the bucket keys, so a priority level that has been seen once does not
//! reallocate on the next commit.

use alloc::vec::Vec;

/// One priority level and its committed members, in commit order.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Bucket<K> {
    priority: i32,
    members: Vec<K>,
}

/// Committed candidates awaiting the next arbitration pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitQueue<K> {
    // Sorted by descending `priority`.
    buckets: Vec<Bucket<K>>,
}

impl<K: Copy + Eq> CommitQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            buckets: Vec::new(),
        }
    }

    /// Append a candidate to the bucket for `priority`, creating the bucket
    /// in sorted position if absent.
    pub fn push(&mut self, priority: i32, candidate: K) {
        // The vector is sorted descending, so compare the probe against the
        // target in reverse.
        match self
            .buckets
            .binary_search_by(|bucket| priority.cmp(&bucket.priority))
        {
            Ok(i) => self.buckets[i].members.push(candidate),
            Err(i) => {
                let mut members = Vec::new();
                members.push(candidate);
                self.buckets.insert(i, Bucket { priority, members });
            }
        }
    }

    /// Whether the candidate is currently queued in any bucket.
    pub fn contains(&self, candidate: &K) -> bool {
        self.buckets
            .iter()
            .any(|bucket| bucket.members.contains(candidate))
    }

    /// Iterate buckets in strictly descending priority order, yielding each
    /// bucket's members in commit order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &[K])> + '_ {
        self.buckets
            .iter()
            .map(|bucket| (bucket.priority, bucket.members.as_slice()))
    }

    /// Clear every bucket's member list. Bucket keys persist.
    pub fn clear_members(&mut self) {
        for bucket in &mut self.buckets {
            bucket.members.clear();
        }
    }

    /// Total number of queued candidates across all buckets.
    pub fn queued(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.members.len()).sum()
    }

    /// Number of bucket keys, including drained ones.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Whether every bucket is empty.
    pub fn is_drained(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.members.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn flatten(queue: &CommitQueue<u32>) -> Vec<(i32, Vec<u32>)> {
        queue.iter().map(|(p, m)| (p, m.to_vec())).collect()
    }

    #[test]
    fn buckets_iterate_in_descending_priority() {
        let mut queue = CommitQueue::new();
        queue.push(2, 20);
        queue.push(9, 90);
        queue.push(5, 50);
        assert_eq!(
            flatten(&queue),
            vec![(9, vec![90]), (5, vec![50]), (2, vec![20])]
        );
    }

    #[test]
    fn members_keep_commit_order_within_a_bucket() {
        let mut queue = CommitQueue::new();
        queue.push(5, 1);
        queue.push(5, 2);
        queue.push(5, 3);
        assert_eq!(flatten(&queue), vec![(5, vec![1, 2, 3])]);
    }

    #[test]
    fn interleaved_pushes_preserve_per_bucket_fifo() {
        let mut queue = CommitQueue::new();
        queue.push(5, 1);
        queue.push(2, 10);
        queue.push(5, 2);
        queue.push(2, 11);
        assert_eq!(
            flatten(&queue),
            vec![(5, vec![1, 2]), (2, vec![10, 11])]
        );
    }

    #[test]
    fn clear_members_keeps_bucket_keys() {
        let mut queue = CommitQueue::new();
        queue.push(5, 1);
        queue.push(2, 2);
        queue.clear_members();
        assert!(queue.is_drained());
        assert_eq!(queue.queued(), 0);
        assert_eq!(queue.bucket_count(), 2);
        // A drained bucket is reused in place.
        queue.push(5, 3);
        assert_eq!(flatten(&queue), vec![(5, vec![3]), (2, vec![])]);
    }

    #[test]
    fn contains_sees_only_queued_members() {
        let mut queue = CommitQueue::new();
        queue.push(5, 1);
        assert!(queue.contains(&1));
        assert!(!queue.contains(&2));
        queue.clear_members();
        assert!(!queue.contains(&1));
    }

    #[test]
    fn negative_priorities_sort_below_positive() {
        let mut queue = CommitQueue::new();
        queue.push(-3, 30);
        queue.push(0, 10);
        queue.push(-1, 20);
        assert_eq!(
            flatten(&queue),
            vec![(0, vec![10]), (-1, vec![20]), (-3, vec![30])]
        );
    }
}

//! Array-backed max-heap.
//!
//! Elements live in a dense `Vec`; the children of index `i` sit at
//! `2i + 1` and `2i + 2`, and every parent compares `>=` both of them.

use core::iter::FusedIterator;

#[derive(Debug)]
pub struct MaxHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        MaxHeap { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MaxHeap {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from `vec` in linear time by sifting down every
    /// internal node, last parent first.
    pub fn from_vec(vec: Vec<T>) -> Self {
        let mut heap = MaxHeap { data: vec };
        heap.heapify();
        log::trace!("max heap built from {} elements", heap.data.len());
        heap
    }

    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the largest element, or `None` when empty.
    pub fn extract_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let max = self.data.pop();
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        max
    }

    pub fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        log::trace!("max heap cleared, dropping {} elements", self.data.len());
        self.data.clear();
    }

    /// Yields elements in non-increasing order, removing each one from the
    /// heap as it is produced. Elements not yet yielded when the iterator is
    /// dropped stay in the heap.
    pub fn drain_max(&mut self) -> DrainMax<'_, T> {
        DrainMax { heap: self }
    }

    fn heapify(&mut self) {
        if self.data.len() <= 1 {
            return;
        }
        let last_parent = (self.data.len() - 2) / 2;
        for i in (0..=last_parent).rev() {
            self.sift_down(i);
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[idx] > self.data[parent] {
                self.data.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut largest = idx;

            if left < len && self.data[left] > self.data[largest] {
                largest = left;
            }
            if right < len && self.data[right] > self.data[largest] {
                largest = right;
            }

            if largest == idx {
                break;
            }
            self.data.swap(idx, largest);
            idx = largest;
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for MaxHeap<T> {
    fn clone(&self) -> Self {
        MaxHeap {
            data: self.data.clone(),
        }
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(vec: Vec<T>) -> Self {
        MaxHeap::from_vec(vec)
    }
}

impl<T: Ord> FromIterator<T> for MaxHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let vec: Vec<T> = iter.into_iter().collect();
        MaxHeap::from_vec(vec)
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> IntoIterator for MaxHeap<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { heap: self }
    }
}

/// Borrowing drain returned by [`MaxHeap::drain_max`].
#[derive(Debug)]
pub struct DrainMax<'a, T: Ord> {
    heap: &'a mut MaxHeap<T>,
}

impl<T: Ord> Iterator for DrainMax<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_max()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heap.count();
        (remaining, Some(remaining))
    }
}

impl<T: Ord> ExactSizeIterator for DrainMax<'_, T> {}

impl<T: Ord> FusedIterator for DrainMax<'_, T> {}

/// Owning iterator; yields the largest remaining element on each step.
#[derive(Debug)]
pub struct IntoIter<T: Ord> {
    heap: MaxHeap<T>,
}

impl<T: Ord> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.extract_max()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.heap.count();
        (remaining, Some(remaining))
    }
}

impl<T: Ord> ExactSizeIterator for IntoIter<T> {}

impl<T: Ord> FusedIterator for IntoIter<T> {}

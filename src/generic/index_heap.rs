/*!
A max heap on some subset of elements with fixed indicies.

In other words, a heap backed by a vector of values with a companion vector which tracks the current location of each value index on the heap.

The backing vector stays constant, and so the heap acts as a store of values which may be moved onto (and off of) the heap.
For example, the [atom database](crate::db::atom) stores the activity of each atom, and keeps atoms without a value on the heap so the most active such atom is quick to find when a decision is made.

```rust
# use otter_ipasir::generic::index_heap::IndexHeap;
let mut test_heap = IndexHeap::default();

test_heap.add(600, 10);
test_heap.add(0, 70);

test_heap.activate(600);
test_heap.activate(0);

assert_eq!(test_heap.count(), 601);
assert_eq!(test_heap.value_at(5), &i32::default());

assert_eq!(test_heap.pop_max(), Some(0));
assert_eq!(test_heap.pop_max(), Some(600));

assert!(test_heap.pop_max().is_none());
```
*/

use std::cmp::Ordering;

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by value index.
    values: Vec<V>,

    /// The position of a value index on the heap, if active.
    position_in_heap: Vec<Option<usize>>,

    /// The heap, of value indicies, valid up to `limit`.
    heap: Vec<usize>,

    /// The count of active values.
    limit: usize,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `value_index`, growing the structure if required.
    /// Returns true if `value_index` was a fresh index, false otherwise.
    ///
    /// To *activate* `value_index` on the heap [activate](IndexHeap::activate) should be called after this method.
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        let fresh = self.values.len() <= value_index;
        if fresh {
            self.values.resize_with(value_index + 1, V::default);
            self.position_in_heap.resize(value_index + 1, None);
            self.heap.resize(value_index + 1, 0);
        }
        self.revalue(value_index, value);
        fresh
    }

    /// Remove `value_index` from the heap, if present.
    /// Returns true if `value_index` was removed, false otherwise.
    pub fn remove(&mut self, value_index: usize) -> bool {
        let Some(heap_index) = self.position_in_heap[value_index] else {
            return false;
        };

        self.limit -= 1;
        if heap_index != self.limit {
            let last_index = self.heap[self.limit];
            self.heap[heap_index] = last_index;
            self.position_in_heap[last_index] = Some(heap_index);
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
        self.position_in_heap[value_index] = None;
        true
    }

    /// Activate the value at `value_index` on the heap.
    /// Returns true if the index was inactive, false otherwise.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.position_in_heap[value_index] {
            None => {
                self.heap[self.limit] = value_index;
                self.position_in_heap[value_index] = Some(self.limit);
                self.limit += 1;
                self.heapify_up(self.limit - 1);
                true
            }

            Some(heap_index) => {
                self.heapify_up(heap_index);
                self.heapify_down(heap_index);
                false
            }
        }
    }

    /// True if `value_index` is on the heap.
    pub fn is_active(&self, value_index: usize) -> bool {
        self.position_in_heap
            .get(value_index)
            .is_some_and(|position| position.is_some())
    }

    /// Heapify (ensure invariants of the heap are upheld) around `value_index`, if active.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if let Some(heap_index) = self.position_in_heap[value_index] {
            self.heapify_up(heap_index);
            if let Some(heap_index) = self.position_in_heap[value_index] {
                self.heapify_down(heap_index);
            }
        }
    }

    /// Peek at the maximum index of the heap.
    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(self.heap[0]),
        }
    }

    /// Pop the maximum index off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max_index = self.peek_max()?;
        self.remove(max_index);
        Some(max_index)
    }

    /// Heapify (ensure invariants of the heap are upheld) the heap.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.limit / 2).rev() {
            self.heapify_down(heap_index)
        }
    }

    /// Return the value indexed by `value_index`.
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Apply `f` to the value at `value_index`.
    ///
    /// Note, the heap is not updated, and [heapify_if_active](IndexHeap::heapify_if_active) should be called after any increase.
    pub fn apply_to_value_at_value_index(&mut self, value_index: usize, f: impl Fn(&V) -> V) {
        self.values[value_index] = f(&self.values[value_index])
    }

    /// Apply `f` to all (indexed) values.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Set the value of `value_index` to `value`.
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// True if no values are indexed, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// The (heap) index of the left child of `heap_index`.
    fn heap_left(heap_index: usize) -> usize {
        (2 * heap_index) + 1
    }

    /// The (heap) index of the right child of `heap_index`.
    fn heap_right(heap_index: usize) -> usize {
        (2 * heap_index) + 2
    }

    /// The (heap) index of the parent of `heap_index`.
    fn heap_parent(heap_index: usize) -> usize {
        heap_index.saturating_sub(1) / 2
    }

    /// The value at some location on the heap.
    fn heap_value(&self, heap_index: usize) -> &V {
        &self.values[self.heap[heap_index]]
    }

    /// Swaps two locations on the heap, and updates the positions of the values at those locations.
    fn heap_swap(&mut self, a: usize, b: usize) {
        self.position_in_heap.swap(self.heap[a], self.heap[b]);
        self.heap.swap(a, b);
    }

    /// Shuffles the index down into the heap, if required.
    ///
    /// For any trio of an index, the left child of the index, and the right child, the largest of the three is found and, if not the index, swapped with the index.
    fn heapify_down(&mut self, mut heap_index: usize) {
        loop {
            let left_index = Self::heap_left(heap_index);
            if left_index >= self.limit {
                break;
            }

            let mut update_index = heap_index;
            if self.heap_value(left_index) > self.heap_value(update_index) {
                update_index = left_index;
            }

            let right_index = Self::heap_right(heap_index);
            if right_index < self.limit
                && self.heap_value(right_index) > self.heap_value(update_index)
            {
                update_index = right_index;
            }

            if update_index == heap_index {
                break;
            }

            self.heap_swap(heap_index, update_index);
            heap_index = update_index;
        }
    }

    /// Shuffles the index up from the heap, if required.
    ///
    /// Swaps the index with it's parent in the heap, while the parent is smaller.
    fn heapify_up(&mut self, mut heap_index: usize) {
        while heap_index != 0 {
            let parent_index = Self::heap_parent(heap_index);

            match self
                .heap_value(parent_index)
                .partial_cmp(self.heap_value(heap_index))
            {
                Some(Ordering::Less) => {
                    self.heap_swap(heap_index, parent_index);
                    heap_index = parent_index;
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(5, 20);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 5, 4, 1, 0] {
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_update() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 4, 1, 0] {
            test_heap.activate(index);
        }

        for index in [0, 1, 4, 6] {
            test_heap.revalue(index, index as i32);
        }

        test_heap.heapify();

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_bump() {
        let mut test_heap = IndexHeap::default();
        for index in 0..8 {
            test_heap.add(index, index as f64);
            test_heap.activate(index);
        }

        test_heap.apply_to_value_at_value_index(2, |v| v + 100.0);
        test_heap.heapify_if_active(2);

        assert_eq!(test_heap.pop_max(), Some(2));
        assert_eq!(test_heap.pop_max(), Some(7));
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 6);
        test_heap.add(5, 5);
        test_heap.add(4, 4);
        test_heap.add(1, 1);
        test_heap.add(0, 0);
        for index in [6, 5, 4, 1, 0] {
            test_heap.activate(index);
        }

        assert!(test_heap.remove(4));
        assert!(!test_heap.remove(4));
        assert!(test_heap.remove(6));
        assert!(!test_heap.is_active(6));
        assert!(test_heap.is_active(5));
        assert!(!test_heap.add(4, 10));
        assert!(!test_heap.add(4, 2));
        assert!(test_heap.activate(4));
        assert!(!test_heap.activate(4));

        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
    }
}

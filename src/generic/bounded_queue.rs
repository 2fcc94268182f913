/*!
A queue holding (at most) some fixed count of the most recent values pushed, with a running sum.

Used to compare a short-term average against a long-term average, e.g. the average glue (lbd) of the most recent learnt clauses against the glue of all learnt clauses when deciding whether to restart.

```rust
# use otter_ipasir::generic::bounded_queue::BoundedQueue;
let mut queue = BoundedQueue::new(3);

queue.push(1);
queue.push(2);
assert!(!queue.is_full());

queue.push(3);
queue.push(6);
assert!(queue.is_full());
assert_eq!(queue.average(), (2 + 3 + 6) as f64 / 3.0);
assert_eq!(queue.total_average(), (1 + 2 + 3 + 6) as f64 / 4.0);
```
*/

use std::collections::VecDeque;

/// The bounded queue struct.
pub struct BoundedQueue {
    /// The most recent values, oldest first.
    values: VecDeque<u32>,

    /// The maximum count of values held.
    bound: usize,

    /// The sum of the values held.
    sum: u64,

    /// The sum of every value pushed.
    total_sum: u64,

    /// The count of every value pushed.
    total_count: u64,
}

impl BoundedQueue {
    /// A fresh queue, holding at most `bound` values.
    pub fn new(bound: usize) -> Self {
        BoundedQueue {
            values: VecDeque::with_capacity(bound),
            bound,
            sum: 0,
            total_sum: 0,
            total_count: 0,
        }
    }

    /// Pushes a value, dropping the oldest value if the bound is met.
    pub fn push(&mut self, value: u32) {
        if self.values.len() == self.bound {
            if let Some(oldest) = self.values.pop_front() {
                self.sum -= oldest as u64;
            }
        }
        self.values.push_back(value);
        self.sum += value as u64;

        self.total_sum += value as u64;
        self.total_count += 1;
    }

    /// True if the queue holds as many values as the bound permits.
    pub fn is_full(&self) -> bool {
        self.values.len() == self.bound
    }

    /// The average of the values held, or zero if empty.
    pub fn average(&self) -> f64 {
        match self.values.len() {
            0 => 0.0,
            count => self.sum as f64 / count as f64,
        }
    }

    /// The average of every value pushed, or zero if nothing has been pushed.
    pub fn total_average(&self) -> f64 {
        match self.total_count {
            0 => 0.0,
            count => self.total_sum as f64 / count as f64,
        }
    }

    /// Removes the values held, while keeping the totals.
    pub fn clear(&mut self) {
        self.values.clear();
        self.sum = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_keeps_totals() {
        let mut queue = BoundedQueue::new(2);
        queue.push(4);
        queue.push(8);
        queue.clear();

        assert!(!queue.is_full());
        assert_eq!(queue.average(), 0.0);
        assert_eq!(queue.total_average(), 6.0);
    }
}

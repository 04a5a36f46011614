pub const QUEUE_CAPACITY: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum QueueError {
    #[error("Queue is full, cannot insert a new piece")]
    Full(),
    #[error("Queue is empty, no piece to play")]
    Empty(),
}

/// Fixed capacity FIFO backed by a preallocated ring of `N` slots.
///
/// `head` points at the oldest element, `tail` at the next free slot.
/// Both wrap around modulo `N`.
#[derive(Debug, Clone)]
pub struct CircularQueue<T, const N: usize> {
    buffer: [Option<T>; N],
    head: usize,
    tail: usize,
    count: usize,
}

impl<T, const N: usize> Default for CircularQueue<T, N> {
    fn default() -> Self {
        CircularQueue::new()
    }
}

impl<T, const N: usize> CircularQueue<T, N> {
    /// Create an empty queue.
    ///
    /// # Panics
    ///
    /// The `new` function will panic if `N` is zero.
    pub fn new() -> CircularQueue<T, N> {
        assert!(N > 0);

        CircularQueue {
            buffer: std::array::from_fn(|_| None),
            head: 0,
            tail: 0,
            count: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) -> Result<(), QueueError> {
        if self.is_full() {
            return Err(QueueError::Full());
        }

        self.buffer[self.tail] = Some(item);
        self.tail = (self.tail + 1) % N;
        self.count += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty());
        }

        // Slots in [head, head + count) are always filled.
        debug_assert!(self.buffer[self.head].is_some());
        let item = self.buffer[self.head].take().ok_or(QueueError::Empty())?;
        self.head = (self.head + 1) % N;
        self.count -= 1;
        Ok(item)
    }

    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Oldest-first walk over the live slots only.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            queue: self,
            index: self.head,
            remaining: self.count,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    pub fn capacity(&self) -> usize {
        N
    }

    #[cfg(test)]
    fn indices(&self) -> (usize, usize, usize) {
        (self.head, self.tail, self.count)
    }
}

impl<T: Clone, const N: usize> CircularQueue<T, N> {
    pub fn peek_all(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

pub struct Iter<'a, T, const N: usize> {
    queue: &'a CircularQueue<T, N>,
    index: usize,
    remaining: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.queue.buffer[self.index].as_ref();
        self.index = (self.index + 1) % N;
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

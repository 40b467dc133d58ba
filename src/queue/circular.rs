/// Fixed-capacity ring buffer queue.
///
/// Slots are reused once the front has been dequeued, so a full queue accepts
/// new items again after any dequeue.
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    slots: Vec<Option<T>>,
    /// Index of the front item; meaningless while `count == 0`.
    front: usize,
    count: usize,
}

impl<T> CircularQueue<T> {
    /// Create a queue holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            front: 0,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Add an item at the rear.
    ///
    /// When the queue is full the item is handed back as `Err(item)`.
    pub fn enqueue(&mut self, item: T) -> Result<(), T> {
        if self.is_full() {
            log::debug!("Circular queue full (capacity {})", self.capacity());
            return Err(item);
        }
        let rear = (self.front + self.count) % self.capacity();
        self.slots[rear] = Some(item);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the front item, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.front].take();
        self.front = (self.front + 1) % self.capacity();
        self.count -= 1;
        if self.count == 0 {
            self.front = 0;
        }
        item
    }

    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].as_ref()
    }

    /// Items from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.count).filter_map(move |offset| self.slots[(self.front + offset) % capacity].as_ref())
    }
}

//! Growable array-backed LIFO container.
//!
//! - [Stack]: the container itself.
//! - [Iter]: a borrowed top-to-bottom cursor over a stack.
//! - [StackError]: failures from partial operations.
//!
//! The backing buffer is a boxed slice of slots that is replaced wholesale
//! whenever it fills, doubling in length each time. Slots above the live
//! count always hold `None`, so popped values are released immediately
//! rather than kept alive by stale storage.
pub mod error;
pub mod iter;

pub use error::StackError;
pub use iter::Iter;

pub struct Stack<T> {
    buffer: Box<[Option<T>]>, /* fixed-length at any instant, len >= 1 */
    count: usize,             /* live elements occupy buffer[..count] */
}

fn slots<T>(capacity: usize) -> Box<[Option<T>]> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots.into_boxed_slice()
}

impl<T> Stack<T> {
    /// Create an empty stack with a backing capacity of one slot.
    pub fn new() -> Self {
        Self {
            buffer: slots(1),
            count: 0,
        }
    }

    /// Create an empty stack with exactly `capacity` backing slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
        if capacity == 0 {
            return Err(StackError::ZeroCapacity);
        }
        Ok(Self {
            buffer: slots(capacity),
            count: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Length of the backing buffer, always at least one.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Push `item` onto the top, doubling the backing buffer first if it
    /// is full. Never fails.
    pub fn push(&mut self, item: T) {
        if self.count == self.buffer.len() {
            self.grow();
        }
        self.buffer[self.count] = Some(item);
        self.count += 1;
    }

    /// Remove and return the top element. The vacated slot is cleared so
    /// the stack does not keep the value alive.
    pub fn pop(&mut self) -> Result<T, StackError> {
        if self.count == 0 {
            return Err(StackError::Empty);
        }
        self.count -= 1;
        let Some(item) = self.buffer[self.count].take() else {
            unreachable!("slots below count are always occupied")
        };
        Ok(item)
    }

    /// Return the top element without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        let Some(top) = self.count.checked_sub(1) else {
            return Err(StackError::Empty);
        };
        let Some(item) = self.buffer[top].as_ref() else {
            unreachable!("slots below count are always occupied")
        };
        Ok(item)
    }

    /// Copy every element into a fresh vec, top first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buffer[..self.count]
            .iter()
            .rev()
            .filter_map(|slot| slot.clone())
            .collect()
    }

    /// Whether any live element equals `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.buffer[..self.count]
            .iter()
            .any(|slot| slot.as_ref() == Some(item))
    }

    /// Drop every element and reset the count to zero. The backing
    /// capacity is retained.
    pub fn clear(&mut self) {
        for slot in &mut self.buffer[..self.count] {
            *slot = None;
        }
        self.count = 0;
    }

    /// Begin a top-to-bottom traversal. See [Iter] for the cursor
    /// protocol.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    fn grow(&mut self) {
        // Replace the buffer wholesale, moving elements index-preserving.
        let mut next = slots(self.buffer.len() * 2);
        for (old, new) in self.buffer.iter_mut().zip(next.iter_mut()) {
            *new = old.take();
        }
        self.buffer = next;
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, source: I) {
        for item in source {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Build a stack by pushing the source in iteration order, so the last
    /// source element ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(source: I) -> Self {
        let mut stack = Self::new();
        stack.extend(source);
        stack
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

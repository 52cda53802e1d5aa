//! Borrowed top-to-bottom traversal over a [Stack].
use crate::{Stack, StackError};

/// A cursor over a [Stack], visiting the most recently pushed element
/// first.
///
/// The cursor starts one position past the top, so [Iter::advance] must be
/// called before the first [Iter::current]. [Iterator] is also implemented,
/// folding advance-then-current into `next` for use in `for` loops.
///
/// The shared borrow of the source stack means the stack cannot be mutated
/// while a cursor is live.
pub struct Iter<'a, T> {
    stack: &'a Stack<T>,
    cursor: usize, /* one past the element current() reads; len + 1 before the first advance, 0 when exhausted */
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(stack: &'a Stack<T>) -> Self {
        Self {
            stack,
            cursor: stack.len() + 1,
        }
    }

    /// Return the element at the cursor. Fails before the first advance
    /// and once the traversal is exhausted.
    pub fn current(&self) -> Result<&'a T, StackError> {
        if self.cursor == 0 || self.cursor > self.stack.len() {
            return Err(StackError::CursorOutOfRange);
        }
        let Some(item) = self.stack.buffer[self.cursor - 1].as_ref() else {
            unreachable!("slots below count are always occupied")
        };
        Ok(item)
    }

    /// Step the cursor down one element, saturating at the bottom.
    /// Returns whether an element is available at the new position.
    pub fn advance(&mut self) -> bool {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor > 0
    }

    /// Restart the traversal from the stack's current top. A stack that
    /// changed size since this cursor was created restarts from the new
    /// top, not the one it was created over.
    pub fn reset(&mut self) {
        self.cursor = self.stack.len() + 1;
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.advance() {
            return None;
        }
        self.current().ok()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Stack, StackError};

    #[test]
    fn visits_top_to_bottom() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        let visited: Vec<i32> = stack.iter().copied().collect();
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[test]
    fn for_each_loop() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        let mut visited = vec![];
        for item in &stack {
            visited.push(*item);
        }
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[test]
    fn current_fails_before_first_advance() {
        let stack: Stack<i32> = [1].into_iter().collect();
        let cursor = stack.iter();
        assert_eq!(cursor.current(), Err(StackError::CursorOutOfRange));
    }

    #[test]
    fn cursor_protocol() {
        let stack: Stack<i32> = [1, 2].into_iter().collect();
        let mut cursor = stack.iter();
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&2));
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&1));
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Err(StackError::CursorOutOfRange));
        // Advancing past the bottom keeps reporting exhaustion.
        assert!(!cursor.advance());
    }

    #[test]
    fn empty_stack_is_immediately_exhausted() {
        let stack = Stack::<i32>::new();
        let mut cursor = stack.iter();
        assert!(!cursor.advance());
        assert_eq!(cursor.current(), Err(StackError::CursorOutOfRange));
    }

    #[test]
    fn reset_restarts_from_the_top() {
        let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        let mut cursor = stack.iter();
        assert!(cursor.advance());
        assert!(cursor.advance());
        cursor.reset();
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&3));
    }

    #[test]
    fn fresh_cursor_after_mutation_starts_from_new_top() {
        let mut stack: Stack<i32> = [1, 2, 3].into_iter().collect();
        {
            let mut cursor = stack.iter();
            assert!(cursor.advance());
            assert_eq!(cursor.current(), Ok(&3));
        }
        stack.push(4);
        let mut cursor = stack.iter();
        assert!(cursor.advance());
        assert_eq!(cursor.current(), Ok(&4));
    }
}

//! # Stack Module
//!
//! A generic last-in-first-out container.
//!
//! ```text
//!   push(3)        pop() -> Ok(3)
//!     │                ▲
//!     ▼                │
//!   ┌───┐  ◄── top ──  ┌───┐
//!   │ 3 │              │ 3 │
//!   │ 2 │              │ 2 │
//!   │ 1 │              │ 1 │
//!   └───┘              └───┘
//! ```
//!
//! Popping or peeking an empty stack is a caller bug, so it returns
//! [`StackError::Empty`] instead of inventing a default value.
//!
//! ## Usage
//! ```rust
//! use shopkit_core::stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.size(), 1);
//! ```

use crate::error::StackError;

/// Last-in-first-out stack backed by a `Vec`. The top is the end of the vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Puts `item` on top of the stack.
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::error::StackError;
    /// use shopkit_core::stack::Stack;
    ///
    /// let mut stack: Stack<i32> = Stack::new();
    /// assert_eq!(stack.pop(), Err(StackError::Empty));
    /// ```
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Checks if the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Removes every item. Calling it on an empty stack is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// The last item yielded ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_increases_size() {
        let mut stack = Stack::new();
        stack.push(1);
        assert_eq!(stack.size(), 1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_push_then_pop_is_lifo() {
        let mut stack = Stack::new();
        stack.push("first");
        stack.push("second");
        stack.push("third");

        assert_eq!(stack.pop(), Ok("third"));
        assert_eq!(stack.pop(), Ok("second"));
        assert_eq!(stack.pop(), Ok("first"));
        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack: Stack<u8> = Stack::new();
        let err = stack.pop().unwrap_err();
        assert_eq!(err, StackError::Empty);
        assert!(err.to_string().to_lowercase().contains("empty"));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = Stack::new();
        stack.push(1);
        assert_eq!(stack.peek(), Ok(&1));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn test_peek_empty_is_error() {
        let stack: Stack<String> = Stack::default();
        assert_eq!(stack.peek(), Err(StackError::Empty));
    }

    #[test]
    fn test_pop_after_drain_is_error() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(StackError::Empty));
    }

    #[test]
    fn test_clear() {
        let mut stack: Stack<i32> = (1..=5).collect();
        assert_eq!(stack.size(), 5);

        stack.clear();
        assert_eq!(stack.size(), 0);

        // Idempotent
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn test_from_iter_top_is_last() {
        let stack: Stack<i32> = vec![1, 2, 3].into_iter().collect();
        assert_eq!(stack.peek(), Ok(&3));
    }
}

use std::{error, fmt};

/// Returned by `Heap::pop` when there is nothing to pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeapError;

impl error::Error for EmptyHeapError {}

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot pop from an empty heap")
    }
}

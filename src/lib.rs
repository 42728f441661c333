pub mod error;
pub mod heap;
pub mod item;

pub use error::EmptyHeapError;
pub use heap::{Heap, Mode};
pub use item::Item;

use crate::error::EmptyHeapError;
use crate::item::Item;

/// Which end of the ordering sits at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    MinHeap,
    MaxHeap,
}

/// Array-backed binary heap of `Item`s.
/// The children of index i live at 2i + 1 and 2i + 2.
#[derive(Debug, Clone)]
pub struct Heap<T: PartialOrd, P> {
    data: Vec<Item<T, P>>,
    mode: Mode,
}

impl<T: PartialOrd, P> Heap<T, P> {
    pub fn new(mode: Mode) -> Self {
        Heap {
            data: Vec::new(),
            mode,
        }
    }

    pub fn with_capacity(mode: Mode, capacity: usize) -> Self {
        Heap {
            data: Vec::with_capacity(capacity),
            mode,
        }
    }

    /// Build a heap out of arbitrarily ordered items in linear time
    pub fn from_items(mode: Mode, items: Vec<Item<T, P>>) -> Self {
        let mut heap = Heap { data: items, mode };
        for i in (0..heap.data.len()).rev() {
            heap.down(i);
        }
        heap
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The item the next `pop` would return
    pub fn peek(&self) -> Option<&Item<T, P>> {
        self.data.first()
    }

    fn parent(&self, i: usize) -> usize {
        (i - 1) / 2
    }

    fn left(&self, i: usize) -> usize {
        2 * i + 1
    }

    fn right(&self, i: usize) -> usize {
        2 * i + 2
    }

    fn is_in_bound(&self, i: usize) -> bool {
        i < self.data.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.data[i].value() < self.data[j].value()
    }

    fn greater(&self, i: usize, j: usize) -> bool {
        self.data[i].value() > self.data[j].value()
    }

    /// True if the item at i belongs above the item at j
    fn compare(&self, i: usize, j: usize) -> bool {
        match self.mode {
            Mode::MinHeap => self.less(i, j),
            Mode::MaxHeap => self.greater(i, j),
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }

    fn up(&mut self, i: usize) {
        /* Propagate the element at `i` up through the heap as needed */
        if i > 0 {
            let parent = self.parent(i);
            if self.compare(i, parent) {
                self.swap(i, parent);
                self.up(parent)
            }
        }
    }

    fn down(&mut self, i: usize) {
        /* Fix the heap property when a new element is at `i` */
        let mut best = i;
        let left = self.left(i);
        if self.is_in_bound(left) && self.compare(left, best) {
            best = left;
        }
        // strict comparison, so equal children leave the left one in place
        let right = self.right(i);
        if self.is_in_bound(right) && self.compare(right, best) {
            best = right;
        }
        if best != i {
            self.swap(i, best);
            self.down(best)
        }
    }

    pub fn push(&mut self, value: T, information: P) {
        self.data.push(Item::new(value, information));
        self.up(self.data.len() - 1);
    }

    pub fn pop(&mut self) -> Result<Item<T, P>, EmptyHeapError> {
        if self.is_empty() {
            return Err(EmptyHeapError);
        }
        // moves the last item into the root slot
        let root = self.data.swap_remove(0);
        if !self.is_empty() {
            self.down(0);
        }
        Ok(root)
    }

    /// Drain the heap in pop order
    pub fn into_sorted_vec(mut self) -> Vec<Item<T, P>> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }
}

impl<T: PartialOrd, P> Extend<(T, P)> for Heap<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, information) in iter {
            self.push(value, information);
        }
    }
}

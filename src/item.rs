/// A value stored in a `Heap`, together with data the heap carries along but
/// never looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item<T, P> {
    value: T,
    information: P,
}

impl<T, P> Item<T, P> {
    pub fn new(value: T, information: P) -> Self {
        Item { value, information }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn information(&self) -> &P {
        &self.information
    }

    pub fn into_parts(self) -> (T, P) {
        (self.value, self.information)
    }
}

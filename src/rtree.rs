use crate::{Rectangle, Result};

/// A collection of payloads that can be range-searched by rectangle.
pub trait SpatialIndex<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, item: T) -> Result<()>;

    /// All payloads whose rectangle overlaps `area`, in no particular order.
    fn search(&self, area: &Rectangle) -> Result<Vec<&T>>;

    fn clear(&mut self);
}

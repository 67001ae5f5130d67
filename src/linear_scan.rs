use crate::{HasEnvelope, Rectangle, Result, SpatialIndex};

/// Baseline index: every search checks every payload.
#[derive(Debug, Clone)]
pub struct LinearScan<T> {
    entries: Vec<(T, Rectangle)>,
}

impl<T> Default for LinearScan<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinearScan<T> {
    pub fn new() -> Self {
        LinearScan {
            entries: Vec::new(),
        }
    }
}

impl<T: HasEnvelope> SpatialIndex<T> for LinearScan<T> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, item: T) -> Result<()> {
        let envelope = item.envelope();
        envelope.validate()?;
        self.entries.push((item, envelope));
        Ok(())
    }

    fn search(&self, area: &Rectangle) -> Result<Vec<&T>> {
        area.validate()?;
        Ok(self
            .entries
            .iter()
            .filter(|(_, envelope)| area.intersects(envelope))
            .map(|(item, _)| item)
            .collect())
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Tuning knobs for [`crate::RTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RTreeConfig {
    /// Most children a node may hold before it is split.
    pub max_per_level: usize,
    /// Padding added on every side of a container's rectangle. Must be
    /// non-negative; [`crate::RTree::with_config`] rejects anything else.
    pub buffer: f64,
}

impl Default for RTreeConfig {
    fn default() -> Self {
        RTreeConfig {
            max_per_level: 5,
            buffer: 0.,
        }
    }
}

impl RTreeConfig {
    pub fn with_max_per_level(mut self, max_per_level: usize) -> Self {
        self.max_per_level = max_per_level;
        self
    }

    pub fn with_buffer(mut self, buffer: f64) -> Self {
        self.buffer = buffer;
        self
    }
}

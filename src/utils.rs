use crate::{Coordinate, Rectangle};

/// One rectangle per segment of the path through `coords`.
pub fn rectangles_from_coordinates(coords: &[Coordinate]) -> Vec<Rectangle> {
    coords
        .windows(2)
        .map(|c| Rectangle::spanning(c[0], c[1]))
        .collect()
}

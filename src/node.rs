use log::trace;

use crate::{HasEnvelope, RTreeError, Rectangle, Result};

/// Level of the nodes wrapping a single payload.
pub const CONTAINER_LEVEL: i32 = -1;

#[derive(Debug, Clone)]
pub(crate) enum Entries<T> {
    /// Levels >= 0. Level-0 branches hold containers.
    Branch(Vec<Node<T>>),
    /// `envelope` is the payload's rectangle at insertion time; the node's
    /// own `rect` may be padded.
    Container { item: T, envelope: Rectangle },
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) level: i32,
    pub(crate) rect: Rectangle,
    pub(crate) entries: Entries<T>,
}

impl<T> HasEnvelope for Node<T> {
    fn envelope(&self) -> Rectangle {
        self.rect
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Group {
    First,
    Second,
}

impl<T> Node<T> {
    pub(crate) fn new_branch(level: i32, rect: Rectangle) -> Self {
        Node::with_children(level, rect, Vec::new())
    }

    pub(crate) fn with_children(level: i32, rect: Rectangle, children: Vec<Node<T>>) -> Self {
        Node {
            level,
            rect,
            entries: Entries::Branch(children),
        }
    }

    pub(crate) fn new_container(item: T, envelope: Rectangle, buffer: f64) -> Self {
        Node {
            level: CONTAINER_LEVEL,
            rect: envelope.buffered(buffer),
            entries: Entries::Container { item, envelope },
        }
    }

    pub(crate) fn children(&self) -> &[Node<T>] {
        match &self.entries {
            Entries::Branch(children) => children.as_slice(),
            Entries::Container { .. } => &[],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.children().len()
    }

    /// Split an overflowing branch into two siblings of the same level.
    ///
    /// Seeds are the pair of children with the largest normalized
    /// separation along x or y; the rest are handed out one at a time,
    /// most decisive child first, to whichever group ends up smaller.
    /// No minimum fill is enforced on either group.
    pub(crate) fn split(self) -> Result<(Node<T>, Node<T>)> {
        let Node {
            level,
            rect,
            entries,
        } = self;
        let children = match entries {
            Entries::Branch(children) if children.len() >= 2 => children,
            Entries::Branch(children) => {
                return Err(RTreeError::SplitUnderflow {
                    children: children.len(),
                })
            }
            Entries::Container { .. } => return Err(RTreeError::SplitUnderflow { children: 0 }),
        };

        let rects: Vec<Rectangle> = children.iter().map(|c| c.rect).collect();
        let (order, rect_first, rect_second) = distribute(&rect, &rects);

        let mut first = Vec::new();
        let mut second = Vec::new();
        let mut slots: Vec<Option<Node<T>>> = children.into_iter().map(Some).collect();
        for (index, group) in order {
            if let Some(child) = slots[index].take() {
                match group {
                    Group::First => first.push(child),
                    Group::Second => second.push(child),
                }
            }
        }
        trace!(
            "split level {} node into {} + {} children",
            level,
            first.len(),
            second.len()
        );

        Ok((
            Node::with_children(level, rect_first, first),
            Node::with_children(level, rect_second, second),
        ))
    }
}

/// Assign every rectangle to one of two groups.
///
/// Returns the assignments in the order they were made, along with each
/// group's bounding rectangle. Requires `rects.len() >= 2`.
fn distribute(
    bounds: &Rectangle,
    rects: &[Rectangle],
) -> (Vec<(usize, Group)>, Rectangle, Rectangle) {
    let (seed_first, seed_second) = pick_seeds(bounds, rects);
    let mut assigned = vec![false; rects.len()];
    assigned[seed_first] = true;
    assigned[seed_second] = true;

    let mut rect_first = rects[seed_first];
    let mut rect_second = rects[seed_second];
    let mut order = Vec::with_capacity(rects.len());
    order.push((seed_first, Group::First));
    order.push((seed_second, Group::Second));

    while order.len() < rects.len() {
        let next = match pick_next(rects, &assigned, &rect_first, &rect_second) {
            Some(next) => next,
            None => break,
        };
        assigned[next] = true;

        let grown_first = rect_first.merge(rects[next]);
        let grown_second = rect_second.merge(rects[next]);
        if grown_first.area() < grown_second.area() {
            rect_first = grown_first;
            order.push((next, Group::First));
        } else {
            rect_second = grown_second;
            order.push((next, Group::Second));
        }
    }

    (order, rect_first, rect_second)
}

/// The unassigned rectangle whose placement matters most: the one that
/// maximizes the difference between the two groups' grown areas.
fn pick_next(
    rects: &[Rectangle],
    assigned: &[bool],
    rect_first: &Rectangle,
    rect_second: &Rectangle,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, rect) in rects.iter().enumerate() {
        if assigned[index] {
            continue;
        }
        let diff = (rect_first.merge(rect).area() - rect_second.merge(rect).area()).abs();
        if best.map_or(true, |(_, best_diff)| diff > best_diff) {
            best = Some((index, diff));
        }
    }
    best.map(|(index, _)| index)
}

fn pick_seeds(bounds: &Rectangle, rects: &[Rectangle]) -> (usize, usize) {
    let (low_x, high_x, separation_x) =
        extreme_pair(rects, |r| r.x_min, |r| r.x_max, bounds.x_max - bounds.x_min);
    let (low_y, high_y, separation_y) =
        extreme_pair(rects, |r| r.y_min, |r| r.y_max, bounds.y_max - bounds.y_min);

    if separation_y > separation_x {
        (low_y, high_y)
    } else {
        (low_x, high_x)
    }
}

/// Along one axis: the rectangle with the greatest low side, the other
/// rectangle with the least high side, and their separation normalized by
/// `extent`. A zero extent gives a separation of 0.
fn extreme_pair<L, H>(rects: &[Rectangle], low: L, high: H, extent: f64) -> (usize, usize, f64)
where
    L: Fn(&Rectangle) -> f64,
    H: Fn(&Rectangle) -> f64,
{
    let mut max_low = 0;
    for (index, rect) in rects.iter().enumerate().skip(1) {
        if low(rect) > low(&rects[max_low]) {
            max_low = index;
        }
    }

    let mut min_high = if max_low == 0 { 1 } else { 0 };
    for (index, rect) in rects.iter().enumerate() {
        if index != max_low && high(rect) < high(&rects[min_high]) {
            min_high = index;
        }
    }

    let separation = high(&rects[min_high]) - low(&rects[max_low]);
    let normalized = if extent > 0. { separation / extent } else { 0. };
    (max_low, min_high, normalized)
}

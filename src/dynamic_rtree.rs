/**
 * A dynamic, in-memory R-tree.
 *
 * Payloads are inserted one at a time; nodes that overflow are split with a
 * linear-cost heuristic and the tree grows upward from the root. Payload
 * rectangles are captured at insertion time, so moving objects are handled
 * by `clear()` and reinsertion rather than in-place updates.
 */
use std::mem;

use log::debug;

use crate::node::{Entries, Node, CONTAINER_LEVEL};
use crate::{Coordinate, HasEnvelope, RTreeConfig, RTreeError, Rectangle, Result, SpatialIndex};

#[derive(Debug, Clone)]
pub struct RTree<T> {
    bounds: Rectangle,
    config: RTreeConfig,
    size: usize,
    root: Node<T>,
}

impl<T> RTree<T> {
    pub fn new(low: Coordinate, high: Coordinate, max_per_level: usize) -> Result<Self> {
        Self::with_config(
            low,
            high,
            RTreeConfig::default().with_max_per_level(max_per_level),
        )
    }

    pub fn with_config(low: Coordinate, high: Coordinate, config: RTreeConfig) -> Result<Self> {
        let bounds = Rectangle::new(low, high);
        bounds.validate()?;
        if config.max_per_level < 2 {
            return Err(RTreeError::InvalidFanout {
                max_per_level: config.max_per_level,
            });
        }
        check_buffer(config.buffer)?;
        debug!(
            "new rtree over {} with max_per_level {}",
            bounds, config.max_per_level
        );
        Ok(RTree {
            bounds,
            config,
            size: 0,
            root: Node::new_branch(0, bounds),
        })
    }

    /// Drop every payload, leaving an empty tree over the original bounds.
    pub fn clear(&mut self) {
        debug!("clearing rtree with {} entries", self.size);
        self.root = Node::new_branch(0, self.bounds);
        self.size = 0;
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of branch levels; an empty tree has height 1.
    pub fn height(&self) -> usize {
        self.root.level as usize + 1
    }

    pub fn degree(&self) -> usize {
        self.config.max_per_level
    }

    pub fn config(&self) -> &RTreeConfig {
        &self.config
    }

    /// The bounds the tree was constructed with.
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// The root's rectangle: the bounds, grown to cover every insertion.
    pub fn envelope(&self) -> Rectangle {
        self.root.rect
    }

    /// Find all payloads whose rectangle overlaps `area`.
    ///
    /// Subtrees are pruned by their bounding rectangle; payloads are matched
    /// against their own rectangle, never the padded container.
    pub fn search(&self, area: &Rectangle) -> Result<Vec<&T>> {
        area.validate()?;
        let mut results = Vec::new();

        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            for child in node.children() {
                match &child.entries {
                    Entries::Container { item, envelope } => {
                        if area.intersects(envelope) {
                            results.push(item);
                        }
                    }
                    Entries::Branch(_) => {
                        if area.intersects(child.rect) {
                            stack.push(child);
                        }
                    }
                }
            }
        }

        Ok(results)
    }

    pub fn root(&self) -> NodeView<'_, T> {
        NodeView {
            node: &self.root,
            depth: 0,
        }
    }

    /// Walk every node in pre-order, root first.
    pub fn visit<F>(&self, mut visitor: F)
    where
        F: FnMut(NodeView<'_, T>),
    {
        let mut stack = vec![self.root()];
        while let Some(view) = stack.pop() {
            // Reverse so children come off the stack in order.
            let mut children: Vec<_> = view.children().collect();
            children.reverse();
            stack.extend(children);
            visitor(view);
        }
    }
}

impl<T: HasEnvelope> RTree<T> {
    /// Insert with the configured buffer.
    pub fn insert(&mut self, item: T) -> Result<()> {
        let buffer = self.config.buffer;
        self.insert_with_buffer(item, buffer)
    }

    /// Insert `item`, padding its container rectangle by `buffer` on all
    /// sides.
    pub fn insert_with_buffer(&mut self, item: T, buffer: f64) -> Result<()> {
        check_buffer(buffer)?;
        let envelope = item.envelope();
        envelope.validate()?;
        let container = Node::new_container(item, envelope, buffer);

        let max_per_level = self.config.max_per_level;
        self.root.rect.expand(container.rect);
        insert_into(&mut self.root, container, max_per_level)?;
        self.size += 1;

        if self.root.len() > max_per_level {
            let level = self.root.level + 1;
            let rect = self.root.rect;
            let old_root = mem::replace(&mut self.root, Node::new_branch(level, rect));
            let (first, second) = old_root.split()?;
            self.root = Node::with_children(level, rect, vec![first, second]);
            debug!("grew rtree root to height {}", self.height());
        }
        Ok(())
    }
}

/// A container must cover its payload, so the padding can only grow it.
fn check_buffer(buffer: f64) -> Result<()> {
    if buffer >= 0. {
        Ok(())
    } else {
        Err(RTreeError::InvalidBuffer { buffer })
    }
}

fn insert_into<T>(node: &mut Node<T>, container: Node<T>, max_per_level: usize) -> Result<()> {
    let level = node.level;
    let children = match &mut node.entries {
        Entries::Branch(children) => children,
        Entries::Container { .. } => {
            return Err(RTreeError::CorruptTree(format!(
                "descended into a node at level {}",
                CONTAINER_LEVEL
            )))
        }
    };

    if level == 0 {
        children.push(container);
        return Ok(());
    }

    let target = container.rect;
    let index = match children.iter().position(|c| c.rect.contains(target)) {
        Some(index) => index,
        None => {
            let index = least_enlargement(children, &target).ok_or_else(|| {
                RTreeError::CorruptTree(format!("empty branch at level {}", level))
            })?;
            let grown = children[index].rect.merge(target);
            children[index].rect = grown;
            index
        }
    };

    insert_into(&mut children[index], container, max_per_level)?;

    if children[index].len() > max_per_level {
        let overfull = children.remove(index);
        let (first, second) = overfull.split()?;
        children.push(first);
        children.push(second);
    }
    Ok(())
}

/// The first child whose rectangle grows the least to cover `target`.
fn least_enlargement<T>(children: &[Node<T>], target: &Rectangle) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, child) in children.iter().enumerate() {
        let increase = child.rect.enlargement(target);
        if best.map_or(true, |(_, best_increase)| increase < best_increase) {
            best = Some((index, increase));
        }
    }
    best.map(|(index, _)| index)
}

impl<T: HasEnvelope> SpatialIndex<T> for RTree<T> {
    fn len(&self) -> usize {
        self.size
    }

    fn insert(&mut self, item: T) -> Result<()> {
        RTree::insert(self, item)
    }

    fn search(&self, area: &Rectangle) -> Result<Vec<&T>> {
        RTree::search(self, area)
    }

    fn clear(&mut self) {
        RTree::clear(self)
    }
}

/// Read-only handle on one node of an [`RTree`], for inspection and
/// rendering.
#[derive(Debug)]
pub struct NodeView<'a, T> {
    node: &'a Node<T>,
    depth: usize,
}

impl<'a, T> Clone for NodeView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeView<'a, T> {}

impl<'a, T: 'a> NodeView<'a, T> {
    /// `CONTAINER_LEVEL` for containers, 0 for leaf groups, higher above.
    pub fn level(&self) -> i32 {
        self.node.level
    }

    /// Distance from the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The node's rectangle (padded, for containers).
    pub fn rect(&self) -> Rectangle {
        self.node.rect
    }

    pub fn is_container(&self) -> bool {
        self.node.level == CONTAINER_LEVEL
    }

    pub fn len(&self) -> usize {
        self.node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.len() == 0
    }

    pub fn item(&self) -> Option<&'a T> {
        match &self.node.entries {
            Entries::Container { item, .. } => Some(item),
            Entries::Branch(_) => None,
        }
    }

    /// The payload's rectangle as captured at insertion.
    pub fn item_envelope(&self) -> Option<Rectangle> {
        match &self.node.entries {
            Entries::Container { envelope, .. } => Some(*envelope),
            Entries::Branch(_) => None,
        }
    }

    pub fn children(&self) -> impl Iterator<Item = NodeView<'a, T>> + 'a {
        let depth = self.depth + 1;
        self.node
            .children()
            .iter()
            .map(move |node| NodeView { node, depth })
    }
}

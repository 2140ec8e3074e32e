use ndarray::{ArrayView1, ArrayView2};
use rand::{seq::index::sample, Rng};
use tracing::debug;

use crate::partition::{Hyperplane, Side};


/// Node of a random projection tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Split {
        plane: Hyperplane,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Indices into the point store that share this region of space.
    Leaf(Vec<usize>),
}

/// Pending construction work. `Join` assembles the two subtrees most
/// recently finished, left on top.
enum Task {
    Grow(Vec<usize>),
    Join(Hyperplane),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PartitionTree {
    root: Node,
}

impl PartitionTree {
    /// Builds a tree over `indices` (rows of `points`), splitting every
    /// subset larger than `max_leaf_size` by the bisector of two randomly
    /// drawn members.
    ///
    /// Construction uses an explicit work stack, so depth is not bounded by
    /// the call stack.
    pub fn build<R: Rng + ?Sized>(
        points: ArrayView2<f64>,
        indices: Vec<usize>,
        max_leaf_size: usize,
        rng: &mut R,
    ) -> Self {
        let mut tasks = vec![Task::Grow(indices)];
        let mut finished: Vec<Node> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                // Fewer than two points cannot define a bisector.
                Task::Grow(indices) if indices.len() <= max_leaf_size.max(1) => {
                    finished.push(Node::Leaf(indices));
                }
                Task::Grow(indices) => match split(points, &indices, rng) {
                    Some((plane, left, right)) => {
                        tasks.push(Task::Join(plane));
                        tasks.push(Task::Grow(left));
                        tasks.push(Task::Grow(right));
                    }
                    None => {
                        debug!(
                            points = indices.len(),
                            max_leaf_size, "no usable split, keeping oversized leaf"
                        );
                        finished.push(Node::Leaf(indices));
                    }
                },
                Task::Join(plane) => {
                    let (Some(left), Some(right)) = (finished.pop(), finished.pop()) else {
                        unreachable!("join scheduled before both subtrees were grown");
                    };
                    finished.push(Node::Split {
                        plane,
                        left: Box::new(left),
                        right: Box::new(right),
                    });
                }
            }
        }

        let Some(root) = finished.pop() else {
            unreachable!("tree construction produced no root");
        };
        debug_assert!(finished.is_empty());

        PartitionTree { root }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Bucket of the leaf whose region contains `point`.
    pub fn locate_bucket(&self, point: ArrayView1<f64>) -> &[usize] {
        let mut node = &self.root;
        loop {
            match node {
                Node::Split { plane, left, right } => {
                    node = match plane.side(point) {
                        Side::Right => right.as_ref(),
                        Side::Left => left.as_ref(),
                    };
                }
                Node::Leaf(bucket) => return bucket,
            }
        }
    }

    /// All leaf buckets, left to right.
    pub fn leaves(&self) -> Vec<&[usize]> {
        let mut leaves = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Split { left, right, .. } => {
                    stack.push(right.as_ref());
                    stack.push(left.as_ref());
                }
                Node::Leaf(bucket) => leaves.push(bucket.as_slice()),
            }
        }
        leaves
    }

    /// Number of split nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(&self.root, 0)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Split { left, right, .. } => {
                    stack.push((left.as_ref(), depth + 1));
                    stack.push((right.as_ref(), depth + 1));
                }
                Node::Leaf(_) => deepest = deepest.max(depth),
            }
        }
        deepest
    }
}

/// Draws two distinct members of `indices` and splits the subset by their
/// bisector into `(plane, left, right)`.
///
/// Returns `None` when no split puts points on both sides: every member sits
/// on the same coordinates, or the coordinates are not finite.
fn split<R: Rng + ?Sized>(
    points: ArrayView2<f64>,
    indices: &[usize],
    rng: &mut R,
) -> Option<(Hyperplane, Vec<usize>, Vec<usize>)> {
    let pair = sample(rng, indices.len(), 2);
    let first = points.row(indices[pair.index(0)]);
    let mut second = points.row(indices[pair.index(1)]);

    // Duplicates give a zero normal that sends everything left.
    if first == second {
        second = indices
            .iter()
            .map(|&ix| points.row(ix))
            .find(|row| *row != first)?;
    }

    let plane = Hyperplane::bisecting(first, second);
    let (right, left): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&ix| plane.side(points.row(ix)) == Side::Right);

    if left.is_empty() || right.is_empty() {
        return None;
    }
    Some((plane, left, right))
}

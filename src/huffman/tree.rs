use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;

use crate::error::Error;
use crate::Result;

use super::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    pub(crate) weight: usize,
    pub(crate) kind: NodeKind,
    /// Back-reference set while the tree is assembled. Bookkeeping only,
    /// never used to walk or own the tree.
    pub(crate) parent: Option<usize>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn is_branch(&self) -> bool {
        !self.is_leaf()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn weight(&self) -> usize {
        self.weight
    }
}

/// Secondary sort key for queue entries of equal weight. Leaves order
/// before branches, leaves order among themselves by symbol, branches by
/// creation index. Together with the weight this is a strict total order,
/// so the merge sequence is reproducible.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MergeKey {
    Leaf(Symbol),
    Branch(usize),
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    weight: usize,
    key: MergeKey,
    index: usize,
}

pub struct HuffmanTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root_index: usize,
}

impl HuffmanTree {
    /// Builds the tree from a frequency map by repeatedly merging the two
    /// lowest-priority nodes. The first node removed becomes the left
    /// child, the second the right child.
    pub fn new(frequencies: &BTreeMap<Symbol, usize>) -> Result<HuffmanTree> {
        if frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * frequencies.len() - 1);
        let mut queue = BinaryHeap::with_capacity(frequencies.len());
        for (&symbol, &weight) in frequencies {
            let index = nodes.len();
            nodes.push(Node {
                weight,
                kind: NodeKind::Leaf { symbol },
                parent: None,
            });
            queue.push(Reverse(QueueEntry {
                weight,
                key: MergeKey::Leaf(symbol),
                index,
            }));
        }
        while queue.len() > 1 {
            let Reverse(first) = queue.pop().expect("queue has more than one entry");
            let Reverse(second) = queue.pop().expect("queue has more than one entry");
            let index = nodes.len();
            let weight = first.weight + second.weight;
            nodes.push(Node {
                weight,
                kind: NodeKind::Inner {
                    left: first.index,
                    right: second.index,
                },
                parent: None,
            });
            nodes[first.index].parent = Some(index);
            nodes[second.index].parent = Some(index);
            queue.push(Reverse(QueueEntry {
                weight,
                key: MergeKey::Branch(index),
                index,
            }));
        }
        let root_index = match queue.pop() {
            Some(Reverse(entry)) => entry.index,
            None => return Err(Error::EmptyInput),
        };
        Ok(HuffmanTree { nodes, root_index })
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    pub fn branch_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_branch()).count()
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self.root_index, 0usize, "root")];
        while let Some((index, depth, label)) = stack.pop() {
            let node = &self.nodes[index];
            match node.kind {
                NodeKind::Leaf { symbol } => {
                    writeln!(
                        f,
                        "{}{}: leaf {:?} (weight {})",
                        "  ".repeat(depth),
                        label,
                        symbol,
                        node.weight
                    )?;
                }
                NodeKind::Inner { left, right } => {
                    writeln!(
                        f,
                        "{}{}: branch (weight {})",
                        "  ".repeat(depth),
                        label,
                        node.weight
                    )?;
                    stack.push((right, depth + 1, "R"));
                    stack.push((left, depth + 1, "L"));
                }
            }
        }
        Ok(())
    }
}

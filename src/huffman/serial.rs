use crate::error::Error;
use crate::Result;

use super::tree::{HuffmanTree, Node, NodeKind};

const LEAF_MARKER: char = 'L';
const BRANCH_MARKER: char = 'B';
const BRANCH_TERMINATOR: char = '$';

enum Visit {
    Descend(usize),
    Emit,
}

/// Serializes the tree in postorder (left subtree, right subtree, own
/// token): a leaf becomes `L` followed by its symbol, a branch becomes
/// the two-character marker `B$` with no symbol byte. Postorder lets the
/// deserializer rebuild the tree in a single scan with a stack.
pub fn serialize(tree: &HuffmanTree) -> String {
    let mut out = String::new();
    let mut stack = vec![Visit::Descend(tree.root_index)];
    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Descend(index) => match tree.nodes[index].kind {
                NodeKind::Leaf { symbol } => {
                    out.push(LEAF_MARKER);
                    out.push(symbol);
                }
                NodeKind::Inner { left, right } => {
                    stack.push(Visit::Emit);
                    stack.push(Visit::Descend(right));
                    stack.push(Visit::Descend(left));
                }
            },
            Visit::Emit => {
                out.push(BRANCH_MARKER);
                out.push(BRANCH_TERMINATOR);
            }
        }
    }
    out
}

/// Rebuilds a tree from its postorder token stream. A leaf token pushes a
/// node, a branch token pops its right child first and its left child
/// second (inverting push order). Exactly one node must remain at the
/// end; anything else is a malformed stream.
pub fn deserialize(serialized: &str) -> Result<HuffmanTree> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    let mut tokens = serialized.chars();
    while let Some(marker) = tokens.next() {
        match marker {
            LEAF_MARKER => {
                let symbol = tokens
                    .next()
                    .ok_or(Error::MalformedTree("leaf token is missing its symbol"))?;
                let index = nodes.len();
                nodes.push(Node {
                    weight: 0,
                    kind: NodeKind::Leaf { symbol },
                    parent: None,
                });
                stack.push(index);
            }
            BRANCH_MARKER => {
                if tokens.next() != Some(BRANCH_TERMINATOR) {
                    return Err(Error::MalformedTree("branch token is not 'B$'"));
                }
                let right = stack
                    .pop()
                    .ok_or(Error::MalformedTree("branch token without a right child"))?;
                let left = stack
                    .pop()
                    .ok_or(Error::MalformedTree("branch token without a left child"))?;
                let index = nodes.len();
                let weight = nodes[left].weight + nodes[right].weight;
                nodes.push(Node {
                    weight,
                    kind: NodeKind::Inner { left, right },
                    parent: None,
                });
                nodes[left].parent = Some(index);
                nodes[right].parent = Some(index);
                stack.push(index);
            }
            _ => return Err(Error::MalformedTree("unrecognized token")),
        }
    }
    let root_index = stack
        .pop()
        .ok_or(Error::MalformedTree("token stream is empty"))?;
    if !stack.is_empty() {
        return Err(Error::MalformedTree(
            "token stream does not reduce to a single root",
        ));
    }
    Ok(HuffmanTree { nodes, root_index })
}

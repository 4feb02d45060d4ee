use crate::error::Error;
use crate::Result;

use super::tree::{HuffmanTree, NodeKind};
use super::Symbol;

/// Bit-by-bit decode automaton. The cursor starts at the root, `'0'`
/// moves it to the left child and `'1'` to the right child; reaching a
/// leaf emits the leaf's symbol and resets the cursor to the root, one
/// tree walk per decoded symbol.
pub struct Decoder<'a> {
    tree: &'a HuffmanTree,
    cursor: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Decoder<'a> {
        Decoder {
            tree,
            cursor: tree.root_index,
        }
    }

    /// Consumes one bit and returns the decoded symbol if the move landed
    /// on a leaf.
    pub fn step(&mut self, bit: char) -> Result<Option<Symbol>> {
        match self.tree.nodes[self.cursor].kind {
            // Cursor on a leaf only happens for the degenerate lone-leaf
            // tree, which uses the single-bit convention: every '0' emits
            // the symbol, a '1' asks for a child that does not exist.
            NodeKind::Leaf { symbol } => match bit {
                '0' => Ok(Some(symbol)),
                '1' => Err(Error::MalformedTree("move to a missing child")),
                _ => Err(Error::MalformedBitstream("bit is neither '0' nor '1'")),
            },
            NodeKind::Inner { left, right } => {
                let next = match bit {
                    '0' => left,
                    '1' => right,
                    _ => return Err(Error::MalformedBitstream("bit is neither '0' nor '1'")),
                };
                match self.tree.nodes[next].kind {
                    NodeKind::Leaf { symbol } => {
                        self.cursor = self.tree.root_index;
                        Ok(Some(symbol))
                    }
                    NodeKind::Inner { .. } => {
                        self.cursor = next;
                        Ok(None)
                    }
                }
            }
        }
    }

    /// The stream may only end with the cursor back at the root.
    pub fn finish(&self) -> Result<()> {
        if self.cursor != self.tree.root_index {
            return Err(Error::MalformedBitstream(
                "bitstream ended in the middle of a code",
            ));
        }
        Ok(())
    }
}

/// Decodes a whole bitstring against the tree. Any error leaves no
/// partial output behind.
pub fn decode(tree: &HuffmanTree, bits: &str) -> Result<String> {
    let mut decoder = Decoder::new(tree);
    let mut output = String::new();
    for bit in bits.chars() {
        if let Some(symbol) = decoder.step(bit)? {
            output.push(symbol);
        }
    }
    decoder.finish()?;
    Ok(output)
}

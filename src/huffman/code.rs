use std::collections::BTreeMap;

use super::tree::{HuffmanTree, NodeKind};
use super::Symbol;

/// Symbol to bit-string mapping derived from root-to-leaf paths, `'0'`
/// for a left descent and `'1'` for a right descent. Codes are prefix
/// free because only leaves carry symbols.
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl CodeTable {
    /// Walks the tree with an explicit stack instead of recursion so the
    /// traversal depth is independent of the call stack.
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        let mut stack = vec![(tree.root_index, String::new())];
        while let Some((index, path)) = stack.pop() {
            match tree.nodes[index].kind {
                NodeKind::Leaf { symbol } => {
                    // A lone leaf at the root has an empty path; it gets
                    // the single-bit code "0" so encoding stays defined.
                    let code = if path.is_empty() {
                        String::from("0")
                    } else {
                        path
                    };
                    codes.insert(symbol, code);
                }
                NodeKind::Inner { left, right } => {
                    let mut left_path = path.clone();
                    left_path.push('0');
                    let mut right_path = path;
                    right_path.push('1');
                    stack.push((right, right_path));
                    stack.push((left, left_path));
                }
            }
        }
        CodeTable { codes }
    }

    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes
            .iter()
            .map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

use std::collections::BTreeMap;

use crate::error::Error;
use crate::Result;

pub mod code;
pub mod decoder;
pub mod encoder;
pub mod serial;
pub mod tree;

pub use code::CodeTable;
pub use tree::HuffmanTree;

pub type Symbol = char;

/// Scans the input once and counts how often each distinct symbol occurs.
pub fn count_frequencies(input: &str) -> BTreeMap<Symbol, usize> {
    let mut frequencies = BTreeMap::new();
    for symbol in input.chars() {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    frequencies
}

/// Stateful codec front end. `compress` builds and retains the tree, so
/// `serialize_tree` is only valid afterwards; `decompress` reconstructs
/// the tree from its serialized form and retains that one instead.
pub struct HuffmanCoder {
    tree: Option<HuffmanTree>,
    table: Option<CodeTable>,
}

impl HuffmanCoder {
    pub fn new() -> HuffmanCoder {
        HuffmanCoder {
            tree: None,
            table: None,
        }
    }

    pub fn compress(&mut self, input: &str) -> Result<String> {
        let frequencies = count_frequencies(input);
        if frequencies.is_empty() {
            return Err(Error::EmptyInput);
        }
        for (symbol, count) in &frequencies {
            log::debug!("frequency: {:?} occurs {} times", symbol, count);
        }
        let tree = HuffmanTree::new(&frequencies)?;
        log::debug!("built tree:\n{}", tree);
        let table = CodeTable::from_tree(&tree);
        for (symbol, code) in table.iter() {
            log::debug!("code: {:?} -> {}", symbol, code);
        }
        let bits = encoder::encode(input, &table)?;
        self.tree = Some(tree);
        self.table = Some(table);
        Ok(bits)
    }

    pub fn serialize_tree(&self) -> Result<String> {
        let tree = self.tree.as_ref().ok_or(Error::TreeNotBuilt)?;
        Ok(serial::serialize(tree))
    }

    pub fn decompress(&mut self, bits: &str, serialized_tree: &str) -> Result<String> {
        let tree = serial::deserialize(serialized_tree)?;
        let output = decoder::decode(&tree, bits)?;
        self.table = Some(CodeTable::from_tree(&tree));
        self.tree = Some(tree);
        Ok(output)
    }

    pub fn code_table(&self) -> Option<&CodeTable> {
        self.table.as_ref()
    }
}

impl Default for HuffmanCoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::{count_frequencies, HuffmanCoder};
    use crate::error::Error;

    fn round_trip(input: &str) {
        let mut coder = HuffmanCoder::new();
        let bits = coder.compress(input).expect("compress should succeed");
        let serialized_tree = coder.serialize_tree().expect("tree was just built");
        let output = coder
            .decompress(&bits, &serialized_tree)
            .expect("decompress should succeed");
        assert_eq!(output, input, "round trip failed for {:?}", input);
    }

    #[test]
    fn count_frequencies_counts_every_distinct_symbol() {
        let frequencies = count_frequencies("abracadabra");
        assert_eq!(frequencies.len(), 5);
        assert_eq!(frequencies[&'a'], 5);
        assert_eq!(frequencies[&'b'], 2);
        assert_eq!(frequencies[&'c'], 1);
        assert_eq!(frequencies[&'d'], 1);
        assert_eq!(frequencies[&'r'], 2);
    }

    #[test]
    fn count_frequencies_of_empty_input_is_empty() {
        assert!(count_frequencies("").is_empty());
    }

    #[test]
    fn round_trip_over_various_inputs() {
        round_trip("abcdef");
        round_trip("abracadabra");
        round_trip("mississippi");
        round_trip("if a machine is expected to be infallible it cannot also be intelligent");
        round_trip("aaaa");
        round_trip("ab");
        round_trip("z");
    }

    #[test]
    fn compress_of_empty_input_is_rejected() {
        let mut coder = HuffmanCoder::new();
        assert!(matches!(coder.compress(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn serialize_tree_before_compress_is_rejected() {
        let coder = HuffmanCoder::new();
        assert!(matches!(coder.serialize_tree(), Err(Error::TreeNotBuilt)));
    }

    #[test]
    fn lone_symbol_input_compresses_to_zero_bits() {
        let mut coder = HuffmanCoder::new();
        let bits = coder.compress("aaaa").expect("compress should succeed");
        assert_eq!(bits, "0000");
        let serialized_tree = coder.serialize_tree().expect("tree was just built");
        let output = coder
            .decompress("0000", &serialized_tree)
            .expect("decompress should succeed");
        assert_eq!(output, "aaaa");
    }

    #[test]
    fn repeated_runs_produce_identical_output() {
        let input = "she sells sea shells by the sea shore";
        let mut first = HuffmanCoder::new();
        let mut second = HuffmanCoder::new();
        let first_bits = first.compress(input).expect("compress should succeed");
        let second_bits = second.compress(input).expect("compress should succeed");
        assert_eq!(first_bits, second_bits);
        assert_eq!(
            first.serialize_tree().expect("tree was just built"),
            second.serialize_tree().expect("tree was just built")
        );
    }

    #[test]
    fn decompress_keeps_no_partial_output_on_error() {
        let mut coder = HuffmanCoder::new();
        let bits = coder.compress("abcdef").expect("compress should succeed");
        let serialized_tree = coder.serialize_tree().expect("tree was just built");
        // drop the last bit so the stream ends mid-code
        let truncated = &bits[..bits.len() - 1];
        let result = coder.decompress(truncated, &serialized_tree);
        assert!(result.is_err());
    }

    #[test]
    fn code_table_is_available_after_both_directions() {
        let mut coder = HuffmanCoder::new();
        assert!(coder.code_table().is_none());
        let bits = coder.compress("abab").expect("compress should succeed");
        let table_len = coder.code_table().expect("table after compress").len();
        assert_eq!(table_len, 2);
        let serialized_tree = coder.serialize_tree().expect("tree was just built");
        coder
            .decompress(&bits, &serialized_tree)
            .expect("decompress should succeed");
        assert_eq!(coder.code_table().expect("table after decompress").len(), 2);
    }
}

use crate::error::Error;
use crate::Result;

use super::code::CodeTable;

/// Concatenates the code of every input symbol in input order. A symbol
/// without a table entry aborts the whole encode, nothing is returned.
pub fn encode(input: &str, table: &CodeTable) -> Result<String> {
    let mut bits = String::new();
    for symbol in input.chars() {
        let code = table
            .code(symbol)
            .ok_or(Error::UndefinedSymbol(symbol))?;
        bits.push_str(code);
    }
    Ok(bits)
}

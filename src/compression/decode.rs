use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::CodeTable;

/// Lookup tables needed to decode a bitstream one bit at a time.
struct DecodeMap<'a> {
    /// codeword -> symbol
    symbols: FxHashMap<&'a str, &'a str>,
    /// every proper prefix of every codeword
    prefixes: FxHashSet<&'a str>,
}

impl<'a> DecodeMap<'a> {
    fn new(codes: &'a CodeTable) -> Self {
        let symbols = codes.iter().map(|(symbol, code)| (code, symbol)).collect();
        let prefixes = codes
            .iter()
            .flat_map(|(_, code)| (1..code.len()).map(move |i| &code[..i]))
            .collect();
        Self { symbols, prefixes }
    }
}

/// Decode a string of '0' and '1' characters back into text using `codes`.
///
/// Bits are appended to the pending code until it matches a codeword. A pending code that can no
/// longer grow into any codeword, a character that is not a bit, or a stream that ends part way
/// through a code are all decode errors.
pub fn huf_decode(bits: &str, codes: &CodeTable) -> Result<String> {
    let map = DecodeMap::new(codes);
    let mut decoded = String::with_capacity(bits.len() / 2);
    let mut current = String::with_capacity(codes.max_len());
    let mut count = 0_usize;

    for (position, bit) in bits.chars().enumerate() {
        if bit != '0' && bit != '1' {
            return Err(HuffError::Decode {
                position,
                reason: format!("{:?} is not a bit", bit),
            });
        }
        current.push(bit);
        if let Some(symbol) = map.symbols.get(current.as_str()) {
            trace!("{} -> {:?}", current, symbol);
            decoded.push_str(symbol);
            count += 1;
            current.clear();
        } else if !map.prefixes.contains(current.as_str()) {
            return Err(HuffError::Decode {
                position,
                reason: format!("{} does not begin any code", current),
            });
        }
    }

    if !current.is_empty() {
        return Err(HuffError::Decode {
            position: bits.len(),
            reason: format!("stream ended inside code {}", current),
        });
    }
    debug!("Decoded {} bits into {} symbols.", bits.len(), count);
    Ok(decoded)
}

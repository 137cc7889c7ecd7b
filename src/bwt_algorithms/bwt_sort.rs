use std::cmp::Ordering;
use std::collections::BTreeMap;

use log::{debug, trace};

use crate::error::{HuffError, Result};

/// Burrows-Wheeler-Transform of a message. Rotations are sorted by character value, and identical
/// rotations keep their original order so the key points at the first row equal to the input.
/// This returns the transformed message and the key (row of the original message).
pub fn bwt_encode(text: &str) -> Result<(String, usize)> {
    let block = text.chars().collect::<Vec<char>>();
    if block.is_empty() {
        return Err(HuffError::EmptyInput("cannot transform an empty message"));
    }

    // Create index into block. A stable sort keeps duplicate rotations in rotation order.
    let mut index = (0..block.len()).collect::<Vec<usize>>();
    index.sort_by(|a, b| block_compare(*a, *b, &block));

    // Get key and BWT output
    let mut key = 0;
    let mut bwt = String::with_capacity(text.len());
    for (row, &start) in index.iter().enumerate() {
        if start == 0 {
            key = row;
            bwt.push(block[block.len() - 1]);
        } else {
            bwt.push(block[start - 1]);
        }
    }
    debug!("BWT key is {} for {} characters.", key, block.len());
    trace!("BWT is: {:?}", bwt);
    Ok((bwt, key))
}

/// compare the rotations starting at a and b to decide which sorts first
fn block_compare<T: Ord>(a: usize, b: usize, block: &[T]) -> Ordering {
    let min = std::cmp::min(block[a..].len(), block[b..].len());

    // Lexicographical comparison
    let mut result = block[a..a + min].cmp(&block[b..b + min]);

    // Equal up to the end of the block: the rotation that started later has wrapped to the front,
    // so compare its head against the other's tail, then the two remaining pieces
    if result == Ordering::Equal {
        if a < b {
            let to_end = block.len() - a - min;
            result = block[(a + min)..].cmp(&block[..to_end]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[..rest_of_block].cmp(&block[to_end..(to_end + rest_of_block)]);
            }
        } else {
            let to_end = block.len() - b - min;
            result = block[..to_end].cmp(&block[(b + min)..]);
            if result == Ordering::Equal {
                let rest_of_block = block.len() - to_end - min;
                return block[to_end..(to_end + rest_of_block)].cmp(&block[..rest_of_block]);
            }
        }
    }
    result
}

/// Decode a Burrows-Wheeler-Transform given the transformed message and its key.
/// Walks the transformation vector once instead of rebuilding the rotation table.
pub fn bwt_decode(bwt_in: &str, key: usize) -> Result<String> {
    let bwt = bwt_in.chars().collect::<Vec<char>>();
    let end = bwt.len();
    if end == 0 {
        return Err(HuffError::InvalidInput(
            "cannot reverse an empty transform".to_string(),
        ));
    }
    if key >= end {
        return Err(HuffError::InvalidInput(format!(
            "BWT key {} is outside a block of {} characters",
            key, end
        )));
    }

    // Count each character, then turn the counts into the first row each character sorts to.
    let mut freq = BTreeMap::new();
    for &c in &bwt {
        *freq.entry(c).or_insert(0_usize) += 1;
    }
    let mut sum = 0;
    for count in freq.values_mut() {
        let this = *count;
        *count = sum;
        sum += this;
    }

    // Build the transformation vector to find the next character in the original data
    let mut t_vec = vec![0_usize; end];
    for (i, c) in bwt.iter().enumerate() {
        if let Some(next) = freq.get_mut(c) {
            t_vec[*next] = i;
            *next += 1;
        }
    }

    // Follow the vector from the key, one character per step
    let mut out = String::with_capacity(bwt_in.len());
    let mut row = t_vec[key];
    for _ in 0..end {
        out.push(bwt[row]);
        row = t_vec[row];
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn banana_test() {
        assert_eq!(bwt_encode("banana").unwrap(), ("nnbaaa".to_string(), 3));
        assert_eq!(bwt_decode("nnbaaa", 3).unwrap(), "banana");
    }

    #[test]
    fn peter_piper_test() {
        let transformed = "fsrrdkkeaddrrffs,esd?????     eeiiiieeeehrppkllkppttpphppPPIootwppppPPcccccckk      iipp    eeeeeeeeer'ree  ";
        let original = "If Peter Piper picked a peck of pickled peppers, where's the peck of pickled peppers Peter Piper picked?????";
        assert_eq!(
            bwt_encode(original).unwrap(),
            (transformed.to_string(), 24)
        );
        assert_eq!(bwt_decode(transformed, 24).unwrap(), original);
    }

    #[test]
    fn periodic_test() {
        // Equal rotations keep rotation order, so the key is the first matching row
        assert_eq!(bwt_encode("abab").unwrap(), ("bbaa".to_string(), 0));
        assert_eq!(bwt_decode("bbaa", 0).unwrap(), "abab");
        let (bwt, key) = bwt_encode("xyzxyzxyz").unwrap();
        assert_eq!(bwt_decode(&bwt, key).unwrap(), "xyzxyzxyz");
    }

    #[test]
    fn single_char_test() {
        assert_eq!(bwt_encode("q").unwrap(), ("q".to_string(), 0));
        assert_eq!(bwt_decode("q", 0).unwrap(), "q");
        let (bwt, key) = bwt_encode("aaaa").unwrap();
        assert_eq!(bwt_decode(&bwt, key).unwrap(), "aaaa");
    }

    #[test]
    fn utf8_test() {
        let text = "naïve café, naïve café";
        let (bwt, key) = bwt_encode(text).unwrap();
        assert_eq!(bwt.chars().count(), text.chars().count());
        assert_eq!(bwt_decode(&bwt, key).unwrap(), text);
    }

    #[test]
    fn bad_key_test() {
        assert!(matches!(
            bwt_decode("nnbaaa", 6),
            Err(HuffError::InvalidInput(_))
        ));
        assert!(matches!(bwt_decode("", 0), Err(HuffError::InvalidInput(_))));
        assert!(matches!(bwt_encode(""), Err(HuffError::EmptyInput(_))));
    }

    #[test]
    fn block_compare_test() {
        let data = "caabage".chars().collect::<Vec<char>>();
        // "aabagec" < "abageca"
        assert_eq!(block_compare(1, 2, &data), Ordering::Less);
        assert_eq!(block_compare(0, 0, &data), Ordering::Equal);
        // "gecaaba" > "ecaabag"
        assert_eq!(block_compare(5, 6, &data), Ordering::Greater);
    }
}

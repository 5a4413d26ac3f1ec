//! Byte <-> emoji codec.
//!
//! Every byte `b` becomes two symbols: `ALPHABET[b / 96]` then
//! `ALPHABET[b % 96]`. The first symbol therefore only ever comes from the
//! first three entries, the second from the whole table. Output has no
//! separators; readers split it on grapheme boundaries.

pub mod alphabet;

use getrandom::fill;
use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

pub use alphabet::{ALPHABET, ALPHABET_LEN, categories, index_of};

use crate::container::HEADER_LEN;
use crate::crypto::TAG_LEN;
use crate::error::{Error, Result};

/// Encodes `bytes` as `2 * bytes.len()` symbols.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2 * 4);

    for &b in bytes {
        let b = usize::from(b);
        out.push_str(alphabet::symbol_at(b / ALPHABET_LEN));
        out.push_str(alphabet::symbol_at(b % ALPHABET_LEN));
    }

    trace!(bytes = bytes.len(), "encoded symbols");
    out
}

/// Splits `text` into user-perceived characters.
pub fn split_symbols(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Decodes a symbol sequence produced by [`encode`].
///
/// # Errors
///
/// - [`Error::InvalidSequenceLength`] if the number of symbols is odd
/// - [`Error::UnknownSymbol`] for the first symbol not in the alphabet
/// - [`Error::InvalidSymbolPair`] if a pair encodes a value above 255
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let symbols = split_symbols(text);

    if symbols.len() % 2 != 0 {
        return Err(Error::InvalidSequenceLength(symbols.len()));
    }

    let mut bytes = Vec::with_capacity(symbols.len() / 2);

    for pair in symbols.chunks_exact(2) {
        let high = index_of(pair[0]).ok_or_else(|| Error::UnknownSymbol(pair[0].to_string()))?;
        let low = index_of(pair[1]).ok_or_else(|| Error::UnknownSymbol(pair[1].to_string()))?;

        let value = usize::from(high) * ALPHABET_LEN + usize::from(low);
        let byte =
            u8::try_from(value).map_err(|_| Error::InvalidSymbolPair(pair.concat()))?;
        bytes.push(byte);
    }

    trace!(symbols = symbols.len(), "decoded symbols");
    Ok(bytes)
}

/// Rough symbol count for a plaintext of `plaintext_len` bytes, for size
/// hints only. Saturates at `usize::MAX` instead of overflowing.
pub fn estimate_length(plaintext_len: usize) -> usize {
    // base64-sized body plus salt, nonce, tag and a little slack
    const OVERHEAD: usize = 48;
    const _: () = assert!(OVERHEAD >= HEADER_LEN + TAG_LEN);

    plaintext_len
        .saturating_mul(4)
        .div_ceil(3)
        .saturating_add(OVERHEAD)
        .saturating_mul(2)
}

/// Groups a symbol sequence for display. A `group_size` of zero keeps the
/// whole sequence in one group.
pub fn chunk(text: &str, group_size: usize) -> Vec<String> {
    let symbols = split_symbols(text);
    if symbols.is_empty() {
        return Vec::new();
    }

    let size = if group_size == 0 {
        symbols.len()
    } else {
        group_size
    };

    symbols.chunks(size).map(|group| group.concat()).collect()
}

/// `count` symbols drawn uniformly from the alphabet. Decoration only.
pub fn random_symbols(count: usize) -> Result<String> {
    // 192 = 2 * 96, so bytes below it map to indexes without bias
    const LIMIT: u8 = (2 * ALPHABET_LEN) as u8;

    let mut out = String::with_capacity(count * 4);
    let mut produced = 0;
    let mut buf = [0u8; 64];

    while produced < count {
        fill(&mut buf).map_err(|_| Error::Random)?;
        for &b in buf.iter().filter(|&&b| b < LIMIT).take(count - produced) {
            out.push_str(alphabet::symbol_at(usize::from(b) % ALPHABET_LEN));
            produced += 1;
        }
    }

    Ok(out)
}

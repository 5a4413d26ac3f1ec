//! The published symbol table.
//!
//! Order is part of the wire format: index `i` here is index `i` for every
//! encoder and decoder, so entries are never reordered, removed or inserted.
//! The six named groups exist for display only.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 96;

/// Symbols per display group.
pub const CATEGORY_LEN: usize = 16;

/// Display names of the groups, in alphabet order.
pub const CATEGORY_NAMES: [&str; 6] = ["faces", "animals", "nature", "food", "objects", "symbols"];

/// Four entries carry a trailing U+FE0F variation selector and therefore
/// span two code points; decoding must split on grapheme boundaries.
pub static ALPHABET: [&str; ALPHABET_LEN] = [
    // faces
    "😀", "😃", "😄", "😁", "😆", "😅", "🤣", "😂",
    "🙂", "🙃", "😉", "😊", "😇", "🥰", "😍", "🤩",
    // animals
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼",
    "🐨", "🐯", "🦁", "🐸", "🐵", "🐔", "🐧", "🐦",
    // nature
    "🌸", "🌺", "🌻", "🌷", "🌹", "🥀", "🌾", "🌿",
    "🍀", "🍃", "🌳", "🌲", "🌴", "🌱", "🌵", "🌰",
    // food
    "🍎", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍈",
    "🍒", "🍑", "🥭", "🍍", "🥝", "🍅", "🍆", "🥑",
    // objects
    "⚡", "🔥", "💧", "\u{2744}\u{fe0f}", "\u{2600}\u{fe0f}", "🌙", "⭐", "✨",
    "💫", "💎", "🔮", "🎭", "🎨", "🎪", "🎯", "🎲",
    // symbols
    "💚", "💙", "💜", "🧡", "\u{2764}\u{fe0f}", "🖤", "🤍", "💕",
    "💖", "💗", "💘", "💝", "💞", "💟", "\u{2763}\u{fe0f}", "💔",
];

static INDEX: LazyLock<HashMap<&'static str, u8>> = LazyLock::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(i, &symbol)| (symbol, i as u8))
        .collect()
});

/// Position of `symbol` in the alphabet, if it is part of it.
pub fn index_of(symbol: &str) -> Option<u8> {
    INDEX.get(symbol).copied()
}

/// Symbol at `index`; callers keep `index < ALPHABET_LEN`.
pub(crate) fn symbol_at(index: usize) -> &'static str {
    ALPHABET[index]
}

/// Named display groups in alphabet order. Concatenated, they are the
/// alphabet.
pub fn categories() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    CATEGORY_NAMES
        .iter()
        .zip(ALPHABET.chunks(CATEGORY_LEN))
        .map(|(&name, symbols)| (name, symbols))
}

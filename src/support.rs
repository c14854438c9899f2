pub(crate) mod en_us {
    /// Stands for exactly one arbitrary letter inside a mask. Never a letter itself.
    pub const WILDCARD: char = '?';

    /// Letter carried by the root node, never matched against.
    pub(crate) const ROOT_RUNE: char = '\u{0000}';

    #[inline(always)]
    pub(crate) fn char_code(rune: char) -> Option<u8> {
        if rune.is_ascii_lowercase() {
            Some((rune as u32 - 'a' as u32) as u8)
        } else {
            None
        }
    }

    /// Whether `word` only holds lower-case latin letters, i.e. can be stored.
    #[inline]
    pub fn is_normalized(word: &str) -> bool {
        word.chars().all(|rune| char_code(rune).is_some())
    }

}

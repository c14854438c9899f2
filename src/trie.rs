use hashbrown::HashSet;

use crate::error::{Result, SpellError};
use crate::support::en_us;

/// One letter position of the tree. Children stay sorted and unique by `rune`.
#[derive(Debug)]
pub(crate) struct Node {
    rune: char,
    occupied: u32,
    terminal: bool,
    children: Vec<Node>,
}

impl Node {
    fn new_with(rune: char) -> Self {
        Node {
            rune,
            occupied: 0,
            terminal: false,
            children: Vec::new(),
        }
    }

    /// Returns `true` if the suffix ended on a node that was not terminal yet.
    fn insert(&mut self, suffix: &[char]) -> bool {
        let (rune, rest) = match suffix.split_first() {
            Some(split) => split,
            None => {
                let fresh = !self.terminal;
                self.terminal = true;
                return fresh;
            }
        };

        let pos = match find_child_pos(&self.children, *rune) {
            Ok(pos) => pos,
            Err(pos) => {
                self.add_bit(*rune);
                self.children.insert(pos, Node::new_with(*rune));
                pos
            }
        };

        self.children[pos].insert(rest)
    }

    fn child(&self, rune: char) -> Option<&Node> {
        // quick reject
        if !self.check_bit(rune) {
            return None;
        }

        find_child_pos(&self.children, rune)
            .ok()
            .map(|pos| &self.children[pos])
    }

    fn collect<F>(&self, matched: &mut String, rest: &[char], found: &mut F)
    where
        F: FnMut(&str),
    {
        let (rune, rest) = match rest.split_first() {
            Some(split) => split,
            None => {
                if self.terminal {
                    found(matched.as_str());
                }
                return;
            }
        };

        if *rune == en_us::WILDCARD {
            for child in self.children.iter() {
                matched.push(child.rune);
                child.collect(matched, rest, found);
                matched.pop();
            }
        } else if let Some(child) = self.child(*rune) {
            matched.push(child.rune);
            child.collect(matched, rest, found);
            matched.pop();
        }
    }

    fn check_bit(&self, rune: char) -> bool {
        match en_us::char_code(rune) {
            Some(code) => (self.occupied >> code) & 1 == 1,
            None => false,
        }
    }

    fn add_bit(&mut self, rune: char) {
        if let Some(code) = en_us::char_code(rune) {
            self.occupied |= 1 << code;
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::new_with(en_us::ROOT_RUNE)
    }
}

#[inline]
fn find_child_pos(children: &[Node], rune: char) -> std::result::Result<usize, usize> {
    children.binary_search_by(|child| child.rune.cmp(&rune))
}

/// Prefix tree holding the dictionary.
///
/// Lookups take masks: literal letters plus [`WILDCARD`](crate::WILDCARD), each
/// standing for exactly one letter. A mask only matches stored words of the same
/// length. Lookups never mutate the tree, so a built `Trie` can be shared freely
/// between threads.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Inserts a lower-case word. Re-adding a stored word is a no-op.
    pub fn add(&mut self, word: &str) -> Result<()> {
        if !en_us::is_normalized(word) {
            return Err(SpellError::InvalidWord(word.to_owned()));
        }

        let runes: Vec<char> = word.chars().collect();
        if self.root.insert(&runes) {
            self.words += 1;
        }

        Ok(())
    }

    /// Every stored word matching `mask`, in lexicographic order.
    pub fn find_all(&self, mask: &str) -> Vec<String> {
        let mut result = Vec::new();
        self.walk(mask, |word| result.push(word.to_owned()));
        result
    }

    /// Same walk as [`find_all`](Trie::find_all), unioning the matches into `found`.
    pub fn find_all_into(&self, mask: &str, found: &mut HashSet<String>) {
        self.walk(mask, |word| {
            if !found.contains(word) {
                found.insert(word.to_owned());
            }
        });
    }

    pub fn contains(&self, word: &str) -> bool {
        let mut curr = &self.root;
        for rune in word.chars() {
            match curr.child(rune) {
                Some(child) => curr = child,
                None => return false,
            }
        }

        curr.terminal
    }

    /// Number of distinct stored words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    fn walk<F>(&self, mask: &str, mut found: F)
    where
        F: FnMut(&str),
    {
        let runes: Vec<char> = mask.chars().collect();
        let mut matched = String::with_capacity(runes.len());
        self.root.collect(&mut matched, &runes, &mut found);
    }
}

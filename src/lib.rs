//! Dictionary lookup tolerating up to two single-letter insertions or deletions.
//!
//! Words are kept in a [`Trie`]. A word missing from it is expanded into wildcard
//! [`Masks`] one and two edits away, and the trie is queried with each of them, in
//! parallel chunks when there are many.

mod config;
mod correction;
mod dictionary;
mod error;
mod masks;
mod search;
mod support;
mod text;
mod trie;

pub mod prelude {
    pub use crate::config::{Config, SpellerConfig};
    pub use crate::correction::{Correction, CorrectionKind};
    pub use crate::text::TextChecker;
    pub use crate::SpellChecker;
}

pub use crate::config::{Config, SpellerConfig};
pub use crate::correction::{Correction, CorrectionKind, WordSet};
pub use crate::dictionary::{Document, DELIMITER};
pub use crate::error::{Result, SpellError};
pub use crate::masks::{MaskSet, Masks};
pub use crate::support::en_us::{is_normalized, WILDCARD};
pub use crate::text::{tokenize, TextChecker, Token};
pub use crate::trie::Trie;

use crate::search::Executor;

pub struct SpellChecker {
    trie: Trie,
    config: Config,
    executor: Executor,
}

impl SpellChecker {
    pub fn new() -> SpellChecker {
        SpellChecker {
            trie: Trie::new(),
            config: Config::new(),
            executor: Executor::Global,
        }
    }

    /// Builds a checker with its own worker pool when `config` asks for workers.
    pub fn new_with_config(config: Config) -> Result<SpellChecker> {
        let executor = Executor::from_config(&config)?;

        Ok(SpellChecker {
            trie: Trie::new(),
            config,
            executor,
        })
    }

    /// Adds a lower-case word to the dictionary. Adding it again changes nothing.
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        self.trie.add(word)
    }

    pub fn add_words<I, S>(&mut self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref())?;
        }

        Ok(())
    }

    /// Checks a lower-case word against the dictionary.
    ///
    /// Stops at the first non-empty level: the word itself, then every dictionary
    /// word one edit away, then two edits away. The two-edit level is returned even
    /// when empty.
    pub fn check_spelling(&self, word: &str) -> Correction {
        debug_assert!(
            is_normalized(word),
            "words must be lower-cased before checking: {:?}",
            word
        );

        // if already a correct word, we're done
        if self.trie.contains(word) {
            let mut exact = WordSet::with_capacity(1);
            exact.insert(word.to_owned());
            return Correction::Exact(exact);
        }

        let masks = Masks::create(word);
        let chunk_size = self.config.get_chunk_size();

        let found = search::lookup(&self.trie, &masks.one_edit, chunk_size, &self.executor);
        if !found.is_empty() {
            log::debug!("{:?}: {} candidates one edit away", word, found.len());
            return Correction::OneEdit(found);
        }

        let found = search::lookup(&self.trie, &masks.two_edit, chunk_size, &self.executor);
        log::debug!("{:?}: {} candidates two edits away", word, found.len());

        Correction::TwoEdit(found)
    }

    #[inline]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of distinct dictionary words.
    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        SpellChecker::new()
    }
}

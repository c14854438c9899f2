use std::fmt;

use hashbrown::HashSet;

pub type WordSet = HashSet<String>;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub enum CorrectionKind {
    Exact,
    OneEdit,
    TwoEdit,
}

impl fmt::Display for CorrectionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CorrectionKind::Exact => "exact",
            CorrectionKind::OneEdit => "one edit",
            CorrectionKind::TwoEdit => "two edits",
        };

        f.write_str(name)
    }
}

/// Outcome of a spelling check, carrying the dictionary words at the smallest
/// distance found. Only `TwoEdit` may carry an empty set: nothing within two edits.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Correction {
    Exact(WordSet),
    OneEdit(WordSet),
    TwoEdit(WordSet),
}

impl Correction {
    pub fn kind(&self) -> CorrectionKind {
        match self {
            Correction::Exact(_) => CorrectionKind::Exact,
            Correction::OneEdit(_) => CorrectionKind::OneEdit,
            Correction::TwoEdit(_) => CorrectionKind::TwoEdit,
        }
    }

    #[inline]
    pub fn edits(&self) -> u8 {
        self.kind() as u8
    }

    pub fn words(&self) -> &WordSet {
        match self {
            Correction::Exact(words) | Correction::OneEdit(words) | Correction::TwoEdit(words) => {
                words
            }
        }
    }

    pub fn into_words(self) -> WordSet {
        match self {
            Correction::Exact(words) | Correction::OneEdit(words) | Correction::TwoEdit(words) => {
                words
            }
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.kind() == CorrectionKind::Exact
    }

    /// Nothing in the dictionary is within two edits.
    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.words().is_empty()
    }

    /// Suggestions in lexicographic order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words().iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> WordSet {
        list.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn kinds_and_edits() {
        let exact = Correction::Exact(words(&["rain"]));
        assert_eq!(exact.kind(), CorrectionKind::Exact);
        assert_eq!(exact.edits(), 0);
        assert!(exact.is_exact());

        let one = Correction::OneEdit(words(&["main", "mainly"]));
        assert_eq!(one.edits(), 1);
        assert_eq!(one.sorted(), vec!["main", "mainly"]);

        let none = Correction::TwoEdit(WordSet::new());
        assert_eq!(none.edits(), 2);
        assert!(none.is_unknown());
        assert!(!none.is_exact());
    }

    #[test]
    fn into_words_moves_the_set() {
        let correction = Correction::TwoEdit(words(&["zoom"]));
        assert_eq!(correction.into_words(), words(&["zoom"]));
    }

    #[test]
    fn kind_names() {
        assert_eq!(CorrectionKind::OneEdit.to_string(), "one edit");
        assert!(CorrectionKind::Exact < CorrectionKind::TwoEdit);
    }
}

use hashbrown::HashSet;

use crate::support::en_us::WILDCARD;

pub type MaskSet = HashSet<String>;

/// Lookup masks derived from a single word.
///
/// Every edit is expanded up front into a same-length template, so the trie walk never
/// has to change length: a deletion drops a letter, an insertion adds a
/// [`WILDCARD`](crate::WILDCARD). Two consecutive deletions or insertions are not
/// generated, nor is an insertion undone by deleting the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Masks {
    pub one_edit: MaskSet,
    pub two_edit: MaskSet,
}

impl Masks {
    pub fn create(word: &str) -> Masks {
        let runes: Vec<char> = word.chars().collect();
        let mut masks = Masks::default();

        del_del(&runes, &mut masks);
        ins_ins(&runes, &mut masks);
        ins_del(&runes, &mut masks);

        masks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.one_edit.len() + self.two_edit.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.one_edit.is_empty() && self.two_edit.is_empty()
    }
}

fn del_del(runes: &[char], masks: &mut Masks) {
    for pos in 0..runes.len() {
        let deleted = remove_at(runes, pos);

        for again in 0..deleted.len() {
            // succeeding deletions
            if again == pos || again + 1 == pos {
                continue;
            }

            masks.two_edit.insert(remove_at(&deleted, again).into_iter().collect());
        }

        masks.one_edit.insert(deleted.into_iter().collect());
    }
}

fn ins_ins(runes: &[char], masks: &mut Masks) {
    for gap in 0..=runes.len() {
        let inserted = wildcard_at(runes, gap);

        for again in 0..=inserted.len() {
            // succeeding insertions
            if again == gap || again == gap + 1 {
                continue;
            }

            masks
                .two_edit
                .insert(wildcard_at(&inserted, again).into_iter().collect());
        }

        masks.one_edit.insert(inserted.into_iter().collect());
    }
}

fn ins_del(runes: &[char], masks: &mut Masks) {
    for gap in 0..=runes.len() {
        let inserted = wildcard_at(runes, gap);

        for pos in 0..inserted.len() {
            // deleting the wildcard gives back the word
            if pos == gap {
                continue;
            }

            masks.two_edit.insert(remove_at(&inserted, pos).into_iter().collect());
        }
    }
}

#[inline]
fn remove_at(runes: &[char], pos: usize) -> Vec<char> {
    let mut result = runes.to_vec();
    result.remove(pos);
    result
}

#[inline]
fn wildcard_at(runes: &[char], gap: usize) -> Vec<char> {
    let mut result = Vec::with_capacity(runes.len() + 1);
    result.extend_from_slice(&runes[..gap]);
    result.push(WILDCARD);
    result.extend_from_slice(&runes[gap..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(masks: &[&str]) -> MaskSet {
        masks.iter().map(|mask| mask.replace('*', "?")).collect()
    }

    #[test]
    fn empty_word() {
        let masks = Masks::create("");

        assert_eq!(masks.one_edit, set(&["*"]));
        assert!(masks.two_edit.is_empty());
    }

    #[test]
    fn single_letter() {
        let masks = Masks::create("a");

        assert_eq!(masks.one_edit, set(&["", "*a", "a*"]));
        assert_eq!(masks.two_edit, set(&["*a*", "*"]));
    }

    #[test]
    fn two_letters() {
        let masks = Masks::create("ab");

        assert_eq!(masks.one_edit, set(&["a", "b", "*ab", "a*b", "ab*"]));
        assert_eq!(
            masks.two_edit,
            set(&["*a*b", "*ab*", "a*b*", "*b", "*a", "a*", "b*"])
        );
    }

    #[test]
    fn repeated_letters_collapse() {
        let masks = Masks::create("aa");

        assert_eq!(masks.one_edit, set(&["a", "*aa", "a*a", "aa*"]));
        assert_eq!(masks.two_edit, set(&["*a", "a*", "*aa*", "*a*a", "a*a*"]));
    }

    #[test]
    fn three_letters() {
        let masks = Masks::create("abc");

        assert_eq!(
            masks.one_edit,
            set(&["bc", "ac", "ab", "*abc", "a*bc", "ab*c", "abc*"])
        );
        assert_eq!(
            masks.two_edit,
            set(&[
                // two insertions
                "*a*bc", "*ab*c", "*abc*", "a*b*c", "a*bc*", "ab*c*",
                // two deletions
                "b",
                // insertion and deletion
                "*ab", "*ac", "*bc", "a*b", "a*c", "ab*", "ac*", "b*c", "bc*",
            ])
        );
    }

    #[test]
    fn excluded_combinations() {
        let masks = Masks::create("word");

        // allowed
        for mask in ["word*", "wor*", "wr", "*wor", "*w*ord"] {
            let mask = mask.replace('*', "?");
            assert!(
                masks.one_edit.contains(&mask) || masks.two_edit.contains(&mask),
                "{}",
                mask
            );
        }

        // two succeeding edits
        for mask in ["wo**", "wo", "rd", "**word", "wo**rd"] {
            let mask = mask.replace('*', "?");
            assert!(!masks.two_edit.contains(&mask), "{}", mask);
        }

        // insertion undone by a deletion
        assert!(!masks.two_edit.contains("word"));
    }

    #[test]
    fn masks_stay_within_two_edits() {
        let word = "brainy";
        let masks = Masks::create(word);

        for mask in masks.one_edit.iter() {
            let len = mask.chars().count();
            assert!(len + 1 == word.len() || len == word.len() + 1, "{}", mask);
        }

        for mask in masks.two_edit.iter() {
            let len = mask.chars().count();
            assert!(
                len + 2 == word.len() || len == word.len() || len == word.len() + 2,
                "{}",
                mask
            );
        }
    }

    #[test]
    fn deterministic() {
        let masks = Masks::create("mainy");

        assert_eq!(masks, Masks::create("mainy"));
        assert_eq!(masks.len(), masks.one_edit.len() + masks.two_edit.len());
        assert!(!masks.is_empty());
    }
}

use crate::config::Config;
use crate::correction::Correction;
use crate::error::Result;
use crate::SpellChecker;

#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Token {
    /// Maximal run of ASCII letters.
    Word(String),
    /// Maximal run of anything else.
    Other(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(text) | Token::Other(text) => text,
        }
    }
}

/// Splits `text` into alternating word and non-word runs; joined back they give `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;

    for rune in text.chars() {
        let letter = rune.is_ascii_alphabetic();
        if letter != in_word && !current.is_empty() {
            tokens.push(make_token(in_word, std::mem::take(&mut current)));
        }

        in_word = letter;
        current.push(rune);
    }

    if !current.is_empty() {
        tokens.push(make_token(in_word, current));
    }

    tokens
}

#[inline]
fn make_token(in_word: bool, text: String) -> Token {
    if in_word {
        Token::Word(text)
    } else {
        Token::Other(text)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
enum Casing {
    Lower,
    Capitalized,
    Upper,
}

impl Casing {
    fn of(word: &str) -> Casing {
        let mut runes = word.chars();
        match runes.next() {
            Some(first) if first.is_ascii_uppercase() => {
                if word.len() > 1 && runes.all(|rune| rune.is_ascii_uppercase()) {
                    Casing::Upper
                } else {
                    Casing::Capitalized
                }
            }
            _ => Casing::Lower,
        }
    }

    fn apply(self, word: &str) -> String {
        match self {
            Casing::Lower => word.to_owned(),
            Casing::Upper => word.to_ascii_uppercase(),
            Casing::Capitalized => {
                let mut result = word.to_owned();
                if let Some(first) = result.get_mut(0..1) {
                    first.make_ascii_uppercase();
                }
                result
            }
        }
    }
}

/// Spell checks running text, keeping everything but the words as is.
///
/// Each word is replaced by its suggestion, re-cased to the shape of the word it replaces.
/// Several equally close suggestions are written as `{first second}`, and a word
/// with nothing within two edits as `{word?}`.
pub struct TextChecker {
    checker: SpellChecker,
}

impl TextChecker {
    pub fn new() -> TextChecker {
        TextChecker {
            checker: SpellChecker::new(),
        }
    }

    pub fn new_with_config(config: Config) -> Result<TextChecker> {
        Ok(TextChecker {
            checker: SpellChecker::new_with_config(config)?,
        })
    }

    /// Adds a word in any case; it is stored lower-cased.
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        self.checker.add_word(&word.to_ascii_lowercase())
    }

    /// Adds every word made of latin letters only. Others (`don't`, `e-mail`) can
    /// never match a text word, so they are skipped with a warning. Returns how many
    /// were skipped.
    pub fn add_words<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0;

        for word in words {
            let word = word.as_ref();
            if let Err(e) = self.add_word(word) {
                log::warn!("skipping dictionary word: {}", e);
                skipped += 1;
            }
        }

        skipped
    }

    pub fn check_text(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());

        for token in tokenize(text) {
            match token {
                Token::Word(word) => {
                    let correction = self.checker.check_spelling(&word.to_ascii_lowercase());
                    output.push_str(&render(&word, &correction));
                }
                Token::Other(other) => output.push_str(&other),
            }
        }

        output
    }

    #[inline]
    pub fn checker(&self) -> &SpellChecker {
        &self.checker
    }
}

impl Default for TextChecker {
    fn default() -> Self {
        TextChecker::new()
    }
}

fn render(word: &str, correction: &Correction) -> String {
    if correction.is_exact() {
        return word.to_owned();
    }

    if correction.is_unknown() {
        return format!("{{{}?}}", word);
    }

    let casing = Casing::of(word);
    let suggestions: Vec<String> = correction
        .sorted()
        .into_iter()
        .map(|suggestion| casing.apply(suggestion))
        .collect();

    if suggestions.len() == 1 {
        suggestions.into_iter().collect()
    } else {
        format!("{{{}}}", suggestions.join(" "))
    }
}

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::{Config, SpellerConfig};
use crate::error::{Result, SpellError};

/// Line separating the dictionary from the text, and closing the text.
pub static DELIMITER: &str = "===";

/// Spell checker input: dictionary lines, a delimiter line, text lines, and a
/// closing delimiter line. Anything after the closing delimiter is ignored.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct Document {
    pub words: Vec<String>,
    pub text: String,
}

impl Document {
    pub fn load<P: AsRef<Path>>(path: P, config: &Config) -> Result<Document> {
        let file = File::open(path.as_ref())?;
        Document::parse(BufReader::new(file), config)
    }

    /// Dictionary and text lines together may not exceed `max_lines`; the two
    /// delimiter lines are not counted.
    pub fn parse<R: BufRead>(reader: R, config: &Config) -> Result<Document> {
        let max_lines = config.get_max_lines();
        let max_word_len = config.get_max_word_len();

        let mut lines = reader.lines();
        let mut counted = 0;
        let mut next_line = move || -> Result<String> {
            let line = match lines.next() {
                Some(line) => line?,
                None => return Err(SpellError::MissingDelimiter(DELIMITER)),
            };

            if line != DELIMITER {
                counted += 1;
                if counted > max_lines {
                    return Err(SpellError::TooManyLines(max_lines));
                }
            }

            Ok(line)
        };

        let mut document = Document::default();

        loop {
            let line = next_line()?;
            if line == DELIMITER {
                break;
            }

            for word in line.split_whitespace() {
                if word.chars().count() > max_word_len {
                    return Err(SpellError::WordTooLong {
                        word: word.to_owned(),
                        max: max_word_len,
                    });
                }

                document.words.push(word.to_owned());
            }
        }

        loop {
            let line = next_line()?;
            if line == DELIMITER {
                break;
            }

            document.text.push_str(&line);
            document.text.push('\n');
        }

        log::debug!(
            "parsed {} dictionary words and {} bytes of text",
            document.words.len(),
            document.text.len()
        );

        Ok(document)
    }
}

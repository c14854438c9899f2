use std::io;
use std::ops::Div;
use std::time::SystemTime;

use mask_speller::prelude::*;

static EXIT: &str = "EXIT";
static RUNS: u32 = 20;
static DICTIONARY: &str = "rain zoom main mainly sample sanple brain train grain drain word \
    world would could should spell check checker correct correction";

fn main() {
    let mut service = SpellChecker::new();
    if let Err(e) = service.add_words(DICTIONARY.split_whitespace()) {
        eprintln!("Failed to build the dictionary: {}", e);
        return;
    }

    let stream = io::stdin();
    let mut input = String::new();

    loop {
        println!("Enter the word: ");
        match stream.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {
                let word = input.trim().to_ascii_lowercase();
                if word.eq_ignore_ascii_case(EXIT) {
                    break;
                }

                if !mask_speller::is_normalized(&word) {
                    println!("\nOnly latin letters are supported\n");
                    input.clear();
                    continue;
                }

                let now = SystemTime::now();
                let mut result = service.check_spelling(&word);

                // run multiple times to benchmark
                for _ in 1..RUNS {
                    result = service.check_spelling(&word);
                }

                if let Ok(t) = now.elapsed() {
                    println!("Time elapsed: {:?}\n\nResults ({}):", t.div(RUNS), result.kind());
                }

                for (idx, suggestion) in result.sorted().iter().enumerate() {
                    println!("Suggestion #{}: {}", idx, suggestion);
                }

                println!("\n=========================\n");
                input.clear();
            }
            Err(error) => {
                println!("error: {}", error);
                break;
            }
        }
    }
}

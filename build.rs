//! Embeds the puzzle's word lists
//!
//! Each `data/*.txt` file becomes a `&[&str]` const plus a `_COUNT` const in
//! `OUT_DIR`, pulled in by `src/wordlists/mod.rs`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// `(input file, generated file, const name, doc line)`
const LISTS: [(&str, &str, &str, &str); 2] = [
    (
        "data/answers.txt",
        "answers.rs",
        "ANSWERS",
        "Words the puzzle may pick as its secret",
    ),
    (
        "data/allowed.txt",
        "allowed.rs",
        "ALLOWED",
        "All accepted guesses",
    ),
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    for (input, output, name, doc) in LISTS {
        println!("cargo:rerun-if-changed={input}");

        let content =
            fs::read_to_string(input).unwrap_or_else(|e| panic!("Failed to read {input}: {e}"));
        let source = render_list(&content, name, doc);

        let path = out_dir.join(output);
        fs::write(&path, source)
            .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
    }
}

/// Rust source for one list: lowercase words, blank lines dropped
fn render_list(content: &str, name: &str, doc: &str) -> String {
    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|word| !word.is_empty())
        .collect();

    let mut source = format!("/// {doc}\npub const {name}: &[&str] = &[\n");
    for word in &words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];\n");
    let _ = writeln!(source, "/// Number of words in {name}");
    let _ = writeln!(source, "pub const {name}_COUNT: usize = {};", words.len());
    source
}

//! Example: turning a word list into a single search pattern.
//!
//! Builds a `TrieRegEx` from a handful of words, shows membership checks and
//! the synthesized pattern, then uses the pattern to find whole words in a
//! sentence. Set `RUST_LOG=trieregex=debug` to see mutation logging.
//!
//! Run with: cargo run --example word_pattern

use regex::Regex;
use trieregex::TrieRegEx;

fn main() {
    env_logger::init();

    let words = ["BAKE", "BAKED", "BAKER", "CAKE", "CAKED", "FAKE", "LAKE"];
    let mut tre = TrieRegEx::new(words);

    // Word lookup
    println!("Word lookup:");
    for word in ["BAKE", "BAKER", "BAKES", "CAKE", "LAKE", "MAKE"] {
        println!("  {word}: {}", if tre.has(word) { "yes" } else { "no" });
    }

    println!("\nInitials: {:?}", tre.initials());
    println!("Finals:   {:?}", tre.finals());
    println!("\nPattern: {}", tre.regex());

    tre.remove(["BAKED", "CAKED"]);
    tre.add(["MAKE"]);
    println!("After edits: {}", tre.regex());
    println!("All words: {:?}", tre.words());

    // The fragment is boundary-less; add word boundaries to find whole words.
    let re = match Regex::new(&format!(r"\b(?:{})\b", tre.regex())) {
        Ok(re) => re,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let text = "THE BAKER WILL MAKE A CAKE BY THE LAKE";
    let found: Vec<&str> = re.find_iter(text).map(|m| m.as_str()).collect();
    println!("\nWhole words in {text:?}: {found:?}");
}

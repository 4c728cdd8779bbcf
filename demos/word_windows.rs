//! Word Windows
//!
//! This example counts the most common word pairs in a short text.
//!
//! Key concepts:
//! - Expanding one line into many words with `chain`
//! - Sliding windows over the word stream with `apertures`
//! - Folding into a custom `Form`
//! - Stopping a report early with `take`
//!
//! Run with: cargo run --example word_windows

use beam::form::{form, to_vec};
use beam::source::VecSource;
use beam::stages::{apertures, chain, filter, map, take};
use beam::{from_vec, pipe, BeamError};
use std::collections::HashMap;

const TEXT: &str = "\
the quick brown fox jumps over the lazy dog
the quick red fox naps under the lazy dog
a quick brown dog chases the quick brown fox";

fn words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

fn main() -> Result<(), BeamError> {
    println!("=== Word Windows Example ===\n");

    let lines: Vec<&str> = TEXT.lines().collect();

    // One pass: lines -> words -> overlapping pairs -> "a b" keys
    let pairs = pipe![
        chain(VecSource::new(), words),
        apertures(2)?,
        map(|pair: Vec<String>| pair.join(" ")),
    ];

    let counts = form(
        HashMap::new,
        |mut counts: HashMap<String, usize>, pair: String| {
            *counts.entry(pair).or_default() += 1;
            counts
        },
        |counts: HashMap<String, usize>| {
            let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            ranked
        },
    );

    let ranked = from_vec(lines.clone()).eager(&counts, pairs)?;

    println!("Top pairs:");
    let top = from_vec(ranked).collect(pipe![
        filter(|(_, n): &(String, usize)| *n > 1),
        take(3),
    ])?;
    for (pair, n) in &top {
        println!("  {pair:<14} x{n}");
    }

    // Windows of three words, lazily, stopping at the first that mentions a dog
    println!("\nFirst trigram mentioning a dog:");
    let trigrams = from_vec(lines).lazy(pipe![
        chain(VecSource::new(), words),
        apertures(3)?,
        filter(|w: &Vec<String>| w.iter().any(|word| word == "dog")),
    ]);
    if let Some(first) = trigrams.take(1).next() {
        println!("  {}", first?.join(" "));
    }

    let lengths = from_vec(vec!["one two", "three"]).eager(
        &to_vec(),
        pipe![chain(VecSource::new(), words), map(|w: String| w.len())],
    )?;
    println!("\nWord lengths: {lengths:?}");

    Ok(())
}

//! Lazy Primes
//!
//! This example pulls primes one at a time from an infinite source.
//!
//! Key concepts:
//! - Infinite sources built with `from_loop`
//! - Lazy drives as iterators
//! - `take_while` cutting an infinite drive
//! - Pairing two drives with `zip`
//!
//! Run with: cargo run --example lazy_primes

use beam::source::{loop_source, LoopSource};
use beam::stages::{filter, map, take, take_while, zip};
use beam::{from_loop, pipe, BeamError};

fn is_prime(n: &u64) -> bool {
    *n >= 2 && (2..).take_while(|d| d * d <= *n).all(|d| n % d != 0)
}

fn naturals() -> LoopSource<impl Fn(&u64) -> bool, impl Fn(&u64) -> u64, u64> {
    loop_source(|_: &u64| true, |n: &u64| n + 1)
}

fn main() -> Result<(), BeamError> {
    println!("=== Lazy Primes Example ===\n");

    let mut primes = from_loop(2u64, |_: &u64| true, |n: &u64| n + 1).lazy(filter(is_prime));
    print!("First ten primes:");
    for prime in primes.by_ref().take(10) {
        print!(" {}", prime?);
    }
    println!();
    println!("The handle keeps its place: next is {}", primes.next().unwrap_or(Ok(0))?);

    let below_fifty = from_loop(2u64, |_: &u64| true, |n: &u64| n + 1)
        .collect(pipe![filter(is_prime), take_while(|p: &u64| *p < 50)])?;
    println!("\nPrimes below fifty: {below_fifty:?}");

    // Index each prime by pairing it with the naturals from 1
    let indexed = from_loop(2u64, |_: &u64| true, |n: &u64| n + 1).collect(pipe![
        filter(is_prime),
        zip(|p: u64, i: u64| (i, p), naturals(), 1),
        map(|(i, p): (u64, u64)| format!("p{i}={p}")),
        take(5),
    ])?;
    println!("\nIndexed: {}", indexed.join(", "));

    Ok(())
}

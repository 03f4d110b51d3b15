//! A flattened member cannot carry its own annotation.

#![allow(dead_code)]

use lorem_fill::Loremize;

#[derive(Default, Loremize)]
struct Base {
    id: u64,
}

#[derive(Default, Loremize)]
struct Post {
    #[lorem(flatten, tag = "word")]
    base: Base,
    title: String,
}

fn main() {}

//! `skip` and `flatten` are mutually exclusive.

#![allow(dead_code)]

use lorem_fill::Loremize;

#[derive(Default, Loremize)]
struct Base {
    id: u64,
}

#[derive(Default, Loremize)]
struct Post {
    #[lorem(flatten, skip)]
    base: Base,
}

fn main() {}

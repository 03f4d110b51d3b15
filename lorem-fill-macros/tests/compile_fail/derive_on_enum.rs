//! Loremize is only available for structs.

#![allow(dead_code)]

use lorem_fill::Loremize;

#[derive(Loremize)]
enum Status {
    Active,
    Inactive,
}

fn main() {}

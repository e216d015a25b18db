#![allow(dead_code)]

use tidy_core::Normalize;

#[derive(Normalize)]
enum Kind {
    Text(String),
}

fn main() {}

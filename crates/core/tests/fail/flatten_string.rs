#![allow(dead_code)]

use tidy_core::Normalize;

#[derive(Normalize)]
struct Note {
    #[normalize(flatten)]
    title: String,
}

fn main() {}

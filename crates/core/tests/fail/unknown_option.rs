#![allow(dead_code)]

use tidy_core::Normalize;

#[derive(Normalize)]
#[normalize(lowercase = true)]
struct Query {
    text: Option<String>,
}

fn main() {}

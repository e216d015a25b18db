#![allow(dead_code)]

use tidy_core::Normalize;

#[derive(Normalize)]
struct Audit {
    created_by: Option<String>,
}

#[derive(Normalize)]
struct Note {
    title: String,
    #[normalize(skip, flatten)]
    audit: Audit,
}

fn main() {}

#![allow(dead_code)]

use tidy_core::Normalize;

#[derive(Normalize)]
union Bits {
    int: u32,
    float: f32,
}

fn main() {}

mod bit_field;

pub use bit_field::*;

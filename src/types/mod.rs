//! Core types produced by the colour parser.

pub mod rgb;

pub use rgb::Rgb;

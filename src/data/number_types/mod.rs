//! # Number types
//!
//! Different data structures and algorithms are defined over the same space of numbers. This
//! module defines that space. The algorithms never name `f64`; they are written against
//! `OrderedField`, so the same code runs on any float width.
pub mod traits;

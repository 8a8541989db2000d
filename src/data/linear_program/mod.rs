//! # Representing linear programs
//!
//! Linear programs enter as text, with constraints of any direction. Once normalized they live in
//! standard form: maximize `c x` subject to `A x <= b`, `x >= 0` and `b >= 0`.
pub mod elements;
pub mod solution;
pub mod standard_form;

//! # A traced linear program solver
//!
//! Maximization problems written as text (`Z = 3x1 + 2x2`, `x1 + x2 <= 4`, ...) are brought into
//! standard form and solved with the primal Simplex method as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. Every tableau along the way is
//! recorded, such that the path to the optimum can be inspected afterwards.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod io;

#[cfg(test)]
mod tests;

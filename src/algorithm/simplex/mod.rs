//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the primal simplex algorithm on
//! a dense tableau. The algorithm is implemented as described in chapter 2 of Combinatorial
//! Optimization, a book by Christos H. Papadimitriou and Kenneth Steiglitz.
pub mod logic;
pub mod strategy;
pub mod tableau;
pub mod trace;

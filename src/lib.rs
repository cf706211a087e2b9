//! # reed-muller-rs: List decoding of Reed–Muller codes in Rust
//!
//! **`reed-muller-rs`** implements recursive list decoding of binary **Reed–Muller codes**.
//! Given a noisy Boolean function (the *received word*) and a target degree `s`,
//! it returns the low-degree functions within a computed Hamming radius of the input.
//!
//! ## What is a Reed–Muller code?
//!
//! The code `RM(s, m)` is the set of all Boolean functions on `m` variables whose
//! algebraic normal form (the unique multilinear polynomial over GF(2)) has degree at most `s`.
//! Codewords are truth tables of length `2ᵐ`. The Plotkin construction
//! `RM(s, m) = {(u, u + v) : u ∈ RM(s, m-1), v ∈ RM(s-1, m-1)}` lets the decoder split
//! every problem into three smaller ones on `m-1` variables.
//!
//! ## Basic Usage
//!
//! ```rust
//! use reed_muller_rs::decoder::decode;
//! use reed_muller_rs::function::BooleanFunction;
//!
//! // x₁ ⊕ x₂ ⊕ x₃, a codeword of RM(1, 3)
//! let received: BooleanFunction = "01101001".parse().unwrap();
//!
//! // Radius ⌊8·(1/2 − 0.1)⌋ = 3
//! let candidates = decode(&received, 1, 0.1).unwrap();
//! assert!(candidates.contains(&received));
//! for c in &candidates {
//!     assert!(c.distance(&received).unwrap() <= 3);
//!     assert!(c.degree() <= 1);
//! }
//! ```
//!
//! ## Core Components
//!
//! - **[`function`]**: [`BooleanFunction`][crate::function::BooleanFunction], a packed truth table
//!   with restriction, XOR, concatenation, distance and algebraic degree.
//! - **[`decoder`]**: the recursive list decoder and its radius formula.
//! - **[`code`]**: parameters of `RM(s, m)` (length, dimension, distance, number of codewords).

pub(crate) mod bitset;
pub mod code;
pub mod decoder;
pub mod error;
pub mod function;

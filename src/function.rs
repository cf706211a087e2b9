//! Boolean functions represented by their truth tables.
//!
//! A Boolean function f: {0,1}ᵐ → {0,1} is stored as a packed table of 2ᵐ bits.
//!
//! # Variable Ordering
//!
//! Variables are numbered 1 to m. For input index x, variable xⱼ has value
//! `(x >> (j-1)) & 1`, so x₁ is the least significant bit.
//!
//! # Example
//!
//! ```
//! use reed_muller_rs::function::BooleanFunction;
//!
//! // f = x₁ ⊕ x₂
//! let f: BooleanFunction = "0110".parse().unwrap();
//! assert_eq!(f.num_vars(), 2);
//! assert_eq!(f.degree(), 1);
//!
//! // Fixing x₂ = 1 leaves ¬x₁.
//! let g = f.restrict(2, true).unwrap();
//! assert_eq!(g.to_string(), "10");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::BitXor;
use std::str::FromStr;

use crate::bitset::BitSet;
use crate::error::{Error, Result};

/// Largest supported number of variables.
pub const MAX_VARS: u32 = 30;

/// Masks selecting the lower half of every block of size `2 << i` inside a word.
const LOWER_HALF_MASKS: [u64; 6] = [
    0x5555_5555_5555_5555,
    0x3333_3333_3333_3333,
    0x0F0F_0F0F_0F0F_0F0F,
    0x00FF_00FF_00FF_00FF,
    0x0000_FFFF_0000_FFFF,
    0x0000_0000_FFFF_FFFF,
];

/// A Boolean function on m variables, stored as its truth table.
///
/// Every instance owns its table; restriction, XOR and concatenation always
/// build fresh tables.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BooleanFunction {
    /// Number of variables.
    num_vars: u32,
    /// The truth table bits: 2ᵐ bits.
    bits: BitSet,
}

impl BooleanFunction {
    /// Create the constant zero function on `num_vars` variables.
    pub fn new(num_vars: u32) -> Result<Self> {
        if num_vars > MAX_VARS {
            return Err(Error::InvalidArity { num_vars });
        }
        Ok(Self::zero_unchecked(num_vars))
    }

    pub(crate) fn zero_unchecked(num_vars: u32) -> Self {
        Self {
            num_vars,
            bits: BitSet::new(1 << num_vars),
        }
    }

    /// Create the constant zero function.
    pub fn zero(num_vars: u32) -> Result<Self> {
        Self::new(num_vars)
    }

    /// Create the constant one function.
    pub fn one(num_vars: u32) -> Result<Self> {
        let mut f = Self::new(num_vars)?;
        f.bits.fill(true);
        Ok(f)
    }

    pub(crate) fn one_unchecked(num_vars: u32) -> Self {
        let mut f = Self::zero_unchecked(num_vars);
        f.bits.fill(true);
        f
    }

    /// Create a function from its 2ᵐ values, listed in index order.
    pub fn from_bits(num_vars: u32, values: impl IntoIterator<Item = bool>) -> Result<Self> {
        let mut f = Self::new(num_vars)?;
        let values: Vec<bool> = values.into_iter().collect();
        if values.len() != f.size() {
            return Err(Error::InvalidLength {
                expected: Some(f.size()),
                got: values.len(),
            });
        }
        for (x, value) in values.into_iter().enumerate() {
            f.bits.set(x, value);
        }
        Ok(f)
    }

    /// Create a function by evaluating `f` at every input index.
    pub fn from_fn(num_vars: u32, f: impl Fn(usize) -> bool) -> Result<Self> {
        let mut result = Self::new(num_vars)?;
        for x in 0..result.size() {
            result.bits.set(x, f(x));
        }
        Ok(result)
    }

    /// Get the number of variables.
    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Get the size of the truth table (2ᵐ).
    pub fn size(&self) -> usize {
        self.bits.len()
    }

    fn check_index(&self, x: usize) -> Result<()> {
        if x >= self.size() {
            return Err(Error::OutOfRange {
                index: x,
                size: self.size(),
            });
        }
        Ok(())
    }

    fn check_arity(&self, other: &Self) -> Result<()> {
        if self.num_vars != other.num_vars {
            return Err(Error::MismatchedArity {
                left: self.num_vars,
                right: other.num_vars,
            });
        }
        Ok(())
    }

    /// Evaluate the function at input index `x`.
    pub fn eval(&self, x: usize) -> Result<bool> {
        self.check_index(x)?;
        Ok(self.bits.get(x))
    }

    /// Set the value of the function at input index `x`.
    pub fn set(&mut self, x: usize, value: bool) -> Result<()> {
        self.check_index(x)?;
        self.bits.set(x, value);
        Ok(())
    }

    /// Count the number of satisfying assignments (Hamming weight).
    pub fn weight(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Check if this is the constant zero function.
    pub fn is_zero(&self) -> bool {
        self.weight() == 0
    }

    /// Check if this is the constant one function.
    pub fn is_one(&self) -> bool {
        self.weight() == self.size() as u64
    }

    /// Fix variable `var` (1-based) to `value`, producing a function on m-1 variables.
    ///
    /// The input index for output `x` is `x` with bit `value` inserted at
    /// position `var - 1`.
    pub fn restrict(&self, var: u32, value: bool) -> Result<Self> {
        if var < 1 || var > self.num_vars {
            return Err(Error::InvalidVariable {
                var,
                num_vars: self.num_vars,
            });
        }
        Ok(self.restrict_unchecked(var - 1, value))
    }

    pub(crate) fn restrict_unchecked(&self, shift: u32, value: bool) -> Self {
        debug_assert!(shift < self.num_vars);
        let num_vars = self.num_vars - 1;
        let size = 1usize << num_vars;
        let block = 1usize << shift;

        let bits = if block % BitSet::BITS_PER_WORD == 0 {
            // Blocks of fixed x_{shift+1} are whole words: pick every other block.
            let block_words = block / BitSet::BITS_PER_WORD;
            let offset = if value { block_words } else { 0 };
            let words = self
                .bits
                .words()
                .chunks(2 * block_words)
                .flat_map(|pair| &pair[offset..offset + block_words])
                .copied()
                .collect();
            BitSet::from_words(size, words)
        } else {
            let mut bits = BitSet::new(size);
            let fixed = (value as usize) << shift;
            for x in 0..size {
                let upper = (x >> shift) << (shift + 1);
                let lower = x & (block - 1);
                bits.set(x, self.bits.get(upper | fixed | lower));
            }
            bits
        };

        Self { num_vars, bits }
    }

    /// Hamming distance: the number of inputs where the two functions disagree.
    pub fn distance(&self, other: &Self) -> Result<u64> {
        self.check_arity(other)?;
        Ok(self.distance_unchecked(other))
    }

    pub(crate) fn distance_unchecked(&self, other: &Self) -> u64 {
        debug_assert_eq!(self.num_vars, other.num_vars);
        self.bits.count_diff(&other.bits)
    }

    /// Pointwise sum modulo 2.
    pub fn xor(&self, other: &Self) -> Result<Self> {
        self.check_arity(other)?;
        Ok(self.xor_unchecked(other))
    }

    pub(crate) fn xor_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);
        let mut bits = self.bits.clone();
        bits.xor_assign(&other.bits);
        Self {
            num_vars: self.num_vars,
            bits,
        }
    }

    /// Plotkin pairing: the function g on m+1 variables with
    /// g(x, 0) = self(x) and g(x, 1) = other(x).
    pub fn concat(&self, other: &Self) -> Result<Self> {
        self.check_arity(other)?;
        if self.num_vars >= MAX_VARS {
            return Err(Error::InvalidArity {
                num_vars: self.num_vars + 1,
            });
        }
        Ok(self.concat_unchecked(other))
    }

    pub(crate) fn concat_unchecked(&self, other: &Self) -> Self {
        debug_assert_eq!(self.num_vars, other.num_vars);
        let size = self.size();

        let bits = if size % BitSet::BITS_PER_WORD == 0 {
            let mut words = Vec::with_capacity(2 * self.bits.words().len());
            words.extend_from_slice(self.bits.words());
            words.extend_from_slice(other.bits.words());
            BitSet::from_words(2 * size, words)
        } else {
            let mut bits = BitSet::new(2 * size);
            for x in 0..size {
                bits.set(x, self.bits.get(x));
                bits.set(x | size, other.bits.get(x));
            }
            bits
        };

        Self {
            num_vars: self.num_vars + 1,
            bits,
        }
    }

    /// Algebraic normal form: the coefficients of the unique multilinear
    /// polynomial over GF(2), indexed by monomial.
    ///
    /// Computed with the in-place Möbius butterfly: for each stride 1, 2, ..., 2ᵐ⁻¹,
    /// the lower half of every block of size 2·stride is XORed into its upper half.
    pub fn anf(&self) -> Self {
        let mut words = self.bits.words().to_vec();

        for (i, &mask) in LOWER_HALF_MASKS.iter().enumerate().take(self.num_vars as usize) {
            let stride = 1u32 << i;
            for word in &mut words {
                *word ^= (*word & mask) << stride;
            }
        }

        for i in 6..self.num_vars {
            let stride = 1usize << (i - 6);
            for block in words.chunks_mut(2 * stride) {
                let (lower, upper) = block.split_at_mut(stride);
                for (u, l) in upper.iter_mut().zip(lower.iter()) {
                    *u ^= *l;
                }
            }
        }

        Self {
            num_vars: self.num_vars,
            bits: BitSet::from_words(self.size(), words),
        }
    }

    /// Algebraic degree: the largest monomial with a nonzero ANF coefficient.
    ///
    /// Constant functions (and every function on zero variables) have degree 0.
    pub fn degree(&self) -> u32 {
        if self.num_vars == 0 {
            return 0;
        }
        self.anf().bits.iter().map(|x| x.count_ones()).max().unwrap_or(0)
    }
}

impl Ord for BooleanFunction {
    /// Number of variables first, then the truth table index by index.
    fn cmp(&self, other: &Self) -> Ordering {
        self.num_vars
            .cmp(&other.num_vars)
            .then_with(|| self.bits.cmp_lex(&other.bits))
    }
}

impl PartialOrd for BooleanFunction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BitXor for &BooleanFunction {
    type Output = BooleanFunction;

    fn bitxor(self, rhs: Self) -> Self::Output {
        assert_eq!(self.num_vars, rhs.num_vars, "Variable count mismatch");
        self.xor_unchecked(rhs)
    }
}

impl fmt::Display for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size() {
            f.write_str(if self.bits.get(x) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BooleanFunction(m = {}, {})", self.num_vars, self)
    }
}

impl FromStr for BooleanFunction {
    type Err = Error;

    /// Parse a truth table written as `0`/`1` characters in index order.
    fn from_str(s: &str) -> Result<Self> {
        let values = s
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::InvalidChar { ch, position }),
            })
            .collect::<Result<Vec<bool>>>()?;

        let len = values.len();
        if !len.is_power_of_two() {
            return Err(Error::InvalidLength {
                expected: None,
                got: len,
            });
        }
        Self::from_bits(len.trailing_zeros(), values)
    }
}

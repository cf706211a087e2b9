//! Recursive list decoding of Reed–Muller codes.
//!
//! Given a received word `f` on m variables, a degree `s` and a slack `ε`,
//! the decoder returns every function it can reach of degree at most `s`
//! within distance `T = ⌊2ᵐ·(2⁻ˢ − ε)⌋` of `f`.
//!
//! The recursion follows the Plotkin decomposition `RM(s, m) = {(u, u + v)}`
//! with `u ∈ RM(s, m-1)` and `v ∈ RM(s-1, m-1)`. Splitting `f` on its last
//! variable into halves `f₀` and `f₁`:
//!
//! - `f₀ + f₁` is decoded at degree `s-1` with slack `2ε`, giving the list of `v`,
//! - `f₀` and `f₁` are decoded at degree `s` with slack `ε`, giving the lists of `u`,
//! - candidates `(u₀, u₀ + v)` and `(u₁ + v, u₁)` are kept if they are within `T` of `f`.
//!
//! # Base cases
//!
//! - `s = 0`: the two constants, each kept if within the radius.
//! - `s = m`: `RM(m, m)` is every function on m variables. The received word
//!   itself is returned (when the radius is non-negative) instead of
//!   enumerating the whole space, so lists from this level are incomplete.

use std::cell::Cell;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::function::BooleanFunction;

/// Slack used by [`ListDecoder::default`].
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Decoding radius `⌊2ᵐ·(2⁻ˢ − ε)⌋` for `RM(s, m)`.
///
/// The result is negative when `ε > 2⁻ˢ`, in which case nothing is within reach.
pub fn radius(num_vars: u32, degree: u32, epsilon: f64) -> i64 {
    let n = (1u64 << num_vars) as f64;
    let delta = 2f64.powi(-(degree as i32));
    (n * (delta - epsilon)).floor() as i64
}

/// Counters collected while decoding.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct DecodeStats {
    /// Number of recursive frames entered.
    pub calls: u64,
    /// Number of Plotkin candidates built.
    pub candidates: u64,
    /// Number of candidates that passed the radius check.
    pub accepted: u64,
}

/// List decoder for binary Reed–Muller codes.
#[derive(Debug)]
pub struct ListDecoder {
    epsilon: f64,
    stats: Cell<DecodeStats>,
}

impl ListDecoder {
    /// Create a decoder with slack `epsilon`.
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            stats: Cell::new(DecodeStats::default()),
        }
    }
}

impl Default for ListDecoder {
    fn default() -> Self {
        ListDecoder::new(DEFAULT_EPSILON)
    }
}

impl ListDecoder {
    /// Slack subtracted from the relative radius `2⁻ˢ`.
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Counters accumulated over all `decode` calls since creation or the last reset.
    pub fn stats(&self) -> DecodeStats {
        self.stats.get()
    }

    /// Clear the accumulated counters.
    pub fn reset_stats(&self) {
        self.stats.set(DecodeStats::default());
    }

    fn update_stats(&self, f: impl FnOnce(&mut DecodeStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    /// Decode `received` in `RM(degree, m)`, where `m` is the number of variables of `received`.
    ///
    /// Returns the candidates sorted and without duplicates.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDegree`] unless `degree <= m`.
    pub fn decode(&self, received: &BooleanFunction, degree: u32) -> Result<Vec<BooleanFunction>> {
        let num_vars = received.num_vars();
        if degree > num_vars {
            return Err(Error::InvalidDegree { degree, num_vars });
        }

        debug!(
            "decode(m = {}, s = {}, eps = {})",
            num_vars, degree, self.epsilon
        );
        let result = self.decode_rec(received, degree, self.epsilon);
        debug!("decode: {} candidates, stats = {:?}", result.len(), self.stats());

        Ok(result)
    }

    fn decode_rec(&self, f: &BooleanFunction, s: u32, epsilon: f64) -> Vec<BooleanFunction> {
        let m = f.num_vars();
        debug_assert!(s <= m);
        let radius = radius(m, s, epsilon);
        trace!("decode_rec(m = {}, s = {}, eps = {}, radius = {})", m, s, epsilon, radius);
        self.update_stats(|stats| stats.calls += 1);

        let within = |g: &BooleanFunction| (f.distance_unchecked(g) as i64) <= radius;

        if s == 0 {
            return [BooleanFunction::zero_unchecked(m), BooleanFunction::one_unchecked(m)]
                .into_iter()
                .filter(within)
                .collect();
        }

        if s == m {
            return if radius >= 0 { vec![f.clone()] } else { Vec::new() };
        }

        let f0 = f.restrict_unchecked(m - 1, false);
        let f1 = f.restrict_unchecked(m - 1, true);
        let f_sum = &f0 ^ &f1;

        let list_sum = self.decode_rec(&f_sum, s - 1, 2.0 * epsilon);
        let list0 = self.decode_rec(&f0, s, epsilon);
        let list1 = self.decode_rec(&f1, s, epsilon);

        let mut result = Vec::new();
        let mut examined = 0;

        // (u₀, u₀ + v)
        for u0 in &list0 {
            for v in &list_sum {
                let candidate = u0.concat_unchecked(&(u0 ^ v));
                examined += 1;
                if within(&candidate) {
                    result.push(candidate);
                }
            }
        }

        // (u₁ + v, u₁)
        for u1 in &list1 {
            for v in &list_sum {
                let candidate = (u1 ^ v).concat_unchecked(u1);
                examined += 1;
                if within(&candidate) {
                    result.push(candidate);
                }
            }
        }

        let accepted = result.len() as u64;
        self.update_stats(|stats| {
            stats.candidates += examined;
            stats.accepted += accepted;
        });

        result.sort_unstable();
        result.dedup();
        result
    }
}

/// Decode `received` in `RM(degree, m)` with slack `epsilon`.
///
/// Shorthand for `ListDecoder::new(epsilon).decode(received, degree)`.
pub fn decode(received: &BooleanFunction, degree: u32, epsilon: f64) -> Result<Vec<BooleanFunction>> {
    ListDecoder::new(epsilon).decode(received, degree)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_radius() {
        assert_eq!(radius(3, 1, 0.1), 3);
        assert_eq!(radius(3, 0, 0.1), 7);
        assert_eq!(radius(4, 2, 0.05), 3);
        assert_eq!(radius(2, 0, 0.2), 3);
        assert_eq!(radius(1, 1, 0.1), 0);
        assert_eq!(radius(3, 0, 0.0), 8);
    }

    #[test]
    fn test_radius_negative() {
        assert_eq!(radius(3, 2, 0.5), -2);
        assert_eq!(radius(1, 1, 0.75), -1);
    }

    #[test]
    fn test_invalid_degree() {
        let f = BooleanFunction::new(3).unwrap();
        let err = decode(&f, 4, 0.1).unwrap_err();
        assert_eq!(err, Error::InvalidDegree { degree: 4, num_vars: 3 });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_degree_zero() {
        let f = BooleanFunction::new(3).unwrap();
        let list = decode(&f, 0, 0.1).unwrap();
        assert_eq!(list, vec![BooleanFunction::zero(3).unwrap()]);

        // With no slack the radius is 8 and both constants qualify.
        let list = decode(&f, 0, 0.0).unwrap();
        assert_eq!(
            list,
            vec![BooleanFunction::zero(3).unwrap(), BooleanFunction::one(3).unwrap()]
        );
    }

    #[test]
    fn test_degree_zero_majority() {
        // weight 2 out of 4: radius ⌊4·0.75⌋ = 3 keeps both constants.
        let f: BooleanFunction = "0110".parse().unwrap();
        let list = decode(&f, 0, 0.25).unwrap();
        assert_eq!(list.len(), 2);

        // radius ⌊4·0.4⌋ = 1 keeps neither.
        let list = decode(&f, 0, 0.6).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_full_degree_returns_received() {
        let f: BooleanFunction = "10110010".parse().unwrap();
        let list = decode(&f, 3, 0.1).unwrap();
        assert_eq!(list, vec![f.clone()]);

        // Negative radius.
        let list = decode(&f, 3, 0.5).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_zero_variables() {
        let f = BooleanFunction::one(0).unwrap();
        let list = decode(&f, 0, 0.1).unwrap();
        assert_eq!(list, vec![f]);
    }

    #[test]
    fn test_noisy_parity() {
        let received: BooleanFunction = "01101001".parse().unwrap();
        let list = decode(&received, 1, 0.1).unwrap();
        assert!(!list.is_empty());
        assert!(list.contains(&received));
        for candidate in &list {
            assert!(received.distance(candidate).unwrap() <= 3);
            assert!(candidate.degree() <= 1);
        }
    }

    #[test]
    fn test_result_sorted_unique() {
        let received: BooleanFunction = "0110100101101011".parse().unwrap();
        let list = decode(&received, 2, 0.0).unwrap();
        assert!(list.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stats() {
        let decoder = ListDecoder::default();
        assert_eq!(decoder.epsilon(), DEFAULT_EPSILON);

        let received: BooleanFunction = "01101001".parse().unwrap();
        decoder.decode(&received, 1).unwrap();
        let stats = decoder.stats();
        // (3,1) -> (2,0), (2,1), (2,1); each (2,1) -> (1,0), (1,1), (1,1).
        assert_eq!(stats.calls, 1 + 1 + 2 * 4);
        assert!(stats.accepted <= stats.candidates);

        decoder.reset_stats();
        assert_eq!(decoder.stats(), DecodeStats::default());
    }
}

//! Parameters of the binary Reed–Muller code `RM(s, m)`.

use num_bigint::BigUint;

use crate::decoder::{radius, ListDecoder};
use crate::error::{Error, Result};
use crate::function::{BooleanFunction, MAX_VARS};

/// The Reed–Muller code of order `s` in `m` variables: all Boolean functions
/// on `m` variables of algebraic degree at most `s`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ReedMuller {
    order: u32,
    num_vars: u32,
}

impl ReedMuller {
    pub fn new(order: u32, num_vars: u32) -> Result<Self> {
        if num_vars > MAX_VARS {
            return Err(Error::InvalidArity { num_vars });
        }
        if order > num_vars {
            return Err(Error::InvalidDegree {
                degree: order,
                num_vars,
            });
        }
        Ok(Self { order, num_vars })
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn num_vars(&self) -> u32 {
        self.num_vars
    }

    /// Block length `2ᵐ`.
    pub fn length(&self) -> u64 {
        1 << self.num_vars
    }

    /// Dimension `Σ_{i ≤ s} C(m, i)`.
    pub fn dimension(&self) -> u64 {
        let m = self.num_vars as u64;
        let mut binom = 1u64;
        let mut sum = 1u64;
        for i in 1..=self.order as u64 {
            binom = binom * (m - i + 1) / i;
            sum += binom;
        }
        sum
    }

    /// Minimum distance `2ᵐ⁻ˢ`.
    pub fn min_distance(&self) -> u64 {
        1 << (self.num_vars - self.order)
    }

    /// Number of codewords `2^dimension`.
    pub fn size(&self) -> BigUint {
        BigUint::from(1u32) << self.dimension()
    }

    /// Check whether `f` is a codeword.
    pub fn contains(&self, f: &BooleanFunction) -> Result<bool> {
        if f.num_vars() != self.num_vars {
            return Err(Error::MismatchedArity {
                left: self.num_vars,
                right: f.num_vars(),
            });
        }
        Ok(f.degree() <= self.order)
    }

    /// Decoding radius for slack `epsilon`.
    pub fn radius(&self, epsilon: f64) -> i64 {
        radius(self.num_vars, self.order, epsilon)
    }

    /// List-decode `received` in this code.
    pub fn list_decode(&self, received: &BooleanFunction, epsilon: f64) -> Result<Vec<BooleanFunction>> {
        if received.num_vars() != self.num_vars {
            return Err(Error::MismatchedArity {
                left: self.num_vars,
                right: received.num_vars(),
            });
        }
        ListDecoder::new(epsilon).decode(received, self.order)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_parameters() {
        // RM(1, 3) is the [8, 4, 4] extended Hamming code.
        let code = ReedMuller::new(1, 3).unwrap();
        assert_eq!(code.length(), 8);
        assert_eq!(code.dimension(), 4);
        assert_eq!(code.min_distance(), 4);
        assert_eq!(code.size(), BigUint::from(16u32));

        // RM(2, 5) is [32, 16, 8].
        let code = ReedMuller::new(2, 5).unwrap();
        assert_eq!(code.dimension(), 1 + 5 + 10);
        assert_eq!(code.min_distance(), 8);

        // RM(m, m) contains every function.
        let code = ReedMuller::new(4, 4).unwrap();
        assert_eq!(code.dimension(), 16);
        assert_eq!(code.min_distance(), 1);
    }

    #[test]
    fn test_size_is_big() {
        let code = ReedMuller::new(3, 10).unwrap();
        assert_eq!(code.dimension(), 1 + 10 + 45 + 120);
        assert_eq!(code.size(), BigUint::from(1u32) << 176u32);
    }

    #[test]
    fn test_invalid() {
        assert_eq!(
            ReedMuller::new(4, 3).unwrap_err(),
            Error::InvalidDegree { degree: 4, num_vars: 3 }
        );
        assert_eq!(
            ReedMuller::new(0, 31).unwrap_err(),
            Error::InvalidArity { num_vars: 31 }
        );
    }

    #[test]
    fn test_contains() {
        let code = ReedMuller::new(1, 3).unwrap();
        let parity: BooleanFunction = "01101001".parse().unwrap();
        let and: BooleanFunction = "00000001".parse().unwrap();
        assert!(code.contains(&parity).unwrap());
        assert!(!code.contains(&and).unwrap());
        assert_eq!(
            code.contains(&BooleanFunction::new(2).unwrap()).unwrap_err(),
            Error::MismatchedArity { left: 3, right: 2 }
        );
    }

    #[test]
    fn test_list_decode() {
        let code = ReedMuller::new(1, 3).unwrap();
        assert_eq!(code.radius(0.1), 3);

        let mut received: BooleanFunction = "01101001".parse().unwrap();
        let list = code.list_decode(&received, 0.1).unwrap();
        assert!(list.contains(&received));

        received.set(0, true).unwrap();
        for candidate in code.list_decode(&received, 0.1).unwrap() {
            assert!(code.contains(&candidate).unwrap());
            assert!(candidate.distance(&received).unwrap() <= 3);
        }
    }
}

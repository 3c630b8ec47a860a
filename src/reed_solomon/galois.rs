//! Prime field GF(p) arithmetic for Reed-Solomon operations
//!
//! Elements are plain `u32` values in `[0, p)`. Products are formed in `u64`, so
//! any prime below 2^32 is supported. The modulus is carried by a [`PrimeField`]
//! value rather than baked into the element type, which lets several code
//! instances over different fields coexist.

/// Arithmetic over GF(p) for a fixed prime modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    prime: u32,
}

impl PrimeField {
    /// Create a field for `prime`.
    ///
    /// Primality is not checked here; [`CodeConfig`](crate::config::CodeConfig)
    /// validates the modulus before any codec is built from it.
    ///
    /// # Panics
    ///
    /// Panics if `prime < 2`: such a modulus has no multiplicative group and
    /// `reduce` would divide by zero.
    pub const fn new(prime: u32) -> Self {
        assert!(prime >= 2, "Field modulus must be at least 2");
        Self { prime }
    }

    #[inline]
    pub const fn prime(&self) -> u32 {
        self.prime
    }

    /// Order of the multiplicative group, p - 1
    #[inline]
    pub const fn group_order(&self) -> u32 {
        self.prime - 1
    }

    /// Signed modular reduction: always lands in `[0, p)`, even for negative input
    #[inline]
    pub fn reduce(&self, value: i64) -> u32 {
        value.rem_euclid(self.prime as i64) as u32
    }

    #[inline]
    pub fn contains(&self, value: u32) -> bool {
        value < self.prime
    }

    /// Add two elements in GF(p)
    #[inline]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        ((a as u64 + b as u64) % self.prime as u64) as u32
    }

    /// Subtract two elements in GF(p)
    #[inline]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        let p = self.prime as u64;
        ((a as u64 % p + p - b as u64 % p) % p) as u32
    }

    /// Additive inverse
    #[inline]
    pub fn neg(&self, a: u32) -> u32 {
        self.sub(0, a)
    }

    /// Multiply two elements in GF(p)
    #[inline]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        ((a as u64 * b as u64) % self.prime as u64) as u32
    }

    /// Raise an element to a signed power.
    ///
    /// Negative exponents use Fermat's little theorem: for `a != 0`,
    /// `a^e = a^(e mod (p-1))`, so `pow(a, -1)` is the inverse of `a`.
    /// `pow(a, 0) == 1` for every `a`, including zero. Zero raised to any
    /// other exponent is zero.
    pub fn pow(&self, base: u32, exponent: i64) -> u32 {
        let p = self.prime as u64;
        let mut base = base as u64 % p;
        if exponent == 0 {
            return 1 % self.prime;
        }
        if base == 0 {
            return 0;
        }

        let mut exp = exponent.rem_euclid(self.group_order() as i64) as u64;
        let mut result = 1u64;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result * base % p;
            }
            base = base * base % p;
            exp >>= 1;
        }
        result as u32
    }

    /// Multiplicative inverse, `a^(p-2)`.
    ///
    /// Panics when `a` is zero; use [`checked_inverse`](Self::checked_inverse)
    /// when the operand is not known to be nonzero.
    #[inline]
    pub fn inverse(&self, a: u32) -> u32 {
        match self.checked_inverse(a) {
            Some(inv) => inv,
            None => panic!("Cannot invert zero in GF({})", self.prime),
        }
    }

    #[inline]
    pub fn checked_inverse(&self, a: u32) -> Option<u32> {
        if a % self.prime == 0 {
            None
        } else {
            Some(self.pow(a, self.prime as i64 - 2))
        }
    }

    /// Divide two elements in GF(p). Panics on division by zero.
    #[inline]
    pub fn div(&self, a: u32, b: u32) -> u32 {
        self.mul(a, self.inverse(b))
    }

    #[inline]
    pub fn checked_div(&self, a: u32, b: u32) -> Option<u32> {
        self.checked_inverse(b).map(|inv| self.mul(a, inv))
    }

    /// Whether `alpha` generates the whole multiplicative group.
    ///
    /// `alpha` is primitive iff `alpha^((p-1)/q) != 1` for every prime factor
    /// `q` of `p - 1`.
    pub fn is_primitive(&self, alpha: u32) -> bool {
        if alpha % self.prime == 0 {
            return false;
        }
        let order = self.group_order();
        prime_factors(order)
            .into_iter()
            .all(|q| self.pow(alpha, (order / q) as i64) != 1)
    }
}

/// Trial-division primality test
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let n = n as u64;
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Distinct prime factors of `n`, ascending
pub fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut d = 2u32;
    while (d as u64) * (d as u64) <= n as u64 {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

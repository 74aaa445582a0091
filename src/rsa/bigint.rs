// RSA Big Integer Operations
// Modular exponentiation and the extended Euclidean inverse over num-bigint

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Modular exponentiation: base^exp mod modulus
///
/// Square-and-multiply over the exponent's bits, most significant first.
/// The running value starts at `base` (covering the leading one bit) and is
/// reduced after every multiplication, so it never exceeds `modulus^2`.
/// A modulus of 0 or 1 has only the zero residue.
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus <= &RsaBigInt::one() {
        return RsaBigInt::zero();
    }

    let base = base % modulus;
    if exp.is_zero() {
        return RsaBigInt::one();
    }

    let mut result = base.clone();
    for bit in (0..exp.bits() - 1).rev() {
        result = (&result * &result) % modulus;
        if exp.bit(bit) {
            result = (&result * &base) % modulus;
        }
    }

    result
}

/// Extended Euclidean Algorithm
/// Returns (gcd, coeff_a, coeff_b) such that coeff_a*a + coeff_b*b = gcd(a, b)
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (RsaBigInt, BigInt, BigInt) {
    let (gcd, coeff_a, coeff_b) = extended_gcd_signed(&BigInt::from(a.clone()), &BigInt::from(b.clone()));
    // Both inputs are non-negative, so the gcd is too.
    (gcd.magnitude().clone(), coeff_a, coeff_b)
}

fn extended_gcd_signed(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (gcd, coeff_a1, coeff_b1) = extended_gcd_signed(&b.mod_floor(a), a);
    let coeff_a = &coeff_b1 - b.div_floor(a) * &coeff_a1;

    (gcd, coeff_a, coeff_a1)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    if m <= &RsaBigInt::one() {
        return None;
    }

    let (gcd, coeff_a, _) = extended_gcd(a, m);
    if !gcd.is_one() {
        return None;
    }

    // A non-positive coefficient is shifted into [1, m) by adding multiples of m.
    coeff_a.mod_floor(&BigInt::from(m.clone())).to_biguint()
}

//! Operator sugar over the arithmetic core.
//!
//! Only the infallible operations get operators. Division, remainder and
//! exponentiation can fail, so they stay as methods returning
//! [`BigIntResult`](crate::BigIntResult).

use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use crate::BigInt;

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $core:ident) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$core(self, rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$core(self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$core(&self, rhs)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$core(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, subtract);
impl_binary_op!(Mul, mul, multiply);

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc.add(&x))
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::zero(), |acc, x| acc.add(x))
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc.multiply(&x))
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(BigInt::one(), |acc, x| acc.multiply(x))
    }
}

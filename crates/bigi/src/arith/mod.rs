//! Arithmetic core.
//!
//! Each operation takes its operands by reference and returns a freshly
//! built [`BigInt`](crate::BigInt); inputs are never modified. Operations
//! compose: division probes with multiplication and subtraction, and both
//! exponentiation routines are built from multiplication and division.
//!
//! The digit-level work lives in [`magnitude`]; the files here handle signs,
//! short-circuits, and composition.

mod additive;
mod compare;
mod divide;
pub(crate) mod magnitude;
mod multiply;
mod power;

pub use power::MAX_EXPONENT;

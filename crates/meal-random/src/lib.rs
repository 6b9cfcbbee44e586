//! # meal-random
//!
//! Random number source for MealMax battles.
//!
//! A battle needs exactly one uniformly distributed fraction in `[0, 1)`.
//! [`RandomSource`] is the one-method seam the battle engine depends on;
//! [`RandomOrgClient`] fetches the value from random.org over HTTP and
//! [`FixedRandom`] / [`SequenceRandom`] are deterministic stand-ins.

mod error;
mod fixed;
mod http;
mod random_org;

pub use error::RandomError;
pub use fixed::{FixedRandom, SequenceRandom};
pub use http::parse_fraction;
pub use random_org::RandomOrgClient;

use std::future::Future;

/// Source of a single random fraction per call.
pub trait RandomSource {
    /// Draw one value in `[0, 1)`.
    fn draw(&self) -> impl Future<Output = Result<f64, RandomError>> + Send;
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn draw(&self) -> impl Future<Output = Result<f64, RandomError>> + Send {
        (**self).draw()
    }
}

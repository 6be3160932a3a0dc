//! Random number generation over the kernel CSPRNG.

mod entropy;

pub use entropy::{Entropy, EntropyError};

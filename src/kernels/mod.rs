//! Kernels operating on pairs of samples.

pub mod distance;

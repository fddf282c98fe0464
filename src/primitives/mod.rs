//! Core numeric containers.

mod matrix;

pub use matrix::Matrix;

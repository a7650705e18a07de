//! Distance matrices.
//!
//! Provides the dense pairwise distance matrix an [`Instance`] carries.
//!
//! [`Instance`]: crate::models::Instance

mod matrix;

pub use matrix::DistanceMatrix;

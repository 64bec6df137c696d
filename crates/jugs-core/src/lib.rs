//! **jugs-core** — two-bucket water jug states and their transitions.
//!
//! This crate provides the value layer used by the *jugs* search engine:
//! a validated [`Bucket`], the bucket pair [`State`] whose identity is its
//! pair of quantities, and the six [`Op`] transitions between states.

pub mod bucket;
pub mod state;

pub use bucket::{Bucket, BucketError};
pub use state::{Op, State};

//! Storage module for word counts
//!
//! This module holds the frequency cache every fetched page reports its
//! accepted words to. The cache lives for a single run and is only
//! serialized at the end.

mod frequency;
mod traits;

pub use frequency::FrequencyCache;
pub use traits::WordStore;

//! State module for tracking crawl progress
//!
//! Every URL the scheduler admits gets exactly one entry in the visit record,
//! and that entry moves through the states defined here.

mod page_state;

pub use page_state::PageState;

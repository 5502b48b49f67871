//! State module for tracking scan progress
//!
//! - `PaginationState`: where one profile's comment pagination stands
//!   (start, fetching, exhausted, private or error)

mod pagination_state;

pub use pagination_state::PaginationState;

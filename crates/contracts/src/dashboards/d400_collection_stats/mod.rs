pub mod dto;

pub use dto::{ClearResponse, StatsResponse};

pub mod chart;
pub mod response;

pub use chart::*;
pub use response::*;

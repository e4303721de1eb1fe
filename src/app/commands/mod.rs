pub mod check;
pub mod plan;
pub mod prepare;
pub mod start;

pub use prepare::LaunchSettings;

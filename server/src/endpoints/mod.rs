//! Route handlers, one module per resource.

pub mod analyze;
pub mod drugs;
pub mod health_stats;
pub mod imaging;
pub mod patients;

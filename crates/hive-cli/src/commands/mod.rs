pub mod apply;
pub mod dispatch;
pub mod engineer;
pub mod engineers;
pub mod inquire;
pub mod metrics;
pub mod page;
pub mod projects;
pub mod services;
mod shared;

mod applications;
mod feedback;
mod health;
mod logs;
mod metrics;
mod roles;

pub use applications::submit_application;
pub use feedback::{report_bug, report_suggestion};
pub use health::health_handler;
pub use logs::relay_log;
pub use metrics::metrics_handler;
pub use roles::list_roles;

//! Page components for linkpage.

mod home;
mod service_detail;

pub use home::Home;
pub use service_detail::ServiceDetail;

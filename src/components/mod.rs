pub mod app;
pub mod launch_globe;
pub mod launch_details;
pub mod toaster;

pub use app::App;
pub use launch_globe::LaunchGlobe;
pub use launch_details::LaunchDetails;
pub use toaster::{ToastProvider, ToasterHandle};

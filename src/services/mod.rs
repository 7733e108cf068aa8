pub mod launch_service;

pub use launch_service::LaunchService;

//! 应用运行时：视口、配置、外部链接、音效和首页宿主

pub mod app;
pub mod audio;
pub mod config;
pub mod links;
pub mod viewport;

pub use app::FolioApp;
pub use config::FolioConfig;
pub use viewport::{Viewport, ViewportHub, ViewportSubscription};

//! 窗口模块 - 平台事件翻译和缓冲区呈现

pub mod events;
pub mod render;

pub use render::present_to_buffer;

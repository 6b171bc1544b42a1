//! Mini Folio - 个人作品集单页应用
//! 首页图标簇 + 四个可拖动、可回弹的弹窗面板，软件光栅化渲染

mod canvas;
mod color;
mod geometry;
mod paint;
mod path;
pub mod text;

pub use canvas::{Canvas, ImageFit};
pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use paint::{Paint, PaintStyle};
pub use path::Path;
pub use text::TextRenderer;

// 错误类型
pub mod error;
pub use error::{FolioError, Result};

// 事件系统
pub mod event;

// 页面文案和面板内容
pub mod content;

// taffy 内容布局
pub mod layout;

// 交互与动画状态
pub mod ui;

// 应用运行时
pub mod runtime;

// 渲染器
pub mod renderer;

// 单元测试
#[cfg(test)]
mod tests;

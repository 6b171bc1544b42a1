//! winit 事件 → 作品集事件

pub mod keyboard;
pub mod mouse;

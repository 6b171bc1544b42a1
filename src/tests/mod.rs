//! 单元测试模块
//! 覆盖拖动、弹簧、滚动、追踪器、布局、面板、首页、宿主和渲染

pub mod drag_tests;
pub mod event_tests;
pub mod home_tests;
pub mod layout_tests;
pub mod panel_tests;
pub mod renderer_tests;
pub mod scroll_tests;
pub mod spring_tests;
pub mod tracker_tests;

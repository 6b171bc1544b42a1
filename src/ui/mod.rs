//! 交互与动画状态：拖动、弹簧、滚动、追踪器，以及首页和面板

pub mod decoration;
pub mod drag;
pub mod home;
pub mod panel;
pub mod scroll_controller;
pub mod scrollbar;
pub mod spring;
pub mod tracker;
pub mod tween;

pub use decoration::DraggableDecoration;
pub use drag::{DragPhase, DragState};
pub use home::{HomeIcon, HomeLayout, HomeScreen, Typography};
pub use panel::{DraggablePanel, PanelAction, PanelConfig, PanelGeometry, PanelMotion};
pub use scroll_controller::ScrollController;
pub use scrollbar::ScrollIndicator;
pub use spring::{Spring, SpringConfig, SpringPoint};
pub use tracker::SectionTracker;
pub use tween::{Easing, PingPong, Tween};

//! 布局模块 - 基于 taffy 的面板内容排布

pub mod panel_layout;

pub use panel_layout::{
    layout_panel, BoardStickers, ItemKind, LayoutItem, PanelLayout, DIVIDER_SIZE, HEADING_SIZE, LINK_SIZE,
    SECTION_TITLE_SIZE, TAG_PADDING, TAG_SIZE,
};

//! 可拖动装饰（贴纸、星星）：只有拖动，没有回弹、视口重置和滚动联动

use super::drag::DragState;
use crate::{Point, Rect, Size};

#[derive(Debug, Clone)]
pub struct DraggableDecoration {
    /// 资源标识，例如 "images/stickers/phone.png"
    pub asset: String,
    pub size: Size,
    drag: DragState,
}

impl DraggableDecoration {
    /// initial 为相对所在容器坐标原点的初始位置（元素中心）
    pub fn new(asset: impl Into<String>, size: Size, initial: Point) -> Self {
        Self {
            asset: asset.into(),
            size,
            drag: DragState::new(initial),
        }
    }

    /// 元素中心（容器坐标）
    pub fn position(&self) -> Point {
        self.drag.position()
    }

    /// 容器坐标下的包围盒
    pub fn frame(&self) -> Rect {
        Rect::centered_at(self.position(), self.size)
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.frame().contains(&point)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.drag.begin(pointer);
    }

    pub fn drag_to(&mut self, pointer: Point) {
        self.drag.update(pointer);
    }

    /// 松手后停在合并后的位置
    pub fn end_drag(&mut self) -> Point {
        self.drag.end()
    }
}

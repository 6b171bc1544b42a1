//! 拖动状态 - 已提交偏移 + 实时增量，松手时合并（flatten）

use crate::Point;

/// 拖动阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// 渲染位置 = offset + delta
#[derive(Debug, Clone, Default)]
pub struct DragState {
    offset: Point,
    delta: Point,
    /// 按下时的指针位置
    origin: Point,
    phase: DragPhase,
}

impl DragState {
    pub fn new(position: Point) -> Self {
        Self {
            offset: position,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// 当前渲染位置
    pub fn position(&self) -> Point {
        self.offset + self.delta
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn delta(&self) -> Point {
        self.delta
    }

    /// 开始拖动：以当前渲染位置为新的基准，增量清零
    pub fn begin(&mut self, pointer: Point) {
        self.offset = self.position();
        self.delta = Point::ZERO;
        self.origin = pointer;
        self.phase = DragPhase::Dragging;
    }

    /// 增量 = 指针相对按下点的累计位移（不是逐帧累加）
    pub fn update(&mut self, pointer: Point) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.delta = pointer - self.origin;
    }

    /// 结束拖动并合并，返回合并后的位置
    pub fn end(&mut self) -> Point {
        self.offset = self.position();
        self.delta = Point::ZERO;
        self.phase = DragPhase::Idle;
        self.offset
    }

    /// 直接改写已提交位置（动画、视口重置），不影响正在进行的增量
    pub fn set_offset(&mut self, position: Point) {
        self.offset = position;
    }
}

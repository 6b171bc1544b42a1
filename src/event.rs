//! 事件系统 - 宿主把平台输入翻译成这里的事件，再交给 FolioApp 分发

use crate::Point;

/// 事件类型
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// 触摸/鼠标
    Pointer(PointerEvent),
    /// 滚轮或触控板滚动，delta 为内容滚动方向的像素量
    Wheel(WheelEvent),
    /// 视口尺寸变化（逻辑像素）
    Resize { width: f32, height: f32 },
    /// 键盘
    Key(KeyEvent),
}

/// 指针阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// 指针事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub position: Point,
    /// 毫秒
    pub timestamp: u64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32, timestamp: u64) -> Self {
        Self { phase, position: Point::new(x, y), timestamp }
    }

    pub fn down(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerPhase::Down, x, y, timestamp)
    }

    pub fn moved(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerPhase::Move, x, y, timestamp)
    }

    pub fn up(x: f32, y: f32, timestamp: u64) -> Self {
        Self::new(PointerPhase::Up, x, y, timestamp)
    }
}

/// 滚轮事件
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub position: Point,
    pub delta_y: f32,
    /// 触控板（像素精度）为 true，鼠标滚轮为 false
    pub precise: bool,
}

/// 按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    Other,
}

/// 键盘事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false, meta: false }
    }

    /// Cmd/Ctrl + W 或 Q
    pub fn is_quit_shortcut(&self) -> bool {
        (self.ctrl || self.meta)
            && matches!(self.key, Key::Char('w') | Key::Char('W') | Key::Char('q') | Key::Char('Q'))
    }
}

/// 点击识别：按下后移动不超过 slop、在 max_duration 内抬起才算一次 tap
#[derive(Debug, Clone)]
pub struct TapRecognizer {
    slop: f32,
    max_duration: u64,
    press: Option<(Point, u64)>,
}

impl TapRecognizer {
    pub fn new(slop: f32, max_duration: u64) -> Self {
        Self { slop, max_duration, press: None }
    }

    pub fn press(&mut self, position: Point, timestamp: u64) {
        self.press = Some((position, timestamp));
    }

    /// 抬起时判断是否构成点击，并清除按下状态
    pub fn release(&mut self, position: Point, timestamp: u64) -> bool {
        let Some((start, start_time)) = self.press.take() else {
            return false;
        };
        let dx = (position.x - start.x).abs();
        let dy = (position.y - start.y).abs();
        let duration = timestamp.saturating_sub(start_time);
        dx < self.slop && dy < self.slop && duration < self.max_duration
    }

    pub fn cancel(&mut self) {
        self.press = None;
    }

    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

impl Default for TapRecognizer {
    fn default() -> Self {
        Self::new(10.0, 300)
    }
}

//! 可拖动面板
//!
//! 四个弹窗共用这一套实现，差异只在 [`PanelConfig`]：
//! - 尺寸是视口的固定比例，静止位置让面板居中
//! - 拖动：开始时以当前位置为基准，移动时位置 = 基准 + 累计位移，松手合并
//! - spring_back 的面板松手后弹回静止位置
//! - 视口变化时立即回到新的静止位置（不做动画）
//! - 内容区可滚动，tracked_sections 的面板带侧边追踪器

use super::decoration::DraggableDecoration;
use super::drag::DragState;
use super::scroll_controller::ScrollController;
use super::scrollbar::ScrollIndicator;
use super::spring::{Spring, SpringConfig, SpringPoint};
use super::tracker::SectionTracker;
use crate::content::{panel_content, PanelContent, PanelKind, STICKER_SIZE};
use crate::error::Result;
use crate::event::TapRecognizer;
use crate::layout::{layout_panel, PanelLayout};
use crate::runtime::config::FolioConfig;
use crate::runtime::viewport::{Viewport, ViewportHub, ViewportSubscription};
use crate::text::TextMeasure;
use crate::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// 标题文字行高
const TITLE_LINE_HEIGHT: f32 = 24.0;
/// 关闭按钮热区宽度
const CLOSE_WIDTH: f32 = 36.0;
/// 追踪器列宽（20 + 左右各 15 内边距）
pub const TRACKER_WIDTH: f32 = 50.0;
/// 追踪器每项高度和间距
pub const TRACKER_ENTRY: f32 = 19.0;
pub const TRACKER_GAP: f32 = 20.0;
/// 滚动条轨道宽度（6 + 右边距 2）
pub const SCROLLBAR_WIDTH: f32 = 8.0;

/// 面板变体参数
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    pub width_fraction: f32,
    pub height_fraction: f32,
    #[serde(default)]
    pub spring_back: bool,
    #[serde(default)]
    pub tracked_sections: bool,
    #[serde(default)]
    pub show_scrollbar: bool,
}

impl PanelConfig {
    pub fn new(width_fraction: f32, height_fraction: f32) -> Self {
        Self {
            width_fraction,
            height_fraction,
            spring_back: false,
            tracked_sections: false,
            show_scrollbar: false,
        }
    }

    pub fn with_spring_back(mut self, enabled: bool) -> Self {
        self.spring_back = enabled;
        self
    }

    pub fn with_tracked_sections(mut self, enabled: bool) -> Self {
        self.tracked_sections = enabled;
        self
    }

    pub fn with_scrollbar(mut self, enabled: bool) -> Self {
        self.show_scrollbar = enabled;
        self
    }

    pub fn about() -> Self {
        Self::new(0.7, 0.6).with_spring_back(true).with_scrollbar(true)
    }

    pub fn interests() -> Self {
        Self::new(0.8, 0.7)
    }

    pub fn contact() -> Self {
        Self::new(0.7, 0.6).with_spring_back(true).with_scrollbar(true)
    }

    pub fn related_work() -> Self {
        Self::new(0.9, 0.85).with_spring_back(true).with_tracked_sections(true)
    }
}

/// 由视口推导的几何，每次视口变化时重新计算
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub size: Size,
    /// 居中时的左上角
    pub resting: Point,
}

impl PanelGeometry {
    pub fn compute(viewport: Viewport, config: &PanelConfig) -> Self {
        let width = viewport.width * config.width_fraction;
        let height = viewport.height * config.height_fraction;
        Self {
            size: Size::new(width, height),
            resting: Point::new((viewport.width - width) / 2.0, (viewport.height - height) / 2.0),
        }
    }
}

/// 动画和手势参数
#[derive(Debug, Clone, Copy)]
pub struct PanelMotion {
    pub entrance: SpringConfig,
    pub entrance_from_scale: f32,
    pub spring_back: SpringConfig,
    pub lookahead: f32,
    pub tap_slop: f32,
    pub tap_max_ms: u64,
}

impl Default for PanelMotion {
    fn default() -> Self {
        Self {
            entrance: SpringConfig::from_origami(50.0, 6.0),
            entrance_from_scale: 0.8,
            spring_back: SpringConfig::from_origami(40.0, 5.0),
            lookahead: 100.0,
            tap_slop: 10.0,
            tap_max_ms: 300,
        }
    }
}

impl From<&FolioConfig> for PanelMotion {
    fn from(config: &FolioConfig) -> Self {
        Self {
            entrance: config.animation.entrance.to_spring(),
            entrance_from_scale: config.animation.entrance_from_scale,
            spring_back: config.animation.spring_back.to_spring(),
            lookahead: config.tracker.lookahead,
            tap_slop: config.tap.slop,
            tap_max_ms: config.tap.max_duration_ms,
        }
    }
}

/// 面板交给宿主处理的动作
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    None,
    /// 点了关闭按钮，由宿主卸载面板
    Close,
    OpenLink(&'static str),
    /// 点了追踪器第 section 项，开始滚动到 offset
    ScrollTo { section: usize, offset: f32 },
}

/// 按下时命中的部位
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerTarget {
    /// 拖动整个面板
    Panel,
    Close,
    Tracker(usize),
    /// 内容区：拖动滚动，轻点链接打开
    Content { link: Option<&'static str> },
    Sticker { board: usize, index: usize },
}

pub struct DraggablePanel {
    kind: PanelKind,
    config: PanelConfig,
    motion: PanelMotion,
    geometry: PanelGeometry,
    drag: DragState,
    spring_back: Option<SpringPoint>,
    entrance: Spring,
    scroll: ScrollController,
    tracker: Option<SectionTracker>,
    /// 每个贴纸板上的贴纸，坐标相对贴纸板中心
    stickers: Vec<Vec<DraggableDecoration>>,
    content: PanelContent,
    layout: PanelLayout,
    measure: Rc<dyn TextMeasure>,
    subscription: ViewportSubscription,
    active: Option<PointerTarget>,
    tap: TapRecognizer,
}

impl DraggablePanel {
    /// 挂载：订阅视口、计算居中几何、布局内容并开始入场动画
    pub fn mount(
        kind: PanelKind,
        config: PanelConfig,
        motion: PanelMotion,
        hub: &ViewportHub,
        measure: Rc<dyn TextMeasure>,
    ) -> Result<Self> {
        let subscription = hub.subscribe();
        let geometry = PanelGeometry::compute(subscription.initial(), &config);
        let content = panel_content(kind);

        let tracker = config
            .tracked_sections
            .then(|| SectionTracker::new(content.tracked_count(), motion.lookahead));

        let mut panel = Self {
            kind,
            config,
            motion,
            geometry,
            drag: DragState::new(geometry.resting),
            spring_back: None,
            entrance: Spring::new(motion.entrance_from_scale, 1.0, motion.entrance),
            scroll: ScrollController::new(0.0, 1.0),
            tracker,
            stickers: Vec::new(),
            content,
            layout: PanelLayout::default(),
            measure,
            subscription,
            active: None,
            tap: TapRecognizer::new(motion.tap_slop, motion.tap_max_ms),
        };
        panel.relayout()?;
        panel.seed_stickers();

        log::info!(
            "🪟 Mounted {:?} panel {:.0}x{:.0} at ({:.1}, {:.1})",
            kind,
            geometry.size.width,
            geometry.size.height,
            geometry.resting.x,
            geometry.resting.y
        );
        Ok(panel)
    }

    /// 贴纸按首次布局的位置放好，之后相对各自贴纸板中心移动
    fn seed_stickers(&mut self) {
        self.stickers = self
            .layout
            .boards
            .iter()
            .map(|board| {
                let center = board.rect.center();
                board
                    .stickers
                    .iter()
                    .map(|(asset, at)| {
                        DraggableDecoration::new(*asset, Size::new(STICKER_SIZE, STICKER_SIZE), *at - center)
                    })
                    .collect()
            })
            .collect();
    }

    pub fn kind(&self) -> PanelKind { self.kind }
    pub fn config(&self) -> &PanelConfig { &self.config }
    pub fn geometry(&self) -> PanelGeometry { self.geometry }
    pub fn layout(&self) -> &PanelLayout { &self.layout }
    pub fn content(&self) -> &PanelContent { &self.content }

    /// 当前渲染位置（左上角，不含入场缩放）
    pub fn position(&self) -> Point {
        self.drag.position()
    }

    pub fn resting_position(&self) -> Point {
        self.geometry.resting
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_springing_back(&self) -> bool {
        self.spring_back.is_some()
    }

    /// 入场缩放
    pub fn scale(&self) -> f32 {
        self.entrance.position()
    }

    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(self.position(), self.geometry.size)
    }

    /// 带入场缩放的实际显示区域
    pub fn visual_frame(&self) -> Rect {
        self.frame().scale_about_center(self.scale())
    }

    // ---- 拖动 ----

    /// 开始拖动；正在回弹时从当前动画位置接手
    pub fn begin_drag(&mut self, pointer: Point) {
        if let Some(spring) = self.spring_back.take() {
            self.drag.set_offset(spring.position());
        }
        self.drag.begin(pointer);
    }

    pub fn drag_to(&mut self, pointer: Point) {
        self.drag.update(pointer);
    }

    /// 松手：合并位置，需要时开始回弹，返回合并后的位置
    pub fn end_drag(&mut self) -> Point {
        if !self.drag.is_dragging() {
            return self.position();
        }
        let committed = self.drag.end();
        if self.config.spring_back {
            self.spring_back = Some(SpringPoint::new(committed, self.geometry.resting, self.motion.spring_back));
        }
        committed
    }

    // ---- 视口 ----

    /// 处理订阅里积压的视口变化
    pub fn sync_viewport(&mut self) -> Result<bool> {
        match self.subscription.poll() {
            Some(viewport) => {
                self.on_resize(viewport)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// 视口变化：重新计算几何，已提交位置直接回到新的静止位置。
    /// 拖动中的增量保留，松手后的回弹目标也是新的静止位置。
    pub fn on_resize(&mut self, viewport: Viewport) -> Result<()> {
        self.geometry = PanelGeometry::compute(viewport, &self.config);
        self.spring_back = None;
        self.drag.set_offset(self.geometry.resting);
        log::debug!(
            "📐 {:?} panel recentered to ({:.1}, {:.1})",
            self.kind,
            self.geometry.resting.x,
            self.geometry.resting.y
        );
        self.relayout()
    }

    // ---- 布局 ----

    pub fn title_bar_height(&self) -> f32 {
        self.kind.title_padding() * 2.0 + TITLE_LINE_HEIGHT
    }

    /// 面板内坐标的标题栏
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.geometry.size.width, self.title_bar_height())
    }

    pub fn close_rect(&self) -> Rect {
        Rect::new(self.geometry.size.width - CLOSE_WIDTH, 0.0, CLOSE_WIDTH, self.title_bar_height())
    }

    /// 面板内坐标的滚动区域
    pub fn content_rect(&self) -> Rect {
        let top = self.title_bar_height();
        let mut width = self.geometry.size.width;
        if self.tracker.is_some() {
            width -= TRACKER_WIDTH;
        }
        if self.config.show_scrollbar {
            width -= SCROLLBAR_WIDTH;
        }
        Rect::new(0.0, top, width.max(1.0), (self.geometry.size.height - top).max(1.0))
    }

    pub fn tracker_rect(&self) -> Option<Rect> {
        self.tracker.as_ref()?;
        let content = self.content_rect();
        Some(Rect::new(self.geometry.size.width - TRACKER_WIDTH, content.y, TRACKER_WIDTH, content.height))
    }

    /// 追踪器第 i 项的热区（面板内坐标）
    pub fn tracker_entry_rect(&self, index: usize) -> Option<Rect> {
        let column = self.tracker_rect()?;
        let count = self.tracker.as_ref()?.len();
        if index >= count {
            return None;
        }
        let total = count as f32 * TRACKER_ENTRY + (count.saturating_sub(1)) as f32 * TRACKER_GAP;
        let start = column.y + (column.height - total) / 2.0;
        let y = start + index as f32 * (TRACKER_ENTRY + TRACKER_GAP);
        Some(Rect::new(column.x, y - TRACKER_GAP / 2.0, column.width, TRACKER_ENTRY + TRACKER_GAP))
    }

    pub fn scrollbar_rect(&self) -> Option<Rect> {
        if !self.config.show_scrollbar {
            return None;
        }
        let content = self.content_rect();
        Some(Rect::new(content.right(), content.y, SCROLLBAR_WIDTH, content.height))
    }

    pub fn scroll_indicator(&self) -> ScrollIndicator {
        ScrollIndicator::new(self.content_rect().height, self.layout.content_height)
    }

    /// 重新布局内容，并把 section 偏移交给追踪器
    pub fn relayout(&mut self) -> Result<()> {
        let area = self.content_rect();
        self.layout = layout_panel(&self.content, area.width, self.measure.as_ref())?;
        self.apply_layout(self.layout.section_offsets.clone(), self.layout.content_height, area.height);
        Ok(())
    }

    /// 布局回调：记录 section 偏移和内容高度
    pub fn apply_layout(&mut self, section_offsets: Vec<f32>, content_height: f32, container_height: f32) {
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.record_all(&section_offsets);
        }
        self.scroll.update_content_height(content_height, container_height);
        self.refresh_tracker();
    }

    // ---- 滚动和追踪器 ----

    pub fn scroll_y(&self) -> f32 {
        self.scroll.get_position()
    }

    pub fn scroll(&self) -> &ScrollController {
        &self.scroll
    }

    pub fn tracker(&self) -> Option<&SectionTracker> {
        self.tracker.as_ref()
    }

    pub fn current_section(&self) -> usize {
        self.tracker.as_ref().map(|t| t.current()).unwrap_or(0)
    }

    fn refresh_tracker(&mut self) {
        let y = self.scroll.get_position();
        if let Some(tracker) = self.tracker.as_mut() {
            tracker.update(y);
        }
    }

    /// 点击追踪器第 index 项；偏移还没记录时什么也不做
    pub fn select_section(&mut self, index: usize) -> Option<f32> {
        let target = self.tracker.as_ref()?.target_for(index)?;
        self.scroll.scroll_to(target);
        Some(target)
    }

    pub fn wheel(&mut self, delta_y: f32, precise: bool) {
        self.scroll.handle_scroll(delta_y, precise);
        self.refresh_tracker();
    }

    // ---- 贴纸 ----

    pub fn stickers(&self, board: usize) -> &[DraggableDecoration] {
        self.stickers.get(board).map(Vec::as_slice).unwrap_or(&[])
    }

    fn board_center(&self, board: usize) -> Option<Point> {
        self.layout.boards.get(board).map(|b| b.rect.center())
    }

    // ---- 指针 ----

    /// 窗口坐标 → 面板内坐标（反算入场缩放）
    pub fn to_local(&self, point: Point) -> Point {
        let frame = self.frame();
        let center = frame.center();
        let scale = self.scale().max(0.01);
        let unscaled = Point::new(
            center.x + (point.x - center.x) / scale,
            center.y + (point.y - center.y) / scale,
        );
        unscaled - frame.origin()
    }

    pub fn hit_test(&self, point: Point) -> bool {
        self.visual_frame().contains(&point)
    }

    /// 面板内坐标 → 内容坐标
    fn to_content(&self, local: Point) -> Point {
        let area = self.content_rect();
        Point::new(local.x - area.x, local.y - area.y + self.scroll.get_position())
    }

    fn target_at(&self, point: Point) -> PointerTarget {
        let local = self.to_local(point);

        if self.close_rect().contains(&local) {
            return PointerTarget::Close;
        }

        if let Some(count) = self.tracker.as_ref().map(|t| t.len()) {
            for i in 0..count {
                if self.tracker_entry_rect(i).is_some_and(|r| r.contains(&local)) {
                    return PointerTarget::Tracker(i);
                }
            }
        }

        if self.content_rect().contains(&local) {
            let at = self.to_content(local);
            for (board, stickers) in self.stickers.iter().enumerate() {
                let Some(center) = self.board_center(board) else { continue };
                let board_local = at - center;
                // 后画的在上层
                if let Some(index) = stickers.iter().rposition(|s| s.hit_test(board_local)) {
                    return PointerTarget::Sticker { board, index };
                }
            }
            let link = self.layout.links().find(|(rect, _)| rect.contains(&at)).map(|(_, url)| url);
            return PointerTarget::Content { link };
        }

        PointerTarget::Panel
    }

    pub fn pointer_down(&mut self, point: Point, timestamp: u64) {
        let target = self.target_at(point);
        self.tap.press(point, timestamp);
        match target {
            PointerTarget::Panel => self.begin_drag(point),
            PointerTarget::Content { .. } => self.scroll.begin_drag(point.y, timestamp),
            PointerTarget::Sticker { board, index } => {
                if let Some(sticker) = self.stickers.get_mut(board).and_then(|s| s.get_mut(index)) {
                    sticker.begin_drag(point);
                }
            }
            PointerTarget::Close | PointerTarget::Tracker(_) => {}
        }
        self.active = Some(target);
    }

    pub fn pointer_move(&mut self, point: Point, timestamp: u64) {
        match self.active {
            Some(PointerTarget::Panel) => self.drag_to(point),
            Some(PointerTarget::Content { .. }) => {
                self.scroll.update_drag(point.y, timestamp);
                self.refresh_tracker();
            }
            Some(PointerTarget::Sticker { board, index }) => {
                if let Some(sticker) = self.stickers.get_mut(board).and_then(|s| s.get_mut(index)) {
                    sticker.drag_to(point);
                }
            }
            _ => {}
        }
    }

    pub fn pointer_up(&mut self, point: Point, timestamp: u64) -> PanelAction {
        let Some(target) = self.active.take() else {
            return PanelAction::None;
        };
        let is_tap = self.tap.release(point, timestamp);

        match target {
            PointerTarget::Panel => {
                self.end_drag();
                PanelAction::None
            }
            PointerTarget::Sticker { board, index } => {
                if let Some(sticker) = self.stickers.get_mut(board).and_then(|s| s.get_mut(index)) {
                    sticker.end_drag();
                }
                PanelAction::None
            }
            PointerTarget::Content { link } => {
                self.scroll.end_drag();
                match link {
                    Some(url) if is_tap => PanelAction::OpenLink(url),
                    _ => PanelAction::None,
                }
            }
            PointerTarget::Close if is_tap && self.close_rect().contains(&self.to_local(point)) => PanelAction::Close,
            PointerTarget::Tracker(section) if is_tap => match self.select_section(section) {
                Some(offset) => PanelAction::ScrollTo { section, offset },
                None => PanelAction::None,
            },
            _ => PanelAction::None,
        }
    }

    /// 指针被系统取消：按松手处理拖动，但不触发点击
    pub fn pointer_cancel(&mut self) {
        self.tap.cancel();
        match self.active.take() {
            Some(PointerTarget::Panel) => {
                self.end_drag();
            }
            Some(PointerTarget::Content { .. }) => {
                self.scroll.end_drag();
            }
            Some(PointerTarget::Sticker { board, index }) => {
                if let Some(sticker) = self.stickers.get_mut(board).and_then(|s| s.get_mut(index)) {
                    sticker.end_drag();
                }
            }
            _ => {}
        }
    }

    // ---- 帧 ----

    /// 推进一帧，返回是否还有动画在进行
    pub fn tick(&mut self, dt: f32) -> Result<bool> {
        self.sync_viewport()?;

        let mut animating = self.entrance.tick(dt);

        if let Some(spring) = self.spring_back.as_mut() {
            let moving = spring.tick(dt);
            let at = spring.position();
            if !self.drag.is_dragging() {
                self.drag.set_offset(at);
            }
            if moving {
                animating = true;
            } else {
                self.spring_back = None;
            }
        }

        if self.scroll.update(dt) {
            animating = true;
        }
        self.refresh_tracker();

        Ok(animating || self.drag.is_dragging() || self.scroll.is_dragging)
    }
}

impl Drop for DraggablePanel {
    fn drop(&mut self) {
        log::debug!("🗑️ Unmounted {:?} panel", self.kind);
    }
}

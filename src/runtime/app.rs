//! 作品集应用宿主
//!
//! 持有唯一的 ViewportHub、首页状态和已打开的面板。面板的显示与否只由这里决定：
//! 打开时挂载，关闭时直接丢弃（连同它的动画和视口订阅）。

use super::audio::Chime;
use super::config::FolioConfig;
use super::links::{open_link, LinkOpener};
use super::viewport::{Viewport, ViewportHub};
use crate::content::PanelKind;
use crate::error::Result;
use crate::event::{Event, Key, PointerPhase, TapRecognizer};
use crate::text::TextMeasure;
use crate::ui::home::HomeScreen;
use crate::ui::panel::{DraggablePanel, PanelAction, PanelMotion};
use crate::Point;
use std::rc::Rc;

/// 当前按下的指针归谁处理
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerOwner {
    Home,
    Panel(PanelKind),
}

pub struct FolioApp {
    config: FolioConfig,
    hub: ViewportHub,
    home: HomeScreen,
    /// 按 PanelKind::ALL 的顺序排列，后面的在上层
    panels: Vec<DraggablePanel>,
    measure: Rc<dyn TextMeasure>,
    links: Box<dyn LinkOpener>,
    chime: Box<dyn Chime>,
    tap: TapRecognizer,
    pointer: Option<PointerOwner>,
    quit_requested: bool,
}

impl FolioApp {
    pub fn new(
        config: FolioConfig,
        viewport: Viewport,
        measure: Rc<dyn TextMeasure>,
        links: Box<dyn LinkOpener>,
        chime: Box<dyn Chime>,
    ) -> Self {
        let home = HomeScreen::new(
            viewport,
            config.animation.fade_in_ms,
            config.animation.moving_star_ms,
            measure.as_ref(),
        );
        let tap = TapRecognizer::new(config.tap.slop, config.tap.max_duration_ms);
        log::info!("🏠 Home screen ready at {}x{}", viewport.width, viewport.height);

        Self {
            config,
            hub: ViewportHub::new(viewport),
            home,
            panels: Vec::new(),
            measure,
            links,
            chime,
            tap,
            pointer: None,
            quit_requested: false,
        }
    }

    pub fn config(&self) -> &FolioConfig { &self.config }
    pub fn hub(&self) -> &ViewportHub { &self.hub }
    pub fn viewport(&self) -> Viewport { self.hub.current() }
    pub fn home(&self) -> &HomeScreen { &self.home }
    pub fn should_quit(&self) -> bool { self.quit_requested }

    /// 已打开的面板，自下而上
    pub fn panels(&self) -> impl Iterator<Item = &DraggablePanel> {
        self.panels.iter()
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&DraggablePanel> {
        self.panels.iter().find(|p| p.kind() == kind)
    }

    pub fn panel_mut(&mut self, kind: PanelKind) -> Option<&mut DraggablePanel> {
        self.panels.iter_mut().find(|p| p.kind() == kind)
    }

    pub fn is_open(&self, kind: PanelKind) -> bool {
        self.panel(kind).is_some()
    }

    /// 打开面板；已经打开时不做任何事
    pub fn open_panel(&mut self, kind: PanelKind) -> Result<()> {
        if self.is_open(kind) {
            return Ok(());
        }
        let panel = DraggablePanel::mount(
            kind,
            *self.config.panel(kind),
            PanelMotion::from(&self.config),
            &self.hub,
            Rc::clone(&self.measure),
        )?;
        self.panels.push(panel);
        self.panels.sort_by_key(|p| z_index(p.kind()));
        Ok(())
    }

    /// 关闭面板，内部状态全部丢弃
    pub fn close_panel(&mut self, kind: PanelKind) {
        if self.pointer == Some(PointerOwner::Panel(kind)) {
            self.pointer = None;
        }
        self.panels.retain(|p| p.kind() != kind);
    }

    /// 指针下最上层的面板
    fn panel_at(&self, point: Point) -> Option<PanelKind> {
        self.panels.iter().rev().find(|p| p.hit_test(point)).map(|p| p.kind())
    }

    pub fn handle_event(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Pointer(e) => match e.phase {
                PointerPhase::Down => self.pointer_down(e.position, e.timestamp),
                PointerPhase::Move => self.pointer_move(e.position, e.timestamp),
                PointerPhase::Up => self.pointer_up(e.position, e.timestamp)?,
                PointerPhase::Cancel => self.pointer_cancel(),
            },
            Event::Wheel(e) => match self.panel_at(e.position) {
                Some(kind) => {
                    if let Some(panel) = self.panel_mut(kind) {
                        panel.wheel(e.delta_y, e.precise);
                    }
                }
                None => self.home.wheel(e.delta_y, e.precise),
            },
            Event::Resize { width, height } => self.resize(Viewport::new(*width, *height))?,
            Event::Key(key) => {
                if key.is_quit_shortcut() {
                    log::info!("👋 Quit requested");
                    self.quit_requested = true;
                } else if key.key == Key::Escape {
                    if let Some(top) = self.panels.last().map(|p| p.kind()) {
                        self.close_panel(top);
                    }
                }
            }
        }
        Ok(())
    }

    /// 发布新视口；首页重新排版，面板立即回到各自新的静止位置
    pub fn resize(&mut self, viewport: Viewport) -> Result<()> {
        if !self.hub.publish(viewport) {
            return Ok(());
        }
        log::info!("📐 Viewport resized to {}x{}", viewport.width, viewport.height);
        self.home.resize(viewport, self.measure.as_ref());
        for panel in &mut self.panels {
            panel.sync_viewport()?;
        }
        Ok(())
    }

    fn pointer_down(&mut self, point: Point, timestamp: u64) {
        match self.panel_at(point) {
            Some(kind) => {
                if let Some(panel) = self.panel_mut(kind) {
                    panel.pointer_down(point, timestamp);
                }
                self.pointer = Some(PointerOwner::Panel(kind));
            }
            None => {
                self.home.pointer_down(point, timestamp);
                self.tap.press(point, timestamp);
                self.pointer = Some(PointerOwner::Home);
            }
        }
    }

    fn pointer_move(&mut self, point: Point, timestamp: u64) {
        match self.pointer {
            Some(PointerOwner::Panel(kind)) => {
                if let Some(panel) = self.panel_mut(kind) {
                    panel.pointer_move(point, timestamp);
                }
            }
            Some(PointerOwner::Home) => self.home.pointer_move(point, timestamp),
            None => {}
        }
    }

    fn pointer_up(&mut self, point: Point, timestamp: u64) -> Result<()> {
        match self.pointer.take() {
            Some(PointerOwner::Panel(kind)) => {
                let action = match self.panel_mut(kind) {
                    Some(panel) => panel.pointer_up(point, timestamp),
                    None => PanelAction::None,
                };
                self.apply_action(kind, action);
            }
            Some(PointerOwner::Home) => {
                if self.home.pointer_up() {
                    self.tap.cancel();
                } else if self.tap.release(point, timestamp) {
                    if let Some(icon) = self.home.icon_at(point) {
                        if icon.sparkles() {
                            self.chime.play();
                        }
                        self.open_panel(icon.panel())?;
                    }
                }
            }
            None => {}
        }
        Ok(())
    }

    fn pointer_cancel(&mut self) {
        self.tap.cancel();
        match self.pointer.take() {
            Some(PointerOwner::Panel(kind)) => {
                if let Some(panel) = self.panel_mut(kind) {
                    panel.pointer_cancel();
                }
            }
            Some(PointerOwner::Home) => {
                self.home.pointer_up();
            }
            None => {}
        }
    }

    fn apply_action(&mut self, kind: PanelKind, action: PanelAction) {
        match action {
            PanelAction::None => {}
            PanelAction::Close => self.close_panel(kind),
            PanelAction::OpenLink(url) => open_link(self.links.as_ref(), url),
            PanelAction::ScrollTo { section, offset } => {
                log::debug!("⭐ {:?} scrolling to section {} at {:.0}", kind, section, offset);
            }
        }
    }

    /// 推进一帧，返回是否需要重绘
    pub fn tick(&mut self, dt: f32) -> Result<bool> {
        let mut redraw = self.home.tick(dt);
        for panel in &mut self.panels {
            if panel.tick(dt)? {
                redraw = true;
            }
        }
        Ok(redraw)
    }
}

fn z_index(kind: PanelKind) -> usize {
    PanelKind::ALL.iter().position(|k| *k == kind).unwrap_or(0)
}

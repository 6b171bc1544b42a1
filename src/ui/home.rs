//! 首页：响应式排版、图标簇、淡入和底部移动的星星

use super::decoration::DraggableDecoration;
use super::scroll_controller::ScrollController;
use super::tween::{Easing, PingPong, Tween};
use crate::content::{home, PanelKind};
use crate::runtime::viewport::Viewport;
use crate::text::{wrap_lines, TextMeasure};
use crate::{Color, Point, Rect, Size};

/// 图标簇的设计稿尺寸
pub const BASE_WIDTH: f32 = 900.0;
pub const BASE_HEIGHT: f32 = 314.0;
/// 底部星星
pub const MOVING_STAR_SIZE: f32 = 60.0;
pub const MOVING_STAR_BOTTOM: f32 = 20.0;
/// 可拖动星星的尺寸
pub const STAR_SIZE: f32 = 58.0;

const PAGE_PADDING_VERTICAL: f32 = 80.0;
const FOOTER_SIZE: f32 = 20.0;

/// 响应式排版
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Typography {
    pub padding_horizontal: f32,
    pub title_size: f32,
    pub body_size: f32,
}

impl Typography {
    pub fn for_width(width: f32) -> Self {
        let (padding_horizontal, title_size, body_size) = if width < 480.0 {
            // 手机
            (20.0, 26.0, 14.0)
        } else if width < 1024.0 {
            // 平板
            (60.0, 34.0, 22.0)
        } else {
            (200.0, 50.0, 30.0)
        };
        Self { padding_horizontal, title_size, body_size }
    }
}

/// 首页上可点击的图标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeIcon {
    Cake,
    Makeup,
    Frame,
    Computer,
}

impl HomeIcon {
    /// 绘制顺序，后面的在上层
    pub const ALL: [HomeIcon; 4] = [HomeIcon::Cake, HomeIcon::Makeup, HomeIcon::Frame, HomeIcon::Computer];

    /// 设计稿尺寸
    pub fn design_size(self) -> Size {
        match self {
            HomeIcon::Cake => Size::new(176.0, 151.0),
            HomeIcon::Makeup => Size::new(137.0, 106.0),
            HomeIcon::Frame => Size::new(185.0, 179.0),
            HomeIcon::Computer => Size::new(405.0, 322.0),
        }
    }

    /// 相对图标簇中心的设计稿偏移
    pub fn design_offset(self) -> Point {
        match self {
            HomeIcon::Cake => Point::new(100.0, 50.0),
            HomeIcon::Makeup => Point::new(250.0, -20.0),
            HomeIcon::Frame => Point::new(60.0, -80.0),
            HomeIcon::Computer => Point::new(-190.0, -100.0),
        }
    }

    pub fn panel(self) -> PanelKind {
        match self {
            HomeIcon::Cake => PanelKind::Interests,
            HomeIcon::Makeup => PanelKind::Contact,
            HomeIcon::Frame => PanelKind::About,
            HomeIcon::Computer => PanelKind::RelatedWork,
        }
    }

    /// 点击时是否播放音效
    pub fn sparkles(self) -> bool {
        !matches!(self, HomeIcon::Cake)
    }

    pub fn asset(self) -> &'static str {
        match self {
            HomeIcon::Cake => "images/mainpage/cake.png",
            HomeIcon::Makeup => "images/mainpage/makeup.png",
            HomeIcon::Frame => "images/mainpage/frame.png",
            HomeIcon::Computer => "images/mainpage/computer.png",
        }
    }
}

/// 图标簇容器里子元素的位置（容器坐标）
pub fn from_center(container: Size, scale: f32, size: Size, offset: Point) -> Rect {
    let w = size.width * scale;
    let h = size.height * scale;
    Rect::new(
        container.width / 2.0 + offset.x * scale - w / 2.0,
        container.height / 2.0 + offset.y * scale - h / 2.0,
        w,
        h,
    )
}

/// 首页布局，坐标相对页面内容左上角（未减去滚动）
#[derive(Debug, Clone)]
pub struct HomeLayout {
    pub typography: Typography,
    pub scale: f32,
    pub greeting: Rect,
    pub greeting_lines: Vec<String>,
    pub intro: Rect,
    pub intro_lines: Vec<String>,
    pub intro_line_height: f32,
    pub cluster: Rect,
    pub icons: Vec<(HomeIcon, Rect)>,
    pub footer: Rect,
    pub footer_size: f32,
    pub footer_color: Color,
    pub page_height: f32,
}

impl HomeLayout {
    pub fn compute(viewport: Viewport, measure: &dyn TextMeasure) -> Self {
        let width = viewport.width;
        let typography = Typography::for_width(width);
        let scale = width / BASE_WIDTH;
        let text_width = (width - typography.padding_horizontal * 2.0).max(1.0);
        let mut y = PAGE_PADDING_VERTICAL;

        let greeting_lines = wrap_lines(measure, home::GREETING, typography.title_size, text_width);
        let greeting_height = greeting_lines.len() as f32 * typography.title_size * 1.2;
        let greeting = Rect::new(typography.padding_horizontal, y, text_width, greeting_height);
        y += greeting_height + 10.0;

        let intro_line_height = typography.body_size * 1.5;
        let intro_lines = wrap_lines(measure, home::INTRO, typography.body_size, text_width);
        let intro = Rect::new(
            typography.padding_horizontal,
            y,
            text_width,
            intro_lines.len() as f32 * intro_line_height,
        );
        y = intro.bottom() + 200.0 * scale;

        let container = Size::new(width * 0.9, BASE_HEIGHT / BASE_WIDTH * width * 0.9);
        let cluster = Rect::new((width - container.width) / 2.0, y, container.width, container.height);
        let icons = HomeIcon::ALL
            .iter()
            .map(|icon| {
                let local = from_center(container, scale, icon.design_size(), icon.design_offset());
                (*icon, local.offset(cluster.origin()))
            })
            .collect();
        y = cluster.bottom() + 60.0;

        let footer = Rect::new(width * 0.05, y, width * 0.9, FOOTER_SIZE * 1.2 + 40.0);
        let page_height = footer.bottom() + PAGE_PADDING_VERTICAL;

        Self {
            typography,
            scale,
            greeting,
            greeting_lines,
            intro,
            intro_lines,
            intro_line_height,
            cluster,
            icons,
            footer,
            footer_size: FOOTER_SIZE,
            footer_color: Color::BLACK,
            page_height,
        }
    }
}

/// 首页状态
pub struct HomeScreen {
    viewport: Viewport,
    layout: HomeLayout,
    fade: Tween,
    star: PingPong,
    scroll: ScrollController,
    /// 图标簇上的装饰星星，坐标相对图标簇左上角
    stars: Vec<DraggableDecoration>,
    dragging_star: Option<usize>,
}

impl HomeScreen {
    pub fn new(viewport: Viewport, fade_in_ms: u64, moving_star_ms: u64, measure: &dyn TextMeasure) -> Self {
        let layout = HomeLayout::compute(viewport, measure);
        let scroll = ScrollController::new(layout.page_height, viewport.height);
        let cluster = layout.cluster.size();
        let stars = [(0.06, 0.1), (0.94, 0.85)]
            .iter()
            .map(|(fx, fy)| {
                DraggableDecoration::new(
                    "images/star_pink.png",
                    Size::new(STAR_SIZE, STAR_SIZE),
                    Point::new(cluster.width * fx, cluster.height * fy),
                )
            })
            .collect();

        Self {
            viewport,
            layout,
            fade: Tween::new(0.0, 1.0, fade_in_ms, Easing::Linear),
            star: PingPong::new(moving_star_ms),
            scroll,
            stars,
            dragging_star: None,
        }
    }

    pub fn viewport(&self) -> Viewport { self.viewport }
    pub fn layout(&self) -> &HomeLayout { &self.layout }
    pub fn opacity(&self) -> f32 { self.fade.value() }
    pub fn scroll_y(&self) -> f32 { self.scroll.get_position() }
    pub fn stars(&self) -> &[DraggableDecoration] { &self.stars }

    pub fn resize(&mut self, viewport: Viewport, measure: &dyn TextMeasure) {
        self.viewport = viewport;
        self.layout = HomeLayout::compute(viewport, measure);
        self.scroll.update_content_height(self.layout.page_height, viewport.height);
    }

    /// 底部移动星星（视口坐标）
    pub fn moving_star_rect(&self) -> Rect {
        let x = self.star.value(0.0, (self.viewport.width - MOVING_STAR_SIZE).max(0.0));
        Rect::new(
            x,
            self.viewport.height - MOVING_STAR_BOTTOM - MOVING_STAR_SIZE,
            MOVING_STAR_SIZE,
            MOVING_STAR_SIZE,
        )
    }

    /// 视口坐标 → 页面坐标
    pub fn to_page(&self, point: Point) -> Point {
        Point::new(point.x, point.y + self.scroll.get_position())
    }

    /// 命中的图标（后画的优先）
    pub fn icon_at(&self, point: Point) -> Option<HomeIcon> {
        let at = self.to_page(point);
        self.layout
            .icons
            .iter()
            .rev()
            .find(|(_, rect)| rect.contains(&at))
            .map(|(icon, _)| *icon)
    }

    fn star_at(&self, point: Point) -> Option<usize> {
        let at = self.to_page(point) - self.layout.cluster.origin();
        self.stars.iter().rposition(|s| s.hit_test(at))
    }

    pub fn pointer_down(&mut self, point: Point, timestamp: u64) {
        match self.star_at(point) {
            Some(index) => {
                self.stars[index].begin_drag(point);
                self.dragging_star = Some(index);
            }
            None => self.scroll.begin_drag(point.y, timestamp),
        }
    }

    pub fn pointer_move(&mut self, point: Point, timestamp: u64) {
        match self.dragging_star {
            Some(index) => self.stars[index].drag_to(point),
            None => self.scroll.update_drag(point.y, timestamp),
        }
    }

    /// 松手；返回 true 表示这次按下被星星接管，不再当作图标点击
    pub fn pointer_up(&mut self) -> bool {
        match self.dragging_star.take() {
            Some(index) => {
                self.stars[index].end_drag();
                true
            }
            None => {
                self.scroll.end_drag();
                false
            }
        }
    }

    pub fn wheel(&mut self, delta_y: f32, precise: bool) {
        self.scroll.handle_scroll(delta_y, precise);
    }

    /// 推进一帧；底部星星一直在动，所以首页总是需要重绘
    pub fn tick(&mut self, dt: f32) -> bool {
        self.fade.tick(dt);
        self.star.tick(dt);
        self.scroll.update(dt);
        true
    }
}

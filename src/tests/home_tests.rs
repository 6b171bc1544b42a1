//! 首页测试

use crate::runtime::Viewport;
use crate::text::MonoMetrics;
use crate::ui::home::{from_center, HomeIcon, HomeLayout, HomeScreen, Typography, MOVING_STAR_BOTTOM, MOVING_STAR_SIZE};
use crate::{Color, Point, Rect, Size};

fn screen(width: f32, height: f32) -> HomeScreen {
    HomeScreen::new(Viewport::new(width, height), 600, 5000, &MonoMetrics::default())
}

/// 三档响应式排版
#[test]
fn test_typography_breakpoints() {
    assert_eq!(Typography::for_width(375.0).title_size, 26.0);
    assert_eq!(Typography::for_width(375.0).padding_horizontal, 20.0);
    assert_eq!(Typography::for_width(800.0).body_size, 22.0);
    assert_eq!(Typography::for_width(1440.0).padding_horizontal, 200.0);
}

/// 子元素中心 = 容器中心 + 缩放后的偏移
#[test]
fn test_from_center() {
    let rect = from_center(Size::new(900.0, 314.0), 1.0, Size::new(100.0, 100.0), Point::new(0.0, 0.0));
    assert_eq!(rect, Rect::new(400.0, 107.0, 100.0, 100.0));

    let rect = from_center(Size::new(900.0, 314.0), 0.5, Size::new(100.0, 100.0), Point::new(100.0, -40.0));
    assert_eq!(rect.center(), Point::new(500.0, 137.0));
    assert_eq!(rect.width, 50.0);
}

/// 图标按绘制顺序排列，都在图标簇内部附近
#[test]
fn test_icon_layout_order() {
    let layout = HomeLayout::compute(Viewport::new(375.0, 800.0), &MonoMetrics::default());
    let order: Vec<HomeIcon> = layout.icons.iter().map(|(icon, _)| *icon).collect();
    assert_eq!(order, HomeIcon::ALL.to_vec());
    assert!(layout.page_height > layout.footer.bottom());
    assert!(layout.cluster.y > layout.intro.bottom());
    assert_eq!(layout.footer_color, Color::BLACK);
}

/// 蛋糕中心只命中蛋糕
#[test]
fn test_icon_hit() {
    let home = screen(375.0, 800.0);
    let cake = home.layout().icons[0].1;
    assert_eq!(home.icon_at(cake.center()), Some(HomeIcon::Cake));
    assert_eq!(home.icon_at(Point::new(1.0, 1.0)), None);
}

/// 重叠区域命中后画的图标
#[test]
fn test_icon_overlap_prefers_top() {
    let home = screen(375.0, 800.0);
    let frame = home.layout().icons.iter().find(|(i, _)| *i == HomeIcon::Frame).unwrap().1;
    let computer = home.layout().icons.iter().find(|(i, _)| *i == HomeIcon::Computer).unwrap().1;
    let x0 = frame.x.max(computer.x);
    let x1 = frame.right().min(computer.right());
    let y0 = frame.y.max(computer.y);
    let y1 = frame.bottom().min(computer.bottom());
    assert!(x1 > x0 && y1 > y0);
    let overlap = Point::new((x0 + x1) / 2.0, (y0 + y1) / 2.0);
    assert_eq!(home.icon_at(overlap), Some(HomeIcon::Computer));
}

/// 点击映射和音效
#[test]
fn test_icon_panels() {
    use crate::content::PanelKind;
    assert_eq!(HomeIcon::Cake.panel(), PanelKind::Interests);
    assert_eq!(HomeIcon::Makeup.panel(), PanelKind::Contact);
    assert_eq!(HomeIcon::Frame.panel(), PanelKind::About);
    assert_eq!(HomeIcon::Computer.panel(), PanelKind::RelatedWork);
    assert!(!HomeIcon::Cake.sparkles());
    assert!(HomeIcon::Computer.sparkles());
}

/// 600ms 淡入
#[test]
fn test_fade_in() {
    let mut home = screen(375.0, 800.0);
    assert_eq!(home.opacity(), 0.0);
    home.tick(0.3);
    assert!((home.opacity() - 0.5).abs() < 1e-4);
    home.tick(1.0);
    assert_eq!(home.opacity(), 1.0);
}

/// 底部星星贴着视口底部来回移动
#[test]
fn test_moving_star() {
    let mut home = screen(375.0, 800.0);
    let start = home.moving_star_rect();
    assert_eq!(start.x, 0.0);
    assert_eq!(start.bottom(), 800.0 - MOVING_STAR_BOTTOM);
    assert_eq!(start.width, MOVING_STAR_SIZE);

    home.tick(2.5);
    assert!((home.moving_star_rect().x - (375.0 - MOVING_STAR_SIZE) / 2.0).abs() < 0.1);
    home.tick(2.5);
    assert!((home.moving_star_rect().x - (375.0 - MOVING_STAR_SIZE)).abs() < 0.1);
}

/// 装饰星星可以拖动
#[test]
fn test_drag_star_decoration() {
    let mut home = screen(375.0, 800.0);
    let cluster = home.layout().cluster.origin();
    let star = home.stars()[0].position();
    let at = Point::new(cluster.x + star.x, cluster.y + star.y - home.scroll_y());

    home.pointer_down(at, 0);
    assert!(home.stars()[0].is_dragging());
    home.pointer_move(Point::new(at.x + 15.0, at.y + 5.0), 20);
    assert!(home.pointer_up());
    let moved = home.stars()[0].position();
    assert!((moved.x - (star.x + 15.0)).abs() < 0.01);
    assert!((moved.y - (star.y + 5.0)).abs() < 0.01);
    assert!(!home.stars()[0].is_dragging());
}

/// 视口变化后重新排版
#[test]
fn test_resize_relayouts() {
    let mut home = screen(375.0, 800.0);
    home.resize(Viewport::new(1200.0, 900.0), &MonoMetrics::default());
    assert_eq!(home.layout().typography, Typography::for_width(1200.0));
    assert!((home.layout().cluster.width - 1080.0).abs() < 0.01);
}

/// 没按在星星上时松手交还给页面滚动
#[test]
fn test_pointer_up_without_star() {
    let mut home = screen(375.0, 800.0);
    home.pointer_down(Point::new(1.0, 1.0), 0);
    assert!(!home.pointer_up());
}

//! 可拖动面板测试

use crate::content::PanelKind;
use crate::runtime::{Viewport, ViewportHub};
use crate::text::{MonoMetrics, TextMeasure};
use crate::ui::{DraggablePanel, PanelAction, PanelConfig, PanelGeometry, PanelMotion};
use crate::Point;
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

fn measure() -> Rc<dyn TextMeasure> {
    Rc::new(MonoMetrics::default())
}

fn mount(kind: PanelKind, config: PanelConfig, hub: &ViewportHub) -> DraggablePanel {
    DraggablePanel::mount(kind, config, PanelMotion::default(), hub, measure()).unwrap()
}

fn settle(panel: &mut DraggablePanel) {
    for _ in 0..180 {
        panel.tick(FRAME).unwrap();
    }
}

fn approx(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 0.01 && (a.y - b.y).abs() < 0.01
}

/// 375x800 视口下 About 面板 262.5x480，居中于 (56.25, 160)
#[test]
fn test_panel_geometry() {
    let geometry = PanelGeometry::compute(Viewport::new(375.0, 800.0), &PanelConfig::about());
    assert!((geometry.size.width - 262.5).abs() < 0.01);
    assert!((geometry.size.height - 480.0).abs() < 0.01);
    assert!(approx(geometry.resting, Point::new(56.25, 160.0)));
}

/// 入场缩放从 0.8 到 1
#[test]
fn test_entrance_scale() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    assert_eq!(panel.scale(), 0.8);
    assert!(approx(panel.position(), Point::new(56.25, 160.0)));
    settle(&mut panel);
    assert_eq!(panel.scale(), 1.0);
}

/// 拖动标题栏 (50, -30) 后松手，回弹到静止位置
#[test]
fn test_drag_and_spring_back() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    settle(&mut panel);

    let start = Point::new(56.25 + 50.0, 160.0 + 10.0);
    panel.pointer_down(start, 0);
    assert!(panel.is_dragging());
    panel.pointer_move(Point::new(start.x + 50.0, start.y - 30.0), 100);
    assert!(approx(panel.position(), Point::new(106.25, 130.0)));

    let action = panel.pointer_up(Point::new(start.x + 50.0, start.y - 30.0), 200);
    assert_eq!(action, PanelAction::None);
    assert!(panel.is_springing_back());

    settle(&mut panel);
    assert!(!panel.is_springing_back());
    assert!(approx(panel.position(), Point::new(56.25, 160.0)));
}

/// 不回弹的面板停在松手的位置
#[test]
fn test_no_spring_back_stays() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::Interests, PanelConfig::interests(), &hub);
    settle(&mut panel);
    let resting = panel.resting_position();

    panel.begin_drag(Point::new(0.0, 0.0));
    panel.drag_to(Point::new(-20.0, 40.0));
    let committed = panel.end_drag();
    assert!(approx(committed, Point::new(resting.x - 20.0, resting.y + 40.0)));

    settle(&mut panel);
    assert!(approx(panel.position(), committed));
}

/// 回弹途中再次按下，从当前动画位置接手
#[test]
fn test_drag_during_spring_back_takes_over() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    settle(&mut panel);

    panel.begin_drag(Point::new(0.0, 0.0));
    panel.drag_to(Point::new(100.0, 100.0));
    panel.end_drag();
    for _ in 0..5 {
        panel.tick(FRAME).unwrap();
    }
    let mid = panel.position();

    panel.begin_drag(Point::new(10.0, 10.0));
    assert!(!panel.is_springing_back());
    assert!(approx(panel.position(), mid));
    panel.drag_to(Point::new(20.0, 10.0));
    assert!(approx(panel.position(), Point::new(mid.x + 10.0, mid.y)));
}

/// 视口变化：面板立即回到新的静止位置
#[test]
fn test_resize_recenters() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    panel.begin_drag(Point::new(0.0, 0.0));
    panel.drag_to(Point::new(30.0, 30.0));
    panel.end_drag();

    hub.publish(Viewport::new(500.0, 1000.0));
    assert!(panel.sync_viewport().unwrap());
    assert!((panel.geometry().size.width - 350.0).abs() < 0.01);
    assert!((panel.geometry().size.height - 600.0).abs() < 0.01);
    assert!(approx(panel.position(), Point::new(75.0, 200.0)));
    assert!(!panel.is_springing_back());
    assert!(!panel.sync_viewport().unwrap());
}

/// 拖动中视口变化：基准重置，实时增量保留，松手后回弹到新位置
#[test]
fn test_resize_while_dragging() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    panel.begin_drag(Point::new(0.0, 0.0));
    panel.drag_to(Point::new(10.0, 20.0));

    hub.publish(Viewport::new(500.0, 1000.0));
    panel.tick(FRAME).unwrap();
    assert!(panel.is_dragging());
    assert!(approx(panel.position(), Point::new(85.0, 220.0)));

    panel.end_drag();
    settle(&mut panel);
    assert!(approx(panel.position(), Point::new(75.0, 200.0)));
}

/// 卸载时退订视口
#[test]
fn test_unmount_unsubscribes() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let panel = mount(PanelKind::Contact, PanelConfig::contact(), &hub);
    assert_eq!(hub.subscriber_count(), 1);
    drop(panel);
    assert_eq!(hub.subscriber_count(), 0);
}

/// 点击关闭按钮
#[test]
fn test_close_button_tap() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    settle(&mut panel);

    let close = panel.close_rect().center();
    let at = Point::new(close.x + panel.position().x, close.y + panel.position().y);
    panel.pointer_down(at, 0);
    assert!(!panel.is_dragging());
    assert_eq!(panel.pointer_up(at, 50), PanelAction::Close);
}

/// 按住关闭按钮太久不算点击
#[test]
fn test_close_button_long_press() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    settle(&mut panel);

    let close = panel.close_rect().center();
    let at = Point::new(close.x + panel.position().x, close.y + panel.position().y);
    panel.pointer_down(at, 0);
    assert_eq!(panel.pointer_up(at, 1000), PanelAction::None);
}

/// 点击追踪器第 3 项滚动到对应 section
#[test]
fn test_tracker_selects_section() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::RelatedWork, PanelConfig::related_work(), &hub);
    settle(&mut panel);

    let expected = panel.layout().section_offsets[2];
    let entry = panel.tracker_entry_rect(2).unwrap().center();
    let at = Point::new(entry.x + panel.position().x, entry.y + panel.position().y);
    panel.pointer_down(at, 0);
    let action = panel.pointer_up(at, 50);
    assert_eq!(action, PanelAction::ScrollTo { section: 2, offset: expected });

    settle(&mut panel);
    let max = panel.scroll().get_max_scroll();
    assert!((panel.scroll_y() - expected.min(max)).abs() < 0.5);
    let tracker = panel.tracker().unwrap();
    let mut check = tracker.clone();
    assert_eq!(panel.current_section(), check.update(panel.scroll_y()));
}

/// 没有追踪器的面板不能跳转
#[test]
fn test_untracked_panel_select() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    assert!(panel.tracker().is_none());
    assert!(panel.tracker_rect().is_none());
    assert_eq!(panel.select_section(0), None);
}

/// 滚轮滚动后追踪器跟着更新
#[test]
fn test_wheel_updates_tracker() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::RelatedWork, PanelConfig::related_work(), &hub);
    assert_eq!(panel.current_section(), 0);

    panel.wheel(100_000.0, true);
    assert_eq!(panel.scroll_y(), panel.scroll().get_max_scroll());
    let offsets = panel.layout().section_offsets.clone();
    let expected = offsets
        .iter()
        .rposition(|o| o - 100.0 <= panel.scroll_y())
        .unwrap_or(0);
    assert_eq!(panel.current_section(), expected);
    assert!(panel.current_section() > 0);
}

/// 在内容区拖动是滚动，不是移动面板
#[test]
fn test_content_drag_scrolls() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut panel = mount(PanelKind::About, PanelConfig::about(), &hub);
    settle(&mut panel);
    let before = panel.position();

    // 内容区中线上没有贴纸
    let area = panel.content_rect();
    let at = Point::new(before.x + area.x + area.width / 2.0, before.y + area.y + area.height - 20.0);
    panel.pointer_down(at, 0);
    panel.pointer_move(Point::new(at.x, at.y - 100.0), 50);
    panel.pointer_up(Point::new(at.x, at.y - 100.0), 100);

    assert_eq!(panel.position(), before);
    assert!(panel.scroll_y() > 0.0);
}

/// 内容区域减去追踪器和滚动条
#[test]
fn test_content_rect_excludes_chrome() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let about = mount(PanelKind::About, PanelConfig::about(), &hub);
    let about_width = about.geometry().size.width;
    assert_eq!(about.content_rect().width, about_width - 8.0);
    assert!(about.scrollbar_rect().is_some());

    let related = mount(PanelKind::RelatedWork, PanelConfig::related_work(), &hub);
    assert_eq!(related.content_rect().width, related.geometry().size.width - 50.0);
    assert!(related.scrollbar_rect().is_none());
}

/// 贴纸从首次布局的位置开始，坐标相对贴纸板中心
#[test]
fn test_stickers_seeded_from_layout() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let panel = mount(PanelKind::About, PanelConfig::about(), &hub);

    let board = &panel.layout().boards[0];
    let stickers = panel.stickers(0);
    assert_eq!(stickers.len(), board.stickers.len());
    for (sticker, (asset, at)) in stickers.iter().zip(&board.stickers) {
        assert_eq!(sticker.asset, *asset);
        let absolute = sticker.position() + board.rect.center();
        assert!(approx(absolute, *at));
    }
    assert!(approx(stickers[0].position(), Point::new(-120.0, -40.0)));
    assert!(panel.stickers(1).is_empty());
}

//! 滚动控制器、滚动条和补间测试

use crate::ui::scrollbar::MIN_THUMB;
use crate::ui::{Easing, PingPong, ScrollController, ScrollIndicator, Tween};

/// 滚轮滚动夹在可滚动范围内
#[test]
fn test_wheel_scroll_is_clamped() {
    let mut scroll = ScrollController::new(1000.0, 400.0);
    assert_eq!(scroll.get_max_scroll(), 600.0);

    scroll.handle_scroll(100.0, true);
    assert_eq!(scroll.get_position(), 100.0);

    scroll.handle_scroll(10_000.0, true);
    assert_eq!(scroll.get_position(), 600.0);
    assert!(scroll.is_at_bottom());

    scroll.handle_scroll(-10_000.0, true);
    assert_eq!(scroll.get_position(), 0.0);
    assert!(scroll.is_at_top());
}

/// 内容不超出容器时不滚动
#[test]
fn test_no_scroll_when_content_fits() {
    let mut scroll = ScrollController::new(300.0, 400.0);
    scroll.handle_scroll(50.0, true);
    assert_eq!(scroll.get_position(), 0.0);
}

/// 动画滚动到目标，目标超出范围时夹紧
#[test]
fn test_scroll_to_animates_and_clamps() {
    let mut scroll = ScrollController::new(1000.0, 400.0);
    scroll.scroll_to(300.0);
    assert!(scroll.is_animating());
    assert!(scroll.update(0.1));
    assert!(scroll.get_position() > 0.0 && scroll.get_position() < 300.0);
    scroll.update(0.5);
    assert_eq!(scroll.get_position(), 300.0);
    assert!(!scroll.is_animating());

    scroll.scroll_to(5000.0);
    scroll.update(0.5);
    assert_eq!(scroll.get_position(), 600.0);
}

/// 拖过顶部有橡皮筋阻力，松手后回弹
#[test]
fn test_drag_past_top_bounces_back() {
    let mut scroll = ScrollController::new(1000.0, 400.0);
    scroll.begin_drag(500.0, 0);
    scroll.update_drag(600.0, 16);
    let overshoot = scroll.get_position();
    assert!(overshoot < 0.0 && overshoot > -100.0, "overshoot {}", overshoot);

    assert!(scroll.end_drag());
    scroll.update(0.5);
    assert_eq!(scroll.get_position(), 0.0);
}

/// 内容变矮时位置夹回新的范围
#[test]
fn test_content_shrink_clamps_position() {
    let mut scroll = ScrollController::new(2000.0, 400.0);
    scroll.handle_scroll(1500.0, true);
    scroll.update_content_height(800.0, 400.0);
    assert_eq!(scroll.get_position(), 400.0);
}

/// 滑块高度 = container² / content
#[test]
fn test_thumb_geometry() {
    let indicator = ScrollIndicator::new(400.0, 1600.0);
    assert!(indicator.is_visible());
    assert_eq!(indicator.thumb_height(), 100.0);
    assert_eq!(indicator.thumb_offset(0.0), 0.0);
    assert_eq!(indicator.thumb_offset(1200.0), 300.0);
    assert_eq!(indicator.thumb_offset(5000.0), 300.0);
    assert_eq!(indicator.thumb_offset(-50.0), 0.0);
}

/// 内容很长时滑块不小于最小高度；内容为 0 时不显示也不除零
#[test]
fn test_thumb_edge_cases() {
    let long = ScrollIndicator::new(100.0, 100_000.0);
    assert_eq!(long.thumb_height(), MIN_THUMB);

    let empty = ScrollIndicator::new(400.0, 0.0);
    assert!(!empty.is_visible());
    assert!(empty.thumb_height().is_finite());
    assert!(empty.thumb_offset(10.0).is_finite());
}

/// 淡入补间
#[test]
fn test_fade_tween() {
    let mut fade = Tween::new(0.0, 1.0, 600, Easing::Linear);
    assert_eq!(fade.value(), 0.0);
    assert!(fade.tick(0.3));
    assert!((fade.value() - 0.5).abs() < 1e-5);
    assert!(!fade.tick(1.0));
    assert_eq!(fade.value(), 1.0);
    assert!(fade.is_finished());
}

/// 往返动画：单程 5 秒
#[test]
fn test_ping_pong() {
    let mut star = PingPong::new(5000);
    star.tick(2.5);
    assert!((star.progress() - 0.5).abs() < 1e-4);
    star.tick(2.5);
    assert!((star.progress() - 1.0).abs() < 1e-4);
    star.tick(2.5);
    assert!((star.progress() - 0.5).abs() < 1e-4);
    assert!((star.value(0.0, 315.0) - 157.5).abs() < 0.1);
}

#[test]
fn test_ease_out_cubic() {
    assert_eq!(Easing::EaseOutCubic.apply(0.0), 0.0);
    assert_eq!(Easing::EaseOutCubic.apply(1.0), 1.0);
    assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
}

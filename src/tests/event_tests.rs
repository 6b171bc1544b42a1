//! 事件和视口测试

use crate::event::{Key, KeyEvent, TapRecognizer};
use crate::runtime::{Viewport, ViewportHub};
use crate::Point;

/// 移动小于 10 像素、时长小于 300ms 才算点击
#[test]
fn test_tap_recognizer() {
    let mut tap = TapRecognizer::new(10.0, 300);

    tap.press(Point::new(0.0, 0.0), 0);
    assert!(tap.release(Point::new(5.0, 5.0), 100));

    tap.press(Point::new(0.0, 0.0), 0);
    assert!(!tap.release(Point::new(10.0, 0.0), 100));

    tap.press(Point::new(0.0, 0.0), 0);
    assert!(!tap.release(Point::new(0.0, 0.0), 300));

    // 没有按下
    assert!(!tap.release(Point::new(0.0, 0.0), 400));

    tap.press(Point::new(0.0, 0.0), 0);
    tap.cancel();
    assert!(!tap.is_pressed());
    assert!(!tap.release(Point::new(0.0, 0.0), 10));
}

#[test]
fn test_quit_shortcut() {
    let quit = KeyEvent { key: Key::Char('w'), ctrl: false, meta: true };
    assert!(quit.is_quit_shortcut());
    let quit = KeyEvent { key: Key::Char('Q'), ctrl: true, meta: false };
    assert!(quit.is_quit_shortcut());
    assert!(!KeyEvent::plain(Key::Char('w')).is_quit_shortcut());
    assert!(!KeyEvent::plain(Key::Escape).is_quit_shortcut());
}

/// 视口宽高至少为 1
#[test]
fn test_viewport_clamps() {
    let v = Viewport::new(0.0, -5.0);
    assert_eq!((v.width, v.height), (1.0, 1.0));
    let v = Viewport::new(f32::NAN, 300.0);
    assert_eq!((v.width, v.height), (1.0, 300.0));
}

/// 订阅只拿到最新的尺寸，尺寸不变不通知
#[test]
fn test_viewport_subscription() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let mut sub = hub.subscribe();
    assert_eq!(sub.initial(), Viewport::new(375.0, 800.0));
    assert_eq!(sub.poll(), None);

    assert!(!hub.publish(Viewport::new(375.0, 800.0)));
    assert!(hub.publish(Viewport::new(500.0, 900.0)));
    assert!(hub.publish(Viewport::new(600.0, 1000.0)));
    assert_eq!(sub.poll(), Some(Viewport::new(600.0, 1000.0)));
    assert_eq!(sub.poll(), None);
    assert_eq!(hub.current(), Viewport::new(600.0, 1000.0));
}

/// 句柄 drop 后自动退订
#[test]
fn test_subscription_drop_unsubscribes() {
    let hub = ViewportHub::new(Viewport::new(375.0, 800.0));
    let a = hub.subscribe();
    let b = hub.subscribe();
    assert_eq!(hub.subscriber_count(), 2);
    drop(a);
    assert_eq!(hub.subscriber_count(), 1);
    drop(b);
    assert_eq!(hub.subscriber_count(), 0);
}

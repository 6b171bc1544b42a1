//! 侧边追踪器测试

use crate::ui::SectionTracker;

fn tracker() -> SectionTracker {
    let mut tracker = SectionTracker::new(4, 100.0);
    tracker.record_all(&[0.0, 800.0, 1600.0, 2400.0]);
    tracker
}

/// 滚动到 750 时处于第 2 个 section（提前量 100）
#[test]
fn test_current_section_with_lookahead() {
    let mut tracker = tracker();
    assert_eq!(tracker.update(750.0), 1);
    assert_eq!(tracker.current(), 1);
}

/// 边界：offset - lookahead 恰好等于滚动位置也算进入
#[test]
fn test_lookahead_boundary() {
    let mut tracker = tracker();
    assert_eq!(tracker.update(699.0), 0);
    assert_eq!(tracker.update(700.0), 1);
    assert_eq!(tracker.update(1499.0), 1);
    assert_eq!(tracker.update(1500.0), 2);
    assert_eq!(tracker.update(100_000.0), 3);
}

/// 点击追踪器返回记录的偏移
#[test]
fn test_target_for_section() {
    let tracker = tracker();
    assert_eq!(tracker.target_for(2), Some(1600.0));
    assert_eq!(tracker.target_for(9), None);
}

/// 偏移未记录时不参与计算，也不能跳转
#[test]
fn test_unrecorded_sections() {
    let mut tracker = SectionTracker::new(3, 100.0);
    assert_eq!(tracker.update(5000.0), 0);
    assert_eq!(tracker.target_for(1), None);

    tracker.record(2, 900.0);
    assert_eq!(tracker.update(5000.0), 2);
    assert_eq!(tracker.target_for(1), None);
}

/// 记录超出数量的下标会扩容
#[test]
fn test_record_grows() {
    let mut tracker = SectionTracker::new(0, 100.0);
    assert!(tracker.is_empty());
    tracker.record(1, 300.0);
    assert_eq!(tracker.len(), 2);
    assert_eq!(tracker.offset(0), None);
    assert_eq!(tracker.offset(1), Some(300.0));
}

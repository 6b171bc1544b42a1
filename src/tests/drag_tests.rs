//! 拖动状态测试

use crate::ui::{DragPhase, DragState};
use crate::Point;

/// 按下、移动、松手后位置合并
#[test]
fn test_drag_commit_on_release() {
    let mut drag = DragState::new(Point::new(10.0, 10.0));
    drag.begin(Point::new(100.0, 100.0));
    assert_eq!(drag.phase(), DragPhase::Dragging);

    drag.update(Point::new(130.0, 80.0));
    assert_eq!(drag.delta(), Point::new(30.0, -20.0));
    assert_eq!(drag.position(), Point::new(40.0, -10.0));

    let committed = drag.end();
    assert_eq!(committed, Point::new(40.0, -10.0));
    assert_eq!(drag.offset(), committed);
    assert_eq!(drag.delta(), Point::ZERO);
    assert_eq!(drag.phase(), DragPhase::Idle);
}

/// 增量是相对按下点的累计位移，不是逐次累加
#[test]
fn test_drag_delta_is_cumulative() {
    let mut drag = DragState::new(Point::ZERO);
    drag.begin(Point::new(100.0, 100.0));
    drag.update(Point::new(110.0, 100.0));
    drag.update(Point::new(120.0, 100.0));
    assert_eq!(drag.position(), Point::new(20.0, 0.0));
}

/// 没有按下时移动不产生位移
#[test]
fn test_update_without_begin_is_ignored() {
    let mut drag = DragState::new(Point::new(5.0, 5.0));
    drag.update(Point::new(500.0, 500.0));
    assert_eq!(drag.position(), Point::new(5.0, 5.0));
    assert!(!drag.is_dragging());
}

/// 第二次拖动从上一次松手的位置开始
#[test]
fn test_second_drag_continues_from_committed() {
    let mut drag = DragState::new(Point::ZERO);
    drag.begin(Point::new(0.0, 0.0));
    drag.update(Point::new(50.0, 0.0));
    drag.end();

    drag.begin(Point::new(200.0, 200.0));
    drag.update(Point::new(200.0, 230.0));
    assert_eq!(drag.position(), Point::new(50.0, 30.0));
}

/// 拖动中改写已提交位置，实时增量保留
#[test]
fn test_set_offset_keeps_live_delta() {
    let mut drag = DragState::new(Point::ZERO);
    drag.begin(Point::new(0.0, 0.0));
    drag.update(Point::new(10.0, 20.0));
    drag.set_offset(Point::new(100.0, 100.0));
    assert_eq!(drag.position(), Point::new(110.0, 120.0));
}

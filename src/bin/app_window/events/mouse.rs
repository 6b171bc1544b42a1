//! 鼠标事件处理

use mini_folio::event::{Event, PointerEvent, PointerPhase, WheelEvent};
use mini_folio::Point;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseScrollDelta};

/// 物理像素 → 逻辑像素
pub fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    Point::new(
        (position.x / scale_factor) as f32,
        (position.y / scale_factor) as f32,
    )
}

pub fn button_event(state: ElementState, position: Point, timestamp: u64) -> Event {
    let phase = match state {
        ElementState::Pressed => PointerPhase::Down,
        ElementState::Released => PointerPhase::Up,
    };
    Event::Pointer(PointerEvent::new(phase, position.x, position.y, timestamp))
}

pub fn move_event(position: Point, timestamp: u64) -> Event {
    Event::Pointer(PointerEvent::moved(position.x, position.y, timestamp))
}

/// 滚轮：行滚动每行 20 像素，触控板直接用像素值；极小的滚动忽略
pub fn wheel_event(delta: MouseScrollDelta, position: Point, scale_factor: f64) -> Option<Event> {
    let (delta_y, precise) = match delta {
        MouseScrollDelta::LineDelta(_, y) => (-y * 20.0, false),
        MouseScrollDelta::PixelDelta(pos) => (-(pos.y / scale_factor) as f32, true),
    };
    if delta_y.abs() < 0.1 {
        return None;
    }
    Some(Event::Wheel(WheelEvent { position, delta_y, precise }))
}

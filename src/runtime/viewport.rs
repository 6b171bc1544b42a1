//! 视口尺寸 - 宿主持有唯一的 ViewportHub，面板挂载时订阅，卸载时退订

use crate::{Point, Size};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// 视口（逻辑像素），宽高始终 >= 1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        let clamp = |v: f32| if v.is_finite() { v.max(1.0) } else { 1.0 };
        Self { width: clamp(width), height: clamp(height) }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

struct Subscriber {
    id: u64,
    pending: Option<Viewport>,
}

struct HubInner {
    current: Viewport,
    next_id: u64,
    subscribers: Vec<Subscriber>,
}

/// 进程内唯一的视口可观察对象
#[derive(Clone)]
pub struct ViewportHub {
    inner: Rc<RefCell<HubInner>>,
}

impl ViewportHub {
    pub fn new(initial: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                current: initial,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> Viewport {
        self.inner.borrow().current
    }

    /// 发布新尺寸；尺寸没变时不通知
    pub fn publish(&self, viewport: Viewport) -> bool {
        let mut inner = self.inner.borrow_mut();
        if inner.current == viewport {
            return false;
        }
        inner.current = viewport;
        for sub in &mut inner.subscribers {
            sub.pending = Some(viewport);
        }
        log::debug!("📐 Viewport -> {}x{} ({} subscribers)", viewport.width, viewport.height, inner.subscribers.len());
        true
    }

    pub fn subscribe(&self) -> ViewportSubscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push(Subscriber { id, pending: None });
        ViewportSubscription {
            id,
            hub: Rc::downgrade(&self.inner),
            initial: inner.current,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// 订阅句柄，Drop 时自动退订
pub struct ViewportSubscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
    initial: Viewport,
}

impl ViewportSubscription {
    /// 订阅时的视口
    pub fn initial(&self) -> Viewport {
        self.initial
    }

    /// 取出自上次 poll 以来最新的尺寸变化
    pub fn poll(&mut self) -> Option<Viewport> {
        let hub = self.hub.upgrade()?;
        let mut inner = hub.borrow_mut();
        inner
            .subscribers
            .iter_mut()
            .find(|s| s.id == self.id)
            .and_then(|s| s.pending.take())
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            if let Ok(mut inner) = hub.try_borrow_mut() {
                inner.subscribers.retain(|s| s.id != self.id);
            }
        }
    }
}

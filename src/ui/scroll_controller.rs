//! 滚动控制器 - 拖动跟手、橡皮筋越界、惯性减速、回弹和动画滚动

/// 回弹时长（秒）
const BOUNCE_DURATION: f32 = 0.3;
/// scroll_to 动画时长（秒）
const SCROLL_TO_DURATION: f32 = 0.4;

pub struct ScrollController {
    position: f32,
    velocity: f32,
    min_scroll: f32,
    max_scroll: f32,
    viewport_height: f32,
    pub is_dragging: bool,
    drag_start_pos: f32,
    drag_start_scroll: f32,
    // (position, timestamp_ms)
    velocity_samples: Vec<(f32, u64)>,
    is_decelerating: bool,
    /// 回弹和 scroll_to 共用同一段缓出动画
    is_bouncing: bool,
    bounce_timer: f32,
    bounce_duration: f32,
    bounce_start_pos: f32,
    bounce_target_pos: f32,
}

impl ScrollController {
    pub fn new(content_height: f32, viewport_height: f32) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            min_scroll: 0.0,
            max_scroll: (content_height - viewport_height).max(0.0),
            viewport_height: viewport_height.max(1.0),
            is_dragging: false,
            drag_start_pos: 0.0,
            drag_start_scroll: 0.0,
            velocity_samples: Vec::with_capacity(10),
            is_decelerating: false,
            is_bouncing: false,
            bounce_timer: 0.0,
            bounce_duration: BOUNCE_DURATION,
            bounce_start_pos: 0.0,
            bounce_target_pos: 0.0,
        }
    }

    /// 内容或容器高度变化后重新计算可滚动范围
    pub fn update_content_height(&mut self, content_height: f32, viewport_height: f32) {
        self.viewport_height = viewport_height.max(1.0);
        // max_scroll = 内容高度 - 视口高度，滚到底时内容底部刚好贴着视口底部
        self.max_scroll = (content_height - viewport_height).max(0.0).floor();
        if !self.is_dragging && self.position > self.max_scroll {
            self.position = self.max_scroll;
        }
        if self.is_bouncing {
            self.bounce_target_pos = self.bounce_target_pos.clamp(self.min_scroll, self.max_scroll);
        }
    }

    pub fn begin_drag(&mut self, y: f32, timestamp: u64) {
        self.is_dragging = true;
        self.is_decelerating = false;
        self.is_bouncing = false;
        self.drag_start_pos = y;
        self.drag_start_scroll = self.position;
        self.velocity = 0.0;
        self.velocity_samples.clear();
        self.velocity_samples.push((y, timestamp));
    }

    pub fn update_drag(&mut self, y: f32, timestamp: u64) {
        if !self.is_dragging { return; }
        let delta = self.drag_start_pos - y;
        let mut new_pos = self.drag_start_scroll + delta;
        if new_pos < self.min_scroll {
            let overshoot = self.min_scroll - new_pos;
            new_pos = self.min_scroll - Self::rubber_band(overshoot, self.viewport_height);
        } else if new_pos > self.max_scroll {
            let overshoot = new_pos - self.max_scroll;
            new_pos = self.max_scroll + Self::rubber_band(overshoot, self.viewport_height);
        }
        self.position = new_pos;
        self.velocity_samples.push((y, timestamp));
        // 只保留最近 100ms 的采样
        self.velocity_samples.retain(|(_, t)| timestamp >= *t && timestamp - *t < 100);
    }

    /// 松手，返回是否进入惯性或回弹
    pub fn end_drag(&mut self) -> bool {
        if !self.is_dragging { return false; }
        self.is_dragging = false;
        self.velocity = self.calculate_release_velocity();
        if self.position < self.min_scroll || self.position > self.max_scroll {
            let target = self.position.clamp(self.min_scroll, self.max_scroll);
            self.start_bounce(target, BOUNCE_DURATION);
        } else if self.velocity.abs() > 50.0 {
            self.is_decelerating = true;
        }
        self.is_decelerating || self.is_bouncing
    }

    fn calculate_release_velocity(&self) -> f32 {
        let (Some(first), Some(last)) = (self.velocity_samples.first(), self.velocity_samples.last()) else {
            return 0.0;
        };
        // 毫秒转秒
        let dt = (last.1.saturating_sub(first.1)) as f32 / 1000.0;
        if dt < 0.001 { return 0.0; }
        (first.0 - last.0) / dt * 0.8
    }

    fn rubber_band(offset: f32, dimension: f32) -> f32 {
        let c = 0.55;
        let x = offset.abs() / dimension;
        let result = (1.0 - (1.0 / (x * c + 1.0))) * dimension;
        if offset < 0.0 { -result } else { result }
    }

    fn start_bounce(&mut self, target: f32, duration: f32) {
        self.is_bouncing = true;
        self.is_decelerating = false;
        self.bounce_timer = 0.0;
        self.bounce_duration = duration;
        self.bounce_start_pos = self.position;
        self.bounce_target_pos = target;
        self.velocity = 0.0;
    }

    /// 动画滚动到 target（夹在可滚动范围内）
    pub fn scroll_to(&mut self, target: f32) {
        if self.is_dragging { return; }
        let target = target.clamp(self.min_scroll, self.max_scroll);
        if (target - self.position).abs() < 0.5 {
            self.position = target;
            self.is_bouncing = false;
            self.is_decelerating = false;
            return;
        }
        self.start_bounce(target, SCROLL_TO_DURATION);
    }

    /// 更新滚动状态，返回是否还在动画中
    pub fn update(&mut self, dt: f32) -> bool {
        if self.is_dragging { return false; }
        if self.is_bouncing {
            self.bounce_timer += dt;
            if self.bounce_timer >= self.bounce_duration {
                self.position = self.bounce_target_pos;
                self.is_bouncing = false;
                return false;
            }
            let t = self.bounce_timer / self.bounce_duration;
            let ease = 1.0 - (1.0 - t).powi(3);
            self.position = self.bounce_start_pos + (self.bounce_target_pos - self.bounce_start_pos) * ease;
            return true;
        }
        if self.is_decelerating {
            let deceleration = 0.92_f32.powf(dt * 60.0);
            self.velocity *= deceleration;
            self.position += self.velocity * dt;

            // 惯性滚动不越界
            self.position = self.position.clamp(self.min_scroll, self.max_scroll);

            if self.velocity.abs() < 3.0 {
                self.velocity = 0.0;
                self.is_decelerating = false;
                return false;
            }
            return true;
        }
        false
    }

    /// 滚轮/触控板
    pub fn handle_scroll(&mut self, delta: f32, is_precise: bool) {
        // 忽略极微小的滚动事件
        if delta.abs() < 0.1 || self.max_scroll <= 0.0 {
            return;
        }

        // 触控板直接跟手，系统自己会发减速事件；鼠标滚轮按脉冲放大
        let step = if is_precise { delta } else { delta * 2.0 };
        self.position = (self.position + step).clamp(self.min_scroll, self.max_scroll);
        self.velocity = 0.0;
        self.is_decelerating = false;
        self.is_bouncing = false;
    }

    pub fn get_position(&self) -> f32 { self.position }
    pub fn get_max_scroll(&self) -> f32 { self.max_scroll }
    pub fn is_animating(&self) -> bool { self.is_decelerating || self.is_bouncing }

    pub fn is_at_top(&self) -> bool {
        self.position <= self.min_scroll + 1.0
    }

    pub fn is_at_bottom(&self) -> bool {
        self.position >= self.max_scroll - 1.0
    }
}

//! 定时补间动画：首页淡入、底部星星来回移动

/// 缓动曲线
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// 三次缓出
    EaseOutCubic,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// 一次性补间
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration_ms as f32 / 1000.0,
            elapsed: 0.0,
            easing,
        }
    }

    /// 推进 dt 秒，返回是否仍在进行
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.is_finished() {
            return false;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        !self.is_finished()
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// 无限循环的往返动画：from → to → from → ...
#[derive(Debug, Clone)]
pub struct PingPong {
    leg: f32,
    elapsed: f32,
}

impl PingPong {
    /// leg_ms 为单程时长
    pub fn new(leg_ms: u64) -> Self {
        Self {
            leg: (leg_ms as f32 / 1000.0).max(0.001),
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)) % (self.leg * 2.0);
    }

    /// 0..1..0 的线性进度
    pub fn progress(&self) -> f32 {
        let t = self.elapsed / self.leg;
        if t <= 1.0 { t } else { 2.0 - t }
    }

    pub fn value(&self, from: f32, to: f32) -> f32 {
        from + (to - from) * self.progress()
    }
}

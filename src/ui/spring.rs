//! 阻尼弹簧动画
//!
//! F = -k·(x - target) - c·v，质量为 1，半隐式欧拉积分。
//! 参数可以用 origami 的 tension/friction 写法给出，换算见 [`SpringConfig::from_origami`]。

use crate::Point;

/// 单步积分最大时长（秒），更长的帧会被细分
const MAX_STEP: f32 = 0.004;
/// 单帧最多模拟的时长，避免窗口卡顿后一次性跳完
const MAX_FRAME: f32 = 0.1;

/// 弹簧参数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    /// 位置误差小于它（且速度足够小）视为静止
    pub rest_displacement: f32,
    pub rest_velocity: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness: stiffness.max(0.1),
            damping: damping.max(0.0),
            rest_displacement: 0.001,
            rest_velocity: 0.001,
        }
    }

    /// origami tension/friction → 刚度/阻尼
    pub fn from_origami(tension: f32, friction: f32) -> Self {
        let stiffness = (tension - 30.0) * 3.62 + 194.0;
        let damping = (friction - 8.0) * 3.0 + 25.0;
        Self::new(stiffness, damping)
    }

    pub fn with_rest_thresholds(mut self, displacement: f32, velocity: f32) -> Self {
        self.rest_displacement = displacement.abs();
        self.rest_velocity = velocity.abs();
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::new(170.0, 26.0)
    }
}

/// 一维弹簧
#[derive(Debug, Clone)]
pub struct Spring {
    /// 相对目标的位移，远离原点的目标也不会丢精度
    displacement: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    at_rest: bool,
}

impl Spring {
    pub fn new(from: f32, to: f32, config: SpringConfig) -> Self {
        let mut spring = Self {
            displacement: from - to,
            velocity: 0.0,
            target: to,
            config,
            at_rest: false,
        };
        spring.check_rest();
        spring
    }

    pub fn position(&self) -> f32 { self.target + self.displacement }
    pub fn velocity(&self) -> f32 { self.velocity }
    pub fn target(&self) -> f32 { self.target }
    pub fn is_at_rest(&self) -> bool { self.at_rest }

    pub fn set_target(&mut self, target: f32) {
        self.displacement += self.target - target;
        self.target = target;
        self.check_rest();
    }

    /// 推进 dt 秒，返回是否仍在运动
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.at_rest {
            return false;
        }
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 && !self.at_rest {
            let step = remaining.min(MAX_STEP);
            self.step(step);
            remaining -= step;
            self.check_rest();
        }
        !self.at_rest
    }

    fn step(&mut self, dt: f32) {
        let force = -self.config.stiffness * self.displacement - self.config.damping * self.velocity;
        self.velocity += force * dt;
        self.displacement += self.velocity * dt;
    }

    fn check_rest(&mut self) {
        if self.displacement.abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_velocity
        {
            // 静止时精确落到目标
            self.displacement = 0.0;
            self.velocity = 0.0;
            self.at_rest = true;
        } else {
            self.at_rest = false;
        }
    }
}

/// 二维弹簧（面板回弹）
#[derive(Debug, Clone)]
pub struct SpringPoint {
    x: Spring,
    y: Spring,
}

impl SpringPoint {
    pub fn new(from: Point, to: Point, config: SpringConfig) -> Self {
        Self {
            x: Spring::new(from.x, to.x, config),
            y: Spring::new(from.y, to.y, config),
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.position(), self.y.position())
    }

    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        let moving_x = self.x.tick(dt);
        let moving_y = self.y.tick(dt);
        moving_x || moving_y
    }
}

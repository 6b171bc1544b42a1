//! 弹簧动画测试

use crate::ui::{Spring, SpringConfig, SpringPoint};
use crate::Point;

const FRAME: f32 = 1.0 / 60.0;

fn run(spring: &mut Spring, seconds: f32) -> f32 {
    let mut peak = spring.position();
    let frames = (seconds / FRAME) as usize;
    for _ in 0..frames {
        spring.tick(FRAME);
        peak = peak.max(spring.position());
    }
    peak
}

/// origami 参数换算
#[test]
fn test_origami_conversion() {
    let entrance = SpringConfig::from_origami(50.0, 6.0);
    assert!((entrance.stiffness - 266.4).abs() < 1e-3);
    assert!((entrance.damping - 19.0).abs() < 1e-3);

    let spring_back = SpringConfig::from_origami(40.0, 5.0);
    assert!((spring_back.stiffness - 230.2).abs() < 1e-3);
    assert!((spring_back.damping - 16.0).abs() < 1e-3);
}

/// 入场弹簧会越过 1 再回落，最终精确停在 1
#[test]
fn test_entrance_spring_overshoots_and_settles() {
    let mut spring = Spring::new(0.8, 1.0, SpringConfig::from_origami(50.0, 6.0));
    let peak = run(&mut spring, 3.0);
    assert!(peak > 1.0, "peak {}", peak);
    assert!(spring.is_at_rest());
    assert_eq!(spring.position(), 1.0);
    assert_eq!(spring.velocity(), 0.0);
}

/// 起点就是终点时直接静止
#[test]
fn test_spring_already_at_target() {
    let mut spring = Spring::new(1.0, 1.0, SpringConfig::default());
    assert!(spring.is_at_rest());
    assert!(!spring.tick(FRAME));
}

/// 卡顿的长帧被截断，不会发散
#[test]
fn test_long_frame_is_clamped() {
    let mut spring = Spring::new(0.0, 100.0, SpringConfig::default());
    spring.tick(10.0);
    assert!(spring.position().is_finite());
    assert!(!spring.is_at_rest());
}

/// 改目标后重新开始运动
#[test]
fn test_retarget_wakes_spring() {
    let mut spring = Spring::new(0.0, 0.0, SpringConfig::default());
    spring.set_target(10.0);
    assert!(!spring.is_at_rest());
    run(&mut spring, 3.0);
    assert_eq!(spring.position(), 10.0);
}

/// 二维弹簧两个分量都收敛
#[test]
fn test_spring_point_converges() {
    let target = Point::new(56.25, 160.0);
    let mut spring = SpringPoint::new(Point::new(106.25, 130.0), target, SpringConfig::from_origami(40.0, 5.0));
    for _ in 0..180 {
        spring.tick(FRAME);
    }
    assert!(spring.is_at_rest());
    assert_eq!(spring.position(), target);
}

/// 放宽静止阈值后更早停下，停下时仍精确落在目标
#[test]
fn test_loose_rest_thresholds() {
    let config = SpringConfig::from_origami(40.0, 5.0);
    let mut strict = Spring::new(0.0, 100.0, config);
    let mut loose = Spring::new(0.0, 100.0, config.with_rest_thresholds(0.5, 0.5));

    let mut strict_frames = 0;
    while strict.tick(FRAME) {
        strict_frames += 1;
    }
    let mut loose_frames = 0;
    while loose.tick(FRAME) {
        loose_frames += 1;
    }
    assert!(loose_frames < strict_frames);
    assert_eq!(loose.position(), 100.0);
}

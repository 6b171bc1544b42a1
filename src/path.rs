//! 路径模块 - 圆角矩形、星形等矢量形状

use crate::geometry::Point;
use std::f32::consts::PI;

/// 贝塞尔曲线近似圆弧的系数
const ARC_K: f32 = 0.552_284_8;

/// 路径命令
#[derive(Debug, Clone)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point), // 控制点1, 控制点2, 终点
    Close,
}

/// 路径
#[derive(Debug, Clone, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) -> &mut Self {
        self.commands.push(PathCommand::CubicTo(
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
            Point::new(x, y),
        ));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// 添加圆角矩形
    pub fn add_round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) -> &mut Self {
        self.add_round_rect_varying(x, y, w, h, r, r, r, r)
    }

    /// 添加四角独立圆角的矩形（标题栏只有上方两个圆角）
    #[allow(clippy::too_many_arguments)]
    pub fn add_round_rect_varying(&mut self, x: f32, y: f32, w: f32, h: f32,
                                  tl: f32, tr: f32, br: f32, bl: f32) -> &mut Self {
        let limit = (w / 2.0).min(h / 2.0).max(0.0);
        let tl = tl.min(limit);
        let tr = tr.min(limit);
        let br = br.min(limit);
        let bl = bl.min(limit);

        // 从左上角开始，顺时针绘制
        self.move_to(x + tl, y);

        self.line_to(x + w - tr, y);
        if tr > 0.0 {
            let kr = ARC_K * tr;
            self.cubic_to(x + w - tr + kr, y, x + w, y + tr - kr, x + w, y + tr);
        }

        self.line_to(x + w, y + h - br);
        if br > 0.0 {
            let kr = ARC_K * br;
            self.cubic_to(x + w, y + h - br + kr, x + w - br + kr, y + h, x + w - br, y + h);
        }

        self.line_to(x + bl, y + h);
        if bl > 0.0 {
            let kr = ARC_K * bl;
            self.cubic_to(x + bl - kr, y + h, x, y + h - bl + kr, x, y + h - bl);
        }

        self.line_to(x, y + tl);
        if tl > 0.0 {
            let kr = ARC_K * tl;
            self.cubic_to(x, y + tl - kr, x + tl - kr, y, x + tl, y);
        }

        self.close()
    }

    /// 添加五角星，outer/inner 为外/内顶点半径
    pub fn add_star(&mut self, cx: f32, cy: f32, outer: f32, inner: f32) -> &mut Self {
        for i in 0..10 {
            let r = if i % 2 == 0 { outer } else { inner };
            // 从正上方开始
            let angle = -PI / 2.0 + i as f32 * PI / 5.0;
            let x = cx + r * angle.cos();
            let y = cy + r * angle.sin();
            if i == 0 {
                self.move_to(x, y);
            } else {
                self.line_to(x, y);
            }
        }
        self.close()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// 将路径转换为点序列（用于光栅化）
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Point>> {
        let mut contours = Vec::new();
        let mut current_contour = Vec::new();
        let mut current = Point::default();
        let mut start = Point::default();

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) => {
                    if !current_contour.is_empty() {
                        contours.push(std::mem::take(&mut current_contour));
                    }
                    current = *p;
                    start = *p;
                    current_contour.push(*p);
                }
                PathCommand::LineTo(p) => {
                    current_contour.push(*p);
                    current = *p;
                }
                PathCommand::CubicTo(c1, c2, end) => {
                    flatten_cubic(&current, c1, c2, end, tolerance, &mut current_contour);
                    current = *end;
                }
                PathCommand::Close => {
                    if current != start {
                        current_contour.push(start);
                    }
                    current = start;
                }
            }
        }

        if !current_contour.is_empty() {
            contours.push(current_contour);
        }

        contours
    }
}

/// 三次贝塞尔曲线展平
fn flatten_cubic(p0: &Point, p1: &Point, p2: &Point, p3: &Point, tolerance: f32, out: &mut Vec<Point>) {
    let steps = ((p0.distance(p1) + p1.distance(p2) + p2.distance(p3)) / tolerance).ceil() as usize;
    let steps = steps.clamp(2, 100);

    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        out.push(Point::new(
            mt3 * p0.x + 3.0 * mt2 * t * p1.x + 3.0 * mt * t2 * p2.x + t3 * p3.x,
            mt3 * p0.y + 3.0 * mt2 * t * p1.y + 3.0 * mt * t2 * p2.y + t3 * p3.y,
        ));
    }
}

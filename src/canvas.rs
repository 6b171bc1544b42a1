//! Canvas 画布模块 - 核心渲染接口

use crate::error::{FolioError, Result};
use crate::{Color, Paint, PaintStyle, Path, Point, Rect};

/// 图片缩放模式
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ImageFit {
    /// 保持比例，完整显示，可能有留白
    #[default]
    Contain,
    /// 保持比例，填满区域，可能裁剪
    Cover,
    /// 拉伸填满
    Stretch,
}

/// 画布状态
#[derive(Clone)]
struct CanvasState {
    clip_rect: Option<Rect>,
    translation: (f32, f32),
}

/// 画布 - 主要渲染接口
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    clip_rect: Option<Rect>,
    translation: (f32, f32),
    state_stack: Vec<CanvasState>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
            clip_rect: None,
            translation: (0.0, 0.0),
            state_stack: Vec::new(),
        }
    }

    /// 保存当前状态（裁剪区域和变换）
    pub fn save(&mut self) {
        self.state_stack.push(CanvasState {
            clip_rect: self.clip_rect,
            translation: self.translation,
        });
    }

    /// 恢复上一次保存的状态
    pub fn restore(&mut self) {
        if let Some(state) = self.state_stack.pop() {
            self.clip_rect = state.clip_rect;
            self.translation = state.translation;
        }
    }

    /// 平移坐标系
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.translation.0 += dx;
        self.translation.1 += dy;
    }

    pub fn translation(&self) -> Point {
        Point::new(self.translation.0, self.translation.1)
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 设置裁剪区域（与当前裁剪区域求交，坐标受平移影响）
    pub fn clip_rect(&mut self, rect: Rect) {
        let rect = rect.offset(Point::new(self.translation.0, self.translation.1));
        if let Some(current) = self.clip_rect {
            let x = current.x.max(rect.x);
            let y = current.y.max(rect.y);
            let right = current.right().min(rect.right());
            let bottom = current.bottom().min(rect.bottom());

            if right > x && bottom > y {
                self.clip_rect = Some(Rect::new(x, y, right - x, bottom - y));
            } else {
                self.clip_rect = Some(Rect::new(0.0, 0.0, 0.0, 0.0));
            }
        } else {
            self.clip_rect = Some(rect);
        }
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        if let Some(clip) = &self.clip_rect {
            if x < clip.x as i32 || x >= clip.right() as i32 ||
               y < clip.y as i32 || y >= clip.bottom() as i32 {
                return;
            }
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 设置像素（带抗锯齿 coverage）
    fn set_pixel_aa(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 { return; }
        let a = (color.a as f32 * coverage.min(1.0)) as u8;
        self.set_pixel(x, y, color.with_alpha(a));
    }

    /// 绘制矩形
    pub fn draw_rect(&mut self, rect: &Rect, paint: &Paint) {
        match paint.style {
            PaintStyle::Fill => self.fill_rect(rect, &paint.color),
            PaintStyle::Stroke => self.stroke_rect(rect, paint),
            PaintStyle::FillAndStroke => {
                self.fill_rect(rect, &paint.color);
                self.stroke_rect(rect, paint);
            }
        }
    }

    fn fill_rect(&mut self, rect: &Rect, color: &Color) {
        let tx = self.translation.0;
        let ty = self.translation.1;

        let x0 = (rect.x + tx).max(0.0) as i32;
        let y0 = (rect.y + ty).max(0.0) as i32;
        let x1 = (rect.right() + tx).min(self.width as f32) as i32;
        let y1 = (rect.bottom() + ty).min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, *color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: &Rect, paint: &Paint) {
        let w = paint.stroke_width;
        self.fill_rect(&Rect::new(rect.x, rect.y, rect.width, w), &paint.color);
        self.fill_rect(&Rect::new(rect.x, rect.bottom() - w, rect.width, w), &paint.color);
        self.fill_rect(&Rect::new(rect.x, rect.y, w, rect.height), &paint.color);
        self.fill_rect(&Rect::new(rect.right() - w, rect.y, w, rect.height), &paint.color);
    }

    /// 绘制圆角矩形
    pub fn draw_round_rect(&mut self, rect: &Rect, radius: f32, paint: &Paint) {
        if radius <= 0.0 {
            self.draw_rect(rect, paint);
            return;
        }
        let mut path = Path::new();
        path.add_round_rect(rect.x, rect.y, rect.width, rect.height, radius);
        self.draw_path(&path, paint);
    }

    /// 绘制线段
    pub fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let x0 = x0 + self.translation.0;
        let y0 = y0 + self.translation.1;
        let x1 = x1 + self.translation.0;
        let y1 = y1 + self.translation.1;
        self.draw_line_aa(x0, y0, x1, y1, paint);
    }

    /// 抗锯齿直线 (Wu's algorithm)，坐标已平移
    fn draw_line_aa(&mut self, mut x0: f32, mut y0: f32, mut x1: f32, mut y1: f32, paint: &Paint) {
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

        let xend = x0.round();
        let yend = y0 + gradient * (xend - x0);
        let xpxl1 = xend as i32;
        let mut intery = yend + gradient;
        let xpxl2 = x1.round() as i32;

        for x in xpxl1..=xpxl2 {
            let y = intery.floor() as i32;
            let frac = intery - intery.floor();

            if steep {
                self.set_pixel_aa(y, x, paint.color, 1.0 - frac);
                self.set_pixel_aa(y + 1, x, paint.color, frac);
            } else {
                self.set_pixel_aa(x, y, paint.color, 1.0 - frac);
                self.set_pixel_aa(x, y + 1, paint.color, frac);
            }
            intery += gradient;
        }
    }

    /// 绘制路径
    pub fn draw_path(&mut self, path: &Path, paint: &Paint) {
        let mut contours = path.flatten(1.0);

        let tx = self.translation.0;
        let ty = self.translation.1;
        if tx != 0.0 || ty != 0.0 {
            for contour in &mut contours {
                for p in contour {
                    p.x += tx;
                    p.y += ty;
                }
            }
        }

        match paint.style {
            PaintStyle::Fill => self.fill_path(&contours, paint),
            PaintStyle::Stroke => self.stroke_path(&contours, paint),
            PaintStyle::FillAndStroke => {
                self.fill_path(&contours, paint);
                self.stroke_path(&contours, paint);
            }
        }
    }

    /// 填充路径（扫描线算法，4 条子扫描线做抗锯齿）
    fn fill_path(&mut self, contours: &[Vec<Point>], paint: &Paint) {
        if contours.is_empty() { return; }

        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        for contour in contours {
            for p in contour {
                min_y = min_y.min(p.y);
                max_y = max_y.max(p.y);
            }
        }

        let y0 = ((min_y - 1.0).floor() as i32).max(0);
        let y1 = ((max_y + 1.0).ceil() as i32).min(self.height as i32);
        let sub_samples = if paint.anti_alias { 4 } else { 1 };

        for y in y0..=y1 {
            let mut all_intersections: Vec<Vec<f32>> = Vec::with_capacity(sub_samples);

            for sub in 0..sub_samples {
                let scan_y = y as f32 + (sub as f32 + 0.5) / sub_samples as f32;
                let mut intersections = Vec::new();

                for contour in contours {
                    for i in 0..contour.len() {
                        let p0 = &contour[i];
                        let p1 = &contour[(i + 1) % contour.len()];

                        if (p0.y <= scan_y && p1.y > scan_y) || (p1.y <= scan_y && p0.y > scan_y) {
                            let t = (scan_y - p0.y) / (p1.y - p0.y);
                            intersections.push(p0.x + t * (p1.x - p0.x));
                        }
                    }
                }

                intersections.sort_by(|a, b| a.total_cmp(b));
                all_intersections.push(intersections);
            }

            let mut x_min = f32::MAX;
            let mut x_max = f32::MIN;
            for intersections in &all_intersections {
                for &x in intersections {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                }
            }
            if x_min > x_max { continue; }

            let x0 = ((x_min - 1.0).floor() as i32).max(0);
            let x1 = ((x_max + 1.0).ceil() as i32).min(self.width as i32);

            for x in x0..=x1 {
                let pixel_left = x as f32;
                let pixel_right = pixel_left + 1.0;
                let mut coverage = 0.0;

                for intersections in &all_intersections {
                    for pair in intersections.chunks(2) {
                        if let [left, right] = *pair {
                            if pixel_right <= left || pixel_left >= right {
                                continue;
                            }
                            coverage += pixel_right.min(right) - pixel_left.max(left);
                        }
                    }
                }

                coverage /= sub_samples as f32;
                if coverage > 0.0 {
                    self.set_pixel_aa(x, y, paint.color, coverage.min(1.0));
                }
            }
        }
    }

    /// 描边路径
    fn stroke_path(&mut self, contours: &[Vec<Point>], paint: &Paint) {
        for contour in contours {
            for pair in contour.windows(2) {
                self.draw_line_aa(pair[0].x, pair[0].y, pair[1].x, pair[1].y, paint);
            }
        }
    }

    /// 导出为 RGBA 字节数组
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for pixel in &self.pixels {
            data.extend_from_slice(&[pixel.r, pixel.g, pixel.b, pixel.a]);
        }
        data
    }

    /// 保存为 PNG
    pub fn save_png(&self, path: &str) -> Result<()> {
        use image::{ImageBuffer, Rgba};

        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.width,
            self.height,
            self.to_rgba(),
        ).ok_or_else(|| FolioError::Render("canvas size does not match pixel buffer".to_string()))?;

        img.save(path)?;
        Ok(())
    }

    /// 绘制图片数据（RGBA 格式），dest 为目标区域
    pub fn draw_image(&mut self, img_data: &[u8], img_w: u32, img_h: u32, dest: Rect, fit: ImageFit, opacity: f32) {
        if img_w == 0 || img_h == 0 || img_data.len() < (img_w * img_h * 4) as usize {
            return;
        }

        let x = dest.x + self.translation.0;
        let y = dest.y + self.translation.1;
        let (w, h) = (dest.width, dest.height);

        let (scale_x, scale_y, offset_x, offset_y) = match fit {
            ImageFit::Contain | ImageFit::Cover => {
                let sx = w / img_w as f32;
                let sy = h / img_h as f32;
                let scale = if fit == ImageFit::Contain { sx.min(sy) } else { sx.max(sy) };
                let ox = (w - img_w as f32 * scale) / 2.0;
                let oy = (h - img_h as f32 * scale) / 2.0;
                (scale, scale, ox, oy)
            }
            ImageFit::Stretch => (w / img_w as f32, h / img_h as f32, 0.0, 0.0),
        };
        if scale_x <= 0.0 || scale_y <= 0.0 {
            return;
        }

        let opacity = opacity.clamp(0.0, 1.0);
        let dest_x0 = x.floor().max(0.0) as i32;
        let dest_y0 = y.floor().max(0.0) as i32;
        let dest_x1 = ((x + w).ceil() as i32).min(self.width as i32);
        let dest_y1 = ((y + h).ceil() as i32).min(self.height as i32);

        let sample = |sx: u32, sy: u32| -> [f32; 4] {
            let sx = sx.min(img_w - 1);
            let sy = sy.min(img_h - 1);
            let idx = ((sy * img_w + sx) * 4) as usize;
            [
                img_data[idx] as f32,
                img_data[idx + 1] as f32,
                img_data[idx + 2] as f32,
                img_data[idx + 3] as f32,
            ]
        };
        let lerp = |a: f32, b: f32, t: f32| a + (b - a) * t;

        for dest_y in dest_y0..dest_y1 {
            for dest_x in dest_x0..dest_x1 {
                let local_x = (dest_x as f32 + 0.5 - x - offset_x) / scale_x - 0.5;
                let local_y = (dest_y as f32 + 0.5 - y - offset_y) / scale_y - 0.5;

                if local_x < -0.5 || local_y < -0.5 ||
                   local_x >= img_w as f32 - 0.5 || local_y >= img_h as f32 - 0.5 {
                    continue;
                }

                // 双线性插值采样
                let local_x = local_x.max(0.0);
                let local_y = local_y.max(0.0);
                let src_x = local_x.floor() as u32;
                let src_y = local_y.floor() as u32;
                let fx = local_x - src_x as f32;
                let fy = local_y - src_y as f32;

                let c00 = sample(src_x, src_y);
                let c10 = sample(src_x + 1, src_y);
                let c01 = sample(src_x, src_y + 1);
                let c11 = sample(src_x + 1, src_y + 1);

                let mut out = [0u8; 4];
                for (i, channel) in out.iter_mut().enumerate() {
                    *channel = lerp(lerp(c00[i], c10[i], fx), lerp(c01[i], c11[i], fx), fy) as u8;
                }
                let color = Color::new(out[0], out[1], out[2], out[3]).fade(opacity);
                self.set_pixel(dest_x, dest_y, color);
            }
        }
    }

    /// 把另一个画布缩放绘制到 dest 区域（面板入场缩放、首页淡入）
    pub fn draw_canvas(&mut self, src: &Canvas, dest: Rect, opacity: f32) {
        let data = src.to_rgba();
        self.draw_image(&data, src.width, src.height, dest, ImageFit::Stretch, opacity);
    }
}

//! 颜色模块

/// RGBA 颜色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
            a: 255,
        }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// 按不透明度缩放 alpha（淡入动画用）
    pub fn fade(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        self.with_alpha(a)
    }

    /// Alpha 混合 (使用整数运算优化)
    #[inline]
    pub fn blend(&self, dst: &Color) -> Color {
        if self.a == 0 { return *dst; }

        // 目标完全不透明（背景）的常见情况
        if dst.a == 255 {
            if self.a == 255 { return *self; }

            let alpha = self.a as u32;
            let inv_alpha = 255 - alpha;

            return Color {
                r: ((self.r as u32 * alpha + dst.r as u32 * inv_alpha) / 255) as u8,
                g: ((self.g as u32 * alpha + dst.g as u32 * inv_alpha) / 255) as u8,
                b: ((self.b as u32 * alpha + dst.b as u32 * inv_alpha) / 255) as u8,
                a: 255,
            };
        }

        // 通用混合 (半透明目标)
        let src_a = self.a as u32;
        let dst_a = dst.a as u32;
        let inv_src_a = 255 - src_a;

        let out_a = src_a + (dst_a * inv_src_a) / 255;
        if out_a == 0 { return Color::TRANSPARENT; }

        let dst_factor = (dst_a * inv_src_a) / 255;

        Color {
            r: ((self.r as u32 * src_a + dst.r as u32 * dst_factor) / out_a) as u8,
            g: ((self.g as u32 * src_a + dst.g as u32 * dst_factor) / out_a) as u8,
            b: ((self.b as u32 * src_a + dst.b as u32 * dst_factor) / out_a) as u8,
            a: out_a as u8,
        }
    }

    /// 打包为 softbuffer 使用的 0RGB 像素
    #[inline]
    pub fn to_xrgb(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    // 作品集配色
    pub const TITLE_BAR: Color = Color::from_hex(0xFFF0FA);
    pub const PINK: Color = Color::from_hex(0xFFC0CB);
    pub const TRACKER_STAR: Color = Color::from_hex(0xEDBBE7);
    pub const BORDER: Color = Color::from_hex(0x999999);
    pub const TAG_BLUE: Color = Color::from_hex(0xDFF6FF);
    pub const TAG_GREEN: Color = Color::from_hex(0xEBFFE9);
    pub const TAG_YELLOW: Color = Color::from_hex(0xFBFFC7);
    pub const LINK: Color = Color::from_hex(0x7A5CFA);
    pub const SHADOW: Color = Color::new(0, 0, 0, 64);
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

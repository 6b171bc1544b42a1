//! 文本渲染模块 - fontdue 光栅化、多字体回退和自动换行

use crate::error::{FolioError, Result};
use crate::{Canvas, Paint};
use fontdue::{Font, FontSettings, Metrics};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;

/// 文本测量接口，布局只依赖这个 trait，测试可以不加载字体
pub trait TextMeasure {
    /// 单行文本宽度
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// 等宽估算（没有可用字体时的回退）
#[derive(Debug, Clone, Copy)]
pub struct MonoMetrics {
    /// 每个字符的宽度占字号的比例
    pub advance_ratio: f32,
}

impl Default for MonoMetrics {
    fn default() -> Self {
        Self { advance_ratio: 0.55 }
    }
}

impl TextMeasure for MonoMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.advance_ratio
    }
}

/// 按单词自动换行；显式的 '\n' 强制换行，超长单词按字符拆开
pub fn wrap_lines(measure: &dyn TextMeasure, text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", line, word)
            };

            if max_width <= 0.0 || measure.text_width(&candidate, size) <= max_width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }

            if measure.text_width(word, size) <= max_width {
                line = word.to_string();
            } else {
                // 单词本身放不下一行
                for ch in word.chars() {
                    line.push(ch);
                    if measure.text_width(&line, size) > max_width && line.chars().count() > 1 {
                        line.pop();
                        lines.push(std::mem::take(&mut line));
                        line.push(ch);
                    }
                }
            }
        }
        lines.push(line);
    }

    lines
}

/// 文本渲染器 - 主字体 + 回退字体（符号、Emoji）
pub struct TextRenderer {
    main_font: Font,
    fallback_font: Option<Font>,
    /// 字形缓存 (char, size*10) -> (Metrics, Bitmap)
    cache: RefCell<HashMap<(char, u32), (Metrics, Vec<u8>)>>,
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self> {
        Ok(Self {
            main_font: Self::parse_font(font_data)?,
            fallback_font: None,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: &Path) -> Result<Self> {
        let font_data = std::fs::read(path)
            .map_err(|e| FolioError::io(path.display().to_string(), e))?;
        Self::from_bytes(&font_data)
    }

    fn parse_font(data: &[u8]) -> Result<Font> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        Font::from_bytes(data, settings).map_err(|e| FolioError::Font(e.to_string()))
    }

    /// 加载字体：优先使用资源目录里的像素字体，其次系统字体
    pub fn load(assets_dir: &Path) -> Result<Self> {
        let bundled = assets_dir.join("fonts").join("Pixelbasel.ttf");
        let system_fonts = [
            "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
            "/Library/Fonts/Arial Unicode.ttf",
            "/System/Library/Fonts/Helvetica.ttc",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "C:\\Windows\\Fonts\\arial.ttf",
        ];
        let symbol_fonts = [
            "/System/Library/Fonts/Apple Symbols.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "C:\\Windows\\Fonts\\seguisym.ttf",
        ];

        let candidates = std::iter::once(bundled)
            .chain(system_fonts.iter().map(|p| Path::new(p).to_path_buf()));

        let mut renderer = None;
        for path in candidates {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(r) => {
                    log::info!("✅ Main font: {}", path.display());
                    renderer = Some(r);
                    break;
                }
                Err(e) => log::warn!("⚠️ Skipping font {}: {}", path.display(), e),
            }
        }

        let mut renderer = renderer.ok_or_else(|| FolioError::Font("no usable font found".to_string()))?;

        for path in &symbol_fonts {
            let path = Path::new(path);
            if !path.exists() {
                continue;
            }
            if let Ok(data) = std::fs::read(path) {
                if let Ok(font) = Self::parse_font(&data) {
                    log::info!("✅ Fallback font: {}", path.display());
                    renderer.fallback_font = Some(font);
                    break;
                }
            }
        }

        Ok(renderer)
    }

    /// 主字体缺字时使用回退字体
    fn font_for(&self, ch: char) -> &Font {
        if self.main_font.lookup_glyph_index(ch) == 0 {
            if let Some(fallback) = &self.fallback_font {
                if fallback.lookup_glyph_index(ch) != 0 {
                    return fallback;
                }
            }
        }
        &self.main_font
    }

    /// 渲染单行文本，y 为基线
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, paint: &Paint) {
        let origin = canvas.translation();
        let mut cursor_x = x + origin.x;
        let y = y + origin.y;
        let size_key = (size * 10.0) as u32;

        for ch in text.chars() {
            let cached = self.cache.borrow().get(&(ch, size_key)).cloned();
            let (metrics, bitmap) = match cached {
                Some(data) => data,
                None => {
                    let data = self.font_for(ch).rasterize(ch, size);
                    self.cache.borrow_mut().insert((ch, size_key), data.clone());
                    data
                }
            };

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = y - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage <= 0.001 {
                        continue;
                    }
                    let alpha = (paint.color.a as f32 * coverage) as u8;
                    if alpha > 0 {
                        let px = (glyph_x + gx as f32).round() as i32;
                        let py = (glyph_y + gy as f32).round() as i32;
                        canvas.set_pixel(px, py, paint.color.with_alpha(alpha));
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }
}

impl TextMeasure for TextRenderer {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font_for(ch).metrics(ch, size).advance_width)
            .sum()
    }
}

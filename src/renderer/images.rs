//! 图片资源：按资源路径加载 PNG/JPEG 并缓存解码结果

use crate::error::{FolioError, Result};
use crate::{Canvas, Color, ImageFit, Paint, PaintStyle, Rect};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// 解码后的 RGBA 图片
#[derive(Debug, Clone)]
pub struct ImageData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// 解码图片字节数据
pub fn decode_image_bytes(bytes: &[u8]) -> Result<ImageData> {
    use image::GenericImageView;

    let img = image::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    Ok(ImageData {
        data: img.to_rgba8().into_raw(),
        width,
        height,
    })
}

/// 资源目录下的图片缓存；加载失败的资源也会记住，避免每帧重试
pub struct ImageStore {
    root: PathBuf,
    cache: HashMap<String, Option<Rc<ImageData>>>,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 直接放入已解码的图片
    pub fn insert(&mut self, asset: &str, image: ImageData) {
        self.cache.insert(asset.to_string(), Some(Rc::new(image)));
    }

    fn load(&self, asset: &str) -> Result<ImageData> {
        let path = self.root.join(asset);
        let bytes = std::fs::read(&path).map_err(|e| FolioError::io(path.display().to_string(), e))?;
        decode_image_bytes(&bytes)
    }

    pub fn get(&mut self, asset: &str) -> Option<Rc<ImageData>> {
        if let Some(cached) = self.cache.get(asset) {
            return cached.clone();
        }
        let loaded = match self.load(asset) {
            Ok(image) => {
                log::debug!("🖼️ Loaded {} ({}x{})", asset, image.width, image.height);
                Some(Rc::new(image))
            }
            Err(e) => {
                log::warn!("⚠️ Image {} unavailable: {}", asset, e);
                None
            }
        };
        self.cache.insert(asset.to_string(), loaded.clone());
        loaded
    }

    /// 绘制资源；缺失时画占位框
    pub fn draw(&mut self, canvas: &mut Canvas, asset: &str, dest: Rect, fit: ImageFit, opacity: f32) {
        match self.get(asset) {
            Some(image) => canvas.draw_image(&image.data, image.width, image.height, dest, fit, opacity),
            None => draw_placeholder(canvas, dest, opacity),
        }
    }
}

fn draw_placeholder(canvas: &mut Canvas, dest: Rect, opacity: f32) {
    let fill = Paint::new().with_color(Color::from_hex(0xF5F5F5).fade(opacity));
    let border = Paint::new()
        .with_color(Color::BORDER.fade(opacity))
        .with_style(PaintStyle::Stroke);
    canvas.draw_round_rect(&dest, 6.0, &fill);
    canvas.draw_round_rect(&dest, 6.0, &border);
}

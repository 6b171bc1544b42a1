//! 渲染器 - 把首页和打开的面板画到画布上
//!
//! 坐标全部是逻辑像素。没有可用字体时文字被跳过，其余照常绘制。

mod home;
pub mod images;
mod panel;

pub use images::{decode_image_bytes, ImageData, ImageStore};

use crate::content::Align;
use crate::runtime::{FolioApp, FolioConfig};
use crate::text::{MonoMetrics, TextMeasure};
use crate::{Canvas, Color, Paint, TextRenderer};
use std::rc::Rc;

pub struct FolioRenderer {
    text: Option<Rc<TextRenderer>>,
    images: ImageStore,
}

impl FolioRenderer {
    pub fn new(text: Option<Rc<TextRenderer>>, images: ImageStore) -> Self {
        Self { text, images }
    }

    /// 按配置加载字体和资源目录；找不到字体时只画图形
    pub fn load(config: &FolioConfig) -> Self {
        let assets = config.assets_path();
        let text = match TextRenderer::load(&assets) {
            Ok(text) => Some(Rc::new(text)),
            Err(e) => {
                log::warn!("⚠️ Text disabled: {}", e);
                None
            }
        };
        Self::new(text, ImageStore::new(assets))
    }

    pub fn text(&self) -> Option<&TextRenderer> {
        self.text.as_deref()
    }

    /// 排版用的测量器：与绘制共用同一份字体，没有字体时按等宽估算
    pub fn measure(&self) -> Rc<dyn TextMeasure> {
        match &self.text {
            Some(text) => Rc::clone(text) as Rc<dyn TextMeasure>,
            None => Rc::new(MonoMetrics::default()),
        }
    }

    pub fn images_mut(&mut self) -> &mut ImageStore {
        &mut self.images
    }

    /// 绘制一帧：首页在下，面板按层级自下而上
    pub fn render(&mut self, app: &FolioApp, canvas: &mut Canvas) {
        canvas.clear(Color::WHITE);
        self.draw_home(app.home(), canvas);
        for panel in app.panels() {
            self.draw_panel(panel, canvas);
        }
    }

    /// 单行文本，top 为行顶
    fn draw_text_line(&self, canvas: &mut Canvas, text: &str, x: f32, top: f32, size: f32, color: Color) {
        if let Some(renderer) = &self.text {
            let baseline = top + size;
            renderer.draw_text(canvas, text, x, baseline, size, &Paint::new().with_color(color));
        }
    }

    /// 多行文本，居中时每行单独居中
    #[allow(clippy::too_many_arguments)]
    fn draw_lines(
        &self,
        canvas: &mut Canvas,
        lines: &[String],
        x: f32,
        top: f32,
        width: f32,
        size: f32,
        line_height: f32,
        color: Color,
        align: Align,
    ) {
        let Some(renderer) = &self.text else { return };
        for (i, line) in lines.iter().enumerate() {
            let line_x = match align {
                Align::Start => x,
                Align::Center => x + (width - renderer.text_width(line, size)).max(0.0) / 2.0,
            };
            let line_top = top + i as f32 * line_height + (line_height - size) / 2.0;
            self.draw_text_line(canvas, line, line_x, line_top, size, color);
        }
    }
}

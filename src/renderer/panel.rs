//! 面板绘制：阴影、圆角外框、标题栏、滚动内容、贴纸、追踪器、滚动条

use super::FolioRenderer;
use crate::content::Align;
use crate::layout::{ItemKind, LayoutItem, TAG_PADDING};
use crate::ui::panel::{DraggablePanel, TRACKER_ENTRY};
use crate::{Canvas, Color, ImageFit, Paint, PaintStyle, Path, Point, Rect};

const SHADOW_OFFSET: f32 = 4.0;
const THUMB_WIDTH: f32 = 6.0;

impl FolioRenderer {
    /// 面板先按原始尺寸画到离屏画布，再按入场缩放合成到 visual_frame
    pub(super) fn draw_panel(&mut self, panel: &DraggablePanel, canvas: &mut Canvas) {
        let size = panel.geometry().size;
        if size.width < 1.0 || size.height < 1.0 {
            return;
        }
        let radius = panel.kind().corner_radius();
        let mut surface = Canvas::new(size.width.ceil() as u32, size.height.ceil() as u32);
        let bounds = Rect::new(0.0, 0.0, size.width, size.height);

        surface.draw_round_rect(&bounds, radius, &Paint::new().with_color(Color::WHITE));
        self.draw_title_bar(panel, &mut surface, radius);
        self.draw_content(panel, &mut surface);
        draw_tracker(panel, &mut surface);
        draw_scrollbar(panel, &mut surface);

        let border = Paint::new().with_color(Color::BORDER).with_style(PaintStyle::Stroke);
        surface.draw_round_rect(&bounds, radius, &border);

        let frame = panel.visual_frame();
        let shadow = frame.offset(Point::new(SHADOW_OFFSET, SHADOW_OFFSET));
        canvas.draw_round_rect(&shadow, radius, &Paint::new().with_color(Color::SHADOW));
        canvas.draw_canvas(&surface, frame, 1.0);
    }

    fn draw_title_bar(&self, panel: &DraggablePanel, surface: &mut Canvas, radius: f32) {
        let bar = panel.title_bar_rect();
        let mut path = Path::new();
        path.add_round_rect_varying(bar.x, bar.y, bar.width, bar.height, radius, radius, 0.0, 0.0);
        surface.draw_path(&path, &Paint::new().with_color(Color::TITLE_BAR));
        surface.draw_line(bar.x, bar.bottom(), bar.right(), bar.bottom(), &Paint::new().with_color(Color::BORDER));

        let padding = panel.kind().title_padding();
        self.draw_text_line(surface, panel.kind().title(), bar.x + padding + 4.0, bar.y + padding + 2.0, 20.0, Color::BLACK);

        let close = panel.close_rect();
        self.draw_text_line(surface, "✕", close.x + 10.0, close.y + padding + 2.0, 18.0, Color::BLACK);
    }

    fn draw_content(&mut self, panel: &DraggablePanel, surface: &mut Canvas) {
        let area = panel.content_rect();
        surface.save();
        surface.clip_rect(area);
        surface.translate(area.x, area.y - panel.scroll_y());

        let visible = Rect::new(0.0, panel.scroll_y(), area.width, area.height);
        for item in &panel.layout().items {
            if item.rect.intersects(&visible) {
                self.draw_item(item, surface);
            }
        }

        for (index, board) in panel.layout().boards.iter().enumerate() {
            let center = board.rect.center();
            for sticker in panel.stickers(index) {
                let frame = sticker.frame().offset(center);
                self.images.draw(surface, &sticker.asset, frame, ImageFit::Contain, 1.0);
            }
        }

        surface.restore();
    }

    fn draw_item(&mut self, item: &LayoutItem, surface: &mut Canvas) {
        let rect = item.rect;
        match &item.kind {
            ItemKind::Text { lines, size, line_height, color, align } => {
                self.draw_lines(surface, lines, rect.x, rect.y, rect.width, *size, *line_height, *color, *align);
            }
            ItemKind::SectionTitle { text, size } => {
                self.draw_text_line(surface, text, rect.x, rect.y, *size, Color::BLACK);
            }
            ItemKind::Tag { text, color, size } => {
                surface.draw_round_rect(&rect, 6.0, &Paint::new().with_color(*color));
                self.draw_text_line(surface, text, rect.x + TAG_PADDING.0, rect.y + TAG_PADDING.1, *size, Color::BLACK);
            }
            ItemKind::Image { asset } => {
                self.images.draw(surface, asset, rect, ImageFit::Contain, 1.0);
            }
            ItemKind::StickerBoard { backdrop, .. } => {
                if let Some(asset) = backdrop {
                    self.images.draw(surface, asset, rect, ImageFit::Cover, 1.0);
                }
            }
            ItemKind::Divider { text, size } => {
                let lines = vec![text.to_string()];
                self.draw_lines(surface, &lines, rect.x, rect.y, rect.width, *size, rect.height, Color::BLACK, Align::Center);
            }
            ItemKind::Link { label, size, .. } => {
                self.draw_text_line(surface, label, rect.x, rect.y, *size, Color::LINK);
                let underline = rect.bottom() - 2.0;
                surface.draw_line(rect.x, underline, rect.right(), underline, &Paint::new().with_color(Color::LINK));
            }
        }
    }
}

/// 当前 section 画实心星，其余空心
fn draw_tracker(panel: &DraggablePanel, surface: &mut Canvas) {
    let Some(tracker) = panel.tracker() else { return };
    let current = tracker.current();
    let outer = TRACKER_ENTRY / 2.0;

    for index in 0..tracker.len() {
        let Some(entry) = panel.tracker_entry_rect(index) else { continue };
        let center = entry.center();
        let mut star = Path::new();
        star.add_star(center.x, center.y, outer, outer * 0.45);

        let paint = if index == current {
            Paint::new().with_color(Color::TRACKER_STAR)
        } else {
            Paint::new()
                .with_color(Color::TRACKER_STAR)
                .with_style(PaintStyle::Stroke)
                .with_stroke_width(1.5)
        };
        surface.draw_path(&star, &paint);
    }
}

fn draw_scrollbar(panel: &DraggablePanel, surface: &mut Canvas) {
    let Some(track) = panel.scrollbar_rect() else { return };
    let indicator = panel.scroll_indicator();
    if !indicator.is_visible() {
        return;
    }
    let thumb = Rect::new(
        track.x + (track.width - THUMB_WIDTH) / 2.0,
        track.y + indicator.thumb_offset(panel.scroll_y()),
        THUMB_WIDTH,
        indicator.thumb_height(),
    );
    surface.draw_round_rect(&thumb, THUMB_WIDTH / 2.0, &Paint::new().with_color(Color::PINK));
}

//! 首页绘制

use super::FolioRenderer;
use crate::content::{home, Align};
use crate::ui::home::HomeScreen;
use crate::{Canvas, Color, ImageFit, Paint, Rect};

const MOVING_STAR_ASSET: &str = "images/star_moving.png";
const ELLIPSE_ASSET: &str = "images/mainpage/ellipse.png";

impl FolioRenderer {
    /// 整页先画到离屏画布，再按淡入不透明度合成
    pub(super) fn draw_home(&mut self, screen: &HomeScreen, canvas: &mut Canvas) {
        let opacity = screen.opacity();
        if opacity <= 0.0 {
            return;
        }

        let viewport = screen.viewport();
        let mut page = Canvas::new(viewport.width.ceil() as u32, viewport.height.ceil() as u32);
        let layout = screen.layout();
        let typography = layout.typography;

        page.save();
        page.translate(0.0, -screen.scroll_y());

        self.draw_lines(
            &mut page,
            &layout.greeting_lines,
            layout.greeting.x,
            layout.greeting.y,
            layout.greeting.width,
            typography.title_size,
            typography.title_size * 1.2,
            Color::BLACK,
            Align::Center,
        );
        self.draw_lines(
            &mut page,
            &layout.intro_lines,
            layout.intro.x,
            layout.intro.y,
            layout.intro.width,
            typography.body_size,
            layout.intro_line_height,
            Color::BLACK,
            Align::Center,
        );

        // 图标簇背后的椭圆底
        self.images.draw(&mut page, ELLIPSE_ASSET, layout.cluster, ImageFit::Contain, 1.0);
        for (icon, rect) in &layout.icons {
            self.images.draw(&mut page, icon.asset(), *rect, ImageFit::Contain, 1.0);
        }

        let cluster = layout.cluster.origin();
        for star in screen.stars() {
            let frame = star.frame().offset(cluster);
            self.images.draw(&mut page, &star.asset, frame, ImageFit::Contain, 1.0);
        }

        let footer = layout.footer;
        page.draw_line(footer.x, footer.y, footer.right(), footer.y, &Paint::new().with_color(Color::BORDER));
        let footer_line = vec![home::FOOTER.to_string()];
        self.draw_lines(
            &mut page,
            &footer_line,
            footer.x,
            footer.y + 20.0,
            footer.width,
            layout.footer_size,
            layout.footer_size * 1.2,
            layout.footer_color,
            Align::Center,
        );
        page.restore();

        // 底部星星固定在视口里，不随页面滚动
        let star = screen.moving_star_rect();
        self.images.draw(&mut page, MOVING_STAR_ASSET, star, ImageFit::Contain, 1.0);

        canvas.draw_canvas(&page, Rect::new(0.0, 0.0, viewport.width, viewport.height), opacity);
    }
}

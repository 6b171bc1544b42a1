//! 渲染测试：不加载字体，资源目录不存在，只检查图形像素

use crate::content::PanelKind;
use crate::renderer::{decode_image_bytes, FolioRenderer, ImageData, ImageStore};
use crate::runtime::audio::SilentChime;
use crate::runtime::links::SystemBrowser;
use crate::runtime::{FolioApp, FolioConfig, Viewport};
use crate::text::MonoMetrics;
use crate::{Canvas, Color, ImageFit, Point, Rect};
use std::rc::Rc;

const FRAME: f32 = 1.0 / 60.0;

fn renderer() -> FolioRenderer {
    FolioRenderer::new(None, ImageStore::new("/nonexistent/folio-assets"))
}

fn app_with(kind: PanelKind) -> FolioApp {
    let mut app = FolioApp::new(
        FolioConfig::default(),
        Viewport::new(375.0, 800.0),
        Rc::new(MonoMetrics::default()),
        Box::new(SystemBrowser),
        Box::new(SilentChime),
    );
    app.open_panel(kind).unwrap();
    for _ in 0..180 {
        app.tick(FRAME).unwrap();
    }
    app
}

fn close_to(actual: Color, expected: Color) -> bool {
    let near = |a: u8, b: u8| (a as i16 - b as i16).abs() <= 3;
    near(actual.r, expected.r) && near(actual.g, expected.g) && near(actual.b, expected.b)
}

fn pixel_at(canvas: &Canvas, at: Point) -> Color {
    canvas.get_pixel(at.x.floor() as u32, at.y.floor() as u32)
}

/// 标题栏是粉白色
#[test]
fn test_title_bar_color() {
    let app = app_with(PanelKind::About);
    let mut canvas = Canvas::new(375, 800);
    renderer().render(&app, &mut canvas);

    let panel = app.panel(PanelKind::About).unwrap();
    let at = panel.position() + Point::new(20.0, 5.0);
    let actual = pixel_at(&canvas, at);
    assert!(close_to(actual, Color::TITLE_BAR), "{:?}", actual);
}

/// 滚动条滑块是粉色，位于内容区右侧
#[test]
fn test_scrollbar_thumb_color() {
    let app = app_with(PanelKind::About);
    let mut canvas = Canvas::new(375, 800);
    renderer().render(&app, &mut canvas);

    let panel = app.panel(PanelKind::About).unwrap();
    assert!(panel.scroll_indicator().is_visible());
    let track = panel.scrollbar_rect().unwrap();
    let thumb = panel.scroll_indicator().thumb_height();
    let at = panel.position() + Point::new(track.center().x, track.y + thumb / 2.0);
    let actual = pixel_at(&canvas, at);
    assert!(close_to(actual, Color::PINK), "{:?}", actual);
}

/// 面板外的区域不受面板影响
#[test]
fn test_outside_panel_untouched() {
    let app = app_with(PanelKind::About);
    let mut canvas = Canvas::new(375, 800);
    renderer().render(&app, &mut canvas);
    let frame = app.panel(PanelKind::About).unwrap().frame();
    assert!(frame.x > 10.0);
    let actual = pixel_at(&canvas, Point::new(frame.x / 2.0, frame.y + 20.0));
    assert_ne!(actual, Color::TITLE_BAR);
}

/// 缺失的资源返回 None，并被记住
#[test]
fn test_missing_image() {
    let mut store = ImageStore::new("/nonexistent/folio-assets");
    assert!(store.get("images/profile.png").is_none());
    assert!(store.get("images/profile.png").is_none());
}

/// 缺失资源画占位框
#[test]
fn test_missing_image_placeholder() {
    let mut store = ImageStore::new("/nonexistent/folio-assets");
    let mut canvas = Canvas::new(40, 40);
    canvas.clear(Color::WHITE);
    store.draw(&mut canvas, "images/star_pink.png", Rect::new(0.0, 0.0, 40.0, 40.0), ImageFit::Contain, 1.0);
    assert!(close_to(canvas.get_pixel(20, 20), Color::from_hex(0xF5F5F5)));
}

/// 手动放入的图片直接可用
#[test]
fn test_insert_image() {
    let mut store = ImageStore::new("/nonexistent/folio-assets");
    let red = ImageData { data: [255, 0, 0, 255].repeat(4), width: 2, height: 2 };
    store.insert("images/red.png", red);

    let image = store.get("images/red.png").unwrap();
    assert_eq!((image.width, image.height), (2, 2));

    let mut canvas = Canvas::new(10, 10);
    canvas.clear(Color::WHITE);
    store.draw(&mut canvas, "images/red.png", Rect::new(0.0, 0.0, 10.0, 10.0), ImageFit::Contain, 1.0);
    assert!(close_to(canvas.get_pixel(5, 5), Color::rgb(255, 0, 0)));
}

/// 非图片字节解码失败
#[test]
fn test_decode_invalid_bytes() {
    assert!(decode_image_bytes(b"definitely not a png").is_err());
}

/// 解码 PNG
#[test]
fn test_decode_png() {
    use std::io::Cursor;

    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageOutputFormat::Png)
        .unwrap();

    let decoded = decode_image_bytes(&bytes).unwrap();
    assert_eq!((decoded.width, decoded.height), (3, 2));
    assert_eq!(&decoded.data[..4], &[10, 20, 30, 255]);
}

/// 渲染器里预先放入的图片会被首页使用
#[test]
fn test_renderer_uses_inserted_image() {
    let mut app = FolioApp::new(
        FolioConfig::default(),
        Viewport::new(375.0, 800.0),
        Rc::new(MonoMetrics::default()),
        Box::new(SystemBrowser),
        Box::new(SilentChime),
    );
    for _ in 0..60 {
        app.tick(FRAME).unwrap();
    }

    let mut renderer = renderer();
    let blue = ImageData { data: [0, 0, 255, 255].repeat(4), width: 2, height: 2 };
    renderer.images_mut().insert("images/star_moving.png", blue);

    let mut canvas = Canvas::new(375, 800);
    renderer.render(&app, &mut canvas);
    let star = app.home().moving_star_rect();
    let actual = pixel_at(&canvas, star.center());
    assert!(close_to(actual, Color::rgb(0, 0, 255)), "{:?}", actual);
}

fn home_app(width: f32, height: f32) -> FolioApp {
    let mut app = FolioApp::new(
        FolioConfig::default(),
        Viewport::new(width, height),
        Rc::new(MonoMetrics::default()),
        Box::new(SystemBrowser),
        Box::new(SilentChime),
    );
    for _ in 0..60 {
        app.tick(FRAME).unwrap();
    }
    app
}

/// 图标簇背后画椭圆底，图标之间的空隙能看到它
#[test]
fn test_home_ellipse_behind_cluster() {
    let app = home_app(375.0, 3000.0);
    let mut renderer = renderer();
    let green = ImageData { data: [0, 200, 0, 255].repeat(4), width: 2, height: 2 };
    renderer.images_mut().insert("images/mainpage/ellipse.png", green);

    let mut canvas = Canvas::new(375, 3000);
    renderer.render(&app, &mut canvas);

    // 图标簇中心正下方，没有图标覆盖
    let layout = app.home().layout();
    let center = layout.cluster.center();
    let at = Point::new(center.x, center.y + 110.0 * layout.scale);
    assert_eq!(app.home().icon_at(at), None);
    let actual = pixel_at(&canvas, at);
    assert!(close_to(actual, Color::rgb(0, 200, 0)), "{:?}", actual);
}

/// 页脚顶部有一条细分隔线
#[test]
fn test_home_footer_border() {
    let app = home_app(375.0, 3000.0);
    let mut canvas = Canvas::new(375, 3000);
    renderer().render(&app, &mut canvas);

    let footer = app.home().layout().footer;
    let x = footer.center().x.floor() as u32;
    let y = footer.y.floor() as u32;
    let darkest = (y.saturating_sub(1)..=y + 1)
        .map(|row| canvas.get_pixel(x, row).r)
        .min()
        .unwrap();
    assert!(darkest < 240, "{}", darkest);
}

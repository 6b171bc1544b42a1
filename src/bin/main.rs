//! 作品集快照工具 - 无窗口运行，把首页和每个面板渲染成 PNG
//!
//! 用法：mini-folio-snapshot [输出目录]

use mini_folio::content::PanelKind;
use mini_folio::event::{Event, PointerEvent};
use mini_folio::renderer::FolioRenderer;
use mini_folio::runtime::audio::SilentChime;
use mini_folio::runtime::links::SystemBrowser;
use mini_folio::runtime::{FolioApp, FolioConfig, Viewport};
use mini_folio::ui::HomeIcon;
use mini_folio::Canvas;
use std::path::{Path, PathBuf};

const FRAME: f32 = 1.0 / 60.0;

/// 推进动画直到静止（最多 3 秒）
fn settle(app: &mut FolioApp) -> mini_folio::Result<()> {
    for _ in 0..180 {
        app.tick(FRAME)?;
    }
    Ok(())
}

fn snapshot(app: &FolioApp, renderer: &mut FolioRenderer, out: &Path, name: &str) -> mini_folio::Result<()> {
    let viewport = app.viewport();
    let mut canvas = Canvas::new(viewport.width.ceil() as u32, viewport.height.ceil() as u32);
    renderer.render(app, &mut canvas);
    let path = out.join(format!("{}.png", name));
    canvas.save_png(&path.to_string_lossy())?;
    println!("✅ {} -> {}", name, path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("📸 Mini Folio snapshot");

    let out = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out)?;

    let config = FolioConfig::load()?;
    let mut renderer = FolioRenderer::load(&config);
    let viewport = Viewport::new(config.window.width, config.window.height);
    let mut app = FolioApp::new(
        config,
        viewport,
        renderer.measure(),
        Box::new(SystemBrowser),
        Box::new(SilentChime),
    );

    settle(&mut app)?;
    snapshot(&app, &mut renderer, &out, "home")?;

    // 模拟点击首页图标打开面板
    println!("\n--- Simulating taps ---");
    let mut clock = 0u64;
    for icon in HomeIcon::ALL {
        let Some(rect) = app.home().layout().icons.iter().find(|(i, _)| *i == icon).map(|(_, r)| *r) else {
            continue;
        };
        let at = rect.center();
        let y = at.y - app.home().scroll_y();
        app.handle_event(&Event::Pointer(PointerEvent::down(at.x, y, clock)))?;
        clock += 50;
        app.handle_event(&Event::Pointer(PointerEvent::up(at.x, y, clock)))?;
        clock += 1000;
        println!("👆 {:?} -> {:?} open: {}", icon, icon.panel(), app.is_open(icon.panel()));
    }

    // 逐个面板截图
    for kind in PanelKind::ALL {
        for other in PanelKind::ALL {
            app.close_panel(other);
        }
        app.open_panel(kind)?;
        settle(&mut app)?;
        snapshot(&app, &mut renderer, &out, kind.slug())?;
    }

    println!("\n👋 Done");
    Ok(())
}

//! 面板内容布局测试（等宽估算，不依赖字体文件）

use crate::content::{panel_content, PanelKind, FIGMA_DESIGN_SYSTEM, FIGMA_OHYEA};
use crate::layout::{layout_panel, ItemKind};
use crate::text::MonoMetrics;
use crate::Point;

const WIDTH: f32 = 262.0;

/// About：一个贴纸板，四张贴纸，贴纸中心 = 板中心 + 偏移
#[test]
fn test_about_sticker_board() {
    let content = panel_content(PanelKind::About);
    let layout = layout_panel(&content, WIDTH, &MonoMetrics::default()).unwrap();

    assert_eq!(layout.boards.len(), 1);
    let board = &layout.boards[0];
    assert_eq!(board.rect.height, 250.0);
    assert_eq!(board.stickers.len(), 4);

    let center = board.rect.center();
    let (asset, at) = board.stickers[0];
    assert_eq!(asset, "images/stickers/gummy_bear.png");
    assert_eq!(at, Point::new(center.x - 120.0, center.y - 40.0));

    let backdrop = layout.items.iter().find_map(|item| match item.kind {
        ItemKind::StickerBoard { backdrop, .. } => Some(backdrop),
        _ => None,
    });
    assert_eq!(backdrop, Some(Some("images/profile.png")));
}

/// Interests：13 个 logo
#[test]
fn test_interests_logos() {
    let content = panel_content(PanelKind::Interests);
    let layout = layout_panel(&content, WIDTH, &MonoMetrics::default()).unwrap();
    assert_eq!(layout.boards.len(), 1);
    assert_eq!(layout.boards[0].stickers.len(), 13);
    assert_eq!(layout.boards[0].rect.height, 500.0);
}

/// Related Work：四个被追踪的 section，偏移递增
#[test]
fn test_related_work_sections() {
    let content = panel_content(PanelKind::RelatedWork);
    assert_eq!(content.tracked_count(), 4);

    let layout = layout_panel(&content, WIDTH, &MonoMetrics::default()).unwrap();
    assert_eq!(layout.section_offsets.len(), 4);
    for pair in layout.section_offsets.windows(2) {
        assert!(pair[0] < pair[1], "{:?}", layout.section_offsets);
    }
    assert!(layout.content_height > layout.section_offsets[3]);

    let urls: Vec<&str> = layout.links().map(|(_, url)| url).collect();
    assert_eq!(urls, vec![FIGMA_DESIGN_SYSTEM, FIGMA_OHYEA]);
}

/// 未追踪的面板没有 section 偏移
#[test]
fn test_untracked_panels_have_no_offsets() {
    for kind in [PanelKind::About, PanelKind::Interests, PanelKind::Contact] {
        let layout = layout_panel(&panel_content(kind), WIDTH, &MonoMetrics::default()).unwrap();
        assert!(layout.section_offsets.is_empty(), "{:?}", kind);
        assert!(layout.content_height > 0.0);
    }
}

/// 越窄换行越多，内容越高
#[test]
fn test_narrow_width_is_taller() {
    let content = panel_content(PanelKind::Contact);
    let wide = layout_panel(&content, 600.0, &MonoMetrics::default()).unwrap();
    let narrow = layout_panel(&content, 200.0, &MonoMetrics::default()).unwrap();
    assert!(narrow.content_height > wide.content_height);
}

/// 所有元素都在内容宽度之内
#[test]
fn test_items_fit_content_width() {
    for kind in PanelKind::ALL {
        let content = panel_content(kind);
        let layout = layout_panel(&content, WIDTH, &MonoMetrics::default()).unwrap();
        for item in &layout.items {
            assert!(item.rect.x >= -0.01, "{:?} {:?}", kind, item);
            assert!(item.rect.right() <= WIDTH + 0.01, "{:?} {:?}", kind, item);
        }
    }
}

/// 宽度为 0 也能布局
#[test]
fn test_degenerate_width() {
    let content = panel_content(PanelKind::About);
    let layout = layout_panel(&content, 0.0, &MonoMetrics::default()).unwrap();
    assert!(layout.content_height.is_finite());
}

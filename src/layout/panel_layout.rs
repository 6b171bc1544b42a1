//! 面板内容布局
//!
//! 文本先按可用宽度测量、换行，得到固定尺寸的叶子节点，再交给 taffy 做纵向 flex 排布。
//! 结果坐标都相对滚动内容的左上角。

use crate::content::{Align, Block, PanelContent};
use crate::error::{FolioError, Result};
use crate::text::{wrap_lines, TextMeasure};
use crate::{Color, Point, Rect};
use std::collections::HashMap;
use taffy::prelude::*;

pub const HEADING_SIZE: f32 = 25.0;
pub const SECTION_TITLE_SIZE: f32 = 20.0;
pub const TAG_SIZE: f32 = 20.0;
pub const DIVIDER_SIZE: f32 = 30.0;
pub const LINK_SIZE: f32 = 18.0;
/// 标签内边距（水平, 垂直）
pub const TAG_PADDING: (f32, f32) = (6.0, 4.0);

/// 布局后的可绘制元素
#[derive(Debug, Clone)]
pub enum ItemKind {
    Text {
        lines: Vec<String>,
        size: f32,
        line_height: f32,
        color: Color,
        align: Align,
    },
    SectionTitle { text: &'static str, size: f32 },
    Tag { text: &'static str, color: Color, size: f32 },
    Image { asset: &'static str },
    /// board 为贴纸板在面板内的序号
    StickerBoard { board: usize, backdrop: Option<&'static str> },
    Divider { text: &'static str, size: f32 },
    Link { label: &'static str, url: &'static str, size: f32 },
}

#[derive(Debug, Clone)]
pub struct LayoutItem {
    pub rect: Rect,
    pub kind: ItemKind,
}

/// 一个贴纸板的初始贴纸（中心坐标，已换算到内容坐标）
#[derive(Debug, Clone)]
pub struct BoardStickers {
    pub rect: Rect,
    pub stickers: Vec<(&'static str, Point)>,
}

#[derive(Debug, Clone, Default)]
pub struct PanelLayout {
    pub items: Vec<LayoutItem>,
    /// 被追踪 section 的顶部偏移，按出现顺序
    pub section_offsets: Vec<f32>,
    pub boards: Vec<BoardStickers>,
    pub content_width: f32,
    pub content_height: f32,
}

impl PanelLayout {
    pub fn links(&self) -> impl Iterator<Item = (&Rect, &'static str)> {
        self.items.iter().filter_map(|item| match item.kind {
            ItemKind::Link { url, .. } => Some((&item.rect, url)),
            _ => None,
        })
    }
}

fn layout_err(e: taffy::TaffyError) -> FolioError {
    FolioError::Layout(e.to_string())
}

/// 构建过程中的节点表
struct Builder<'a> {
    tree: TaffyTree,
    payload: HashMap<NodeId, ItemKind>,
    measure: &'a dyn TextMeasure,
    inner_width: f32,
    boards: Vec<(NodeId, Vec<(&'static str, (f32, f32))>)>,
}

impl<'a> Builder<'a> {
    fn leaf(&mut self, width: f32, height: f32, margin: (f32, f32), kind: Option<ItemKind>) -> Result<NodeId> {
        let node = self
            .tree
            .new_leaf(Style {
                size: Size { width: length(width), height: length(height) },
                flex_shrink: 0.0,
                margin: taffy::Rect {
                    top: length(margin.0),
                    bottom: length(margin.1),
                    left: zero(),
                    right: zero(),
                },
                ..Default::default()
            })
            .map_err(layout_err)?;
        if let Some(kind) = kind {
            self.payload.insert(node, kind);
        }
        Ok(node)
    }

    fn text(&mut self, text: &str, size: f32, line_height: f32, color: Color, align: Align, margin: (f32, f32)) -> Result<NodeId> {
        let lines = wrap_lines(self.measure, text, size, self.inner_width);
        let height = lines.len() as f32 * line_height;
        self.leaf(
            self.inner_width,
            height,
            margin,
            Some(ItemKind::Text { lines, size, line_height, color, align }),
        )
    }

    fn block(&mut self, block: &Block) -> Result<NodeId> {
        match block {
            Block::Text(t) => self.text(t.text, t.size, t.line_height, t.color, t.align, (0.0, t.margin_bottom)),
            Block::Heading(text) => {
                self.text(text, HEADING_SIZE, HEADING_SIZE * 1.2, Color::BLACK, Align::Center, (0.0, 8.0))
            }
            Block::SectionTitle(text) => self.leaf(
                self.inner_width,
                SECTION_TITLE_SIZE * 1.2,
                (0.0, 0.0),
                Some(ItemKind::SectionTitle { text: *text, size: SECTION_TITLE_SIZE }),
            ),
            Block::Tags(tags) => {
                let mut children = Vec::with_capacity(tags.len());
                for tag in tags {
                    let w = self.measure.text_width(tag.text, TAG_SIZE) + TAG_PADDING.0 * 2.0;
                    let h = TAG_SIZE * 1.2 + TAG_PADDING.1 * 2.0;
                    let kind = ItemKind::Tag { text: tag.text, color: tag.color, size: TAG_SIZE };
                    children.push(self.leaf(w.min(self.inner_width), h, (0.0, 0.0), Some(kind))?);
                }
                self.tree
                    .new_with_children(
                        Style {
                            flex_direction: FlexDirection::Row,
                            flex_wrap: FlexWrap::Wrap,
                            justify_content: Some(JustifyContent::Center),
                            gap: Size { width: length(8.0), height: length(8.0) },
                            size: Size { width: length(self.inner_width), height: auto() },
                            flex_shrink: 0.0,
                            ..Default::default()
                        },
                        &children,
                    )
                    .map_err(layout_err)
            }
            Block::Image { asset, height_ratio } => self.leaf(
                self.inner_width,
                self.inner_width * height_ratio,
                (10.0, 10.0),
                Some(ItemKind::Image { asset: *asset }),
            ),
            Block::Stickers(board) => {
                let index = self.boards.len();
                let node = self.leaf(
                    self.inner_width,
                    board.height,
                    (board.margin_vertical, board.margin_vertical),
                    Some(ItemKind::StickerBoard { board: index, backdrop: board.backdrop }),
                )?;
                let stickers = board.stickers.iter().map(|s| (s.asset, s.offset)).collect();
                self.boards.push((node, stickers));
                Ok(node)
            }
            Block::Divider(text) => self.leaf(
                self.inner_width,
                DIVIDER_SIZE * 1.2,
                (40.0, 40.0),
                Some(ItemKind::Divider { text: *text, size: DIVIDER_SIZE }),
            ),
            Block::Link { label, url } => {
                let w = self.measure.text_width(label, LINK_SIZE).min(self.inner_width);
                self.leaf(w, 24.0, (4.0, 4.0), Some(ItemKind::Link { label: *label, url: *url, size: LINK_SIZE }))
            }
            Block::Spacer(h) => self.leaf(self.inner_width, *h, (0.0, 0.0), None),
        }
    }
}

/// 计算面板内容布局；content_width 为滚动区域宽度
pub fn layout_panel(content: &PanelContent, content_width: f32, measure: &dyn TextMeasure) -> Result<PanelLayout> {
    let content_width = content_width.max(1.0);
    let inner_width = (content_width - content.padding_horizontal * 2.0).max(1.0);
    let mut builder = Builder {
        tree: TaffyTree::new(),
        payload: HashMap::new(),
        measure,
        inner_width,
        boards: Vec::new(),
    };

    let mut section_nodes = Vec::with_capacity(content.sections.len());
    for section in &content.sections {
        let mut children = Vec::with_capacity(section.blocks.len());
        for block in &section.blocks {
            children.push(builder.block(block)?);
        }
        let node = builder
            .tree
            .new_with_children(
                Style {
                    flex_direction: FlexDirection::Column,
                    align_items: Some(AlignItems::Center),
                    flex_shrink: 0.0,
                    ..Default::default()
                },
                &children,
            )
            .map_err(layout_err)?;
        section_nodes.push((node, section.tracked));
    }

    let children: Vec<NodeId> = section_nodes.iter().map(|(n, _)| *n).collect();
    let root = builder
        .tree
        .new_with_children(
            Style {
                flex_direction: FlexDirection::Column,
                size: Size { width: length(content_width), height: auto() },
                padding: taffy::Rect {
                    left: length(content.padding_horizontal),
                    right: length(content.padding_horizontal),
                    top: length(content.padding_vertical),
                    bottom: length(content.padding_vertical),
                },
                ..Default::default()
            },
            &children,
        )
        .map_err(layout_err)?;

    builder
        .tree
        .compute_layout(
            root,
            Size { width: AvailableSpace::Definite(content_width), height: AvailableSpace::MaxContent },
        )
        .map_err(layout_err)?;

    let mut result = PanelLayout {
        content_width,
        content_height: builder.tree.layout(root).map_err(layout_err)?.size.height,
        ..Default::default()
    };

    let mut origins = HashMap::new();
    collect(&builder.tree, root, 0.0, 0.0, &builder.payload, &mut origins, &mut result.items)?;

    for (node, tracked) in &section_nodes {
        if *tracked {
            if let Some(rect) = origins.get(node) {
                result.section_offsets.push(rect.y);
            }
        }
    }

    for (node, stickers) in &builder.boards {
        let Some(rect) = origins.get(node).copied() else { continue };
        let center = rect.center();
        let stickers = stickers
            .iter()
            .map(|(asset, (dx, dy))| (*asset, Point::new(center.x + dx, center.y + dy)))
            .collect();
        result.boards.push(BoardStickers { rect, stickers });
    }

    log::debug!(
        "📐 Panel layout {:?}: {} items, height {:.0}, sections {:?}",
        content.kind,
        result.items.len(),
        result.content_height,
        result.section_offsets
    );
    Ok(result)
}

/// 递归收集绝对坐标
fn collect(
    tree: &TaffyTree,
    node: NodeId,
    offset_x: f32,
    offset_y: f32,
    payload: &HashMap<NodeId, ItemKind>,
    origins: &mut HashMap<NodeId, Rect>,
    items: &mut Vec<LayoutItem>,
) -> Result<()> {
    let layout = tree.layout(node).map_err(layout_err)?;
    let x = offset_x + layout.location.x;
    let y = offset_y + layout.location.y;
    let rect = Rect::new(x, y, layout.size.width, layout.size.height);
    origins.insert(node, rect);

    if let Some(kind) = payload.get(&node) {
        items.push(LayoutItem { rect, kind: kind.clone() });
    }

    for child in tree.children(node).map_err(layout_err)? {
        collect(tree, child, x, y, payload, origins, items)?;
    }
    Ok(())
}

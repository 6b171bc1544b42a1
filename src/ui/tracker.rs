//! 侧边追踪器 - 根据滚动位置计算当前所在的 section

/// section 偏移在布局完成后才记录，未记录的为 None
#[derive(Debug, Clone)]
pub struct SectionTracker {
    offsets: Vec<Option<f32>>,
    lookahead: f32,
    current: usize,
}

impl SectionTracker {
    pub fn new(section_count: usize, lookahead: f32) -> Self {
        Self {
            offsets: vec![None; section_count],
            lookahead,
            current: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn lookahead(&self) -> f32 {
        self.lookahead
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// 记录第 index 个 section 相对滚动容器的偏移
    pub fn record(&mut self, index: usize, offset: f32) {
        if index >= self.offsets.len() {
            self.offsets.resize(index + 1, None);
        }
        self.offsets[index] = Some(offset);
    }

    pub fn record_all(&mut self, offsets: &[f32]) {
        for (i, offset) in offsets.iter().enumerate() {
            self.record(i, *offset);
        }
    }

    pub fn offset(&self, index: usize) -> Option<f32> {
        self.offsets.get(index).copied().flatten()
    }

    /// 当前下标 = 最后一个满足 offset - lookahead <= scroll_y 的 section，都不满足时为 0
    pub fn update(&mut self, scroll_y: f32) -> usize {
        self.current = self
            .offsets
            .iter()
            .enumerate()
            .filter_map(|(i, offset)| offset.map(|o| (i, o)))
            .filter(|(_, o)| o - self.lookahead <= scroll_y)
            .map(|(i, _)| i)
            .last()
            .unwrap_or(0);
        self.current
    }

    /// 点击第 index 项时要滚动到的位置；偏移未记录时返回 None
    pub fn target_for(&self, index: usize) -> Option<f32> {
        self.offset(index)
    }
}

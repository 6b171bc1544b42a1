//! 自定义滚动条的滑块几何

/// 滑块最小高度
pub const MIN_THUMB: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollIndicator {
    pub container_height: f32,
    pub content_height: f32,
}

impl ScrollIndicator {
    pub fn new(container_height: f32, content_height: f32) -> Self {
        Self { container_height, content_height }
    }

    /// 内容没有超出容器时不显示
    pub fn is_visible(&self) -> bool {
        self.content_height > self.container_height
    }

    /// 滑块高度 = container² / content，分母至少为 1
    pub fn thumb_height(&self) -> f32 {
        let ratio = self.container_height / self.content_height.max(1.0);
        (self.container_height * ratio).max(MIN_THUMB).min(self.container_height.max(MIN_THUMB))
    }

    /// 把 [0, content - container] 映射到 [0, container - thumb]，两端夹紧
    pub fn thumb_offset(&self, scroll_y: f32) -> f32 {
        let input_max = (self.content_height - self.container_height).max(1.0);
        let output_max = (self.container_height - self.thumb_height()).max(1.0);
        (scroll_y.clamp(0.0, input_max) / input_max) * output_max
    }
}

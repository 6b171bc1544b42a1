//! 渲染相关逻辑

use mini_folio::Canvas;

/// 把逻辑像素画布按缩放系数铺到窗口缓冲区（最近邻采样）
pub fn present_to_buffer(buffer: &mut [u32], buffer_width: u32, buffer_height: u32, canvas: &Canvas, scale_factor: f64) {
    let canvas_width = canvas.width();
    let canvas_height = canvas.height();
    if canvas_width == 0 || canvas_height == 0 {
        return;
    }
    let pixels = canvas.pixels();
    let inv_scale = 1.0 / scale_factor.max(0.01);

    for y in 0..buffer_height {
        let src_y = ((y as f64 * inv_scale) as u32).min(canvas_height - 1);
        for x in 0..buffer_width {
            let dst_idx = (y * buffer_width + x) as usize;
            if dst_idx >= buffer.len() {
                return;
            }
            let src_x = (x as f64 * inv_scale) as u32;
            buffer[dst_idx] = if src_x < canvas_width {
                pixels[(src_y * canvas_width + src_x) as usize].to_xrgb()
            } else {
                0x00FF_FFFF
            };
        }
    }
}

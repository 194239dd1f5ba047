//! Viewport math for the scrollable button strip

/// Linear interpolation, `t = 0` → `from`, `t = 1` → `to`.
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Horizontal scroll offset that brings `[x, x + width)` into the visible
/// window `[content_x, content_x + content_width)`.
///
/// Scrolls the minimum amount needed; an already visible span keeps the
/// current offset.
pub fn auto_scroll_x(x: f64, width: f64, content_x: f64, content_width: f64) -> f64 {
    if x < content_x {
        return x;
    }

    let content_right = content_x + content_width;
    let right = x + width;
    if right > content_right {
        return content_x + (right - content_right);
    }

    content_x
}

//! Fixed-width progress bars for goal and budget cards.

/// Renders `percent` as a glyph strip, clamped to the bar width.
pub fn bar(percent: u32, width: usize) -> String {
    let clamped = percent.min(100) as usize;
    let filled = (clamped * width) / 100;
    let mut strip = String::with_capacity(width);
    for idx in 0..width {
        strip.push(if idx < filled { '█' } else { '░' });
    }
    strip
}

/// Bar plus a trailing percentage label.
pub fn labeled_bar(percent: u32, width: usize) -> String {
    format!("{} {:>3}%", bar(percent, width), percent)
}

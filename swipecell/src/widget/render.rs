//! Rendering and layout measurement for the swipe cell.
//!
//! The button layer is drawn first at the right edge; the content layer is
//! blitted over it, shifted by the clamped offset, so the button shows
//! through exactly where the content has moved away.

use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, Cell};
use crate::rect::Rect;
use crate::style::Style;

use super::state::{HitRegions, Inner};
use super::SwipeCell;

/// Horizontal padding inside the action button, in cells.
const BUTTON_PADDING: u16 = 2;

impl SwipeCell {
    /// Draw the widget into `buf` at `area`, measuring the action button and
    /// recording the hit regions used for tap dispatch.
    pub fn render(&self, buf: &mut Buffer, area: Rect) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if area.is_empty() {
            inner.regions = HitRegions::default();
            return;
        }

        // Measure once per layout pass; the stored width only moves when the
        // layout actually changed.
        let width = measure_button_width(&inner.label, area.width);
        if (inner.button_width - width as f32).abs() > f32::EPSILON {
            log::debug!("[swipe] button width measured: {width}");
            inner.button_width = width as f32;
        }

        fill(buf, area, inner.styles.container);

        // Button layer beneath the content, flush right.
        let button_area = Rect::new(area.right() - width, area.y, width, area.height);
        draw_button(buf, button_area, &inner);

        // Content layer, shifted by the render-time clamped offset.
        // Disabled pins it at rest regardless of the stored position.
        let offset = if inner.disabled {
            0.0
        } else {
            inner.position.rendered_x(inner.button_width)
        };
        let shift = offset.round() as i32;

        let mut content_buf = Buffer::new(area.width, area.height);
        inner
            .content
            .render(&mut content_buf, Rect::from_size(area.width, area.height));
        buf.blit_shifted(&content_buf, area, shift);

        // After the shift the content covers [area.x, visible_right); the
        // button is revealed from there to the right edge.
        let visible_right =
            (area.right() as i32 + shift).clamp(area.x as i32, area.right() as i32) as u16;
        let revealed = Rect::new(
            visible_right,
            area.y,
            area.right() - visible_right,
            area.height,
        );
        let overlay = if inner.swipe_open {
            Some(Rect::new(
                area.x,
                area.y,
                visible_right - area.x,
                area.height,
            ))
        } else {
            None
        };
        inner.regions = HitRegions {
            area,
            revealed,
            overlay,
        };
    }
}

/// Desired width from the label, clamped to one-third to three-quarters of
/// the container.
fn measure_button_width(label: &str, container: u16) -> u16 {
    let desired = label.width() as u16 + BUTTON_PADDING * 2;
    let min = container / 3;
    // Widened so the intermediate product can't overflow u16.
    let max = (container as u32 * 3 / 4) as u16;
    desired.clamp(min, max)
}

fn draw_button(buf: &mut Buffer, area: Rect, inner: &Inner) {
    if area.is_empty() {
        return;
    }
    fill(buf, area, inner.styles.button);

    // Rule along the button's left edge, painted with the container slot's
    // foreground.
    if let Some(rule) = inner.styles.button_container.foreground {
        let bg = inner
            .styles
            .button
            .background
            .unwrap_or(Cell::default().bg);
        for y in area.y..area.bottom() {
            buf.set(area.x, y, Cell::new('│').with_fg(rule).with_bg(bg));
        }
    }

    // Centered label.
    let label_width = inner.label.width() as u16;
    let x = area.x + area.width.saturating_sub(label_width) / 2;
    let y = area.y + area.height / 2;
    buf.set_str(x, y, &inner.label, inner.styles.button_text);
}

fn fill(buf: &mut Buffer, area: Rect, style: Style) {
    let Some(bg) = style.background else {
        return;
    };
    let fg = style.foreground.unwrap_or(Cell::default().fg);
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            buf.set(x, y, Cell::new(' ').with_fg(fg).with_bg(bg));
        }
    }
}

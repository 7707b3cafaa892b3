//! Tab strip geometry: where each tab sits, where its close glyph is, and
//! what to draw for it. Pure arithmetic; `ui::tab_bar` does the painting.

use crate::app::domain::document::DocumentId;
use crate::app::domain::geometry::{Point, Rect};

pub const CLOSE_BUTTON_SIZE: i32 = 15;
/// Gap between the close glyph and the tab's right edge.
pub const CLOSE_BUTTON_INSET: i32 = 5;
pub const TITLE_INSET: i32 = 8;
const TITLE_GAP: i32 = 6;
pub const MIN_TAB_WIDTH: i32 = 60;
pub const MAX_TAB_WIDTH: i32 = 220;
pub const TAB_GAP: i32 = 1;

/// Lay tabs out left to right starting at `origin`, each sized to fit its
/// title (as measured by the caller) plus the close glyph.
pub fn layout_tabs<I>(title_widths: I, origin: Point, height: i32) -> Vec<Rect>
where
    I: IntoIterator<Item = i32>,
{
    let mut x = origin.x;
    title_widths
        .into_iter()
        .map(|text_w| {
            let width = (TITLE_INSET + text_w + TITLE_GAP + CLOSE_BUTTON_SIZE + CLOSE_BUTTON_INSET)
                .clamp(MIN_TAB_WIDTH, MAX_TAB_WIDTH);
            let rect = Rect::new(x, origin.y, width, height);
            x += width + TAB_GAP;
            rect
        })
        .collect()
}

/// Fixed-size glyph anchored to the tab's right edge, vertically centered.
pub fn close_button_rect(tab: Rect) -> Rect {
    Rect::new(
        tab.right() - CLOSE_BUTTON_SIZE - CLOSE_BUTTON_INSET,
        tab.y + (tab.h - CLOSE_BUTTON_SIZE) / 2,
        CLOSE_BUTTON_SIZE,
        CLOSE_BUTTON_SIZE,
    )
}

/// Index of the tab whose close glyph contains `p`.
pub fn hit_test_close_button(tab_rects: &[Rect], p: Point) -> Option<usize> {
    tab_rects
        .iter()
        .position(|r| close_button_rect(*r).contains(p))
}

/// Index of the tab whose body contains `p`.
pub fn hit_test_tab(tab_rects: &[Rect], p: Point) -> Option<usize> {
    tab_rects.iter().position(|r| r.contains(p))
}

/// Everything needed to paint one tab.
#[derive(Debug, Clone, PartialEq)]
pub struct TabChrome {
    pub index: usize,
    pub id: DocumentId,
    pub title: String,
    pub is_active: bool,
    pub bounds: Rect,
    /// Left-aligned title area, clear of the close glyph.
    pub title_box: Rect,
    pub close_button: Rect,
    /// The two diagonals of the "X".
    pub close_strokes: [(Point, Point); 2],
}

impl TabChrome {
    pub fn new(index: usize, id: DocumentId, title: String, is_active: bool, bounds: Rect) -> Self {
        let close_button = close_button_rect(bounds);
        let title_box = Rect::new(
            bounds.x + TITLE_INSET,
            bounds.y,
            (close_button.x - TITLE_GAP - (bounds.x + TITLE_INSET)).max(0),
            bounds.h,
        );
        let (left, top) = (close_button.x, close_button.y);
        let (right, bottom) = (close_button.right() - 1, close_button.bottom() - 1);
        Self {
            index,
            id,
            title,
            is_active,
            bounds,
            title_box,
            close_button,
            close_strokes: [
                (Point::new(left, top), Point::new(right, bottom)),
                (Point::new(right, top), Point::new(left, bottom)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_rect_anchored_top_right() {
        let tab = Rect::new(100, 30, 120, 25);
        let close = close_button_rect(tab);
        assert_eq!(close, Rect::new(100 + 120 - 15 - 5, 30 + 5, 15, 15));
        assert_eq!(close.right(), tab.right() - CLOSE_BUTTON_INSET);
    }

    #[test]
    fn test_layout_is_contiguous_and_clamped() {
        let rects = layout_tabs([40, 0, 1000], Point::new(0, 30), 28);
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[0].w, TITLE_INSET + 40 + TITLE_GAP + CLOSE_BUTTON_SIZE + CLOSE_BUTTON_INSET);
        assert_eq!(rects[1].x, rects[0].right() + TAB_GAP);
        assert_eq!(rects[1].w, MIN_TAB_WIDTH);
        assert_eq!(rects[2].w, MAX_TAB_WIDTH);
        assert!(rects.iter().all(|r| r.y == 30 && r.h == 28));
    }

    #[test]
    fn test_hit_inside_glyph() {
        let rects = layout_tabs([40, 40], Point::new(0, 0), 25);
        let glyph = close_button_rect(rects[1]);
        let center = Point::new(glyph.x + glyph.w / 2, glyph.y + glyph.h / 2);
        assert_eq!(hit_test_close_button(&rects, center), Some(1));
        assert_eq!(hit_test_close_button(&rects, Point::new(glyph.x + 1, glyph.y + 1)), Some(1));
    }

    #[test]
    fn test_miss_outside_all_glyphs() {
        let rects = layout_tabs([40, 40], Point::new(0, 0), 25);
        // Title area of the first tab
        assert_eq!(hit_test_close_button(&rects, Point::new(rects[0].x + 10, 12)), None);
        assert_eq!(hit_test_tab(&rects, Point::new(rects[0].x + 10, 12)), Some(0));
        // Right of the glyph, inside the inset
        let glyph = close_button_rect(rects[0]);
        assert_eq!(hit_test_close_button(&rects, Point::new(glyph.right() + 1, glyph.y + 2)), None);
        // Below the strip
        assert_eq!(hit_test_close_button(&rects, Point::new(glyph.x + 2, 100)), None);
        assert_eq!(hit_test_close_button(&[], Point::new(0, 0)), None);
    }

    #[test]
    fn test_chrome_geometry() {
        let bounds = Rect::new(10, 0, 100, 25);
        let chrome = TabChrome::new(0, DocumentId(7), "a.txt*".to_string(), true, bounds);
        assert_eq!(chrome.close_button, close_button_rect(bounds));
        assert_eq!(chrome.title_box.x, 10 + TITLE_INSET);
        assert!(chrome.title_box.right() <= chrome.close_button.x);

        let [(a, b), (c, d)] = chrome.close_strokes;
        let glyph = chrome.close_button;
        assert_eq!(a, Point::new(glyph.x, glyph.y));
        assert_eq!(b, Point::new(glyph.right() - 1, glyph.bottom() - 1));
        assert_eq!(c, Point::new(glyph.right() - 1, glyph.y));
        assert_eq!(d, Point::new(glyph.x, glyph.bottom() - 1));
        for p in [a, b, c, d] {
            assert!(glyph.contains(p));
        }
    }
}

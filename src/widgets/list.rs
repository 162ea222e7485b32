//! Scrolling list rendering.
//!
//! Draws only the rows [`LazyListState::visible_rows`] reports, each shifted
//! by the scroll position, through a clipped draw target so partially
//! visible rows are cut at the viewport edges.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::Text,
};
use heapless::String;

use crate::{
    colors::{ON_SURFACE_VARIANT, OUTLINE_VARIANT, PRIMARY, PRIMARY_CONTAINER, SURFACE},
    scroll::LazyListState,
    styles::{BODY_STYLE, CAPTION_STYLE, LEFT_MIDDLE, LEFT_TOP},
    widgets::{
        icons::draw_chevron_icon,
        primitives::{draw_divider, fill_rect},
    },
};

/// Horizontal text inset.
const ROW_PADDING_X: i32 = 16;

/// Line pitch for caption rows.
const CAPTION_LINE_HEIGHT: i32 = 10;

/// Longest headline a row can hold.
pub const ROW_TEXT_LEN: usize = 32;

/// What a single row shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowContent {
    /// Small multi-line helper text.
    Caption(&'static [&'static str]),
    /// One line of body text.
    Headline(String<ROW_TEXT_LEN>),
    /// Navigable entry with a chevron; `selected` draws the highlight.
    Link { label: &'static str, selected: bool },
}

impl RowContent {
    /// Headline built from format arguments. Output past [`ROW_TEXT_LEN`] is dropped.
    pub fn headline(args: core::fmt::Arguments<'_>) -> Self {
        let mut s = String::new();
        let _ = s.write_fmt(args);
        Self::Headline(s)
    }
}

/// Draw the visible rows of `list` into `area`.
///
/// `row` maps an index to its content. Returns the number of rows drawn.
pub fn draw_list<D, F>(display: &mut D, list: &LazyListState, area: Rectangle, row: F) -> u32
where
    D: DrawTarget<Color = Rgb565>,
    F: Fn(usize) -> RowContent,
{
    let mut clipped = display.clipped(&area);
    fill_rect(&mut clipped, area, SURFACE);

    let row_height = list.row_height();
    let scroll = list.scroll_px() as i32;
    let mut drawn = 0;
    for index in list.visible_rows() {
        let top = area.top_left.y + (index as u32 * row_height) as i32 - scroll;
        let bounds = Rectangle::new(Point::new(area.top_left.x, top), Size::new(area.size.width, row_height));
        draw_row(&mut clipped, bounds, &row(index));
        drawn += 1;
    }
    drawn
}

/// Row index under `point`, if any.
pub fn row_at(list: &LazyListState, area: Rectangle, point: Point) -> Option<usize> {
    if !area.contains(point) || list.row_height() == 0 {
        return None;
    }
    let content_y = (point.y - area.top_left.y) as u32 + list.scroll_px();
    let index = (content_y / list.row_height()) as usize;
    (index < list.item_count()).then_some(index)
}

fn draw_row<D>(display: &mut D, bounds: Rectangle, content: &RowContent)
where
    D: DrawTarget<Color = Rgb565>,
{
    let center_y = bounds.center().y;
    let left = bounds.top_left.x + ROW_PADDING_X;

    match content {
        RowContent::Caption(lines) => {
            let block = lines.len() as i32 * CAPTION_LINE_HEIGHT;
            let mut y = bounds.top_left.y + (bounds.size.height as i32 - block) / 2;
            for line in *lines {
                Text::with_text_style(line, Point::new(left, y), CAPTION_STYLE, LEFT_TOP)
                    .draw(display)
                    .ok();
                y += CAPTION_LINE_HEIGHT;
            }
        }
        RowContent::Headline(text) => {
            Text::with_text_style(text, Point::new(left, center_y), BODY_STYLE, LEFT_MIDDLE)
                .draw(display)
                .ok();
        }
        RowContent::Link { label, selected } => {
            if *selected {
                fill_rect(display, bounds, PRIMARY_CONTAINER);
                fill_rect(
                    display,
                    Rectangle::new(bounds.top_left, Size::new(4, bounds.size.height)),
                    PRIMARY,
                );
            }
            Text::with_text_style(label, Point::new(left, center_y), BODY_STYLE, LEFT_MIDDLE)
                .draw(display)
                .ok();
            let right = bounds.top_left.x + bounds.size.width as i32;
            draw_chevron_icon(display, Point::new(right - ROW_PADDING_X, center_y), ON_SURFACE_VARIANT);
            let bottom = bounds.top_left.y + bounds.size.height as i32 - 1;
            draw_divider(display, bottom, left, right - 1, OUTLINE_VARIANT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::test_support::Framebuffer;

    const AREA: Rectangle = Rectangle::new(Point::new(0, 32), Size::new(240, 96));

    fn content(index: usize) -> RowContent {
        RowContent::headline(format_args!("Content Item {index}"))
    }

    #[test]
    fn test_headline_truncates() {
        let RowContent::Headline(s) = RowContent::headline(format_args!("{}", "x".repeat(100))) else {
            panic!("expected headline");
        };
        assert!(s.len() <= ROW_TEXT_LEN);
    }

    #[test]
    fn test_draws_only_visible_rows() {
        let mut fb = Framebuffer::new(Size::new(240, 160));
        let list = LazyListState::new(50, 32, 96);
        assert_eq!(draw_list(&mut fb, &list, AREA, content), 3);
    }

    #[test]
    fn test_partial_rows_are_clipped() {
        let mut fb = Framebuffer::new(Size::new(240, 160));
        let mut list = LazyListState::new(50, 32, 96);
        list.scroll_by(16.0);
        assert_eq!(draw_list(&mut fb, &list, AREA, content), 4, "Half rows at both edges count");

        assert_eq!(fb.count_in_rows(SURFACE, 0, 32), 0, "Nothing above the viewport");
        assert_eq!(fb.count_in_rows(SURFACE, 128, 160), 0, "Nothing below the viewport");
        assert!(fb.count_in_rows(SURFACE, 32, 128) > 0);
    }

    #[test]
    fn test_selected_link_is_highlighted() {
        let mut fb = Framebuffer::new(Size::new(240, 160));
        let list = LazyListState::new(2, 32, 96);
        draw_list(&mut fb, &list, AREA, |i| RowContent::Link {
            label: "Demo",
            selected: i == 1,
        });
        assert_eq!(fb.pixel(1, 32 + 40), Some(PRIMARY), "Selection marker on row 1");
        assert_eq!(fb.pixel(200, 32 + 40), Some(PRIMARY_CONTAINER));
        assert_eq!(fb.pixel(200, 32 + 8), Some(SURFACE), "Row 0 is not selected");
    }

    #[test]
    fn test_row_at() {
        let mut list = LazyListState::new(50, 32, 96);
        assert_eq!(row_at(&list, AREA, Point::new(10, 33)), Some(0));
        assert_eq!(row_at(&list, AREA, Point::new(10, 32 + 70)), Some(2));
        assert_eq!(row_at(&list, AREA, Point::new(10, 10)), None, "Above the viewport");

        list.scroll_by(40.0);
        assert_eq!(row_at(&list, AREA, Point::new(10, 33)), Some(1));
    }

    #[test]
    fn test_row_at_past_last_item() {
        let list = LazyListState::new(1, 32, 96);
        assert_eq!(row_at(&list, AREA, Point::new(10, 32 + 50)), None);
    }
}

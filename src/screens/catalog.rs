//! Catalog screen: the list of available demos.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, primitives::Rectangle};

use crate::{
    colors::SURFACE,
    config::{LIST_ROW_HEIGHT, LIST_VIEWPORT_HEIGHT, SCREEN_WIDTH, TOP_BAR_HEIGHT},
    pages::Page,
    scroll::LazyListState,
    widgets::{RowContent, draw_list, draw_top_bar, row_at},
};

/// Demos in display order.
const ENTRIES: [(&str, Page); 1] = [("Docked FAB bottom app bar", Page::DockedFab)];

const LIST_AREA: Rectangle = Rectangle::new(
    Point::new(0, TOP_BAR_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, LIST_VIEWPORT_HEIGHT),
);

/// Catalog selection state.
#[derive(Clone, Debug)]
pub struct Catalog {
    list: LazyListState,
    selected: usize,
}

impl Catalog {
    pub const fn new() -> Self {
        Self {
            list: LazyListState::new(ENTRIES.len(), LIST_ROW_HEIGHT, LIST_VIEWPORT_HEIGHT),
            selected: 0,
        }
    }

    #[inline]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    pub const fn select_next(&mut self) {
        if self.selected + 1 < ENTRIES.len() {
            self.selected += 1;
        }
    }

    pub const fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Page the selected entry opens.
    pub const fn open_selected(&self) -> Page {
        ENTRIES[self.selected].1
    }

    /// Select and open the entry under `point`.
    pub fn click(&mut self, point: Point) -> Option<Page> {
        let index = row_at(&self.list, LIST_AREA, point)?;
        self.selected = index;
        Some(self.open_selected())
    }

    pub fn draw<D>(&self, display: &mut D, fps: Option<u32>)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        display.clear(SURFACE).ok();
        draw_list(display, &self.list, LIST_AREA, |i| RowContent::Link {
            label: ENTRIES[i].0,
            selected: i == self.selected,
        });
        draw_top_bar(display, Page::Catalog.title(), false, fps);
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

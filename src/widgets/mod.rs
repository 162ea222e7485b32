//! Widget components for the catalog screens.
//!
//! - [`header`]: Top app bar with title and back arrow
//! - [`bottom_bar`]: Bottom app bar with actions and the cut-corner FAB
//! - [`list`]: Clipped, scrolled list rows
//! - [`logo`]: Geometric splash logo
//! - [`icons`]: Small line-art icons
//! - [`primitives`]: Shared low-level drawing helpers
//!
//! Every drawing function is generic over `DrawTarget<Color = Rgb565>` and
//! ignores draw errors with `.ok()`, so the same code draws into the
//! simulator window and into the in-memory framebuffer used by tests.
//! Styles come from [`crate::styles`] as `const` values and dynamic text is
//! formatted into `heapless::String`.

pub mod bottom_bar;
pub mod header;
pub mod icons;
pub mod list;
pub mod logo;
pub mod primitives;

#[cfg(test)]
pub(crate) mod test_support;

pub use bottom_bar::{BarAction, draw_bottom_bar};
pub use header::{BACK_BUTTON_BOUNDS, draw_top_bar};
pub use list::{RowContent, draw_list, row_at};
pub use logo::draw_logo;

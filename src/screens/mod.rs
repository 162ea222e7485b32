//! Full-screen pages.
//!
//! # Navigation
//!
//! 1. **Splash** ([`splash`]): Particle field and animated logo, timed by
//!    [`crate::splash::SplashSequencer`]
//! 2. **Catalog** ([`catalog`]): List of component demos
//! 3. **Docked FAB** ([`docked_fab`]): Scroll-driven bottom app bar demo
//!
//! # Overlay
//!
//! - **Debug Page** ([`debug`]): Frame timing, counters, visibility state, and
//!   the event log (toggled with `F1`)
//!
//! Screens own their interaction state and draw into any
//! `DrawTarget<Color = Rgb565>`. Page switching and input dispatch live in
//! `main.rs`.

pub mod catalog;
pub mod debug;
pub mod docked_fab;
pub mod splash;

pub use catalog::Catalog;
pub use debug::draw_debug_page;
pub use docked_fab::{DemoAction, DockedFabDemo, TickOutcome};
pub use splash::draw_splash;

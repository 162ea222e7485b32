// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32, u32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::similar_names)] // x0/x1, y0/y1 in geometry helpers are clear

//! Expressive component catalog.
//!
//! A small design-system showcase rendered with `embedded-graphics`: a splash
//! sequence, a catalog list, and a docked FAB demo whose bottom app bar hides
//! while the list scrolls toward its end.
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`scroll`] | Scroll-direction visibility gate and the lazy list model |
//! | [`splash`] | Splash timeline with a once-only completion callback |
//! | [`particles`] | Seeded decorative particle field |
//! | [`animations`] / [`easing`] | Tweens, oscillators, springs, slide transitions |
//! | [`screens`] / [`widgets`] | Drawing for every page |
//! | [`config`] / [`error`] | Layout constants and validated startup settings |
//! | [`profiling`] | Frame timing and the on-screen event log |
//!
//! Everything here is independent of the SDL window, so the binary in
//! `main.rs` only wires input events and the frame loop to these modules.

pub mod animations;
pub mod colors;
pub mod config;
pub mod easing;
pub mod error;
pub mod pages;
pub mod particles;
pub mod profiling;
pub mod screens;
pub mod scroll;
pub mod splash;
pub mod styles;
pub mod widgets;

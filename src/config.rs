//! Application configuration: compile-time constants plus startup settings.
//!
//! Layout and timing values are `const` so the drawing code never recomputes
//! them per frame. The few knobs that make sense to change at startup (particle
//! seed, window scale) come from the command line via [`Cli`] and are validated
//! into [`Settings`].

use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (portrait, phone-like).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Screen center X coordinate.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Default window scale factor.
pub const DEFAULT_SCALE: u32 = 2;

/// Smallest accepted window scale.
pub const MIN_SCALE: u32 = 1;

/// Largest accepted window scale.
pub const MAX_SCALE: u32 = 4;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~60 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(16);

/// Splash entry scale-in duration.
pub const SPLASH_ENTRY_DURATION: Duration = Duration::from_millis(1000);

/// Hold time after the entry animation before the splash completes.
pub const SPLASH_DWELL: Duration = Duration::from_millis(2000);

/// Half period of the logo rotation oscillation.
pub const LOGO_ROTATION_PERIOD: Duration = Duration::from_millis(1000);

/// Half period of the logo pulse oscillation.
pub const LOGO_PULSE_PERIOD: Duration = Duration::from_millis(800);

/// Half period of the logo bounce oscillation.
pub const LOGO_BOUNCE_PERIOD: Duration = Duration::from_millis(600);

/// Bottom bar slide in/out duration.
pub const BAR_SLIDE_DURATION: Duration = Duration::from_millis(300);

// =============================================================================
// Splash Configuration
// =============================================================================

/// Default number of decorative particles.
pub const DEFAULT_PARTICLES: usize = 27;

/// Upper bound for the particle field (fixed capacity).
pub const MAX_PARTICLES: usize = 256;

/// Logo body diameter at scale 1.0.
pub const LOGO_SIZE: u32 = 96;

/// Logo rotation bounds in degrees.
pub const LOGO_ROTATION_RANGE: (f32, f32) = (-10.0, 10.0);

/// Logo pulse bounds (scale multiplier).
pub const LOGO_PULSE_RANGE: (f32, f32) = (1.0, 1.1);

/// Logo bounce bounds in pixels (negative is up).
pub const LOGO_BOUNCE_RANGE: (f32, f32) = (0.0, -20.0);

// =============================================================================
// App Bar / List Layout
// =============================================================================

/// Top app bar height.
pub const TOP_BAR_HEIGHT: u32 = 32;

/// Bottom app bar height.
pub const BOTTOM_BAR_HEIGHT: u32 = 48;

/// FAB side length at scale 1.0.
pub const FAB_SIZE: u32 = 36;

/// Size of the FAB's cut corners.
pub const FAB_CORNER_CUT: u32 = 10;

/// FAB scale while "clicked".
pub const FAB_PRESSED_SCALE: f32 = 1.2;

/// Height of every list row (including the instructions header row).
pub const LIST_ROW_HEIGHT: u32 = 32;

/// Number of "Content Item N" rows below the instructions header.
pub const LIST_CONTENT_ITEMS: usize = 50;

/// Visible list height (everything below the top app bar).
pub const LIST_VIEWPORT_HEIGHT: u32 = SCREEN_HEIGHT - TOP_BAR_HEIGHT;

// =============================================================================
// Scroll Physics
// =============================================================================

/// Velocity added per arrow-key press (pixels per second).
pub const KEY_FLING_VELOCITY: f32 = 600.0;

/// Velocity added per mouse wheel notch (pixels per second).
pub const WHEEL_FLING_VELOCITY: f32 = 450.0;

/// Exponential fling decay rate (per second).
pub const FLING_DECAY: f32 = 4.0;

/// Fling stops once its speed drops below this (pixels per second).
pub const FLING_STOP_VELOCITY: f32 = 20.0;

// =============================================================================
// Command Line
// =============================================================================

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Expressive component catalog simulator")]
pub struct Cli {
    /// Seed for the splash particle field (random when omitted).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Window pixel scale.
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: u32,

    /// Number of splash particles.
    #[arg(long, default_value_t = DEFAULT_PARTICLES)]
    pub particles: usize,

    /// Start on the catalog instead of the splash screen.
    #[arg(long)]
    pub skip_splash: bool,
}

/// Validated startup settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: u64,
    pub scale: u32,
    pub particles: usize,
    pub skip_splash: bool,
}

impl Settings {
    /// Validate command-line input. `fallback_seed` is used when no seed was given.
    pub fn from_cli(cli: &Cli, fallback_seed: u64) -> Result<Self, ConfigError> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&cli.scale) {
            return Err(ConfigError::ScaleOutOfRange(cli.scale));
        }
        if cli.particles > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles(cli.particles));
        }
        Ok(Self {
            seed: cli.seed.unwrap_or(fallback_seed),
            scale: cli.scale,
            particles: cli.particles,
            skip_splash: cli.skip_splash,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: DEFAULT_SCALE,
            particles: DEFAULT_PARTICLES,
            skip_splash: false,
        }
    }
}

// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // i32->f32 for wheel deltas
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Expressive catalog simulator.
//!
//! Opens an SDL window through `embedded-graphics-simulator` and runs the
//! catalog: splash, demo list, and the docked FAB demo.
//!
//! # Controls
//!
//! | Key / Mouse | Page | Action |
//! |-------------|------|--------|
//! | `Enter` | Splash | Skip the splash |
//! | `Up` / `Down` | Catalog | Move selection |
//! | `Enter` / click | Catalog | Open the demo |
//! | `Up` / `Down` / wheel | Docked FAB | Fling the list |
//! | drag | Docked FAB | Scroll the list, release to fling |
//! | `Space` / click FAB | Docked FAB | Toggle the FAB bounce |
//! | `H` / `S` | Docked FAB | Home / Search actions (logged) |
//! | `Esc` / `Backspace` / back arrow | any | Back; exits from the catalog |
//! | `X` | any | Toggle the FPS readout |
//! | `F1` | any | Toggle the debug page |
//!
//! Toggle keys ignore OS key repeat; fling keys accept it.
//!
//! # Command Line
//!
//! ```text
//! catalog [--seed N] [--scale 1..4] [--particles N] [--skip-splash]
//! ```
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` to see gate
//! transitions.

use core::fmt::Write;
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use expressive_catalog::colors::BLACK;
use expressive_catalog::config::{
    Cli,
    FRAME_TIME,
    KEY_FLING_VELOCITY,
    SCREEN_HEIGHT,
    SCREEN_WIDTH,
    Settings,
    WHEEL_FLING_VELOCITY,
};
use expressive_catalog::pages::Page;
use expressive_catalog::particles::ParticleField;
use expressive_catalog::profiling::{DebugLog, LOG_LINE_LENGTH, ProfilingMetrics};
use expressive_catalog::screens::{Catalog, DemoAction, DockedFabDemo, draw_debug_page, draw_splash};
use expressive_catalog::splash::{LogoTransform, SplashSequencer};
use heapless::String;

/// Longest step fed to the animations (window drags can stall the loop).
const MAX_TICK: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli, rand::random()).context("invalid command-line arguments")?;
    log::info!(
        "starting: seed={} scale={} particles={}",
        settings.seed,
        settings.scale,
        settings.particles
    );

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(settings.scale).build();
    let mut window = Window::new("Expressive Catalog", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Main Loop State
    // ==========================================================================

    let field = ParticleField::generate(settings.seed, settings.particles, Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

    // Set by the splash callback; read once per frame
    let splash_done = Rc::new(Cell::new(false));
    let mut splash = if settings.skip_splash {
        None
    } else {
        let done = Rc::clone(&splash_done);
        Some(SplashSequencer::new(move || done.set(true)))
    };
    let splash_start = Instant::now();
    let mut splash_transform = LogoTransform::IDENTITY;

    let mut page = if settings.skip_splash { Page::Catalog } else { Page::Splash };
    let mut catalog = Catalog::new();
    let mut demo = DockedFabDemo::new();

    let mut show_debug = false;
    let mut show_fps = true;

    let mut metrics = ProfilingMetrics::new();
    let mut debug_log = DebugLog::new();
    debug_log.push("System started");
    log_page(&mut debug_log, page);

    let mut last_tick = Instant::now();

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    'frame: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => break 'frame,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Overlay keys first; the debug page swallows everything else
                    match keycode {
                        Keycode::F1 if !repeat => {
                            show_debug = !show_debug;
                            debug_log.push(if show_debug { "Debug: ON" } else { "Debug: OFF" });
                            continue;
                        }
                        Keycode::X if !repeat => {
                            show_fps = !show_fps;
                            debug_log.push(if show_fps { "FPS: ON" } else { "FPS: OFF" });
                            continue;
                        }
                        Keycode::ESCAPE if show_debug && !repeat => {
                            show_debug = false;
                            continue;
                        }
                        _ if show_debug => continue,
                        _ => {}
                    }

                    match (page, keycode) {
                        (_, Keycode::ESCAPE | Keycode::BACKSPACE) if !repeat => match page.back() {
                            Some(target) => go_to(&mut page, target, &mut demo, &mut debug_log),
                            None => break 'frame,
                        },
                        (Page::Splash, Keycode::RETURN) if !repeat => {
                            if let Some(seq) = splash.take() {
                                seq.cancel();
                                debug_log.push("Splash skipped");
                            }
                            go_to(&mut page, Page::Catalog, &mut demo, &mut debug_log);
                        }
                        (Page::Catalog, Keycode::UP) => catalog.select_previous(),
                        (Page::Catalog, Keycode::DOWN) => catalog.select_next(),
                        (Page::Catalog, Keycode::RETURN) if !repeat => {
                            go_to(&mut page, catalog.open_selected(), &mut demo, &mut debug_log);
                        }
                        (Page::DockedFab, Keycode::UP) => demo.fling(-KEY_FLING_VELOCITY),
                        (Page::DockedFab, Keycode::DOWN) => demo.fling(KEY_FLING_VELOCITY),
                        (Page::DockedFab, Keycode::SPACE) if !repeat => {
                            let pressed = demo.toggle_fab();
                            handle_demo_action(DemoAction::Fab(pressed), &mut metrics, &mut debug_log);
                        }
                        (Page::DockedFab, Keycode::H) if !repeat => {
                            handle_demo_action(DemoAction::Home, &mut metrics, &mut debug_log);
                        }
                        (Page::DockedFab, Keycode::S) if !repeat => {
                            handle_demo_action(DemoAction::Search, &mut metrics, &mut debug_log);
                        }
                        _ => {}
                    }
                }
                SimulatorEvent::MouseButtonDown { point, .. } if !show_debug => match page {
                    Page::Splash => {}
                    Page::Catalog => {
                        if let Some(target) = catalog.click(point) {
                            go_to(&mut page, target, &mut demo, &mut debug_log);
                        }
                    }
                    Page::DockedFab => match demo.press(point) {
                        Some(DemoAction::Back) => go_to(&mut page, Page::Catalog, &mut demo, &mut debug_log),
                        Some(action) => handle_demo_action(action, &mut metrics, &mut debug_log),
                        None => {}
                    },
                },
                SimulatorEvent::MouseMove { point, .. } if page == Page::DockedFab => demo.drag_to(point),
                SimulatorEvent::MouseButtonUp { .. } if page == Page::DockedFab => demo.release(),
                SimulatorEvent::MouseWheel { scroll_delta, .. } if page == Page::DockedFab && !show_debug => {
                    // Wheel up (positive y) scrolls back toward the start
                    demo.fling(-(scroll_delta.y as f32) * WHEEL_FLING_VELOCITY);
                }
                _ => {}
            }
        }

        // ======================================================================
        // Update
        // ======================================================================

        let now = Instant::now();
        let dt = now.duration_since(last_tick).min(MAX_TICK);
        last_tick = now;

        match page {
            Page::Splash => {
                if let Some(seq) = splash.as_mut() {
                    splash_transform = seq.tick(splash_start.elapsed()).transform;
                }
                if splash_done.get() {
                    splash = None;
                    debug_log.push("Splash finished");
                    go_to(&mut page, Page::Catalog, &mut demo, &mut debug_log);
                }
            }
            Page::Catalog => {}
            Page::DockedFab => {
                let outcome = demo.tick(dt);
                if outcome.gate_updated {
                    metrics.inc_gate_updates();
                }
                if let Some(visible) = outcome.bar_target {
                    metrics.inc_bar_toggles();
                    debug_log.push(if visible { "Bar shown" } else { "Bar hidden" });
                }
            }
        }

        // ======================================================================
        // Draw
        // ======================================================================

        let fps = show_fps.then(|| metrics.fps());
        if show_debug {
            let visibility = (page == Page::DockedFab).then(|| demo.visibility());
            draw_debug_page(&mut display, &metrics, &debug_log, visibility);
        } else {
            match page {
                Page::Splash => draw_splash(&mut display, &field, &splash_transform),
                Page::Catalog => catalog.draw(&mut display, fps),
                Page::DockedFab => {
                    let rows = demo.draw(&mut display, fps);
                    metrics.set_rows_drawn(rows);
                }
            }
        }

        // ======================================================================
        // Frame Timing and Profiling
        // ======================================================================

        let render_time = frame_start.elapsed();
        window.update(&display);

        // Sleep to maintain target frame rate (~60 FPS)
        let pre_sleep = frame_start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(pre_sleep) {
            thread::sleep(remaining);
        }
        let sleep_time = frame_start.elapsed().saturating_sub(pre_sleep);

        metrics.record_frame(frame_start.elapsed(), render_time, sleep_time);
    }

    // Dropping a pending sequencer cancels it; its callback never runs
    drop(splash);
    log::info!("exiting after {} frames", metrics.total_frames);
    Ok(())
}

/// Switch pages. Opening the demo starts it from its initial state.
fn go_to(page: &mut Page, target: Page, demo: &mut DockedFabDemo, log: &mut DebugLog) {
    if target == Page::DockedFab {
        demo.reset();
    }
    *page = target;
    log_page(log, target);
}

fn log_page(log: &mut DebugLog, page: Page) {
    let name = match page {
        Page::Splash => "Splash",
        other => other.title(),
    };
    let mut line: String<LOG_LINE_LENGTH> = String::new();
    let _ = write!(line, "Page: {name}");
    log.push(&line);
}

/// Record a bottom bar action.
fn handle_demo_action(action: DemoAction, metrics: &mut ProfilingMetrics, log: &mut DebugLog) {
    match action {
        DemoAction::Fab(pressed) => {
            metrics.inc_fab_toggles();
            log.push(if pressed { "FAB pressed" } else { "FAB released" });
        }
        DemoAction::Home => log.push("Home clicked"),
        DemoAction::Search => log.push("Search clicked"),
        DemoAction::Back => {}
    }
}

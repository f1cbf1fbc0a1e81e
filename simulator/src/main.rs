//! Modern Classic Digital watch face simulator for desktop.
//!
//! Runs the face on a simulated 180x180 display using the
//! embedded-graphics-simulator crate. The keyboard stands in for the phone
//! companion and the watch's host services.
//!
//! | Key | Action |
//! |-----|--------|
//! | T | next color theme (settings page submission) |
//! | L | next language |
//! | D | toggle demo mode |
//! | H | toggle 12-hour time |
//! | Z | toggle leading zero suppression |
//! | S | toggle hour hand snap |
//! | K | toggle calendar complications |
//! | G | toggle digital time |
//! | V | toggle vibrate on disconnect |
//! | B | next battery reading |
//! | C | toggle phone connection |
//! | Up / Down | move the clock forward / back |
//! | M | send a corrupted message |
//! | R | reset to defaults |
//! | Q / Esc | quit |

// Crate-level lints
#![allow(clippy::too_many_lines)]

mod companion;
mod platform;
mod timing;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info};
use modern_classic_face::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use modern_classic_face::protocol::dictionary::EncodeError;
use modern_classic_face::{AppearanceState, EgCanvas, Platform, TimeSnapshot, TimeUnits, WatchFace};

use crate::companion::{Message, THEMES};
use crate::platform::{DesktopPlatform, STORE_FILE};
use crate::timing::{CLOCK_STEP_MINUTES, FRAME_TIME};

/// Units whose change redraws the face.
const TICK_UNITS: TimeUnits = TimeUnits::MINUTE
    .union(TimeUnits::HOUR)
    .union(TimeUnits::DAY)
    .union(TimeUnits::MONTH)
    .union(TimeUnits::YEAR);

/// Count byte promises three tuples, none follow.
const CORRUPTED_MESSAGE: [u8; 6] = [3, 0, 0, 0, 0, 2];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let store = std::env::args().nth(1).map_or_else(|| PathBuf::from(STORE_FILE), PathBuf::from);
    let mut platform = DesktopPlatform::new(store);

    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Modern Classic Digital", &output_settings);

    let mut face = WatchFace::new(Rectangle::new(Point::zero(), display.size()));
    face.load(&mut platform);
    info!("language {:?}, locale {}", face.language(), platform.system_locale());

    let mut last_tick = TimeSnapshot::from_datetime(&platform.now());
    let mut theme = 0usize;

    loop {
        let frame_start = Instant::now();

        // Handle events
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Q | Keycode::Escape => return,
                        Keycode::M => {
                            face.on_message_received(&mut platform, &CORRUPTED_MESSAGE).ok();
                        }
                        Keycode::B => {
                            let battery = platform.next_battery();
                            info!("battery: {battery:?}");
                            face.on_battery(battery);
                        }
                        Keycode::C => {
                            let connected = platform.toggle_connection();
                            info!("phone {}", if connected { "connected" } else { "disconnected" });
                            face.on_connection(&mut platform, connected);
                        }
                        Keycode::Up => platform.shift_clock(CLOCK_STEP_MINUTES),
                        Keycode::Down => platform.shift_clock(-CLOCK_STEP_MINUTES),
                        _ => match companion_message(keycode, face.appearance(), &mut theme) {
                            Some(Ok(message)) => {
                                if let Ok(applied) = face.on_message_received(&mut platform, &message) {
                                    debug!("watch applied {applied} entries from {} bytes", message.len());
                                }
                            }
                            Some(Err(e)) => face.on_message_dropped(e),
                            None => {}
                        },
                    }
                }
                _ => {}
            }
        }

        // Clock
        let now = platform.now();
        let snapshot = TimeSnapshot::from_datetime(&now);
        let changed = TimeUnits::between(&last_tick, &snapshot);
        if changed.intersects(TICK_UNITS) {
            face.on_tick(&now, changed);
            last_tick = snapshot;
        }

        // Render
        let passes = face.draw(&mut EgCanvas::new(&mut display));
        if passes > 0 {
            debug!("drew {passes} layer passes in {:?}", frame_start.elapsed());
        }
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Message the companion sends for a settings key, `None` for other keys.
fn companion_message(
    keycode: Keycode,
    current: &AppearanceState,
    theme: &mut usize,
) -> Option<Result<Message, EncodeError>> {
    let message = match keycode {
        Keycode::T => {
            *theme = (*theme + 1) % THEMES.len();
            info!("theme: {}", THEMES[*theme].0);
            companion::theme_message(*theme, current)
        }
        Keycode::L => companion::next_language_message(current),
        Keycode::D => companion::options_message(current, |o| o.demo_mode = !o.demo_mode),
        Keycode::H => companion::options_message(current, |o| o.twelve_hour_time = !o.twelve_hour_time),
        Keycode::Z => companion::options_message(current, |o| {
            o.hour_leading_zero_suppression = !o.hour_leading_zero_suppression;
            o.date_leading_zero_suppression = o.hour_leading_zero_suppression;
        }),
        Keycode::S => companion::options_message(current, |o| o.hour_hand_snap = !o.hour_hand_snap),
        Keycode::K => companion::options_message(current, |o| {
            o.hide_weekday = !o.hide_weekday;
            o.hide_month = o.hide_weekday;
            o.hide_date = o.hide_weekday;
        }),
        Keycode::G => companion::options_message(current, |o| o.hide_digital_time = !o.hide_digital_time),
        Keycode::V => companion::options_message(current, |o| o.vibrate_on_disconnect = !o.vibrate_on_disconnect),
        Keycode::R => companion::reset_message(),
        _ => return None,
    };
    Some(message)
}

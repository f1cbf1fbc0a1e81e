//! Desktop stand-in for the watch's host services.
//!
//! The clock is the local wall clock plus an adjustable offset, the battery
//! and phone connection are set from the keyboard and the persisted record
//! is a file next to the working directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime, TimeDelta};
use log::{debug, info};
use modern_classic_face::{BatteryState, Platform};

/// Default file backing the persisted record.
pub const STORE_FILE: &str = "modern-classic-face.bin";

/// Battery readings cycled through by the battery key.
const BATTERY_STEPS: [BatteryState; 5] = [
    BatteryState {
        percent: 100,
        is_charging: false,
        is_plugged: false,
    },
    BatteryState {
        percent: 40,
        is_charging: false,
        is_plugged: false,
    },
    BatteryState {
        percent: 10,
        is_charging: false,
        is_plugged: false,
    },
    BatteryState {
        percent: 10,
        is_charging: true,
        is_plugged: true,
    },
    BatteryState {
        percent: 100,
        is_charging: false,
        is_plugged: true,
    },
];

pub struct DesktopPlatform {
    store: PathBuf,
    locale: String,
    clock_offset: TimeDelta,
    battery_step: usize,
    connected: bool,
    vibrations: u32,
}

impl DesktopPlatform {
    pub fn new(store: PathBuf) -> Self {
        Self {
            store,
            locale: system_locale(),
            clock_offset: TimeDelta::zero(),
            battery_step: 0,
            connected: true,
            vibrations: 0,
        }
    }

    /// Move the simulated clock by `minutes`.
    pub fn shift_clock(
        &mut self,
        minutes: i64,
    ) {
        self.clock_offset += TimeDelta::minutes(minutes);
        debug!("clock offset now {} min", self.clock_offset.num_minutes());
    }

    /// Step to the next battery reading and return it.
    pub fn next_battery(&mut self) -> BatteryState {
        self.battery_step = (self.battery_step + 1) % BATTERY_STEPS.len();
        BATTERY_STEPS[self.battery_step]
    }

    /// Flip the phone connection and return the new state.
    pub fn toggle_connection(&mut self) -> bool {
        self.connected = !self.connected;
        self.connected
    }
}

impl Platform for DesktopPlatform {
    type Error = io::Error;

    fn now(&self) -> NaiveDateTime { Local::now().naive_local() + self.clock_offset }

    fn battery(&self) -> BatteryState { BATTERY_STEPS[self.battery_step] }

    fn is_connected(&self) -> bool { self.connected }

    fn system_locale(&self) -> &str { &self.locale }

    fn read_persisted(
        &mut self,
        buf: &mut [u8],
    ) -> Option<usize> {
        let bytes = fs::read(&self.store).ok()?;
        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        Some(bytes.len())
    }

    fn write_persisted(
        &mut self,
        bytes: &[u8],
    ) -> Result<(), Self::Error> {
        fs::write(&self.store, bytes)?;
        debug!("saved {} bytes to {}", bytes.len(), self.store.display());
        Ok(())
    }

    fn vibrate(&mut self) {
        self.vibrations += 1;
        info!("bzz bzz (vibration #{})", self.vibrations);
    }
}

/// Locale from the usual environment variables, `"en_US"` if none is set.
fn system_locale() -> String {
    ["LC_ALL", "LC_TIME", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
        .unwrap_or_else(|| String::from("en_US"))
}

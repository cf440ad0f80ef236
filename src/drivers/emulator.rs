use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use log::trace;

use crate::devices::{DriverKind, SenseDevice};
use crate::drivers::Driver;
use crate::errors::Error;
use crate::warnings;

/// File backing the emulated 8x8 LED screen registers.
const SCREEN_FILE: &str = "rpi-sense-emu-screen";

/// Size of the screen registers: 8x8 pixels, RGB565.
const SCREEN_SIZE: usize = 128;

/// Warning raised when acquisition finds no live emulator session.
pub const NO_EMULATOR_WARNING: &str = "No emulator detected";

/// Driver for an emulated Sense HAT, backed by a session file shared with the
/// emulator presentation surface.
///
/// Acquisition attaches to the session if one is live; otherwise it raises the
/// [`NO_EMULATOR_WARNING`] warning and initializes the session itself, so repeated
/// acquisitions share a single surface.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct EmulatorDriver {
    /// The directory holding the emulator session files.
    runtime_dir: PathBuf,
}

impl EmulatorDriver {
    /// Constructs a new `EmulatorDriver` using the given session directory.
    ///
    /// # Arguments
    /// * `runtime_dir` - The directory holding the emulator session files.
    pub fn new<P: Into<PathBuf>>(runtime_dir: P) -> Self {
        Self {
            runtime_dir: runtime_dir.into(),
        }
    }

    /// Retrieves the path of the screen registers file.
    fn screen_file(&self) -> PathBuf {
        self.runtime_dir.join(SCREEN_FILE)
    }
}

impl Default for EmulatorDriver {
    /// Creates a driver using the system temporary directory, where the emulator
    /// presentation surface publishes its session.
    fn default() -> Self {
        Self::new(env::temp_dir())
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Driver for EmulatorDriver {
    fn kind(&self) -> DriverKind {
        DriverKind::Emulated
    }

    fn acquire(&self) -> Result<Box<dyn SenseDevice>, Error> {
        let screen = self.screen_file();
        if !screen.is_file() {
            warnings::warn(NO_EMULATOR_WARNING);
            fs::create_dir_all(&self.runtime_dir)?;
            fs::write(&screen, [0u8; SCREEN_SIZE])?;
            trace!("Emulator session initialized: {:?}", screen);
        }
        Ok(Box::new(EmulatedSense { screen }))
    }
}

/// Handle over an emulated Sense HAT, bound to its session screen registers.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct EmulatedSense {
    /// Path of the screen registers file.
    screen: PathBuf,
}

impl EmulatedSense {
    /// Retrieves the path of the screen registers backing this handle.
    pub fn get_screen(&self) -> &Path {
        &self.screen
    }
}

impl Display for EmulatedSense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "EmulatedSense({})", self.screen.display())
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl SenseDevice for EmulatedSense {
    fn kind(&self) -> DriverKind {
        DriverKind::Emulated
    }
}

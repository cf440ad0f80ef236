use std::fmt::{Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::trace;

use crate::devices::{DriverKind, SenseDevice};
use crate::drivers::Driver;
use crate::errors::DriverError::DeviceUnavailable;
use crate::errors::{Error, DEVICE_ABSENT};

/// Name advertised by the Sense HAT framebuffer in sysfs.
const SENSE_FB_NAME: &str = "RPi-Sense FB";

/// Driver for a physical Sense HAT, detected through its framebuffer entry.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct HardwareDriver {
    /// The sysfs directory holding framebuffer entries.
    graphics_dir: PathBuf,
}

impl HardwareDriver {
    /// Constructs a new `HardwareDriver` probing the given sysfs graphics directory.
    ///
    /// # Arguments
    /// * `graphics_dir` - The directory holding `fb*` framebuffer entries.
    pub fn new<P: Into<PathBuf>>(graphics_dir: P) -> Self {
        Self {
            graphics_dir: graphics_dir.into(),
        }
    }

    /// Locates the Sense HAT framebuffer entry.
    ///
    /// Entries without a readable `name` file are skipped; a directory with no
    /// matching entry (or no directory at all) means no physical device is present.
    fn detect(&self) -> Result<PathBuf, Error> {
        let entries = match fs::read_dir(&self.graphics_dir) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Err(Self::device_absent())
            }
            Err(error) => return Err(error.into()),
        };
        for entry in entries {
            let path = entry?.path();
            let is_framebuffer = path
                .file_name()
                .map_or(false, |name| name.to_string_lossy().starts_with("fb"));
            if !is_framebuffer {
                continue;
            }
            let name_file = path.join("name");
            if !name_file.is_file() {
                continue;
            }
            if fs::read_to_string(&name_file)?.trim() == SENSE_FB_NAME {
                return Ok(path);
            }
        }
        Err(Self::device_absent())
    }

    /// Builds the recognized "no physical device present" error, message verbatim.
    fn device_absent() -> Error {
        Error::DriverError {
            source: DeviceUnavailable {
                message: String::from(DEVICE_ABSENT),
            },
        }
    }
}

impl Default for HardwareDriver {
    /// Creates a driver probing the standard sysfs graphics class directory.
    fn default() -> Self {
        Self::new("/sys/class/graphics")
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Driver for HardwareDriver {
    fn kind(&self) -> DriverKind {
        DriverKind::Hardware
    }

    fn acquire(&self) -> Result<Box<dyn SenseDevice>, Error> {
        let fb = self.detect()?;
        trace!("Sense HAT framebuffer found: {:?}", fb);
        Ok(Box::new(HardwareSense { fb }))
    }
}

/// Handle over a physical Sense HAT, bound to its detected framebuffer.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct HardwareSense {
    /// Sysfs path of the detected framebuffer.
    fb: PathBuf,
}

impl HardwareSense {
    /// Retrieves the sysfs path of the framebuffer backing this handle.
    pub fn get_framebuffer(&self) -> &Path {
        &self.fb
    }
}

impl Display for HardwareSense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HardwareSense({})", self.fb.display())
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl SenseDevice for HardwareSense {
    fn kind(&self) -> DriverKind {
        DriverKind::Hardware
    }
}

use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use log::info;

use crate::devices::{DriverKind, SenseDevice};
use crate::drivers::{Driver, EmulatorDriver, HardwareDriver, NO_EMULATOR_WARNING};
use crate::errors::{is_device_absent_error, Error};
use crate::warnings;

/// Selects between a physical Sense HAT and its emulator at construction time.
///
/// Construction always probes the hardware driver first. When the probe fails with
/// the recognized "no physical device present" condition the dispatcher logs one
/// informational line and falls back to the emulator; any other acquisition failure
/// is fatal and propagates unchanged. Passing `force_emu` uses the emulator even
/// when physical hardware is present.
///
/// The selected handle is created once and never reassigned: a constructed
/// `SmartSense` always holds exactly one device.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct SmartSense {
    /// Whether emulation was forced at construction.
    force_emu: bool,
    /// The selected device handle.
    device: Box<dyn SenseDevice>,
}

impl SmartSense {
    /// Creates a dispatcher using the default drivers.
    ///
    /// # Arguments
    /// * `force_emu` - Uses the emulator even when a physical Sense HAT is detected.
    ///
    /// # Example
    /// ```no_run
    /// use smartsense::hardware::SmartSense;
    ///
    /// let sense = SmartSense::new(false).expect("no usable Sense HAT");
    /// println!("Driving a {} Sense HAT", sense.kind());
    /// ```
    pub fn new(force_emu: bool) -> Result<Self, Error> {
        Self::with_drivers(
            HardwareDriver::default(),
            EmulatorDriver::default(),
            force_emu,
        )
    }

    /// Creates a dispatcher using the given drivers.
    ///
    /// # Arguments
    /// * `hardware` - The driver probed for a physical device.
    /// * `emulator` - The driver used when falling back (or forced) to emulation.
    /// * `force_emu` - Uses the emulator even when a physical Sense HAT is detected.
    pub fn with_drivers<H, E>(hardware: H, emulator: E, force_emu: bool) -> Result<Self, Error>
    where
        H: Driver + 'static,
        E: Driver + 'static,
    {
        let device = match hardware.acquire() {
            // Hardware is present: an explicit override still discards it.
            Ok(device) => match force_emu {
                true => Self::open_emulator(&emulator)?,
                false => device,
            },
            Err(ref error) if is_device_absent_error(error) => {
                info!("Could not find Sense Hat! Using emulated Sense Hat...");
                Self::open_emulator(&emulator)?
            }
            // Unrecognized acquisition failures are fatal for construction.
            Err(error) => return Err(error),
        };
        Ok(Self { force_emu, device })
    }

    /// Acquires an emulator handle, converting the "No emulator detected" warning
    /// into one informational line.
    ///
    /// The capture scope is released on every exit path; acquisition errors are not
    /// caught here and propagate to the caller.
    fn open_emulator(emulator: &dyn Driver) -> Result<Box<dyn SenseDevice>, Error> {
        let scope = warnings::catch(NO_EMULATOR_WARNING);
        let device = emulator.acquire()?;
        if scope.caught() {
            info!("Opening Sense Emulator GUI...");
        }
        Ok(device)
    }

    /// Returns the selected device handle.
    pub fn device(&self) -> &dyn SenseDevice {
        self.device.as_ref()
    }

    /// Returns the family of the selected device.
    pub fn kind(&self) -> DriverKind {
        self.device.kind()
    }

    /// Checks whether the selected device is backed by the emulator.
    pub fn is_emulated(&self) -> bool {
        self.device.is_emulated()
    }

    /// Checks whether emulation was forced at construction.
    pub fn is_forced(&self) -> bool {
        self.force_emu
    }
}

impl Display for SmartSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SmartSense ({})", self.device)
    }
}

impl Deref for SmartSense {
    type Target = Box<dyn SenseDevice>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl DerefMut for SmartSense {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}


#[cfg(feature = "serde")]
#[cfg(test)]
mod serde_tests {
    use crate::hardware::SmartSense;
    use crate::mocks::driver::MockDriver;

    #[test]
    fn test_smartsense_serialize() {
        let sense =
            SmartSense::with_drivers(MockDriver::hardware(), MockDriver::emulator(), false)
                .unwrap();
        let json = serde_json::to_string(&sense).unwrap();
        assert_eq!(
            json,
            r#"{"force_emu":false,"device":{"type":"MockSenseDevice","kind":"Hardware"}}"#
        );
    }

    #[test]
    fn test_smartsense_deserialize() {
        let json = r#"{"force_emu":true,"device":{"type":"MockSenseDevice","kind":"Emulated"}}"#;
        let sense: SmartSense = serde_json::from_str(json).unwrap();
        assert!(sense.is_forced());
        assert!(sense.is_emulated());
    }
}

//! Defines the drivers a [`SmartSense`](crate::hardware::SmartSense) can select between.

mod emulator;
mod hardware;

use std::fmt::Debug;

use dyn_clone::DynClone;

pub use emulator::EmulatedSense;
pub use emulator::EmulatorDriver;
pub use emulator::NO_EMULATOR_WARNING;
pub use hardware::HardwareDriver;
pub use hardware::HardwareSense;

use crate::devices::{DriverKind, SenseDevice};
use crate::errors::Error;

// Makes a Box<dyn Driver> clone.
dyn_clone::clone_trait_object!(Driver);

/// Defines the trait all drivers must implement.
#[cfg_attr(feature = "serde", typetag::serde(tag = "type"))]
pub trait Driver: DynClone + Send + Sync + Debug {
    /// Returns the family of devices this driver produces.
    fn kind(&self) -> DriverKind;

    /// Acquires a usable device handle.
    ///
    /// # Notes
    /// The method is sync and may block until the device is available.
    fn acquire(&self) -> Result<Box<dyn SenseDevice>, Error>;
}

//! Defines the opaque device handle contract shared by all drivers.

use std::any::type_name;
use std::fmt::{Debug, Display, Formatter};

use dyn_clone::DynClone;

// Makes a Box<dyn SenseDevice> clone (used for SmartSense cloning).
dyn_clone::clone_trait_object!(SenseDevice);

/// Lists the two mutually exclusive driver families a device handle can come from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DriverKind {
    /// Physical Sense HAT attached to the board.
    Hardware,
    /// Emulated Sense HAT.
    Emulated,
}

impl Display for DriverKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            DriverKind::Hardware => "hardware",
            DriverKind::Emulated => "emulated",
        };
        write!(f, "{}", kind)
    }
}

/// Defines the contract a usable Sense HAT handle must fulfill.
///
/// This is deliberately thin: the dispatcher treats drivers as black boxes and only
/// needs to know which family produced the handle. Sensor reading, LED rendering and
/// I/O belong to the driver implementations themselves.
#[cfg_attr(feature = "serde", typetag::serde(tag = "type"))]
pub trait SenseDevice: DynClone + Send + Sync + Debug + Display {
    /// Returns the driver family that produced this handle.
    fn kind(&self) -> DriverKind;

    /// Checks whether this handle is backed by the emulator.
    fn is_emulated(&self) -> bool {
        self.kind() == DriverKind::Emulated
    }

    /// Returns the device name (used for Display only)
    fn get_device_name(&self) -> &'static str {
        type_name::<Self>().split("::").last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::device::MockSenseDevice;

    #[test]
    fn test_driver_kind_display() {
        assert_eq!(format!("{}", DriverKind::Hardware), "hardware");
        assert_eq!(format!("{}", DriverKind::Emulated), "emulated");
    }

    #[test]
    fn test_device_kind() {
        let device = MockSenseDevice::new(DriverKind::Hardware);
        assert_eq!(device.kind(), DriverKind::Hardware);
        assert!(!device.is_emulated());

        let device = MockSenseDevice::new(DriverKind::Emulated);
        assert!(device.is_emulated());
    }

    #[test]
    fn test_device_name() {
        let device = MockSenseDevice::new(DriverKind::Emulated);
        assert_eq!(device.get_device_name(), "MockSenseDevice");
    }

    #[test]
    fn test_device_clone() {
        let device: Box<dyn SenseDevice> = Box::new(MockSenseDevice::new(DriverKind::Hardware));
        let clone = device.clone();
        assert_eq!(clone.kind(), device.kind());
    }
}

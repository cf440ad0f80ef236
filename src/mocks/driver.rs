use crate::devices::{DriverKind, SenseDevice};
use crate::drivers::{Driver, NO_EMULATOR_WARNING};
use crate::errors::DriverError::DeviceUnavailable;
use crate::errors::Error;
use crate::mocks::device::MockSenseDevice;
use crate::warnings;

/// Mock implementation of [`Driver`] with a scripted acquisition outcome.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct MockDriver {
    pub kind: DriverKind,
    /// Message of the error acquisition fails with, if any.
    pub failure: Option<String>,
    /// Whether acquisition raises the "No emulator detected" warning.
    pub warns: bool,
}

impl MockDriver {
    /// A hardware driver whose acquisition succeeds.
    pub fn hardware() -> Self {
        Self {
            kind: DriverKind::Hardware,
            failure: None,
            warns: false,
        }
    }

    /// An emulator driver whose acquisition succeeds silently.
    pub fn emulator() -> Self {
        Self {
            kind: DriverKind::Emulated,
            failure: None,
            warns: false,
        }
    }

    /// An emulator driver raising the "No emulator detected" warning on acquisition.
    pub fn warning_emulator() -> Self {
        Self {
            warns: true,
            ..Self::emulator()
        }
    }

    /// A hardware driver whose acquisition fails with the given message.
    pub fn failing<M: Into<String>>(message: M) -> Self {
        Self {
            kind: DriverKind::Hardware,
            failure: Some(message.into()),
            warns: false,
        }
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl Driver for MockDriver {
    fn kind(&self) -> DriverKind {
        self.kind
    }

    fn acquire(&self) -> Result<Box<dyn SenseDevice>, Error> {
        if let Some(message) = &self.failure {
            return Err(Error::DriverError {
                source: DeviceUnavailable {
                    message: message.clone(),
                },
            });
        }
        if self.warns {
            warnings::warn(NO_EMULATOR_WARNING);
        }
        Ok(Box::new(MockSenseDevice::new(self.kind)))
    }
}

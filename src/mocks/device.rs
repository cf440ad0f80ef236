use std::fmt::{Display, Formatter};

use crate::devices::{DriverKind, SenseDevice};

/// Mock implementation of [`SenseDevice`] reporting a configurable kind.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug)]
pub struct MockSenseDevice {
    pub kind: DriverKind,
}

impl MockSenseDevice {
    pub fn new(kind: DriverKind) -> Self {
        Self { kind }
    }
}

impl Display for MockSenseDevice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "MockSenseDevice")
    }
}

#[cfg_attr(feature = "serde", typetag::serde)]
impl SenseDevice for MockSenseDevice {
    fn kind(&self) -> DriverKind {
        self.kind
    }
}

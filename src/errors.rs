use log::error;
use snafu::Snafu;

pub use crate::errors::Error::*;
use crate::errors::DriverError::DeviceUnavailable;

/// Exact message raised by the hardware driver when no Sense HAT framebuffer exists.
///
/// Fallback to the emulator relies on matching this message verbatim: any change in
/// the driver's phrasing skips the fallback branch and propagates the error instead.
pub const DEVICE_ABSENT: &str = "Cannot detect RPi-Sense FB device";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Driver error: {source}.
    DriverError { source: DriverError },
    /// Unknown error: {info}.
    Unknown { info: String },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum DriverError {
    /// {message}
    DeviceUnavailable { message: String },
}

/// Checks whether `error` is the recognized "no physical device present" condition.
///
/// The comparison is an exact, case-sensitive match against [`DEVICE_ABSENT`] - not a
/// substring or pattern match. This is the only place in the crate where that
/// discrimination happens.
pub fn is_device_absent_error(error: &Error) -> bool {
    matches!(
        error,
        Error::DriverError {
            source: DeviceUnavailable { message }
        } if message == DEVICE_ABSENT
    )
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        error!("std::io error {:?}", error);
        Self::DriverError {
            source: DeviceUnavailable {
                message: error.to_string(),
            },
        }
    }
}

impl From<DriverError> for Error {
    fn from(value: DriverError) -> Self {
        Self::DriverError { source: value }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_error_display() {
        let driver_error = Error::from(DeviceUnavailable {
            message: String::from(DEVICE_ABSENT),
        });
        assert_eq!(
            format!("{}", driver_error),
            "Driver error: Cannot detect RPi-Sense FB device."
        );

        let unknown_error = Unknown {
            info: "Some unknown error".to_string(),
        };
        assert_eq!(
            format!("{}", unknown_error),
            "Unknown error: Some unknown error."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        let error: Error = io_error.into();
        assert_eq!(format!("{}", error), "Driver error: Permission denied.");
    }

    #[test]
    fn test_from_driver_error() {
        let driver_error = DeviceUnavailable {
            message: String::from("Permission denied"),
        };
        let error: Error = driver_error.into();
        assert_eq!(format!("{}", error), "Driver error: Permission denied.");
    }

    #[test]
    fn test_device_absent_exact_match() {
        let absent = Error::from(DeviceUnavailable {
            message: String::from(DEVICE_ABSENT),
        });
        assert!(is_device_absent_error(&absent));

        // Anything but the verbatim sentinel must not be recognized.
        for message in [
            "Permission denied",
            "cannot detect rpi-sense fb device",
            "Cannot detect RPi-Sense FB device ",
            "Cannot detect RPi-Sense FB device.",
        ] {
            let error = Error::from(DeviceUnavailable {
                message: String::from(message),
            });
            assert!(!is_device_absent_error(&error), "matched: {:?}", message);
        }

        let unknown = Unknown {
            info: String::from(DEVICE_ABSENT),
        };
        assert!(!is_device_absent_error(&unknown));
    }
}

//! Provides mocked drivers, devices and a collecting logger (useful for tests mostly).

pub mod device;
pub mod driver;
pub mod logger;

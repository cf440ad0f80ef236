//! Defines the dispatcher selecting which Sense HAT driver to use.

mod sense;

pub use sense::SmartSense;

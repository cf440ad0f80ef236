#![doc(html_root_url = "https://docs.rs/smartsense/0.1.0")]

//! <h1 align="center">SMARTSENSE - Sense HAT with automatic emulator fallback</h1>
//! <div style="text-align:center;font-style:italic;">Drive a Raspberry Pi Sense HAT when one is attached, its emulator when not.</div>
//! <br/>
//!
//! # Features
//!
//! **Smartsense** dispatches, at construction time, between two mutually exclusive
//! Sense HAT drivers:
//!
//! - a [`HardwareDriver`](drivers::HardwareDriver) probing for the physical board
//!   through its `RPi-Sense FB` framebuffer,
//! - an [`EmulatorDriver`](drivers::EmulatorDriver) attaching to (or opening) an
//!   emulator session.
//!
//! The [`SmartSense`](hardware::SmartSense) dispatcher prefers the physical board,
//! falls back to the emulator only on the recognized "device not found" condition,
//! and lets you force emulation regardless of hardware presence. Any other
//! acquisition failure is fatal and propagates to the caller.
//!
//! # Getting Started
//!
//! - Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! smartsense = "0.1.0"
//! ```
//!
//! - Build a dispatcher and use whichever device it selected:
//! ```no_run
//! use smartsense::hardware::SmartSense;
//!
//! fn main() -> Result<(), smartsense::errors::Error> {
//!     // Prefer the physical Sense HAT, fall back to the emulator.
//!     let sense = SmartSense::new(false)?;
//!     println!("Driving a {} Sense HAT: {}", sense.kind(), sense.device());
//!
//!     // Or force the emulator even when hardware is attached.
//!     let sense = SmartSense::new(true)?;
//!     assert!(sense.is_emulated());
//!     Ok(())
//! }
//! ```
//!
//! # Feature flags
//!
//! - **serde** -- Enables serialize/deserialize capabilities for most entities.
//! - **mocks** -- Provides mocked entities of all kinds (useful for tests mostly).

pub mod devices;
pub mod drivers;
pub mod errors;
pub mod hardware;
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
pub mod warnings;

//! Reactive Pipeline
//!
//! Connects the component system to the terminal:
//!
//! ```text
//! Component Tree → engine arrays → frame derived → paint effect
//! ```
//!
//! The derived is a pure snapshot of the rendered node tree; only the effect
//! performs terminal I/O.

pub mod mount;

pub use mount::{mount, mount_to, run, tick, unmount, MountHandle};

//! Mount API - Application lifecycle and render effect.
//!
//! Mounting sets up one derived and one effect:
//!
//! ```text
//! engine revision → frame derived (Node tree) → paint effect → terminal
//! ```
//!
//! The derived re-runs whenever any engine array is written or a signal read
//! by a bound getter changes; the effect repaints whenever the tree or the
//! active theme changes.
//!
//! # Example
//!
//! ```ignore
//! use sui_tui::pipeline::{mount, run};
//!
//! let handle = mount()?;
//! run(&handle)?; // Blocks until Ctrl+C
//! handle.unmount();
//! ```

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use spark_signals::{derived, effect};

use crate::engine::arrays::revision;
use crate::error::Result;
use crate::render::{paint, render_roots};
use crate::state::{global_keys, input};
use crate::theme::active_theme;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that allows unmounting.
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    running: Arc<AtomicBool>,
    global_keys: Option<global_keys::GlobalKeysHandle>,
    owns_terminal: bool,
}

impl MountHandle {
    /// Stop painting, remove the global keys and restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);

        if let Some(handle) = self.global_keys.take() {
            handle.cleanup();
        }
        self.release();
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    fn release(&mut self) {
        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if self.owns_terminal {
            self.owns_terminal = false;
            if let Err(err) = restore_terminal() {
                tracing::warn!(%err, "failed to restore terminal");
            }
        }
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.release();
    }
}

// =============================================================================
// Mount Functions
// =============================================================================

/// Mount onto the terminal.
///
/// Enters raw mode and the alternate screen, paints the component tree to
/// stdout and installs the global keys (Ctrl+C, Tab, Shift+Tab).
pub fn mount() -> Result<MountHandle> {
    enable_raw_mode()?;
    enter_alternate_screen(&mut io::stdout(), disable_raw_mode)?;

    let mut handle = mount_to(io::stdout());
    handle.owns_terminal = true;
    Ok(handle)
}

/// Mount with painting directed at `out`. The terminal mode is untouched.
pub fn mount_to<W: Write + 'static>(mut out: W) -> MountHandle {
    let running = Arc::new(AtomicBool::new(true));
    let running_effect = running.clone();

    let frame = derived(move || {
        // Any array write invalidates the frame
        let _ = revision();
        render_roots()
    });

    let stop = effect(move || {
        if !running_effect.load(Ordering::SeqCst) {
            return;
        }
        let roots = frame.get();
        let theme = active_theme();
        if let Err(err) = paint(&mut out, &roots, &theme) {
            tracing::warn!(%err, "paint failed");
        }
    });

    let global_keys_handle = global_keys::setup_global_keys(running.clone());
    tracing::debug!("mounted");

    MountHandle {
        stop_effect: Some(Box::new(stop)),
        running,
        global_keys: Some(global_keys_handle),
        owns_terminal: false,
    }
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

/// Enter the alternate screen. Raw mode is left again if that fails.
fn enter_alternate_screen<W: Write>(
    out: &mut W,
    leave_raw_mode: impl FnOnce() -> io::Result<()>,
) -> Result<()> {
    if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
        if let Err(restore_err) = leave_raw_mode() {
            tracing::warn!(%restore_err, "failed to leave raw mode");
        }
        return Err(err.into());
    }
    Ok(())
}

fn restore_terminal() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

// =============================================================================
// Event Loop
// =============================================================================

/// Process at most one pending input event.
///
/// Returns `Ok(false)` once the application should stop (Ctrl+C or
/// [`MountHandle::stop`]).
pub fn tick(handle: &MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    // ~60fps polling
    if let Some(event) = input::poll_event(Duration::from_millis(16))? {
        input::route_event(event);
    }

    Ok(handle.is_running())
}

/// Run the event loop until stopped.
pub fn run(handle: &MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

//! Engine - Component registry and parallel arrays.
//!
//! Components are NOT objects. They are indices into parallel arrays:
//!
//! ```text
//! Index 0: List     (parent=None, role=menu,     tab_index=-1)
//! Index 1: ListItem (parent=0,    role=menuitem, tab_index=-1, text="Apple")
//! Index 2: ListItem (parent=0,    role=menuitem, disabled)
//! ```
//!
//! Registration, parent context and destroy callbacks live in the registry;
//! every per-component property lives in [`arrays`].

mod registry;
pub mod arrays;

pub use registry::*;

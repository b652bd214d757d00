//! Primitives - Component building blocks.
//!
//! - [`box_primitive`] - Container that every component is built from
//! - [`text`] - Text display
//!
//! # Architecture
//!
//! Components are indices into parallel arrays (ECS pattern). Each component:
//! 1. Allocates an index from the registry
//! 2. Binds props directly to array slots (preserving reactivity)
//! 3. Runs its children inside its parent context
//! 4. Returns a cleanup function
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `disabled: Some(true.into())`
//! - Signals: `disabled: Some(my_signal.into())` (stays connected)
//! - Getters: `disabled: Some(PropValue::getter(|| compute()))`
//!
//! Pass props directly. Extracting a value before binding breaks reactivity:
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! box_primitive(BoxProps { disabled: Some(PropValue::Signal(disabled)), ..Default::default() });
//!
//! // WRONG - extracts value, breaks reactivity
//! box_primitive(BoxProps { disabled: Some(PropValue::Static(disabled.get())), ..Default::default() });
//! ```

mod box_primitive;
mod text;
mod types;

pub use box_primitive::{box_primitive, component_cleanup};
pub use text::text;
pub use types::*;

pub(crate) use box_primitive::create_box;
pub(crate) use text::{create_text, static_text};
pub(crate) use types::bind_prop;

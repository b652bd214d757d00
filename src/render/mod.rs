//! Render - node tree snapshots and the terminal painter.
//!
//! ```text
//! engine arrays → render_tree → Node → layout_lines → paint (crossterm)
//! ```
//!
//! [`Node::to_markup`] gives the same tree as HTML-like markup, which is what
//! tests assert against.

mod node;
mod paint;

pub use node::{render_roots, render_tree, Node};
pub use paint::{layout_lines, line_text, paint, paint_lines, Line, Span};

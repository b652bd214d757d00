//! Terminal painter.
//!
//! Flattens a node tree into styled lines, then writes them with crossterm.
//! Block kinds (lists, list items, form controls, menus) start a new line;
//! everything else flows inline. `data-direction="column"` puts each child
//! on its own line, `"row"` separates children with a space.

use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate};

use super::node::Node;
use crate::error::Result;
use crate::theme::{style_for_classes, CellStyle, Theme};
use crate::types::{Attr, ComponentType};

/// Narrowest width an input field is drawn with.
const MIN_INPUT_WIDTH: usize = 12;

/// A run of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: CellStyle,
}

/// One painted row.
pub type Line = Vec<Span>;

/// Plain text of a line.
pub fn line_text(line: &Line) -> String {
    line.iter().map(|span| span.text.as_str()).collect()
}

#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line>,
    current: Line,
}

impl LineBuilder {
    fn push(&mut self, text: &str, style: CellStyle) {
        if text.is_empty() {
            return;
        }
        match self.current.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.current.push(Span {
                text: text.to_string(),
                style,
            }),
        }
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(std::mem::take(&mut self.current));
        }
    }

    fn finish(mut self) -> Vec<Line> {
        self.break_line();
        self.lines
    }
}

/// Lay out `roots` as styled lines under `theme`.
pub fn layout_lines(roots: &[Node], theme: &Theme) -> Vec<Line> {
    let mut builder = LineBuilder::default();
    let base = CellStyle {
        fg: theme.text.resolve(),
        bg: theme.background.resolve(),
        attrs: Attr::NONE,
    };
    for root in roots {
        walk(root, &base, theme, &mut builder);
    }
    builder.finish()
}

fn walk(node: &Node, parent: &CellStyle, theme: &Theme, out: &mut LineBuilder) {
    let mut own = style_for_classes(theme, &node.classes);
    own.attrs |= node.text_attrs;
    let style = own.inherit(parent);
    let block = node.kind.is_block();

    if block {
        out.break_line();
    }

    match node.kind {
        ComponentType::Input => paint_input(node, &style, theme, out),
        ComponentType::Button if node.has_class("SuiButton-root") => {
            out.push(" ", style);
            out.push(&node.text, style);
        }
        _ => out.push(&node.text, style),
    }

    let direction = node.attribute("data-direction");
    for (position, child) in node.children.iter().enumerate() {
        if position > 0 {
            match direction {
                Some("column") => out.break_line(),
                Some("row") => out.push(" ", style),
                _ => {}
            }
        }
        walk(child, &style, theme, out);
    }

    if node.kind == ComponentType::Button && node.has_class("SuiButton-root") {
        out.push(" ", style);
    }
    if block {
        out.break_line();
    }
}

fn paint_input(node: &Node, style: &CellStyle, theme: &Theme, out: &mut LineBuilder) {
    let cursor = node
        .attribute("data-cursor")
        .and_then(|value| value.parse::<usize>().ok());
    let chars: Vec<char> = node.text.chars().collect();

    let mut width = 0;
    if chars.is_empty() {
        if cursor.is_some() {
            out.push(" ", inverse(*style));
            width += 1;
        }
        if let Some(placeholder) = node.attribute("placeholder") {
            let muted = CellStyle {
                fg: theme.text_muted.resolve(),
                ..*style
            };
            out.push(placeholder, muted);
            width += placeholder.chars().count();
        }
    } else {
        match cursor {
            Some(at) => {
                let at = at.min(chars.len());
                let before: String = chars[..at].iter().collect();
                out.push(&before, *style);
                match chars.get(at) {
                    Some(c) => {
                        out.push(&c.to_string(), inverse(*style));
                        let after: String = chars[at + 1..].iter().collect();
                        out.push(&after, *style);
                        width = chars.len();
                    }
                    None => {
                        out.push(" ", inverse(*style));
                        width = chars.len() + 1;
                    }
                }
            }
            None => {
                out.push(&node.text, *style);
                width = chars.len();
            }
        }
    }

    if width < MIN_INPUT_WIDTH {
        out.push(&" ".repeat(MIN_INPUT_WIDTH - width), *style);
    }
}

fn inverse(style: CellStyle) -> CellStyle {
    CellStyle {
        attrs: style.attrs | Attr::INVERSE,
        ..style
    }
}

/// Write styled lines to `out`, starting at the top-left corner.
pub fn paint_lines<W: Write>(out: &mut W, lines: &[Line]) -> Result<()> {
    queue!(out, BeginSynchronizedUpdate, MoveTo(0, 0), Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row))?;
        for span in line {
            queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
            if let Some(fg) = span.style.fg.to_term_color() {
                queue!(out, SetForegroundColor(fg))?;
            }
            if let Some(bg) = span.style.bg.to_term_color() {
                queue!(out, SetBackgroundColor(bg))?;
            }
            for attribute in span.style.attrs.to_term_attributes() {
                queue!(out, SetAttribute(attribute))?;
            }
            queue!(out, Print(&span.text))?;
        }
    }
    queue!(out, SetAttribute(Attribute::Reset), ResetColor, EndSynchronizedUpdate)?;
    out.flush()?;
    Ok(())
}

/// Lay out and write `roots` in one go.
pub fn paint<W: Write>(out: &mut W, roots: &[Node], theme: &Theme) -> Result<()> {
    paint_lines(out, &layout_lines(roots, theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::arrays::style::Attributes;
    use crate::theme::terminal;

    fn node(kind: ComponentType, text: &str, children: Vec<Node>) -> Node {
        Node {
            kind,
            text: text.into(),
            children,
            ..Default::default()
        }
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_blocks_start_lines() {
        let list = node(
            ComponentType::List,
            "",
            vec![
                node(ComponentType::ListItem, "Apple", vec![]),
                node(ComponentType::ListItem, "Banana", vec![]),
            ],
        );
        let lines = layout_lines(&[node(ComponentType::Text, "Fruit:", vec![]), list], &terminal());
        assert_eq!(texts(&lines), vec!["Fruit:", "Apple", "Banana"]);
    }

    #[test]
    fn test_direction() {
        let mut row = node(
            ComponentType::Box,
            "",
            vec![node(ComponentType::Text, "a", vec![]), node(ComponentType::Text, "b", vec![])],
        );
        row.attributes.insert("data-direction".into(), "row".into());
        let mut column = row.clone();
        column.attributes.insert("data-direction".into(), "column".into());

        assert_eq!(texts(&layout_lines(&[row], &terminal())), vec!["a b"]);
        assert_eq!(texts(&layout_lines(&[column], &terminal())), vec!["a", "b"]);
    }

    #[test]
    fn test_input_cursor_and_placeholder() {
        let mut attributes = Attributes::new();
        attributes.insert("data-cursor".into(), "1".into());
        let input = Node {
            kind: ComponentType::Input,
            text: "abc".into(),
            attributes,
            ..Default::default()
        };
        let lines = layout_lines(&[input], &terminal());
        let spans = &lines[0];
        assert_eq!(spans[0].text, "a");
        assert_eq!(spans[1].text, "b");
        assert!(spans[1].style.attrs.contains(Attr::INVERSE));
        assert!(line_text(spans).starts_with("abc"));
        assert_eq!(line_text(spans).chars().count(), MIN_INPUT_WIDTH);

        let mut attributes = Attributes::new();
        attributes.insert("placeholder".into(), "Name".into());
        let empty = Node {
            kind: ComponentType::Input,
            attributes,
            ..Default::default()
        };
        let lines = layout_lines(&[empty], &terminal());
        assert!(line_text(&lines[0]).starts_with("Name"));
    }

    #[test]
    fn test_class_styles_apply() {
        let mut disabled = node(ComponentType::Text, "off", vec![]);
        disabled.classes = vec!["Sui-disabled".into()];
        let lines = layout_lines(&[disabled], &terminal());
        assert!(lines[0][0].style.attrs.contains(Attr::DIM));
    }

    #[test]
    fn test_paint_writes_text() {
        let mut out = Vec::new();
        paint(&mut out, &[node(ComponentType::Text, "hello", vec![])], &terminal()).expect("paint");
        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("hello"));
    }
}

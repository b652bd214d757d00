//! Node tree snapshot.
//!
//! A [`Node`] is a plain copy of one rendered component: its kind, classes,
//! attributes and text, with the rendered children below it. Hidden
//! components and their subtrees are skipped.

use crate::engine::arrays::{core, style, text};
use crate::engine::{get_id, get_root_indices};
use crate::engine::arrays::style::Attributes;
use crate::types::{Attr, ComponentType};

/// One rendered component.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub index: usize,
    pub id: Option<String>,
    pub kind: ComponentType,
    pub classes: Vec<String>,
    pub attributes: Attributes,
    pub text: String,
    pub text_attrs: Attr,
    pub children: Vec<Node>,
}

impl Node {
    /// Element tag for this node's kind.
    pub fn tag(&self) -> &'static str {
        self.kind.tag()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Own text followed by the text of every descendant.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    /// First node in depth-first order accepted by `predicate`.
    pub fn find(&self, predicate: &dyn Fn(&Node) -> bool) -> Option<&Node> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// Every node in depth-first order accepted by `predicate`.
    pub fn find_all<'a>(&'a self, predicate: &dyn Fn(&Node) -> bool) -> Vec<&'a Node> {
        let mut out = Vec::new();
        self.collect(predicate, &mut out);
        out
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&Node) -> bool, out: &mut Vec<&'a Node>) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(predicate, out);
        }
    }

    /// Serialise as HTML-like markup.
    ///
    /// Unstyled text nodes serialise as their bare text. Inputs are void
    /// elements carrying their text as `value`.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        if self.kind == ComponentType::Text
            && self.classes.is_empty()
            && self.attributes.is_empty()
            && self.children.is_empty()
        {
            out.push_str(&escape(&self.text));
            return;
        }

        out.push('<');
        out.push_str(self.tag());
        if !self.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape(&self.classes.join(" "))));
        }
        for (name, value) in &self.attributes {
            out.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }

        if self.kind == ComponentType::Input {
            out.push_str(&format!(" value=\"{}\"/>", escape(&self.text)));
            return;
        }

        out.push('>');
        out.push_str(&escape(&self.text));
        for child in &self.children {
            child.write_markup(out);
        }
        out.push_str("</");
        out.push_str(self.tag());
        out.push('>');
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Snapshot the subtree at `root`. `None` when `root` is hidden.
pub fn render_tree(root: usize) -> Option<Node> {
    if !core::get_visible(root) {
        return None;
    }
    Some(Node {
        index: root,
        id: get_id(root),
        kind: core::get_component_type(root),
        classes: style::get_classes(root),
        attributes: style::get_attributes(root),
        text: text::get_text_content(root),
        text_attrs: text::get_text_attrs(root),
        children: core::get_children(root)
            .into_iter()
            .filter_map(render_tree)
            .collect(),
    })
}

/// Snapshot every visible root component, in allocation order.
pub fn render_roots() -> Vec<Node> {
    get_root_indices().into_iter().filter_map(render_tree).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::primitives::{box_primitive, text as text_primitive, BoxProps, PropValue, TextProps};
    use spark_signals::signal;

    fn setup() {
        reset_registry();
    }

    fn classes(list: &[&str]) -> Option<PropValue<Vec<String>>> {
        Some(list.iter().map(|c| c.to_string()).collect::<Vec<_>>().into())
    }

    #[test]
    fn test_tree_mirrors_components() {
        setup();

        let _cleanup = box_primitive(BoxProps {
            id: Some("list".into()),
            component_type: Some(ComponentType::List),
            classes: classes(&["SuiList-root"]),
            children: Some(Box::new(|| {
                box_primitive(BoxProps {
                    component_type: Some(ComponentType::ListItem),
                    children: Some(Box::new(|| {
                        text_primitive(TextProps {
                            content: "Apple".into(),
                            ..Default::default()
                        });
                    })),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        let roots = render_roots();
        assert_eq!(roots.len(), 1);
        let list = &roots[0];
        assert_eq!(list.id.as_deref(), Some("list"));
        assert_eq!(list.tag(), "ul");
        assert!(list.has_class("SuiList-root"));
        assert_eq!(list.children.len(), 1);
        assert_eq!(list.text_content(), "Apple");
        assert_eq!(
            list.to_markup(),
            "<ul class=\"SuiList-root\"><li>Apple</li></ul>"
        );
    }

    #[test]
    fn test_hidden_subtrees_are_skipped() {
        setup();
        let shown = signal(false);

        let shown_getter = shown.clone();
        let _cleanup = box_primitive(BoxProps {
            children: Some(Box::new(move || {
                text_primitive(TextProps {
                    content: "hidden".into(),
                    visible: Some(PropValue::getter(move || shown_getter.get())),
                    ..Default::default()
                });
                text_primitive(TextProps {
                    content: "shown".into(),
                    ..Default::default()
                });
            })),
            ..Default::default()
        });

        let root = &render_roots()[0];
        assert_eq!(root.text_content(), "shown");

        shown.set(true);
        let root = &render_roots()[0];
        assert_eq!(root.text_content(), "hiddenshown");
    }

    #[test]
    fn test_markup_escapes_and_void_input() {
        setup();

        let mut attributes = Attributes::new();
        attributes.insert("placeholder".into(), "a \"b\"".into());
        let _cleanup = box_primitive(BoxProps {
            component_type: Some(ComponentType::Input),
            attributes: Some(attributes.into()),
            ..Default::default()
        });
        let root = get_root_indices()[0];
        text::set_text_content(root, "<x & y>".into());

        let node = render_tree(root).expect("visible");
        assert_eq!(
            node.to_markup(),
            "<input placeholder=\"a &quot;b&quot;\" value=\"&lt;x &amp; y&gt;\"/>"
        );
    }

    #[test]
    fn test_find() {
        setup();

        let _cleanup = box_primitive(BoxProps {
            children: Some(Box::new(|| {
                for label in ["One", "Two"] {
                    box_primitive(BoxProps {
                        component_type: Some(ComponentType::Button),
                        classes: classes(&["SuiButton-root"]),
                        children: Some(Box::new(move || {
                            text_primitive(TextProps {
                                content: label.into(),
                                ..Default::default()
                            });
                        })),
                        ..Default::default()
                    });
                }
            })),
            ..Default::default()
        });

        let root = &render_roots()[0];
        let buttons = root.find_all(&|node| node.has_class("SuiButton-root"));
        assert_eq!(buttons.len(), 2);
        let two = root.find(&|node| node.text == "Two").expect("text node");
        assert_eq!(two.kind, ComponentType::Text);
        assert!(root.find(&|node| node.text == "Three").is_none());
    }
}

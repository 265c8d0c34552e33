//! Render-tree node types.
//!
//! The view layer derives an [`Element`] tree from widget state; the
//! editor host mounts it into the overlay's container region with
//! whatever rendering technology it uses and reports the measured body
//! height back for zone sizing.

/// What a button click should feed back into the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonAction {
    /// The header's collapse control.
    Collapse,
    /// An action-bar entry, identified by its menu node id.
    Activate(String),
}

/// One node of the derived render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Section {
        class: &'static str,
        children: Vec<Element>,
    },
    Text {
        class: &'static str,
        text: String,
    },
    Image {
        class: &'static str,
        source: String,
    },
    TextArea {
        class: &'static str,
        placeholder: String,
        value: String,
    },
    Button {
        class: &'static str,
        label: String,
        action: ButtonAction,
        enabled: bool,
    },
}

impl Element {
    #[must_use]
    pub const fn section(class: &'static str, children: Vec<Element>) -> Self {
        Self::Section { class, children }
    }

    #[must_use]
    pub fn text(class: &'static str, text: impl Into<String>) -> Self {
        Self::Text {
            class,
            text: text.into(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Section { class, .. }
            | Self::Text { class, .. }
            | Self::Image { class, .. }
            | Self::TextArea { class, .. }
            | Self::Button { class, .. } => class,
        }
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Section { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first search for the first node with the given class,
    /// including this node.
    #[must_use]
    pub fn find(&self, class: &str) -> Option<&Self> {
        if self.class() == class {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(class))
    }

    /// Depth-first collection of every node with the given class.
    #[must_use]
    pub fn find_all(&self, class: &str) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect(class, &mut out);
        out
    }

    fn collect<'a>(&'a self, class: &str, out: &mut Vec<&'a Self>) {
        if self.class() == class {
            out.push(self);
        }
        for child in self.children() {
            child.collect(class, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_walks_depth_first_including_root() {
        let tree = Element::section(
            "root",
            vec![
                Element::section("inner", vec![Element::text("leaf", "a")]),
                Element::text("leaf", "b"),
            ],
        );

        assert!(tree.find("root").is_some());
        assert!(tree.find("inner").is_some());
        assert!(tree.find("missing").is_none());
        assert_eq!(tree.find_all("leaf").len(), 2);
        match tree.find("leaf") {
            Some(Element::Text { text, .. }) => assert_eq!(text, "a"),
            other => panic!("unexpected node: {other:?}"),
        }
    }
}

//! Declarative action menu for the comment form.
//!
//! A [`Menu`] is an ordered list of nodes resolved by the embedder's
//! registry; only action nodes contribute to the rendered bar. Each
//! action carries an optional `when` predicate — actions whose predicate
//! evaluates false are omitted entirely, visible ones are separately
//! marked enabled or disabled from the command registry.

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::command::CommandRegistry;
use crate::context::{ContextKeyExpr, ContextKeySet};

/// A conditionally-visible, command-bound menu entry.
#[derive(Debug, Clone)]
pub struct ActionNode {
    pub id: String,
    pub label: String,
    /// Command invoked on activation.
    pub command_id: String,
    /// Visibility predicate; absent means always visible.
    pub when: Option<ContextKeyExpr>,
}

/// One entry in a menu, discriminated by tag.
#[derive(Debug, Clone)]
pub enum MenuNode {
    Action(ActionNode),
    Submenu {
        id: String,
        label: String,
        children: Vec<MenuNode>,
    },
    Separator,
}

/// Ordered menu as resolved from the embedder's registry.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    nodes: Vec<MenuNode>,
}

/// Raw JSON shape of a contributed menu entry.
#[derive(Debug, Deserialize)]
struct RawMenuNode {
    #[serde(default)]
    separator: bool,
    id: Option<String>,
    label: Option<String>,
    command: Option<String>,
    when: Option<String>,
    #[serde(default)]
    children: Vec<RawMenuNode>,
}

impl Menu {
    #[must_use]
    pub const fn new(nodes: Vec<MenuNode>) -> Self {
        Self { nodes }
    }

    /// Parse a menu from a JSON contribution array.
    pub fn from_contributions(json: &str) -> Result<Self> {
        let raw: Vec<RawMenuNode> =
            serde_json::from_str(json).context("Failed to parse menu contributions")?;
        let nodes = raw
            .into_iter()
            .map(convert_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { nodes })
    }

    #[must_use]
    pub fn nodes(&self) -> &[MenuNode] {
        &self.nodes
    }

    /// Action node lookup by id, top level only (submenu entries never
    /// reach the action bar).
    #[must_use]
    pub fn action(&self, id: &str) -> Option<&ActionNode> {
        self.nodes.iter().find_map(|node| match node {
            MenuNode::Action(action) if action.id == id => Some(action),
            _ => None,
        })
    }

    /// Every key name referenced by a `when` predicate anywhere in the
    /// menu, for up-front declaration on the widget's key set.
    #[must_use]
    pub fn referenced_keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_keys(&self.nodes, &mut out);
        out
    }
}

fn convert_node(raw: RawMenuNode) -> Result<MenuNode> {
    if raw.separator {
        return Ok(MenuNode::Separator);
    }
    if !raw.children.is_empty() {
        let children = raw
            .children
            .into_iter()
            .map(convert_node)
            .collect::<Result<Vec<_>>>()?;
        return Ok(MenuNode::Submenu {
            id: raw.id.unwrap_or_default(),
            label: raw.label.unwrap_or_default(),
            children,
        });
    }
    let (Some(id), Some(label), Some(command)) = (raw.id, raw.label, raw.command) else {
        bail!("menu action requires id, label, and command");
    };
    let when = raw
        .when
        .map(|expr| ContextKeyExpr::parse(&expr))
        .transpose()
        .with_context(|| format!("in menu action {id}"))?;
    Ok(MenuNode::Action(ActionNode {
        id,
        label,
        command_id: command,
        when,
    }))
}

fn collect_keys(nodes: &[MenuNode], out: &mut Vec<String>) {
    for node in nodes {
        match node {
            MenuNode::Action(action) => {
                if let Some(when) = &action.when {
                    when.referenced_keys(out);
                }
            }
            MenuNode::Submenu { children, .. } => collect_keys(children, out),
            MenuNode::Separator => {}
        }
    }
}

/// A visible action plus its current enablement.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedAction<'a> {
    pub node: &'a ActionNode,
    pub enabled: bool,
}

/// Evaluate the menu's top level against the current context keys.
///
/// Output order equals declaration order; invisible actions are
/// omitted, not disabled. Submenus and separators are skipped by tag.
pub fn evaluate_menu<'a, C>(
    menu: &'a Menu,
    keys: &ContextKeySet,
    commands: &C,
) -> Vec<ResolvedAction<'a>>
where
    C: CommandRegistry + ?Sized,
{
    menu.nodes()
        .iter()
        .filter_map(|node| match node {
            MenuNode::Action(action) => {
                let visible = action.when.as_ref().is_none_or(|when| when.evaluate(keys));
                visible.then(|| ResolvedAction {
                    node: action,
                    enabled: commands.is_enabled(&action.command_id),
                })
            }
            MenuNode::Submenu { .. } | MenuNode::Separator => None,
        })
        .collect()
}

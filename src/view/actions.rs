//! Action bar rendering for the comment form.

use crate::command::CommandRegistry;
use crate::context::ContextKeySet;
use crate::menu::{evaluate_menu, Menu};
use crate::view::tree::{ButtonAction, Element};

/// Derive the form's action bar: one button per currently-visible menu
/// action, in declaration order.
#[must_use]
pub fn view<C>(menu: &Menu, keys: &ContextKeySet, commands: &C) -> Element
where
    C: CommandRegistry + ?Sized,
{
    let buttons = evaluate_menu(menu, keys, commands)
        .into_iter()
        .map(|action| Element::Button {
            class: "comments-button",
            label: action.node.label.clone(),
            action: ButtonAction::Activate(action.node.id.clone()),
            enabled: action.enabled,
        })
        .collect();
    Element::section("form-actions", buttons)
}

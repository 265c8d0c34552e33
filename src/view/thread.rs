//! Whole-widget rendering: header, comment list, and the comment form.

use crate::command::CommandRegistry;
use crate::context::ContextKeySet;
use crate::menu::Menu;
use crate::model::{CommentThread, DraftEditor};
use crate::view::tree::{ButtonAction, Element};
use crate::view::{actions, comment};

/// Derive the full overlay render tree for a thread.
#[must_use]
pub fn view<C>(
    thread: &CommentThread,
    draft: &DraftEditor,
    keys: &ContextKeySet,
    menu: &Menu,
    commands: &C,
) -> Element
where
    C: CommandRegistry + ?Sized,
{
    Element::section(
        "review-widget",
        vec![head(thread), body(thread, draft, keys, menu, commands)],
    )
}

fn head(thread: &CommentThread) -> Element {
    Element::section(
        "head",
        vec![
            Element::section(
                "review-title",
                vec![Element::text("filename", thread.heading_label())],
            ),
            Element::section(
                "review-actions",
                vec![Element::Button {
                    class: "expand-review-action",
                    label: "Collapse".to_string(),
                    action: ButtonAction::Collapse,
                    enabled: true,
                }],
            ),
        ],
    )
}

fn body<C>(
    thread: &CommentThread,
    draft: &DraftEditor,
    keys: &ContextKeySet,
    menu: &Menu,
    commands: &C,
) -> Element
where
    C: CommandRegistry + ?Sized,
{
    let comments = thread.comments.iter().map(comment::view).collect();
    let placeholder = if thread.comments.is_empty() {
        "Type a new comment"
    } else {
        "Reply..."
    };

    Element::section(
        "body",
        vec![
            Element::section("comments-container", comments),
            Element::section(
                "comment-form",
                vec![
                    Element::TextArea {
                        class: "review-input",
                        placeholder: placeholder.to_string(),
                        value: draft.text(),
                    },
                    actions::view(menu, keys, commands),
                ],
            ),
        ],
    )
}

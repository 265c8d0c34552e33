//! State update logic for the thread widget.
//!
//! All expand/collapse/draft/action transitions funnel through
//! [`update`]. Transitions mutate the widget in place and drive the
//! editor host directly; nothing here blocks or awaits.

use tracing::debug;

use crate::command::{CommandArgs, CommandRegistry};
use crate::context::COMMENT_IS_EMPTY;
use crate::host::{EditorHost, FocusTarget};
use crate::layout;
use crate::message::Message;
use crate::model::{CollapsibleState, DraftEditor};
use crate::service::CommentService;
use crate::view;
use crate::widget::ThreadWidget;

pub fn update<H, S, C>(widget: &mut ThreadWidget<H, S, C>, msg: Message)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    // Disposal is terminal; late events are dropped, not errors.
    if widget.disposed {
        return;
    }

    match msg {
        // === Routed pointer gestures ===
        Message::OpenThread { line } => {
            widget.thread.collapsible_state = Some(CollapsibleState::Expanded);
            expand(widget, line);
        }

        Message::CloseThread => {
            widget.thread.collapsible_state = Some(CollapsibleState::Collapsed);
            hide(widget);
        }

        Message::ToggleExpand { line } => {
            if widget.is_expanded {
                widget.thread.collapsible_state = Some(CollapsibleState::Collapsed);
                hide(widget);
                if widget.thread.comments.is_empty() {
                    delete_thread(widget);
                }
            } else {
                widget.thread.collapsible_state = Some(CollapsibleState::Expanded);
                expand(widget, line);
            }
        }

        // === Header ===
        Message::Collapse => {
            widget.thread.collapsible_state = Some(CollapsibleState::Collapsed);
            if widget.thread.comments.is_empty() {
                delete_thread(widget);
                return;
            }
            hide(widget);
        }

        // === External store notifications ===
        Message::CollapsibleStateChanged(state) => {
            widget.thread.collapsible_state = state;
            match state {
                Some(CollapsibleState::Expanded) if !widget.is_expanded => {
                    let line = widget.thread.range.start_line;
                    expand(widget, line);
                }
                Some(CollapsibleState::Collapsed) if widget.is_expanded => {
                    hide(widget);
                }
                _ => {}
            }
        }

        Message::ThreadUpdated(thread) => {
            widget.thread = thread;
            if !widget.thread.is_collapsed() && !widget.is_expanded {
                let line = widget.thread.range.start_line;
                expand(widget, line);
            } else if widget.thread.is_collapsed() && widget.is_expanded {
                hide(widget);
            } else {
                refresh(widget);
            }
        }

        Message::ContextKeyChanged { key, value } => {
            if widget.context.set(&key, value) {
                refresh(widget);
            }
        }

        // === Draft input ===
        Message::DraftInput(text) => edit_draft(widget, |d| d.insert_str(&text)),
        Message::DraftBackspace => edit_draft(widget, DraftEditor::backspace),
        Message::DraftNewline => edit_draft(widget, DraftEditor::newline),
        Message::DraftCursorUp => edit_draft(widget, DraftEditor::cursor_up),
        Message::DraftCursorDown => edit_draft(widget, DraftEditor::cursor_down),
        Message::DraftCursorLeft => edit_draft(widget, DraftEditor::cursor_left),
        Message::DraftCursorRight => edit_draft(widget, DraftEditor::cursor_right),
        Message::DraftHome => edit_draft(widget, DraftEditor::home),
        Message::DraftEnd => edit_draft(widget, DraftEditor::end),
        Message::DraftWordLeft => edit_draft(widget, DraftEditor::word_left),
        Message::DraftWordRight => edit_draft(widget, DraftEditor::word_right),
        Message::DraftDeleteWord => edit_draft(widget, DraftEditor::delete_word),
        Message::DraftClearLine => edit_draft(widget, DraftEditor::clear_line),

        // === Actions ===
        Message::ActivateAction { node_id } => activate_action(widget, &node_id),

        Message::Noop => {}
    }
}

/// Expand at the given line.
///
/// Guarded: a thread whose externally-observed state is present and not
/// `Expanded` wins over the local request — the benign race with an
/// in-flight external collapse resolves toward the store.
pub(crate) fn expand<H, S, C>(widget: &mut ThreadWidget<H, S, C>, line: u32)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    if widget
        .thread
        .collapsible_state
        .is_some_and(|state| state != CollapsibleState::Expanded)
    {
        debug!(line, "expand dropped, store says collapsed");
        return;
    }
    widget.thread.collapsible_state = Some(CollapsibleState::Expanded);
    widget.glyph.set_line_number(&mut widget.host, line);
    widget.is_expanded = true;
    widget.overlay.show(
        &mut widget.host,
        line,
        widget.thread.range.anchor_column,
        widget.config.placeholder_height(),
    );
    debug!(line, "thread expanded");
    refresh(widget);
}

/// Remove the overlay from layout and drop the gutter anchor. Leaves
/// the thread's data untouched; safe to repeat.
fn hide<H, S, C>(widget: &mut ThreadWidget<H, S, C>)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    widget.overlay.hide(&mut widget.host);
    widget.glyph.clear(&mut widget.host);
    widget.is_expanded = false;
}

/// Re-derive the render tree, re-measure, and resize the zone so the
/// overlay never clips or pads its content. Runs after every content
/// change; no caching across renders.
fn refresh<H, S, C>(widget: &mut ThreadWidget<H, S, C>)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    if !widget.is_expanded {
        return;
    }
    let Some(zone) = widget.overlay.zone() else {
        return;
    };

    let tree = view::view(
        &widget.thread,
        &widget.draft,
        &widget.context,
        &widget.menu,
        &widget.commands,
    );
    let body_px = widget.host.mount_overlay_content(zone, &tree);
    let line_height = widget.host.line_height();
    let height = layout::compute_height_in_lines(
        layout::head_height(line_height),
        body_px,
        line_height,
    );
    widget.overlay.show(
        &mut widget.host,
        widget.thread.range.start_line,
        widget.thread.range.anchor_column,
        height,
    );

    let target = if tree.find("review-input").is_some() {
        FocusTarget::DraftInput
    } else {
        FocusTarget::WidgetRoot
    };
    widget.host.focus(target);
}

fn edit_draft<H, S, C>(widget: &mut ThreadWidget<H, S, C>, op: impl FnOnce(&mut DraftEditor))
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    let was_empty = widget.draft.is_empty();
    op(&mut widget.draft);
    let now_empty = widget.draft.is_empty();
    if was_empty != now_empty {
        widget.context.set_bool(COMMENT_IS_EMPTY, now_empty);
    }
    refresh(widget);
}

fn activate_action<H, S, C>(widget: &mut ThreadWidget<H, S, C>, node_id: &str)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    let Some(action) = widget.menu.action(node_id) else {
        return;
    };
    let visible = action
        .when
        .as_ref()
        .is_none_or(|when| when.evaluate(&widget.context));
    if !visible {
        return;
    }
    let command_id = action.command_id.clone();
    if !widget.commands.is_enabled(&command_id) {
        debug!(command = %command_id, "activation ignored, command disabled");
        return;
    }

    let args = CommandArgs {
        thread: widget.thread.clone(),
        text: widget.draft.body(),
    };
    widget.commands.execute(&command_id, args);

    // Fire-and-forget: the draft clears whether or not the command
    // eventually succeeds.
    widget.draft.clear();
    widget.context.set_bool(COMMENT_IS_EMPTY, true);
    refresh(widget);
}

fn delete_thread<H, S, C>(widget: &mut ThreadWidget<H, S, C>)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    debug!(thread = %widget.thread.thread_id, "deleting empty thread");
    dispose(widget);
    widget
        .service
        .dispose_thread(&widget.thread.owner, &widget.thread.thread_id);
}

/// Release every editor resource the widget owns. Idempotent; callable
/// from any state.
pub(crate) fn dispose<H, S, C>(widget: &mut ThreadWidget<H, S, C>)
where
    H: EditorHost,
    S: CommentService,
    C: CommandRegistry,
{
    if widget.disposed {
        return;
    }
    widget.glyph.dispose(&mut widget.host);
    widget.overlay.dispose(&mut widget.host);
    widget.is_expanded = false;
    widget.disposed = true;
    debug!(thread = %widget.thread.thread_id, "widget disposed");
}

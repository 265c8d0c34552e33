//! Input mapping: gutter pointer events → messages.
//!
//! Pure classification of a raw mouse-down event against the widget's
//! observable state. Everything that is not a left-button press inside
//! the hit zone of this thread's gutter decoration is a no-op, not an
//! error.

use tracing::trace;

use crate::host::{MouseButton, MouseDownEvent, MouseTargetKind};
use crate::message::Message;

/// Marker class carried by an existing thread decoration element.
const THREAD_DECORATION_CLASS: &str = "comment-thread";

/// Classify a pointer-down event on the editor.
///
/// `anchor_line` is the line this widget currently answers for (the
/// glyph position while expanded, the thread's start line otherwise);
/// `collapsed` is the thread's current collapsible state; `hit_zone_px`
/// bounds the accepted offset into the line-decorations band so clicks
/// on folding or VCS markers further right stay untouched.
#[must_use]
pub fn route_mouse_down(
    anchor_line: u32,
    collapsed: bool,
    hit_zone_px: f32,
    event: &MouseDownEvent,
) -> Message {
    let Some(line) = event.hit_line else {
        return Message::Noop;
    };

    if event.button != MouseButton::Left {
        return Message::Noop;
    }

    if event.target != MouseTargetKind::GutterLineDecorations {
        return Message::Noop;
    }

    if event.gutter.gutter_offset_x() > hit_zone_px {
        return Message::Noop;
    }

    if line != anchor_line {
        return Message::Noop;
    }

    let Some(class) = &event.element_class else {
        return Message::Noop;
    };

    if class.contains(THREAD_DECORATION_CLASS) {
        trace!(line, "gutter click on thread decoration");
        return Message::ToggleExpand { line };
    }

    if collapsed {
        trace!(line, "gutter click opens thread");
        Message::OpenThread { line }
    } else {
        trace!(line, "gutter click closes thread");
        Message::CloseThread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::GutterMetrics;
    use crate::layout::GUTTER_HIT_ZONE_PX;

    fn event(line: u32) -> MouseDownEvent {
        MouseDownEvent {
            button: MouseButton::Left,
            target: MouseTargetKind::GutterLineDecorations,
            hit_line: Some(line),
            element_class: Some("cgmr codicon".to_string()),
            gutter: GutterMetrics {
                offset_x: 30.0,
                glyph_margin_width: 16.0,
                line_numbers_width: 8.0,
                glyph_margin_left: 2.0,
            },
        }
    }

    fn route(collapsed: bool, event: &MouseDownEvent) -> Message {
        route_mouse_down(42, collapsed, GUTTER_HIT_ZONE_PX, event)
    }

    #[test]
    fn left_click_in_hit_zone_opens_collapsed_thread() {
        assert!(matches!(
            route(true, &event(42)),
            Message::OpenThread { line: 42 }
        ));
    }

    #[test]
    fn left_click_in_hit_zone_closes_expanded_thread() {
        assert!(matches!(route(false, &event(42)), Message::CloseThread));
    }

    #[test]
    fn thread_decoration_class_toggles_regardless_of_state() {
        let mut e = event(42);
        e.element_class = Some("comment-thread codicon".to_string());
        assert!(matches!(
            route(true, &e),
            Message::ToggleExpand { line: 42 }
        ));
        assert!(matches!(
            route(false, &e),
            Message::ToggleExpand { line: 42 }
        ));
    }

    #[test]
    fn non_left_buttons_are_ignored() {
        for button in [MouseButton::Middle, MouseButton::Right] {
            let mut e = event(42);
            e.button = button;
            assert!(matches!(route(true, &e), Message::Noop));
        }
    }

    #[test]
    fn non_decoration_targets_are_ignored() {
        for target in [
            MouseTargetKind::GutterGlyphMargin,
            MouseTargetKind::GutterLineNumbers,
            MouseTargetKind::ContentText,
            MouseTargetKind::Overlay,
            MouseTargetKind::Unknown,
        ] {
            let mut e = event(42);
            e.target = target;
            assert!(matches!(route(true, &e), Message::Noop));
        }
    }

    #[test]
    fn clicks_past_the_hit_zone_are_ignored() {
        let mut e = event(42);
        // offset into the decorations band: 44 - 16 - 8 - 2 = 18 > 14
        e.gutter.offset_x = 44.0;
        assert!(matches!(route(true, &e), Message::Noop));

        // exactly at the edge still hits
        e.gutter.offset_x = 40.0;
        assert!(matches!(route(true, &e), Message::OpenThread { .. }));
    }

    #[test]
    fn other_lines_are_ignored() {
        assert!(matches!(route(true, &event(41)), Message::Noop));
        assert!(matches!(route(false, &event(43)), Message::Noop));
    }

    #[test]
    fn events_without_range_or_element_are_ignored() {
        let mut e = event(42);
        e.hit_line = None;
        assert!(matches!(route(true, &e), Message::Noop));

        let mut e = event(42);
        e.element_class = None;
        assert!(matches!(route(true, &e), Message::Noop));
    }

    #[test]
    fn wider_hit_zone_is_honored() {
        let mut e = event(42);
        e.gutter.offset_x = 44.0; // 18px into the band
        assert!(matches!(
            route_mouse_down(42, true, 20.0, &e),
            Message::OpenThread { .. }
        ));
    }
}

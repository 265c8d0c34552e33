//! Editor host contract.
//!
//! The widget never touches the editor's rendering or layout engine
//! directly; everything it needs from the host — line metrics, margin
//! decorations, zone placement, content mounting — goes through the
//! [`EditorHost`] trait. Event types live here too so the host and the
//! widget share one vocabulary for pointer input.

use serde::Serialize;

use crate::view::Element;

/// Handle for a glyph decoration owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationId(pub u64);

/// Handle for an overlay zone owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZoneId(pub u64);

/// Placement of an overlay zone, in editor line units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoneOptions {
    /// The zone's top edge sits immediately after this line (1-based).
    pub after_line: u32,
    pub after_column: u32,
    pub height_in_lines: u32,
}

/// Where the host should move keyboard focus after a layout refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The draft text area inside the overlay.
    DraftInput,
    /// The widget's root element (fallback when no input is mounted).
    WidgetRoot,
}

/// Pointer button of a mouse-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Host-side classification of what a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseTargetKind {
    /// The line-decorations band of the gutter (where thread glyphs live).
    GutterLineDecorations,
    GutterGlyphMargin,
    GutterLineNumbers,
    ContentText,
    Overlay,
    Unknown,
}

/// Horizontal gutter measurements attached to a pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterMetrics {
    /// Pointer x offset within the editor, in pixels.
    pub offset_x: f32,
    pub glyph_margin_width: f32,
    pub line_numbers_width: f32,
    pub glyph_margin_left: f32,
}

impl GutterMetrics {
    /// Pointer offset into the line-decorations band itself.
    #[must_use]
    pub fn gutter_offset_x(&self) -> f32 {
        self.offset_x - self.glyph_margin_width - self.line_numbers_width - self.glyph_margin_left
    }
}

/// A raw pointer-down event as delivered by the editor host.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseDownEvent {
    pub button: MouseButton,
    pub target: MouseTargetKind,
    /// Start line of the hit range, if the event carries one (1-based).
    pub hit_line: Option<u32>,
    /// Class string of the hit element, if the event carries one.
    pub element_class: Option<String>,
    pub gutter: GutterMetrics,
}

/// Everything the widget asks of the editor it is embedded in.
///
/// Implementations own the actual decoration and zone resources; the
/// widget only tracks the ids it was handed and is responsible for
/// releasing every one of them on disposal.
pub trait EditorHost {
    /// Current line height in pixels.
    fn line_height(&self) -> f32;

    fn add_glyph_decoration(&mut self, line: u32) -> DecorationId;
    fn move_glyph_decoration(&mut self, id: DecorationId, line: u32);
    fn remove_glyph_decoration(&mut self, id: DecorationId);

    fn create_zone(&mut self, options: ZoneOptions) -> ZoneId;
    /// Reposition or resize an existing zone in place, returning it to
    /// layout if it was hidden.
    fn update_zone(&mut self, id: ZoneId, options: ZoneOptions);
    /// Remove the zone from layout without destroying its content.
    fn hide_zone(&mut self, id: ZoneId);
    fn remove_zone(&mut self, id: ZoneId);

    /// Mount (or re-mount) the rendered content into a zone's container
    /// region and return the measured body height in pixels.
    fn mount_overlay_content(&mut self, zone: ZoneId, content: &Element) -> f32;

    fn focus(&mut self, target: FocusTarget);
}

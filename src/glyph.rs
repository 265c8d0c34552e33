//! Gutter glyph marker for the thread's anchor line.

use crate::host::{DecorationId, EditorHost};

/// Tracks the single margin decoration marking where the overlay is
/// anchored. The decoration exists only while the thread is expanded;
/// `position()` is `None` otherwise.
#[derive(Debug, Default)]
pub struct GlyphMarker {
    decoration: Option<DecorationId>,
    line: Option<u32>,
}

impl GlyphMarker {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            decoration: None,
            line: None,
        }
    }

    /// Place or relocate the anchor decoration.
    pub fn set_line_number<H: EditorHost>(&mut self, host: &mut H, line: u32) {
        match self.decoration {
            Some(id) => host.move_glyph_decoration(id, line),
            None => self.decoration = Some(host.add_glyph_decoration(line)),
        }
        self.line = Some(line);
    }

    /// Current anchor line, if a decoration is placed.
    #[must_use]
    pub const fn position(&self) -> Option<u32> {
        self.line
    }

    /// Remove the decoration without forgetting this marker can be
    /// re-placed later.
    pub fn clear<H: EditorHost>(&mut self, host: &mut H) {
        if let Some(id) = self.decoration.take() {
            host.remove_glyph_decoration(id);
        }
        self.line = None;
    }

    /// Release the decoration for good. Safe to call more than once.
    pub fn dispose<H: EditorHost>(&mut self, host: &mut H) {
        self.clear(host);
    }
}

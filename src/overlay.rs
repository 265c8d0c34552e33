//! Overlay zone wrapper.
//!
//! Wraps the host's zone resource with the widget's lifecycle rules:
//! `show` creates the zone once and thereafter updates geometry in
//! place, `hide` removes it from layout without destroying content, and
//! `dispose` releases it exactly once.

use crate::host::{EditorHost, ZoneId, ZoneOptions};

#[derive(Debug, Default)]
pub struct OverlayHost {
    zone: Option<ZoneId>,
    shown: bool,
}

impl OverlayHost {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: None,
            shown: false,
        }
    }

    /// Show the overlay so its top edge sits immediately after
    /// `after_line`. Calling while already shown repositions in place.
    pub fn show<H: EditorHost>(
        &mut self,
        host: &mut H,
        after_line: u32,
        after_column: u32,
        height_in_lines: u32,
    ) {
        let options = ZoneOptions {
            after_line,
            after_column,
            height_in_lines,
        };
        match self.zone {
            Some(id) => host.update_zone(id, options),
            None => self.zone = Some(host.create_zone(options)),
        }
        self.shown = true;
    }

    /// Remove the overlay from layout. Content and the zone itself
    /// survive for the next `show`. Idempotent.
    pub fn hide<H: EditorHost>(&mut self, host: &mut H) {
        if self.shown {
            if let Some(id) = self.zone {
                host.hide_zone(id);
            }
            self.shown = false;
        }
    }

    #[must_use]
    pub const fn is_shown(&self) -> bool {
        self.shown
    }

    /// The zone handle, once created. Stays valid while hidden.
    #[must_use]
    pub const fn zone(&self) -> Option<ZoneId> {
        self.zone
    }

    /// Release the zone for good. Safe to call more than once.
    pub fn dispose<H: EditorHost>(&mut self, host: &mut H) {
        if let Some(id) = self.zone.take() {
            host.remove_zone(id);
        }
        self.shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{DecorationId, FocusTarget};
    use crate::view::Element;

    #[derive(Default)]
    struct ZoneHost {
        created: u32,
        updates: Vec<ZoneOptions>,
        hidden: u32,
        removed: u32,
    }

    impl EditorHost for ZoneHost {
        fn line_height(&self) -> f32 {
            20.0
        }

        fn add_glyph_decoration(&mut self, _line: u32) -> DecorationId {
            DecorationId(0)
        }

        fn move_glyph_decoration(&mut self, _id: DecorationId, _line: u32) {}
        fn remove_glyph_decoration(&mut self, _id: DecorationId) {}

        fn create_zone(&mut self, options: ZoneOptions) -> ZoneId {
            self.created += 1;
            self.updates.push(options);
            ZoneId(u64::from(self.created))
        }

        fn update_zone(&mut self, _id: ZoneId, options: ZoneOptions) {
            self.updates.push(options);
        }

        fn hide_zone(&mut self, _id: ZoneId) {
            self.hidden += 1;
        }

        fn remove_zone(&mut self, _id: ZoneId) {
            self.removed += 1;
        }

        fn mount_overlay_content(&mut self, _zone: ZoneId, _content: &Element) -> f32 {
            0.0
        }

        fn focus(&mut self, _target: FocusTarget) {}
    }

    #[test]
    fn show_while_shown_updates_in_place() {
        let mut host = ZoneHost::default();
        let mut overlay = OverlayHost::new();

        overlay.show(&mut host, 42, 1, 2);
        overlay.show(&mut host, 42, 1, 8);

        assert_eq!(host.created, 1);
        assert_eq!(host.updates.len(), 2);
        assert_eq!(host.updates[1].height_in_lines, 8);
        assert!(overlay.is_shown());
    }

    #[test]
    fn hide_twice_matches_hiding_once() {
        let mut host = ZoneHost::default();
        let mut overlay = OverlayHost::new();
        overlay.show(&mut host, 10, 1, 2);

        overlay.hide(&mut host);
        overlay.hide(&mut host);

        assert_eq!(host.hidden, 1);
        assert!(!overlay.is_shown());
        // The zone survives a hide for the next show.
        assert!(overlay.zone().is_some());
    }

    #[test]
    fn dispose_releases_the_zone_once() {
        let mut host = ZoneHost::default();
        let mut overlay = OverlayHost::new();
        overlay.show(&mut host, 10, 1, 2);

        overlay.dispose(&mut host);
        overlay.dispose(&mut host);

        assert_eq!(host.removed, 1);
        assert!(overlay.zone().is_none());
    }
}

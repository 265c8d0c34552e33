//! Centralized layout constants and the overlay height calculation.
//!
//! All magic numbers for the overlay frame and the gutter hit zone live
//! here so they stay in sync between the pointer router (`input.rs`)
//! and the zone sizing done after every render.

// --- Gutter hit-testing ---

/// Widest accepted offset into the line-decorations band; keeps the hit
/// zone from overlapping folding and VCS markers further right.
pub const GUTTER_HIT_ZONE_PX: f32 = 14.0;

// --- Overlay frame ---

/// Height in lines used when a zone is first shown, before the mounted
/// content has been measured.
pub const PLACEHOLDER_HEIGHT_LINES: u32 = 2;

/// Fixed bottom margin in pixels; avoids margin-collapse artifacts.
pub const OVERLAY_BOTTOM_MARGIN_PX: f32 = 8.0;

// --- Derived pixel heights ---

/// Header row height for a given editor line height.
#[must_use]
pub fn head_height(line_height_px: f32) -> f32 {
    (line_height_px * 1.2).ceil()
}

/// Height of the arrow pointing at the anchor line.
#[must_use]
pub fn arrow_height(line_height_px: f32) -> f32 {
    (line_height_px / 3.0).round()
}

/// Top plus bottom frame border thickness.
#[must_use]
pub fn frame_thickness(line_height_px: f32) -> f32 {
    (line_height_px / 9.0).round() * 2.0
}

/// Overlay height in editor line units for the given header and body
/// pixel heights.
///
/// Recomputed after every content re-render; a stale value clips the
/// overlay or leaves excess whitespace below it.
#[must_use]
pub fn compute_height_in_lines(head_px: f32, body_px: f32, line_height_px: f32) -> u32 {
    let total = head_px
        + body_px
        + arrow_height(line_height_px)
        + frame_thickness(line_height_px)
        + OVERLAY_BOTTOM_MARGIN_PX;
    (total / line_height_px).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_heights_for_20px_lines() {
        assert!((head_height(20.0) - 24.0).abs() < f32::EPSILON);
        assert!((arrow_height(20.0) - 7.0).abs() < f32::EPSILON);
        assert!((frame_thickness(20.0) - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn height_in_lines_rounds_up_to_whole_lines() {
        // (24 + 100 + 7 + 4 + 8) / 20 = 7.15 -> 8
        assert_eq!(compute_height_in_lines(24.0, 100.0, 20.0), 8);
    }

    #[test]
    fn height_in_lines_for_empty_body_still_covers_frame() {
        // (24 + 0 + 7 + 4 + 8) / 20 = 2.15 -> 3
        assert_eq!(compute_height_in_lines(24.0, 0.0, 20.0), 3);
    }

    #[test]
    fn height_in_lines_with_exact_multiple_does_not_round_up() {
        // head 18, body 99, arrow 5, frame 4, margin 8 -> 134 / 16 = 8.375 -> 9
        assert_eq!(compute_height_in_lines(18.0, 99.0, 16.0), 9);
        // force an exact multiple: 24 + 117 + 7 + 4 + 8 = 160 / 20 = 8
        assert_eq!(compute_height_in_lines(24.0, 117.0, 20.0), 8);
    }
}

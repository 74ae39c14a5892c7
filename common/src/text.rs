//! Pixel-width measurement and right-truncation with an ellipsis marker.
//!
//! Station and destination names share a row with fixed-position columns,
//! so a name that overflows would be drawn over the next column. Names are
//! cut greedily at the last character that still fits next to [`ELLIPSIS`].

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Baseline;
use embedded_graphics::text::renderer::TextRenderer;
use heapless::String;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "..";

/// Byte capacity of a fitted string.
pub const FIT_CAPACITY: usize = 64;

/// Text ready for drawing, never wider than the budget it was fitted to.
pub type FittedText = String<FIT_CAPACITY>;

/// Maps a string to its rendered width in pixels.
pub trait MeasureText {
    fn text_width(
        &self,
        text: &str,
    ) -> u32;
}

impl<C: PixelColor> MeasureText for MonoTextStyle<'_, C> {
    fn text_width(
        &self,
        text: &str,
    ) -> u32 {
        self.measure_string(text, Point::zero(), Baseline::Top).bounding_box.size.width
    }
}

/// Fit `text` into `max_width` pixels.
///
/// Text that already fits is returned unchanged. Otherwise characters are
/// dropped from the end until the remainder plus [`ELLIPSIS`] fits; if
/// nothing fits the result is the marker alone. Text longer than
/// [`FIT_CAPACITY`] bytes is truncated as if it were too wide.
pub fn fit_text(
    text: &str,
    measure: &impl MeasureText,
    max_width: u32,
) -> FittedText {
    if measure.text_width(text) <= max_width {
        if let Ok(fitted) = FittedText::try_from(text) {
            return fitted;
        }
    }

    let mut candidate = FittedText::new();
    for (end, _) in text.char_indices().rev() {
        let head = &text[..end];
        if head.len() + ELLIPSIS.len() > FIT_CAPACITY {
            continue;
        }
        candidate.clear();
        // Capacity checked above.
        let _ = candidate.push_str(head);
        let _ = candidate.push_str(ELLIPSIS);
        if measure.text_width(&candidate) <= max_width {
            return candidate;
        }
    }

    let mut marker = FittedText::new();
    let _ = marker.push_str(ELLIPSIS);
    marker
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;

    use crate::config::layout::EPAPER_37_LANDSCAPE;

    /// Every character is 10 pixels wide.
    struct Fixed;

    impl MeasureText for Fixed {
        fn text_width(
            &self,
            text: &str,
        ) -> u32 {
            text.chars().count() as u32 * 10
        }
    }

    #[test]
    fn test_fitting_text_unchanged() {
        assert_eq!(fit_text("Klusplatz", &Fixed, 90), "Klusplatz");
        assert_eq!(fit_text("", &Fixed, 0), "");
    }

    #[test]
    fn test_truncates_with_marker() {
        // 20 chars, 200px; "Schlieren, Ge" + ".." is 150px.
        assert_eq!(fit_text("Schlieren, Geissweid", &Fixed, 150), "Schlieren, Ge..");
        assert_eq!(fit_text("Schlieren, Geissweid", &Fixed, 159), "Schlieren, Ge..");
    }

    #[test]
    fn test_exhausted_text_yields_marker() {
        assert_eq!(fit_text("Bellevue", &Fixed, 25), "..");
        assert_eq!(fit_text("Bellevue", &Fixed, 5), "..", "marker even when it overflows");
    }

    #[test]
    fn test_multibyte_chars_not_split() {
        // "Zürich, Bahnhofstrasse/HB": keep "Zür" + ".."
        assert_eq!(fit_text("Zürich, Bahnhofstrasse/HB", &Fixed, 50), "Zür..");
    }

    #[test]
    fn test_idempotent() {
        let once = fit_text("Zürich, Bahnhofstrasse/HB", &Fixed, 120);
        assert_eq!(fit_text(&once, &Fixed, 120), once);
    }

    #[test]
    fn test_overlong_text_truncated_to_capacity() {
        let long = "x".repeat(100);
        let fitted = fit_text(&long, &Fixed, u32::MAX);
        assert_eq!(fitted.len(), FIT_CAPACITY);
        assert!(fitted.ends_with(ELLIPSIS));
    }

    #[test]
    fn test_mono_style_measurement() {
        let style = MonoTextStyle::new(EPAPER_37_LANDSCAPE.body_font, BinaryColor::On);
        let one = style.text_width("T");
        assert!(one > 0);
        assert_eq!(style.text_width(""), 0);
        assert!(style.text_width("T13") > style.text_width("T2"));

        let budget = EPAPER_37_LANDSCAPE.destination_budget();
        let fitted = fit_text("Zürich, Bahnhofstrasse/HB via Central", &style, budget);
        assert!(style.text_width(&fitted) <= budget, "{fitted} overflows {budget}px");
        assert!(fitted.ends_with(ELLIPSIS));
    }
}

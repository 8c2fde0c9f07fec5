//! Font metrics for text measurement

use crate::{PdfError, Result};
use std::collections::HashMap;

/// Advance width assumed for characters without a measurable glyph,
/// as a fraction of the font size.
const FALLBACK_ADVANCE_EM: f64 = 0.5;

/// Text measurement source for wrapping and alignment
///
/// Metrics either come from a parsed TrueType font (per-codepoint advance
/// widths extracted at load time) or from a conservative fixed
/// width-per-character estimate. Measurement never fails: characters the
/// font cannot measure fall back to the estimate so layout can proceed.
#[derive(Debug, Clone)]
pub struct FontMetrics {
    advances: Option<GlyphAdvances>,
}

/// Advance widths in font units, keyed by codepoint
#[derive(Debug, Clone)]
struct GlyphAdvances {
    units_per_em: f64,
    widths: HashMap<char, u16>,
}

impl FontMetrics {
    /// Fixed width-per-character estimate, no font file required
    ///
    /// Every character measures `0.5 * font_size`. Wrapping stays
    /// deterministic and conservative for Latin text.
    pub fn approximate() -> Self {
        Self { advances: None }
    }

    /// Create metrics from TTF bytes
    ///
    /// Advance widths for every codepoint in the font's unicode cmap are
    /// extracted up front; the raw font data is not retained.
    ///
    /// # Arguments
    /// * `ttf_data` - TrueType font file bytes
    pub fn from_ttf(ttf_data: &[u8]) -> Result<Self> {
        let face = ttf_parser::Face::parse(ttf_data, 0)
            .map_err(|e| PdfError::FontParseError(format!("{e:?}")))?;

        let units_per_em = face.units_per_em() as f64;
        let mut widths = HashMap::new();

        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables {
                if !subtable.is_unicode() {
                    continue;
                }
                subtable.codepoints(|cp| {
                    if let Some(c) = char::from_u32(cp) {
                        if let Some(advance) = face
                            .glyph_index(c)
                            .and_then(|id| face.glyph_hor_advance(id))
                        {
                            widths.insert(c, advance);
                        }
                    }
                });
            }
        }

        if widths.is_empty() {
            return Err(PdfError::FontParseError(
                "font has no measurable unicode glyphs".to_string(),
            ));
        }

        log::debug!("loaded font metrics for {} codepoints", widths.len());

        Ok(Self {
            advances: Some(GlyphAdvances {
                units_per_em,
                widths,
            }),
        })
    }

    /// Calculate text width in points for a given font size
    ///
    /// Characters the font cannot measure use the fixed per-character
    /// estimate instead, so a width is always produced.
    pub fn text_width(&self, text: &str, font_size: f32) -> f64 {
        let size = font_size as f64;
        match &self.advances {
            Some(adv) => text
                .chars()
                .map(|c| match adv.widths.get(&c) {
                    Some(w) => (*w as f64 / adv.units_per_em) * size,
                    None => {
                        log::debug!("no glyph metrics for {c:?}; using fallback advance");
                        FALLBACK_ADVANCE_EM * size
                    }
                })
                .sum(),
            None => text.chars().count() as f64 * FALLBACK_ADVANCE_EM * size,
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::approximate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_approximate_width() {
        let metrics = FontMetrics::approximate();
        assert_eq!(metrics.text_width("Hello", 12.0), 5.0 * 0.5 * 12.0);
    }

    #[test]
    fn test_approximate_empty() {
        let metrics = FontMetrics::approximate();
        assert_eq!(metrics.text_width("", 12.0), 0.0);
    }

    #[test]
    fn test_width_scales_with_size() {
        let metrics = FontMetrics::approximate();
        let w12 = metrics.text_width("Hello", 12.0);
        let w24 = metrics.text_width("Hello", 24.0);
        assert_eq!(w24, w12 * 2.0);
    }

    #[test]
    fn test_longer_text_is_wider() {
        let metrics = FontMetrics::approximate();
        assert!(metrics.text_width("Hello world", 12.0) > metrics.text_width("Hello", 12.0));
    }

    #[test]
    fn test_from_ttf_rejects_garbage() {
        let result = FontMetrics::from_ttf(b"not a font");
        assert!(matches!(result, Err(crate::PdfError::FontParseError(_))));
    }
}

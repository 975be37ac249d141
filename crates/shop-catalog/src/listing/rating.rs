//! Star glyphs for a numeric rating.

use crate::catalog::MAX_RATING;

/// Number of glyphs in a rating row.
pub const STAR_COUNT: usize = 5;

/// One star in a rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    /// Text rendering.
    pub fn as_char(&self) -> char {
        match self {
            StarGlyph::Full => '\u{2605}',
            StarGlyph::Half => '\u{2bea}',
            StarGlyph::Empty => '\u{2606}',
        }
    }

    /// CSS modifier used by the web views.
    pub fn css_class(&self) -> &'static str {
        match self {
            StarGlyph::Full => "star star--full",
            StarGlyph::Half => "star star--half",
            StarGlyph::Empty => "star star--empty",
        }
    }
}

/// Map a rating to exactly five glyphs.
///
/// `floor(rating)` full stars, one half star when there is any fractional
/// part, empty stars for the rest. Out-of-range and NaN ratings are clamped
/// into [0, 5] first.
pub fn star_glyphs(rating: f64) -> [StarGlyph; STAR_COUNT] {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };

    let full = rating.floor() as usize;
    let has_half = rating.fract() != 0.0;

    let mut glyphs = [StarGlyph::Empty; STAR_COUNT];
    for glyph in glyphs.iter_mut().take(full) {
        *glyph = StarGlyph::Full;
    }
    if has_half {
        glyphs[full] = StarGlyph::Half;
    }
    glyphs
}

/// Render a rating as a string of star characters.
pub fn star_string(rating: f64) -> String {
    star_glyphs(rating).iter().map(StarGlyph::as_char).collect()
}

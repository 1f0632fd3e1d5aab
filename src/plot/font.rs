//! Font selection for chart text.

use font_kit::source::SystemSource;

/// Which face and label language the charts use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStrategy {
    /// Times New Roman (or any serif face), English labels
    #[default]
    Serif,
    /// A Japanese-capable face with Japanese labels
    Cjk,
}

/// Language of axis and category labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    English,
    Japanese,
}

/// The face chosen after probing what is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedFont {
    /// Family name as understood by plotters ("serif", "sans-serif" or a face name)
    pub family: &'static str,
    pub locale: Locale,
    /// True when the preferred face was not available
    pub fallback: bool,
}

pub const SERIF_FACE: &str = "Times New Roman";

/// Families tried in order for Japanese text
pub const CJK_FACES: [&str; 8] = [
    "Hiragino Sans",
    "Hiragino Kaku Gothic ProN",
    "Yu Gothic",
    "Meiryo",
    "MS Gothic",
    "Noto Sans CJK JP",
    "Noto Sans JP",
    "IPAexGothic",
];

/// Whether an installed face of `family` has a glyph for every character
/// of `sample`. Plotters substitutes a sans-serif face for unknown
/// families, so the lookup goes to the system font source directly.
pub fn font_available(family: &str, sample: &str) -> bool {
    let handle = match SystemSource::new().select_family_by_name(family) {
        Ok(handle) => handle,
        Err(_) => return false,
    };

    handle.fonts().iter().any(|font| match font.load() {
        Ok(font) => sample
            .chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| font.glyph_for_char(c).is_some()),
        Err(e) => {
            log::debug!("Could not load a face of {}: {}", family, e);
            false
        }
    })
}

/// Pick a face for `strategy` using the installed fonts
pub fn resolve_font(strategy: FontStrategy) -> ResolvedFont {
    resolve_with(strategy, font_available)
}

/// Pick a face for `strategy`, asking `probe` whether a family can render
/// a sample string
pub fn resolve_with<F>(strategy: FontStrategy, probe: F) -> ResolvedFont
where
    F: Fn(&str, &str) -> bool,
{
    match strategy {
        FontStrategy::Serif => {
            if probe(SERIF_FACE, "Insect") {
                ResolvedFont {
                    family: SERIF_FACE,
                    locale: Locale::English,
                    fallback: false,
                }
            } else {
                log::warn!("{} not found, using the default serif face", SERIF_FACE);
                ResolvedFont {
                    family: "serif",
                    locale: Locale::English,
                    fallback: true,
                }
            }
        }
        FontStrategy::Cjk => match CJK_FACES.iter().copied().find(|face| probe(face, "虫嫌い")) {
            Some(face) => ResolvedFont {
                family: face,
                locale: Locale::Japanese,
                fallback: false,
            },
            None => {
                log::warn!("No Japanese-capable font found, using English labels");
                ResolvedFont {
                    family: "sans-serif",
                    locale: Locale::English,
                    fallback: true,
                }
            }
        },
    }
}

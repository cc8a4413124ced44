//! libmalayalam crate root
//!
//! Malayalam -> Arabi-Malayalam transliteration. The tables live in
//! `tables` as compile-time maps; the scanning rules come from
//! `libtranslit-core`.
//!
//! Public API exported here:
//! - `transliterate` - convert text with the built-in scheme
//! - `scheme` / `transliterator` - the built-in scheme and its shared engine
//!
//! # Examples
//! ```
//! assert_eq!(libmalayalam::transliterate("ക"), "کَ");
//! assert_eq!(libmalayalam::transliterate("കി"), "کِ");
//! assert_eq!(libmalayalam::transliterate("Z"), "Z");
//! ```

pub mod tables;

use once_cell::sync::Lazy;

pub use libtranslit_core::{
    Composition, Config, Scheme, SchemeDef, Segment, SegmentKind, Table, Transliterator,
};

/// Name of the built-in scheme.
pub const SCHEME_NAME: &str = "malayalam-arabi";

static DEFAULT: Lazy<Transliterator> = Lazy::new(|| Transliterator::with_scheme(scheme()));

/// The built-in Malayalam -> Arabic scheme over the static tables.
pub fn scheme() -> Scheme {
    Scheme::new(
        SCHEME_NAME,
        tables::INHERENT_VOWEL,
        Table::Static(&tables::BASE),
        Table::Static(&tables::VOWEL_SIGNS),
        Table::Static(&tables::CLUSTERS),
    )
}

/// Shared engine for the built-in scheme, built on first use.
pub fn transliterator() -> &'static Transliterator {
    &DEFAULT
}

/// Transliterate Malayalam text into Arabi-Malayalam.
///
/// Total over all inputs: characters the tables do not cover are copied
/// unchanged.
pub fn transliterate(text: &str) -> String {
    DEFAULT.transliterate(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(tables::BASE.len(), 69);
        assert_eq!(tables::VOWEL_SIGNS.len(), 17);
        assert_eq!(tables::CLUSTERS.len(), 26);
    }

    #[test]
    fn builtin_scheme_is_clean() {
        assert!(scheme().lint().is_empty());
    }

    #[test]
    fn cluster_window_is_three() {
        assert_eq!(scheme().clusters.max_key_chars(), 3);
    }

    #[test]
    fn consonants_carry_fatha() {
        for key in ["ക", "ഖ", "ങ", "മ", "റ"] {
            let value = tables::BASE.get(key).unwrap();
            assert!(value.ends_with(tables::INHERENT_VOWEL), "{key} -> {value}");
        }
    }

    #[test]
    fn shared_engine_matches_fresh_engine() {
        let fresh = Transliterator::with_scheme(scheme());
        let text = "മലയാളം";
        assert_eq!(transliterator().transliterate(text), fresh.transliterate(text));
    }
}

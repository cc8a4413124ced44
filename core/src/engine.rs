// core/src/engine.rs
//
// Left-to-right transliteration engine driven by a `Scheme`.
//
// At each position the engine tries, in order: the longest cluster window,
// a base character (merged with a following vowel sign), a standalone vowel
// sign, and finally copies the character unchanged. Every input is accepted.

use crate::{Composition, Config, Scheme, SegmentKind};

/// Stateless transliterator over an immutable scheme.
///
/// Safe to share between threads; every call works on its own buffers.
#[derive(Debug, Clone)]
pub struct Transliterator {
    scheme: Scheme,
    config: Config,
    max_cluster_chars: usize,
}

impl Transliterator {
    /// Create a transliterator for `scheme` with the given config.
    ///
    /// Lint findings on the scheme are logged, never rejected.
    pub fn new(scheme: Scheme, config: Config) -> Self {
        for issue in scheme.lint() {
            tracing::warn!(scheme = %scheme.name, "{}", issue);
        }

        // No window wider than the longest cluster key can ever match.
        let longest = scheme.clusters.max_key_chars();
        let max_cluster_chars = config
            .max_cluster_chars
            .map_or(longest, |chars| chars.min(longest));

        tracing::debug!(
            scheme = %scheme.name,
            base = scheme.base.len(),
            vowel_signs = scheme.vowel_signs.len(),
            clusters = scheme.clusters.len(),
            max_cluster_chars,
            "built transliterator"
        );

        Self {
            scheme,
            config,
            max_cluster_chars,
        }
    }

    /// Create a transliterator with the default config.
    pub fn with_scheme(scheme: Scheme) -> Self {
        Self::new(scheme, Config::default())
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Transliterate `source` into the target script.
    pub fn transliterate(&self, source: &str) -> String {
        self.compose(source).into_string()
    }

    /// Transliterate `source`, keeping the segment boundaries.
    pub fn compose(&self, source: &str) -> Composition {
        // Byte offset of every char, plus the end of input, so that any
        // char window [a, b) is the byte slice offsets[a]..offsets[b].
        let offsets: Vec<usize> = source
            .char_indices()
            .map(|(pos, _)| pos)
            .chain(std::iter::once(source.len()))
            .collect();
        let n = offsets.len() - 1;
        let window = |from: usize, chars: usize| {
            let to = (from + chars).min(n);
            &source[offsets[from]..offsets[to]]
        };

        let mut comp = Composition::with_capacity(source.len() * 2);
        let mut i = 0;

        while i < n {
            if let Some((consumed, value)) = self.match_cluster(&offsets, source, i) {
                comp.push(offsets[i]..offsets[i + consumed], value, SegmentKind::Cluster);
                i += consumed;
                continue;
            }

            let current = window(i, 1);

            if let Some(base) = self.scheme.base.get(current) {
                if i + 1 < n {
                    if let Some(sign) = self.scheme.vowel_signs.get(window(i + 1, 1)) {
                        comp.push_pair(offsets[i]..offsets[i + 2], self.strip_inherent(base), sign);
                        i += 2;
                        continue;
                    }
                }
                comp.push(offsets[i]..offsets[i + 1], base, SegmentKind::Base);
                i += 1;
                continue;
            }

            if let Some(sign) = self.scheme.vowel_signs.get(current) {
                comp.push(offsets[i]..offsets[i + 1], sign, SegmentKind::VowelSign);
            } else {
                comp.push(offsets[i]..offsets[i + 1], current, SegmentKind::Passthrough);
            }
            i += 1;
        }

        tracing::trace!(
            scheme = %self.scheme.name,
            chars = n,
            segments = comp.segments().len(),
            "composed"
        );
        comp
    }

    /// Longest cluster starting at char index `i`, as (chars consumed, value).
    ///
    /// Windows are clamped at the end of input, so a short tail is looked up
    /// as-is rather than skipped.
    fn match_cluster<'a>(
        &'a self,
        offsets: &[usize],
        source: &str,
        i: usize,
    ) -> Option<(usize, &'a str)> {
        if self.max_cluster_chars < 2 {
            return None;
        }
        let remaining = offsets.len() - 1 - i;
        let widest = self.max_cluster_chars.min(remaining);
        let narrowest = remaining.min(2);
        for width in (narrowest..=widest).rev() {
            let key = &source[offsets[i]..offsets[i + width]];
            if let Some(value) = self.scheme.clusters.get(key) {
                return Some((width, value));
            }
        }
        None
    }

    fn strip_inherent<'a>(&self, base: &'a str) -> &'a str {
        if !self.config.strip_inherent_vowel || self.scheme.inherent_vowel.is_empty() {
            return base;
        }
        base.strip_suffix(self.scheme.inherent_vowel.as_str())
            .unwrap_or(base)
    }
}

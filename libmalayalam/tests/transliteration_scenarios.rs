//! Transliteration scenarios for the built-in Malayalam scheme.
//!
//! Covers the rule order of the scanner:
//! - cluster windows (three characters before two)
//! - base character + vowel sign, with Fatha suppression
//! - standalone vowel signs and pass-through of unknown text

use libmalayalam::{transliterate, transliterator, SegmentKind};

#[test]
fn empty_input() {
    assert_eq!(transliterate(""), "");
}

#[test]
fn single_consonant_keeps_fatha() {
    assert_eq!(transliterate("ക"), "کَ");
}

#[test]
fn consonant_with_i_sign_drops_fatha() {
    assert_eq!(transliterate("കി"), "کِ");
}

#[test]
fn three_char_cluster_consumed_at_once() {
    assert_eq!(transliterate("ക്ക"), "کَّ");
}

#[test]
fn unmapped_ascii_passes_through() {
    assert_eq!(transliterate("Z"), "Z");
}

#[test]
fn cluster_beats_base_and_sign() {
    // "ി" cannot attach to the cluster; it is emitted on its own
    assert_eq!(transliterate("ക്കി"), "کَِّ");
}

#[test]
fn two_char_cluster() {
    // "ചേ" is a cluster, not ച + േ
    assert_eq!(transliterate("ചേ"), "چ٘");
}

#[test]
fn two_char_cluster_with_anusvara() {
    assert_eq!(transliterate("സം"), "سَمْ");
}

#[test]
fn conjunct_cluster() {
    assert_eq!(transliterate("ക്ഷ"), "کْشَ");
}

#[test]
fn repeated_clusters() {
    assert_eq!(transliterate("ക്കക്ക"), "کَّکَّ");
}

#[test]
fn chillu_without_fatha_takes_sign() {
    assert_eq!(transliterate("ൽി"), "لِ");
}

#[test]
fn shadda_value_is_not_stripped() {
    // value ends in shadda, so there is no trailing Fatha to drop
    assert_eq!(transliterate("ഘി"), "گَِّ");
}

#[test]
fn dangling_vowel_sign() {
    assert_eq!(transliterate("ി"), "ِ");
}

#[test]
fn anusvara_after_consonant() {
    assert_eq!(transliterate("കം"), "کم");
}

#[test]
fn virama_after_consonant() {
    assert_eq!(transliterate("ക്"), "کْ");
}

#[test]
fn digits() {
    assert_eq!(transliterate("൧൨൩"), "۱۲۳");
}

#[test]
fn word_malayalam() {
    assert_eq!(transliterate("മലയാളം"), "مَلَیاۻم");
}

#[test]
fn word_keralam() {
    assert_eq!(transliterate("കേരളം"), "کِیڔَۻم");
}

#[test]
fn word_namaskaram() {
    assert_eq!(transliterate("നമസ്കാരം"), "نَمَسْکاڔم");
}

#[test]
fn word_with_sva_cluster() {
    assert_eq!(transliterate("സ്വന്തം"), "صنْتم");
}

#[test]
fn mixed_scripts_and_punctuation() {
    assert_eq!(transliterate("abc ക്ക, def"), "abc کَّ, def");
}

#[test]
fn space_separated_words() {
    assert_eq!(transliterate("ക ഖ"), "کَ خَ");
}

#[test]
fn pa_geminate_kept_literally() {
    assert_eq!(transliterate("പ്പാ"), "پّا");
}

#[test]
fn trailing_chillu() {
    assert_eq!(transliterate("ചേട്ടൻ"), "چ٘ڊَّنْ");
}

#[test]
fn unmapped_text_is_identity() {
    for s in ["", "hello, world", "123 !?", "日本語", "🙂 tab\tnewline\n", "ا ب ت"] {
        assert_eq!(transliterate(s), s);
    }
}

#[test]
fn cluster_segment_spans_three_chars() {
    let comp = transliterator().compose("ക്കി");
    let segs = comp.segments();
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].kind, SegmentKind::Cluster);
    assert_eq!(segs[0].source, 0.."ക്ക".len());
    assert_eq!(segs[1].kind, SegmentKind::VowelSign);
}

#[test]
fn segments_concatenate_to_output() {
    let input = "നമസ്കാരം, ക്ഷേമം! Z";
    let comp = transliterator().compose(input);
    let joined: String = comp.pairs(input).map(|(_, out, _)| out).collect();
    assert_eq!(joined, transliterate(input));

    let source: String = comp.pairs(input).map(|(src, _, _)| src).collect();
    assert_eq!(source, input);
}

#[test]
fn concurrent_calls_agree() {
    let input = "മലയാളം കേരളം";
    let expected = transliterate(input);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || transliterate(input)))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

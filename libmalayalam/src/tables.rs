//! Malayalam -> Arabi-Malayalam tables.
//!
//! Consonant values carry Fatha (U+064E) as the inherent vowel; the engine
//! drops it when a dependent vowel sign follows. Values are kept exactly as
//! authored, including entries that look irregular ("പ്പ" has no Fatha,
//! "ൽ" has no sukun).

use phf::phf_map;

/// Fatha, the inherent vowel of a bare consonant.
pub const INHERENT_VOWEL: &str = "\u{064E}";

/// Independent vowels, consonants, chillu forms, digits and punctuation.
pub static BASE: phf::Map<&'static str, &'static str> = phf_map! {
    // Independent vowels
    "അ" => "اَ", "ആ" => "اٰ", "ഇ" => "اِ", "ഈ" => "اِی", "ഉ" => "اُ", "ഊ" => "اُو",
    "ഋ" => "رْ", "ൠ" => "رّْ", "ഌ" => "لْ", "ൡ" => "لّْ", "എ" => "ا٘", "ഏ" => "ا٘ی",
    "ഐ" => "اَی", "ഒ" => "اُ", "ഓ" => "اٝ", "ഔ" => "اَو",

    // Consonants
    "ക" => "کَ", "ഖ" => "خَ", "ഗ" => "گَ", "ഘ" => "گَّ", "ങ" => "ۼَ",
    "ച" => "چَ", "ഛ" => "چَّ", "ജ" => "جَ", "ഝ" => "جَّ", "ഞ" => "ڿَ",
    "ട" => "ڊَ", "ഠ" => "ٹَّ", "ഡ" => "ڈَ", "ഢ" => "ڈَّ", "ണ" => "ڹَ",
    "ത" => "تَ", "ഥ" => "تَّ", "ദ" => "دَ", "ധ" => "دَ", "ന" => "نَ",
    "പ" => "پَ", "ഫ" => "فَ", "ബ" => "بَ", "ഭ" => "بَّ", "മ" => "مَ",
    "യ" => "یَ", "ര" => "ڔَ", "ല" => "لَ", "വ" => "وَ", "ശ" => "شَ",
    "ഷ" => "شَّ", "സ" => "سَ", "ഹ" => "حَ", "ള" => "ۻَ", "ഴ" => "ژَ",
    "റ" => "رَ",

    // Chillu (final consonants)
    "ൻ" => "نْ", "ർ" => "رْ", "ൽ" => "ل", "ൾ" => "ۻْ", "ൺ" => "ڹْ", "ൿ" => "کَ",

    // Digits
    "൦" => "۰", "൧" => "۱", "൨" => "۲", "൩" => "۳", "൪" => "۴",
    "൫" => "۵", "൬" => "۶", "൭" => "۷", "൮" => "۸", "൯" => "۹",

    // Date mark, rendered as a full stop
    "൹" => "۔",
};

/// Dependent vowel signs, virama and anusvara.
pub static VOWEL_SIGNS: phf::Map<&'static str, &'static str> = phf_map! {
    "ാ" => "ا", // aa
    "ി" => "ِ", // i
    "ീ" => "ِي", // ii
    "ു" => "ُ", // u
    "ൂ" => "ُو", // uu
    "ൃ" => "ْر", // vocalic r
    "ൄ" => "ْر", // vocalic rr
    "ൢ" => "ْل", // vocalic l
    "ൣ" => "ْل", // vocalic ll
    "െ" => "٘", // e
    "േ" => "ِی", // ee
    "ൈ" => "يْ", // ai
    "ൊ" => "ُ", // o
    "ോ" => "ُو", // oo
    "ൗ" => "َو", // au
    "്" => "ْ", // virama
    "ം" => "م", // anusvara
};

/// Consonant clusters and special combinations, two or three characters long.
pub static CLUSTERS: phf::Map<&'static str, &'static str> = phf_map! {
    // Doubled consonants
    "ച്ച" => "چَّ",
    "ജ്ജ" => "جَّ",
    "ഡ്ഡ" => "ڈَّ",
    "ക്ക" => "کَّ",
    "ത്ത" => "تَّ",
    "ദ്ദ" => "دَّ",
    "പ്പ" => "پّ",
    "ബ്ബ" => "بَّ",
    "മ്മ" => "مَّ",
    "ന്ന" => "نَّ",
    "ല്ല" => "لَّ",
    "ട്ട" => "ڊَّ",
    "ര്ര" => "رَّ",
    "സ്സ" => "سَّ",
    "ഹ്ഹ" => "حَّ",
    "ള്ള" => "ۻَّ",
    "ങ്ങ" => "ۼَّ",
    "ദ്ധ" => "دّھ",

    // Special combinations
    "ചേ" => "چ٘",
    "സ്വ" => "ص",
    "ക്ഷ" => "کْشَ",
    "ജ്ഞ" => "جْڿَ",
    "ശ്ര" => "شْرَ",
    "സ്ര" => "سْرَ",
    "ഹ്ര" => "حْرَ",
    "സം" => "سَمْ",
};

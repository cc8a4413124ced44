//! Arabi-Malayalam transliteration example
//!
//! Prints a few words in Arabic script and shows how the engine split them.
//!
//! Run:
//!   cargo run -p libmalayalam --example arabi_demo

use libmalayalam::{transliterate, transliterator};

fn main() {
    println!("=== Malayalam to Arabi-Malayalam ===\n");

    let words = vec![
        ("മലയാളം", "Malayalam"),
        ("കേരളം", "Kerala"),
        ("നമസ്കാരം", "greeting"),
        ("സ്വന്തം", "own"),
        ("൧൨൩", "digits"),
    ];

    println!("{:<14} {:<14} {}", "Malayalam", "Arabic", "Gloss");
    println!("{}", "-".repeat(40));
    for (word, gloss) in &words {
        println!("{:<14} {:<14} {}", word, transliterate(word), gloss);
    }

    println!("\n=== Segments ===\n");

    let engine = transliterator();
    for input in ["ക്കി", "ചേട്ടൻ"] {
        let comp = engine.compose(input);
        println!("{} → {}", input, comp.text());
        for (src, dst, kind) in comp.pairs(input) {
            println!("  {:<6} → {:<6} {:?}", src, dst, kind);
        }
        println!();
    }
}

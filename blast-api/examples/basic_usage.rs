//! Basic usage of the blast API

use std::sync::Arc;

use blast_api::{blast, BlastText, Blaster, Catalog, Config, DelimiterRule, LocalizedKey};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Lorem ipsum dolor sit amet, voluptua. At et ea rebum.";

    // Method 1: Convenience function
    println!("=== Method 1: Convenience Function ===");
    for segment in &blast(text, DelimiterRule::Sentence)? {
        println!("  {} {:?}", segment.id, segment.value);
    }

    // Method 2: Default rule (words)
    println!("\n=== Method 2: Default Rule ===");
    let words = BlastText::new(text);
    println!("  {} words: {:?}", words.len(), words.values().collect::<Vec<_>>());

    // Method 3: Custom pattern
    println!("\n=== Method 3: Custom Pattern ===");
    let hits = blast(text, DelimiterRule::custom(r"(\w+)um\b"))?;
    println!("  stems before 'um': {:?}", hits.values().collect::<Vec<_>>());

    // Method 4: Localized key
    println!("\n=== Method 4: Localized Key ===");
    let mut catalog = Catalog::new();
    catalog.insert("de", "greeting", "Hallo Welt. Schön, dich zu sehen!");
    let config = Config::builder()
        .delimiter(DelimiterRule::Sentence)
        .locale("de-DE")
        .build()?;
    let blaster = Blaster::with_config(config)?.with_localizer(Arc::new(catalog));
    for segment in &blaster.blast_key(&LocalizedKey::from("greeting"))? {
        println!("  {:?} (chars {:?})", segment.value, segment.char_range);
    }

    Ok(())
}

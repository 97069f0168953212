/*!
 * Terminology tables for the English to Burmese episode translation.
 *
 * Two fixed tables are compiled into the binary:
 * - general vocabulary (cultivation ranks, artifacts, honorifics, special terms)
 * - character names with their Burmese transliterations
 *
 * Both are exposed through a `Glossary`, which can be extended at runtime with a
 * user glossary file in JSON form.
 */

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::AppError;
use crate::file_utils::FileManager;

/// Core terminology. These exact renderings must be used everywhere.
pub const TERMINOLOGY: &[(&str, &str)] = &[
    // General terms
    ("Cultivation", "ကျင့်ကြံခြင်း"),
    ("Cultivator", "ကျင့်ကြံသူ"),
    ("Dao", "တာအို"),
    ("Tao", "တာအို"),
    ("Spiritual Energy", "ဝိညာဉ်စွမ်းအင်"),
    ("Qi", "ချီ"),
    ("Bag of Holding", "သိမ်းဆည်းအိတ်"),
    ("Flying Sword", "ပျံသန်းဓား"),
    ("Cave Abode", "ဂူသင်္ခန်း"),
    ("Fellow Daoist", "တာအိုမိတ်ဆွေ"),
    // Cultivation ranks, first step
    ("Qi Condensation", "ချီစုစည်းမှုအဆင့်"),
    ("Foundation Establishment", "အခြေတည်အဆင့်"),
    ("Core Formation", "ရွှေအမြုတေအဆင့်"),
    ("Nascent Soul", "နတ်သူငယ်အဆင့်"),
    ("Spirit Severing", "ဝိညာဉ်ပိုင်းဖြတ်ခြင်း"),
    ("Soul Formation", "ဝိညာဉ်ဖွဲ့စည်းခြင်း"),
    ("Soul Transformation", "ဝိညာဉ်အသွင်ပြောင်းခြင်း"),
    ("Ascendant", "တက်လှမ်းခြင်းအဆင့်"),
    // Second step
    ("Illusionary Yin", "ယင်တုအဆင့်"),
    ("Corporeal Yang", "ယန်စစ်အဆင့်"),
    ("Yin and Yang", "ယင်နှင့်ယန် ပေါင်းစပ်ခြင်း"),
    ("Nirvana Scryer", "နိဗ္ဗာန်အာရုံခံအဆင့်"),
    ("Nirvana Cleanser", "နိဗ္ဗာန်သန့်စင်အဆင့်"),
    ("Nirvana Shatterer", "နိဗ္ဗာန်ခွဲခြမ်းအဆင့်"),
    ("Heaven's Blight", "ကောင်းကင်ဘေးဒဏ်"),
    // Third step
    ("Nirvana Void", "နိဗ္ဗာန်ဟင်းလင်းပြင်အဆင့်"),
    ("Spirit Void", "ဝိညာဉ်ဟင်းလင်းပြင်အဆင့်"),
    ("Arcane Void", "နက်နဲသော ဟင်းလင်းပြင်အဆင့်"),
    ("Heaven Trampling", "ကောင်းကင်နင်းချေအဆင့်"),
    // Fourth step
    ("Grand Empyrean", "မဟာအမ်ပါယာ"),
    // Special terms
    ("Ancient God", "ရှေးဟောင်းနတ်ဘုရား"),
    ("Domain", "နယ်ပယ်"),
    ("Restriction", "တားမြစ်အစီအရင်"),
    ("Ban", "တားမြစ်အစီအရင်"),
    ("Ji Realm", "ကျိနယ်ပယ်"),
    ("Life and Death Domain", "ရှင်ခြင်းနှင့် သေခြင်းနယ်ပယ်"),
    ("Karma Domain", "ကံတရားနယ်ပယ်"),
    ("True and False Domain", "အမှန်နှင့်အမှားနယ်ပယ်"),
];

/// Character names and their transliterations
pub const CHARACTERS: &[(&str, &str)] = &[
    ("Wang Lin", "ဝမ်လင်"),
    ("Tie Zhu", "တိုက်ကျူး"),
    ("Wang Zhuo", "ဝမ်ကျော့"),
    ("Wang Hao", "ဝမ်ဟော့"),
    ("Zhang Hu", "ချမ်းဟူ"),
    ("Situ Nan", "စစ်တူးနမ်"),
    ("Sun Dazhu", "ဆွန်ဒါချု"),
];

static BUILTIN: Lazy<Glossary> = Lazy::new(|| Glossary {
    terms: to_map(TERMINOLOGY),
    characters: to_map(CHARACTERS),
});

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(source, target)| (source.to_string(), target.to_string()))
        .collect()
}

/// Lookup-ready terminology: general terms plus character names.
///
/// Keys are exact, case-sensitive source phrases. Inserting an existing key
/// replaces its target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glossary {
    /// Domain vocabulary
    #[serde(default)]
    pub terms: BTreeMap<String, String>,

    /// Proper nouns
    #[serde(default)]
    pub characters: BTreeMap<String, String>,
}

impl Glossary {
    /// Create an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in tables, shared for the whole process.
    pub fn builtin() -> &'static Glossary {
        &BUILTIN
    }

    /// Load a user glossary from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = FileManager::read_to_string(path)?;
        Self::from_json_str(&content)
            .with_context(|| format!("Failed to load glossary: {:?}", path))
    }

    /// Parse a glossary from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let glossary: Glossary =
            serde_json::from_str(json).map_err(|e| AppError::Glossary(e.to_string()))?;

        if let Some(empty) = glossary.entries().find(|(source, _)| source.is_empty()) {
            return Err(AppError::Glossary(format!(
                "empty source phrase mapped to '{}'",
                empty.1
            ))
            .into());
        }

        Ok(glossary)
    }

    /// Add a general term.
    pub fn add_term(&mut self, source: &str, target: &str) {
        self.terms.insert(source.to_string(), target.to_string());
    }

    /// Add a character name.
    pub fn add_character(&mut self, name: &str, transliteration: &str) {
        self.characters
            .insert(name.to_string(), transliteration.to_string());
    }

    /// Target rendering for a source phrase, characters first.
    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.characters
            .get(source)
            .or_else(|| self.terms.get(source))
            .map(String::as_str)
    }

    /// Overlay another glossary; its entries win.
    pub fn merge(&mut self, other: &Glossary) {
        for (source, target) in &other.terms {
            self.terms.insert(source.clone(), target.clone());
        }
        for (source, target) in &other.characters {
            self.characters.insert(source.clone(), target.clone());
        }
    }

    /// All (source, target) pairs, general terms then characters.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms
            .iter()
            .chain(self.characters.iter())
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.terms.len() + self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.characters.is_empty()
    }
}

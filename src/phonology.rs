use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use crate::error::ProsodyError;
use crate::params::ParameterVector;

/// Schwa, the neutral mid-central vowel.
pub const SCHWA: char = '\u{0259}';

/// Read-only phoneme dictionary the rules consult.
///
/// Class membership is closed: a symbol the inventory does not know is simply
/// not a member of the class.
pub trait PhonemeInventory {
    /// Baseline parameter-sets for `symbol`, in emission order.
    fn baseline(&self, symbol: char) -> Option<&[ParameterVector]>;
    fn is_vowel(&self, symbol: char) -> bool;
    fn is_stop(&self, symbol: char) -> bool;
    fn is_liquid(&self, symbol: char) -> bool;
}

/// In-memory phoneme inventory.
///
/// Can be assembled in code or parsed from a JSON description:
///
/// ```json
/// {
///   "vowels": ["a", "i"],
///   "stops": ["t"],
///   "liquids": ["l"],
///   "phonemes": { "a": [[0.0, 0.0, ...33 values...]] }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct PhonemeTable {
    baselines: HashMap<char, Vec<ParameterVector>>,
    vowels: HashSet<char>,
    stops: HashSet<char>,
    liquids: HashSet<char>,
}

#[derive(Deserialize)]
struct RawTable {
    #[serde(default)]
    vowels: Vec<String>,
    #[serde(default)]
    stops: Vec<String>,
    #[serde(default)]
    liquids: Vec<String>,
    phonemes: HashMap<String, Vec<Vec<f64>>>,
}

impl PhonemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the baseline parameter-sets for a symbol, replacing any
    /// previous entry.
    pub fn insert(
        &mut self,
        symbol: char,
        parameter_sets: Vec<ParameterVector>,
    ) -> Result<(), ProsodyError> {
        if parameter_sets.is_empty() {
            return Err(ProsodyError::EmptyBaseline(symbol));
        }
        self.baselines.insert(symbol, parameter_sets);
        Ok(())
    }

    pub fn with_vowels(mut self, symbols: &str) -> Self {
        self.vowels.extend(symbols.chars());
        self
    }

    pub fn with_stops(mut self, symbols: &str) -> Self {
        self.stops.extend(symbols.chars());
        self
    }

    pub fn with_liquids(mut self, symbols: &str) -> Self {
        self.liquids.extend(symbols.chars());
        self
    }

    /// Parse a table from its JSON description. Every baseline vector is
    /// validated here so that the engine never sees a malformed one.
    pub fn from_json(json: &str) -> Result<Self, ProsodyError> {
        let raw: RawTable = serde_json::from_str(json)?;

        let mut table = Self::new();
        table.vowels = symbol_set(&raw.vowels, "vowels")?;
        table.stops = symbol_set(&raw.stops, "stops")?;
        table.liquids = symbol_set(&raw.liquids, "liquids")?;

        for (key, sets) in raw.phonemes {
            let symbol = single_symbol(&key, "phonemes")?;
            let vectors = sets
                .into_iter()
                .map(|slots| {
                    ParameterVector::try_from(slots).map_err(|e| {
                        ProsodyError::Table(format!("baseline for '{symbol}': {e}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            table.insert(symbol, vectors)?;
        }

        log::info!(
            "Loaded phoneme table with {} symbols ({} vowels, {} stops, {} liquids)",
            table.baselines.len(),
            table.vowels.len(),
            table.stops.len(),
            table.liquids.len()
        );
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl PhonemeInventory for PhonemeTable {
    fn baseline(&self, symbol: char) -> Option<&[ParameterVector]> {
        self.baselines.get(&symbol).map(Vec::as_slice)
    }

    fn is_vowel(&self, symbol: char) -> bool {
        self.vowels.contains(&symbol)
    }

    fn is_stop(&self, symbol: char) -> bool {
        self.stops.contains(&symbol)
    }

    fn is_liquid(&self, symbol: char) -> bool {
        self.liquids.contains(&symbol)
    }
}

fn single_symbol(key: &str, field: &str) -> Result<char, ProsodyError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ProsodyError::Table(format!(
            "'{field}' entries must be single IPA symbols, got {key:?}"
        ))),
    }
}

fn symbol_set(keys: &[String], field: &str) -> Result<HashSet<char>, ProsodyError> {
    keys.iter().map(|k| single_symbol(k, field)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::PARAMETER_COUNT;

    fn row(duration: f64) -> String {
        let mut slots = vec!["1.0".to_string(); PARAMETER_COUNT];
        slots[PARAMETER_COUNT - 1] = format!("{duration}");
        format!("[{}]", slots.join(","))
    }

    #[test]
    fn parses_table_json() {
        let json = format!(
            r#"{{
                "vowels": ["a", "ə"],
                "stops": ["t"],
                "liquids": ["l"],
                "phonemes": {{ "a": [{}], "l": [{}, {}] }}
            }}"#,
            row(90.0),
            row(40.0),
            row(30.0)
        );
        let table = PhonemeTable::from_json(&json).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.is_vowel('a'));
        assert!(table.is_vowel(SCHWA));
        assert!(table.is_stop('t'));
        assert!(table.is_liquid('l'));
        assert_eq!(table.baseline('l').map(|s| s.len()), Some(2));
        assert_eq!(table.baseline('a').unwrap()[0].duration(), 90.0);
    }

    #[test]
    fn unknown_symbols_are_not_members() {
        let table = PhonemeTable::new().with_vowels("ai");
        assert!(!table.is_vowel('x'));
        assert!(!table.is_stop('a'));
        assert!(table.baseline('a').is_none());
    }

    #[test]
    fn rejects_malformed_baselines() {
        let json = r#"{ "phonemes": { "a": [[1.0, 2.0]] } }"#;
        let err = PhonemeTable::from_json(json).unwrap_err();
        assert!(matches!(err, ProsodyError::Table(_)));

        let json = r#"{ "phonemes": { "a": [] } }"#;
        assert!(matches!(
            PhonemeTable::from_json(json),
            Err(ProsodyError::EmptyBaseline('a'))
        ));
    }

    #[test]
    fn rejects_multi_character_keys() {
        let json = format!(r#"{{ "phonemes": {{ "tʃ": [{}] }} }}"#, row(50.0));
        assert!(matches!(
            PhonemeTable::from_json(&json),
            Err(ProsodyError::Table(_))
        ));
    }
}

//! # prosody-rs
//!
//! A rule-based prosody engine for formant text-to-speech.
//!
//! The engine takes an annotated phonetic transcription (words, sentences,
//! quoting, emphasis, content words, sentence mood), looks up each phoneme's
//! baseline synthesis parameters, and runs an ordered, language-specific rule
//! set over them. Rules adjust pitch, duration, amplitude and bypass gain, and
//! may splice extra parameter-sets around a phoneme to model coarticulation.
//! The resulting stream feeds a downstream formant synthesizer.
//!
//! ## Features
//!
//! - **Ordered rule sets**: each language profile is a [`RuleSet`] of
//!   [`ProsodyRule`]s applied in registration order
//! - **Multiplicative pitch**: per-rule pitch factors compose into one scalar
//! - **Insertions**: rules can emit parameter-sets before or after a phoneme
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! prosody-rs = { version = "2026.2", features = ["english-canadian"] }
//! ```
//!
//! ```ignore
//! use prosody_rs::{engine::ProsodyEngine, languages::english_canadian, phonology::PhonemeTable};
//! use prosody_rs::text::{Paragraph, Sentence, Word};
//!
//! let table = PhonemeTable::from_json(&table_json)?;
//! let engine = ProsodyEngine::new(table, english_canadian::rule_set());
//!
//! let paragraph = Paragraph::new(vec![Sentence::question(vec![
//!     Word::new("ɑɹ"),
//!     Word::new("ju").content(),
//!     Word::new("hɪɹ"),
//! ])]);
//! let result = engine.render(&paragraph)?;
//! let rows = result.to_rows();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod languages;
pub mod params;
pub mod phonology;
pub mod text;

use serde::Serialize;

pub use context::RuleContext;
pub use error::ProsodyError;
pub use params::ParameterVector;

/// What a single rule produced for one parameter-set.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// Parameter-sets to emit immediately before the current one.
    pub prefix: Vec<ParameterVector>,
    /// Parameter-sets to emit immediately after the current one.
    pub suffix: Vec<ParameterVector>,
    /// Pitch factor; 1.0 is neutral.
    pub pitch_factor: f64,
}

impl RuleOutcome {
    /// An outcome that changes nothing.
    pub fn neutral() -> Self {
        Self::pitch(1.0)
    }

    /// An outcome that only scales pitch.
    pub fn pitch(pitch_factor: f64) -> Self {
        Self {
            prefix: Vec::new(),
            suffix: Vec::new(),
            pitch_factor,
        }
    }

    /// Append a parameter-set to emit after the current one.
    pub fn with_suffix(mut self, parameters: ParameterVector) -> Self {
        self.suffix.push(parameters);
        self
    }

    /// Append a parameter-set to emit before the current one.
    pub fn with_prefix(mut self, parameters: ParameterVector) -> Self {
        self.prefix.push(parameters);
        self
    }

    /// True if the outcome inserts nothing and leaves pitch alone.
    pub fn is_neutral(&self) -> bool {
        self.prefix.is_empty() && self.suffix.is_empty() && self.pitch_factor == 1.0
    }
}

impl Default for RuleOutcome {
    fn default() -> Self {
        Self::neutral()
    }
}

/// One language-specific prosody heuristic.
///
/// A rule gets exclusive access to the current parameter-set for the duration
/// of the call and may change any non-pitch slot in place. Pitch changes go
/// through [`RuleOutcome::pitch_factor`] so they compose across rules.
pub trait ProsodyRule: Send + Sync {
    /// Short identifier used in logs and errors.
    fn name(&self) -> &'static str;

    /// Adjust `parameters` for `symbol` and report pitch and insertions.
    fn apply(
        &self,
        symbol: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome;
}

/// Ordered registry of the rules making up one language profile.
pub struct RuleSet {
    name: String,
    rules: Vec<Box<dyn ProsodyRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule; it runs after every rule registered before it.
    pub fn register(mut self, rule: impl ProsodyRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Profile name, e.g. `en-CA`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered rules in application order.
    pub fn rules(&self) -> &[Box<dyn ProsodyRule>] {
        &self.rules
    }

    /// Names of the registered rules in application order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("name", &self.name)
            .field("rules", &self.rule_names())
            .finish()
    }
}

/// Where a frame came from relative to the phoneme that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    Prefix,
    Phoneme,
    Suffix,
}

/// One parameter-set in the output stream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundFrame {
    /// Phoneme whose rule pass produced this frame.
    pub symbol: char,
    pub kind: FrameKind,
    pub parameters: ParameterVector,
}

/// The ordered parameter-set stream handed to the synthesizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProsodyResult {
    pub frames: Vec<SoundFrame>,
}

impl ProsodyResult {
    /// Every emitted parameter-set, in order.
    pub fn parameter_sets(&self) -> impl Iterator<Item = &ParameterVector> {
        self.frames.iter().map(|f| &f.parameters)
    }

    /// Flat 33-slot rows, in emission order.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.parameter_sets().map(ParameterVector::to_vec).collect()
    }

    /// Symbols of the phoneme frames only, with insertions stripped.
    pub fn phoneme_symbols(&self) -> Vec<char> {
        self.frames
            .iter()
            .filter(|f| f.kind == FrameKind::Phoneme)
            .map(|f| f.symbol)
            .collect()
    }

    /// Number of frames inserted by rules.
    pub fn inserted_count(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| f.kind != FrameKind::Phoneme)
            .count()
    }

    /// Sum of every frame's duration slot.
    pub fn total_duration(&self) -> f64 {
        self.parameter_sets().map(ParameterVector::duration).sum()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

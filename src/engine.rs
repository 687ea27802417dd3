use derive_builder::Builder;

use crate::context::{RuleContext, SentencePlacement};
use crate::error::ProsodyError;
use crate::params::ParameterVector;
use crate::phonology::PhonemeInventory;
use crate::text::{Paragraph, Sentence, Word};
use crate::{FrameKind, ProsodyResult, RuleSet, SoundFrame};

/// How far back `previous_words` reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryScope {
    /// Every word already rendered in the current paragraph.
    #[default]
    Paragraph,
    /// Only earlier words of the current sentence.
    Sentence,
}

/// Parameters for configuring a [`ProsodyEngine`].
#[derive(Debug, Clone, Default, Builder)]
#[builder(default, build_fn(error = "ProsodyError"))]
pub struct EngineParams {
    pub history_scope: HistoryScope,
}

/// Applies a language profile's ordered rule set to an annotated transcription.
///
/// # Quick Start
///
/// ```rust,no_run
/// use prosody_rs::engine::{EngineParamsBuilder, HistoryScope, ProsodyEngine};
/// use prosody_rs::phonology::PhonemeTable;
/// use prosody_rs::text::Paragraph;
/// use prosody_rs::RuleSet;
///
/// let params = EngineParamsBuilder::default()
///     .history_scope(HistoryScope::Sentence)
///     .build()?;
/// let engine = ProsodyEngine::with_params(PhonemeTable::new(), RuleSet::new("empty"), params);
/// let result = engine.render(&Paragraph::default())?;
/// assert!(result.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ProsodyEngine<I: PhonemeInventory> {
    inventory: I,
    rules: RuleSet,
    params: EngineParams,
}

impl<I: PhonemeInventory> ProsodyEngine<I> {
    /// Create an engine with default parameters.
    pub fn new(inventory: I, rules: RuleSet) -> Self {
        Self::with_params(inventory, rules, EngineParams::default())
    }

    /// Create an engine with explicit parameters.
    pub fn with_params(inventory: I, rules: RuleSet, params: EngineParams) -> Self {
        log::info!(
            "Prosody engine ready: profile '{}' with {} rules, history scope {:?}",
            rules.name(),
            rules.len(),
            params.history_scope
        );
        Self {
            inventory,
            rules,
            params,
        }
    }

    /// The phoneme inventory baselines are looked up in.
    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    /// The rule set applied to every parameter-set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Render one paragraph into the ordered parameter-set stream.
    pub fn render(&self, paragraph: &Paragraph) -> Result<ProsodyResult, ProsodyError> {
        let mut result = ProsodyResult::default();
        let mut history: Vec<&Word> = Vec::with_capacity(paragraph.word_count());
        let sentence_count = paragraph.sentences.len();

        for (index, sentence) in paragraph.sentences.iter().enumerate() {
            let placement = SentencePlacement {
                position: index + 1,
                remaining: sentence_count - index - 1,
            };
            log::debug!(
                "Sentence {}/{}: {} words, question={}, exclamation={}",
                placement.position,
                sentence_count,
                sentence.words.len(),
                sentence.is_question,
                sentence.is_exclamation
            );

            if self.params.history_scope == HistoryScope::Sentence {
                history.clear();
            }
            self.render_sentence(sentence, placement, &mut history, &mut result.frames)?;
        }

        Ok(result)
    }

    /// Render several paragraphs back to back.
    pub fn render_all(&self, paragraphs: &[Paragraph]) -> Result<ProsodyResult, ProsodyError> {
        let mut combined = ProsodyResult::default();
        for paragraph in paragraphs {
            combined.frames.extend(self.render(paragraph)?.frames);
        }
        Ok(combined)
    }

    fn render_sentence<'p>(
        &self,
        sentence: &'p Sentence,
        placement: SentencePlacement,
        history: &mut Vec<&'p Word>,
        frames: &mut Vec<SoundFrame>,
    ) -> Result<(), ProsodyError> {
        for (word_index, word) in sentence.words.iter().enumerate() {
            for phoneme_index in 0..word.phonemes.len() {
                let context = RuleContext::assemble(
                    &self.inventory,
                    sentence,
                    placement,
                    word_index,
                    phoneme_index,
                    history.as_slice(),
                );
                self.render_phoneme(context, frames)?;
            }
            history.push(word);
        }
        Ok(())
    }

    /// Run every parameter-set of one phoneme through the rule set.
    fn render_phoneme(
        &self,
        base: RuleContext<'_>,
        frames: &mut Vec<SoundFrame>,
    ) -> Result<(), ProsodyError> {
        let symbol = base.symbol;
        let baseline = self
            .inventory
            .baseline(symbol)
            .ok_or(ProsodyError::UnknownPhoneme(symbol))?;
        if baseline.is_empty() {
            return Err(ProsodyError::EmptyBaseline(symbol));
        }

        let mut emitted: Vec<ParameterVector> = Vec::with_capacity(baseline.len());
        for (set_index, baseline_set) in baseline.iter().enumerate() {
            let mut parameters = baseline_set.clone();
            let mut prefix: Vec<ParameterVector> = Vec::new();
            let mut suffix: Vec<ParameterVector> = Vec::new();
            let mut pitch_factor = 1.0;

            for rule in self.rules.rules() {
                let context = RuleContext {
                    previous_phoneme_parameters: &emitted,
                    remaining_phoneme_parameter_count: baseline.len() - set_index - 1,
                    previous_sound_parameters: &prefix,
                    following_sound_parameters: &suffix,
                    ..base
                };
                let outcome = rule.apply(symbol, &context, &mut parameters);

                if !outcome.is_neutral() {
                    log::trace!(
                        "'{symbol}' {}: pitch x{:.4}, +{} prefix, +{} suffix",
                        rule.name(),
                        outcome.pitch_factor,
                        outcome.prefix.len(),
                        outcome.suffix.len()
                    );
                }
                for vector in std::iter::once(&parameters)
                    .chain(&outcome.prefix)
                    .chain(&outcome.suffix)
                {
                    ensure_positive_duration(symbol, rule.name(), vector)?;
                }

                prefix.extend(outcome.prefix);
                suffix.extend(outcome.suffix);
                pitch_factor *= outcome.pitch_factor;
            }

            parameters.apply_pitch_factor(pitch_factor);

            frames.extend(prefix.into_iter().map(|p| SoundFrame {
                symbol,
                kind: FrameKind::Prefix,
                parameters: p,
            }));
            frames.push(SoundFrame {
                symbol,
                kind: FrameKind::Phoneme,
                parameters: parameters.clone(),
            });
            frames.extend(suffix.into_iter().map(|p| SoundFrame {
                symbol,
                kind: FrameKind::Suffix,
                parameters: p,
            }));
            emitted.push(parameters);
        }

        Ok(())
    }
}

fn ensure_positive_duration(
    symbol: char,
    rule: &'static str,
    parameters: &ParameterVector,
) -> Result<(), ProsodyError> {
    let duration = parameters.duration();
    if duration > 0.0 {
        Ok(())
    } else {
        Err(ProsodyError::NonPositiveDuration {
            symbol,
            rule,
            duration,
        })
    }
}

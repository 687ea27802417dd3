use crate::context::RuleContext;
use crate::params::ParameterVector;
use crate::phonology::SCHWA;
use crate::{ProsodyRule, RuleOutcome};

use super::lexicon::WH_ONSET;

/// Blends a liquid into the vowel that follows it in the same word by
/// appending a short parameter-set weighted towards the vowel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidVowelCoarticulation {
    pub liquid_weight: f64,
    pub vowel_weight: f64,
    /// Fraction of the vowel's baseline duration given to the blend. The
    /// result is rounded, so vowel baselines shorter than `0.5 / duration_ratio`
    /// (2.0 with the default ratio) give a zero-length blend, which the engine
    /// rejects as `NonPositiveDuration`.
    pub duration_ratio: f64,
}

impl ProsodyRule for LiquidVowelCoarticulation {
    fn name(&self) -> &'static str {
        "liquid_vowel_coarticulation"
    }

    fn apply(
        &self,
        symbol: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome {
        // Only the liquid's last parameter-set touches the vowel.
        if context.remaining_phoneme_parameter_count != 0 || !context.is_liquid(symbol) {
            return RuleOutcome::neutral();
        }
        let Some(vowel) = context
            .next_phoneme()
            .filter(|&next| context.is_vowel(next))
            .and_then(|next| context.inventory.baseline(next))
            .and_then(|sets| sets.first())
        else {
            return RuleOutcome::neutral();
        };

        let mut blend = parameters.blend(vowel, self.liquid_weight, self.vowel_weight);
        blend.set_duration((vowel.duration() * self.duration_ratio).round());
        RuleOutcome::neutral().with_suffix(blend)
    }
}

/// Question contours: a fall after a wh-word, a rise over the last word of a
/// yes/no question, and an initial rise on the wh-word itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionIntonation {
    /// Fall applied on the second-to-last word.
    pub fall_penultimate: f64,
    /// Fall applied on the last word.
    pub fall_final: f64,
    pub rise_depth: f64,
    pub rise_bias: f64,
    pub initial_rise: f64,
    pub fall_words: &'static [&'static str],
    pub question_words: &'static [&'static str],
}

impl QuestionIntonation {
    fn follows_wh_word(&self, context: &RuleContext<'_>) -> bool {
        context.previous_words.iter().any(|word| {
            word.first_symbol() == Some(WH_ONSET)
                || self.fall_words.iter().any(|spelling| word.spells(spelling))
        })
    }

    fn rise(&self, context: &RuleContext<'_>) -> f64 {
        let count_vowels =
            |symbols: &[char]| symbols.iter().filter(|&&s| context.is_vowel(s)).count();
        let position = count_vowels(context.preceding_phonemes);
        let following = count_vowels(context.following_phonemes);

        let rise_ratio = 1.0 - self.rise_depth / (position + following + 1) as f64;
        rise_ratio.powi(position as i32) - self.rise_bias
    }
}

impl ProsodyRule for QuestionIntonation {
    fn name(&self) -> &'static str {
        "question_intonation"
    }

    fn apply(&self, symbol: char, context: &RuleContext<'_>, _: &mut ParameterVector) -> RuleOutcome {
        if symbol == SCHWA || !context.is_question || !context.is_vowel(symbol) {
            return RuleOutcome::neutral();
        }

        if context.remaining_words <= 1 && self.follows_wh_word(context) {
            return RuleOutcome::pitch(if context.remaining_words == 1 {
                self.fall_penultimate
            } else {
                self.fall_final
            });
        }
        if context.is_last_word() {
            return RuleOutcome::pitch(self.rise(context));
        }
        if self
            .question_words
            .iter()
            .any(|spelling| context.word_spells(spelling))
        {
            return RuleOutcome::pitch(self.initial_rise);
        }
        RuleOutcome::neutral()
    }
}

/// Stresses content words: louder first formant, and longer, higher vowels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentEmphasis {
    pub f1_gain: f64,
    pub duration_scale: f64,
    pub pitch_factor: f64,
}

impl ProsodyRule for ContentEmphasis {
    fn name(&self) -> &'static str {
        "content_emphasis"
    }

    fn apply(
        &self,
        symbol: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome {
        if !context.is_content || symbol == SCHWA {
            return RuleOutcome::neutral();
        }

        parameters.set_f1_amplitude(parameters.f1_amplitude() * self.f1_gain);
        if context.is_vowel(symbol) {
            parameters.set_duration(parameters.duration() * self.duration_scale);
            return RuleOutcome::pitch(self.pitch_factor);
        }
        RuleOutcome::neutral()
    }
}

/// Marked-up emphasis: louder, longer and higher, except on stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProsodicEmphasis {
    pub bypass_boost: f64,
    pub duration_scale: f64,
    pub pitch_factor: f64,
}

impl ProsodyRule for ProsodicEmphasis {
    fn name(&self) -> &'static str {
        "prosodic_emphasis"
    }

    fn apply(
        &self,
        symbol: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome {
        if !context.is_emphasized || context.is_stop(symbol) {
            return RuleOutcome::neutral();
        }

        parameters.set_bypass_gain(parameters.bypass_gain() + self.bypass_boost);
        parameters.set_duration(parameters.duration() * self.duration_scale);
        RuleOutcome::pitch(self.pitch_factor)
    }
}

/// Quoted speech is louder, quicker and slightly higher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotedSpeech {
    pub bypass_boost: f64,
    pub duration_scale: f64,
    pub pitch_factor: f64,
}

impl ProsodyRule for QuotedSpeech {
    fn name(&self) -> &'static str {
        "quoted_speech"
    }

    fn apply(
        &self,
        _: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome {
        if !context.is_quoted {
            return RuleOutcome::neutral();
        }

        parameters.set_bypass_gain(parameters.bypass_gain() + self.bypass_boost);
        parameters.set_duration(parameters.duration() * self.duration_scale);
        RuleOutcome::pitch(self.pitch_factor)
    }
}

/// Declination: pitch drifts down exponentially over a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentencePitchDecay {
    pub decay_constant: f64,
}

impl ProsodyRule for SentencePitchDecay {
    fn name(&self) -> &'static str {
        "sentence_pitch_decay"
    }

    fn apply(&self, _: char, context: &RuleContext<'_>, _: &mut ParameterVector) -> RuleOutcome {
        if context.is_question {
            return RuleOutcome::neutral();
        }

        let sentence_length = (context.word_position + context.remaining_words) as f64;
        let decay_ratio = 1.0 - self.decay_constant / sentence_length;
        RuleOutcome::pitch(1.0 / decay_ratio.powi(context.word_position as i32))
    }
}

/// Phrase-final lengthening of the last word's vowels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalLengthening {
    pub duration_scale: f64,
}

impl ProsodyRule for TerminalLengthening {
    fn name(&self) -> &'static str {
        "terminal_lengthening"
    }

    fn apply(
        &self,
        symbol: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome {
        if context.is_last_word() && symbol != SCHWA && context.is_vowel(symbol) {
            parameters.set_duration(parameters.duration() * self.duration_scale);
        }
        RuleOutcome::neutral()
    }
}

/// Shortens the second vowel of a vowel-vowel sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiphthongShortening {
    pub duration_scale: f64,
}

impl ProsodyRule for DiphthongShortening {
    fn name(&self) -> &'static str {
        "diphthong_shortening"
    }

    fn apply(
        &self,
        symbol: char,
        context: &RuleContext<'_>,
        parameters: &mut ParameterVector,
    ) -> RuleOutcome {
        let after_vowel = context
            .previous_phoneme()
            .is_some_and(|previous| context.is_vowel(previous));
        if after_vowel && context.is_vowel(symbol) {
            parameters.set_duration(parameters.duration() * self.duration_scale);
        }
        RuleOutcome::neutral()
    }
}

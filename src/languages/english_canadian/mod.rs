//! Canadian English prosody profile.
//!
//! Rules run in this order:
//!
//! | # | Rule | Effect |
//! |---|---|---|
//! | 1 | [`LiquidVowelCoarticulation`] | blend frame after a liquid that precedes a vowel |
//! | 2 | [`QuestionIntonation`] | wh-fall, yes/no rise, initial rise on wh-words |
//! | 3 | [`ContentEmphasis`] | F1 boost; longer, higher vowels in content words |
//! | 4 | [`ProsodicEmphasis`] | louder, longer, higher emphasized non-stops |
//! | 5 | [`QuotedSpeech`] | louder, shorter, higher quoted speech |
//! | 6 | [`SentencePitchDecay`] | declination over statements |
//! | 7 | [`TerminalLengthening`] | longer vowels in the last word |
//! | 8 | [`DiphthongShortening`] | halves a vowel that follows a vowel |
//!
//! Two revisions of the constants exist. [`Revision::Revised`] is the default;
//! [`Revision::Initial`] reproduces the first rule set, which has no
//! coarticulation rule, a stronger declination and a softer question fall.
//!
//! # Examples
//!
//! ```rust
//! use prosody_rs::languages::english_canadian::{self, Revision};
//!
//! let revised = english_canadian::rule_set();
//! assert_eq!(revised.len(), 8);
//!
//! let initial = english_canadian::rule_set_for(Revision::Initial);
//! assert_eq!(initial.len(), 7);
//! ```

pub mod lexicon;
pub mod rules;

pub use rules::{
    ContentEmphasis, DiphthongShortening, LiquidVowelCoarticulation, ProsodicEmphasis,
    QuestionIntonation, QuotedSpeech, SentencePitchDecay, TerminalLengthening,
};

use crate::RuleSet;

use lexicon::{FALL_WORDS, INITIAL_FALL_WORDS, QUESTION_WORDS};

/// Which set of Canadian English constants to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Revision {
    /// First rule set: seven rules, decay 0.1, falls 1.05 / 1.1, no rise bias.
    Initial,
    /// Current rule set: adds liquid-vowel coarticulation, decay 0.05, falls
    /// 1.075 / 1.125, a rise bias and the "hum" fall trigger.
    #[default]
    Revised,
}

/// Every tunable constant of the profile, grouped by rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanadianEnglishConstants {
    /// `None` leaves the rule out of the set entirely.
    pub coarticulation: Option<LiquidVowelCoarticulation>,
    pub question: QuestionIntonation,
    pub content: ContentEmphasis,
    pub prosodic: ProsodicEmphasis,
    pub quoted: QuotedSpeech,
    pub decay: SentencePitchDecay,
    pub terminal: TerminalLengthening,
    pub diphthong: DiphthongShortening,
}

impl CanadianEnglishConstants {
    /// Constants of the given revision.
    pub fn for_revision(revision: Revision) -> Self {
        match revision {
            Revision::Initial => Self::initial(),
            Revision::Revised => Self::revised(),
        }
    }

    /// Current constants: eight rules, including liquid-vowel coarticulation.
    pub fn revised() -> Self {
        Self {
            coarticulation: Some(LiquidVowelCoarticulation {
                liquid_weight: 1.0,
                vowel_weight: 2.0,
                duration_ratio: 0.25,
            }),
            question: QuestionIntonation {
                fall_penultimate: 1.075,
                fall_final: 1.125,
                rise_depth: 0.11,
                rise_bias: 0.05,
                initial_rise: 0.9,
                fall_words: FALL_WORDS,
                question_words: QUESTION_WORDS,
            },
            content: ContentEmphasis {
                f1_gain: 1.25,
                duration_scale: 1.1,
                pitch_factor: 0.95,
            },
            prosodic: ProsodicEmphasis {
                bypass_boost: 5.0,
                duration_scale: 1.1,
                pitch_factor: 0.95,
            },
            quoted: QuotedSpeech {
                bypass_boost: 5.0,
                duration_scale: 0.925,
                pitch_factor: 0.975,
            },
            decay: SentencePitchDecay {
                decay_constant: 0.05,
            },
            terminal: TerminalLengthening {
                duration_scale: 1.5,
            },
            diphthong: DiphthongShortening {
                duration_scale: 0.5,
            },
        }
    }

    /// First-revision constants: no coarticulation, steeper decay, softer falls.
    pub fn initial() -> Self {
        let revised = Self::revised();
        Self {
            coarticulation: None,
            question: QuestionIntonation {
                fall_penultimate: 1.05,
                fall_final: 1.1,
                rise_bias: 0.0,
                fall_words: INITIAL_FALL_WORDS,
                ..revised.question
            },
            decay: SentencePitchDecay {
                decay_constant: 0.1,
            },
            ..revised
        }
    }
}

impl Default for CanadianEnglishConstants {
    fn default() -> Self {
        Self::revised()
    }
}

/// The default (revised) Canadian English rule set.
pub fn rule_set() -> RuleSet {
    rule_set_for(Revision::default())
}

/// The Canadian English rule set of a specific revision.
pub fn rule_set_for(revision: Revision) -> RuleSet {
    let name = match revision {
        Revision::Initial => "en-CA (initial)",
        Revision::Revised => "en-CA",
    };
    rule_set_with(name, CanadianEnglishConstants::for_revision(revision))
}

/// Build the profile from custom constants, keeping the canonical rule order.
pub fn rule_set_with(name: &str, constants: CanadianEnglishConstants) -> RuleSet {
    let mut set = RuleSet::new(name);
    if let Some(coarticulation) = constants.coarticulation {
        set = set.register(coarticulation);
    }
    set.register(constants.question)
        .register(constants.content)
        .register(constants.prosodic)
        .register(constants.quoted)
        .register(constants.decay)
        .register(constants.terminal)
        .register(constants.diphthong)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ProsodyEngine;
    use crate::params::{ParameterVector, PARAMETER_COUNT, PITCH};
    use crate::phonology::PhonemeTable;
    use crate::text::{Paragraph, Sentence, Word};
    use crate::{FrameKind, ProsodyError};

    fn vector(pitch: f64, fill: f64, duration: f64) -> ParameterVector {
        let mut slots = vec![fill; PARAMETER_COUNT];
        slots[PITCH] = pitch;
        slots[PARAMETER_COUNT - 1] = duration;
        ParameterVector::try_from(slots).unwrap()
    }

    fn table() -> PhonemeTable {
        let mut table = PhonemeTable::new()
            .with_vowels("aeiouæɛɪʊʌɑɔə")
            .with_stops("pbtdkɡ")
            .with_liquids("lɹ");
        for symbol in "aeouæɛɪʊʌɑɔəpbtdkɡhjnmszwʍð".chars() {
            table.insert(symbol, vec![vector(120.0, 10.0, 100.0)]).unwrap();
        }
        table.insert('i', vec![vector(120.0, 40.0, 100.0)]).unwrap();
        table.insert('ɹ', vec![vector(120.0, 10.0, 60.0)]).unwrap();
        table
            .insert(
                'l',
                vec![vector(120.0, 10.0, 40.0), vector(120.0, 10.0, 30.0)],
            )
            .unwrap();
        table
    }

    #[test]
    fn revised_profile_registers_rules_in_order() {
        assert_eq!(
            rule_set().rule_names(),
            vec![
                "liquid_vowel_coarticulation",
                "question_intonation",
                "content_emphasis",
                "prosodic_emphasis",
                "quoted_speech",
                "sentence_pitch_decay",
                "terminal_lengthening",
                "diphthong_shortening",
            ]
        );
        assert_eq!(rule_set().name(), "en-CA");
    }

    #[test]
    fn initial_profile_differs_only_where_documented() {
        let initial = CanadianEnglishConstants::initial();
        let revised = CanadianEnglishConstants::revised();

        assert!(initial.coarticulation.is_none());
        assert_eq!(initial.decay.decay_constant, 0.1);
        assert_eq!(initial.question.fall_penultimate, 1.05);
        assert_eq!(initial.question.fall_final, 1.1);
        assert_eq!(initial.question.rise_bias, 0.0);
        assert!(!initial.question.fall_words.contains(&"hʌm"));
        assert_eq!(initial.content, revised.content);
        assert_eq!(initial.terminal, revised.terminal);
        assert_eq!(rule_set_for(Revision::Initial).rule_names()[0], "question_intonation");
    }

    #[test]
    fn coarticulation_only_follows_the_liquids_last_set() {
        let engine = ProsodyEngine::new(table(), rule_set());
        let paragraph = Paragraph::new(vec![Sentence::statement(vec![
            Word::new("lɪt"),
            Word::new("nau"),
        ])]);
        let result = engine.render(&paragraph).unwrap();

        let kinds: Vec<(char, FrameKind)> =
            result.frames.iter().take(4).map(|f| (f.symbol, f.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                ('l', FrameKind::Phoneme),
                ('l', FrameKind::Phoneme),
                ('l', FrameKind::Suffix),
                ('ɪ', FrameKind::Phoneme),
            ]
        );
        assert_eq!(result.frames[2].parameters.duration(), 25.0);
        assert_eq!(result.inserted_count(), 1);
    }

    #[test]
    fn coarticulation_blend_shorter_than_half_a_unit_is_rejected() {
        let mut table = table();
        table.insert('i', vec![vector(120.0, 40.0, 1.5)]).unwrap();
        let engine = ProsodyEngine::new(table, rule_set());
        let paragraph = Paragraph::new(vec![Sentence::statement(vec![Word::new("li")])]);

        let err = engine.render(&paragraph).unwrap_err();
        assert!(matches!(
            err,
            ProsodyError::NonPositiveDuration {
                symbol: 'l',
                rule: "liquid_vowel_coarticulation",
                duration,
            } if duration == 0.0
        ));
    }

    #[test]
    fn initial_revision_never_inserts() {
        let engine = ProsodyEngine::new(table(), rule_set_for(Revision::Initial));
        let paragraph = Paragraph::new(vec![Sentence::statement(vec![Word::new("ɹid")])]);
        let result = engine.render(&paragraph).unwrap();
        assert_eq!(result.inserted_count(), 0);
        assert_eq!(result.phoneme_symbols(), vec!['ɹ', 'i', 'd']);
    }

    #[test]
    fn phoneme_order_survives_the_full_profile() {
        let engine = ProsodyEngine::new(table(), rule_set());
        let paragraph = Paragraph::new(vec![
            Sentence::statement(vec![
                Word::new("hi"),
                Word::new("sɛd").quoted().emphasized(),
                Word::new("ɹɪli").content(),
            ]),
            Sentence::question(vec![Word::new("ʍɛɹ"), Word::new("ɑɹ"), Word::new("ju")]),
        ]);
        let result = engine.render(&paragraph).unwrap();

        // 'l' has two baseline parameter-sets.
        let expected: Vec<char> = "hisɛdɹɪlliʍɛɹɑɹju".chars().collect();
        assert_eq!(result.phoneme_symbols(), expected);
        assert_eq!(result.inserted_count(), 2);
        assert!(result
            .parameter_sets()
            .all(|p| p.duration() > 0.0 && p.as_slice().len() == PARAMETER_COUNT));
    }

    #[test]
    fn statement_pitch_declines_and_last_vowel_lengthens() {
        let engine = ProsodyEngine::new(table(), rule_set());
        let paragraph = Paragraph::new(vec![Sentence::statement(vec![
            Word::new("sɪt"),
            Word::new("sɪt"),
        ])]);
        let result = engine.render(&paragraph).unwrap();
        let vowels: Vec<&ParameterVector> = result
            .frames
            .iter()
            .filter(|f| f.symbol == 'ɪ')
            .map(|f| &f.parameters)
            .collect();

        let ratio: f64 = 1.0 - 0.05 / 2.0;
        assert!((vowels[0].pitch() - 120.0 * ratio).abs() < 1e-9);
        assert!((vowels[1].pitch() - 120.0 * ratio.powi(2)).abs() < 1e-9);
        assert_eq!(vowels[0].duration(), 100.0);
        assert_eq!(vowels[1].duration(), 150.0);
    }

    #[test]
    fn wh_question_ends_with_a_fall() {
        let engine = ProsodyEngine::new(table(), rule_set());
        let paragraph = Paragraph::new(vec![Sentence::question(vec![
            Word::new("ʍɛɹ"),
            Word::new("ɑɹ"),
            Word::new("ju"),
        ])]);
        let result = engine.render(&paragraph).unwrap();
        let pitch_of = |symbol: char| {
            result
                .frames
                .iter()
                .find(|f| f.symbol == symbol && f.kind == FrameKind::Phoneme)
                .map(|f| f.parameters.pitch())
                .unwrap()
        };

        assert!((pitch_of('ɛ') - 120.0 / 0.9).abs() < 1e-9);
        assert!((pitch_of('ɑ') - 120.0 / 1.075).abs() < 1e-9);
        assert!((pitch_of('u') - 120.0 / 1.125).abs() < 1e-9);
    }
}

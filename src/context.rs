use crate::params::ParameterVector;
use crate::phonology::PhonemeInventory;
use crate::text::{Sentence, Word};

/// Where a sentence sits in its paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentencePlacement {
    /// Indexed from 1.
    pub position: usize,
    /// Sentences after this one in the paragraph.
    pub remaining: usize,
}

/// Everything a rule may know about the sound being processed.
///
/// Rebuilt for every rule call; rules only ever see it by shared reference.
#[derive(Clone, Copy)]
pub struct RuleContext<'a> {
    pub inventory: &'a dyn PhonemeInventory,
    pub symbol: char,
    /// Symbols before the current one in the current word.
    pub preceding_phonemes: &'a [char],
    /// Symbols after the current one in the current word.
    pub following_phonemes: &'a [char],
    /// Indexed from 1.
    pub word_position: usize,
    pub remaining_words: usize,
    pub previous_words: &'a [&'a Word],
    /// Indexed from 1.
    pub sentence_position: usize,
    pub remaining_sentences: usize,
    pub is_quoted: bool,
    pub is_emphasized: bool,
    pub is_content: bool,
    pub is_question: bool,
    pub is_exclamation: bool,
    /// Parameter-sets already emitted for this same phoneme.
    pub previous_phoneme_parameters: &'a [ParameterVector],
    /// Parameter-sets of this phoneme still to be processed after this one.
    pub remaining_phoneme_parameter_count: usize,
    /// Prefix insertions made by earlier rules in this pass.
    pub previous_sound_parameters: &'a [ParameterVector],
    /// Suffix insertions queued by earlier rules in this pass.
    pub following_sound_parameters: &'a [ParameterVector],
}

impl<'a> RuleContext<'a> {
    /// Assemble the context for one phoneme of one word.
    ///
    /// Phoneme slices never cross the word boundary; only `previous_words`
    /// reaches back into earlier words. The per-parameter-set and per-rule
    /// fields start empty and are filled in by the engine.
    ///
    /// # Panics
    ///
    /// If `word_index` or `phoneme_index` is out of range for `sentence`.
    pub fn assemble(
        inventory: &'a dyn PhonemeInventory,
        sentence: &'a Sentence,
        placement: SentencePlacement,
        word_index: usize,
        phoneme_index: usize,
        previous_words: &'a [&'a Word],
    ) -> Self {
        let word = &sentence.words[word_index];
        let symbol = word.phonemes[phoneme_index];

        Self {
            inventory,
            symbol,
            preceding_phonemes: &word.phonemes[..phoneme_index],
            following_phonemes: &word.phonemes[phoneme_index + 1..],
            word_position: word_index + 1,
            remaining_words: sentence.words.len() - word_index - 1,
            previous_words,
            sentence_position: placement.position,
            remaining_sentences: placement.remaining,
            is_quoted: word.is_quoted,
            is_emphasized: word.is_emphasized,
            is_content: word.is_content,
            is_question: sentence.is_question,
            is_exclamation: sentence.is_exclamation,
            previous_phoneme_parameters: &[],
            remaining_phoneme_parameter_count: 0,
            previous_sound_parameters: &[],
            following_sound_parameters: &[],
        }
    }

    pub fn is_vowel(&self, symbol: char) -> bool {
        self.inventory.is_vowel(symbol)
    }

    pub fn is_stop(&self, symbol: char) -> bool {
        self.inventory.is_stop(symbol)
    }

    pub fn is_liquid(&self, symbol: char) -> bool {
        self.inventory.is_liquid(symbol)
    }

    pub fn is_last_word(&self) -> bool {
        self.remaining_words == 0
    }

    /// Current word's full spelling: preceding, current, then following symbols.
    pub fn word_spells(&self, ipa: &str) -> bool {
        self.preceding_phonemes
            .iter()
            .copied()
            .chain(std::iter::once(self.symbol))
            .chain(self.following_phonemes.iter().copied())
            .eq(ipa.chars())
    }

    pub fn next_phoneme(&self) -> Option<char> {
        self.following_phonemes.first().copied()
    }

    pub fn previous_phoneme(&self) -> Option<char> {
        self.preceding_phonemes.last().copied()
    }
}

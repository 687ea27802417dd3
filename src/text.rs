//! Annotated transcription supplied by the text front end.
//!
//! Positions and remaining counts are not stored; the engine derives them from
//! where a word or sentence sits in its container.

/// One transcribed word: its IPA symbols plus the front end's annotations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    pub phonemes: Vec<char>,
    pub is_quoted: bool,
    pub is_emphasized: bool,
    pub is_content: bool,
}

impl Word {
    /// A plain word from its IPA spelling, one symbol per `char`.
    pub fn new(ipa: &str) -> Self {
        Self {
            phonemes: ipa.chars().collect(),
            ..Default::default()
        }
    }

    /// Mark the word as quoted speech.
    pub fn quoted(mut self) -> Self {
        self.is_quoted = true;
        self
    }

    /// Mark the word as prosodically emphasized.
    pub fn emphasized(mut self) -> Self {
        self.is_emphasized = true;
        self
    }

    /// Mark the word as a content word.
    pub fn content(mut self) -> Self {
        self.is_content = true;
        self
    }

    /// True if the word's symbols spell exactly `ipa`.
    pub fn spells(&self, ipa: &str) -> bool {
        self.phonemes.iter().copied().eq(ipa.chars())
    }

    /// First IPA symbol, if the word is not empty.
    pub fn first_symbol(&self) -> Option<char> {
        self.phonemes.first().copied()
    }
}

/// Words of one sentence plus its mood.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    pub words: Vec<Word>,
    pub is_question: bool,
    pub is_exclamation: bool,
}

impl Sentence {
    /// A declarative sentence.
    pub fn statement(words: Vec<Word>) -> Self {
        Self {
            words,
            ..Default::default()
        }
    }

    /// A sentence ending in a question mark.
    pub fn question(words: Vec<Word>) -> Self {
        Self {
            words,
            is_question: true,
            is_exclamation: false,
        }
    }

    /// A sentence ending in an exclamation mark.
    pub fn exclamation(words: Vec<Word>) -> Self {
        Self {
            words,
            is_question: false,
            is_exclamation: true,
        }
    }

    /// Derive the sentence mood from its terminal punctuation mark.
    pub fn terminated_by(words: Vec<Word>, terminal: Option<char>) -> Self {
        match terminal {
            Some('?') => Self::question(words),
            Some('!') => Self::exclamation(words),
            _ => Self::statement(words),
        }
    }
}

/// The unit of rendering: sentences in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    /// Wrap sentences into a paragraph.
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Total words across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences.iter().map(|s| s.words.len()).sum()
    }
}

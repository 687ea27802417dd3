//! Closed lexical lists consulted by question intonation.

/// Voiceless labio-velar onset of "wh-" words.
pub const WH_ONSET: char = '\u{028d}';

/// Interrogatives that trigger a falling contour later in the question
/// (how, who, and the filler "hum").
pub const FALL_WORDS: &[&str] = &["hæw", "hu", "hʌm"];

/// Fall triggers of the initial revision, before the filler was added.
pub const INITIAL_FALL_WORDS: &[&str] = &["hæw", "hu"];

/// Question words spoken with an initial rise: how, who, where, what, when, why.
pub const QUESTION_WORDS: &[&str] = &["hæw", "hu", "ʍɛɹ", "ʍət", "ʍɛn", "ʍʌj"];

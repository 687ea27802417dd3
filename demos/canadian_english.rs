use std::time::Instant;

use prosody_rs::{
    engine::{EngineParamsBuilder, HistoryScope, ProsodyEngine},
    languages::english_canadian,
    params::PARAMETER_COUNT,
    phonology::PhonemeTable,
    text::{Paragraph, Sentence, Word},
};

/// Toy baseline table: one flat parameter-set per symbol, two for 'l'.
fn demo_table_json() -> String {
    let row = |pitch: f64, amplitude: f64, duration: f64| {
        let mut slots = vec![0.0; PARAMETER_COUNT];
        slots[0] = pitch;
        slots[5] = amplitude;
        slots[PARAMETER_COUNT - 1] = duration;
        slots
    };

    let mut phonemes = serde_json::Map::new();
    for symbol in "aeiouæɛɪʊʌɑɔə".chars() {
        phonemes.insert(symbol.to_string(), serde_json::json!([row(120.0, 60.0, 110.0)]));
    }
    for symbol in "pbtdkɡhjnmszʃwʍðɹ".chars() {
        phonemes.insert(symbol.to_string(), serde_json::json!([row(120.0, 40.0, 70.0)]));
    }
    phonemes.insert(
        "l".to_string(),
        serde_json::json!([row(120.0, 45.0, 40.0), row(120.0, 50.0, 35.0)]),
    );

    serde_json::json!({
        "vowels": "aeiouæɛɪʊʌɑɔə".chars().map(String::from).collect::<Vec<_>>(),
        "stops": "pbtdkɡ".chars().map(String::from).collect::<Vec<_>>(),
        "liquids": ["l", "ɹ"],
        "phonemes": phonemes,
    })
    .to_string()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let table = PhonemeTable::from_json(&demo_table_json())?;
    let params = EngineParamsBuilder::default()
        .history_scope(HistoryScope::Sentence)
        .build()?;
    let engine = ProsodyEngine::with_params(table, english_canadian::rule_set(), params);

    // "She said "really". Where are you?"
    let paragraph = Paragraph::new(vec![
        Sentence::terminated_by(
            vec![
                Word::new("ʃi"),
                Word::new("sɛd"),
                Word::new("ɹɪli").quoted().emphasized().content(),
            ],
            Some('.'),
        ),
        Sentence::terminated_by(
            vec![Word::new("ʍɛɹ"), Word::new("ɑɹ"), Word::new("ju")],
            Some('?'),
        ),
    ]);

    let start = Instant::now();
    let result = engine.render(&paragraph)?;
    println!(
        "Rendered {} parameter-sets ({} inserted) in {:.2?}, total duration {:.1}",
        result.len(),
        result.inserted_count(),
        start.elapsed(),
        result.total_duration()
    );

    for frame in &result.frames {
        println!(
            "{:>2} {:<8} f0={:>7.2} dur={:>6.1} gain={:>4.1}",
            frame.symbol,
            format!("{:?}", frame.kind),
            frame.parameters.pitch(),
            frame.parameters.duration(),
            frame.parameters.bypass_gain()
        );
    }

    println!("{}", serde_json::to_string(&result.frames[0])?);
    Ok(())
}

//! End-to-end demo of every practice mode.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=debug` to see the engine's session logging.
//!
//! A small inline catalog is loaded, then one seeded session per mode is
//! generated and played automatically (alternating right and wrong answers),
//! reporting every outcome to a file-backed progress tracker in the system
//! temp directory.

use vocab_drill::training_engine::modes::matching::{CardId, CardSide, MatchEvent};
use vocab_drill::training_engine::modes::strokes::StrokeMode;
use vocab_drill::{
    generate_session, Catalog, DrillConfig, FileStore, PracticeSet, ProgressTracker,
    SessionRequest, SessionSummary, TrainingMode,
};

const CATALOG: &str = r#"{
  "blocks": [
    {"id": 1, "name": "Greetings", "chineseName": "问候", "words": [
      {"id": 1, "character": "你好", "pinyin": "nǐ hǎo", "translation": "hello"},
      {"id": 2, "character": "谢谢", "pinyin": "xièxie", "translation": "thank you"},
      {"id": 3, "character": "再见", "pinyin": "zàijiàn", "translation": "goodbye"},
      {"id": 4, "character": "对不起", "pinyin": "duìbuqǐ", "translation": "sorry"},
      {"id": 5, "character": "没关系", "pinyin": "méi guānxi", "translation": "it doesn't matter"}
    ]},
    {"id": 2, "name": "Family", "chineseName": "家庭", "words": [
      {"id": 6, "character": "妈妈", "pinyin": "māma", "translation": "mother"},
      {"id": 7, "character": "爸爸", "pinyin": "bàba", "translation": "father"},
      {"id": 8, "character": "哥哥", "pinyin": "gēge", "translation": "older brother"},
      {"id": 9, "character": "姐姐", "pinyin": "jiějie", "translation": "older sister"},
      {"id": 10, "character": "朋友", "pinyin": "péngyou", "translation": "friend"}
    ]}
  ],
  "extras": {
    "weekdays": [{"character": "星期一", "pinyin": "xīngqī yī", "translation": "Monday"}],
    "months": [{"character": "一月", "pinyin": "yīyuè", "translation": "January"}]
  }
}"#;

fn print_summary(id: &str, summary: &SessionSummary) {
    println!("  [{id}] {}", summary.mode);
    println!(
        "    correct {}  wrong {}  score {}  best combo {}  {}% grade {}{}{}",
        summary.correct,
        summary.wrong,
        summary.score,
        summary.best_combo,
        summary.percentage,
        summary.grade,
        if summary.timed_out { "  (time up)" } else { "" },
        if summary.celebrate { "  🎉" } else { "" },
    );
}

fn main() {
    env_logger::init();

    let catalog = Catalog::from_json_str(CATALOG).expect("demo catalog is valid");
    let config = DrillConfig::default();
    let store_path = std::env::temp_dir().join("vocab_drill_demo").join("progress.json");
    let mut progress = ProgressTracker::new(FileStore::new(&store_path));
    progress.save_name("Demo learner");

    println!();
    println!("══ Search \"bro\" ══");
    for word in catalog.search("bro") {
        println!("  {word}");
    }

    println!();
    println!("══ One session per mode ══");
    let modes = [
        TrainingMode::Flashcards,
        TrainingMode::Quiz,
        TrainingMode::Typing,
        TrainingMode::Test,
        TrainingMode::Matching,
        TrainingMode::Strokes,
    ];
    for (seed, mode) in modes.into_iter().enumerate() {
        let request = SessionRequest::new(mode).with_seed(seed as u64 + 1);
        let session = generate_session(&request, &catalog, &config).expect("catalog has words");
        let id = session.session_id.clone();

        let summary = match session.set {
            PracticeSet::Flashcards(mut deck) => {
                let mut known = true;
                while deck.current().is_some() {
                    if let Some(o) = deck.mark(known) {
                        progress.record_answer(o.correct, o.combo_for_stats);
                    }
                    known = !known;
                    deck.next();
                }
                deck.finish()
            }
            PracticeSet::Quiz(mut quiz) | PracticeSet::Test(mut quiz) => {
                let mut turn = 0;
                while let Some(round) = quiz.current() {
                    // Every third answer picks the first wrong option.
                    let pick = match round.options.iter().find(|o| o.id != round.target.id) {
                        Some(wrong) if turn % 3 == 2 => wrong.id,
                        _ => round.target.id,
                    };
                    if let Some(o) = quiz.choose(pick) {
                        progress.record_answer(o.correct, o.combo_for_stats);
                    }
                    quiz.tick();
                    quiz.next();
                    turn += 1;
                }
                quiz.finish()
            }
            PracticeSet::Typing(mut typing) => {
                while let Some(word) = typing.current() {
                    let answer = word.translation.to_uppercase();
                    println!("    {} → typed {:?}", word.glyph, answer);
                    if let Some(o) = typing.submit(&answer) {
                        progress.record_answer(o.correct, o.combo_for_stats);
                    }
                    typing.drill_mut().next();
                }
                typing.drill_mut().finish()
            }
            PracticeSet::Matching(mut game) => {
                while !game.is_complete() {
                    let Some(word) = game
                        .translation_cards()
                        .map(|c| c.id.word)
                        .find(|w| !game.is_matched(*w))
                    else {
                        break;
                    };
                    game.select(CardId { word, side: CardSide::Translation });
                    if let MatchEvent::Matched { outcome, revealed } =
                        game.select(CardId { word, side: CardSide::Glyph })
                    {
                        progress.record_answer(outcome.correct, outcome.combo_for_stats);
                        if let Some(next) = revealed {
                            println!("    matched {word}, revealed {next}");
                        }
                    }
                    game.tick();
                }
                println!("    clock left {}", game.countdown().display());
                game.finish()
            }
            PracticeSet::Strokes(mut strokes) => {
                strokes.set_mode(StrokeMode::Quiz);
                if let Some(word) = strokes.current_word() {
                    println!("    writing {} ({:?})", word.glyph, strokes.glyphs());
                }
                strokes.record_mistake();
                strokes.record_complete();
                println!("    mistakes {}  done {}", strokes.mistakes(), strokes.is_completed());
                None
            }
        };

        if let Some(summary) = summary {
            progress.complete_session();
            print_summary(&id, &summary);
        }
    }

    let record = progress.load();
    println!();
    println!("══ Progress for {} ══", record.name);
    println!(
        "  answered {}  correct {}  wrong {}  accuracy {}%  best combo {}  sessions {}",
        record.stats.total_answered,
        record.stats.correct_answers,
        record.stats.wrong_answers,
        record.stats.accuracy(),
        record.stats.best_combo,
        record.stats.sessions_completed,
    );
    println!("  stored at {}", store_path.display());
    progress.reset_stats(true);
}

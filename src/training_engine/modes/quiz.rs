use rand::Rng;
use crate::training_engine::{
    config::DrillConfig,
    models::{AnswerOutcome, Round, TrainingMode, Word, WordId},
    modes::Drill,
    sampler::build_rounds,
    session::PracticeSession,
};

pub type ChoiceDrill = Drill<Round>;

pub fn generate<R: Rng>(
    rng: &mut R,
    pool: &[Word],
    length: Option<usize>,
    config: &DrillConfig,
) -> ChoiceDrill {
    let rounds = build_rounds(rng, pool, length.unwrap_or(config.quiz_questions), config.option_count);
    let session = PracticeSession::new(
        TrainingMode::Quiz,
        rounds.len(),
        config.scoring_for(TrainingMode::Quiz),
    );
    Drill::new(rounds, session)
}

impl Drill<Round> {
    /// Judge the picked option against the current round's target.
    pub fn choose(&mut self, selected: WordId) -> Option<AnswerOutcome> {
        let correct = self.current()?.is_correct(selected);
        self.session_mut().answer(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::catalog::fixtures;
    use crate::training_engine::shuffle::rng_from_seed;

    fn pool() -> Vec<Word> {
        fixtures::catalog().words_in_selection(&Default::default()).unwrap()
    }

    #[test]
    fn ten_rounds_of_four_options() {
        let mut rng = rng_from_seed(Some(8));
        let quiz = generate(&mut rng, &pool(), None, &DrillConfig::default());
        assert_eq!(quiz.items().len(), 10);
        for round in quiz.items() {
            assert_eq!(round.options.len(), 4);
            assert!(round.correct_index().is_some());
        }
    }

    #[test]
    fn choosing_scores_with_streak_bonus() {
        let mut rng = rng_from_seed(Some(9));
        let mut quiz = generate(&mut rng, &pool(), Some(3), &DrillConfig::default());

        let target = quiz.current().unwrap().target.id;
        let first = quiz.choose(target).unwrap();
        assert_eq!((first.points, first.combo_for_stats), (10, 1));
        assert!(quiz.choose(target).is_none(), "one answer per round");
        quiz.next();

        let target = quiz.current().unwrap().target.id;
        assert_eq!(quiz.choose(target).unwrap().points, 12);
        quiz.next();

        let round = quiz.current().unwrap();
        let wrong = round.options.iter().find(|w| w.id != round.target.id).unwrap().id;
        let miss = quiz.choose(wrong).unwrap();
        assert!(!miss.correct);
        assert!(!quiz.next());

        let summary = quiz.finish().unwrap();
        assert_eq!(summary.score, 22);
        assert_eq!(summary.best_combo, 2);
        assert!(!summary.celebrate, "22 < 3 * 8");
    }
}

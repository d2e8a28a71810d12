use serde::{Deserialize, Serialize};
use crate::training_engine::models::{Word, WordId};

/// How forgiving free-text judging is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "min_chars")]
pub enum TypedAnswerPolicy {
    /// Exact match, or either side containing the other.
    /// Accepts very short inputs such as "ca" for "cat".
    #[default]
    Loose,
    /// Exact match always counts; containment only counts when the shorter
    /// side has at least this many characters.
    MinLength(usize),
}

/// Choice-based judging: the picked option must be the target itself.
pub fn judge_choice(selected: WordId, target: &Word) -> bool {
    selected == target.id
}

/// Free-text judging with the [`TypedAnswerPolicy::Loose`] policy.
pub fn judge_typed(input: &str, target: &Word) -> bool {
    judge_typed_with(input, target, TypedAnswerPolicy::Loose)
}

/// Free-text judging under the given [`TypedAnswerPolicy`].
pub fn judge_typed_with(input: &str, target: &Word, policy: TypedAnswerPolicy) -> bool {
    let given = normalize(input);
    let expected = normalize(&target.translation);

    // An empty side would otherwise be "contained" in anything.
    if given.is_empty() || expected.is_empty() {
        return false;
    }
    if given == expected {
        return true;
    }

    let contained = expected.contains(&given) || given.contains(&expected);
    match policy {
        TypedAnswerPolicy::Loose => contained,
        TypedAnswerPolicy::MinLength(min) => {
            let shorter = given.chars().count().min(expected.chars().count());
            contained && shorter >= min
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

use crate::server::service::scoring::{
    comment_base, fallback_score, weighted_score, Ratings, FALLBACK_MAX_SCORE, FALLBACK_MIN_SCORE,
};

fn ratings(understanding: u8, difficulty: u8, satisfaction: u8) -> Ratings {
    Ratings {
        understanding,
        difficulty,
        satisfaction,
    }
}

/// Expect the weighted score to be absent until a teacher score exists
#[test]
fn weighted_requires_teacher_score() {
    assert_eq!(weighted_score(77.5, None, 0.5), None);
    assert_eq!(weighted_score(77.5, Some(90.0), 0.5), Some(83.75));
    assert_eq!(weighted_score(60.0, Some(90.0), 0.0), Some(60.0));
    assert_eq!(weighted_score(60.0, Some(90.0), 1.0), Some(90.0));
}

/// Expect the weighted score to lie between the self and teacher scores
#[test]
fn weighted_between_inputs() {
    let scores = [0.0, 12.5, 59.9, 60.0, 85.0, 100.0];
    let ratios = [0.0, 0.25, 0.5, 0.75, 1.0];

    for self_score in scores {
        for teacher in scores {
            for ratio in ratios {
                let weighted = weighted_score(self_score, Some(teacher), ratio).unwrap();
                let low = self_score.min(teacher) - 1e-9;
                let high = self_score.max(teacher) + 1e-9;

                assert!(
                    (low..=high).contains(&weighted),
                    "{} outside [{}, {}]",
                    weighted,
                    low,
                    high
                );
            }
        }
    }
}

/// Expect the length bands to switch at 50, 200 and 500 characters
#[test]
fn comment_base_bands() {
    assert_eq!(comment_base(""), 50.0);
    assert_eq!(comment_base(&"a".repeat(49)), 50.0);
    assert_eq!(comment_base(&"a".repeat(50)), 75.0);
    assert_eq!(comment_base(&"a".repeat(200)), 75.0);
    assert_eq!(comment_base(&"a".repeat(201)), 70.0);
    assert_eq!(comment_base(&"a".repeat(500)), 70.0);
    assert_eq!(comment_base(&"a".repeat(501)), 65.0);
}

/// Expect multi-byte comments to be measured in characters
#[test]
fn comment_base_counts_characters() {
    // 50 characters, 150 bytes
    assert_eq!(comment_base(&"学".repeat(50)), 75.0);
}

/// Expect the documented 77.5 for a 120 character comment rated 4/3/5
#[test]
fn fallback_worked_example() {
    let comment = "x".repeat(120);

    assert_eq!(fallback_score(&comment, ratings(4, 3, 5)), 77.5);
}

/// Expect the fallback to stay within 60-95 for every rating and length combination
#[test]
fn fallback_is_clamped() {
    for len in [0, 49, 50, 200, 501] {
        let comment = "a".repeat(len);

        for u in 1..=5 {
            for d in 1..=5 {
                for s in 1..=5 {
                    let score = fallback_score(&comment, ratings(u, d, s));

                    assert!((FALLBACK_MIN_SCORE..=FALLBACK_MAX_SCORE).contains(&score));
                }
            }
        }
    }

    assert_eq!(fallback_score("", ratings(1, 1, 1)), FALLBACK_MIN_SCORE);
}

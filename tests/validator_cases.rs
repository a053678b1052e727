//! Validation pipeline cases
//!
//! Each case runs the full pipeline and checks that the first failing stage
//! reports exactly one message.

use rstest::{fixture, rstest};
use tennis_score::{
    compute_stats, validate, GamesCount, LastSetPolicy, MatchRules, MatchStats, ScoreFormat,
    ScoreValidator, SetsCount, Validated,
};

#[fixture]
fn validator() -> ScoreValidator {
    ScoreValidator::new(MatchRules::pro_tour(), ScoreFormat::default()).unwrap()
}

#[fixture]
fn club_validator() -> ScoreValidator {
    ScoreValidator::new(MatchRules::club(), ScoreFormat::default()).unwrap()
}

fn invalid(message: &str) -> Validated<String> {
    Validated::Invalid(vec![message.to_string()])
}

#[rstest]
#[case("6:4 6:2")]
#[case("2:6 5:7")]
#[case("6:0 6:7(8) 7:5")]
#[case("6:7(0) 7:6(11) 6:7(100)")]
fn test_valid_score(validator: ScoreValidator, #[case] score: &str) {
    assert_eq!(validator.validate(score), Validated::Valid(score.to_string()));
}

#[rstest]
#[case("6:-1 6:2")]
#[case("just invalid")]
#[case("6:0,6:0")]
#[case("7:5 6:O")]
#[case("8:3 6:2")]
#[case("6:0")]
#[case("")]
#[case("6:4 6:2 ")]
#[case("6:0 6:0 6:2 5:7")]
fn test_invalid_format(validator: ScoreValidator, #[case] score: &str) {
    assert_eq!(validator.validate(score), invalid("Score has invalid format"));
}

#[rstest]
#[case("6:0 6:0 6:2")]
#[case("4:6 3:6 4:6")]
fn test_too_many_won_sets(validator: ScoreValidator, #[case] score: &str) {
    assert_eq!(
        validator.validate(score),
        invalid("Number of won sets is too large")
    );
}

#[rstest]
#[case("4:5 6:7(8)", 1)]
#[case("3:6 0:1", 2)]
#[case("3:6 6:1 3:2", 3)]
fn test_too_few_games(validator: ScoreValidator, #[case] score: &str, #[case] set: usize) {
    assert_eq!(
        validator.validate(score),
        invalid(&format!(
            "Set {set} has invalid number of games: value is too small"
        ))
    );
}

#[rstest]
fn test_too_few_games_for_tiebreak_set(club_validator: ScoreValidator) {
    assert_eq!(
        club_validator.validate("3:6 6:1 4:6"),
        invalid("Set 3 has invalid number of games: value is too small")
    );
}

#[rstest]
fn test_equal_games(validator: ScoreValidator) {
    assert_eq!(
        validator.validate("3:6 6:6 6:2"),
        invalid("Set 2 has invalid number of games: games cannot be equal")
    );
}

#[rstest]
fn test_unparseable_tiebreak(validator: ScoreValidator) {
    assert_eq!(
        validator.validate("6:4 7:6(99999999999)"),
        invalid("Unable to parse the score")
    );
}

#[rstest]
#[case("6:7(5) 7:5 6:10")]
#[case("6:3 1:6 10:2")]
#[case("6:3 1:6 12:10")]
fn test_club_valid_scores(club_validator: ScoreValidator, #[case] score: &str) {
    assert!(club_validator.validate(score).is_valid(), "{score}");
}

#[test]
fn test_single_set_with_extra_tiebreak_set_is_too_many_sets() {
    let rules = MatchRules::new(SetsCount::One, GamesCount::Six, LastSetPolicy::TiebreakSet);
    let validator = ScoreValidator::new(rules, ScoreFormat::default()).unwrap();
    assert_eq!(
        validator.validate("6:4 10:8"),
        invalid("Number of sets is too large")
    );
    assert_eq!(
        validator.validate("6:4"),
        invalid("Set 1 has invalid number of games: value is too small")
    );
}

#[rstest]
#[case("6:4 6:3", "Set 2 has invalid number of games: value is too small")]
#[case("4:6 6:3", "Set 2 has invalid number of games: value is too small")]
#[case("7:6(4) 6:7(5)", "Set 2 has invalid number of games: value is too small")]
fn test_club_last_parsed_set_needs_tiebreak_set_target(
    club_validator: ScoreValidator,
    #[case] score: &str,
    #[case] message: &str,
) {
    assert_eq!(club_validator.validate(score), invalid(message));
}

#[fixture]
fn five_set_club_validator() -> ScoreValidator {
    let rules = MatchRules::new(SetsCount::Five, GamesCount::Six, LastSetPolicy::TiebreakSet);
    ScoreValidator::new(rules, ScoreFormat::default()).unwrap()
}

#[rstest]
#[case("6:4 3:6 6:4 3:6 10:8")]
#[case("6:4 3:6 6:4 3:6 4:10")]
#[case("6:4 3:6 6:4 3:6 14:12")]
fn test_five_set_tiebreak_set_valid(five_set_club_validator: ScoreValidator, #[case] score: &str) {
    assert_eq!(
        five_set_club_validator.validate(score),
        Validated::Valid(score.to_string())
    );
}

#[rstest]
#[case("6:4 3:6 6:4 3:6 7:5", "Set 5 has invalid number of games: value is too small")]
#[case("6:4 3:6 6:4 6:3", "Set 4 has invalid number of games: value is too small")]
#[case("6:4 6:3 6:2", "Set 3 has invalid number of games: value is too small")]
#[case("6:4 3:6 6:4 3:6 10:10", "Set 5 has invalid number of games: games cannot be equal")]
#[case("6:4 6:3", "Score has invalid format")]
fn test_five_set_tiebreak_set_invalid(
    five_set_club_validator: ScoreValidator,
    #[case] score: &str,
    #[case] message: &str,
) {
    assert_eq!(five_set_club_validator.validate(score), invalid(message));
}

#[test]
fn test_alternative_game_separator() {
    let format = ScoreFormat::new(" ", "/").unwrap();
    let validator = ScoreValidator::new(MatchRules::pro_tour(), format).unwrap();
    assert!(validator.validate("6/4 6/2").is_valid());
    assert_eq!(
        validator.validate("6:4 6:2"),
        invalid("Score has invalid format")
    );
}

#[test]
fn test_four_game_sets() {
    let rules = MatchRules::new(SetsCount::Three, GamesCount::Four, LastSetPolicy::TiebreakGame);
    let validator = ScoreValidator::new(rules, ScoreFormat::default()).unwrap();
    assert!(validator.validate("4:2 5:3").is_valid());
    assert_eq!(
        validator.validate("6:4 6:2"),
        invalid("Score has invalid format")
    );
    assert_eq!(
        validator.validate("4:2 3:2"),
        invalid("Set 2 has invalid number of games: value is too small")
    );
}

#[test]
fn test_validate_then_compute_stats() {
    let rules = MatchRules::pro_tour();
    let format = ScoreFormat::default();
    assert_eq!(
        validate(&rules, &format, "6:4 6:2").unwrap(),
        Validated::Valid("6:4 6:2".to_string())
    );

    let validator = ScoreValidator::new(rules, format).unwrap();
    let parsed = validator.validate_parsed("6:4 6:2").into_result().unwrap();
    assert_eq!(
        compute_stats(&parsed.sets, &rules),
        MatchStats {
            unit_one_sets_diff: 2,
            unit_two_sets_diff: -2,
            unit_one_games_diff: 6,
            unit_two_games_diff: -6,
        }
    );
}

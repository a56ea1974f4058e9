use super::*;

fn rules(sets: SetFormat, allow_draws: bool) -> ScoringRules {
    ScoringRules::new(sets, allow_draws)
}

fn sheet(values: [Option<i32>; 6]) -> ScoreSheet {
    let [a1, b1, a2, b2, a3, b3] = values;
    ScoreSheet::new(a1, b1, a2, b2, a3, b3)
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_straight_sets_best_of_three_is_valid() {
    let s = sheet([Some(6), Some(3), Some(6), Some(4), None, None]);
    assert_eq!(validate(&s, &rules(SetFormat::BestOfThree, false)), Ok(()));
}

#[test]
fn test_tied_set_rejected() {
    let s = sheet([Some(6), Some(6), Some(6), Some(3), None, None]);
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::TiedSet { set: 1 })
    );
}

#[test]
fn test_unnecessary_third_set_rejected() {
    let s = sheet([Some(6), Some(3), Some(6), Some(4), Some(6), Some(3)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::UnnecessarySet { set: 3 })
    );
}

#[test]
fn test_split_without_decider_depends_on_draw_policy() {
    let s = sheet([Some(6), Some(3), Some(3), Some(6), None, None]);
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::DrawNotAllowed)
    );
    assert_eq!(validate(&s, &rules(SetFormat::BestOfThree, true)), Ok(()));
}

#[test]
fn test_split_with_decider_is_valid() {
    let s = ScoreSheet::from_sets(&[(6, 3), (3, 6), (6, 4)]);
    assert_eq!(validate(&s, &rules(SetFormat::BestOfThree, false)), Ok(()));
}

#[test]
fn test_tied_decider_rejected() {
    let s = ScoreSheet::from_sets(&[(6, 3), (3, 6), (5, 5)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, true)),
        Err(ValidationError::TiedSet { set: 3 })
    );
}

#[test]
fn test_first_set_is_mandatory() {
    let s = ScoreSheet::default();
    for format in [SetFormat::Single, SetFormat::Pair, SetFormat::BestOfThree] {
        assert_eq!(
            validate(&s, &rules(format, true)),
            Err(ValidationError::MissingSet { set: 1 })
        );
    }
}

#[test]
fn test_second_set_is_mandatory_beyond_single() {
    let s = ScoreSheet::from_sets(&[(6, 2)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Pair, false)),
        Err(ValidationError::MissingSet { set: 2 })
    );
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::MissingSet { set: 2 })
    );
    assert_eq!(validate(&s, &rules(SetFormat::Single, false)), Ok(()));
}

#[test]
fn test_half_entered_set_is_incomplete() {
    let s = sheet([Some(6), None, None, None, None, None]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Single, false)),
        Err(ValidationError::IncompleteSet { set: 1 })
    );
}

#[test]
fn test_single_set_rejects_extra_sets() {
    let s = ScoreSheet::from_sets(&[(6, 2), (6, 1)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Single, false)),
        Err(ValidationError::UnexpectedSet { set: 2, format: 1 })
    );

    let s = sheet([Some(6), Some(2), None, None, Some(1), None]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Single, false)),
        Err(ValidationError::UnexpectedSet { set: 3, format: 1 })
    );
}

#[test]
fn test_two_sets_rejects_third_even_after_split() {
    let s = ScoreSheet::from_sets(&[(6, 2), (2, 6), (6, 1)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Pair, true)),
        Err(ValidationError::UnexpectedSet { set: 3, format: 2 })
    );
}

#[test]
fn test_two_sets_rejects_tied_second_set() {
    let s = ScoreSheet::from_sets(&[(6, 2), (5, 5)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Pair, true)),
        Err(ValidationError::TiedSet { set: 2 })
    );
}

#[test]
fn test_half_entered_decider_is_incomplete() {
    let s = sheet([Some(6), Some(2), Some(2), Some(6), Some(6), None]);
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::IncompleteSet { set: 3 })
    );
}

#[test]
fn test_two_sets_split_is_a_draw() {
    let s = ScoreSheet::from_sets(&[(6, 2), (2, 6)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::Pair, false)),
        Err(ValidationError::DrawNotAllowed)
    );
    assert_eq!(validate(&s, &rules(SetFormat::Pair, true)), Ok(()));
}

#[test]
fn test_scores_out_of_range() {
    let s = ScoreSheet::from_sets(&[(8, 6), (6, 3)]);
    assert_eq!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::ScoreOutOfRange {
            set: 1,
            value: 8,
            max: 7
        })
    );

    let s = ScoreSheet::from_sets(&[(6, 3), (-1, 6)]);
    assert!(matches!(
        validate(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::ScoreOutOfRange { set: 2, value: -1, .. })
    ));
}

#[test]
fn test_game_bound_is_configurable() {
    let mut r = rules(SetFormat::Single, false);
    r.max_games_per_set = 9;
    assert_eq!(validate(&ScoreSheet::from_sets(&[(9, 7)]), &r), Ok(()));
}

#[test]
fn test_error_messages_are_readable() {
    assert_eq!(
        ValidationError::UnnecessarySet { set: 3 }.to_string(),
        "set 3 is not needed: the match was already decided"
    );
    assert_eq!(
        ValidationError::TiedSet { set: 2 }.to_string(),
        "set 2 cannot end in a tie"
    );
}

// =============================================================================
// Determination
// =============================================================================

#[test]
fn test_determine_straight_sets() {
    let outcome = determine(
        &ScoreSheet::from_sets(&[(6, 3), (6, 4)]),
        &rules(SetFormat::BestOfThree, false),
    );
    assert_eq!(outcome.result, ResultType::WinA);
    assert_eq!((outcome.sets_won_a, outcome.sets_won_b), (2, 0));
}

#[test]
fn test_determine_three_sets() {
    let outcome = determine(
        &ScoreSheet::from_sets(&[(6, 3), (3, 6), (6, 4)]),
        &rules(SetFormat::BestOfThree, false),
    );
    assert_eq!(outcome.result, ResultType::WinA);
    assert_eq!((outcome.sets_won_a, outcome.sets_won_b), (2, 1));

    let outcome = determine(
        &ScoreSheet::from_sets(&[(6, 3), (3, 6), (2, 6)]),
        &rules(SetFormat::BestOfThree, false),
    );
    assert_eq!(outcome.result, ResultType::WinB);
}

#[test]
fn test_determine_split_draw_or_undecided() {
    let split = ScoreSheet::from_sets(&[(6, 3), (3, 6)]);
    assert_eq!(
        determine(&split, &rules(SetFormat::BestOfThree, true)).result,
        ResultType::Draw
    );
    // The validator rejects this input; determination still degrades.
    assert_eq!(
        determine(&split, &rules(SetFormat::BestOfThree, false)).result,
        ResultType::Undecided
    );
}

#[test]
fn test_determine_ignores_sets_outside_format() {
    let s = ScoreSheet::from_sets(&[(6, 3), (2, 6), (1, 6)]);
    let outcome = determine(&s, &rules(SetFormat::Single, false));
    assert_eq!(outcome.result, ResultType::WinA);
    assert_eq!((outcome.sets_won_a, outcome.sets_won_b), (1, 0));
}

#[test]
fn test_score_match_rejects_before_determining() {
    let s = ScoreSheet::from_sets(&[(6, 3), (6, 4), (6, 0)]);
    assert_eq!(
        score_match(&s, &rules(SetFormat::BestOfThree, false)),
        Err(ValidationError::UnnecessarySet { set: 3 })
    );
}

#[test]
fn test_set_scores_follow_format() {
    let s = ScoreSheet::from_sets(&[(6, 3), (3, 6), (6, 4)]);
    assert_eq!(s.set_scores(SetFormat::Pair).len(), 2);
    assert_eq!(s.set_scores(SetFormat::BestOfThree)[2], SetScore { a: 6, b: 4 });
}

#[test]
fn test_formats_serialize_as_numbers() {
    let json = serde_json::to_string(&SetFormat::Pair).unwrap();
    assert_eq!(json, "2");
    let parsed: SetFormat = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, SetFormat::BestOfThree);
    assert!(serde_json::from_str::<SetFormat>("4").is_err());

    let result = serde_json::to_string(&ResultType::WinA).unwrap();
    assert_eq!(result, "\"WIN_A\"");
}

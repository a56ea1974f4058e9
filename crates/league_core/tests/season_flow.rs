//! End-to-end season: register, form teams, schedule, score, rank, substitute.

use league_core::{
    build_schedule, FormatConfig, InscriptionStatus, MatchStatus, PlayerDelta, ResultType,
    Roster, ScoreSheet, Standings, ValidationError,
};
use proptest::prelude::*;

fn config() -> FormatConfig {
    FormatConfig {
        courts_count: 2,
        ..Default::default()
    }
}

fn full_roster(config: &FormatConfig, extra: usize) -> Roster {
    let mut roster = Roster::new(config.max_titulars());
    for i in 0..config.max_titulars() + extra {
        roster.register(format!("player-{:02}", i + 1).as_str().into()).unwrap();
    }
    roster
}

#[test]
fn test_season_from_registration_to_standings() {
    let config = config();
    let roster = full_roster(&config, 2);
    let teams = roster.form_teams(usize::from(config.team_size));
    assert_eq!(teams.len(), 4);

    let schedule = build_schedule(&teams, &config);
    let mut matches = schedule.matches();
    assert_eq!(matches.len(), 6);

    let rules = config.scoring_rules();
    for m in matches.iter_mut() {
        // Lower team ordinal wins in straight sets.
        let a_first = m.team_a < m.team_b;
        let sets: &[(i32, i32)] = if a_first { &[(6, 2), (6, 3)] } else { &[(2, 6), (3, 6)] };
        m.record_result(&ScoreSheet::from_sets(sets), &rules).unwrap();
    }
    assert!(matches.iter().all(|m| m.status == MatchStatus::Finished));

    let mut standings = Standings::new();
    let everyone: Vec<_> = roster.inscriptions().iter().map(|i| i.player.clone()).collect();
    standings.seed_players(&everyone);
    for m in &matches {
        standings.fold_match(m, config.allow_draws);
    }

    let ranked = standings.ranked();
    assert_eq!(ranked.len(), 10);
    // team-1 wins all three: 3 * (4 + 3) points each.
    assert_eq!(ranked[0].entry.points_total, 21);
    assert_eq!(ranked[1].entry.points_total, 21);
    assert_eq!(ranked[0].entry.wins, 3);
    // Waitlisted players have nothing played but a better set difference
    // than the winless team.
    assert!(ranked[6..8].iter().all(|r| r.entry.matches_played == 0));
    assert!(ranked[8..].iter().all(|r| r.entry.losses == 3));
}

#[test]
fn test_rejected_score_never_reaches_standings() {
    let config = config();
    let roster = full_roster(&config, 0);
    let teams = roster.form_teams(2);
    let mut matches = build_schedule(&teams, &config).matches();

    let err = matches[0]
        .record_result(&ScoreSheet::from_sets(&[(6, 3), (6, 4), (6, 1)]), &config.scoring_rules())
        .unwrap_err();
    assert_eq!(err, ValidationError::UnnecessarySet { set: 3 });

    let standings = Standings::from_matches(&matches, false);
    assert!(standings.is_empty());
}

#[test]
fn test_withdrawal_then_reschedule_uses_substitute() {
    let config = config();
    let mut roster = full_roster(&config, 2);
    let mut teams = roster.form_teams(2);

    let leaving = roster.active()[3].id;
    let outcome = roster.withdraw(leaving, &mut teams).unwrap();
    let promoted = outcome.promoted.unwrap();
    assert_eq!(promoted.player.as_str(), "player-09");
    assert_eq!(roster.get(promoted.inscription).unwrap().status, InscriptionStatus::Promovido);

    let matches = build_schedule(&teams, &config).matches();
    assert!(matches
        .iter()
        .any(|m| m.players_a.contains(&promoted.player) || m.players_b.contains(&promoted.player)));
    assert!(matches.iter().all(|m| m.result == ResultType::Undecided));
}

fn delta_strategy() -> impl Strategy<Value = PlayerDelta> {
    (0usize..4, 0u32..2, 0u32..3, 0u32..3).prop_map(|(player, win, won, lost)| PlayerDelta {
        player: format!("p{}", player).as_str().into(),
        points: 2 * won + 3 * win,
        wins: win,
        draws: 0,
        losses: 1 - win,
        sets_won: won,
        sets_lost: lost,
        matches_played: 1,
    })
}

proptest! {
    #[test]
    fn aggregation_is_order_independent(
        (deltas, shuffled) in proptest::collection::vec(delta_strategy(), 0..40)
            .prop_flat_map(|d| (Just(d.clone()), Just(d).prop_shuffle()))
    ) {
        let forward = Standings::aggregate(&deltas);
        let permuted = Standings::aggregate(&shuffled);

        prop_assert_eq!(forward.len(), permuted.len());
        for entry in forward.entries() {
            prop_assert_eq!(Some(entry), permuted.get(&entry.player));
        }
    }
}

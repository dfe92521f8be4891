//! Tests for the round/outcome state machine and score bookkeeping.

use fordle::{
    Classification, Game, GameError, Hint, Mode, Target, Transition,
};

fn mmm_target() -> Target {
    Target::new("MMM", "Industrials", "Saint Paul, Minnesota")
}

#[test]
fn test_advanced_scenario_win_on_third_guess() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);

    // Round 1: all letters absent.
    let outcome = game.submit("ABC").unwrap();
    assert_eq!(*outcome.transition(), Transition::Continue);
    assert_eq!(*outcome.attempts(), 1);
    let row = outcome.feedback().as_ref().unwrap();
    assert!(
        row.cells()
            .iter()
            .all(|c| *c.verdict() == Classification::Absent)
    );
    assert_eq!(game.history().len(), 1);

    // Round 2: M exact at 0 and 2, N absent.
    let outcome = game.submit("MNM").unwrap();
    assert_eq!(*outcome.transition(), Transition::Continue);
    assert_eq!(*outcome.attempts(), 2);
    let verdicts: Vec<Classification> = outcome
        .feedback()
        .as_ref()
        .unwrap()
        .cells()
        .iter()
        .map(|c| *c.verdict())
        .collect();
    assert_eq!(
        verdicts,
        vec![
            Classification::Exact,
            Classification::Absent,
            Classification::Exact
        ]
    );

    // Round 3: win.
    let outcome = game.submit("MMM").unwrap();
    assert_eq!(*outcome.transition(), Transition::Win);
    assert_eq!(*outcome.score().wins(), 1);
    assert_eq!(*outcome.score().losses(), 0);
    assert_eq!(*outcome.attempts(), 0);
    assert_eq!(outcome.revealed().as_deref(), Some("MMM"));
    assert!(game.is_round_over());
    assert!(game.history().is_empty());
}

#[test]
fn test_advanced_loss_after_five_wrong_guesses() {
    let target = Target::new("AAPL", "Information Technology", "Cupertino, California");
    let mut game = Game::new(target, Mode::Advanced);

    for i in 0..4 {
        let outcome = game.submit("XXXX").unwrap();
        assert_eq!(*outcome.transition(), Transition::Continue);
        assert_eq!(*outcome.attempts(), i + 1);
        assert!(*outcome.attempts() < Mode::Advanced.max_rounds());
    }

    let outcome = game.submit("XXXX").unwrap();
    assert_eq!(*outcome.transition(), Transition::Loss);
    assert_eq!(*outcome.score().losses(), 1);
    assert_eq!(*outcome.score().wins(), 0);
    assert_eq!(outcome.revealed().as_deref(), Some("AAPL"));
    assert!(game.history().is_empty());
    assert_eq!(game.attempts(), 0);
}

#[test]
fn test_submit_after_round_over_is_rejected() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);
    game.submit("MMM").unwrap();
    assert_eq!(game.submit("MMM"), Err(GameError::RoundOver));
}

#[test]
fn test_advance_rotates_to_fresh_round() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);
    game.submit("ABC").unwrap();
    game.submit("MMM").unwrap();
    assert!(game.is_round_over());

    let next = Target::new("KO", "Consumer Staples", "Atlanta, Georgia");
    game.advance(next).unwrap();
    assert!(!game.is_round_over());
    assert_eq!(game.attempts(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.target().symbol(), "KO");
    // Score carries across round sequences.
    assert_eq!(*game.score().wins(), 1);
}

#[test]
fn test_advance_during_live_round_is_rejected() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);
    let next = Target::new("KO", "", "");
    assert_eq!(game.advance(next), Err(GameError::RoundInProgress));
}

#[test]
fn test_score_increments_exactly_once_per_terminal_transition() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);

    game.submit("MMM").unwrap();
    assert_eq!((*game.score().wins(), *game.score().losses()), (1, 0));

    game.advance(mmm_target()).unwrap();
    for _ in 0..5 {
        game.submit("XXX").unwrap();
    }
    assert_eq!((*game.score().wins(), *game.score().losses()), (1, 1));

    game.advance(mmm_target()).unwrap();
    game.submit("MMM").unwrap();
    assert_eq!((*game.score().wins(), *game.score().losses()), (2, 1));
}

#[test]
fn test_hint_escalation() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);

    // Nothing revealed before the first wrong guess.
    assert!(game.hints().is_empty());

    let outcome = game.submit("ABC").unwrap();
    assert_eq!(
        *outcome.hints(),
        vec![
            Hint::Sector("Industrials".to_string()),
            Hint::Headquarters("Saint Paul, Minnesota".to_string()),
        ]
    );

    // From the third attempt onward the ticker itself is revealed.
    let outcome = game.submit("DEF").unwrap();
    assert_eq!(
        *outcome.hints(),
        vec![
            Hint::Sector("Industrials".to_string()),
            Hint::Headquarters("Saint Paul, Minnesota".to_string()),
            Hint::Ticker("MMM".to_string()),
        ]
    );
}

#[test]
fn test_missing_metadata_yields_empty_hint_strings() {
    let mut game = Game::new(Target::new("GE", "", ""), Mode::Advanced);
    let outcome = game.submit("XX").unwrap();
    assert_eq!(
        *outcome.hints(),
        vec![
            Hint::Sector(String::new()),
            Hint::Headquarters(String::new()),
        ]
    );
}

#[test]
fn test_short_guess_is_padded_and_consumes_an_attempt() {
    let target = Target::new("AAPL", "Information Technology", "Cupertino, California");
    let mut game = Game::new(target, Mode::Advanced);

    let outcome = game.submit("a").unwrap();
    assert_eq!(*outcome.transition(), Transition::Continue);
    let row = outcome.feedback().as_ref().unwrap();
    assert_eq!(row.cells().len(), 4);
    assert_eq!(*row.cells()[0].verdict(), Classification::Exact);
    assert_eq!(*row.cells()[1].verdict(), Classification::Absent);
}

#[test]
fn test_lowercase_guess_wins() {
    let mut game = Game::new(mmm_target(), Mode::Advanced);
    let outcome = game.submit("mmm").unwrap();
    assert_eq!(*outcome.transition(), Transition::Win);
}

#[test]
fn test_beginner_win_on_exact_selection() {
    let mut game = Game::new(mmm_target(), Mode::Beginner);
    let outcome = game.submit("MMM").unwrap();
    assert_eq!(*outcome.transition(), Transition::Win);
    // Classification does not apply to whole-symbol selections.
    assert!(outcome.feedback().is_none());
}

#[test]
fn test_beginner_loss_on_third_wrong_selection() {
    let mut game = Game::new(mmm_target(), Mode::Beginner);

    let outcome = game.submit("AAPL").unwrap();
    assert_eq!(*outcome.transition(), Transition::Continue);
    assert!(outcome.feedback().is_none());
    assert_eq!(outcome.hints().len(), 2);

    let outcome = game.submit("KO").unwrap();
    assert_eq!(*outcome.transition(), Transition::Continue);
    assert_eq!(outcome.hints().len(), 3);

    let outcome = game.submit("GE").unwrap();
    assert_eq!(*outcome.transition(), Transition::Loss);
    assert_eq!(*outcome.score().losses(), 1);
    assert_eq!(outcome.revealed().as_deref(), Some("MMM"));
}

#[test]
fn test_beginner_history_stays_empty() {
    let mut game = Game::new(mmm_target(), Mode::Beginner);
    game.submit("AAPL").unwrap();
    assert!(game.history().is_empty());
    assert_eq!(game.attempts(), 1);
}

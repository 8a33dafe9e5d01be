use level_snake::audio::{RecordingSink, SoundCue};
use level_snake::clock::ManualClock;
use level_snake::config::GameConfig;
use level_snake::fruit::Fruit;
use level_snake::game::{Game, GameState};
use level_snake::grid::Position;
use level_snake::input::{Direction, GameInput};
use level_snake::rules::{FailReason, Verdict};
use level_snake::session::GameSession;
use level_snake::snake::Snake;

fn playing_game(seed: u64) -> (Game<RecordingSink, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let session = GameSession::new_with_seed(GameConfig::default(), seed)
        .expect("fresh board has room");
    let mut game = Game::new(session, RecordingSink::default(), clock.clone());

    game.handle_input(GameInput::Confirm).expect("start");
    clock.advance(GameConfig::default().objective_display_ms);
    game.advance_timers().expect("objective timer");
    assert_eq!(game.state(), GameState::Playing);

    (game, clock)
}

#[test]
fn eating_fruit_on_the_first_tick() {
    let (mut game, _clock) = playing_game(42);
    game.session_mut().snake = Snake::new(vec![
        Position::new(5, 10),
        Position::new(4, 10),
        Position::new(3, 10),
    ]);
    game.session_mut().fruit = Fruit::new(Position::new(6, 10));
    game.handle_input(GameInput::Direction(Direction::Right))
        .expect("steer");

    let report = game.tick().expect("tick");

    let session = game.session();
    assert!(report.ate_fruit);
    assert_eq!(session.snake.head(), Position::new(6, 10));
    assert_eq!(session.score, 1);
    assert_eq!(session.progression.apples_collected, 1);
    assert_eq!(session.snake.len(), 4);
    assert!(!session.snake.occupies(session.fruit.position));
    assert_eq!(game.state(), GameState::Playing);
}

#[test]
fn last_life_lost_to_the_wall_ends_the_game() {
    let (mut game, _clock) = playing_game(7);
    {
        let session = game.session_mut();
        session.lives = 1;
        session.score = 6;
        session.snake = Snake::new(vec![
            Position::new(19, 5),
            Position::new(18, 5),
            Position::new(17, 5),
        ]);
        session.fruit = Fruit::new(Position::new(0, 0));
    }
    game.handle_input(GameInput::Direction(Direction::Right))
        .expect("steer");

    let report = game.tick().expect("tick");

    assert_eq!(report.verdict, Verdict::GameOver(FailReason::Wall));
    assert_eq!(game.state(), GameState::GameOver);
    assert_eq!(game.session().lives, 0);
    assert_eq!(game.session().score, 6);
    assert_eq!(game.session().level(), 1);
    assert_eq!(game.audio().played, vec![SoundCue::GameOver]);

    // Frozen: further ticks change nothing.
    game.tick().expect("tick");
    assert_eq!(game.session().score, 6);
}

#[test]
fn reaching_the_goal_completes_the_level_before_fail_checks() {
    let (mut game, clock) = playing_game(3);
    {
        let session = game.session_mut();
        session.progression.apples_collected = 9;
        session.snake = Snake::new(vec![
            Position::new(5, 10),
            Position::new(4, 10),
            Position::new(3, 10),
        ]);
        session.fruit = Fruit::new(Position::new(5, 9));
    }
    game.handle_input(GameInput::Direction(Direction::Up))
        .expect("steer");

    let report = game.tick().expect("tick");

    assert_eq!(report.verdict, Verdict::LevelComplete);
    assert_eq!(game.state(), GameState::LevelComplete);
    assert_eq!(game.session().progression.apples_collected, 10);
    assert_eq!(game.session().progression.xp, 10);

    clock.advance(GameConfig::default().level_complete_display_ms);
    game.advance_timers().expect("level complete timer");
    assert_eq!(game.state(), GameState::ShowingObjective);
    assert_eq!(game.session().level(), 2);
    assert_eq!(game.session().progression.apples_collected, 0);
    assert_eq!(game.session().snake.len(), 4);

    clock.advance(GameConfig::default().objective_display_ms);
    game.advance_timers().expect("objective timer");
    assert_eq!(game.state(), GameState::Playing);

    // The snake waits for a new direction on the new level.
    let head = game.session().snake.head();
    game.tick().expect("tick");
    assert_eq!(game.session().snake.head(), head);
}

#[test]
fn stepwise_play_loses_a_life_and_respawns() {
    let (mut game, _clock) = playing_game(11);
    {
        let session = game.session_mut();
        session.snake = Snake::new(vec![
            Position::new(5, 1),
            Position::new(5, 2),
            Position::new(5, 3),
        ]);
        session.fruit = Fruit::new(Position::new(10, 10));
    }
    game.handle_input(GameInput::Direction(Direction::Up))
        .expect("steer");

    game.tick().expect("tick");
    assert_eq!(game.session().snake.head(), Position::new(5, 0));

    let report = game.tick().expect("tick");
    assert_eq!(report.verdict, Verdict::LifeLost(FailReason::Wall));
    assert_eq!(game.state(), GameState::Playing);
    assert_eq!(game.session().lives, 2);
    assert_eq!(
        game.session().snake.segments().copied().collect::<Vec<_>>(),
        vec![
            Position::new(5, 10),
            Position::new(4, 10),
            Position::new(3, 10),
        ]
    );
    assert!(!game.session().has_moved());
    assert_eq!(game.audio().played, vec![SoundCue::LifeLost]);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let first = GameSession::new_with_seed(GameConfig::default(), 99).expect("session");
    let second = GameSession::new_with_seed(GameConfig::default(), 99).expect("session");

    assert_eq!(first.fruit, second.fruit);
}

//! Scripted sessions through the text driver.

use property_deal::core::GameConfig;
use property_deal::game::Game;
use property_deal::turn_loop::{LoopEnd, TurnLoop};

fn session(seed: u64, script: &str, max_turns: u32) -> (LoopEnd, Game, String) {
    let game = Game::new(GameConfig::default().with_seed(seed)).unwrap();
    let mut driver = TurnLoop::new(game, script.as_bytes(), Vec::new()).with_max_turns(max_turns);
    let end = driver.run().unwrap();
    let (game, out) = driver.into_parts();
    (end, game, String::from_utf8(out).unwrap())
}

#[test]
fn test_banking_first_card_every_turn() {
    let script = "c 0\ne\n".repeat(6);
    let (end, game, out) = session(21, &script, 6);

    assert_eq!(end, LoopEnd::TurnLimit);
    assert_eq!(game.turn_number(), 7);
    for (_, player) in game.players().iter() {
        // Properties go to the property pile even when banked; unassigned wilds stay in hand
        let laid = player.cash_pile().len() + player.property_pile().len();
        assert!(laid <= 3);
        // 5 dealt + 3 turns of 2 drawn
        assert_eq!(player.hand().len() + laid, 11);
    }
    assert!(out.starts_with("adam:\nHAND: \n"));
    assert!(!out.contains("invalid input"));
}

#[test]
fn test_session_is_reproducible() {
    let script = "p 0\np 0\np 0\n".repeat(4);
    let (_, a, out_a) = session(3, &script, 4);
    let (_, b, out_b) = session(3, &script, 4);

    assert_eq!(out_a, out_b);
    assert_eq!(a.discard_pile(), b.discard_pile());
}

//! Elo rating updates.
//!
//! Standard two-player Elo with a fixed K-factor of 32. Expected scores
//! use the 400-point logistic curve; new ratings truncate toward zero,
//! so the two updates are not always symmetric by exactly K points.
//!
//! Draws never reach this module - the caller only applies rating
//! updates to decisive battles.

use crate::core::Player;

/// Sensitivity of rating updates to a single result.
const K_FACTOR: f64 = 32.0;

/// Expected score of a player against an opponent.
fn expected_score(rating: i32, opponent: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf(f64::from(opponent - rating) / 400.0))
}

/// Apply a decisive result: adjust both ratings and bump the winner's
/// win count and the loser's loss count.
///
/// Both expected scores are computed from the ratings as they were
/// before the update.
pub fn update_ratings(winner: &mut Player, loser: &mut Player) {
    let expected_winner = expected_score(winner.rating, loser.rating);
    let expected_loser = expected_score(loser.rating, winner.rating);

    winner.rating = (f64::from(winner.rating) + K_FACTOR * (1.0 - expected_winner)) as i32;
    loser.rating = (f64::from(loser.rating) - K_FACTOR * expected_loser) as i32;

    winner.wins += 1;
    loser.losses += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn player(id: u64, rating: i32) -> Player {
        Player::new(PlayerId::new(id), format!("player{id}")).with_rating(rating)
    }

    #[test]
    fn test_expected_score_is_half_for_equal_ratings() {
        assert!((expected_score(100, 100) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_expected_scores_sum_to_one() {
        let a = expected_score(150, 90);
        let b = expected_score(90, 150);
        assert!((a + b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_equal_ratings_exchange_sixteen_points() {
        let mut winner = player(1, 100);
        let mut loser = player(2, 100);

        update_ratings(&mut winner, &mut loser);

        assert_eq!(winner.rating, 116);
        assert_eq!(loser.rating, 84);
    }

    #[test]
    fn test_favorite_win_moves_few_points() {
        let mut winner = player(1, 150);
        let mut loser = player(2, 100);

        update_ratings(&mut winner, &mut loser);

        assert_eq!(winner.rating, 163);
        assert_eq!(loser.rating, 86);
    }

    #[test]
    fn test_underdog_win_moves_many_points() {
        let mut winner = player(1, 100);
        let mut loser = player(2, 150);

        update_ratings(&mut winner, &mut loser);

        assert_eq!(winner.rating, 118);
        assert_eq!(loser.rating, 131);
    }

    #[test]
    fn test_win_loss_counters() {
        let mut winner = player(1, 100);
        let mut loser = player(2, 100);

        update_ratings(&mut winner, &mut loser);
        assert_eq!(winner.wins, 1);
        assert_eq!(winner.losses, 0);
        assert_eq!(loser.wins, 0);
        assert_eq!(loser.losses, 1);

        update_ratings(&mut loser, &mut winner);
        assert_eq!(loser.wins, 1);
        assert_eq!(winner.losses, 1);
    }

    #[test]
    fn test_rating_can_go_negative() {
        let mut winner = player(1, 100);
        let mut loser = player(2, 4);

        update_ratings(&mut winner, &mut loser);

        assert!(loser.rating < 0);
    }
}

use super::{HoldStrategy, n_to_royal, positions_by_value, values_with_count};
use crate::core::{Hand, HoldMask, Suit, Value, VideoPokerError};
use crate::eval::{DeucesBonusCategory, DeucesBonusEvaluator, Evaluator};

/// Rule based play for deuces wild bonus. Deuces are always kept.
///
/// * Four deuces keep an ace kicker and throw any other kicker.
/// * Three deuces keep just the deuces.
/// * Two deuces keep two or more suited royal cards, but only when there
///   are at least three royal cards in the hand. Otherwise just the
///   deuces.
/// * One deuce throws a made straight or flush and keeps the deuce. Any
///   other made hand is kept whole, a single natural pair is kept with
///   the deuce.
/// * No deuces: keep made hands, then trips, then three or more suited
///   royal cards, then exactly one pair.
///
/// Pairs and trips prefer aces, then the lowest of 3s to 5s, then the
/// lowest of 6s to kings.
#[derive(Debug, Clone, Copy, Default)]
pub struct JRiffStrategy {
    evaluator: DeucesBonusEvaluator,
}

impl JRiffStrategy {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Aces, then the lowest 3-5, then the lowest 6-K, then the lowest.
fn preferred(values: &[Value]) -> Option<Value> {
    if values.contains(&Value::Ace) {
        return Some(Value::Ace);
    }
    values
        .iter()
        .find(|v| (Value::Three..=Value::Five).contains(*v))
        .or_else(|| {
            values
                .iter()
                .find(|v| (Value::Six..=Value::King).contains(*v))
        })
        .or_else(|| values.first())
        .copied()
}

impl HoldStrategy for JRiffStrategy {
    fn choose_hold(&mut self, hand: &Hand) -> Result<HoldMask, VideoPokerError> {
        let deuces: Vec<usize> = positions(hand, |v| v == Value::Two);
        let category = self.evaluator.evaluate_hand(hand);

        match deuces.len() {
            4 => {
                let mut held = deuces;
                held.extend(positions(hand, |v| v == Value::Ace));
                HoldMask::from_indices(&held)
            }
            3 => HoldMask::from_indices(&deuces),
            2 => {
                let royals = positions(hand, Value::is_royal);
                if royals.len() >= 3 {
                    let suited = most_common_suit(hand, &royals);
                    if suited.len() >= 2 {
                        let mut held = deuces;
                        held.extend(suited);
                        return HoldMask::from_indices(&held);
                    }
                }
                HoldMask::from_indices(&deuces)
            }
            1 => {
                if matches!(
                    category,
                    DeucesBonusCategory::Straight | DeucesBonusCategory::Flush
                ) {
                    return HoldMask::from_indices(&deuces);
                }
                if category.is_made() {
                    return Ok(HoldMask::ALL);
                }

                let mut groups = positions_by_value(hand);
                groups.remove(&Value::Two);
                let pairs = values_with_count(&groups, 2);
                let mut held = deuces;
                if let [pair] = pairs.as_slice() {
                    held.extend(&groups[pair]);
                }
                HoldMask::from_indices(&held)
            }
            0 => {
                if category.is_made() {
                    return Ok(HoldMask::ALL);
                }

                let groups = positions_by_value(hand);
                if let Some(trips) = preferred(&values_with_count(&groups, 3)) {
                    return HoldMask::from_indices(&groups[&trips]);
                }
                if let Some(royals) = n_to_royal(hand, 3) {
                    return HoldMask::from_indices(&royals);
                }
                match preferred(&values_with_count(&groups, 2)) {
                    Some(pair) => HoldMask::from_indices(&groups[&pair]),
                    None => Ok(HoldMask::NONE),
                }
            }
            _ => Ok(HoldMask::ALL),
        }
    }
}

fn positions(hand: &Hand, keep: impl Fn(Value) -> bool) -> Vec<usize> {
    hand.cards()
        .iter()
        .enumerate()
        .filter(|(_, c)| keep(c.value))
        .map(|(i, _)| i)
        .collect()
}

/// The `of` positions sharing the best represented suit. The suit seen
/// first wins ties.
fn most_common_suit(hand: &Hand, of: &[usize]) -> Vec<usize> {
    let mut by_suit: Vec<(Suit, Vec<usize>)> = Vec::new();
    for &i in of {
        let suit = hand[i].suit;
        match by_suit.iter_mut().find(|(s, _)| *s == suit) {
            Some((_, idx)) => idx.push(i),
            None => by_suit.push((suit, vec![i])),
        }
    }

    let mut best: Vec<usize> = Vec::new();
    for (_, idx) in by_suit {
        if idx.len() > best.len() {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j_riff(hand: &str) -> Vec<usize> {
        let hand: Hand = hand.parse().unwrap();
        JRiffStrategy::new().choose_hold(&hand).unwrap().indices()
    }

    #[test]
    fn test_four_deuces_keep_only_an_ace_kicker() {
        assert_eq!(vec![0, 1, 2, 3, 4], j_riff("2C 2D 2H 2S AD"));
        assert_eq!(vec![0, 1, 2, 3], j_riff("2C 2D 2H 2S KD"));
        assert_eq!(vec![1, 2, 3, 4], j_riff("7C 2D 2H 2S 2C"));
    }

    #[test]
    fn test_three_deuces_keep_the_deuces() {
        assert_eq!(vec![0, 1, 2], j_riff("2C 2D 2H AS KS"));
        assert_eq!(vec![0, 1, 2], j_riff("2C 2D 2H 7S 7D"));
    }

    #[test]
    fn test_two_deuces() {
        assert_eq!(vec![0, 1], j_riff("2D 2S JD QH 8S"));
        assert_eq!(vec![0, 1, 2, 3], j_riff("2C 2D AH KH QS"));
        // Three royal cards, none suited.
        assert_eq!(vec![0, 1], j_riff("2C 2D AH KS QC"));
    }

    #[test]
    fn test_one_deuce() {
        // A straight or a flush throws everything but the deuce.
        assert_eq!(vec![0], j_riff("2C 3D 4H 5S 6D"));
        assert_eq!(vec![0], j_riff("2H 5H 8H JH 4H"));
        // Four of a kind is kept.
        assert_eq!(vec![0, 1, 2, 3, 4], j_riff("2C 9D 9H 9S KD"));
        // Deuce and a pair.
        assert_eq!(vec![0, 1, 2], j_riff("2C 9D 9H 4S KD"));
        assert_eq!(vec![0], j_riff("2C 5D 9H JS KD"));
    }

    #[test]
    fn test_no_deuces() {
        assert_eq!(vec![0, 1, 2, 3, 4], j_riff("TS JS QS KS AS"));
        assert_eq!(vec![0, 1, 2], j_riff("TD TC TH 7C QC"));
        assert_eq!(vec![0, 1, 2], j_riff("AC AD AH 7S 4D"));
        // Three to a royal beats a pair.
        assert_eq!(vec![0, 1, 2], j_riff("QH KH AH 9C 9S"));
        // Exactly one pair out of two pair.
        assert_eq!(vec![2, 3], j_riff("9C 9D 4H 4S KD"));
        assert_eq!(vec![0, 1], j_riff("AC AD 4H 4S KD"));
        assert_eq!(vec![2, 3], j_riff("9C 9D 7H 7S KD"));
        assert!(j_riff("3C 8D 9H JS KD").is_empty());
    }

    #[test]
    fn test_known_holds() {
        let cases: [(&str, &[usize]); 22] = [
            ("2C 2D 2H 2S AD", &[0, 1, 2, 3, 4]),
            ("2C 2D 2H 2S KD", &[0, 1, 2, 3]),
            ("2C 2D 2H AS KS", &[0, 1, 2]),
            ("2C 2D 2H TD JD", &[0, 1, 2]),
            ("2D 2S JD QH 8S", &[0, 1]),
            ("2H 2S AH KD 7D", &[0, 1]),
            // A wild royal is kept whole.
            ("2D JD QD KD AD", &[0, 1, 2, 3, 4]),
            ("2C 3D 4H 5S 6C", &[0]),
            ("2S 9D 9H KC 4C", &[0, 1, 2]),
            ("2S 9D TH KC 4C", &[0]),
            ("2S 9D 7D 8S 6D", &[0]),
            // Four to a flush plus the deuce is a flush, so only the deuce.
            ("2S 9D 7D 3D KD", &[0]),
            // Three to a royal beats a pair of jacks.
            ("AC JC QC TD JD", &[0, 1, 2]),
            ("AS AD 7C 4H 9D", &[0, 1]),
            ("5S 5D KC QH 9D", &[0, 1]),
            // One pair out of two pair.
            ("4S 4D 6C 6H 9D", &[0, 1]),
            ("JS JD 9C 9H 2D", &[0, 1, 2, 3, 4]),
            ("TS JS QS KS AS", &[0, 1, 2, 3, 4]),
            ("2S 3S 4S 5S 7S", &[0, 1, 2, 3, 4]),
            ("3D 4H 5S 6C 7D", &[0, 1, 2, 3, 4]),
            ("TD TC TH 7C QC", &[0, 1, 2]),
            ("9S 9D 9H AD KC", &[0, 1, 2]),
        ];
        for (hand, expected) in cases {
            assert_eq!(expected, j_riff(hand).as_slice(), "{hand}");
        }
    }

    #[test]
    fn test_preferred() {
        assert_eq!(
            Some(Value::Ace),
            preferred(&[Value::Three, Value::King, Value::Ace])
        );
        assert_eq!(Some(Value::Four), preferred(&[Value::Four, Value::Five]));
        assert_eq!(Some(Value::Six), preferred(&[Value::Six, Value::King]));
        assert_eq!(None, preferred(&[]));
    }
}

use super::Evaluator;
use crate::core::{Card, Hand};

/// Every ordering of five cards, 120 of them.
pub fn permutations(cards: [Card; 5]) -> Vec<[Card; 5]> {
    let mut out = Vec::new();
    for a in 0..5 {
        for b in 0..5 {
            for c in 0..5 {
                for d in 0..5 {
                    for e in 0..5 {
                        let idx = [a, b, c, d, e];
                        let mut seen = 0u8;
                        for i in idx {
                            seen |= 1 << i;
                        }
                        if seen == 0b1_1111 {
                            out.push(idx.map(|i| cards[i]));
                        }
                    }
                }
            }
        }
    }
    out
}

/// Every ordering of every hand classifies the same as the hand as dealt.
pub fn assert_order_free<E: Evaluator>(evaluator: &E, hands: &[&str]) {
    for h in hands {
        let hand: Hand = h.parse().unwrap();
        let expected = evaluator.evaluate_hand(&hand);
        let perms = permutations(*hand.as_array());
        assert_eq!(120, perms.len());
        for p in perms {
            assert_eq!(expected, evaluator.classify(&p), "{h} as {p:?}");
        }
    }
}

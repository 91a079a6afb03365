use rand::Rng;

use crate::core::{Card, VideoPokerError};

/// Fill `out` with `out.len()` distinct cards drawn uniformly from
/// `remaining`, without replacement.
///
/// Draws of one to three cards use index exclusion instead of shuffling:
/// the second index is drawn from `n - 1` values and shifted past the
/// first, the third is rejected until it misses both. Four and five card
/// draws use `rand::seq::index::sample`.
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use rs_video_poker::core::{Card, Deck};
/// use rs_video_poker::search::draw_k;
///
/// let deck = Deck::new();
/// let mut rng = StdRng::seed_from_u64(42);
/// let mut out = [Card::from(0); 3];
/// draw_k(&mut rng, deck.remaining(), &mut out).unwrap();
/// assert!(out[0] != out[1] && out[1] != out[2] && out[0] != out[2]);
/// ```
pub fn draw_k<R: Rng + ?Sized>(
    rng: &mut R,
    remaining: &[Card],
    out: &mut [Card],
) -> Result<(), VideoPokerError> {
    let n = remaining.len();
    let k = out.len();
    if k > n {
        return Err(VideoPokerError::InsufficientDeck {
            requested: k,
            remaining: n,
        });
    }

    match k {
        0 => {}
        1 => {
            out[0] = remaining[rng.random_range(0..n)];
        }
        2 | 3 => {
            let i = rng.random_range(0..n);
            let mut j = rng.random_range(0..n - 1);
            if j >= i {
                j += 1;
            }
            out[0] = remaining[i];
            out[1] = remaining[j];
            if k == 3 {
                let l = loop {
                    let l = rng.random_range(0..n);
                    if l != i && l != j {
                        break l;
                    }
                };
                out[2] = remaining[l];
            }
        }
        _ => {
            let picked = rand::seq::index::sample(rng, n, k);
            for (slot, idx) in out.iter_mut().zip(picked.iter()) {
                *slot = remaining[idx];
            }
        }
    }
    Ok(())
}

use thiserror::Error;

use super::Card;

/// This is the core error type for the
/// video poker library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug)]
pub enum VideoPokerError {
    #[error("Hand evaluation needs exactly 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Unable to parse card token {0:?}")]
    InvalidCardToken(String),
    #[error("Malformed hand: {0}")]
    MalformedHand(String),
    #[error("Invalid payout for {key}: {value}")]
    InvalidPayoutEntry { key: String, value: String },
    #[error("Can't draw {requested} cards, only {remaining} remaining in the deck")]
    InsufficientDeck { requested: usize, remaining: usize },
    #[error("Hold mask {0} is outside of 0..=31")]
    InvalidHoldMask(u8),
    #[error("Unable to read paytable: {0}")]
    PayTableIo(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    PayTableFormat(#[from] serde_json::Error),
    #[error("Unable to write report: {0}")]
    Report(serde_json::Error),
    #[error("Card {0} is in the deck more than once")]
    DuplicateCard(Card),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_errors_name_their_side() {
        let read = || serde_json::from_str::<u32>("nope").unwrap_err();
        let parse: VideoPokerError = read().into();
        assert!(parse.to_string().starts_with("Invalid JSON"));

        let write = VideoPokerError::Report(read());
        assert!(write.to_string().starts_with("Unable to write report"));
    }
}

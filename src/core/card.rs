use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::VideoPokerError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 index (0 for a deuce, 12 for an ace) and convert it to a
    /// value. Indexes past the ace saturate to the ace.
    pub fn from_u8(v: u8) -> Value {
        VALUES[usize::from(v.min(12))]
    }

    /// Get all of the `Value`'s that are possible.
    /// This is used to iterate through all possible
    /// values when creating a new deck.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The poker rank of this value, 2 for a deuce up to 14 for an ace.
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    /// Ten through ace.
    pub fn is_royal(self) -> bool {
        self >= Value::Ten
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_u8(s: u8) -> Suit {
        SUITS[usize::from(s.min(3))]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_uppercase() {
            'S' => Some(Suit::Spade),
            'H' => Some(Suit::Heart),
            'D' => Some(Suit::Diamond),
            'C' => Some(Suit::Club),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Is this card a deuce. In the deuces rulesets it's wild.
    pub fn is_deuce(&self) -> bool {
        self.value == Value::Two
    }
}

/// Dense index of a card, `suit * 13 + value`. Used by `CardBitSet`.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        (card.suit as u8) * 13 + card.value as u8
    }
}

impl From<u8> for Card {
    fn from(idx: u8) -> Self {
        Self {
            value: Value::from_u8(idx % 13),
            suit: Suit::from_u8(idx / 13),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

/// Parse the text notation used on the command line and in fixtures,
/// `AS`, `10H`, `TH`, `2d`. The suit is always the trailing character.
impl FromStr for Card {
    type Err = VideoPokerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let bad_token = || VideoPokerError::InvalidCardToken(token.to_string());
        let trimmed = token.trim();

        let mut chars = trimmed.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_char)
            .ok_or_else(bad_token)?;

        let value = match chars.as_str() {
            "10" => Value::Ten,
            v => {
                let mut value_chars = v.chars();
                match (value_chars.next(), value_chars.next()) {
                    (Some(c), None) => Value::from_char(c).ok_or_else(bad_token)?,
                    _ => return Err(bad_token()),
                }
            }
        };

        Ok(Card { value, suit })
    }
}

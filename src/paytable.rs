//! Paytables map category names to the number of units a winning hand
//! pays per unit bet.
//!
//! Paytables are JSON documents:
//!
//! ```json
//! {
//!   "name": "9/6 Jacks or Better",
//!   "bet_unit": 1,
//!   "payouts": { "royal_flush": 800, "jacks_or_better": 1 }
//! }
//! ```
//!
//! Categories missing from `payouts` pay nothing.
use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::event;

use crate::core::VideoPokerError;
use crate::eval::{Category, Ruleset};

const DEFAULT_NAME: &str = "Unnamed PayTable";

/// What's on disk, before validation.
#[derive(Debug, Deserialize)]
struct RawPayTable {
    name: Option<String>,
    bet_unit: Option<u32>,
    #[serde(default)]
    payouts: BTreeMap<String, serde_json::Value>,
}

/// A loaded and validated paytable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayTable {
    name: String,
    bet_unit: u32,
    payouts: BTreeMap<String, u32>,
}

impl PayTable {
    /// Build a paytable directly. `nothing` is added paying 0 if missing.
    ///
    /// ```
    /// use rs_video_poker::paytable::PayTable;
    ///
    /// let table = PayTable::new("tiny", 1, [("royal_flush", 800)]);
    /// assert_eq!(800, table.payout_for("royal_flush"));
    /// assert_eq!(0, table.payout_for("nothing"));
    /// assert_eq!(0, table.payout_for("no_such_hand"));
    /// ```
    pub fn new<'a>(
        name: &str,
        bet_unit: u32,
        payouts: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Self {
        let mut payouts: BTreeMap<String, u32> = payouts
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        payouts.entry("nothing".to_string()).or_insert(0);
        Self {
            name: name.to_string(),
            bet_unit,
            payouts,
        }
    }

    /// Parse and validate a JSON paytable.
    ///
    /// Every payout has to be a non-negative integer.
    ///
    /// ```
    /// use rs_video_poker::core::VideoPokerError;
    /// use rs_video_poker::paytable::PayTable;
    ///
    /// let table = PayTable::from_json_str(r#"{"payouts": {"flush": 6}}"#).unwrap();
    /// assert_eq!("Unnamed PayTable", table.name());
    /// assert_eq!(1, table.bet_unit());
    ///
    /// let bad = PayTable::from_json_str(r#"{"payouts": {"flush": -6}}"#);
    /// assert!(matches!(bad, Err(VideoPokerError::InvalidPayoutEntry { .. })));
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, VideoPokerError> {
        let raw: RawPayTable = serde_json::from_str(json)?;

        let mut payouts = BTreeMap::new();
        for (key, value) in raw.payouts {
            let units = value
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| VideoPokerError::InvalidPayoutEntry {
                    key: key.clone(),
                    value: value.to_string(),
                })?;
            payouts.insert(key, units);
        }
        payouts.entry("nothing".to_string()).or_insert(0);

        Ok(Self {
            name: raw.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            bet_unit: raw.bet_unit.unwrap_or(1),
            payouts,
        })
    }

    /// Read a JSON paytable from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, VideoPokerError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        event!(
            tracing::Level::DEBUG,
            path = %path.display(),
            name = %table.name,
            entries = table.payouts.len(),
            "loaded paytable"
        );
        Ok(table)
    }

    /// The paytable that ships with the crate for a ruleset. 9/6 jacks or
    /// better, full pay deuces wild and deuces wild bonus.
    pub fn builtin(ruleset: Ruleset) -> Result<Self, VideoPokerError> {
        let json = match ruleset {
            Ruleset::Standard => include_str!("../paytables/9_6_job.json"),
            Ruleset::Deuces => include_str!("../paytables/deuces_wild.json"),
            Ruleset::DeucesBonus => include_str!("../paytables/deuces_wild_bonus.json"),
        };
        Self::from_json_str(json)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bet_unit(&self) -> u32 {
        self.bet_unit
    }

    /// Units paid per unit bet for a category name. Unknown names pay 0.
    pub fn payout_for(&self, category: &str) -> u32 {
        self.payouts.get(category).copied().unwrap_or(0)
    }

    /// Entries that don't name a category of `C`. These are tolerated but
    /// usually mean the paytable is for a different ruleset.
    pub fn unknown_keys<C: Category>(&self) -> Vec<&str> {
        self.payouts
            .keys()
            .filter(|k| C::from_name(k).is_none())
            .map(String::as_str)
            .collect()
    }

    /// Dense lookup for one ruleset, for use in hot loops.
    pub fn schedule<C: Category>(&self) -> PayoutSchedule<C> {
        PayoutSchedule {
            units: C::all().iter().map(|c| self.payout_for(c.name())).collect(),
            _category: PhantomData,
        }
    }
}

/// Units paid for every category of one ruleset, indexed by
/// `Category::index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutSchedule<C> {
    units: Vec<u32>,
    _category: PhantomData<C>,
}

impl<C: Category> PayoutSchedule<C> {
    /// Units paid per unit bet.
    pub fn units(&self, category: C) -> u32 {
        self.units[category.index()]
    }

    /// Every category with what it pays, strongest first.
    pub fn iter(&self) -> impl Iterator<Item = (C, u32)> + '_ {
        C::all().iter().copied().zip(self.units.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::eval::{DeucesBonusCategory, DeucesCategory, StandardCategory};

    #[test]
    fn test_defaults() {
        let table = PayTable::from_json_str("{}").unwrap();
        assert_eq!("Unnamed PayTable", table.name());
        assert_eq!(1, table.bet_unit());
        assert_eq!(0, table.payout_for("nothing"));
    }

    #[test]
    fn test_invalid_entries() {
        for bad in [
            r#"{"payouts": {"flush": -1}}"#,
            r#"{"payouts": {"flush": 1.5}}"#,
            r#"{"payouts": {"flush": "six"}}"#,
            r#"{"payouts": {"flush": null}}"#,
        ] {
            assert!(
                matches!(
                    PayTable::from_json_str(bad),
                    Err(VideoPokerError::InvalidPayoutEntry { .. })
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_not_json() {
        assert!(matches!(
            PayTable::from_json_str("name: yaml"),
            Err(VideoPokerError::PayTableFormat(_))
        ));
    }

    #[test]
    fn test_unknown_keys_tolerated() {
        let table = PayTable::from_json_str(
            r#"{"name": "odd", "payouts": {"royal_flush": 800, "five_jokers": 9}}"#,
        )
        .unwrap();
        assert_eq!(9, table.payout_for("five_jokers"));
        assert_eq!(vec!["five_jokers"], table.unknown_keys::<StandardCategory>());
    }

    #[test]
    fn test_schedule() {
        let table = PayTable::new(
            "test",
            1,
            [("royal_flush", 800), ("jacks_or_better", 1), ("flush", 6)],
        );
        let schedule = table.schedule::<StandardCategory>();
        assert_eq!(800, schedule.units(StandardCategory::RoyalFlush));
        assert_eq!(6, schedule.units(StandardCategory::Flush));
        assert_eq!(0, schedule.units(StandardCategory::Straight));
        assert_eq!(0, schedule.units(StandardCategory::Nothing));
        assert_eq!(14, schedule.iter().count());
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"name": "file", "bet_unit": 5, "payouts": {{"four_deuces": 200}}}}"#
        )
        .unwrap();

        let table = PayTable::from_path(file.path()).unwrap();
        assert_eq!("file", table.name());
        assert_eq!(5, table.bet_unit());
        assert_eq!(
            200,
            table.schedule::<DeucesCategory>().units(DeucesCategory::FourDeuces)
        );
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            PayTable::from_path(dir.path().join("missing.json")),
            Err(VideoPokerError::PayTableIo(_))
        ));
    }

    #[test]
    fn test_builtin() {
        let job = PayTable::builtin(Ruleset::Standard).unwrap();
        assert!(job.unknown_keys::<StandardCategory>().is_empty());
        let schedule = job.schedule::<StandardCategory>();
        assert_eq!(9, schedule.units(StandardCategory::FullHouse));
        assert_eq!(6, schedule.units(StandardCategory::Flush));

        let deuces = PayTable::builtin(Ruleset::Deuces).unwrap();
        assert!(deuces.unknown_keys::<DeucesCategory>().is_empty());

        let bonus = PayTable::builtin(Ruleset::DeucesBonus).unwrap();
        assert!(bonus.unknown_keys::<DeucesBonusCategory>().is_empty());
        assert_eq!(
            400,
            bonus
                .schedule::<DeucesBonusCategory>()
                .units(DeucesBonusCategory::FourDeucesWithAce)
        );
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Game counts for a single set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub home: i32,
    pub away: i32,
}

impl SetScore {
    pub fn new(home: i32, away: i32) -> Self {
        Self { home, away }
    }

    /// A set counts as played only when both sides have a strictly positive
    /// game count. A 0-0 set is never "played".
    pub fn is_played(&self) -> bool {
        self.home > 0 && self.away > 0
    }

    pub fn winner(&self) -> Option<Side> {
        if self.home > self.away {
            Some(Side::Home)
        } else if self.away > self.home {
            Some(Side::Away)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

/// Per-match score sheet. The third set exists only when it was actually
/// recorded, which keeps the best-of-three tiebreak rule visible in the type
/// instead of a pair of nullable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreSheet {
    TwoSets { set1: SetScore, set2: SetScore },
    ThreeSets { set1: SetScore, set2: SetScore, set3: SetScore },
}

impl ScoreSheet {
    pub fn set1(&self) -> SetScore {
        match self {
            ScoreSheet::TwoSets { set1, .. } | ScoreSheet::ThreeSets { set1, .. } => *set1,
        }
    }

    pub fn set2(&self) -> SetScore {
        match self {
            ScoreSheet::TwoSets { set2, .. } | ScoreSheet::ThreeSets { set2, .. } => *set2,
        }
    }

    pub fn set3(&self) -> Option<SetScore> {
        match self {
            ScoreSheet::TwoSets { .. } => None,
            ScoreSheet::ThreeSets { set3, .. } => Some(*set3),
        }
    }

    /// Sets won per side, counted from set 1 and set 2 on strict inequality.
    /// A tied set counts for neither side. Set 3 never participates in this
    /// tally; it only gates completion of a 1-1 match.
    pub fn sets_won(&self) -> SetsWon {
        let mut home = 0;
        let mut away = 0;
        for set in [self.set1(), self.set2()] {
            match set.winner() {
                Some(Side::Home) => home += 1,
                Some(Side::Away) => away += 1,
                None => {}
            }
        }
        SetsWon { home, away }
    }

    /// True iff the first two sets split 1-1.
    pub fn needs_third_set(&self) -> bool {
        let won = self.sets_won();
        won.home == 1 && won.away == 1
    }

    /// A match is decided when set 1 and set 2 are both played and, on a
    /// 1-1 split, a played third set is present.
    pub fn is_complete(&self) -> bool {
        if !self.set1().is_played() || !self.set2().is_played() {
            return false;
        }
        if self.needs_third_set() {
            return self.set3().is_some_and(|set3| set3.is_played());
        }
        true
    }

    /// Total games won per side across all recorded sets, including set 3.
    /// Feeds the games-difference column of the standings table.
    pub fn games_totals(&self) -> (i32, i32) {
        let mut home = self.set1().home + self.set2().home;
        let mut away = self.set1().away + self.set2().away;
        if let Some(set3) = self.set3() {
            home += set3.home;
            away += set3.away;
        }
        (home, away)
    }
}

/// Derived sets-won count for one match, each side in 0..=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetsWon {
    pub home: i32,
    pub away: i32,
}

impl SetsWon {
    pub fn winner(&self) -> Option<Side> {
        if self.home > self.away {
            Some(Side::Home)
        } else if self.away > self.home {
            Some(Side::Away)
        } else {
            None
        }
    }

    /// Display label matching the score-entry result line.
    pub fn label(&self) -> String {
        match self.winner() {
            Some(Side::Home) => format!("Home wins {}-{}", self.home, self.away),
            Some(Side::Away) => format!("Away wins {}-{}", self.away, self.home),
            None => format!("Tied {}-{}", self.home, self.away),
        }
    }
}

/// Fixture-level aggregate: matches won per club.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureTally {
    pub home: i32,
    pub away: i32,
}

/// Immutable snapshot of every match's score sheet within a fixture, keyed
/// by match number. Each edit produces a new state value; all the fixture
/// level outcomes are derived from here and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixtureScoreState {
    sheets: BTreeMap<i32, ScoreSheet>,
}

impl FixtureScoreState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sheets(sheets: impl IntoIterator<Item = (i32, ScoreSheet)>) -> Self {
        Self {
            sheets: sheets.into_iter().collect(),
        }
    }

    /// Returns a new state with the sheet for `match_number` replaced.
    pub fn with_sheet(&self, match_number: i32, sheet: ScoreSheet) -> Self {
        let mut sheets = self.sheets.clone();
        sheets.insert(match_number, sheet);
        Self { sheets }
    }

    pub fn sheet(&self, match_number: i32) -> Option<&ScoreSheet> {
        self.sheets.get(&match_number)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &ScoreSheet)> {
        self.sheets.iter().map(|(n, sheet)| (*n, sheet))
    }

    /// Number of matches whose score sheet is decided.
    pub fn completed_count(&self) -> usize {
        self.sheets.values().filter(|s| s.is_complete()).count()
    }

    /// True iff every match in the snapshot is decided. Vacuously true for
    /// an empty snapshot; callers gate on match count separately.
    pub fn is_complete(&self) -> bool {
        self.sheets.values().all(|s| s.is_complete())
    }

    /// Fixture score from per-match sets-won on strict inequality. A match
    /// tallied 1-1 after two sets contributes to neither side even when a
    /// third set was recorded; the third set is a completion gate, not a
    /// tally input.
    pub fn tally(&self) -> FixtureTally {
        let mut tally = FixtureTally::default();
        for sheet in self.sheets.values() {
            match sheet.sets_won().winner() {
                Some(Side::Home) => tally.home += 1,
                Some(Side::Away) => tally.away += 1,
                None => {}
            }
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_sets(a: (i32, i32), b: (i32, i32)) -> ScoreSheet {
        ScoreSheet::TwoSets {
            set1: SetScore::new(a.0, a.1),
            set2: SetScore::new(b.0, b.1),
        }
    }

    #[test]
    fn tied_set_counts_for_neither_side() {
        let sheet = two_sets((4, 4), (6, 3));
        assert_eq!(sheet.sets_won(), SetsWon { home: 1, away: 0 });
    }

    #[test]
    fn third_set_never_enters_sets_won() {
        let sheet = ScoreSheet::ThreeSets {
            set1: SetScore::new(6, 4),
            set2: SetScore::new(3, 6),
            set3: SetScore::new(6, 2),
        };
        assert_eq!(sheet.sets_won(), SetsWon { home: 1, away: 1 });
    }

    #[test]
    fn zero_zero_sheet_is_never_complete() {
        let sheet = two_sets((0, 0), (0, 0));
        assert!(!sheet.is_complete());
    }
}

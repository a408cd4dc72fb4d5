use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::event::{BallEvent, BallKind};

/// Running totals for the four extras buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Extras {
    pub wides: u32,
    pub noballs: u32,
    pub byes: u32,
    pub legbyes: u32,
}

impl Extras {
    pub fn total(&self) -> u32 {
        self.wides + self.noballs + self.byes + self.legbyes
    }
}

/// Per-batter tally, folded from attributed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BattingTally {
    pub runs: u32,
    pub balls: u32,
    pub fours: u32,
    pub sixes: u32,
}

/// Per-bowler tally, folded from attributed events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BowlingTally {
    pub balls: u32,
    pub runs: u32,
    pub wickets: u32,
}

/// Accumulated score for one innings. Mutated only through [`apply`], which
/// is also the fold step used to rebuild an innings from the ball history.
///
/// [`apply`]: InningsAggregate::apply
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InningsAggregate {
    pub runs: u32,
    pub balls: u32,
    pub wickets: u8,
    #[serde(default)]
    pub extras: Extras,
    /// Batters/bowler of the most recent attributed delivery, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub striker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_striker_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowler_id: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub batting: HashMap<String, BattingTally>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub bowling: HashMap<String, BowlingTally>,
}

impl InningsAggregate {
    /// Applies one event's effect. The effect table:
    ///
    /// | kind   | runs added | ball counted        | extras bucket      |
    /// |--------|------------|---------------------|--------------------|
    /// | run    | runs       | yes                 | —                  |
    /// | wide   | 1          | no                  | wides += 1         |
    /// | noball | 1 + runs   | only on run-out     | noballs += 1       |
    /// | bye    | runs       | yes                 | byes += runs       |
    /// | legbye | runs       | yes                 | legbyes += runs    |
    /// | wicket | runs       | yes                 | — (wickets += 1)   |
    pub fn apply(&mut self, event: &BallEvent) {
        self.runs += event.total_runs();
        if event.counts_ball() {
            self.balls += 1;
        }
        if event.takes_wicket() {
            self.wickets = (self.wickets + 1).min(10);
        }
        match event.kind {
            BallKind::Wide => self.extras.wides += 1,
            BallKind::Noball => self.extras.noballs += 1,
            BallKind::Bye => self.extras.byes += event.runs,
            BallKind::Legbye => self.extras.legbyes += event.runs,
            BallKind::Run | BallKind::Wicket => {}
        }
        self.fold_attribution(event);
    }

    /// Folds optional player attribution into the per-player tallies.
    ///
    /// Credit rules: byes and leg-byes count a ball faced but credit no runs
    /// to the striker and none against the bowler; a wide charges the bowler
    /// one and is not a ball faced; a no-ball charges the bowler the penalty
    /// plus bat runs; only a `wicket` event credits the bowler's wicket tally
    /// (a no-ball run-out does not).
    fn fold_attribution(&mut self, event: &BallEvent) {
        if let Some(striker) = &event.striker_id {
            self.striker_id = Some(striker.clone());
            let tally = self.batting.entry(striker.clone()).or_default();
            if event.counts_ball() {
                tally.balls += 1;
            }
            match event.kind {
                BallKind::Run | BallKind::Wicket | BallKind::Noball => {
                    tally.runs += event.runs;
                }
                BallKind::Wide | BallKind::Bye | BallKind::Legbye => {}
            }
            if event.kind == BallKind::Run {
                match event.runs {
                    4 => tally.fours += 1,
                    6 => tally.sixes += 1,
                    _ => {}
                }
            }
        }
        if let Some(non_striker) = &event.non_striker_id {
            self.non_striker_id = Some(non_striker.clone());
        }
        if let Some(bowler) = &event.bowler_id {
            self.bowler_id = Some(bowler.clone());
            let tally = self.bowling.entry(bowler.clone()).or_default();
            if event.counts_ball() {
                tally.balls += 1;
            }
            tally.runs += match event.kind {
                BallKind::Run | BallKind::Wicket => event.runs,
                BallKind::Wide => 1,
                BallKind::Noball => 1 + event.runs,
                BallKind::Bye | BallKind::Legbye => 0,
            };
            if event.kind == BallKind::Wicket {
                tally.wickets += 1;
            }
        }
    }

    pub fn is_all_out(&self) -> bool {
        self.wickets >= 10
    }

    /// Overs in the usual "completed.balls" notation, e.g. 76 balls -> "12.4".
    pub fn overs(&self) -> String {
        format!("{}.{}", self.balls / 6, self.balls % 6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::InningsNumber;

    fn event(kind: BallKind, runs: u32) -> BallEvent {
        BallEvent::new(kind, runs, InningsNumber::First)
    }

    #[test]
    fn test_effect_table_per_kind() {
        let mut innings = InningsAggregate::default();

        innings.apply(&event(BallKind::Run, 4));
        assert_eq!((innings.runs, innings.balls), (4, 1));

        innings.apply(&event(BallKind::Wide, 0));
        assert_eq!((innings.runs, innings.balls), (5, 1));
        assert_eq!(innings.extras.wides, 1);

        innings.apply(&event(BallKind::Noball, 2));
        assert_eq!((innings.runs, innings.balls), (8, 1));
        assert_eq!(innings.extras.noballs, 1);

        innings.apply(&event(BallKind::Bye, 3));
        assert_eq!((innings.runs, innings.balls), (11, 2));
        assert_eq!(innings.extras.byes, 3);

        innings.apply(&event(BallKind::Legbye, 1));
        assert_eq!((innings.runs, innings.balls), (12, 3));
        assert_eq!(innings.extras.legbyes, 1);

        innings.apply(&event(BallKind::Wicket, 1));
        assert_eq!((innings.runs, innings.balls, innings.wickets), (13, 4, 1));
    }

    #[test]
    fn test_noball_run_out_counts_ball_and_wicket() {
        let mut innings = InningsAggregate::default();
        let mut noball = event(BallKind::Noball, 1);
        noball.is_run_out = Some(true);

        innings.apply(&noball);

        assert_eq!(innings.runs, 2);
        assert_eq!(innings.balls, 1);
        assert_eq!(innings.wickets, 1);
        assert_eq!(innings.extras.noballs, 1);
    }

    #[test]
    fn test_batting_tally_fold() {
        let mut innings = InningsAggregate::default();

        let mut four = event(BallKind::Run, 4);
        four.striker_id = Some("p1".into());
        four.non_striker_id = Some("p2".into());
        four.bowler_id = Some("b1".into());
        innings.apply(&four);

        let mut bye = event(BallKind::Bye, 2);
        bye.striker_id = Some("p1".into());
        bye.bowler_id = Some("b1".into());
        innings.apply(&bye);

        let tally = &innings.batting["p1"];
        assert_eq!(tally.runs, 4);
        assert_eq!(tally.balls, 2);
        assert_eq!(tally.fours, 1);
        assert_eq!(innings.striker_id.as_deref(), Some("p1"));
        assert_eq!(innings.non_striker_id.as_deref(), Some("p2"));

        // bye runs are not charged against the bowler
        let bowling = &innings.bowling["b1"];
        assert_eq!(bowling.runs, 4);
        assert_eq!(bowling.balls, 2);
    }

    #[test]
    fn test_bowling_tally_extras_charges() {
        let mut innings = InningsAggregate::default();

        let mut wide = event(BallKind::Wide, 0);
        wide.bowler_id = Some("b1".into());
        innings.apply(&wide);

        let mut noball = event(BallKind::Noball, 2);
        noball.bowler_id = Some("b1".into());
        innings.apply(&noball);

        let mut wicket = event(BallKind::Wicket, 0);
        wicket.bowler_id = Some("b1".into());
        innings.apply(&wicket);

        let tally = &innings.bowling["b1"];
        assert_eq!(tally.runs, 4); // 1 wide + 1 penalty + 2 bat runs
        assert_eq!(tally.balls, 1); // only the wicket delivery was legal
        assert_eq!(tally.wickets, 1);
    }

    #[test]
    fn test_wickets_capped_at_ten() {
        let mut innings = InningsAggregate::default();
        for _ in 0..12 {
            innings.apply(&event(BallKind::Wicket, 0));
        }
        assert_eq!(innings.wickets, 10);
        assert!(innings.is_all_out());
    }

    #[test]
    fn test_overs_notation() {
        let mut innings = InningsAggregate::default();
        assert_eq!(innings.overs(), "0.0");
        for _ in 0..76 {
            innings.apply(&event(BallKind::Run, 0));
        }
        assert_eq!(innings.overs(), "12.4");
    }
}

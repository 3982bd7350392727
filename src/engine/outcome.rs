use super::arrangement::Arrangement;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Tie,
    Lose,
}

impl Outcome {
    pub fn compare(mine: u32, theirs: u32) -> Self {
        match mine.cmp(&theirs) {
            Ordering::Greater => Outcome::Win,
            Ordering::Equal => Outcome::Tie,
            Ordering::Less => Outcome::Lose,
        }
    }

    /// Overall result from the two pair duels. A win needs one pair won and
    /// the other not lost; a loss mirrors that. Everything else, including a
    /// split win/lose, is a tie.
    pub fn combine(front: Outcome, back: Outcome) -> Outcome {
        use Outcome::*;
        match (front, back) {
            (Win, Win) | (Win, Tie) | (Tie, Win) => Win,
            (Lose, Lose) | (Lose, Tie) | (Tie, Lose) => Lose,
            _ => Tie,
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Tie => 0.0,
            Outcome::Lose => -1.0,
        }
    }
}

/// An opponent arrangement weighted by 1 / (legal arrangements of its hand).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightedArrangement {
    pub arrangement: Arrangement,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeRates {
    pub win: f64,
    pub tie: f64,
    pub lose: f64,
    pub expected_value: f64,
    /// Share of the field whose front pair strictly loses to ours.
    pub front_win_rate: f64,
    pub back_win_rate: f64,
}

/// Weighted win/tie/lose rates of `mine` against the whole opponent field.
/// An empty field yields all zeros.
pub fn arrangement_outcome(mine: &Arrangement, field: &[WeightedArrangement]) -> OutcomeRates {
    let mut total = 0.0;
    let mut win = 0.0;
    let mut tie = 0.0;
    let mut lose = 0.0;
    let mut front_win = 0.0;
    let mut back_win = 0.0;

    for opp in field {
        let w = opp.weight;
        total += w;

        let front = Outcome::compare(mine.front_score, opp.arrangement.front_score);
        let back = Outcome::compare(mine.back_score, opp.arrangement.back_score);

        if front == Outcome::Win {
            front_win += w;
        }
        if back == Outcome::Win {
            back_win += w;
        }

        match Outcome::combine(front, back) {
            Outcome::Win => win += w,
            Outcome::Tie => tie += w,
            Outcome::Lose => lose += w,
        }
    }

    if total <= 0.0 {
        return OutcomeRates::default();
    }

    let win = win / total;
    let tie = tie / total;
    let lose = lose / total;

    OutcomeRates {
        win,
        tie,
        lose,
        expected_value: win * Outcome::Win.value()
            + tie * Outcome::Tie.value()
            + lose * Outcome::Lose.value(),
        front_win_rate: front_win / total,
        back_win_rate: back_win / total,
    }
}

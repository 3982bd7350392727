use super::arrangement::Arrangement;
use super::ArrangementStats;
use tracing::debug;

/// Anything carrying a front and back pair score.
pub trait PairScores {
    fn front_score(&self) -> u32;
    fn back_score(&self) -> u32;
}

impl PairScores for Arrangement {
    fn front_score(&self) -> u32 {
        self.front_score
    }
    fn back_score(&self) -> u32 {
        self.back_score
    }
}

impl PairScores for ArrangementStats {
    fn front_score(&self) -> u32 {
        self.front_score
    }
    fn back_score(&self) -> u32 {
        self.back_score
    }
}

/// `b` is never worse than `a` on either pair and strictly better on one.
pub fn dominates<A: PairScores, B: PairScores>(b: &B, a: &A) -> bool {
    b.front_score() >= a.front_score()
        && b.back_score() >= a.back_score()
        && (b.front_score() > a.front_score() || b.back_score() > a.back_score())
}

/// Drops every entry dominated by some other entry of `items`, keeping order.
///
/// Dominance is a strict partial order, so a non-empty input always keeps at
/// least one entry.
pub fn filter_dominated<T: PairScores + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, a)| {
            let dominator = items
                .iter()
                .enumerate()
                .find(|(j, b)| i != j && dominates(*b, *a));
            if let Some((_, b)) = dominator {
                debug!(
                    "Dominated: front {} vs {}, back {} vs {}",
                    a.front_score(),
                    b.front_score(),
                    a.back_score(),
                    b.back_score()
                );
            }
            dominator.is_none()
        })
        .map(|(_, a)| a.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct S(u32, u32);

    impl PairScores for S {
        fn front_score(&self) -> u32 {
            self.0
        }
        fn back_score(&self) -> u32 {
            self.1
        }
    }

    #[test]
    fn test_equal_scores_do_not_dominate() {
        let items = vec![S(5, 9), S(5, 9)];
        assert_eq!(filter_dominated(&items), items);
    }

    #[test]
    fn test_tradeoffs_survive() {
        let items = vec![S(3, 9), S(5, 7), S(2, 7), S(5, 9)];
        assert_eq!(filter_dominated(&items), vec![S(5, 9)]);

        let items = vec![S(3, 9), S(5, 7), S(2, 7)];
        assert_eq!(filter_dominated(&items), vec![S(3, 9), S(5, 7)]);
    }
}

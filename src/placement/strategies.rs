//! Built-in placement strategies.
//!
//! All three are stateless unit structs. `BestFit` and `WorstFit` qualify
//! trains by `available_seats >= seats` and compare with strict inequality,
//! so the earliest train wins ties in both directions. `FirstFit` does not
//! qualify at all — see its note.

use super::PlacementStrategy;
use crate::models::Train;

/// First fit: the request always lands on the head train.
///
/// Does not fall through to later trains when the head train is full — the
/// request joins that train's waiting list instead of being tried elsewhere.
/// This is the committed behavior of the system being modeled, preserved
/// deliberately; it deviates from the textbook scan-until-fit reading of
/// "first fit". Returns `None` only for an empty fleet.
#[derive(Debug, Clone, Copy)]
pub struct FirstFit;

impl PlacementStrategy for FirstFit {
    fn name(&self) -> &'static str {
        "first-fit"
    }

    fn select(&self, trains: &[Train], _seats: u32) -> Option<usize> {
        if trains.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn description(&self) -> &'static str {
        "Head train, book or waitlist"
    }
}

/// Best fit: the qualifying train with the fewest seats left.
///
/// Keeps large blocks of availability intact for large parties.
#[derive(Debug, Clone, Copy)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn name(&self) -> &'static str {
        "best-fit"
    }

    fn select(&self, trains: &[Train], seats: u32) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (index, train) in trains.iter().enumerate() {
            let available = train.available_seats();
            if available >= seats && best.map_or(true, |(_, min)| available < min) {
                best = Some((index, available));
            }
        }
        best.map(|(index, _)| index)
    }

    fn description(&self) -> &'static str {
        "Tightest qualifying train"
    }
}

/// Worst fit: the qualifying train with the most seats left.
///
/// Spreads load, leaving every train with headroom for follow-up requests.
#[derive(Debug, Clone, Copy)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn name(&self) -> &'static str {
        "worst-fit"
    }

    fn select(&self, trains: &[Train], seats: u32) -> Option<usize> {
        let mut worst: Option<(usize, u32)> = None;
        for (index, train) in trains.iter().enumerate() {
            let available = train.available_seats();
            if available >= seats && worst.map_or(true, |(_, max)| available > max) {
                worst = Some((index, available));
            }
        }
        worst.map(|(index, _)| index)
    }

    fn description(&self) -> &'static str {
        "Roomiest qualifying train"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trains_with_availability(avail: &[u32]) -> Vec<Train> {
        avail
            .iter()
            .enumerate()
            .map(|(i, &a)| {
                let mut t = Train::new(format!("T{}", i + 1), 10);
                if a < 10 {
                    t.book("filler", 10 - a);
                }
                t
            })
            .collect()
    }

    #[test]
    fn test_first_fit_always_selects_head() {
        let trains = trains_with_availability(&[0, 10]);
        // Head is full, still selected
        assert_eq!(FirstFit.select(&trains, 5), Some(0));
        assert_eq!(FirstFit.select(&[], 1), None);
    }

    #[test]
    fn test_best_fit_selects_minimum_qualifying() {
        let trains = trains_with_availability(&[2, 0, 7]);
        assert_eq!(BestFit.select(&trains, 2), Some(0));
        // Count 3 disqualifies the 2-seat train
        assert_eq!(BestFit.select(&trains, 3), Some(2));
        assert_eq!(BestFit.select(&trains, 8), None);
    }

    #[test]
    fn test_worst_fit_selects_maximum_qualifying() {
        let trains = trains_with_availability(&[2, 0, 7]);
        assert_eq!(WorstFit.select(&trains, 2), Some(2));
        assert_eq!(WorstFit.select(&trains, 8), None);
    }

    #[test]
    fn test_strict_comparison_breaks_ties_by_order() {
        let trains = trains_with_availability(&[5, 5, 5]);
        assert_eq!(BestFit.select(&trains, 3), Some(0));
        assert_eq!(WorstFit.select(&trains, 3), Some(0));

        // Mixed: [5, 3, 3] best-fit count 2 → first 3 wins; [5, 7, 7] worst → first 7
        let trains = trains_with_availability(&[5, 3, 3]);
        assert_eq!(BestFit.select(&trains, 2), Some(1));
        let trains = trains_with_availability(&[5, 7, 7]);
        assert_eq!(WorstFit.select(&trains, 2), Some(1));
    }

    #[test]
    fn test_selection_has_no_side_effects() {
        let trains = trains_with_availability(&[4, 6]);
        BestFit.select(&trains, 2);
        WorstFit.select(&trains, 2);
        assert!(trains.iter().all(|t| t.waiting_list().is_empty()));
        assert_eq!(trains[0].available_seats(), 4);
        assert_eq!(trains[1].available_seats(), 6);
    }

    #[test]
    fn test_names() {
        assert_eq!(FirstFit.name(), "first-fit");
        assert_eq!(BestFit.name(), "best-fit");
        assert_eq!(WorstFit.name(), "worst-fit");
    }
}

//! Fleet occupancy metrics.
//!
//! Computes fleet-wide inventory indicators from a live fleet snapshot.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Utilization | booked / total across the fleet |
//! | Waiting Parties | Number of queued waiting-list entries |
//! | Waiting Seats | Seats requested by all waiting parties |

use std::collections::HashMap;

use crate::models::Fleet;

/// Fleet-wide inventory indicators.
#[derive(Debug, Clone)]
pub struct FleetOccupancy {
    /// Capacity across all trains.
    pub total_seats: u32,
    /// Booked seats across all trains.
    pub booked_seats: u32,
    /// Open seats across all trains.
    pub available_seats: u32,
    /// Fleet-wide utilization (0.0..1.0; 0.0 for an empty fleet).
    pub utilization: f64,
    /// Per-train utilization.
    pub utilization_by_train: HashMap<String, f64>,
    /// Number of parties queued across all waiting lists.
    pub waiting_parties: usize,
    /// Total seats requested by queued parties.
    pub waiting_seats: u32,
}

impl FleetOccupancy {
    /// Computes occupancy metrics from the fleet's current state.
    pub fn calculate(fleet: &Fleet) -> Self {
        let mut total_seats: u32 = 0;
        let mut booked_seats: u32 = 0;
        let mut waiting_parties: usize = 0;
        let mut waiting_seats: u32 = 0;
        let mut utilization_by_train = HashMap::new();

        for train in fleet.trains() {
            total_seats += train.total_seats();
            booked_seats += train.booked_seats();
            waiting_parties += train.waiting_list().len();
            waiting_seats += train.waiting_list().iter().map(|e| e.seats).sum::<u32>();

            let per_train = if train.total_seats() == 0 {
                0.0
            } else {
                train.booked_seats() as f64 / train.total_seats() as f64
            };
            utilization_by_train.insert(train.id().to_string(), per_train);
        }

        let utilization = if total_seats == 0 {
            0.0
        } else {
            booked_seats as f64 / total_seats as f64
        };

        Self {
            total_seats,
            booked_seats,
            available_seats: total_seats - booked_seats,
            utilization,
            utilization_by_train,
            waiting_parties,
            waiting_seats,
        }
    }

    /// Whether the fleet meets the given load thresholds.
    pub fn meets_thresholds(&self, min_utilization: f64, max_waiting_parties: usize) -> bool {
        self.utilization >= min_utilization && self.waiting_parties <= max_waiting_parties
    }
}

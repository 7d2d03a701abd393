use crate::core::types::{ElevatorId, FloorRange, Request};
use log::{info, warn};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// Pending requests shared between producers and the manager loop
///
/// Cloning the queue yields another handle to the same requests. At most one
/// request per floor is queued at any time, and only floors some car can reach
/// are accepted.
#[derive(Debug, Clone)]
pub struct RequestQueue {
    pending: Arc<Mutex<VecDeque<Request>>>,
    coverage: Arc<[FloorRange]>,
}

impl RequestQueue {
    /// Create an empty queue accepting floors covered by any of `coverage`
    pub fn new(coverage: Vec<FloorRange>) -> Self {
        Self {
            pending: Arc::new(Mutex::new(VecDeque::new())),
            coverage: coverage.into(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Request>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a request if its floor is not already queued and some car serves it.
    ///
    /// Rejected requests are logged and dropped. Returns whether it was queued.
    pub fn make_elevator_manager_request(&self, request: Request) -> bool {
        let served = FloorRange::any_contains(&self.coverage, request.floor);
        let mut pending = self.lock();
        let duplicate = pending.iter().any(|queued| queued.floor == request.floor);

        if duplicate || !served {
            warn!("Invalid request: {}. Ignored", request);
            return false;
        }

        pending.push_back(request);
        info!("{} added", request);
        true
    }

    /// Oldest pending request without removing it
    pub fn peek_oldest(&self) -> Option<Request> {
        self.lock().front().copied()
    }

    pub fn pop_oldest(&self) -> Option<Request> {
        self.lock().pop_front()
    }

    /// First pending request the car at `floor` can pick up
    pub fn find_enroute_pickup(&self, floor: i32, elevator_id: ElevatorId) -> Option<Request> {
        self.lock()
            .iter()
            .find(|request| request.matches_pickup(floor, elevator_id))
            .copied()
    }

    /// Remove and return every request the car at `floor` can pick up
    pub fn take_enroute_pickups(&self, floor: i32, elevator_id: ElevatorId) -> Vec<Request> {
        let mut pending = self.lock();
        let mut picked = Vec::new();
        pending.retain(|request| {
            if request.matches_pickup(floor, elevator_id) {
                picked.push(*request);
                false
            } else {
                true
            }
        });
        picked
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the pending requests in arrival order
    pub fn snapshot(&self) -> Vec<Request> {
        self.lock().iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue() -> RequestQueue {
        RequestQueue::new(vec![FloorRange::new(-3, 20), FloorRange::new(-3, 20)])
    }

    #[test]
    fn test_accepts_covered_floor() {
        let queue = queue();
        assert!(queue.make_elevator_manager_request(Request::wall(2)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_floor() {
        let queue = queue();
        assert!(queue.make_elevator_manager_request(Request::wall(2)));
        assert!(!queue.make_elevator_manager_request(Request::wall(2)));
        assert!(!queue.make_elevator_manager_request(Request::panel(2, 1)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_rejects_uncovered_floor() {
        let queue = queue();
        assert!(!queue.make_elevator_manager_request(Request::wall(50)));
        assert!(!queue.make_elevator_manager_request(Request::wall(-4)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_floor_covered_by_any_car() {
        let queue = RequestQueue::new(vec![FloorRange::new(0, 10), FloorRange::new(10, 30)]);
        assert!(queue.make_elevator_manager_request(Request::wall(25)));
        assert!(queue.make_elevator_manager_request(Request::wall(3)));
    }

    #[test]
    fn test_rejects_floor_between_car_ranges() {
        let queue = RequestQueue::new(vec![FloorRange::new(0, 10), FloorRange::new(15, 30)]);
        assert!(!queue.make_elevator_manager_request(Request::wall(12)));
        assert!(queue.make_elevator_manager_request(Request::wall(15)));
        assert_eq!(queue.snapshot(), vec![Request::wall(15)]);
    }

    #[test]
    fn test_fifo_order() {
        let queue = queue();
        queue.make_elevator_manager_request(Request::wall(2));
        queue.make_elevator_manager_request(Request::panel(7, 1));
        queue.make_elevator_manager_request(Request::wall(12));

        assert_eq!(queue.peek_oldest(), Some(Request::wall(2)));
        assert_eq!(queue.pop_oldest(), Some(Request::wall(2)));
        assert_eq!(queue.pop_oldest(), Some(Request::panel(7, 1)));
        assert_eq!(queue.snapshot(), vec![Request::wall(12)]);
    }

    #[test]
    fn test_take_enroute_pickups_respects_panel_owner() {
        let queue = queue();
        queue.make_elevator_manager_request(Request::panel(7, 2));
        queue.make_elevator_manager_request(Request::wall(4));

        assert_eq!(queue.find_enroute_pickup(7, 1), None);
        assert!(queue.take_enroute_pickups(7, 1).is_empty());
        assert_eq!(queue.find_enroute_pickup(7, 2), Some(Request::panel(7, 2)));
        assert_eq!(queue.take_enroute_pickups(7, 2), vec![Request::panel(7, 2)]);
        assert_eq!(queue.take_enroute_pickups(4, 1), vec![Request::wall(4)]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_clones_share_requests() {
        let queue = queue();
        let producer = queue.clone();
        producer.make_elevator_manager_request(Request::wall(5));
        assert_eq!(queue.len(), 1);
    }
}

use elevator_sim::core::execution::{InstantSleeper, JourneyObserver, ThreadSleeper};
use elevator_sim::{
    ElevatorId, ElevatorManager, ElevatorSpec, ManagerConfig, OperationalState, Request,
    StaticRoster, StepOutcome,
};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn quiet_building() -> StaticRoster {
    StaticRoster::default_building()
        .with_overload_probability(0.0)
        .with_seed(7)
}

#[derive(Default)]
struct Counters {
    started: usize,
    completed: usize,
    picked: usize,
}

/// Observer counting journey events across threads
#[derive(Clone, Default)]
struct CountingObserver {
    counters: Arc<Mutex<Counters>>,
}

impl JourneyObserver for CountingObserver {
    fn on_journey_started(&mut self, _elevator_id: ElevatorId, _request: &Request) {
        self.counters.lock().unwrap().started += 1;
    }

    fn on_enroute_pickup(&mut self, _elevator_id: ElevatorId, _floor: i32, picked: &[Request]) {
        self.counters.lock().unwrap().picked += picked.len();
    }

    fn on_journey_completed(
        &mut self,
        _elevator_id: ElevatorId,
        _request: &Request,
        _final_floor: i32,
    ) {
        self.counters.lock().unwrap().completed += 1;
    }
}

#[test]
fn test_scenario_nearest_car_and_panel_car() {
    init_logging();
    let mut manager = ElevatorManager::initialise(
        quiet_building(),
        ManagerConfig::default(),
        Arc::new(InstantSleeper::new()),
    )
    .unwrap();

    assert!(manager.make_elevator_manager_request(Request::wall(2)));
    assert_eq!(
        manager.step(),
        StepOutcome::Served { elevator_id: 2, request: Request::wall(2) }
    );

    assert!(manager.make_elevator_manager_request(Request::panel(7, 1)));
    assert_eq!(
        manager.step(),
        StepOutcome::Served { elevator_id: 1, request: Request::panel(7, 1) }
    );
}

#[test]
fn test_scenario_rejected_requests_leave_queue_unchanged() {
    init_logging();
    let manager = ElevatorManager::initialise(
        quiet_building(),
        ManagerConfig::default(),
        Arc::new(InstantSleeper::new()),
    )
    .unwrap();
    let queue = manager.request_queue();

    assert!(queue.make_elevator_manager_request(Request::wall(2)));
    assert!(!queue.make_elevator_manager_request(Request::wall(2)));
    assert!(!queue.make_elevator_manager_request(Request::wall(50)));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_custom_roster_spec() {
    init_logging();
    let spec = ElevatorSpec {
        id: 4,
        bottom_floor: 0,
        top_floor: 8,
        start_floor: 3,
        max_weight: 60.0,
    };
    let roster = StaticRoster::new(vec![spec]).with_overload_probability(0.0);
    let mut manager = ElevatorManager::initialise(
        roster,
        ManagerConfig::default(),
        Arc::new(InstantSleeper::new()),
    )
    .unwrap();

    manager.make_elevator_manager_request(Request::wall(8));
    manager.drain();

    let status = manager.fleet_status();
    assert_eq!(status[0].id, 4);
    assert_eq!(status[0].current_floor, 8);
    assert_eq!(status[0].operational_state, OperationalState::Online);
}

#[test]
fn test_manager_loop_serves_requests_from_producer_thread() {
    init_logging();
    let config = ManagerConfig::new()
        .with_travel_time(Duration::from_millis(1))
        .with_boarding_time(Duration::from_millis(1))
        .with_poll_interval(Duration::from_millis(1));
    let mut manager =
        ElevatorManager::initialise(quiet_building(), config, Arc::new(ThreadSleeper)).unwrap();
    let observer = CountingObserver::default();
    manager.add_observer(Box::new(observer.clone()));

    let queue = manager.request_queue();
    let shutdown = manager.shutdown_handle();
    let runner = thread::spawn(move || manager.run());

    let floors = [2, 12, -1, 17, 5, 9];
    let producer = {
        let queue = queue.clone();
        thread::spawn(move || {
            floors
                .iter()
                .filter(|&&floor| queue.make_elevator_manager_request(Request::wall(floor)))
                .count()
        })
    };
    let accepted = producer.join().unwrap();

    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        let settled = {
            let counters = observer.counters.lock().unwrap();
            counters.started == counters.completed
        };
        if queue.is_empty() && settled {
            break;
        }
        assert!(Instant::now() < deadline, "manager loop did not drain the queue");
        thread::sleep(Duration::from_millis(5));
    }

    shutdown.trigger();
    let served = runner.join().unwrap();

    let counters = observer.counters.lock().unwrap();
    assert_eq!(served + counters.picked, accepted);
}

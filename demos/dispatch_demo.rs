use elevator_sim::core::execution::{JourneyObserver, ThreadSleeper};
use elevator_sim::{
    ElevatorError, ElevatorId, ElevatorManager, ManagerConfig, Request, RequestQueue, StaticRoster,
};
use log::info;
use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Tracks journeys still in flight so the demo knows when to stop
#[derive(Clone, Default)]
struct InFlight {
    count: Arc<AtomicUsize>,
}

impl JourneyObserver for InFlight {
    fn on_journey_started(&mut self, _elevator_id: ElevatorId, _request: &Request) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn on_journey_completed(
        &mut self,
        _elevator_id: ElevatorId,
        _request: &Request,
        _final_floor: i32,
    ) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }

    fn on_maintenance(&mut self, _elevator_id: ElevatorId, _error: &ElevatorError) {
        self.count.fetch_sub(1, Ordering::SeqCst);
    }
}

fn manual_requests(queue: &RequestQueue) {
    queue.make_elevator_manager_request(Request::wall(2));
    queue.make_elevator_manager_request(Request::wall(12));
    queue.make_elevator_manager_request(Request::panel(7, 1));
    queue.make_elevator_manager_request(Request::wall(4));
    queue.make_elevator_manager_request(Request::wall(1));
    // two passengers in elevator 2 pressing floors 3 and 5
    queue.make_elevator_manager_request(Request::panel(3, 2));
    queue.make_elevator_manager_request(Request::panel(5, 2));
}

fn automated_requests(queue: &RequestQueue, rounds: usize) {
    let mut rng = rand::thread_rng();
    for round in 1..=rounds {
        info!("Generating request batch {} of {}", round, rounds);
        for _ in 0..5 {
            let floor = rng.gen_range(-3..=20);
            let request = if rng.gen_bool(0.5) {
                Request::wall(floor)
            } else {
                Request::panel(floor, rng.gen_range(1..=2))
            };
            queue.make_elevator_manager_request(request);
        }
        thread::sleep(Duration::from_secs(3));
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let mode = args.next().unwrap_or_else(|| "manual".to_string());
    let rounds: usize = match args.next() {
        Some(value) => value
            .parse()
            .map_err(|e| format!("Invalid round count '{}': {}", value, e))?,
        None => 3,
    };
    if mode != "manual" && mode != "auto" {
        return Err(format!("Unknown mode '{}', expected 'manual' or 'auto'", mode));
    }

    let config = ManagerConfig::new()
        .with_travel_time(Duration::from_millis(250))
        .with_boarding_time(Duration::from_millis(500))
        .with_poll_interval(Duration::from_millis(250));
    let mut manager = ElevatorManager::initialise(
        StaticRoster::default_building(),
        config,
        Arc::new(ThreadSleeper),
    )
    .map_err(|e| e.to_string())?;

    let in_flight = InFlight::default();
    manager.add_observer(Box::new(in_flight.clone()));
    let queue = manager.request_queue();
    let shutdown = manager.shutdown_handle();
    let runner = thread::spawn(move || manager.run());

    if mode == "auto" {
        automated_requests(&queue, rounds);
    } else {
        manual_requests(&queue);
    }

    while !queue.is_empty() || in_flight.count.load(Ordering::SeqCst) > 0 {
        thread::sleep(Duration::from_millis(100));
    }

    shutdown.trigger();
    let served = runner
        .join()
        .map_err(|_| "Manager thread panicked".to_string())?;
    println!("Served {} requests", served);
    Ok(())
}

use num::rational::Ratio;
use num::Zero;
use rand::Rng;

use mode_heap::{Heap, Mode};

/// Random events at exact fractional times, replayed in time order
pub fn event_queue_example() {
    let mut rng = rand::thread_rng();
    let mut events: Heap<Ratio<i64>, String> = Heap::new(Mode::MinHeap);
    for id in 0..8 {
        let numer: i64 = rng.gen_range(0, 100);
        let denom: i64 = rng.gen_range(1, 8);
        events.push(Ratio::new(numer, denom), format!("event {}", id));
    }
    // an event at t = 0 always fires first
    events.push(Ratio::zero(), "start".to_string());

    while let Ok(event) = events.pop() {
        let (time, name) = event.into_parts();
        println!("t = {}: {}", time, name);
    }
}

pub fn priority_example() {
    let mut jobs = Heap::new(Mode::MaxHeap);
    jobs.extend(vec![
        (3, "compact logs"),
        (10, "page on-call"),
        (1, "rotate keys"),
        (7, "rebuild index"),
    ]);
    for _ in 0..3 {
        match jobs.pop() {
            Ok(job) => println!("{} (priority {})", job.information(), job.value()),
            Err(e) => println!("{}", e),
        }
    }
    println!("{} job(s) left", jobs.len());
}

pub fn main() {
    event_queue_example();
    priority_example();
}

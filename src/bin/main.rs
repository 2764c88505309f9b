use std::{
    io, panic,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};
use syncstack::Stack;
use tracing::{info, Level};

const ROUNDS: usize = 20;
const OPS_PER_THREAD: usize = 10_000;

// Each thread pushes OPS_PER_THREAD values and then pops the same number.
// Returns the time the round took and how many pops succeeded.
fn round(stack: &Arc<Stack<usize>>, threads: usize) -> io::Result<(Duration, usize)> {
    let start = Instant::now();

    let handles = {
        let mut vec = Vec::with_capacity(threads);
        for id in 0..threads {
            let stack = Arc::clone(stack);
            let handle = thread::Builder::new()
                .name(format!("syncstack-worker-{}", id))
                .spawn(move || {
                    for x in 0..OPS_PER_THREAD {
                        stack.push(x);
                    }
                    (0..OPS_PER_THREAD).filter(|_| stack.pop().is_some()).count()
                })?;
            vec.push(handle);
        }
        vec
    };

    let mut popped = 0;
    for handle in handles {
        match handle.join() {
            Ok(count) => popped += count,
            Err(payload) => panic::resume_unwind(payload),
        }
    }

    Ok((start.elapsed(), popped))
}

pub fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .init();

    let threads = num_cpus::get();
    let stack = Arc::new(Stack::new());
    let mut results = Vec::with_capacity(ROUNDS);

    info!(threads, ops = OPS_PER_THREAD, "syncstack time test starting...");
    let total_start = Instant::now();

    for n in 0..ROUNDS {
        let (elapsed, popped) = round(&stack, threads)?;

        if popped != threads * OPS_PER_THREAD || !stack.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!(
                    "round {}: popped {} of {} elements, {} left on the stack",
                    n,
                    popped,
                    threads * OPS_PER_THREAD,
                    stack.size()
                ),
            ));
        }

        info!(round = n, elapsed = ?elapsed, "round complete");
        results.push(elapsed.as_micros());
    }

    info!(total = ?total_start.elapsed(), "syncstack total");
    let average = {
        let sum: u128 = results.into_iter().sum();
        (sum as f64) / (ROUNDS as f64) / 1000.0
    };
    info!("syncstack average: {:?} ms", average);

    Ok(())
}

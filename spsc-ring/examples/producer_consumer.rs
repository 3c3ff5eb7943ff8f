//! A producer ticking faster than its consumer, run once against each ring
//! flavor: the bounded ring starts rejecting writes, the lossy ring starts
//! evicting the oldest values.
//!
//! Run with `RUST_LOG=debug` for the per-tick activity.

use std::thread;
use std::time::Duration;

use log::debug;
use log::info;
use spsc_ring::channel;
use spsc_ring::channel::Receiver;
use spsc_ring::channel::Sender;
use spsc_ring::Ring;

/// Tick timing for one side of the demo.
struct Cadence {
    interval: Duration,
    ticks: u64,
}

fn produce<R: Ring<Item = u64>>(mut tx: Sender<R>, cadence: Cadence) -> u64 {
    let mut rejected = 0;
    for seq in 1..=cadence.ticks {
        if tx.send(seq) {
            debug!("produced {seq}");
        } else {
            debug!("ring full, {seq} rejected");
            rejected += 1;
        }
        thread::sleep(cadence.interval);
    }
    rejected
}

fn consume<R: Ring<Item = u64>>(mut rx: Receiver<R>, cadence: Cadence) -> u64 {
    let mut received = 0;
    for _ in 0..cadence.ticks {
        match rx.recv() {
            Some(seq) => {
                debug!("consumed {seq}");
                received += 1;
            }
            None => debug!("nothing to consume"),
        }
        thread::sleep(cadence.interval);
    }
    received
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Writer on a 10ms tick, reader on 30ms: the ring fills up and the
    // writer has to start dropping.
    info!("bounded ring, writer 3x faster than reader");
    let (tx, rx) = channel::bounded::<u64>(3);
    let producer = thread::spawn(move || {
        produce(
            tx,
            Cadence {
                interval: Duration::from_millis(10),
                ticks: 20,
            },
        )
    });
    let consumer = thread::spawn(move || {
        consume(
            rx,
            Cadence {
                interval: Duration::from_millis(30),
                ticks: 10,
            },
        )
    });
    let rejected = producer.join().unwrap();
    let received = consumer.join().unwrap();
    info!("bounded: {received} values consumed, {rejected} writes rejected");

    // Same imbalance, but every write lands and old values fall out.
    info!("lossy ring, writer 2x faster than reader");
    let (tx, rx) = channel::lossy::<u64>(3);
    let producer = thread::spawn(move || {
        produce(
            tx,
            Cadence {
                interval: Duration::from_millis(10),
                ticks: 20,
            },
        )
    });
    let consumer = thread::spawn(move || {
        consume(
            rx,
            Cadence {
                interval: Duration::from_millis(20),
                ticks: 10,
            },
        )
    });
    let rejected = producer.join().unwrap();
    let received = consumer.join().unwrap();
    info!("lossy: {received} values consumed, {rejected} writes rejected");
}

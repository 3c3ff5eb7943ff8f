//! Fixed-capacity rings for moving values from one producer thread to one
//! consumer thread, in two overflow flavors.
//!
//! - [`BoundedRing`] rejects writes while full. Nothing is dropped silently;
//!   the producer sees `false` and applies its own backpressure.
//! - [`LossyRing`] accepts every write and evicts the oldest unread value
//!   when full. The consumer always finds the freshest data.
//!
//! Both rings copy elements in and out (`T: Copy + Default`) and never
//! allocate after construction. Cursor updates ride on atomics; a mutex
//! guards only the element copy itself, so producer and consumer rarely
//! contend. Reads return `Option<T>` and writes return `bool`, so pulling
//! from an empty ring or pushing into a full bounded ring are ordinary
//! outcomes, not errors.
//!
//! ```
//! use spsc_ring::{BoundedRing, LossyRing};
//!
//! let bounded = BoundedRing::new(3);
//! assert!(bounded.write(1));
//! assert!(bounded.write(2));
//! assert!(bounded.write(3));
//! assert!(!bounded.write(4)); // full: rejected
//! assert_eq!(bounded.read(), Some(1));
//!
//! let lossy = LossyRing::new(3);
//! for v in 1..=4 {
//!     assert!(lossy.write(v)); // full: 1 gets evicted instead
//! }
//! assert_eq!(lossy.read(), Some(2));
//! ```
//!
//! For cross-thread use, [`channel`] splits a ring into a `Sender`/`Receiver`
//! pair so the one-producer/one-consumer contract is enforced by ownership:
//!
//! ```
//! use std::thread;
//!
//! let (mut tx, mut rx) = spsc_ring::channel::lossy::<u64>(8);
//! let producer = thread::spawn(move || {
//!     for v in 0..100 {
//!         tx.send(v);
//!     }
//! });
//! producer.join().unwrap();
//! while rx.recv().is_some() {}
//! ```

pub mod channel;

mod bounded;
mod lossy;
mod ring;

pub use bounded::BoundedRing;
pub use lossy::LossyRing;
pub use ring::Ring;

//! Producer/consumer handle pairs over a shared ring.
//!
//! A ring itself is symmetric: nothing stops two threads from both calling
//! [`write`](crate::Ring::write). The handles here encode the supported
//! one-producer/one-consumer split in the type system instead of in
//! documentation. Neither handle is `Clone`, and sending or receiving takes
//! `&mut self`, so each side lives on exactly one thread at a time; hand the
//! [`Sender`] to the producer, the [`Receiver`] to the consumer, and the
//! contract holds itself up.

use std::sync::Arc;

use crate::bounded::BoundedRing;
use crate::lossy::LossyRing;
use crate::ring::Ring;

/// Creates a rejecting ring of `capacity` slots and splits it into a
/// producer and a consumer handle.
///
/// A full ring turns [`Sender::send`] into a no-op returning `false`; no
/// value is lost without the producer hearing about it.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn bounded<T: Copy + Default>(
    capacity: usize,
) -> (Sender<BoundedRing<T>>, Receiver<BoundedRing<T>>) {
    split(BoundedRing::new(capacity))
}

/// Creates an overwriting ring of `capacity` slots and splits it into a
/// producer and a consumer handle.
///
/// [`Sender::send`] always succeeds; a full ring evicts its oldest unread
/// value instead of pushing back.
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn lossy<T: Copy + Default>(
    capacity: usize,
) -> (Sender<LossyRing<T>>, Receiver<LossyRing<T>>) {
    split(LossyRing::new(capacity))
}

/// Splits any ring into its producer and consumer halves.
pub fn split<R: Ring>(ring: R) -> (Sender<R>, Receiver<R>) {
    let ring = Arc::new(ring);
    let tx = Sender {
        ring: Arc::clone(&ring),
    };
    let rx = Receiver { ring };
    (tx, rx)
}

/// Writing half of a ring. Deliberately not `Clone`.
pub struct Sender<R> {
    ring: Arc<R>,
}

impl<R: Ring> Sender<R> {
    /// Writes `item` into the ring. See [`Ring::write`] for what `false`
    /// means under each overflow policy.
    pub fn send(&mut self, item: R::Item) -> bool {
        self.ring.write(item)
    }

    /// Capacity of the underlying ring.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Unread elements currently buffered; a snapshot while the consumer
    /// runs.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the ring held no unread element at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

/// Reading half of a ring. Deliberately not `Clone`.
pub struct Receiver<R> {
    ring: Arc<R>,
}

impl<R: Ring> Receiver<R> {
    /// Removes and returns the oldest unread element, or `None` when the
    /// ring is currently empty.
    pub fn recv(&mut self) -> Option<R::Item> {
        self.ring.read()
    }

    /// Capacity of the underlying ring.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Unread elements currently buffered; a snapshot while the producer
    /// runs.
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Whether the ring held no unread element at the time of the call.
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }
}

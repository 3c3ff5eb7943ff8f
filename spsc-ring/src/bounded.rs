use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use log::trace;
use parking_lot::Mutex;

use crate::ring::Ring;

/// A fixed-capacity FIFO that rejects writes while full.
///
/// Nothing stored in the ring is ever lost: once every usable slot holds an
/// unread element, further writes return `false` and leave the ring untouched
/// until the consumer drains a slot. The backing storage holds one slot more
/// than the usable capacity; keeping that slot vacant is what distinguishes
/// a full ring from an empty one when the two cursors collide.
///
/// One producer thread and one consumer thread may share the ring through
/// `&BoundedRing`. Cursors advance on atomics, so neither side blocks the
/// other except for the brief lock held while an element is copied in or out.
///
/// ```
/// use spsc_ring::BoundedRing;
///
/// let ring = BoundedRing::new(3);
/// assert!(ring.write(1));
/// assert!(ring.write(2));
/// assert!(ring.write(3));
/// assert!(!ring.write(4)); // full: rejected, nothing overwritten
///
/// assert_eq!(ring.read(), Some(1));
/// assert_eq!(ring.read(), Some(2));
/// assert_eq!(ring.read(), Some(3));
/// assert_eq!(ring.read(), None);
/// ```
pub struct BoundedRing<T> {
    slots: Mutex<Box<[T]>>,
    /// Index of the slot holding the newest element. Advanced only by the
    /// producer, after the element copy has completed.
    write_pos: AtomicUsize,
    /// Index of the slot holding the last element handed out. Advanced only
    /// by the consumer.
    read_pos: AtomicUsize,
    capacity: usize,
}

impl<T: Copy + Default> BoundedRing<T> {
    /// Creates a ring with `capacity` usable slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        BoundedRing {
            slots: Mutex::new(vec![T::default(); capacity + 1].into_boxed_slice()),
            write_pos: AtomicUsize::new(0),
            read_pos: AtomicUsize::new(0),
            capacity,
        }
    }

    /// Appends `item` behind the newest unread element.
    ///
    /// Returns `false` without storing anything when the ring is full. That
    /// is the expected outcome under backpressure, not a fault; the caller
    /// decides whether to retry, drop the value, or slow down.
    pub fn write(&self, item: T) -> bool {
        let write_pos = self.write_pos.load(Ordering::Relaxed);
        let next = (write_pos + 1) % self.slot_count();
        if next == self.read_pos.load(Ordering::Acquire) {
            // The vacant slot is about to be written over: ring is full.
            trace!("ring full, rejecting the write");
            return false;
        }
        self.slots.lock()[next] = item;
        // Publish the slot only after the copy has landed; the consumer may
        // probe `write_pos` at any moment.
        self.write_pos.store(next, Ordering::Release);
        true
    }

    /// Removes and returns the oldest unread element, or `None` when the
    /// ring is empty. Reading from an empty ring mutates nothing and may be
    /// retried indefinitely.
    pub fn read(&self) -> Option<T> {
        let read_pos = self.read_pos.load(Ordering::Relaxed);
        if read_pos == self.write_pos.load(Ordering::Acquire) {
            return None;
        }
        let next = (read_pos + 1) % self.slot_count();
        let item = {
            let mut slots = self.slots.lock();
            std::mem::replace(&mut slots[next], T::default())
        };
        self.read_pos.store(next, Ordering::Release);
        Some(item)
    }

    /// Number of usable slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of unread elements currently stored.
    pub fn len(&self) -> usize {
        let write_pos = self.write_pos.load(Ordering::Acquire);
        let read_pos = self.read_pos.load(Ordering::Acquire);
        (write_pos + self.slot_count() - read_pos) % self.slot_count()
    }

    /// Whether no unread element is stored.
    pub fn is_empty(&self) -> bool {
        self.read_pos.load(Ordering::Acquire) == self.write_pos.load(Ordering::Acquire)
    }

    /// Whether a further [`write`](Self::write) would be rejected.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Slot count of the backing storage, including the vacant slot.
    fn slot_count(&self) -> usize {
        self.capacity + 1
    }
}

impl<T: Copy + Default> Ring for BoundedRing<T> {
    type Item = T;

    fn write(&self, item: T) -> bool {
        BoundedRing::write(self, item)
    }

    fn read(&self) -> Option<T> {
        BoundedRing::read(self)
    }

    fn capacity(&self) -> usize {
        BoundedRing::capacity(self)
    }

    fn len(&self) -> usize {
        BoundedRing::len(self)
    }

    fn is_empty(&self) -> bool {
        BoundedRing::is_empty(self)
    }

    fn is_full(&self) -> bool {
        BoundedRing::is_full(self)
    }
}

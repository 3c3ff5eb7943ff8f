use std::sync::atomic::AtomicBool;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use log::trace;
use parking_lot::Mutex;

use crate::ring::Ring;

/// A fixed-capacity FIFO that overwrites the oldest elements when full.
///
/// Writes never fail and never block on the consumer: once every slot holds
/// an unread element, the next write evicts the oldest one, so the ring
/// always exposes the freshest `capacity` values. Suited to telemetry-style
/// feeds where a stale sample is worth less than a fresh one.
///
/// The two cursors alone cannot tell a full ring from an empty one, since
/// every slot is usable; the `exhausted` flag settles that collision. It
/// starts raised, flips down on every write and back up when a read consumes
/// the newest element.
///
/// One producer thread and one consumer thread may share the ring through
/// `&LossyRing`. If the producer laps the consumer, an eviction can publish
/// a stale read cursor over a fresher one, rolling the consumer back so it
/// replays values it already handed out, though never further back than one
/// lap of the ring. Every value read out was genuinely written; what
/// degrades under overload is freshness and ordering, not integrity.
///
/// ```
/// use spsc_ring::LossyRing;
///
/// let ring = LossyRing::new(3);
/// for v in 1..=4 {
///     assert!(ring.write(v)); // never rejected
/// }
/// assert_eq!(ring.read(), Some(2)); // 1 was evicted by the fourth write
/// ```
pub struct LossyRing<T> {
    slots: Mutex<Box<[T]>>,
    /// Index of the slot holding the newest element. Advanced only by the
    /// producer.
    write_pos: AtomicUsize,
    /// Index of the slot holding the last element handed out. Advanced by
    /// the consumer, and by the producer when it evicts.
    read_pos: AtomicUsize,
    /// Raised while the ring holds no unread element.
    exhausted: AtomicBool,
    capacity: usize,
}

impl<T: Copy + Default> LossyRing<T> {
    /// Creates a ring with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");
        LossyRing {
            slots: Mutex::new(vec![T::default(); capacity].into_boxed_slice()),
            write_pos: AtomicUsize::new(0),
            read_pos: AtomicUsize::new(0),
            exhausted: AtomicBool::new(true),
            capacity,
        }
    }

    /// Appends `item`, evicting the oldest unread element if the ring is
    /// full. Always returns `true`; the eviction is the policy, not an
    /// error.
    pub fn write(&self, item: T) -> bool {
        let write_pos = self.write_pos.load(Ordering::Relaxed);
        let next = (write_pos + 1) % self.capacity;
        let read_pos = self.read_pos.load(Ordering::Acquire);
        // The incoming write would land on the oldest unread slot exactly
        // when the cursors collide on a non-exhausted ring. The flag check
        // keeps a fresh or fully-drained ring from skipping a live slot.
        if next == (read_pos + 1) % self.capacity && !self.exhausted.load(Ordering::Acquire) {
            trace!("ring full, evicting the oldest unread element");
            self.read_pos
                .store((read_pos + 1) % self.capacity, Ordering::Release);
        }
        self.slots.lock()[next] = item;
        self.write_pos.store(next, Ordering::Release);
        // A completed write always leaves at least one unread element.
        self.exhausted.store(false, Ordering::Release);
        true
    }

    /// Removes and returns the oldest unread element, or `None` when the
    /// ring is empty. Reading from an empty ring mutates nothing and may be
    /// retried indefinitely.
    pub fn read(&self) -> Option<T> {
        if self.exhausted.load(Ordering::Acquire) {
            return None;
        }
        let read_pos = self.read_pos.load(Ordering::Acquire);
        let next = (read_pos + 1) % self.capacity;
        // Copy out only; the slot keeps its value until a write claims it.
        let item = self.slots.lock()[next];
        // Catching up to the write cursor means this was the newest element.
        // The flag goes first: a writer that observes the advanced cursor
        // must also observe the flag, or it would take a just-drained ring
        // for a full one and evict the very element it is about to write.
        self.exhausted.store(
            next == self.write_pos.load(Ordering::Acquire),
            Ordering::Release,
        );
        self.read_pos.store(next, Ordering::Release);
        Some(item)
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of unread elements currently stored.
    pub fn len(&self) -> usize {
        if self.exhausted.load(Ordering::Acquire) {
            return 0;
        }
        let write_pos = self.write_pos.load(Ordering::Acquire);
        let read_pos = self.read_pos.load(Ordering::Acquire);
        (write_pos + self.capacity - read_pos - 1) % self.capacity + 1
    }

    /// Whether no unread element is stored.
    pub fn is_empty(&self) -> bool {
        self.exhausted.load(Ordering::Acquire)
    }

    /// Whether the next [`write`](Self::write) will evict.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }
}

impl<T: Copy + Default> Ring for LossyRing<T> {
    type Item = T;

    fn write(&self, item: T) -> bool {
        LossyRing::write(self, item)
    }

    fn read(&self) -> Option<T> {
        LossyRing::read(self)
    }

    fn capacity(&self) -> usize {
        LossyRing::capacity(self)
    }

    fn len(&self) -> usize {
        LossyRing::len(self)
    }

    fn is_empty(&self) -> bool {
        LossyRing::is_empty(self)
    }

    fn is_full(&self) -> bool {
        LossyRing::is_full(self)
    }
}

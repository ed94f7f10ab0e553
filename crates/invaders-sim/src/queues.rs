//! Event queues: the only boundary where other threads touch the round.
//!
//! Producers append through cloneable [`QueueProducer`] handles from any
//! thread. The engine drains once per tick: a drain swaps out everything
//! queued so far under the lock, so an append racing with a drain (or made
//! while the drained batch is being processed) lands in the next batch.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use invaders_core::events::{ContactEvent, TapEvent};
use invaders_core::types::EntityId;

struct Pending<T> {
    items: VecDeque<T>,
    next_seq: u64,
}

fn lock<T>(inner: &Mutex<Pending<T>>) -> MutexGuard<'_, Pending<T>> {
    // A producer panicking mid-push cannot leave the deque half-written.
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Consumer side of a FIFO queue.
pub struct EventQueue<T> {
    inner: Arc<Mutex<Pending<T>>>,
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Pending {
                items: VecDeque::new(),
                next_seq: 0,
            })),
        }
    }

    /// A new producer handle for this queue.
    pub fn producer(&self) -> QueueProducer<T> {
        QueueProducer {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Take everything queued before this call, oldest first.
    pub fn drain(&self) -> Vec<T> {
        let batch = std::mem::take(&mut lock(&self.inner).items);
        Vec::from(batch)
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard pending events. Sequence numbers keep counting.
    pub fn clear(&self) {
        lock(&self.inner).items.clear();
    }
}

/// Producer side of a FIFO queue. Cheap to clone, `Send` when `T` is.
pub struct QueueProducer<T> {
    inner: Arc<Mutex<Pending<T>>>,
}

impl<T> Clone for QueueProducer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> QueueProducer<T> {
    /// Append an event built from its arrival sequence number.
    pub fn push_with(&self, make: impl FnOnce(u64) -> T) {
        let mut pending = lock(&self.inner);
        let seq = pending.next_seq;
        pending.next_seq += 1;
        let event = make(seq);
        pending.items.push_back(event);
    }

    pub fn push(&self, event: T) {
        self.push_with(|_| event);
    }
}

pub type TapQueue = EventQueue<TapEvent>;
pub type TapProducer = QueueProducer<TapEvent>;
pub type ContactQueue = EventQueue<ContactEvent>;
pub type ContactProducer = QueueProducer<ContactEvent>;

impl QueueProducer<TapEvent> {
    /// Record a tap gesture with its tap count.
    pub fn tap(&self, tap_count: u32) {
        self.push(TapEvent { tap_count });
    }
}

impl QueueProducer<ContactEvent> {
    /// Record a touch between two entities, stamped with arrival order.
    pub fn report(&self, a: EntityId, b: EntityId) {
        self.push_with(|seq| ContactEvent { a, b, seq });
    }
}

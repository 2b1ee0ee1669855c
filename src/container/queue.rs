//! Single-slot queue handler.
//!
//! A [`Queue`] is a capacity-1 hand-off channel used as a field type.
//! Inserting into it walks the rest of the path into a fresh value and
//! sends that value. The send blocks while the slot is occupied; with
//! [`DotConfig::queue_send_timeout`](crate::DotConfig::queue_send_timeout)
//! set it gives up after the timeout instead.

use std::fmt;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, SendTimeoutError, Sender};

use crate::error::{DotError, DotResult};
use crate::walk::Walk;
use crate::walker::Walker;
use crate::writer::Scenario;

use super::split_head;

/// Number of values a queue holds before a send blocks.
pub const QUEUE_CAPACITY: usize = 1;

/// A lazily created, capacity-1 channel.
///
/// The default queue is uninitialized; the channel is created the first
/// time a value is inserted. Clones share the same channel.
pub struct Queue<T> {
    channel: Option<(Sender<T>, Receiver<T>)>,
}

impl<T> Queue<T> {
    /// Creates an uninitialized queue.
    #[must_use]
    pub const fn new() -> Self {
        Self { channel: None }
    }

    /// Creates a queue whose channel already exists.
    #[must_use]
    pub fn initialized() -> Self {
        Self {
            channel: Some(bounded(QUEUE_CAPACITY)),
        }
    }

    /// Returns true once the channel exists.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.channel.is_some()
    }

    fn sender(&mut self) -> Sender<T> {
        let (tx, _) = self.channel.get_or_insert_with(|| {
            log::trace!("materializing queue of {}", std::any::type_name::<T>());
            bounded(QUEUE_CAPACITY)
        });
        tx.clone()
    }

    /// Receiving half of the channel, if it exists.
    #[must_use]
    pub fn receiver(&self) -> Option<Receiver<T>> {
        self.channel.as_ref().map(|(_, rx)| rx.clone())
    }

    /// Takes the queued value without blocking.
    #[must_use]
    pub fn try_recv(&self) -> Option<T> {
        self.channel.as_ref().and_then(|(_, rx)| rx.try_recv().ok())
    }

    /// Waits for a value. Returns `None` for an uninitialized queue.
    #[must_use]
    pub fn recv(&self) -> Option<T> {
        self.channel.as_ref().and_then(|(_, rx)| rx.recv().ok())
    }

    /// Waits up to `timeout` for a value.
    #[must_use]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<T> {
        self.channel
            .as_ref()
            .and_then(|(_, rx)| rx.recv_timeout(timeout).ok())
    }

    /// Number of values waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channel.as_ref().map_or(0, |(_, rx)| rx.len())
    }

    /// Returns true if no value is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

impl<T> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("initialized", &self.is_initialized())
            .field("len", &self.len())
            .finish()
    }
}

/// A single-slot queue reached as a record field.
pub trait QueueSlot {
    /// Walks `parts[1..]` into a fresh value and sends it.
    ///
    /// `parts[0]` is the field that holds the queue.
    ///
    /// # Errors
    ///
    /// Any error from the nested walk, [`DotError::QueueTimeout`] if a
    /// configured timeout elapses, [`DotError::QueueDisconnected`] if the
    /// channel lost its receiver.
    fn send_value(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()>;
}

impl<T: Walk + Default> QueueSlot for Queue<T> {
    fn send_value(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()> {
        let (_, rest) = split_head(parts, path)?;
        let tx = self.sender();

        let mut value = T::default();
        walker.insert(&mut value, path, rest, Scenario::Queue)?;

        match walker.config().queue_send_timeout {
            None => tx.send(value).map_err(|_| DotError::QueueDisconnected {
                path: path.to_string(),
            }),
            Some(timeout) => tx.send_timeout(value, timeout).map_err(|e| match e {
                SendTimeoutError::Timeout(_) => DotError::QueueTimeout {
                    path: path.to_string(),
                    timeout,
                },
                SendTimeoutError::Disconnected(_) => DotError::QueueDisconnected {
                    path: path.to_string(),
                },
            }),
        }
    }
}

//! Acknowledged-request envelope
//!
//! Every administrative request that waits for the cluster to acknowledge a
//! change carries the same envelope ahead of its own payload:
//! - `parent_task`: the task that spawned this request, if any
//! - `master_node_timeout`: how long to wait for the coordinating node
//! - `ack_timeout`: how long to wait for the cluster to acknowledge
//!
//! Requests embed [`AckedRequest`] by value and the codec writes it before
//! the request's own fields.

use std::fmt;
use std::time::Duration;

/// Time unit of a [`TimeValue`]
///
/// The discriminant is the ordinal written on the wire.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Nanoseconds
    Nanoseconds = 0,
    /// Microseconds
    Microseconds = 1,
    /// Milliseconds
    Milliseconds = 2,
    /// Seconds
    Seconds = 3,
    /// Minutes
    Minutes = 4,
    /// Hours
    Hours = 5,
    /// Days
    Days = 6,
}

impl TimeUnit {
    /// Map a wire ordinal back to a unit
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Nanoseconds),
            1 => Some(Self::Microseconds),
            2 => Some(Self::Milliseconds),
            3 => Some(Self::Seconds),
            4 => Some(Self::Minutes),
            5 => Some(Self::Hours),
            6 => Some(Self::Days),
            _ => None,
        }
    }

    /// Wire ordinal
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Nanoseconds => "nanos",
            Self::Microseconds => "micros",
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
        }
    }

    fn nanos_per_unit(self) -> u128 {
        match self {
            Self::Nanoseconds => 1,
            Self::Microseconds => 1_000,
            Self::Milliseconds => 1_000_000,
            Self::Seconds => 1_000_000_000,
            Self::Minutes => 60 * 1_000_000_000,
            Self::Hours => 3_600 * 1_000_000_000,
            Self::Days => 86_400 * 1_000_000_000,
        }
    }
}

/// A duration expressed in a specific unit
///
/// Keeps the unit the caller chose so the value re-encodes byte-for-byte.
/// A negative duration is a sentinel (see [`TimeValue::MINUS_ONE`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeValue {
    duration: i64,
    unit: TimeUnit,
}

impl TimeValue {
    /// "No timeout" sentinel
    pub const MINUS_ONE: TimeValue = TimeValue {
        duration: -1,
        unit: TimeUnit::Milliseconds,
    };

    /// Create a time value from a raw duration and unit
    pub const fn new(duration: i64, unit: TimeUnit) -> Self {
        Self { duration, unit }
    }

    /// Timeout in seconds
    pub const fn timeout_secs(secs: i64) -> Self {
        Self::new(secs, TimeUnit::Seconds)
    }

    /// Timeout in milliseconds
    pub const fn timeout_millis(millis: i64) -> Self {
        Self::new(millis, TimeUnit::Milliseconds)
    }

    /// Raw duration in [`TimeValue::unit`]s
    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Unit of the duration
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Convert to a std duration
    ///
    /// Returns None for negative (sentinel) values.
    pub fn to_std(&self) -> Option<Duration> {
        let duration = u128::try_from(self.duration).ok()?;
        let nanos = duration.checked_mul(self.unit.nanos_per_unit())?;
        let secs = u64::try_from(nanos / 1_000_000_000).ok()?;
        Some(Duration::new(secs, (nanos % 1_000_000_000) as u32))
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration < 0 {
            return write!(f, "{}", self.duration);
        }
        write!(f, "{}{}", self.duration, self.unit.suffix())
    }
}

/// Reference to the task that spawned a request
///
/// An empty `node_id` means "no parent"; `id` is meaningless in that case
/// and is not written on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TaskId {
    node_id: String,
    id: i64,
}

impl TaskId {
    /// Create a parent task reference
    pub fn new(node_id: impl Into<String>, id: i64) -> Self {
        Self {
            node_id: node_id.into(),
            id,
        }
    }

    /// The unset task id
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this refers to an actual task
    pub fn is_set(&self) -> bool {
        !self.node_id.is_empty()
    }

    /// Node the parent task runs on
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Task sequence number on that node
    pub fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}:{}", self.node_id, self.id)
        } else {
            f.write_str("unset")
        }
    }
}

/// Default timeout for both the coordinating node and acknowledgement
pub const DEFAULT_TIMEOUT: TimeValue = TimeValue::timeout_secs(30);

/// Envelope shared by all acknowledged administrative requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AckedRequest {
    /// Task that spawned this request
    pub parent_task: TaskId,
    /// How long to wait for the coordinating node
    pub master_node_timeout: TimeValue,
    /// How long to wait for the cluster to acknowledge the change
    pub ack_timeout: TimeValue,
}

impl AckedRequest {
    /// Envelope with default timeouts and no parent task
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the acknowledgement timeout
    pub fn ack_timeout(mut self, timeout: TimeValue) -> Self {
        self.ack_timeout = timeout;
        self
    }

    /// Set the coordinating-node timeout
    pub fn master_node_timeout(mut self, timeout: TimeValue) -> Self {
        self.master_node_timeout = timeout;
        self
    }

    /// Set the parent task
    pub fn parent_task(mut self, task: TaskId) -> Self {
        self.parent_task = task;
        self
    }
}

impl Default for AckedRequest {
    fn default() -> Self {
        Self {
            parent_task: TaskId::empty(),
            master_node_timeout: DEFAULT_TIMEOUT,
            ack_timeout: DEFAULT_TIMEOUT,
        }
    }
}

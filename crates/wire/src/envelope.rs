//! Envelope encoding
//!
//! Order: parent task, coordinating-node timeout, acknowledgement timeout.
//! Requests write the envelope before any field of their own.

use std::io::{Read, Write};

use scriptstore_core::{AckedRequest, TaskId, TimeUnit, TimeValue};

use crate::codec::{Readable, Writeable};
use crate::error::{Result, StreamError};
use crate::stream::{StreamInput, StreamOutput};

impl Writeable for TimeValue {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        out.write_zlong(self.duration())?;
        out.write_byte(self.unit().as_u8())
    }
}

impl Readable for TimeValue {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let duration = input.read_zlong()?;
        let ordinal = input.read_byte()?;
        let unit = TimeUnit::from_u8(ordinal).ok_or(StreamError::UnknownTimeUnit(ordinal))?;
        Ok(TimeValue::new(duration, unit))
    }
}

// An unset task is just the empty node id; the sequence number is omitted
impl Writeable for TaskId {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        out.write_string(self.node_id())?;
        if self.is_set() {
            out.write_long(self.id())?;
        }
        Ok(())
    }
}

impl Readable for TaskId {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let node_id = input.read_string()?;
        if node_id.is_empty() {
            return Ok(TaskId::empty());
        }
        let id = input.read_long()?;
        Ok(TaskId::new(node_id, id))
    }
}

impl Writeable for AckedRequest {
    fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> Result<()> {
        self.parent_task.write_to(out)?;
        self.master_node_timeout.write_to(out)?;
        self.ack_timeout.write_to(out)
    }
}

impl Readable for AckedRequest {
    fn read_from<R: Read>(input: &mut StreamInput<R>) -> Result<Self> {
        let parent_task = TaskId::read_from(input)?;
        let master_node_timeout = TimeValue::read_from(input)?;
        let ack_timeout = TimeValue::read_from(input)?;
        Ok(AckedRequest {
            parent_task,
            master_node_timeout,
            ack_timeout,
        })
    }
}

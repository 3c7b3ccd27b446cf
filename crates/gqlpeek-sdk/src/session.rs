//! Pending/applied query state.
//!
//! A [`Session`] keeps what the user is editing (pending) apart from what was
//! last executed successfully (applied). Renderers read only the applied
//! inputs and the stored records, so the output always matches a request
//! that was actually sent.
//!
//! ```text
//! Idle/Applied/Failed --edit--> Idle
//! Idle/Applied/Failed --begin--> Executing
//! Executing --success--> Applied
//! Executing --failure--> Failed
//! ```
//!
//! Every [`Session::begin`] hands out a [`Ticket`] with a monotonic sequence
//! number. Only the most recent ticket may settle the session; completions
//! of superseded tickets are dropped.

use crate::error::PeekError;
use crate::query::{BuiltQuery, QueryInputs, Section};
use crate::selection::FieldKey;
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Executing,
    Applied,
    Failed,
}

/// An execution in flight: the inputs it was built from and its query.
///
/// A ticket settles at most once, so it cannot be cloned:
///
/// ```compile_fail
/// fn settles_twice<T: Clone>() {}
/// settles_twice::<gqlpeek_sdk::session::Ticket>();
/// ```
#[derive(Debug)]
pub struct Ticket {
    seq: u64,
    inputs: QueryInputs,
    query: BuiltQuery,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &BuiltQuery {
        &self.query
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    section: Section,
    pending: QueryInputs,
    applied: QueryInputs,
    records: Vec<serde_json::Value>,
    error: Option<String>,
    phase: Phase,
    loading: bool,
    latest_seq: u64,
}

impl Session {
    /// Start a session from the section's default inputs. Pending and applied
    /// begin equal; there are no records yet.
    pub fn new(section: Section) -> Self {
        let inputs = section.default_inputs();
        Self {
            section,
            pending: inputs.clone(),
            applied: inputs,
            records: Vec::new(),
            error: None,
            phase: Phase::Idle,
            loading: false,
            latest_seq: 0,
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn pending(&self) -> &QueryInputs {
        &self.pending
    }

    pub fn applied(&self) -> &QueryInputs {
        &self.applied
    }

    /// Records of the last successful execution.
    pub fn records(&self) -> &[serde_json::Value] {
        &self.records
    }

    /// Message of the last failed execution, cleared when a new one begins.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Fields the renderer should show.
    pub fn applied_fields(&self) -> &[FieldKey] {
        self.applied.fields.keys()
    }

    /// The query the pending inputs currently build. Cheap; performs no I/O.
    pub fn pending_query(&self) -> BuiltQuery {
        self.section.build(&self.pending)
    }

    /// Select or deselect a field.
    pub fn set_field(&mut self, key: impl Into<FieldKey>, selected: bool) {
        self.pending.fields.set(key, selected);
        self.edited();
    }

    /// Flip a field and return whether it is now selected.
    pub fn toggle_field(&mut self, key: impl Into<FieldKey>) -> bool {
        let selected = self.pending.fields.toggle(key);
        self.edited();
        selected
    }

    /// Set the raw limit. It is normalized when the query is built.
    pub fn set_limit(&mut self, raw: impl Into<String>) {
        self.pending.limit = raw.into();
        self.edited();
    }

    /// Set the raw breed identifier. Blank clears it.
    pub fn set_breed(&mut self, raw: impl Into<String>) {
        self.pending.breed = raw.into();
        self.edited();
    }

    /// Replace every pending input at once.
    pub fn replace_pending(&mut self, inputs: QueryInputs) {
        self.pending = inputs;
        self.edited();
    }

    fn edited(&mut self) {
        if self.phase != Phase::Executing {
            self.phase = Phase::Idle;
        }
    }

    /// Snapshot the pending inputs and mark the session as executing.
    pub fn begin(&mut self) -> Ticket {
        self.latest_seq += 1;
        self.error = None;
        self.loading = true;
        self.phase = Phase::Executing;
        Ticket {
            seq: self.latest_seq,
            inputs: self.pending.clone(),
            query: self.section.build(&self.pending),
        }
    }

    /// Settle an execution. Returns `false` when the ticket was superseded by
    /// a later [`begin`](Self::begin) and the outcome was dropped.
    pub fn complete(
        &mut self,
        ticket: Ticket,
        outcome: Result<Vec<serde_json::Value>, PeekError>,
    ) -> bool {
        if ticket.seq != self.latest_seq {
            tracing::debug!(
                seq = ticket.seq,
                latest = self.latest_seq,
                "dropping stale completion"
            );
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(records) => {
                self.records = records;
                self.applied = ticket.inputs;
                self.phase = Phase::Applied;
            }
            Err(e) => {
                tracing::debug!(error = %e, "execution failed");
                self.error = Some(e.to_string());
                self.phase = Phase::Failed;
            }
        }
        true
    }

    /// Execute the pending inputs through `transport` and settle the session.
    pub async fn execute(&mut self, transport: &dyn Transport) -> Phase {
        let ticket = self.begin();
        let outcome = transport.execute(ticket.query()).await;
        self.complete(ticket, outcome);
        self.phase
    }
}

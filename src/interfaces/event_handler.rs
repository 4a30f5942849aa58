// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator evaluations
// ============================================================================

use crate::domain::{CalcValue, CalculationId, Operation};
use crate::numeric::NumericError;
use chrono::{DateTime, Utc};
use std::sync::Mutex;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CalculationEvent {
    /// Operation evaluated successfully
    Evaluated {
        id: CalculationId,
        operation: Operation,
        value: CalcValue,
        timestamp: DateTime<Utc>,
    },

    /// Operation rejected by the numeric library
    Failed {
        id: CalculationId,
        operation: Operation,
        error: NumericError,
        timestamp: DateTime<Utc>,
    },
}

impl CalculationEvent {
    pub fn id(&self) -> CalculationId {
        match self {
            CalculationEvent::Evaluated { id, .. } | CalculationEvent::Failed { id, .. } => *id,
        }
    }

    pub fn operation(&self) -> &Operation {
        match self {
            CalculationEvent::Evaluated { operation, .. }
            | CalculationEvent::Failed { operation, .. } => operation,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, notifications, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Evaluated {
                id,
                operation,
                value,
                ..
            } => tracing::debug!(%id, %operation, %value, "calculation evaluated"),
            CalculationEvent::Failed {
                id,
                operation,
                error,
                ..
            } => tracing::debug!(%id, %operation, %error, "calculation failed"),
        }
    }
}

/// Handler that keeps every event it receives
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events received so far
    pub fn events(&self) -> Vec<CalculationEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

// Event module
// Calendar event model owned by the caller; the layout engine reads it per call

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Visual status attached to an event (drawn by the rendering layer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStatus {
    pub id: String,
    pub name: String,
    /// Hex color (#RRGGBB or #RGB)
    pub color: String,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            name: "Default".to_string(),
            color: "#6B7280".to_string(),
        }
    }
}

/// Calendar event with a start/end timestamp pair
///
/// The layout engine treats events as read-only input and tolerates
/// `end_at < start_at` (such events collapse to a minimum one-slot height);
/// validation here applies only to events built through `new`/`builder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub start_at: DateTime<Local>,
    pub end_at: DateTime<Local>,
    pub status: EventStatus,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Unique event identifier
    /// * `name` - Event name (required, non-empty)
    /// * `start_at` - Event start time
    /// * `end_at` - Event end time
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation
    ///
    /// # Examples
    /// ```
    /// use slotgrid::models::event::Event;
    /// use chrono::Local;
    ///
    /// let start = Local::now();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("evt-1", "Team Meeting", start, end).unwrap();
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_at: DateTime<Local>,
        end_at: DateTime<Local>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            name: name.into(),
            start_at,
            end_at,
            status: EventStatus::default(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Event name cannot be empty".to_string());
        }

        if self.end_at < self.start_at {
            return Err("Event end time must not be before start time".to_string());
        }

        // Status color should be a hex color
        let color = &self.status.color;
        if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
            return Err("Status color must be in hex format (#RRGGBB or #RGB)".to_string());
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end_at - self.start_at
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    name: Option<String>,
    start_at: Option<DateTime<Local>>,
    end_at: Option<DateTime<Local>>,
    status: Option<EventStatus>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            start_at: None,
            end_at: None,
            status: None,
        }
    }

    /// Set the event id
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the start time
    pub fn start_at(mut self, start_at: DateTime<Local>) -> Self {
        self.start_at = Some(start_at);
        self
    }

    /// Set the end time
    pub fn end_at(mut self, end_at: DateTime<Local>) -> Self {
        self.end_at = Some(end_at);
        self
    }

    /// Set the event status
    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let name = self.name.ok_or("Event name is required")?;
        let start_at = self.start_at.ok_or("Event start time is required")?;
        let end_at = self.end_at.ok_or("Event end time is required")?;

        let event = Event {
            id,
            name,
            start_at,
            end_at,
            status: self.status.unwrap_or_default(),
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use super::SystemEventCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::event::SystemEvent,
};

pub struct RecordSystemEventCommand {
    pub event_type: String,
    pub details: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl SystemEventCommandService {
    /// Manual operator note in the system event stream.
    pub async fn record(
        &self,
        actor: &AuthenticatedUser,
        command: RecordSystemEventCommand,
    ) -> ApplicationResult<()> {
        if !actor.has_capability("events", "record") {
            return Err(ApplicationError::forbidden(
                "missing capability events:record",
            ));
        }

        let event_type = command.event_type.trim();
        if event_type.is_empty() {
            return Err(ApplicationError::validation("event type cannot be empty"));
        }

        let mut event = SystemEvent::new(event_type);
        event.details = command.details;
        event.metadata = command.metadata;
        event.created_at = Some(self.clock.now());

        self.event_repo.insert(event).await?;
        Ok(())
    }
}

mod record;
mod service;

pub use record::RecordSystemEventCommand;
pub use service::SystemEventCommandService;

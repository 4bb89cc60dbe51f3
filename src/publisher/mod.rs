pub mod cursor;
pub mod message_id;
pub mod runner;

pub use cursor::BatchCursor;
pub use message_id::{MessageIdGenerator, MAX_MESSAGE_ID_LENGTH};
pub use runner::{BatchReport, CyclicPublisher, PublishSummary, PublisherError};

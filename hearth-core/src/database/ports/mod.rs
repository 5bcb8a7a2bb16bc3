pub mod contact_messages;
pub mod homes;
pub mod visits;

pub use contact_messages::{ContactMessagesWritePort, NewContactMessage};
pub use homes::{HomePage, HomesReadPort};
pub use visits::{NewVisitRequest, VisitsWritePort};

pub mod contact_messages;
pub mod homes;
pub mod visits;

pub use contact_messages::PostgresContactMessagesRepository;
pub use homes::PostgresHomesRepository;
pub use visits::PostgresVisitsRepository;

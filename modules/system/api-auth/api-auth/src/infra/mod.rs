pub mod static_tickets;

pub use static_tickets::StaticTicketInfoSource;

pub mod create_event;
pub mod mint_ticket;

pub use create_event::*;
pub use mint_ticket::*;

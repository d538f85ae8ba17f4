//! Support page plumbing: contact-form tickets, their relay to the messaging
//! bot API, and the scripted chat widget.

pub mod chat;
pub mod client;
pub mod notice;
pub mod notifier;
pub mod ticket;

pub use client::{RelayClient, RelayReceipt};
pub use notice::{SendMessagePayload, TicketNotice};
pub use notifier::{Notifier, TelegramNotifier};
pub use ticket::{new_ticket_id, ContactForm, TicketDraft, TicketSubmission};

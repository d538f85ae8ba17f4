//! Scripted support chat: a greeting plus canned replies.

use chrono::{DateTime, Local, TimeZone, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, SystemTime};

/// Opening message shown before the user types anything.
pub const GREETING: &str = "Hello! 👋 Welcome to our support chat. How can I help you today?";

/// Simulated "support is typing" pause before each reply.
pub const TYPING_DELAY: Duration = Duration::from_millis(1500);

/// Canned replies; one is chosen uniformly per user message.
pub const CANNED_REPLIES: [&str; 4] = [
    "Thank you for reaching out! I'm looking into your question now.",
    "I understand your concern. Let me help you with that.",
    "Great question! Here's what I can tell you...",
    "I'd be happy to assist you with that. Let me check our resources.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Support,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: SystemTime,
}

impl ChatMessage {
    fn now(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            sent_at: SystemTime::now(),
        }
    }
}

/// Message log for one chat session.
#[derive(Debug, Clone)]
pub struct SupportChat {
    messages: Vec<ChatMessage>,
}

impl Default for SupportChat {
    fn default() -> Self {
        Self::new()
    }
}

impl SupportChat {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::now(Sender::Support, GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record a user message and answer it. Blank input is ignored.
    pub fn send<R: Rng + ?Sized>(&mut self, text: &str, rng: &mut R) -> Option<&ChatMessage> {
        if !self.push_user(text) {
            return None;
        }
        Some(self.push_reply(rng))
    }

    /// Like [`SupportChat::send`], pausing [`TYPING_DELAY`] before replying.
    pub async fn send_with_delay(&mut self, text: &str) -> Option<&ChatMessage> {
        if !self.push_user(text) {
            return None;
        }
        tokio::time::sleep(TYPING_DELAY).await;
        let mut rng = rand::thread_rng();
        Some(self.push_reply(&mut rng))
    }

    fn push_user(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::now(Sender::User, text));
        true
    }

    fn push_reply<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &ChatMessage {
        let reply = CANNED_REPLIES.choose(rng).copied().unwrap_or(CANNED_REPLIES[0]);
        self.messages.push(ChatMessage::now(Sender::Support, reply));
        &self.messages[self.messages.len() - 1]
    }
}

/// Render a timestamp as local 12-hour `hh:mm AM`.
pub fn format_time(at: SystemTime) -> String {
    format_time_in(at, &Local)
}

/// [`format_time`] in an explicit time zone.
pub fn format_time_in<Tz>(at: SystemTime, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    DateTime::<Utc>::from(at)
        .with_timezone(zone)
        .format("%I:%M %p")
        .to_string()
}

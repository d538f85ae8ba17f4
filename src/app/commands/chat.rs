//! `chat` command helpers.

use storefront::support::chat::{format_time, ChatMessage, Sender, SupportChat};

/// Send one message to the scripted support chat and print the transcript.
pub(crate) async fn handle_chat_command(words: &[String]) {
    let text = words.join(" ");
    let mut chat = SupportChat::new();
    if chat.send_with_delay(&text).await.is_none() {
        eprintln!("warning: nothing to send");
        return;
    }
    for message in chat.messages() {
        println!("{}", transcript_line(message));
    }
}

fn transcript_line(message: &ChatMessage) -> String {
    let who = match message.sender {
        Sender::User => "you",
        Sender::Support => "support",
    };
    format!("[{}] {who}: {}", format_time(message.sent_at), message.text)
}

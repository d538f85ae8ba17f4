//! Formatting of relayed ticket notifications.

use serde::Serialize;

use super::ticket::TicketSubmission;

/// Label of the inline button linking back to the ticket's page.
pub const ADMIN_BUTTON_LABEL: &str = "View Ticket in Admin Panel";

/// Messaging-platform-neutral notification for one ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketNotice {
    /// HTML-formatted message body.
    pub text: String,
    /// Page link for the inline button; omitted for local URLs.
    pub button_url: Option<String>,
}

impl TicketNotice {
    pub fn from_ticket(ticket: &TicketSubmission) -> Self {
        let email = escape_html(&ticket.user_email);
        let text = format!(
            "<b>New Support Ticket Submitted</b>\n\
             \n\
             <b>Ticket ID:</b> {id}\n\
             <b>User:</b> {user}\n\
             <b>Email:</b> <a href=\"mailto:{email}\">{email}</a>\n\
             <b>Type:</b> {kind}\n\
             \n\
             <b>Description:</b>\n\
             {description}",
            id = escape_html(&ticket.ticket_id),
            user = escape_html(&ticket.user_name),
            kind = escape_html(&ticket.request_type),
            description = escape_html(ticket.description.trim_end()),
        );
        let button_url = (!is_local_url(&ticket.page_url)).then(|| ticket.page_url.clone());
        Self { text, button_url }
    }
}

/// The messaging API rejects buttons pointing at local addresses.
pub fn is_local_url(url: &str) -> bool {
    url.contains("localhost") || url.contains("127.0.0.1")
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

/// `sendMessage` request body for the Telegram bot API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SendMessagePayload {
    pub chat_id: String,
    pub text: String,
    pub parse_mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<ReplyMarkup>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReplyMarkup {
    pub inline_keyboard: Vec<Vec<InlineButton>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InlineButton {
    pub text: String,
    pub url: String,
}

impl SendMessagePayload {
    pub fn for_notice(chat_id: &str, notice: &TicketNotice) -> Self {
        let reply_markup = notice.button_url.as_ref().map(|url| ReplyMarkup {
            inline_keyboard: vec![vec![InlineButton {
                text: ADMIN_BUTTON_LABEL.to_string(),
                url: url.clone(),
            }]],
        });
        Self {
            chat_id: chat_id.to_string(),
            text: notice.text.clone(),
            parse_mode: "HTML",
            reply_markup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ticket(page_url: &str) -> TicketSubmission {
        TicketSubmission {
            ticket_id: "SUP-42".into(),
            user_name: "Ada".into(),
            user_email: "ada@example.com".into(),
            request_type: "Billing".into(),
            description: "Charged twice\n".into(),
            page_url: page_url.into(),
        }
    }

    #[test]
    fn message_lists_ticket_fields() {
        let notice = TicketNotice::from_ticket(&ticket("https://shop.example.com/support"));
        assert_eq!(
            notice.text,
            "<b>New Support Ticket Submitted</b>\n\n\
             <b>Ticket ID:</b> SUP-42\n\
             <b>User:</b> Ada\n\
             <b>Email:</b> <a href=\"mailto:ada@example.com\">ada@example.com</a>\n\
             <b>Type:</b> Billing\n\n\
             <b>Description:</b>\n\
             Charged twice"
        );
        assert_eq!(
            notice.button_url.as_deref(),
            Some("https://shop.example.com/support")
        );
    }

    #[test]
    fn local_urls_get_no_button() {
        for url in ["http://localhost:3000/support", "http://127.0.0.1/support"] {
            assert_eq!(TicketNotice::from_ticket(&ticket(url)).button_url, None);
        }
    }

    #[test]
    fn user_text_is_escaped() {
        let mut t = ticket("https://shop.example.com");
        t.description = "<script>\"x\" & y</script>".into();
        let notice = TicketNotice::from_ticket(&t);
        assert!(notice
            .text
            .ends_with("&lt;script&gt;&quot;x&quot; &amp; y&lt;/script&gt;"));
    }

    #[test]
    fn payload_includes_keyboard_only_with_button() {
        let with_button = TicketNotice::from_ticket(&ticket("https://shop.example.com/s"));
        let value = serde_json::to_value(SendMessagePayload::for_notice("-100", &with_button))
            .expect("serialize");
        assert_eq!(value["parse_mode"], "HTML");
        assert_eq!(value["chat_id"], "-100");
        assert_eq!(
            value["reply_markup"],
            json!({"inline_keyboard": [[{"text": ADMIN_BUTTON_LABEL, "url": "https://shop.example.com/s"}]]})
        );

        let local = TicketNotice::from_ticket(&ticket("http://localhost/s"));
        let value =
            serde_json::to_value(SendMessagePayload::for_notice("-100", &local)).expect("serialize");
        assert!(value.get("reply_markup").is_none());
    }
}

//! `ticket` command helpers.

use std::time::{Duration, SystemTime};

use storefront::config::Config;
use storefront::error::RelayError;
use storefront::support::{new_ticket_id, ContactForm, RelayClient, TicketSubmission};
use tracing::info;

use crate::cli::TicketArgs;

/// Submit the contact form through the relay and print the receipt.
pub(crate) async fn handle_ticket_command(
    config: &Config,
    args: TicketArgs,
) -> Result<(), RelayError> {
    let relay_url = args
        .relay_url
        .clone()
        .unwrap_or_else(|| config.client.relay_url.clone());
    let client = RelayClient::new(&relay_url, Duration::from_secs(config.client.timeout_secs));

    let submission = submission_from_args(args, SystemTime::now());
    info!(ticket_id = %submission.ticket_id, relay = %client.relay_url(), "submitting ticket");
    let receipt = client.submit(&submission).await?;
    println!("{} ({})", receipt.message, submission.ticket_id);
    Ok(())
}

fn submission_from_args(args: TicketArgs, now: SystemTime) -> TicketSubmission {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
    };
    form.into_submission(new_ticket_id(now), args.page_url)
}

//! Read-only instructions for the event registry program

use anchor_lang::prelude::*;
use crate::instructions::{GetEventDetails, GetTicketBuyer};
use crate::state::{EventDetails, EventRecord, TicketBuyer};

/// Get the full record of an event
pub fn get_event_details(ctx: Context<GetEventDetails>, event_id: u64) -> Result<EventDetails> {
    let record = EventRecord::read(&ctx.accounts.event.to_account_info(), event_id)?;
    Ok(record.details())
}

/// Get the buyer of a ticket, or the default key if the ticket is unsold
///
/// `token_id` selects the `ticket_buyer` account through its seeds.
pub fn get_ticket_buyer(
    ctx: Context<GetTicketBuyer>,
    event_id: u64,
    _token_id: u64,
) -> Result<Pubkey> {
    ctx.accounts.registry.ensure_event_exists(event_id)?;
    TicketBuyer::read_buyer(&ctx.accounts.ticket_buyer.to_account_info())
}

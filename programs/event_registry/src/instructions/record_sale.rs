//! Record sale instruction for the event registry program

use anchor_lang::prelude::*;
use crate::instructions::RecordSale;
use crate::events::SaleRecorded;
use crate::state::EventRecord;

/// Record a ticket sale and attribute the ticket to its buyer
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `event_id` - The event the ticket belongs to
/// * `token_id` - The minted ticket token id
/// * `buyer` - The purchasing account
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn record_sale(
    ctx: Context<RecordSale>,
    event_id: u64,
    token_id: u64,
    buyer: Pubkey,
) -> Result<()> {
    let registry = &ctx.accounts.registry;
    let event_info = ctx.accounts.event.to_account_info();
    let ticket_buyer = &mut ctx.accounts.ticket_buyer;
    let clock = Clock::get()?;

    registry.ensure_sale_recorder(ctx.accounts.recorder.key())?;
    registry.ensure_event_exists(event_id)?;

    let mut event = EventRecord::read(&event_info, event_id)?;
    let tickets_sold = event.record_sale(&clock)?;
    event.write(&event_info)?;

    ticket_buyer.initialize(event_id, token_id, buyer, ctx.bumps.ticket_buyer, &clock)?;

    emit!(SaleRecorded {
        event_id,
        token_id,
        buyer,
        tickets_sold,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Sale recorded for event {}: ticket {} to {} ({}/{} sold)",
        event_id,
        token_id,
        buyer,
        tickets_sold,
        event.max_supply
    );

    Ok(())
}

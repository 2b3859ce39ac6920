//! Create event instruction for the event registry program

use anchor_lang::prelude::*;
use crate::instructions::CreateEvent;
use crate::events::EventCreated;
use crate::state::EventParams;

/// Create a new event under the next sequential id
///
/// Parameters are validated before the counter moves, so a rejected
/// creation never consumes an id.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `name` - Display name
/// * `organizer` - Account credited with sale proceeds
/// * `price` - Ticket price in the payment token's smallest unit
/// * `max_supply` - Cap on tickets sold
/// * `is_active` - Whether sales start enabled
///
/// # Returns
/// * `Result<u64>` - The assigned event id
pub fn create_event(
    ctx: Context<CreateEvent>,
    name: String,
    organizer: Pubkey,
    price: u64,
    max_supply: u64,
    is_active: bool,
) -> Result<u64> {
    let registry = &mut ctx.accounts.registry;
    let event = &mut ctx.accounts.event;
    let clock = Clock::get()?;

    registry.ensure_authority(ctx.accounts.authority.key())?;

    let params = EventParams {
        name: name.clone(),
        organizer,
        price,
        max_supply,
        is_active,
    };
    let event_id = registry.register_event(event, params, ctx.bumps.event, &clock)?;

    emit!(EventCreated {
        registry: registry.key(),
        event_id,
        name: name.clone(),
        organizer,
        price,
        max_supply,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Event {} '{}' created for organizer {} (price {}, supply {})",
        event_id,
        name,
        organizer,
        price,
        max_supply
    );

    Ok(event_id)
}

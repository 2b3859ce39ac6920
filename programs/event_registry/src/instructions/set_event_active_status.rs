//! Set event active status instruction for the event registry program

use anchor_lang::prelude::*;
use crate::instructions::SetEventActiveStatus;
use crate::events::EventUpdated;
use crate::state::EventRecord;

/// Enable or disable ticket sales for an event
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `event_id` - The event to update
/// * `is_active` - The desired sale status; must differ from the current one
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn set_event_active_status(
    ctx: Context<SetEventActiveStatus>,
    event_id: u64,
    is_active: bool,
) -> Result<()> {
    let registry = &ctx.accounts.registry;
    let event_info = ctx.accounts.event.to_account_info();
    let clock = Clock::get()?;

    registry.ensure_authority(ctx.accounts.authority.key())?;
    registry.ensure_event_exists(event_id)?;

    let mut event = EventRecord::read(&event_info, event_id)?;
    event.set_active_status(is_active, &clock)?;
    event.write(&event_info)?;

    emit!(EventUpdated {
        event_id,
        is_active,
        timestamp: clock.unix_timestamp,
    });

    msg!("Event {} active status set to {}", event_id, is_active);

    Ok(())
}

//! Set sale recorder instruction for the event registry program

use anchor_lang::prelude::*;
use crate::instructions::SetSaleRecorder;
use crate::events::SaleRecorderUpdated;

/// Designate the account allowed to record sales
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `new_recorder` - The account that may call `record_sale` from now on
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn set_sale_recorder(ctx: Context<SetSaleRecorder>, new_recorder: Pubkey) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    let clock = Clock::get()?;

    registry.ensure_authority(ctx.accounts.authority.key())?;

    let previous_recorder = registry.sale_recorder;
    registry.set_sale_recorder(new_recorder, &clock)?;

    emit!(SaleRecorderUpdated {
        registry: registry.key(),
        previous_recorder,
        new_recorder,
        timestamp: clock.unix_timestamp,
    });

    msg!("Sale recorder changed from {} to {}", previous_recorder, new_recorder);

    Ok(())
}

//! Purchase ticket instruction for the payment handler program

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{self, Transfer};
use event_registry::{cpi::accounts::RecordSale, EventRecord};
use ticket_nft::{cpi::accounts::SafeMint, Ticket};

use crate::constants::HANDLER_SEED;
use crate::errors::PaymentHandlerError;
use crate::events::TicketPurchased;
use crate::instructions::PurchaseTicket;
use crate::settlement::{PurchaseQuote, Settlement, SettlementLedger};

/// Buy a ticket for `event_id` and mint it to `recipient`
///
/// The buyer pays with a prior delegate approval to the handler PDA. Funds
/// pass through the handler's escrow to the organizer within the same
/// transaction.
///
/// # Arguments
/// * `ctx` - The instruction context containing accounts
/// * `event_id` - The event to buy a ticket for
/// * `recipient` - The account that receives the ticket
/// * `metadata_uri` - Metadata URI stored on the minted ticket
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Events
/// * `TicketPurchased` - Emitted when the purchase settles
pub fn purchase_ticket(
    ctx: Context<PurchaseTicket>,
    event_id: u64,
    recipient: Pubkey,
    metadata_uri: String,
) -> Result<()> {
    let clock = Clock::get()?;
    let event = EventRecord::read(&ctx.accounts.event.to_account_info(), event_id)?;
    let buyer = ctx.accounts.buyer.key();
    let quote = PurchaseQuote::new(
        event_id,
        &event,
        buyer,
        recipient,
        ctx.accounts.config.key(),
    );

    let bump = [ctx.accounts.config.bump];
    let seeds: [&[u8]; 2] = [HANDLER_SEED, &bump];
    let signer_seeds = [&seeds[..]];

    let mut ledger = CpiLedger {
        accounts: ctx.accounts,
        signer_seeds: &signer_seeds,
    };
    let mut settlement = Settlement::new(&quote);
    let receipt = settlement.execute(&mut ledger, &metadata_uri)?;

    emit!(TicketPurchased {
        event_id,
        buyer,
        recipient,
        token_id: receipt.token_id,
        price: receipt.price,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Ticket {} for event {} purchased by {} for {}, minted to {}",
        receipt.token_id,
        event_id,
        buyer,
        receipt.price,
        recipient
    );

    Ok(())
}

/// Settlement ledger backed by the token program and the two collaborator
/// programs, with the handler PDA signing every call
struct CpiLedger<'a, 'info> {
    accounts: &'a mut PurchaseTicket<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
}

impl<'a, 'info> SettlementLedger for CpiLedger<'a, 'info> {
    fn allowance(&self) -> Result<u64> {
        let source = &self.accounts.buyer_token_account;
        Ok(match source.delegate {
            COption::Some(delegate) if delegate == self.accounts.config.key() => {
                source.delegated_amount
            }
            _ => 0,
        })
    }

    fn custody_balance(&mut self) -> Result<u64> {
        self.accounts.escrow.reload()?;
        Ok(self.accounts.escrow.amount)
    }

    fn pull_funds(&mut self, amount: u64) -> Result<()> {
        let accounts = &*self.accounts;
        let cpi_accounts = Transfer {
            from: accounts.buyer_token_account.to_account_info(),
            to: accounts.escrow.to_account_info(),
            authority: accounts.config.to_account_info(),
        };
        let cpi_program = accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        token::transfer(cpi_ctx, amount)
    }

    fn mint_ticket(&mut self, recipient: Pubkey, metadata_uri: &str) -> Result<u64> {
        let accounts = &*self.accounts;

        // A rejected CPI aborts the transaction, so check what the mint would reject
        require_keys_eq!(
            accounts.collection.authority,
            accounts.config.key(),
            PaymentHandlerError::MinterUnavailable
        );
        Ticket::validate_mint(&recipient, metadata_uri)?;

        let cpi_accounts = SafeMint {
            collection: accounts.collection.to_account_info(),
            ticket: accounts.ticket.to_account_info(),
            authority: accounts.config.to_account_info(),
            payer: accounts.buyer.to_account_info(),
            system_program: accounts.system_program.to_account_info(),
        };
        let cpi_program = accounts.ticket_nft_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        let token_id = ticket_nft::cpi::safe_mint(cpi_ctx, recipient, metadata_uri.to_string())?.get();
        Ok(token_id)
    }

    fn record_sale(&mut self, event_id: u64, token_id: u64, buyer: Pubkey) -> Result<()> {
        let accounts = &*self.accounts;

        require_keys_eq!(
            accounts.registry.sale_recorder,
            accounts.config.key(),
            PaymentHandlerError::SaleRecorderUnavailable
        );

        let cpi_accounts = RecordSale {
            registry: accounts.registry.to_account_info(),
            event: accounts.event.to_account_info(),
            ticket_buyer: accounts.ticket_buyer.to_account_info(),
            recorder: accounts.config.to_account_info(),
            payer: accounts.buyer.to_account_info(),
            system_program: accounts.system_program.to_account_info(),
        };
        let cpi_program = accounts.event_registry_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        event_registry::cpi::record_sale(cpi_ctx, event_id, token_id, buyer)
    }

    fn forward_funds(&mut self, organizer: Pubkey, amount: u64) -> Result<()> {
        let accounts = &*self.accounts;

        if accounts.organizer_token_account.owner != organizer {
            msg!(
                "Proceeds account {} is not owned by organizer {}",
                accounts.organizer_token_account.key(),
                organizer
            );
            return err!(PaymentHandlerError::InvalidOrganizerAccount);
        }

        let cpi_accounts = Transfer {
            from: accounts.escrow.to_account_info(),
            to: accounts.organizer_token_account.to_account_info(),
            authority: accounts.config.to_account_info(),
        };
        let cpi_program = accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, self.signer_seeds);

        token::transfer(cpi_ctx, amount)
    }
}

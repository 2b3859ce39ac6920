//! # Settlement Module
//!
//! Sequencing of a single ticket purchase. A purchase walks through
//! `Idle → AllowanceChecked → FundsPulled → Minted → SaleRecorded →
//! FundsForwarded → Complete`. The token movements and cross-program calls
//! behind each stage are supplied by a [`SettlementLedger`]; on chain that is
//! the CPI-backed ledger in `instructions::purchase_ticket`.
//!
//! Nothing here undoes completed stages. A failing stage returns an error,
//! and the runtime discards the whole transaction, which includes every
//! transfer, mint and sale record already made.

use anchor_lang::prelude::*;
use event_registry::EventRecord;

use crate::errors::PaymentHandlerError;

/// Progress of a purchase through settlement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementStage {
    Idle,
    AllowanceChecked,
    FundsPulled,
    Minted,
    SaleRecorded,
    FundsForwarded,
    Complete,
}

/// Reasons reported under the umbrella `PaymentFailed` error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentFailure {
    ZeroRecipient,
    MintFailed,
    SaleNotRecorded,
}

impl PaymentFailure {
    pub fn reason(&self) -> &'static str {
        match self {
            PaymentFailure::ZeroRecipient => "Recipient cannot be zero address",
            PaymentFailure::MintFailed => "NFT minting failed",
            PaymentFailure::SaleNotRecorded => "Sale recording failed",
        }
    }

    /// Log the reason and produce the `PaymentFailed` error
    pub fn into_error(self) -> Error {
        msg!("PaymentFailed: {}", self.reason());
        error!(PaymentHandlerError::PaymentFailed)
    }
}

/// Everything a purchase is validated and priced against, taken from the
/// event record at the start of the purchase
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseQuote {
    pub event_id: u64,
    /// The paying account
    pub buyer: Pubkey,
    /// The account that receives the ticket
    pub recipient: Pubkey,
    /// The handler PDA the buyer must have approved
    pub handler: Pubkey,
    pub organizer: Pubkey,
    pub price: u64,
    pub is_active: bool,
    pub tickets_sold: u64,
    pub max_supply: u64,
}

impl PurchaseQuote {
    pub fn new(
        event_id: u64,
        event: &EventRecord,
        buyer: Pubkey,
        recipient: Pubkey,
        handler: Pubkey,
    ) -> Self {
        Self {
            event_id,
            buyer,
            recipient,
            handler,
            organizer: event.organizer,
            price: event.price,
            is_active: event.is_active,
            tickets_sold: event.tickets_sold,
            max_supply: event.max_supply,
        }
    }

    /// Purchase preconditions, checked in order: sale status, supply,
    /// recipient, allowance
    pub fn check(&self, allowance: u64) -> Result<()> {
        if !self.is_active {
            msg!("EventNotActive: event {}", self.event_id);
            return err!(PaymentHandlerError::EventNotActive);
        }

        if self.tickets_sold >= self.max_supply {
            msg!("EventSoldOut: event {}", self.event_id);
            return err!(PaymentHandlerError::EventSoldOut);
        }

        if self.recipient == Pubkey::default() {
            return Err(PaymentFailure::ZeroRecipient.into_error());
        }

        if allowance < self.price {
            msg!(
                "InsufficientAllowance: buyer {} approved {} for handler {}, {} required",
                self.buyer,
                allowance,
                self.handler,
                self.price
            );
            return Err(
                error!(PaymentHandlerError::InsufficientAllowance).with_values((self.price, allowance))
            );
        }

        Ok(())
    }
}

/// Outcome of a settled purchase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettlementReceipt {
    pub token_id: u64,
    pub price: u64,
}

/// Token movements and collaborator calls a purchase is settled through
pub trait SettlementLedger {
    /// Amount the buyer has approved the handler to spend
    fn allowance(&self) -> Result<u64>;

    /// Current balance of the handler's custody account
    fn custody_balance(&mut self) -> Result<u64>;

    /// Move `amount` from the buyer into custody, consuming allowance
    fn pull_funds(&mut self, amount: u64) -> Result<()>;

    /// Mint a ticket to `recipient`, returning its token id
    fn mint_ticket(&mut self, recipient: Pubkey, metadata_uri: &str) -> Result<u64>;

    /// Record the sale of `token_id` to `buyer` in the event registry
    fn record_sale(&mut self, event_id: u64, token_id: u64, buyer: Pubkey) -> Result<()>;

    /// Move `amount` out of custody to the organizer
    fn forward_funds(&mut self, organizer: Pubkey, amount: u64) -> Result<()>;
}

/// A single purchase attempt
pub struct Settlement<'q> {
    quote: &'q PurchaseQuote,
    stage: SettlementStage,
}

impl<'q> Settlement<'q> {
    pub fn new(quote: &'q PurchaseQuote) -> Self {
        Self {
            quote,
            stage: SettlementStage::Idle,
        }
    }

    /// Last stage this purchase completed
    pub fn stage(&self) -> SettlementStage {
        self.stage
    }

    /// Run every stage against `ledger`
    pub fn execute<L: SettlementLedger>(
        &mut self,
        ledger: &mut L,
        metadata_uri: &str,
    ) -> Result<SettlementReceipt> {
        let result = self.run(ledger, metadata_uri);
        if result.is_err() {
            msg!(
                "Settlement for event {} failed after stage {:?}",
                self.quote.event_id,
                self.stage
            );
        }
        result
    }

    fn run<L: SettlementLedger>(
        &mut self,
        ledger: &mut L,
        metadata_uri: &str,
    ) -> Result<SettlementReceipt> {
        let quote = self.quote;

        quote.check(ledger.allowance()?)?;
        self.stage = SettlementStage::AllowanceChecked;

        let custody_before = ledger.custody_balance()?;
        if quote.price > 0 {
            ledger.pull_funds(quote.price)?;
        }
        self.stage = SettlementStage::FundsPulled;

        let token_id = ledger
            .mint_ticket(quote.recipient, metadata_uri)
            .map_err(|err| {
                msg!("Ticket mint rejected: {}", err);
                PaymentFailure::MintFailed.into_error()
            })?;
        self.stage = SettlementStage::Minted;

        ledger
            .record_sale(quote.event_id, token_id, quote.buyer)
            .map_err(|err| {
                msg!("Sale record rejected: {}", err);
                PaymentFailure::SaleNotRecorded.into_error()
            })?;
        self.stage = SettlementStage::SaleRecorded;

        if quote.price > 0 {
            ledger.forward_funds(quote.organizer, quote.price)?;
        }
        self.stage = SettlementStage::FundsForwarded;

        let custody_after = ledger.custody_balance()?;
        require_eq!(custody_after, custody_before, PaymentHandlerError::CustodyImbalance);
        self.stage = SettlementStage::Complete;

        Ok(SettlementReceipt {
            token_id,
            price: quote.price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{ComparedValues, Error};
    use anchor_lang::solana_program::program_error::ProgramError;
    use event_registry::EventRegistryError;
    use std::collections::BTreeMap;
    use ticket_nft::TicketNftError;

    const PRICE: u64 = 10_000_000;
    const URI: &str = "ipfs://examplemetadata/0/0";

    /// In-memory stand-in for the token program and both collaborator
    /// programs. `purchase` restores the snapshot taken before a failed
    /// attempt, as the runtime does for a failed transaction.
    #[derive(Clone, Debug, PartialEq)]
    struct MemoryLedger {
        handler: Pubkey,
        organizer: Pubkey,
        buyer: Pubkey,
        balances: BTreeMap<Pubkey, u64>,
        allowances: BTreeMap<Pubkey, u64>,
        minter_is_handler: bool,
        recorder_is_handler: bool,
        next_token_id: u64,
        owners: BTreeMap<u64, Pubkey>,
        uris: BTreeMap<u64, String>,
        price: u64,
        max_supply: u64,
        tickets_sold: u64,
        is_active: bool,
        buyers: BTreeMap<u64, Pubkey>,
        calls: Vec<&'static str>,
    }

    impl MemoryLedger {
        fn new(price: u64, max_supply: u64) -> Self {
            Self {
                handler: Pubkey::new_unique(),
                organizer: Pubkey::new_unique(),
                buyer: Pubkey::default(),
                balances: BTreeMap::new(),
                allowances: BTreeMap::new(),
                minter_is_handler: true,
                recorder_is_handler: true,
                next_token_id: 0,
                owners: BTreeMap::new(),
                uris: BTreeMap::new(),
                price,
                max_supply,
                tickets_sold: 0,
                is_active: true,
                buyers: BTreeMap::new(),
                calls: Vec::new(),
            }
        }

        fn fund(&mut self, account: Pubkey, amount: u64, allowance: u64) {
            self.balances.insert(account, amount);
            self.allowances.insert(account, allowance);
        }

        fn balance(&self, account: &Pubkey) -> u64 {
            self.balances.get(account).copied().unwrap_or(0)
        }

        fn move_tokens(&mut self, from: Pubkey, to: Pubkey, amount: u64) -> Result<()> {
            let available = self.balance(&from);
            if available < amount {
                return Err(ProgramError::InsufficientFunds.into());
            }
            self.balances.insert(from, available - amount);
            let received = self.balance(&to) + amount;
            self.balances.insert(to, received);
            Ok(())
        }

        fn quote(&self, buyer: Pubkey, recipient: Pubkey) -> PurchaseQuote {
            let event = EventRecord {
                event_id: 0,
                organizer: self.organizer,
                name: "Test PPV Event".to_string(),
                price: self.price,
                max_supply: self.max_supply,
                tickets_sold: self.tickets_sold,
                is_active: self.is_active,
                ..EventRecord::default()
            };
            PurchaseQuote::new(0, &event, buyer, recipient, self.handler)
        }

        /// One purchase in its own all-or-nothing unit of work
        fn purchase(
            &mut self,
            buyer: Pubkey,
            recipient: Pubkey,
        ) -> (Result<SettlementReceipt>, SettlementStage) {
            let snapshot = self.clone();
            self.buyer = buyer;
            let quote = self.quote(buyer, recipient);
            let mut settlement = Settlement::new(&quote);
            let result = settlement.execute(self, URI);
            if result.is_err() {
                *self = snapshot;
            }
            (result, settlement.stage())
        }
    }

    impl SettlementLedger for MemoryLedger {
        fn allowance(&self) -> Result<u64> {
            Ok(self.allowances.get(&self.buyer).copied().unwrap_or(0))
        }

        fn custody_balance(&mut self) -> Result<u64> {
            Ok(self.balance(&self.handler))
        }

        fn pull_funds(&mut self, amount: u64) -> Result<()> {
            self.calls.push("pull_funds");
            let allowance = self.allowance()?;
            if allowance < amount {
                return Err(ProgramError::InsufficientFunds.into());
            }
            self.move_tokens(self.buyer, self.handler, amount)?;
            self.allowances.insert(self.buyer, allowance - amount);
            Ok(())
        }

        fn mint_ticket(&mut self, recipient: Pubkey, metadata_uri: &str) -> Result<u64> {
            self.calls.push("mint_ticket");
            if !self.minter_is_handler {
                return err!(TicketNftError::Unauthorized);
            }
            let token_id = self.next_token_id;
            self.next_token_id += 1;
            self.owners.insert(token_id, recipient);
            self.uris.insert(token_id, metadata_uri.to_string());
            Ok(token_id)
        }

        fn record_sale(&mut self, _event_id: u64, token_id: u64, buyer: Pubkey) -> Result<()> {
            self.calls.push("record_sale");
            if !self.recorder_is_handler {
                return err!(EventRegistryError::Unauthorized);
            }
            if self.tickets_sold >= self.max_supply {
                return err!(EventRegistryError::EventSoldOut);
            }
            self.tickets_sold += 1;
            self.buyers.insert(token_id, buyer);
            Ok(())
        }

        fn forward_funds(&mut self, organizer: Pubkey, amount: u64) -> Result<()> {
            self.calls.push("forward_funds");
            self.move_tokens(self.handler, organizer, amount)
        }
    }

    #[test]
    fn test_successful_purchase_moves_funds_and_mints() {
        let mut ledger = MemoryLedger::new(PRICE, 500);
        let buyer = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        ledger.fund(buyer, 1_000_000_000, PRICE);

        let (result, stage) = ledger.purchase(buyer, recipient);
        let receipt = result.unwrap();

        assert_eq!(stage, SettlementStage::Complete);
        assert_eq!(receipt, SettlementReceipt { token_id: 0, price: PRICE });
        assert_eq!(ledger.balance(&buyer), 1_000_000_000 - PRICE);
        assert_eq!(ledger.balance(&ledger.organizer), PRICE);
        assert_eq!(ledger.balance(&ledger.handler), 0);
        assert_eq!(ledger.allowances[&buyer], 0);
        assert_eq!(ledger.owners[&0], recipient);
        assert_eq!(ledger.uris[&0], URI);
        assert_eq!(ledger.buyers[&0], buyer);
        assert_eq!(ledger.tickets_sold, 1);
        assert_eq!(
            ledger.calls,
            vec!["pull_funds", "mint_ticket", "record_sale", "forward_funds"]
        );
    }

    #[test]
    fn test_last_ticket_cannot_be_sold_twice() {
        let mut ledger = MemoryLedger::new(PRICE, 2);
        let first = Pubkey::new_unique();
        let second = Pubkey::new_unique();
        let third = Pubkey::new_unique();
        ledger.fund(first, PRICE, PRICE);
        ledger.fund(second, PRICE, PRICE);
        ledger.fund(third, PRICE, PRICE);

        assert_eq!(ledger.purchase(first, first).0.unwrap().token_id, 0);
        assert_eq!(ledger.purchase(second, second).0.unwrap().token_id, 1);
        assert_eq!(ledger.tickets_sold, 2);

        let (result, stage) = ledger.purchase(third, third);
        assert_eq!(result.unwrap_err(), Error::from(PaymentHandlerError::EventSoldOut));
        assert_eq!(stage, SettlementStage::Idle);
        assert_eq!(ledger.tickets_sold, 2);
        assert_eq!(ledger.balance(&third), PRICE);
    }

    #[test]
    fn test_insufficient_allowance_changes_nothing() {
        let mut ledger = MemoryLedger::new(PRICE, 10);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, 1_000_000_000, PRICE - 1_000_000);

        let (result, stage) = ledger.purchase(buyer, buyer);
        let err = result.unwrap_err();

        assert_eq!(err, Error::from(PaymentHandlerError::InsufficientAllowance));
        match err {
            Error::AnchorError(anchor_err) => {
                match anchor_err.compared_values {
                    Some(ComparedValues::Values((required, actual))) => {
                        assert_eq!(required, PRICE.to_string());
                        assert_eq!(actual, (PRICE - 1_000_000).to_string());
                    }
                    other => panic!("expected required and actual amounts, got {:?}", other),
                }
            }
            Error::ProgramError(_) => panic!("expected an anchor error"),
        }
        assert_eq!(stage, SettlementStage::Idle);
        assert_eq!(ledger.balance(&buyer), 1_000_000_000);
        assert_eq!(ledger.balance(&ledger.organizer), 0);
        assert_eq!(ledger.tickets_sold, 0);
        assert!(ledger.owners.is_empty());
        assert!(ledger.calls.is_empty());
    }

    #[test]
    fn test_insufficient_balance_is_reported_by_token_ledger() {
        let mut ledger = MemoryLedger::new(PRICE, 10);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, 1_000_000, PRICE);

        let (result, stage) = ledger.purchase(buyer, buyer);

        assert_eq!(result.unwrap_err(), Error::from(ProgramError::InsufficientFunds));
        assert_eq!(stage, SettlementStage::AllowanceChecked);
        assert_eq!(ledger.balance(&buyer), 1_000_000);
        assert_eq!(ledger.allowances[&buyer], PRICE);
    }

    #[test]
    fn test_failed_mint_rolls_back_payment() {
        let mut ledger = MemoryLedger::new(PRICE, 10);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, 1_000_000_000, PRICE);
        ledger.minter_is_handler = false;

        let (result, stage) = ledger.purchase(buyer, Pubkey::new_unique());

        assert_eq!(result.unwrap_err(), Error::from(PaymentHandlerError::PaymentFailed));
        assert_eq!(stage, SettlementStage::FundsPulled);
        assert_eq!(ledger.balance(&buyer), 1_000_000_000);
        assert_eq!(ledger.balance(&ledger.organizer), 0);
        assert_eq!(ledger.balance(&ledger.handler), 0);
        assert_eq!(ledger.allowances[&buyer], PRICE);
        assert_eq!(ledger.tickets_sold, 0);
        assert!(ledger.owners.is_empty());
    }

    #[test]
    fn test_failed_sale_record_rolls_back_mint_and_payment() {
        let mut ledger = MemoryLedger::new(PRICE, 10);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, PRICE, PRICE);
        ledger.recorder_is_handler = false;
        let before = ledger.clone();

        let (result, stage) = ledger.purchase(buyer, Pubkey::new_unique());

        assert_eq!(result.unwrap_err(), Error::from(PaymentHandlerError::PaymentFailed));
        assert_eq!(stage, SettlementStage::Minted);
        assert_eq!(ledger, before);
        assert_eq!(ledger.balance(&buyer), PRICE);
        assert_eq!(ledger.next_token_id, 0);
        assert!(ledger.owners.is_empty());
    }

    #[test]
    fn test_sale_record_failure_stops_before_forwarding() {
        let mut ledger = MemoryLedger::new(PRICE, 1);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, PRICE, PRICE);
        // Quote sees a free slot, the registry does not
        let quote = ledger.quote(buyer, buyer);
        ledger.tickets_sold = 1;
        ledger.buyer = buyer;

        let mut settlement = Settlement::new(&quote);
        let err = settlement.execute(&mut ledger, URI).unwrap_err();

        assert_eq!(err, Error::from(PaymentHandlerError::PaymentFailed));
        assert_eq!(settlement.stage(), SettlementStage::Minted);
        assert_eq!(ledger.calls, vec!["pull_funds", "mint_ticket", "record_sale"]);
        assert_eq!(ledger.balance(&ledger.organizer), 0);
    }

    #[test]
    fn test_free_event_mints_without_token_movement() {
        let mut ledger = MemoryLedger::new(0, 100);
        let buyer = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let (result, stage) = ledger.purchase(buyer, recipient);

        assert_eq!(result.unwrap(), SettlementReceipt { token_id: 0, price: 0 });
        assert_eq!(stage, SettlementStage::Complete);
        assert_eq!(ledger.tickets_sold, 1);
        assert_eq!(ledger.owners[&0], recipient);
        assert!(ledger.balances.values().all(|balance| *balance == 0));
        assert_eq!(ledger.calls, vec!["mint_ticket", "record_sale"]);
    }

    #[test]
    fn test_inactive_event_blocks_until_reactivated() {
        let mut ledger = MemoryLedger::new(PRICE, 10);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, PRICE * 2, PRICE * 2);
        ledger.is_active = false;

        let (result, _) = ledger.purchase(buyer, buyer);
        assert_eq!(result.unwrap_err(), Error::from(PaymentHandlerError::EventNotActive));
        assert_eq!(ledger.tickets_sold, 0);

        ledger.is_active = true;
        let (result, _) = ledger.purchase(buyer, buyer);
        assert!(result.is_ok());
        assert_eq!(ledger.tickets_sold, 1);
    }

    #[test]
    fn test_zero_recipient_fails_before_payment() {
        let mut ledger = MemoryLedger::new(PRICE, 10);
        let buyer = Pubkey::new_unique();
        ledger.fund(buyer, PRICE, PRICE);

        let (result, stage) = ledger.purchase(buyer, Pubkey::default());

        assert_eq!(result.unwrap_err(), Error::from(PaymentHandlerError::PaymentFailed));
        assert_eq!(stage, SettlementStage::Idle);
        assert!(ledger.calls.is_empty());
    }

    #[test]
    fn test_each_purchase_attributes_its_buyer() {
        let mut ledger = MemoryLedger::new(PRICE, 5);
        let buyers: Vec<Pubkey> = (0..3).map(|_| Pubkey::new_unique()).collect();
        for buyer in &buyers {
            ledger.fund(*buyer, PRICE, PRICE);
            ledger.purchase(*buyer, Pubkey::new_unique()).0.unwrap();
        }

        assert_eq!(ledger.tickets_sold, 3);
        for (token_id, buyer) in buyers.iter().enumerate() {
            assert_eq!(ledger.buyers[&(token_id as u64)], *buyer);
        }
        assert_eq!(ledger.balance(&ledger.organizer), PRICE * 3);
        assert_eq!(ledger.balance(&ledger.handler), 0);
    }

    #[test]
    fn test_failure_reasons() {
        assert_eq!(
            PaymentFailure::ZeroRecipient.reason(),
            "Recipient cannot be zero address"
        );
        assert_eq!(PaymentFailure::MintFailed.reason(), "NFT minting failed");
    }
}

//! # State Module
//!
//! Account structures for the event registry program and the state
//! transitions they allow.

use anchor_lang::prelude::*;

use crate::constants::MAX_EVENT_NAME_LEN;
use crate::errors::EventRegistryError;

/// The registry account holding administrative state and the event id counter
#[account]
#[derive(InitSpace, Default)]
pub struct Registry {
    /// The authority that can create and update events (owner)
    pub authority: Pubkey,
    /// The only account allowed to record sales
    pub sale_recorder: Pubkey,
    /// Id the next created event will receive (equals the number of events)
    pub next_event_id: u64,
    /// Timestamp when the registry was created
    pub created_at: i64,
    /// Timestamp when the registry was last updated
    pub updated_at: i64,
    /// Bump seed for PDA derivation
    pub bump: u8,
}

/// One ticketed occasion
#[account]
#[derive(InitSpace, Default)]
pub struct EventRecord {
    /// Sequential id, immutable
    pub event_id: u64,
    /// Account credited with sale proceeds
    pub organizer: Pubkey,
    /// Display name
    #[max_len(64)]
    pub name: String,
    /// Ticket price in the payment token's smallest unit
    pub price: u64,
    /// Cap on tickets sold
    pub max_supply: u64,
    /// Tickets sold so far, never above `max_supply`
    pub tickets_sold: u64,
    /// Whether tickets can currently be purchased
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub bump: u8,
}

/// Buyer attribution for one ticket of one event
#[account]
#[derive(InitSpace, Default)]
pub struct TicketBuyer {
    pub event_id: u64,
    pub token_id: u64,
    /// The purchasing account
    pub buyer: Pubkey,
    pub recorded_at: i64,
    pub bump: u8,
}

/// Read-only view of an event returned by `get_event_details`
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EventDetails {
    pub organizer: Pubkey,
    pub price: u64,
    pub max_supply: u64,
    pub tickets_sold: u64,
    pub is_active: bool,
    pub name: String,
}

/// Creation parameters for a new event
#[derive(Clone, Debug)]
pub struct EventParams {
    pub name: String,
    pub organizer: Pubkey,
    pub price: u64,
    pub max_supply: u64,
    pub is_active: bool,
}

impl Registry {
    /// Initialize a new registry with default values
    pub fn initialize(&mut self, authority: Pubkey, bump: u8, clock: &Clock) -> Result<()> {
        self.authority = authority;
        self.sale_recorder = authority;
        self.next_event_id = 0;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    /// Reject any caller other than the registry authority
    pub fn ensure_authority(&self, caller: Pubkey) -> Result<()> {
        if caller != self.authority {
            msg!("Unauthorized account: {}", caller);
        }
        require_keys_eq!(caller, self.authority, EventRegistryError::Unauthorized);
        Ok(())
    }

    /// Reject any caller other than the sale recorder
    pub fn ensure_sale_recorder(&self, caller: Pubkey) -> Result<()> {
        if caller != self.sale_recorder {
            msg!("Unauthorized sale recorder: {}", caller);
        }
        require_keys_eq!(caller, self.sale_recorder, EventRegistryError::Unauthorized);
        Ok(())
    }

    /// Fail with `InvalidEventId` unless the id has been assigned
    pub fn ensure_event_exists(&self, event_id: u64) -> Result<()> {
        if event_id >= self.next_event_id {
            msg!("Invalid event id: {}", event_id);
            return err!(EventRegistryError::InvalidEventId);
        }
        Ok(())
    }

    /// Hand out the next event id and advance the counter
    pub fn allocate_event_id(&mut self, clock: &Clock) -> Result<u64> {
        let event_id = self.next_event_id;
        self.next_event_id = event_id
            .checked_add(1)
            .ok_or(EventRegistryError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(event_id)
    }

    /// Validate `params`, assign the next id and fill in `event`
    ///
    /// Rejected parameters leave the id counter untouched.
    pub fn register_event(
        &mut self,
        event: &mut EventRecord,
        params: EventParams,
        bump: u8,
        clock: &Clock,
    ) -> Result<u64> {
        EventRecord::validate_params(&params.name, &params.organizer, params.max_supply)?;

        let event_id = self.allocate_event_id(clock)?;
        event.initialize(
            event_id,
            params.name,
            params.organizer,
            params.price,
            params.max_supply,
            params.is_active,
            bump,
            clock,
        )?;
        Ok(event_id)
    }

    pub fn set_sale_recorder(&mut self, new_recorder: Pubkey, clock: &Clock) -> Result<()> {
        require_keys_neq!(new_recorder, Pubkey::default(), EventRegistryError::InvalidAuthority);
        self.sale_recorder = new_recorder;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    /// Transfer authority to a new account
    pub fn transfer_authority(&mut self, new_authority: Pubkey, clock: &Clock) -> Result<()> {
        require_keys_neq!(new_authority, Pubkey::default(), EventRegistryError::InvalidAuthority);
        self.authority = new_authority;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }
}

impl EventRecord {
    /// Check creation parameters before an id is allocated
    pub fn validate_params(name: &str, organizer: &Pubkey, max_supply: u64) -> Result<()> {
        require_keys_neq!(*organizer, Pubkey::default(), EventRegistryError::InvalidOrganizer);
        require!(max_supply > 0, EventRegistryError::InvalidSupply);
        require!(name.len() <= MAX_EVENT_NAME_LEN, EventRegistryError::NameTooLong);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        event_id: u64,
        name: String,
        organizer: Pubkey,
        price: u64,
        max_supply: u64,
        is_active: bool,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        Self::validate_params(&name, &organizer, max_supply)?;

        self.event_id = event_id;
        self.organizer = organizer;
        self.name = name;
        self.price = price;
        self.max_supply = max_supply;
        self.tickets_sold = 0;
        self.is_active = is_active;
        self.created_at = clock.unix_timestamp;
        self.updated_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    pub fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.max_supply
    }

    /// Count one more sold ticket
    pub fn record_sale(&mut self, clock: &Clock) -> Result<u64> {
        require!(!self.is_sold_out(), EventRegistryError::EventSoldOut);

        self.tickets_sold = self
            .tickets_sold
            .checked_add(1)
            .ok_or(EventRegistryError::ArithmeticError)?;
        self.updated_at = clock.unix_timestamp;
        Ok(self.tickets_sold)
    }

    /// Flip the sale flag; setting the current value again is rejected
    pub fn set_active_status(&mut self, is_active: bool, clock: &Clock) -> Result<()> {
        require!(self.is_active != is_active, EventRegistryError::StatusAlreadySet);

        self.is_active = is_active;
        self.updated_at = clock.unix_timestamp;
        Ok(())
    }

    pub fn details(&self) -> EventDetails {
        EventDetails {
            organizer: self.organizer,
            price: self.price,
            max_supply: self.max_supply,
            tickets_sold: self.tickets_sold,
            is_active: self.is_active,
            name: self.name.clone(),
        }
    }

    /// Deserialize an event account owned by this program
    ///
    /// Used by views and by programs that read the catalog without a CPI.
    /// An account that was never created reports `InvalidEventId` rather
    /// than a generic account error.
    pub fn read(info: &AccountInfo, event_id: u64) -> Result<EventRecord> {
        if info.data_is_empty() || info.owner != &crate::ID {
            msg!("Invalid event id: {}", event_id);
            return err!(EventRegistryError::InvalidEventId);
        }

        let data = info.try_borrow_data()?;
        let record = EventRecord::try_deserialize(&mut &data[..])?;
        require_eq!(record.event_id, event_id, EventRegistryError::InvalidEventId);
        Ok(record)
    }

    /// Store a record loaded with `read` back into its account
    pub fn write(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        let mut writer: &mut [u8] = &mut data[..];
        self.try_serialize(&mut writer)
    }
}

impl TicketBuyer {
    pub fn initialize(
        &mut self,
        event_id: u64,
        token_id: u64,
        buyer: Pubkey,
        bump: u8,
        clock: &Clock,
    ) -> Result<()> {
        self.event_id = event_id;
        self.token_id = token_id;
        self.buyer = buyer;
        self.recorded_at = clock.unix_timestamp;
        self.bump = bump;
        Ok(())
    }

    /// Buyer stored in a ticket buyer account, or the default key when the
    /// account has not been created (ticket unsold)
    pub fn read_buyer(info: &AccountInfo) -> Result<Pubkey> {
        if info.data_is_empty() || info.owner != &crate::ID {
            return Ok(Pubkey::default());
        }

        let data = info.try_borrow_data()?;
        let record = TicketBuyer::try_deserialize(&mut &data[..])?;
        Ok(record.buyer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn clock_at(unix_timestamp: i64) -> Clock {
        Clock {
            unix_timestamp,
            ..Clock::default()
        }
    }

    fn registry(authority: Pubkey) -> Registry {
        let mut registry = Registry::default();
        registry.initialize(authority, 254, &clock_at(100)).unwrap();
        registry
    }

    fn event(organizer: Pubkey, price: u64, max_supply: u64) -> EventRecord {
        let mut record = EventRecord::default();
        record
            .initialize(0, "Test Concert".to_string(), organizer, price, max_supply, true, 255, &clock_at(100))
            .unwrap();
        record
    }

    #[test]
    fn test_initialize_sets_authority_and_recorder() {
        let authority = Pubkey::new_unique();
        let registry = registry(authority);

        assert_eq!(registry.authority, authority);
        assert_eq!(registry.sale_recorder, authority);
        assert_eq!(registry.next_event_id, 0);
        assert_eq!(registry.created_at, 100);
    }

    #[test]
    fn test_event_ids_are_sequential() {
        let mut registry = registry(Pubkey::new_unique());
        let clock = clock_at(200);

        assert_eq!(registry.allocate_event_id(&clock).unwrap(), 0);
        assert_eq!(registry.allocate_event_id(&clock).unwrap(), 1);
        assert_eq!(registry.next_event_id, 2);
        assert_eq!(registry.updated_at, 200);
    }

    #[test]
    fn test_non_authority_is_rejected() {
        let authority = Pubkey::new_unique();
        let registry = registry(authority);

        assert!(registry.ensure_authority(authority).is_ok());
        let err = registry.ensure_authority(Pubkey::new_unique()).unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::Unauthorized));
    }

    fn params(name: &str, organizer: Pubkey, max_supply: u64) -> EventParams {
        EventParams {
            name: name.to_string(),
            organizer,
            price: 10_000_000,
            max_supply,
            is_active: true,
        }
    }

    #[test]
    fn test_invalid_params_leave_counter_unchanged() {
        let mut registry = registry(Pubkey::new_unique());
        let mut record = EventRecord::default();
        let clock = clock_at(150);

        let err = registry
            .register_event(&mut record, params("Show", Pubkey::default(), 10), 255, &clock)
            .unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidOrganizer));

        let err = registry
            .register_event(&mut record, params("Show", Pubkey::new_unique(), 0), 255, &clock)
            .unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidSupply));

        let long_name = "x".repeat(MAX_EVENT_NAME_LEN + 1);
        let err = registry
            .register_event(&mut record, params(&long_name, Pubkey::new_unique(), 1), 255, &clock)
            .unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::NameTooLong));

        assert_eq!(registry.next_event_id, 0);
        assert_eq!(registry.updated_at, 100);

        let organizer = Pubkey::new_unique();
        let event_id = registry
            .register_event(&mut record, params("Show", organizer, 10), 255, &clock)
            .unwrap();
        assert_eq!(event_id, 0);
        assert_eq!(registry.next_event_id, 1);
        assert_eq!(record.event_id, 0);
        assert_eq!(record.organizer, organizer);
    }

    #[test]
    fn test_ensure_event_exists() {
        let mut registry = registry(Pubkey::new_unique());
        let err = registry.ensure_event_exists(0).unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidEventId));

        registry.allocate_event_id(&clock_at(1)).unwrap();
        assert!(registry.ensure_event_exists(0).is_ok());
        assert!(registry.ensure_event_exists(99).is_err());
    }

    #[test]
    fn test_new_event_details() {
        let organizer = Pubkey::new_unique();
        let record = event(organizer, 10_000_000, 100);

        assert_eq!(
            record.details(),
            EventDetails {
                organizer,
                price: 10_000_000,
                max_supply: 100,
                tickets_sold: 0,
                is_active: true,
                name: "Test Concert".to_string(),
            }
        );
    }

    #[test]
    fn test_sales_stop_at_max_supply() {
        let mut record = event(Pubkey::new_unique(), 50, 2);
        let clock = clock_at(300);

        assert_eq!(record.record_sale(&clock).unwrap(), 1);
        assert_eq!(record.record_sale(&clock).unwrap(), 2);
        assert!(record.is_sold_out());

        let err = record.record_sale(&clock).unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::EventSoldOut));
        assert_eq!(record.tickets_sold, 2);
    }

    #[test]
    fn test_status_toggle_rejects_current_value() {
        let mut record = event(Pubkey::new_unique(), 10, 10);
        let clock = clock_at(400);

        let err = record.set_active_status(true, &clock).unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::StatusAlreadySet));

        record.set_active_status(false, &clock).unwrap();
        assert!(!record.is_active);

        let err = record.set_active_status(false, &clock).unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::StatusAlreadySet));

        record.set_active_status(true, &clock).unwrap();
        assert!(record.is_active);
    }

    #[test]
    fn test_sale_recorder_and_authority_transfer() {
        let authority = Pubkey::new_unique();
        let handler = Pubkey::new_unique();
        let mut registry = registry(authority);
        let clock = clock_at(500);

        registry.set_sale_recorder(handler, &clock).unwrap();
        assert!(registry.ensure_sale_recorder(handler).is_ok());
        assert!(registry.ensure_sale_recorder(authority).is_err());

        let err = registry.transfer_authority(Pubkey::default(), &clock).unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidAuthority));

        let new_authority = Pubkey::new_unique();
        registry.transfer_authority(new_authority, &clock).unwrap();
        assert!(registry.ensure_authority(authority).is_err());
        assert!(registry.ensure_authority(new_authority).is_ok());
    }

    #[test]
    fn test_ticket_buyer_initialize() {
        let buyer = Pubkey::new_unique();
        let mut record = TicketBuyer::default();
        record.initialize(3, 7, buyer, 250, &clock_at(600)).unwrap();

        assert_eq!(record.event_id, 3);
        assert_eq!(record.token_id, 7);
        assert_eq!(record.buyer, buyer);
        assert_eq!(record.recorded_at, 600);
    }

    fn serialized<T: AccountSerialize>(account: &T, space: usize) -> Vec<u8> {
        let mut data = vec![0u8; 8 + space];
        account.try_serialize(&mut &mut data[..]).unwrap();
        data
    }

    fn with_account<R>(owner: &Pubkey, data: &mut [u8], f: impl FnOnce(&AccountInfo) -> R) -> R {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, true, &mut lamports, data, owner, false, 0);
        f(&info)
    }

    #[test]
    fn test_read_missing_event_reports_invalid_id() {
        let system_program = Pubkey::default();
        let err = with_account(&system_program, &mut [], |info| {
            EventRecord::read(info, 99).map(|record| record.event_id)
        })
        .unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidEventId));

        // Well-formed data under a foreign owner is not an event either
        let mut data = serialized(&event(Pubkey::new_unique(), 1, 1), EventRecord::INIT_SPACE);
        let err = with_account(&Pubkey::new_unique(), &mut data, |info| {
            EventRecord::read(info, 0).map(|record| record.event_id)
        })
        .unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidEventId));
    }

    #[test]
    fn test_read_rejects_record_of_another_event() {
        let mut data = serialized(&event(Pubkey::new_unique(), 1, 1), EventRecord::INIT_SPACE);
        let err = with_account(&crate::ID, &mut data, |info| {
            EventRecord::read(info, 1).map(|record| record.event_id)
        })
        .unwrap_err();
        assert_eq!(err, Error::from(EventRegistryError::InvalidEventId));
    }

    #[test]
    fn test_sale_persists_through_write() {
        let organizer = Pubkey::new_unique();
        let mut data = serialized(&event(organizer, 25, 3), EventRecord::INIT_SPACE);

        with_account(&crate::ID, &mut data, |info| {
            let mut record = EventRecord::read(info, 0).unwrap();
            record.record_sale(&clock_at(700)).unwrap();
            record.write(info).unwrap();
        });

        let details = with_account(&crate::ID, &mut data, |info| {
            EventRecord::read(info, 0).map(|record| record.details())
        })
        .unwrap();
        assert_eq!(details.tickets_sold, 1);
        assert_eq!(details.organizer, organizer);
        assert_eq!(details.name, "Test Concert");
    }

    #[test]
    fn test_read_buyer_defaults_for_unsold_ticket() {
        let system_program = Pubkey::default();
        let buyer = with_account(&system_program, &mut [], |info| TicketBuyer::read_buyer(info));
        assert_eq!(buyer.unwrap(), Pubkey::default());

        let purchaser = Pubkey::new_unique();
        let mut record = TicketBuyer::default();
        record.initialize(0, 4, purchaser, 250, &clock_at(800)).unwrap();
        let mut data = serialized(&record, TicketBuyer::INIT_SPACE);
        let buyer = with_account(&crate::ID, &mut data, |info| TicketBuyer::read_buyer(info));
        assert_eq!(buyer.unwrap(), purchaser);
    }
}

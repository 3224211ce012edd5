use crate::errors::Error;
use soroban_sdk::{contracttype, Address, Env, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TransactionType {
    Deposit = 0,
    Withdrawal = 1,
}

/// Lifecycle stage of an escrow transaction. Values only ever increase.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TransactionStatus {
    Created = 0,
    Paired = 1,
    CommentsSaved = 2,
    ClientConfirmed = 3,
    Completed = 4,
}

/// Side of a transaction that receives the settled remainder.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Party {
    Client = 0,
    Agent = 1,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowConfig {
    pub treasury: Address,
    pub fee_numerator: u32,
    pub fee_denominator: u32,
    pub deposit_payee: Party,
    pub withdrawal_payee: Party,
}

impl EscrowConfig {
    pub const DEFAULT_FEE_NUMERATOR: u32 = 1;
    pub const DEFAULT_FEE_DENOMINATOR: u32 = 5;

    pub fn with_treasury(treasury: Address) -> Self {
        Self {
            treasury,
            fee_numerator: Self::DEFAULT_FEE_NUMERATOR,
            fee_denominator: Self::DEFAULT_FEE_DENOMINATOR,
            deposit_payee: Party::Agent,
            withdrawal_payee: Party::Client,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.fee_denominator == 0 || self.fee_numerator > self.fee_denominator {
            return Err(Error::InvalidFeeRate);
        }
        Ok(())
    }

    pub fn payee_for(&self, tx_type: TransactionType) -> Party {
        match tx_type {
            TransactionType::Deposit => self.deposit_payee,
            TransactionType::Withdrawal => self.withdrawal_payee,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EscrowTransaction {
    pub id: u64,
    pub tx_type: TransactionType,
    pub status: TransactionStatus,
    pub client: Address,
    pub agent: Option<Address>,
    pub amount: i128,
    pub client_approval: bool,
    pub agent_approval: bool,
    pub client_payment_details: String,
    pub agent_payment_details: String,
    pub exchange_token: Address,
    pub exchange_token_label: String,
}

impl EscrowTransaction {
    pub fn open(
        env: &Env,
        id: u64,
        tx_type: TransactionType,
        client: Address,
        amount: i128,
        exchange_token: Address,
        exchange_token_label: String,
    ) -> Self {
        Self {
            id,
            tx_type,
            status: TransactionStatus::Created,
            client,
            agent: None,
            amount,
            client_approval: false,
            agent_approval: false,
            client_payment_details: String::from_str(env, ""),
            agent_payment_details: String::from_str(env, ""),
            exchange_token,
            exchange_token_label,
        }
    }

    /// Agent address once paired. Callers reach this only after a guard
    /// that requires the transaction to be at least `Paired`.
    pub fn paired_agent(&self) -> Result<Address, Error> {
        self.agent.clone().ok_or(Error::InvalidStatus)
    }

    pub fn payee(&self, party: Party) -> Result<Address, Error> {
        match party {
            Party::Client => Ok(self.client.clone()),
            Party::Agent => self.paired_agent(),
        }
    }

    pub fn claim(
        &mut self,
        expected: TransactionType,
        agent: Address,
        contact_info: String,
    ) -> Result<(), Error> {
        if self.tx_type != expected {
            return Err(Error::WrongTransactionType);
        }
        if self.agent.is_some() {
            return Err(Error::AlreadyClaimed);
        }
        if agent == self.client {
            return Err(Error::Unauthorized);
        }
        self.agent = Some(agent);
        self.agent_payment_details = contact_info;
        self.advance(TransactionStatus::Paired);
        Ok(())
    }

    pub fn write_client_details(&mut self, caller: &Address, details: String) -> Result<(), Error> {
        if *caller != self.client {
            return Err(Error::Unauthorized);
        }
        self.require_open_and_paired()?;
        if details.is_empty() {
            return Err(Error::InvalidDetails);
        }
        if !self.client_payment_details.is_empty() {
            return Err(Error::AlreadySet);
        }
        self.client_payment_details = details;
        self.advance(TransactionStatus::CommentsSaved);
        Ok(())
    }

    pub fn write_agent_details(&mut self, caller: &Address, details: String) -> Result<(), Error> {
        if !self.is_agent(caller) {
            return Err(Error::Unauthorized);
        }
        self.require_open_and_paired()?;
        if details.is_empty() {
            return Err(Error::InvalidDetails);
        }
        if !self.agent_payment_details.is_empty() {
            return Err(Error::AlreadySet);
        }
        self.agent_payment_details = details;
        self.advance(TransactionStatus::CommentsSaved);
        Ok(())
    }

    pub fn confirm_by_client(&mut self, caller: &Address) -> Result<(), Error> {
        if *caller != self.client {
            return Err(Error::Unauthorized);
        }
        if self.client_approval {
            return Err(Error::AlreadyConfirmed);
        }
        if self.status < TransactionStatus::Paired {
            return Err(Error::InvalidStatus);
        }
        self.client_approval = true;
        self.advance(TransactionStatus::ClientConfirmed);
        Ok(())
    }

    pub fn confirm_by_agent(&mut self, caller: &Address) -> Result<(), Error> {
        if !self.is_agent(caller) {
            return Err(Error::Unauthorized);
        }
        if self.agent_approval {
            return Err(Error::AlreadyConfirmed);
        }
        if !self.client_approval {
            return Err(Error::OutOfOrderConfirmation);
        }
        self.agent_approval = true;
        self.advance(TransactionStatus::Completed);
        Ok(())
    }

    fn is_agent(&self, caller: &Address) -> bool {
        self.agent.as_ref() == Some(caller)
    }

    fn require_open_and_paired(&self) -> Result<(), Error> {
        if self.status < TransactionStatus::Paired || self.status == TransactionStatus::Completed {
            return Err(Error::InvalidStatus);
        }
        Ok(())
    }

    fn advance(&mut self, to: TransactionStatus) {
        if to > self.status {
            self.status = to;
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Transaction(u64),
    TransactionCounter,
    Config,
    Admin,
}

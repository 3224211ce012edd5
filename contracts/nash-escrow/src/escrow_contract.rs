use crate::entities::*;
use crate::errors::*;
use crate::events::*;
use crate::settlement::FeeSplit;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env, String, Vec};

pub const MAX_PAGE_SIZE: u32 = 50;

#[contract]
pub struct NashEscrowContract;

#[contractimpl]
impl NashEscrowContract {
    pub fn initialize(env: &Env, admin: Address, treasury: Address) -> Result<bool, Error> {
        admin.require_auth();
        if env.storage().persistent().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().persistent().set(&DataKey::Admin, &admin);
        env.storage()
            .persistent()
            .set(&DataKey::Config, &EscrowConfig::with_treasury(treasury));
        env.storage()
            .persistent()
            .set(&DataKey::TransactionCounter, &0u64);
        Ok(true)
    }

    pub fn update_config(env: &Env, config: EscrowConfig) -> Result<(), Error> {
        let admin = Self::get_admin(env)?;
        admin.require_auth();
        config.validate()?;
        env.storage().persistent().set(&DataKey::Config, &config);

        log!(
            env,
            "Escrow fee ratio updated",
            config.fee_numerator,
            config.fee_denominator
        );
        Ok(())
    }

    pub fn init_deposit_transaction(
        env: Env,
        client: Address,
        amount: i128,
        token: Address,
        token_label: String,
    ) -> Result<u64, Error> {
        Self::open_transaction(
            &env,
            TransactionType::Deposit,
            client,
            amount,
            token,
            token_label,
        )
    }

    pub fn init_withdrawal_transaction(
        env: Env,
        client: Address,
        amount: i128,
        token: Address,
        token_label: String,
    ) -> Result<u64, Error> {
        Self::open_transaction(
            &env,
            TransactionType::Withdrawal,
            client,
            amount,
            token,
            token_label,
        )
    }

    pub fn agent_accept_deposit(
        env: Env,
        transaction_id: u64,
        agent: Address,
        contact_info: String,
    ) -> Result<(), Error> {
        Self::pair_agent(
            &env,
            transaction_id,
            TransactionType::Deposit,
            agent,
            contact_info,
        )
    }

    pub fn agent_accept_withdrawal(
        env: Env,
        transaction_id: u64,
        agent: Address,
        contact_info: String,
    ) -> Result<(), Error> {
        Self::pair_agent(
            &env,
            transaction_id,
            TransactionType::Withdrawal,
            agent,
            contact_info,
        )
    }

    pub fn client_write_payment_information(
        env: Env,
        transaction_id: u64,
        client: Address,
        details: String,
    ) -> Result<(), Error> {
        client.require_auth();
        Self::get_config(&env)?;
        let mut transaction = Self::get_transaction_by_index(&env, transaction_id)?;
        transaction.write_client_details(&client, details)?;
        Self::store(&env, &transaction);

        EscrowEvent::SavedClientComment(SavedClientComment {
            id: transaction_id,
            client,
            agent: transaction.paired_agent()?,
        })
        .publish(&env);
        Ok(())
    }

    pub fn agent_write_payment_information(
        env: Env,
        transaction_id: u64,
        agent: Address,
        details: String,
    ) -> Result<(), Error> {
        agent.require_auth();
        Self::get_config(&env)?;
        let mut transaction = Self::get_transaction_by_index(&env, transaction_id)?;
        transaction.write_agent_details(&agent, details)?;
        Self::store(&env, &transaction);

        EscrowEvent::SavedAgentComment(SavedAgentComment {
            id: transaction_id,
            client: transaction.client,
            agent,
        })
        .publish(&env);
        Ok(())
    }

    pub fn client_confirm_payment(
        env: Env,
        transaction_id: u64,
        client: Address,
    ) -> Result<(), Error> {
        client.require_auth();
        Self::get_config(&env)?;
        let mut transaction = Self::get_transaction_by_index(&env, transaction_id)?;
        transaction.confirm_by_client(&client)?;
        Self::store(&env, &transaction);

        EscrowEvent::ConfirmationCompleted(ConfirmationCompleted {
            id: transaction_id,
            client,
            agent: transaction.paired_agent()?,
        })
        .publish(&env);

        log!(&env, "Transaction confirmed by client", transaction_id);
        Ok(())
    }

    /// Completes the transaction and pays out custody. Status and approval
    /// are written before any transfer; a rejected transfer fails the whole
    /// invocation so the host discards both.
    pub fn agent_confirm_payment(
        env: Env,
        transaction_id: u64,
        agent: Address,
    ) -> Result<(), Error> {
        agent.require_auth();
        let config = Self::get_config(&env)?;
        let mut transaction = Self::get_transaction_by_index(&env, transaction_id)?;
        transaction.confirm_by_agent(&agent)?;

        let split = FeeSplit::compute(transaction.amount, &config)?;
        let payee = transaction.payee(config.payee_for(transaction.tx_type))?;
        Self::store(&env, &transaction);

        let token_client = token::Client::new(&env, &transaction.exchange_token);
        let custody = env.current_contract_address();
        Self::release(&token_client, &custody, &config.treasury, split.fee)?;
        Self::release(&token_client, &custody, &payee, split.payout)?;

        EscrowEvent::TransactionCompletion(TransactionCompletion {
            id: transaction_id,
            client: transaction.client,
            agent,
        })
        .publish(&env);

        log!(
            &env,
            "Transaction settled (id, fee, payout)",
            transaction_id,
            split.fee,
            split.payout
        );
        Ok(())
    }

    pub fn get_transaction_by_index(
        env: &Env,
        transaction_id: u64,
    ) -> Result<EscrowTransaction, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Transaction(transaction_id))
            .ok_or(Error::NotFound)
    }

    pub fn get_next_transaction_index(env: &Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::TransactionCounter)
            .unwrap_or(0u64)
    }

    pub fn get_transactions(env: &Env, start: u64, limit: u32) -> Vec<EscrowTransaction> {
        Self::scan(env, start, limit, None)
    }

    pub fn get_transactions_by_status(
        env: &Env,
        status: TransactionStatus,
        start: u64,
        limit: u32,
    ) -> Vec<EscrowTransaction> {
        Self::scan(env, start, limit, Some(status))
    }

    pub fn get_config(env: &Env) -> Result<EscrowConfig, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    fn open_transaction(
        env: &Env,
        tx_type: TransactionType,
        client: Address,
        amount: i128,
        token: Address,
        token_label: String,
    ) -> Result<u64, Error> {
        client.require_auth();
        Self::get_config(env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let token_client = token::Client::new(env, &token);
        let custody = env.current_contract_address();
        if token_client.balance(&client) < amount {
            return Err(Error::InsufficientBalance);
        }
        if token_client.allowance(&client, &custody) < amount {
            return Err(Error::AuthorizationError);
        }

        let transaction_id = Self::get_next_transaction_index(env);
        let next_id = transaction_id
            .checked_add(1)
            .ok_or(Error::IndexExhausted)?;
        let transaction = EscrowTransaction::open(
            env,
            transaction_id,
            tx_type,
            client.clone(),
            amount,
            token,
            token_label,
        );
        Self::store(env, &transaction);
        env.storage()
            .persistent()
            .set(&DataKey::TransactionCounter, &next_id);

        token_client.transfer_from(&custody, &client, &custody, &amount);

        EscrowEvent::TransactionInit(TransactionInit {
            id: transaction_id,
            client,
        })
        .publish(env);

        log!(
            env,
            "Transaction opened (id, amount)",
            transaction_id,
            amount
        );
        Ok(transaction_id)
    }

    fn pair_agent(
        env: &Env,
        transaction_id: u64,
        expected: TransactionType,
        agent: Address,
        contact_info: String,
    ) -> Result<(), Error> {
        agent.require_auth();
        Self::get_config(env)?;
        let mut transaction = Self::get_transaction_by_index(env, transaction_id)?;
        transaction.claim(expected, agent.clone(), contact_info)?;
        Self::store(env, &transaction);

        EscrowEvent::AgentPairing(AgentPairing {
            id: transaction_id,
            client: transaction.client,
            agent,
        })
        .publish(env);

        log!(env, "Transaction paired with agent", transaction_id);
        Ok(())
    }

    fn release(
        token_client: &token::Client,
        custody: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        if amount == 0 {
            return Ok(());
        }
        match token_client.try_transfer(custody, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(Error::SettlementFailure),
        }
    }

    fn scan(
        env: &Env,
        start: u64,
        limit: u32,
        status: Option<TransactionStatus>,
    ) -> Vec<EscrowTransaction> {
        let mut page = Vec::new(env);
        let end = start
            .saturating_add(limit.min(MAX_PAGE_SIZE) as u64)
            .min(Self::get_next_transaction_index(env));
        for transaction_id in start..end {
            if let Ok(transaction) = Self::get_transaction_by_index(env, transaction_id) {
                if status.map_or(true, |s| s == transaction.status) {
                    page.push_back(transaction);
                }
            }
        }
        page
    }

    fn store(env: &Env, transaction: &EscrowTransaction) {
        env.storage()
            .persistent()
            .set(&DataKey::Transaction(transaction.id), transaction);
    }
}

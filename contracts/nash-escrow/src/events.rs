use soroban_sdk::{contractevent, Address, Env};

#[contractevent(topics = ["tx_init"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionInit {
    #[topic]
    pub id: u64,
    pub client: Address,
}

#[contractevent(topics = ["paired"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AgentPairing {
    #[topic]
    pub id: u64,
    pub client: Address,
    pub agent: Address,
}

#[contractevent(topics = ["cl_cmnt"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavedClientComment {
    #[topic]
    pub id: u64,
    pub client: Address,
    pub agent: Address,
}

#[contractevent(topics = ["ag_cmnt"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavedAgentComment {
    #[topic]
    pub id: u64,
    pub client: Address,
    pub agent: Address,
}

#[contractevent(topics = ["confirmed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmationCompleted {
    #[topic]
    pub id: u64,
    pub client: Address,
    pub agent: Address,
}

#[contractevent(topics = ["completed"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionCompletion {
    #[topic]
    pub id: u64,
    pub client: Address,
    pub agent: Address,
}

/// Every event the escrow publishes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EscrowEvent {
    TransactionInit(TransactionInit),
    AgentPairing(AgentPairing),
    SavedClientComment(SavedClientComment),
    SavedAgentComment(SavedAgentComment),
    ConfirmationCompleted(ConfirmationCompleted),
    TransactionCompletion(TransactionCompletion),
}

impl EscrowEvent {
    pub fn publish(&self, env: &Env) {
        match self {
            EscrowEvent::TransactionInit(e) => e.publish(env),
            EscrowEvent::AgentPairing(e) => e.publish(env),
            EscrowEvent::SavedClientComment(e) => e.publish(env),
            EscrowEvent::SavedAgentComment(e) => e.publish(env),
            EscrowEvent::ConfirmationCompleted(e) => e.publish(env),
            EscrowEvent::TransactionCompletion(e) => e.publish(env),
        }
    }
}

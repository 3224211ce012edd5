#![no_std]

mod entities;
mod errors;
mod escrow_contract;
mod events;
mod settlement;


pub use entities::{
    DataKey, EscrowConfig, EscrowTransaction, Party, TransactionStatus, TransactionType,
};
pub use errors::Error;
pub use escrow_contract::{NashEscrowContract, NashEscrowContractClient, MAX_PAGE_SIZE};
pub use events::{
    AgentPairing, ConfirmationCompleted, EscrowEvent, SavedAgentComment, SavedClientComment,
    TransactionCompletion, TransactionInit,
};
pub use settlement::FeeSplit;

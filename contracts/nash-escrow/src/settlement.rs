use crate::entities::EscrowConfig;
use crate::errors::Error;

/// How an escrowed amount is divided on completion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeeSplit {
    pub fee: i128,
    pub payout: i128,
}

impl FeeSplit {
    /// Fee is `amount * numerator / denominator`, truncated. The payout takes
    /// whatever the fee leaves, so `fee + payout == amount`. Callers pass a
    /// positive amount and a validated config.
    pub fn compute(amount: i128, config: &EscrowConfig) -> Result<Self, Error> {
        let fee = amount
            .checked_mul(config.fee_numerator as i128)
            .ok_or(Error::SettlementFailure)?
            / config.fee_denominator as i128;
        let payout = amount.checked_sub(fee).ok_or(Error::SettlementFailure)?;
        Ok(Self { fee, payout })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Party;
    use soroban_sdk::{testutils::Address as _, Address, Env};

    fn config(env: &Env, fee_numerator: u32, fee_denominator: u32) -> EscrowConfig {
        EscrowConfig {
            treasury: Address::generate(env),
            fee_numerator,
            fee_denominator,
            deposit_payee: Party::Agent,
            withdrawal_payee: Party::Client,
        }
    }

    #[test]
    fn default_ratio_takes_a_fifth() {
        let env = Env::default();
        let cfg = EscrowConfig::with_treasury(Address::generate(&env));
        assert_eq!(
            FeeSplit::compute(5, &cfg),
            Ok(FeeSplit { fee: 1, payout: 4 })
        );
    }

    #[test]
    fn fee_rounds_down_and_remainder_goes_to_payout() {
        let env = Env::default();
        let cfg = config(&env, 1, 5);
        assert_eq!(
            FeeSplit::compute(4, &cfg),
            Ok(FeeSplit { fee: 0, payout: 4 })
        );
        assert_eq!(
            FeeSplit::compute(9, &cfg),
            Ok(FeeSplit { fee: 1, payout: 8 })
        );
    }

    #[test]
    fn zero_and_full_fee_ratios() {
        let env = Env::default();
        assert_eq!(
            FeeSplit::compute(10, &config(&env, 0, 1)),
            Ok(FeeSplit { fee: 0, payout: 10 })
        );
        assert_eq!(
            FeeSplit::compute(10, &config(&env, 3, 3)),
            Ok(FeeSplit { fee: 10, payout: 0 })
        );
    }

    #[test]
    fn overflow_is_a_settlement_failure() {
        let env = Env::default();
        assert_eq!(
            FeeSplit::compute(i128::MAX, &config(&env, 2, 3)),
            Err(Error::SettlementFailure)
        );
    }
}

#![cfg(test)]

// ---------------------------------------------------------------------------
// Loan initiator test suite
//
// 1. initiate   — validation and views; failures here happen before the
//                 reserve is ever called.
// 2. end_to_end — initiator + repayment handler + mock reserve on Stellar
//                 asset contracts, plus reserves that misbehave.
// 3. auth       — recorded signatures, and forged calls with nothing mocked.
// ---------------------------------------------------------------------------


use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

use flashswap_mock_reserve::{MockReserve, MockReserveClient};
use flashswap_repayment_handler::{RepaymentHandler, RepaymentHandlerClient};

use crate::{LoanInitiator, LoanInitiatorClient};

pub(crate) const RESERVE: i128 = 10_000_000;
pub(crate) const APPROVAL_EXPIRY: u32 = 1_000;

// A reserve that either never calls back, or calls back claiming to have
// paid out without moving any tokens.
mod rogue_reserve_mod {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    use flashswap_interface::{BorrowCalleeClient, LoanContext};

    #[contracttype]
    enum RogueKey {
        TokenA,
        TokenB,
        CallsBack,
    }

    #[contract]
    pub struct RogueReserve;

    #[contractimpl]
    impl RogueReserve {
        pub fn set_up(env: Env, token_a: Address, token_b: Address, calls_back: bool) {
            env.storage().instance().set(&RogueKey::TokenA, &token_a);
            env.storage().instance().set(&RogueKey::TokenB, &token_b);
            env.storage().instance().set(&RogueKey::CallsBack, &calls_back);
        }

        pub fn token_a(env: Env) -> Address {
            env.storage().instance().get(&RogueKey::TokenA).unwrap()
        }

        pub fn token_b(env: Env) -> Address {
            env.storage().instance().get(&RogueKey::TokenB).unwrap()
        }

        pub fn borrow(
            env: Env,
            initiator: Address,
            amount_a_out: i128,
            amount_b_out: i128,
            to: Address,
            context: LoanContext,
        ) {
            let calls_back: bool = env.storage().instance().get(&RogueKey::CallsBack).unwrap();
            if calls_back {
                BorrowCalleeClient::new(&env, &to).on_borrow(
                    &env.current_contract_address(),
                    &initiator,
                    &amount_a_out,
                    &amount_b_out,
                    &context,
                );
            }
        }
    }
}
pub(crate) use rogue_reserve_mod::{RogueReserve, RogueReserveClient};

pub(crate) struct Setup<'a> {
    pub env: Env,
    pub reserve: Address,
    pub reserve_client: MockReserveClient<'a>,
    pub initiator: Address,
    pub client: LoanInitiatorClient<'a>,
    pub handler: Address,
    pub token_a: Address,
    pub token_a_admin: StellarAssetClient<'a>,
    pub token_a_client: TokenClient<'a>,
    pub token_b: Address,
    pub token_b_admin: StellarAssetClient<'a>,
    pub token_b_client: TokenClient<'a>,
    pub fee_payer: Address,
}

impl<'a> Setup<'a> {
    /// Full stack against the mock reserve, seeded with `RESERVE` of each token.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let token_a = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let token_b = env.register_stellar_asset_contract_v2(admin).address();
        let token_a_admin = StellarAssetClient::new(&env, &token_a);
        let token_b_admin = StellarAssetClient::new(&env, &token_b);

        let reserve = env.register_contract(None, MockReserve);
        let reserve_client = MockReserveClient::new(&env, &reserve);
        reserve_client.initialize(&token_a, &token_b);
        token_a_admin.mint(&reserve, &RESERVE);
        token_b_admin.mint(&reserve, &RESERVE);
        reserve_client.sync();

        let (initiator, handler) = bind_core(&env, &reserve);

        Setup {
            reserve,
            reserve_client,
            client: LoanInitiatorClient::new(&env, &initiator),
            initiator,
            handler,
            token_a_client: TokenClient::new(&env, &token_a),
            token_b_client: TokenClient::new(&env, &token_b),
            token_a,
            token_a_admin,
            token_b,
            token_b_admin,
            fee_payer: Address::generate(&env),
            env,
        }
    }

    /// Mints `balance` of `token` to the fee payer and approves the handler
    /// for `allowance`.
    pub fn fund_fee_payer(&self, token: &Address, balance: i128, allowance: i128) {
        if balance > 0 {
            StellarAssetClient::new(&self.env, token).mint(&self.fee_payer, &balance);
        }
        TokenClient::new(&self.env, token).approve(
            &self.fee_payer,
            &self.handler,
            &allowance,
            &APPROVAL_EXPIRY,
        );
    }
}

/// Registers an initiator and a handler and binds them to `reserve` and to
/// each other. Returns `(initiator, handler)`.
pub(crate) fn bind_core(env: &Env, reserve: &Address) -> (Address, Address) {
    let initiator = env.register_contract(None, LoanInitiator);
    let handler = env.register_contract(None, RepaymentHandler);

    LoanInitiatorClient::new(env, &initiator).initialize(reserve, &handler);
    RepaymentHandlerClient::new(env, &handler).initialize(reserve, &initiator);

    (initiator, handler)
}

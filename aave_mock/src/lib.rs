#![no_std]

use common_constants::{BPS, RAY_PRECISION};
use common_errors::*;
use common_structs::{AaveReserve, AaveReserveSnapshot, AccountLiquidity, MarketRates, MarketState};

pub mod storage;

multiversx_sc::imports!();

/// Aave style pool. Every supplied reserve is collateral, weighted by its LTV, and
/// account values are reported in an 8 decimals base currency.
#[multiversx_sc::contract]
pub trait AaveMock:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    #[init]
    fn init(&self, reward_token: EgldOrEsdtTokenIdentifier) {
        self.reward_token().set(reward_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(initReserve)]
    fn init_reserve(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        decimals: usize,
        ltv_bps: u64,
        liquidation_threshold_bps: u64,
        price: BigUint,
    ) {
        require!(!self.reserves().contains(&token), ERROR_MARKET_ALREADY_LISTED);
        require!(
            ltv_bps <= liquidation_threshold_bps && liquidation_threshold_bps <= BPS,
            ERROR_INVALID_FACTOR
        );

        self.reserves().insert(token.clone());
        self.reserve_config(&token).set(AaveReserve {
            decimals,
            ltv_bps,
            liquidation_threshold_bps,
            borrow_cap: BigUint::zero(),
        });
        self.reserve_state(&token)
            .set(MarketState::new(self.blockchain().get_block_timestamp()));
        self.reserve_rates(&token).set(MarketRates::zero());
        self.asset_price(&token).set(price);
    }

    #[only_owner]
    #[endpoint(setAssetPrice)]
    fn set_asset_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.require_reserve(&token);
        self.asset_price(&token).set(price);
    }

    #[only_owner]
    #[endpoint(setBorrowCap)]
    fn set_borrow_cap(&self, token: EgldOrEsdtTokenIdentifier, borrow_cap: BigUint) {
        self.require_reserve(&token);
        self.reserve_config(&token)
            .update(|config| config.borrow_cap = borrow_cap);
    }

    #[only_owner]
    #[endpoint(setReserveRates)]
    fn set_reserve_rates(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        supply_rate: BigUint,
        borrow_rate: BigUint,
    ) {
        self.accrue(&token);
        self.reserve_rates(&token).update(|rates| {
            rates.supply_rate = self.to_decimal_ray(supply_rate);
            rates.borrow_rate = self.to_decimal_ray(borrow_rate);
        });
    }

    #[only_owner]
    #[endpoint(setEmissionPerSecond)]
    fn set_emission_per_second(&self, token: EgldOrEsdtTokenIdentifier, emission: BigUint) {
        self.accrue(&token);
        self.reserve_rates(&token)
            .update(|rates| rates.reward_speed = emission);
    }

    #[payable]
    #[endpoint(supply)]
    fn supply(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();
        let token = &payment.token_identifier;

        let mut state = self.accrue(token);
        self.update_user_rewards(token, &caller, &state);

        let scaled = self.actual_to_scaled(&payment.amount, &state.supply_index);
        self.scaled_a_balance(&caller, token)
            .update(|balance| *balance += &scaled);
        state.total_scaled_supply += &scaled;
        self.reserve_state(token).set(state);
        self.user_reserves(&caller).insert(token.clone());
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();

        let mut state = self.accrue(&token);
        self.update_user_rewards(&token, &caller, &state);

        let scaled_balance = self.scaled_a_balance(&caller, &token).get();
        let balance = self.scaled_to_actual(&scaled_balance, &state.supply_index);
        require!(amount <= balance, ERROR_INSUFFICIENT_BALANCE);

        let mut scaled = self.actual_to_scaled_ceil(&amount, &state.supply_index);
        if amount == balance || scaled > scaled_balance {
            scaled = scaled_balance.clone();
        }
        self.scaled_a_balance(&caller, &token)
            .set(&scaled_balance - &scaled);
        state.total_scaled_supply -= &scaled;
        self.reserve_state(&token).set(state);

        let cash = self.blockchain().get_sc_balance(&token, 0);
        require!(cash >= amount, ERROR_INSUFFICIENT_CASH);
        self.require_healthy(&caller);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();
        amount
    }

    #[endpoint(borrow)]
    fn borrow(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();

        let mut state = self.accrue(&token);
        let config = self.reserve_config(&token).get();
        if config.borrow_cap > 0 {
            let total_debt = self.scaled_to_actual(&state.total_scaled_borrow, &state.borrow_index);
            require!(
                total_debt + &amount <= config.borrow_cap,
                ERROR_BORROW_CAP_REACHED
            );
        }
        let cash = self.blockchain().get_sc_balance(&token, 0);
        require!(cash >= amount, ERROR_INSUFFICIENT_CASH);

        let scaled = self.actual_to_scaled_ceil(&amount, &state.borrow_index);
        self.scaled_debt_balance(&caller, &token)
            .update(|debt| *debt += &scaled);
        state.total_scaled_borrow += &scaled;
        self.reserve_state(&token).set(state);
        self.user_reserves(&caller).insert(token.clone());

        self.require_healthy(&caller);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();
    }

    #[payable]
    #[endpoint(repay)]
    fn repay(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();
        let token = &payment.token_identifier;

        let mut state = self.accrue(token);
        let scaled_debt = self.scaled_debt_balance(&caller, token).get();
        let debt = self.scaled_to_actual(&scaled_debt, &state.borrow_index);

        let (repaid, scaled) = if payment.amount >= debt {
            (debt, scaled_debt.clone())
        } else {
            (
                payment.amount.clone(),
                self.actual_to_scaled(&payment.amount, &state.borrow_index),
            )
        };
        self.scaled_debt_balance(&caller, token)
            .set(&scaled_debt - &scaled);
        state.total_scaled_borrow -= &scaled;
        self.reserve_state(token).set(state);

        let refund = &payment.amount - &repaid;
        if refund > 0 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(token, 0, &refund)
                .transfer();
        }
        repaid
    }

    /// Claims the caller's rewards on every reserve and sends them to `to`.
    #[endpoint(claimAllRewards)]
    fn claim_all_rewards(&self, to: ManagedAddress) -> BigUint {
        let caller = self.blockchain().get_caller();
        for token in self.user_reserves(&caller).iter() {
            let state = self.accrue(&token);
            self.update_user_rewards(&token, &caller, &state);
        }

        let amount = self.user_rewards(&caller).take();
        if amount > 0 {
            self.tx()
                .to(&to)
                .egld_or_single_esdt(&self.reward_token().get(), 0, &amount)
                .transfer();
        }
        amount
    }

    /// Current aToken balance and variable debt of `user`.
    #[view(getUserReserveData)]
    fn get_user_reserve_data(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        user: ManagedAddress,
    ) -> MultiValue2<BigUint, BigUint> {
        let state = self.current_state(&token);
        let supplied = self.scaled_to_actual(
            &self.scaled_a_balance(&user, &token).get(),
            &state.supply_index,
        );
        let debt = self.scaled_to_actual(
            &self.scaled_debt_balance(&user, &token).get(),
            &state.borrow_index,
        );
        (supplied, debt).into()
    }

    #[view(getReserveSnapshot)]
    fn get_reserve_snapshot(
        &self,
        token: EgldOrEsdtTokenIdentifier,
    ) -> AaveReserveSnapshot<Self::Api> {
        let config = self.reserve_config(&token).get();
        let rates = self.reserve_rates(&token).get();
        let state = self.current_state(&token);

        AaveReserveSnapshot {
            decimals: config.decimals,
            ltv_bps: config.ltv_bps,
            liquidation_threshold_bps: config.liquidation_threshold_bps,
            price: self.asset_price(&token).get(),
            total_supply: self.scaled_to_actual(&state.total_scaled_supply, &state.supply_index),
            total_borrow: self.scaled_to_actual(&state.total_scaled_borrow, &state.borrow_index),
            supply_rate: rates.supply_rate.into_raw_units().clone(),
            borrow_rate: rates.borrow_rate.into_raw_units().clone(),
            emission_per_second: rates.reward_speed,
        }
    }

    /// LTV weighted collateral and total debt in the base currency.
    #[view(getUserAccountData)]
    fn get_user_account_data(&self, user: ManagedAddress) -> AccountLiquidity<Self::Api> {
        let mut collateral_value = BigUint::zero();
        let mut borrow_value = BigUint::zero();

        for token in self.user_reserves(&user).iter() {
            let state = self.current_state(&token);
            let config = self.reserve_config(&token).get();
            let price = self.asset_price(&token).get();
            let unit = BigUint::from(10u64).pow(config.decimals as u32);

            let supplied = self.scaled_to_actual(
                &self.scaled_a_balance(&user, &token).get(),
                &state.supply_index,
            );
            let supplied_value = self.mul_div_floor(&supplied, &price, &unit);
            collateral_value += self.mul_div_floor(
                &supplied_value,
                &BigUint::from(config.ltv_bps),
                &BigUint::from(BPS),
            );

            let debt = self.scaled_to_actual(
                &self.scaled_debt_balance(&user, &token).get(),
                &state.borrow_index,
            );
            borrow_value += self.mul_div_ceil(&debt, &price, &unit);
        }

        AccountLiquidity {
            collateral_value,
            borrow_value,
        }
    }

    #[view(getUserRewards)]
    fn get_user_rewards(&self, user: ManagedAddress) -> BigUint {
        let mut pending = self.user_rewards(&user).get();
        for token in self.user_reserves(&user).iter() {
            let state = self.current_state(&token);
            pending += self.pending_rewards(
                &self.scaled_a_balance(&user, &token).get(),
                &state.reward_index,
                &self.to_decimal_ray(self.user_reward_index(&user, &token).get()),
            );
        }
        pending
    }

    fn current_state(&self, token: &EgldOrEsdtTokenIdentifier) -> MarketState<Self::Api> {
        self.require_reserve(token);
        let state = self.reserve_state(token).get();
        let rates = self.reserve_rates(token).get();
        self.accrue_market(&state, &rates, self.blockchain().get_block_timestamp())
    }

    fn accrue(&self, token: &EgldOrEsdtTokenIdentifier) -> MarketState<Self::Api> {
        let state = self.current_state(token);
        self.reserve_state(token).set(&state);
        state
    }

    fn update_user_rewards(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        user: &ManagedAddress,
        state: &MarketState<Self::Api>,
    ) {
        let user_index = self.to_decimal_ray(self.user_reward_index(user, token).get());
        let pending = self.pending_rewards(
            &self.scaled_a_balance(user, token).get(),
            &state.reward_index,
            &user_index,
        );
        if pending > 0 {
            self.user_rewards(user).update(|rewards| *rewards += &pending);
        }
        self.user_reward_index(user, token)
            .set(state.reward_index.rescale(RAY_PRECISION).into_raw_units());
    }

    fn require_reserve(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(self.reserves().contains(token), ERROR_MARKET_NOT_LISTED);
    }

    fn require_healthy(&self, user: &ManagedAddress) {
        let account = self.get_user_account_data(user.clone());
        require!(
            account.borrow_value <= account.collateral_value,
            ERROR_INSUFFICIENT_COLLATERAL
        );
    }
}

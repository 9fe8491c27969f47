#![no_std]

use common_constants::{RAY_PRECISION, WAD};
use common_errors::*;
use common_structs::{
    AccountLiquidity, CompoundMarket, CompoundMarketSnapshot, MarketRates, MarketState,
};

pub mod storage;

multiversx_sc::imports!();

/// Comptroller style lending market used for the Compound fork and Venus integrations.
///
/// Accounts supply through `mint`, must `enterMarkets` before a market counts as
/// collateral or can be borrowed from, and earn the reward token proportionally to
/// their supply. Prices follow the Compound oracle convention.
#[multiversx_sc::contract]
pub trait ComptrollerMock:
    storage::Storage + common_math::SharedMathModule + common_rates::InterestRates
{
    #[init]
    fn init(&self, reward_token: EgldOrEsdtTokenIdentifier) {
        self.reward_token().set(reward_token);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(supportMarket)]
    fn support_market(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        decimals: usize,
        collateral_factor: BigUint,
        price: BigUint,
    ) {
        require!(!self.markets().contains(&token), ERROR_MARKET_ALREADY_LISTED);
        require!(collateral_factor <= BigUint::from(WAD), ERROR_INVALID_FACTOR);

        self.markets().insert(token.clone());
        self.market_config(&token).set(CompoundMarket {
            decimals,
            collateral_factor,
            borrow_cap: BigUint::zero(),
        });
        self.market_state(&token)
            .set(MarketState::new(self.blockchain().get_block_timestamp()));
        self.market_rates(&token).set(MarketRates::zero());
        self.underlying_price(&token).set(price);
    }

    #[only_owner]
    #[endpoint(setUnderlyingPrice)]
    fn set_underlying_price(&self, token: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.require_listed(&token);
        self.underlying_price(&token).set(price);
    }

    #[only_owner]
    #[endpoint(setCollateralFactor)]
    fn set_collateral_factor(&self, token: EgldOrEsdtTokenIdentifier, collateral_factor: BigUint) {
        self.require_listed(&token);
        require!(collateral_factor <= BigUint::from(WAD), ERROR_INVALID_FACTOR);
        self.market_config(&token)
            .update(|config| config.collateral_factor = collateral_factor);
    }

    /// Zero disables the cap.
    #[only_owner]
    #[endpoint(setBorrowCap)]
    fn set_borrow_cap(&self, token: EgldOrEsdtTokenIdentifier, borrow_cap: BigUint) {
        self.require_listed(&token);
        self.market_config(&token)
            .update(|config| config.borrow_cap = borrow_cap);
    }

    /// Rates are per second, RAY scaled. Interest up to now is accrued with the old rates.
    #[only_owner]
    #[endpoint(setMarketRates)]
    fn set_market_rates(
        &self,
        token: EgldOrEsdtTokenIdentifier,
        supply_rate: BigUint,
        borrow_rate: BigUint,
    ) {
        self.accrue(&token);
        self.market_rates(&token).update(|rates| {
            rates.supply_rate = self.to_decimal_ray(supply_rate);
            rates.borrow_rate = self.to_decimal_ray(borrow_rate);
        });
    }

    #[only_owner]
    #[endpoint(setRewardSpeed)]
    fn set_reward_speed(&self, token: EgldOrEsdtTokenIdentifier, speed: BigUint) {
        self.accrue(&token);
        self.market_rates(&token)
            .update(|rates| rates.reward_speed = speed);
    }

    /// All tokens must be listed, otherwise nothing is entered.
    #[endpoint(enterMarkets)]
    fn enter_markets(&self, tokens: MultiValueEncoded<EgldOrEsdtTokenIdentifier>) {
        let caller = self.blockchain().get_caller();
        for token in tokens {
            self.require_listed(&token);
            self.account_markets(&caller).insert(token);
        }
    }

    #[payable]
    #[endpoint(mint)]
    fn mint(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();
        let token = &payment.token_identifier;

        let mut state = self.accrue(token);
        self.distribute_rewards(token, &caller, &state);

        let scaled = self.actual_to_scaled(&payment.amount, &state.supply_index);
        self.account_supply(&caller, token)
            .update(|balance| *balance += &scaled);
        state.total_scaled_supply += &scaled;
        self.market_state(token).set(state);
    }

    #[endpoint(redeemUnderlying)]
    fn redeem_underlying(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();

        let mut state = self.accrue(&token);
        self.distribute_rewards(&token, &caller, &state);

        let scaled_balance = self.account_supply(&caller, &token).get();
        let balance = self.scaled_to_actual(&scaled_balance, &state.supply_index);
        require!(amount <= balance, ERROR_INSUFFICIENT_BALANCE);

        let scaled = if amount == balance {
            scaled_balance.clone()
        } else {
            let scaled = self.actual_to_scaled_ceil(&amount, &state.supply_index);
            if scaled > scaled_balance {
                scaled_balance.clone()
            } else {
                scaled
            }
        };
        self.account_supply(&caller, &token)
            .set(&scaled_balance - &scaled);
        state.total_scaled_supply -= &scaled;
        self.market_state(&token).set(state);

        self.require_cash(&token, &amount);
        self.require_healthy(&caller);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();
    }

    #[endpoint(borrow)]
    fn borrow(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) {
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();
        require!(
            self.account_markets(&caller).contains(&token),
            ERROR_MARKET_NOT_ENTERED
        );

        let mut state = self.accrue(&token);
        let config = self.market_config(&token).get();
        if config.borrow_cap > 0 {
            let total_borrow =
                self.scaled_to_actual(&state.total_scaled_borrow, &state.borrow_index);
            require!(
                total_borrow + &amount <= config.borrow_cap,
                ERROR_BORROW_CAP_REACHED
            );
        }
        self.require_cash(&token, &amount);

        let scaled = self.actual_to_scaled_ceil(&amount, &state.borrow_index);
        self.account_borrow(&caller, &token)
            .update(|debt| *debt += &scaled);
        state.total_scaled_borrow += &scaled;
        self.market_state(&token).set(state);

        self.require_healthy(&caller);

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token, 0, &amount)
            .transfer();
    }

    /// Repays the caller's debt; anything above the debt is refunded.
    #[payable]
    #[endpoint(repayBorrow)]
    fn repay_borrow(&self) -> BigUint {
        let payment = self.call_value().egld_or_single_esdt();
        require!(payment.amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        let caller = self.blockchain().get_caller();
        let token = &payment.token_identifier;

        let mut state = self.accrue(token);
        let scaled_debt = self.account_borrow(&caller, token).get();
        let debt = self.scaled_to_actual(&scaled_debt, &state.borrow_index);

        let (repaid, scaled) = if payment.amount >= debt {
            (debt, scaled_debt.clone())
        } else {
            let scaled = self.actual_to_scaled(&payment.amount, &state.borrow_index);
            (payment.amount.clone(), scaled)
        };

        self.account_borrow(&caller, token)
            .set(&scaled_debt - &scaled);
        state.total_scaled_borrow -= &scaled;
        self.market_state(token).set(state);

        let refund = &payment.amount - &repaid;
        if refund > 0 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(token, 0, &refund)
                .transfer();
        }

        repaid
    }

    #[endpoint(claimComp)]
    fn claim_comp(&self, holder: ManagedAddress) -> BigUint {
        self.claim_rewards_for(&holder)
    }

    #[endpoint(claimVenus)]
    fn claim_venus(&self, holder: ManagedAddress) -> BigUint {
        self.claim_rewards_for(&holder)
    }

    #[view(balanceOfUnderlying)]
    fn balance_of_underlying(
        &self,
        account: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let state = self.current_state(&token);
        let scaled = self.account_supply(&account, &token).get();
        self.scaled_to_actual(&scaled, &state.supply_index)
    }

    #[view(borrowBalanceCurrent)]
    fn borrow_balance_current(
        &self,
        account: ManagedAddress,
        token: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let state = self.current_state(&token);
        let scaled = self.account_borrow(&account, &token).get();
        self.scaled_to_actual(&scaled, &state.borrow_index)
    }

    #[view(checkMembership)]
    fn check_membership(&self, account: ManagedAddress, token: EgldOrEsdtTokenIdentifier) -> bool {
        self.account_markets(&account).contains(&token)
    }

    #[view(getMarketSnapshot)]
    fn get_market_snapshot(
        &self,
        token: EgldOrEsdtTokenIdentifier,
    ) -> CompoundMarketSnapshot<Self::Api> {
        self.require_listed(&token);
        let config = self.market_config(&token).get();
        let rates = self.market_rates(&token).get();
        let state = self.current_state(&token);

        CompoundMarketSnapshot {
            decimals: config.decimals,
            collateral_factor: config.collateral_factor,
            price: self.underlying_price(&token).get(),
            total_supply: self.scaled_to_actual(&state.total_scaled_supply, &state.supply_index),
            total_borrow: self.scaled_to_actual(&state.total_scaled_borrow, &state.borrow_index),
            supply_rate: rates.supply_rate.into_raw_units().clone(),
            borrow_rate: rates.borrow_rate.into_raw_units().clone(),
            reward_speed: rates.reward_speed,
        }
    }

    /// Collateral weighted by collateral factors and total debt, both in USD WAD.
    #[view(getAccountLiquidity)]
    fn get_account_liquidity(&self, account: ManagedAddress) -> AccountLiquidity<Self::Api> {
        let mut collateral_value = BigUint::zero();
        let mut borrow_value = BigUint::zero();
        let wad = BigUint::from(WAD);

        for token in self.account_markets(&account).iter() {
            let state = self.current_state(&token);
            let config = self.market_config(&token).get();
            let price = self.underlying_price(&token).get();

            let supplied = self.scaled_to_actual(
                &self.account_supply(&account, &token).get(),
                &state.supply_index,
            );
            let supplied_value = self.mul_div_floor(&supplied, &price, &wad);
            collateral_value +=
                self.mul_div_floor(&supplied_value, &config.collateral_factor, &wad);

            let borrowed = self.scaled_to_actual(
                &self.account_borrow(&account, &token).get(),
                &state.borrow_index,
            );
            borrow_value += self.mul_div_floor(&borrowed, &price, &wad);
        }

        AccountLiquidity {
            collateral_value,
            borrow_value,
        }
    }

    /// Accrued plus not yet distributed rewards of `holder`.
    #[view(compAccrued)]
    fn comp_accrued(&self, holder: ManagedAddress) -> BigUint {
        let mut pending = self.reward_accrued(&holder).get();
        for token in self.markets().iter() {
            let state = self.current_state(&token);
            pending += self.pending_rewards(
                &self.account_supply(&holder, &token).get(),
                &state.reward_index,
                &self.to_decimal_ray(self.account_reward_index(&holder, &token).get()),
            );
        }
        pending
    }

    fn claim_rewards_for(&self, holder: &ManagedAddress) -> BigUint {
        for token in self.markets().iter() {
            let state = self.accrue(&token);
            self.distribute_rewards(&token, holder, &state);
        }

        let amount = self.reward_accrued(holder).take();
        if amount > 0 {
            self.tx()
                .to(holder)
                .egld_or_single_esdt(&self.reward_token().get(), 0, &amount)
                .transfer();
        }
        amount
    }

    fn current_state(&self, token: &EgldOrEsdtTokenIdentifier) -> MarketState<Self::Api> {
        self.require_listed(token);
        let state = self.market_state(token).get();
        let rates = self.market_rates(token).get();
        self.accrue_market(&state, &rates, self.blockchain().get_block_timestamp())
    }

    fn accrue(&self, token: &EgldOrEsdtTokenIdentifier) -> MarketState<Self::Api> {
        let state = self.current_state(token);
        self.market_state(token).set(&state);
        state
    }

    fn distribute_rewards(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
        account: &ManagedAddress,
        state: &MarketState<Self::Api>,
    ) {
        let account_index = self.to_decimal_ray(self.account_reward_index(account, token).get());
        let pending = self.pending_rewards(
            &self.account_supply(account, token).get(),
            &state.reward_index,
            &account_index,
        );
        if pending > 0 {
            self.reward_accrued(account)
                .update(|accrued| *accrued += &pending);
        }
        self.account_reward_index(account, token)
            .set(state.reward_index.rescale(RAY_PRECISION).into_raw_units());
    }

    fn require_listed(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(self.markets().contains(token), ERROR_MARKET_NOT_LISTED);
    }

    fn require_cash(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        let cash = self.blockchain().get_sc_balance(token, 0);
        require!(&cash >= amount, ERROR_INSUFFICIENT_CASH);
    }

    fn require_healthy(&self, account: &ManagedAddress) {
        let liquidity = self.get_account_liquidity(account.clone());
        require!(
            liquidity.borrow_value <= liquidity.collateral_value,
            ERROR_INSUFFICIENT_COLLATERAL
        );
    }
}

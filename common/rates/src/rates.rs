#![no_std]
use common_constants::{RAY_PRECISION, SECONDS_PER_YEAR, WAD_PRECISION};
use common_structs::{MarketRates, MarketState};

multiversx_sc::imports!();

/// Interest and reward index bookkeeping for the mock lending markets.
///
/// Balances are stored scaled by the market index at the time of the action, so a
/// balance read later includes every second of accrued interest. Indexes grow
/// linearly between two interactions.
#[multiversx_sc::module]
pub trait InterestRates: common_math::SharedMathModule {
    /// Calculates the interest accumulation factor using a linear interest rate formula.
    ///
    /// **Formula**:
    /// - `Interest Factor = 1 + (rate * time_passed)`
    ///
    /// # Arguments
    /// - `rate`: The per-second interest rate, in RAY.
    /// - `time_passed`: The duration in seconds for which interest is calculated.
    ///
    /// # Returns
    /// - The interest accumulation factor `(1 + r*t)`, in RAY.
    fn calculate_linear_interest(
        &self,
        rate: &ManagedDecimal<Self::Api, NumDecimals>,
        time_passed: u64,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let factor = self.mul_half_up(
            rate,
            &self.to_decimal(BigUint::from(time_passed), 0),
            RAY_PRECISION,
        );

        self.ray() + factor
    }

    /// Moves the market indexes forward to `now`.
    ///
    /// The reward index grows by `reward_speed * elapsed / total_scaled_supply` and is
    /// left untouched while the market has no suppliers.
    fn accrue_market(
        &self,
        state: &MarketState<Self::Api>,
        rates: &MarketRates<Self::Api>,
        now: u64,
    ) -> MarketState<Self::Api> {
        if now <= state.last_timestamp {
            return state.clone();
        }
        let elapsed = now - state.last_timestamp;

        let supply_factor = self.calculate_linear_interest(&rates.supply_rate, elapsed);
        let borrow_factor = self.calculate_linear_interest(&rates.borrow_rate, elapsed);

        let mut reward_index = state.reward_index.clone();
        if state.total_scaled_supply > 0u64 && rates.reward_speed > 0u64 {
            let emitted = &rates.reward_speed * &BigUint::from(elapsed);
            let delta = self.to_decimal_ray(self.mul_div_floor(
                &emitted,
                self.ray().into_raw_units(),
                &state.total_scaled_supply,
            ));
            reward_index = reward_index + delta;
        }

        MarketState {
            supply_index: self.mul_half_up(&state.supply_index, &supply_factor, RAY_PRECISION),
            borrow_index: self.mul_half_up(&state.borrow_index, &borrow_factor, RAY_PRECISION),
            reward_index,
            total_scaled_supply: state.total_scaled_supply.clone(),
            total_scaled_borrow: state.total_scaled_borrow.clone(),
            last_timestamp: now,
        }
    }

    fn scaled_to_actual(
        &self,
        scaled: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        self.mul_factor(scaled, index)
    }

    fn actual_to_scaled(
        &self,
        amount: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        self.div_factor(amount, index)
    }

    /// Scaled amount to remove for `amount`, rounded up so the account never keeps
    /// more than it is owed.
    fn actual_to_scaled_ceil(
        &self,
        amount: &BigUint,
        index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        self.mul_div_ceil(
            amount,
            self.ray().into_raw_units(),
            index.into_raw_units(),
        )
    }

    fn pending_rewards(
        &self,
        scaled_supply: &BigUint,
        market_reward_index: &ManagedDecimal<Self::Api, NumDecimals>,
        account_reward_index: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        if market_reward_index <= account_reward_index {
            return BigUint::zero();
        }
        let delta = market_reward_index.clone() - account_reward_index.clone();
        self.mul_factor(scaled_supply, &delta)
    }

    /// Per second RAY rate to a WAD annual percentage.
    fn annual_rate(
        &self,
        rate_per_second: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let yearly = self.mul_half_up(
            rate_per_second,
            &self.to_decimal(BigUint::from(SECONDS_PER_YEAR), 0),
            RAY_PRECISION,
        );
        self.rescale_half_up(&yearly, WAD_PRECISION)
    }
}

use common_constants::{UNWIND_SLIPPAGE_TOLERANCE_BPS, WAD_PRECISION};
use common_errors::ERROR_DIVISION_BY_ZERO;
use common_structs::SubsidySplit;

multiversx_sc::imports!();

/// # Folding Math Helpers Module
///
/// Pure valuation and accounting formulas of a folding position. Nothing here reads
/// storage or calls another contract, so every function can be exercised on its own.
///
/// ## Values
/// - **Price**: WAD value of one whole token, whatever the token decimals.
/// - **Value**: `amount * price / 10^decimals`, a WAD amount of the pricing currency.
/// - **Conversion**: `amount * from_price * 10^to_decimals / (to_price * 10^from_decimals)`.
///
/// ## Position Metrics
/// - **Collateral usage factor**: `borrow_value / supply_value`, zero without debt or supply.
/// - **Position value**: supply minus the debt converted to supply token units.
/// - **Price ratio**: `supply_price / borrow_price`, the quantity PNL targets refer to.
///
/// ## Rounding
/// Every formula truncates, so values reported to the owner never exceed what the
/// platform would pay out.
#[multiversx_sc::module]
pub trait MathsModule: common_math::SharedMathModule {
    /// Values a raw token amount in WAD.
    fn token_value(
        &self,
        amount: &BigUint,
        price: &ManagedDecimal<Self::Api, NumDecimals>,
        decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let unit = BigUint::from(10u64).pow(decimals as u32);
        let raw_value = self.mul_div_floor(
            amount,
            &price.rescale(WAD_PRECISION).into_raw_units().clone(),
            &unit,
        );
        self.to_decimal_wad(raw_value)
    }

    /// Converts a raw amount of one token into the equivalent raw amount of another.
    ///
    /// # Arguments
    /// - `amount`: Raw amount of the source token.
    /// - `from_price`, `from_decimals`: Source token price and decimals.
    /// - `to_price`, `to_decimals`: Target token price and decimals.
    fn convert_amount(
        &self,
        amount: &BigUint,
        from_price: &ManagedDecimal<Self::Api, NumDecimals>,
        from_decimals: usize,
        to_price: &ManagedDecimal<Self::Api, NumDecimals>,
        to_decimals: usize,
    ) -> BigUint {
        let from_unit = BigUint::from(10u64).pow(from_decimals as u32);
        let to_unit = BigUint::from(10u64).pow(to_decimals as u32);
        let numerator = amount * from_price.rescale(WAD_PRECISION).into_raw_units() * &to_unit;
        let denominator = to_price.rescale(WAD_PRECISION).into_raw_units() * &from_unit;

        require!(denominator > 0, ERROR_DIVISION_BY_ZERO);
        numerator / denominator
    }

    /// Borrow value over supply value, WAD scaled.
    ///
    /// # Returns
    /// - Zero when either balance is zero.
    fn collateral_usage_factor(
        &self,
        supply_balance: &BigUint,
        borrow_balance: &BigUint,
        supply_price: &ManagedDecimal<Self::Api, NumDecimals>,
        supply_decimals: usize,
        borrow_price: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_decimals: usize,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        if supply_balance == &0u64 || borrow_balance == &0u64 {
            return self.wad_zero();
        }

        let supply_value = self.token_value(supply_balance, supply_price, supply_decimals);
        if supply_value == self.wad_zero() {
            return self.wad_zero();
        }
        let borrow_value = self.token_value(borrow_balance, borrow_price, borrow_decimals);

        self.div_floor(&borrow_value, &supply_value, WAD_PRECISION)
    }

    /// Net value of the position in supply token units, floored at zero.
    fn position_value(
        &self,
        supply_balance: &BigUint,
        borrow_balance: &BigUint,
        supply_price: &ManagedDecimal<Self::Api, NumDecimals>,
        supply_decimals: usize,
        borrow_price: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_decimals: usize,
    ) -> BigUint {
        if borrow_balance == &0u64 {
            return supply_balance.clone();
        }

        let debt_in_supply = self.convert_amount(
            borrow_balance,
            borrow_price,
            borrow_decimals,
            supply_price,
            supply_decimals,
        );
        self.saturating_sub(supply_balance, &debt_in_supply)
    }

    fn price_ratio(
        &self,
        supply_price: &ManagedDecimal<Self::Api, NumDecimals>,
        borrow_price: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        self.div_floor(supply_price, borrow_price, WAD_PRECISION)
    }

    /// Splits a withdrawal between the owner and the subsidy holder.
    ///
    /// **Formula**:
    /// - `fraction = withdrawn / position_value`, one when everything is withdrawn
    /// - `principal_reduced = principal * fraction`
    /// - `principal_portion = min(principal_reduced, withdrawn)`
    /// - `profit = withdrawn - principal_portion`
    /// - taxes are the portions times their factors, truncated
    ///
    /// # Arguments
    /// - `withdrawn`: Supply tokens leaving the position.
    /// - `position_value`: Position value after the debt repayment, before the withdrawal.
    /// - `principal`: Stored principal value.
    /// - `principal_factor`, `profit_factor`: WAD subsidy shares.
    fn split_withdrawal(
        &self,
        withdrawn: &BigUint,
        position_value: &BigUint,
        principal: &BigUint,
        principal_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        profit_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> SubsidySplit<Self::Api> {
        if withdrawn == &0u64 {
            return SubsidySplit {
                principal_reduced: BigUint::zero(),
                principal_tax: BigUint::zero(),
                profit_tax: BigUint::zero(),
                user_amount: BigUint::zero(),
            };
        }

        let principal_reduced = if withdrawn >= position_value {
            principal.clone()
        } else {
            self.mul_div_floor(principal, withdrawn, position_value)
        };

        let principal_portion = if &principal_reduced < withdrawn {
            principal_reduced.clone()
        } else {
            withdrawn.clone()
        };
        let profit = withdrawn - &principal_portion;

        let principal_tax = self.mul_factor(&principal_portion, principal_factor);
        let profit_tax = self.mul_factor(&profit, profit_factor);
        let user_amount = withdrawn - &principal_tax - &profit_tax;

        SubsidySplit {
            principal_reduced,
            principal_tax,
            profit_tax,
            user_amount,
        }
    }

    /// Executor incentive of an unwind: `fixed + percentage * redeemed_value`, where
    /// `redeemed_value` is the supply spent on settling the repaid debt.
    fn unwind_incentive(
        &self,
        redeemed_value: &BigUint,
        fixed_reward: &BigUint,
        percentage_reward: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        fixed_reward + &self.mul_factor(redeemed_value, percentage_reward)
    }

    /// Highest supply amount a flash funded unwind may owe the pools for `repay_value`.
    fn unwind_slippage_limit(&self, repay_value: &BigUint) -> BigUint {
        let tolerance = self.to_decimal_bps(BigUint::from(UNWIND_SLIPPAGE_TOLERANCE_BPS));
        repay_value + &self.mul_factor(repay_value, &tolerance)
    }
}

#![no_std]

use core::cmp::Ordering;

use common_constants::{BPS_PRECISION, RAY, RAY_PRECISION, WAD, WAD_PRECISION};
use common_errors::{ERROR_DIVISION_BY_ZERO, ERROR_UNDERFLOW};

multiversx_sc::imports!();

/// Fixed-point helpers shared by the folding account and the platform mocks.
///
/// Values are `ManagedDecimal`s (or raw `BigUint` amounts) scaled by a power of ten.
/// Products are always computed before the division so no precision is lost in
/// intermediate steps. Division by zero and subtraction underflow abort the call.
#[multiversx_sc::module]
pub trait SharedMathModule {
    fn mul_half_up(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_a = a.rescale(precision);
        let scaled_b = b.rescale(precision);

        let product = scaled_a.into_raw_units() * scaled_b.into_raw_units();

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let half_scaled = &scaled / &BigUint::from(2u64);

        let rounded_product = (product + half_scaled) / scaled;

        self.to_decimal(rounded_product, precision)
    }

    /// `a * 10^precision / b`, truncated.
    fn div_floor(
        &self,
        a: &ManagedDecimal<Self::Api, NumDecimals>,
        b: &ManagedDecimal<Self::Api, NumDecimals>,
        precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let scaled_b = b.rescale(precision);
        let denominator = scaled_b.into_raw_units();
        require!(denominator > &BigUint::zero(), ERROR_DIVISION_BY_ZERO);

        let scaled = BigUint::from(10u64).pow(precision as u32);
        let numerator = a.rescale(precision).into_raw_units() * &scaled;

        self.to_decimal(numerator / denominator, precision)
    }

    /// Applies a fixed-point factor to a raw token amount, truncating.
    fn mul_factor(
        &self,
        amount: &BigUint,
        factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let scaled = BigUint::from(10u64).pow(factor.scale() as u32);
        amount * factor.into_raw_units() / scaled
    }

    /// Divides a raw token amount by a fixed-point factor, truncating.
    fn div_factor(
        &self,
        amount: &BigUint,
        factor: &ManagedDecimal<Self::Api, NumDecimals>,
    ) -> BigUint {
        let denominator = factor.into_raw_units();
        require!(denominator > &BigUint::zero(), ERROR_DIVISION_BY_ZERO);

        let scaled = BigUint::from(10u64).pow(factor.scale() as u32);
        amount * &scaled / denominator
    }

    fn mul_div_floor(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(denominator > &BigUint::zero(), ERROR_DIVISION_BY_ZERO);
        a * b / denominator
    }

    fn mul_div_ceil(&self, a: &BigUint, b: &BigUint, denominator: &BigUint) -> BigUint {
        require!(denominator > &BigUint::zero(), ERROR_DIVISION_BY_ZERO);
        let product = a * b;
        (product + denominator - 1u64) / denominator
    }

    fn checked_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        require!(a >= b, ERROR_UNDERFLOW);
        a - b
    }

    fn saturating_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        if a > b {
            a - b
        } else {
            BigUint::zero()
        }
    }

    fn to_decimal_wad(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, WAD_PRECISION)
    }

    fn wad_zero(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal_wad(BigUint::zero())
    }

    fn to_decimal_ray(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, RAY_PRECISION)
    }

    fn to_decimal_bps(self, value: BigUint) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(value, BPS_PRECISION)
    }

    fn ray(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(RAY), RAY_PRECISION)
    }

    fn wad(self) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        self.to_decimal(BigUint::from(WAD), WAD_PRECISION)
    }

    fn to_decimal(
        self,
        value: BigUint,
        precision: NumDecimals,
    ) -> ManagedDecimal<<Self as ContractBase>::Api, usize> {
        ManagedDecimal::from_raw_units(value, precision)
    }

    fn rescale_half_up(
        &self,
        value: &ManagedDecimal<Self::Api, NumDecimals>,
        new_precision: NumDecimals,
    ) -> ManagedDecimal<Self::Api, NumDecimals> {
        let old_precision = value.scale();
        let raw_value = value.into_raw_units();

        match new_precision.cmp(&old_precision) {
            Ordering::Equal => value.clone(),
            Ordering::Less => {
                let precision_diff = old_precision - new_precision;
                let factor = BigUint::from(10u64).pow(precision_diff as u32);
                let half_factor = &factor / 2u64;

                let rounded_downscaled_value = (raw_value + &half_factor) / factor;
                ManagedDecimal::from_raw_units(rounded_downscaled_value, new_precision)
            },
            Ordering::Greater => value.rescale(new_precision),
        }
    }
}

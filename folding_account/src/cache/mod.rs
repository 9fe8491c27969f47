use common_structs::{PlatformKind, PositionConfig};

use crate::adapters::PlatformAdapter;

multiversx_sc::imports!();

/// Platform adapter, prices and decimals of the position, resolved once per call.
///
/// Prices are read when the cache is built and reused for every valuation of the
/// same transaction. Balances are always read live.
pub struct Cache<'a, C>
where
    C: crate::storage::Storage + crate::helpers::math::MathsModule,
{
    sc_ref: &'a C,

    pub position: PositionConfig<C::Api>,
    pub adapter: PlatformAdapter<'a, C>,
    pub supply_price: ManagedDecimal<C::Api, NumDecimals>,
    pub borrow_price: ManagedDecimal<C::Api, NumDecimals>,
    pub supply_decimals: usize,
    pub borrow_decimals: usize,
}

impl<'a, C> Cache<'a, C>
where
    C: crate::storage::Storage + crate::helpers::math::MathsModule,
{
    pub fn new(sc_ref: &'a C, position: PositionConfig<C::Api>, kind: PlatformKind) -> Self {
        let adapter = PlatformAdapter::new(sc_ref, kind);
        let platform = &position.platform;

        let supply_price = adapter.reference_price(platform, &position.supply_token);
        let supply_decimals = adapter.token_decimals(platform, &position.supply_token);
        let (borrow_price, borrow_decimals) = if position.is_same_token() {
            (supply_price.clone(), supply_decimals)
        } else {
            (
                adapter.reference_price(platform, &position.borrow_token),
                adapter.token_decimals(platform, &position.borrow_token),
            )
        };

        Cache {
            sc_ref,
            position,
            adapter,
            supply_price,
            borrow_price,
            supply_decimals,
            borrow_decimals,
        }
    }

    pub fn supply_balance(&self) -> BigUint<C::Api> {
        self.adapter
            .supply_balance(&self.position.platform, &self.position.supply_token)
    }

    pub fn borrow_balance(&self) -> BigUint<C::Api> {
        self.adapter
            .borrow_balance(&self.position.platform, &self.position.borrow_token)
    }

    pub fn collateral_usage_factor(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.collateral_usage_factor_of(&self.supply_balance(), &self.borrow_balance())
    }

    pub fn collateral_usage_factor_of(
        &self,
        supply_balance: &BigUint<C::Api>,
        borrow_balance: &BigUint<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref.collateral_usage_factor(
            supply_balance,
            borrow_balance,
            &self.supply_price,
            self.supply_decimals,
            &self.borrow_price,
            self.borrow_decimals,
        )
    }

    pub fn position_value_of(
        &self,
        supply_balance: &BigUint<C::Api>,
        borrow_balance: &BigUint<C::Api>,
    ) -> BigUint<C::Api> {
        self.sc_ref.position_value(
            supply_balance,
            borrow_balance,
            &self.supply_price,
            self.supply_decimals,
            &self.borrow_price,
            self.borrow_decimals,
        )
    }

    /// Borrow token amount expressed in supply token units.
    pub fn borrow_in_supply(&self, amount: &BigUint<C::Api>) -> BigUint<C::Api> {
        if self.position.is_same_token() {
            return amount.clone();
        }
        self.sc_ref.convert_amount(
            amount,
            &self.borrow_price,
            self.borrow_decimals,
            &self.supply_price,
            self.supply_decimals,
        )
    }

    pub fn price_ratio(&self) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .price_ratio(&self.supply_price, &self.borrow_price)
    }
}

use common_constants::{COMPOUND_PRICE_PRECISION, WAD_PRECISION};
use common_proxies::proxy_comptroller::ComptrollerMockProxy;
use common_structs::{AssetMetadata, CompoundMarketSnapshot};

use super::{per_year, LendingPlatform};

multiversx_sc::imports!();

/// Comptroller based platforms. Prices are scaled so that `amount * price / 1e18`
/// is a WAD value, which makes them `1e(36 - decimals)` scaled per whole token.
pub struct CompoundForkAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    sc_ref: &'a C,
}

impl<'a, C> CompoundForkAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        CompoundForkAdapter { sc_ref }
    }

    pub fn market_snapshot(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> CompoundMarketSnapshot<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .get_market_snapshot(token)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    pub fn reward_token(
        &self,
        platform: &ManagedAddress<C::Api>,
    ) -> EgldOrEsdtTokenIdentifier<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .reward_token()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn normalize_price(
        &self,
        price: &BigUint<C::Api>,
        decimals: usize,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let whole_token = BigUint::from(10u64).pow(decimals as u32);
        let oracle_scale =
            BigUint::from(10u64).pow((COMPOUND_PRICE_PRECISION - WAD_PRECISION) as u32);
        self.sc_ref
            .to_decimal_wad(self.sc_ref.mul_div_floor(price, &whole_token, &oracle_scale))
    }

    fn own_address(&self) -> ManagedAddress<C::Api> {
        self.sc_ref.blockchain().get_sc_address()
    }
}

impl<'a, C> LendingPlatform<C::Api> for CompoundForkAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    fn supply(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .mint()
            .egld_or_single_esdt(token, 0, amount)
            .sync_call();
    }

    fn borrow(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .borrow(token, amount)
            .sync_call();
    }

    fn redeem_supply(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .redeem_underlying(token, amount)
            .sync_call();
    }

    fn repay_borrow(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) -> BigUint<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .repay_borrow()
            .egld_or_single_esdt(token, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn supply_balance(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .balance_of_underlying(self.own_address(), token)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn borrow_balance(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .borrow_balance_current(self.own_address(), token)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn reference_price(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let snapshot = self.market_snapshot(platform, token);
        self.normalize_price(&snapshot.price, snapshot.decimals)
    }

    fn token_decimals(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> usize {
        self.market_snapshot(platform, token).decimals
    }

    fn collateral_factor(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let snapshot = self.market_snapshot(platform, token);
        self.sc_ref.to_decimal_wad(snapshot.collateral_factor)
    }

    fn collateral_usage_factor(
        &self,
        platform: &ManagedAddress<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let liquidity = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .get_account_liquidity(self.own_address())
            .returns(ReturnsResult)
            .sync_call_readonly();

        if liquidity.collateral_value == 0 {
            return self.sc_ref.wad_zero();
        }

        self.sc_ref.div_floor(
            &self.sc_ref.to_decimal_wad(liquidity.borrow_value),
            &self.sc_ref.to_decimal_wad(liquidity.collateral_value),
            WAD_PRECISION,
        )
    }

    fn asset_metadata(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AssetMetadata<C::Api> {
        let snapshot = self.market_snapshot(platform, token);
        let collateral_factor = self.sc_ref.to_decimal_wad(snapshot.collateral_factor.clone());

        AssetMetadata {
            token: token.clone(),
            decimals: snapshot.decimals,
            price: self.normalize_price(&snapshot.price, snapshot.decimals),
            liquidation_factor: collateral_factor.clone(),
            collateral_factor,
            total_supply: snapshot.total_supply,
            total_borrow: snapshot.total_borrow,
            supply_apr: self
                .sc_ref
                .to_decimal_ray(per_year(&snapshot.supply_rate))
                .rescale(WAD_PRECISION),
            borrow_apr: self
                .sc_ref
                .to_decimal_ray(per_year(&snapshot.borrow_rate))
                .rescale(WAD_PRECISION),
            reward_token: self.reward_token(platform),
            supply_rewards_per_year: per_year(&snapshot.reward_speed),
            borrow_rewards_per_year: BigUint::zero(),
        }
    }

    fn enter_markets(
        &self,
        platform: &ManagedAddress<C::Api>,
        tokens: &ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    ) {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .enter_markets(MultiValueEncoded::from(tokens.clone()))
            .sync_call();
    }

    fn claim_rewards(&self, platform: &ManagedAddress<C::Api>) -> EgldOrEsdtTokenPayment<C::Api> {
        let amount = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .claim_comp(self.own_address())
            .returns(ReturnsResult)
            .sync_call();

        EgldOrEsdtTokenPayment::new(self.reward_token(platform), 0, amount)
    }
}

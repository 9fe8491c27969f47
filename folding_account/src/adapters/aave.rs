use common_constants::{AAVE_PRICE_PRECISION, BPS_PRECISION, WAD_PRECISION};
use common_errors::ERROR_MARKET_NOT_LISTED;
use common_proxies::proxy_aave_pool::AavePoolMockProxy;
use common_structs::{AaveReserveSnapshot, AssetMetadata};
use multiversx_sc::contract_base::ErrorHelper;

use super::{per_year, LendingPlatform};

multiversx_sc::imports!();

/// Aave style pools. Prices are 8 decimal base currency values of one whole token and
/// markets are entered implicitly on supply.
pub struct AaveAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    sc_ref: &'a C,
}

impl<'a, C> AaveAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        AaveAdapter { sc_ref }
    }

    fn reserve_snapshot(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AaveReserveSnapshot<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .get_reserve_snapshot(token)
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn user_reserve(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> (BigUint<C::Api>, BigUint<C::Api>) {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .get_user_reserve_data(token, self.sc_ref.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call_readonly()
            .into_tuple()
    }

    fn reward_token(&self, platform: &ManagedAddress<C::Api>) -> EgldOrEsdtTokenIdentifier<C::Api> {
        self.sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .reward_token()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn normalize_price(&self, price: BigUint<C::Api>) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(price, AAVE_PRICE_PRECISION)
            .rescale(WAD_PRECISION)
    }

    fn bps_to_wad(&self, value: u64) -> ManagedDecimal<C::Api, NumDecimals> {
        self.sc_ref
            .to_decimal(BigUint::from(value), BPS_PRECISION)
            .rescale(WAD_PRECISION)
    }
}

impl<'a, C> LendingPlatform<C::Api> for AaveAdapter<'a, C>
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
            .typed(AavePoolMockProxy)
            .supply()
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
            .typed(AavePoolMockProxy)
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
            .typed(AavePoolMockProxy)
            .withdraw(token, amount)
            .returns(ReturnsResult)
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
            .typed(AavePoolMockProxy)
            .repay()
            .egld_or_single_esdt(token, 0, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn supply_balance(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        let (supplied, _) = self.user_reserve(platform, token);
        supplied
    }

    fn borrow_balance(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        let (_, debt) = self.user_reserve(platform, token);
        debt
    }

    fn reference_price(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let price = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .asset_price(token)
            .returns(ReturnsResult)
            .sync_call_readonly();
        self.normalize_price(price)
    }

    fn token_decimals(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> usize {
        self.reserve_snapshot(platform, token).decimals
    }

    fn collateral_factor(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.bps_to_wad(self.reserve_snapshot(platform, token).ltv_bps)
    }

    fn collateral_usage_factor(
        &self,
        platform: &ManagedAddress<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        let account = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .get_user_account_data(self.sc_ref.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call_readonly();

        if account.collateral_value == 0 {
            return self.sc_ref.wad_zero();
        }

        self.sc_ref.div_floor(
            &self.sc_ref.to_decimal(account.borrow_value, AAVE_PRICE_PRECISION),
            &self.sc_ref.to_decimal(account.collateral_value, AAVE_PRICE_PRECISION),
            WAD_PRECISION,
        )
    }

    fn asset_metadata(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AssetMetadata<C::Api> {
        let snapshot = self.reserve_snapshot(platform, token);
        let emission_per_year = per_year(&snapshot.emission_per_second);

        AssetMetadata {
            token: token.clone(),
            decimals: snapshot.decimals,
            price: self.normalize_price(snapshot.price),
            collateral_factor: self.bps_to_wad(snapshot.ltv_bps),
            liquidation_factor: self.bps_to_wad(snapshot.liquidation_threshold_bps),
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
            supply_rewards_per_year: emission_per_year,
            borrow_rewards_per_year: BigUint::zero(),
        }
    }

    /// Aave has no market entry; every token must still be an initialized reserve.
    fn enter_markets(
        &self,
        platform: &ManagedAddress<C::Api>,
        tokens: &ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    ) {
        let reserves: ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>> = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .reserves()
            .returns(ReturnsResult)
            .sync_call_readonly()
            .to_vec();

        for token in tokens.iter() {
            if !reserves.contains(&token) {
                ErrorHelper::<C::Api>::signal_error_with_message(ERROR_MARKET_NOT_LISTED);
            }
        }
    }

    fn claim_rewards(&self, platform: &ManagedAddress<C::Api>) -> EgldOrEsdtTokenPayment<C::Api> {
        let amount = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(AavePoolMockProxy)
            .claim_all_rewards(self.sc_ref.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call();

        EgldOrEsdtTokenPayment::new(self.reward_token(platform), 0, amount)
    }
}

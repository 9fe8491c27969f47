use common_proxies::proxy_comptroller::ComptrollerMockProxy;
use common_structs::AssetMetadata;

use super::{CompoundForkAdapter, LendingPlatform};

multiversx_sc::imports!();

/// Venus behaves as a Compound fork except for how rewards are claimed.
pub struct VenusAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    sc_ref: &'a C,
    comptroller: CompoundForkAdapter<'a, C>,
}

impl<'a, C> VenusAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    pub fn new(sc_ref: &'a C) -> Self {
        VenusAdapter {
            sc_ref,
            comptroller: CompoundForkAdapter::new(sc_ref),
        }
    }
}

impl<'a, C> LendingPlatform<C::Api> for VenusAdapter<'a, C>
where
    C: common_math::SharedMathModule,
{
    fn supply(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        self.comptroller.supply(platform, token, amount)
    }

    fn borrow(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        self.comptroller.borrow(platform, token, amount)
    }

    fn redeem_supply(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) {
        self.comptroller.redeem_supply(platform, token, amount)
    }

    fn repay_borrow(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
        amount: &BigUint<C::Api>,
    ) -> BigUint<C::Api> {
        self.comptroller.repay_borrow(platform, token, amount)
    }

    fn supply_balance(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        self.comptroller.supply_balance(platform, token)
    }

    fn borrow_balance(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> BigUint<C::Api> {
        self.comptroller.borrow_balance(platform, token)
    }

    fn reference_price(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.comptroller.reference_price(platform, token)
    }

    fn token_decimals(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> usize {
        self.comptroller.token_decimals(platform, token)
    }

    fn collateral_factor(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.comptroller.collateral_factor(platform, token)
    }

    fn collateral_usage_factor(
        &self,
        platform: &ManagedAddress<C::Api>,
    ) -> ManagedDecimal<C::Api, NumDecimals> {
        self.comptroller.collateral_usage_factor(platform)
    }

    fn asset_metadata(
        &self,
        platform: &ManagedAddress<C::Api>,
        token: &EgldOrEsdtTokenIdentifier<C::Api>,
    ) -> AssetMetadata<C::Api> {
        self.comptroller.asset_metadata(platform, token)
    }

    fn enter_markets(
        &self,
        platform: &ManagedAddress<C::Api>,
        tokens: &ManagedVec<C::Api, EgldOrEsdtTokenIdentifier<C::Api>>,
    ) {
        self.comptroller.enter_markets(platform, tokens)
    }

    fn claim_rewards(&self, platform: &ManagedAddress<C::Api>) -> EgldOrEsdtTokenPayment<C::Api> {
        let amount = self
            .sc_ref
            .tx()
            .to(platform)
            .typed(ComptrollerMockProxy)
            .claim_venus(self.sc_ref.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call();

        EgldOrEsdtTokenPayment::new(self.comptroller.reward_token(platform), 0, amount)
    }
}

use common_structs::{CompoundMarket, MarketRates, MarketState};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    /// Listed markets, keyed by underlying token
    #[view(getAllMarkets)]
    #[storage_mapper("markets")]
    fn markets(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getMarketConfig)]
    #[storage_mapper("market_config")]
    fn market_config(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<CompoundMarket<Self::Api>>;

    #[storage_mapper("market_state")]
    fn market_state(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketState<Self::Api>>;

    #[storage_mapper("market_rates")]
    fn market_rates(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketRates<Self::Api>>;

    /// Oracle price of the underlying, scaled by `10^(36 - decimals)`
    #[view(getUnderlyingPrice)]
    #[storage_mapper("underlying_price")]
    fn underlying_price(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    /// Markets an account uses as collateral and may borrow from
    #[view(getAssetsIn)]
    #[storage_mapper("account_markets")]
    fn account_markets(
        &self,
        account: &ManagedAddress,
    ) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("account_supply")]
    fn account_supply(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("account_borrow")]
    fn account_borrow(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    /// Raw RAY units of the market reward index last credited to the account
    #[storage_mapper("account_reward_index")]
    fn account_reward_index(
        &self,
        account: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("reward_accrued")]
    fn reward_accrued(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getRewardToken)]
    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;
}

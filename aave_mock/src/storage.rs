use common_structs::{AaveReserve, MarketRates, MarketState};

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait Storage {
    #[view(getReservesList)]
    #[storage_mapper("reserves")]
    fn reserves(&self) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getReserveConfiguration)]
    #[storage_mapper("reserve_config")]
    fn reserve_config(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<AaveReserve<Self::Api>>;

    #[storage_mapper("reserve_state")]
    fn reserve_state(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketState<Self::Api>>;

    #[storage_mapper("reserve_rates")]
    fn reserve_rates(
        &self,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<MarketRates<Self::Api>>;

    /// Price of one whole token in the 8 decimals base currency
    #[view(getAssetPrice)]
    #[storage_mapper("asset_price")]
    fn asset_price(&self, token: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("scaled_a_balance")]
    fn scaled_a_balance(
        &self,
        user: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("scaled_debt_balance")]
    fn scaled_debt_balance(
        &self,
        user: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[view(getUserReserves)]
    #[storage_mapper("user_reserves")]
    fn user_reserves(&self, user: &ManagedAddress) -> UnorderedSetMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("user_reward_index")]
    fn user_reward_index(
        &self,
        user: &ManagedAddress,
        token: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("user_rewards")]
    fn user_rewards(&self, user: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getRewardToken)]
    #[storage_mapper("reward_token")]
    fn reward_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;
}

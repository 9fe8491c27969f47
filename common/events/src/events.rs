#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();
pub use common_structs::*;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("register_platform")]
    fn register_platform_event(
        &self,
        #[indexed] platform: &ManagedAddress,
        #[indexed] kind: PlatformKind,
    );

    #[event("register_pool")]
    fn register_pool_event(
        &self,
        #[indexed] token_a: &EgldOrEsdtTokenIdentifier,
        #[indexed] token_b: &EgldOrEsdtTokenIdentifier,
        #[indexed] fee: u32,
        #[indexed] pool: &ManagedAddress,
    );

    #[event("subsidy_config")]
    fn subsidy_config_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] principal_factor: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] profit_factor: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("open_position")]
    fn open_position_event(&self, #[indexed] position: &PositionConfig<Self::Api>);

    // Principal is zero when only leverage is added
    #[event("increase_position")]
    fn increase_position_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] principal: &BigUint,
        #[indexed] supplied: &BigUint,
        #[indexed] borrowed: &BigUint,
        #[indexed] collateral_usage: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("decrease_position")]
    fn decrease_position_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] repaid: &BigUint,
        #[indexed] redeemed: &BigUint,
        #[indexed] withdrawn: &BigUint,
        #[indexed] collateral_usage: &ManagedDecimal<Self::Api, NumDecimals>,
    );

    #[event("subsidy_paid")]
    fn subsidy_paid_event(
        &self,
        #[indexed] holder: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        #[indexed] principal_tax: &BigUint,
        #[indexed] profit_tax: &BigUint,
    );

    #[event("add_pnl_setting")]
    fn add_pnl_setting_event(
        &self,
        #[indexed] index: usize,
        #[indexed] setting: &PnlSetting<Self::Api>,
    );

    #[event("remove_pnl_setting")]
    fn remove_pnl_setting_event(&self, #[indexed] index: usize);

    #[event("execute_pnl")]
    fn execute_pnl_event(
        &self,
        #[indexed] executor: &ManagedAddress,
        #[indexed] index: usize,
        #[indexed] result: &UnwindResult<Self::Api>,
    );

    #[event("configure_stop_loss")]
    fn configure_stop_loss_event(&self, #[indexed] config: &StopLossConfig<Self::Api>);

    #[event("stop_loss_executor")]
    fn stop_loss_executor_event(
        &self,
        #[indexed] executor: &ManagedAddress,
        #[indexed] allowed: bool,
    );

    #[event("execute_stop_loss")]
    fn execute_stop_loss_event(
        &self,
        #[indexed] executor: &ManagedAddress,
        #[indexed] collateral_usage: &ManagedDecimal<Self::Api, NumDecimals>,
        #[indexed] result: &UnwindResult<Self::Api>,
    );

    #[event("change_owner")]
    fn change_owner_event(
        &self,
        #[indexed] previous_owner: &ManagedAddress,
        #[indexed] new_owner: &ManagedAddress,
    );

    #[event("claim_rewards")]
    fn claim_rewards_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] reward: &EgldOrEsdtTokenPayment<Self::Api>,
    );
}

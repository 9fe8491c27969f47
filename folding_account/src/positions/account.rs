multiversx_sc::imports!();

use common_errors::*;

use crate::{adapters::PlatformAdapter, storage, validation};

#[multiversx_sc::module]
pub trait PositionAccountModule:
    storage::Storage
    + validation::ValidationModule
    + common_events::EventsModule
    + common_math::SharedMathModule
    + multiversx_sc_modules::pause::PauseModule
{
    /// Hands the account over to a new owner. Every PNL setting, the stop loss
    /// configuration and its executor whitelist are dropped.
    ///
    /// # Arguments
    /// - `new_owner`: Address receiving the account.
    #[endpoint(changeOwner)]
    fn change_owner(&self, new_owner: ManagedAddress) {
        self.require_not_busy();
        let caller = self.blockchain().get_caller();
        self.require_owner_or_registry(&caller);
        require!(!new_owner.is_zero(), ERROR_INVALID_ADDRESS);

        let previous_owner = self.account_owner().get();
        self.account_owner().set(&new_owner);

        self.pnl_settings().clear();
        self.stop_loss_config().clear();
        self.stop_loss_executors().clear();

        self.change_owner_event(&previous_owner, &new_owner);
    }

    /// Claims the platform rewards earned by the position and forwards them to the owner.
    #[endpoint(claimRewards)]
    fn claim_rewards(&self) -> EgldOrEsdtTokenPayment {
        self.require_not_busy();
        let caller = self.blockchain().get_caller();
        self.require_account_owner(&caller);
        let (position, kind) = self.require_position_initialized();

        let reward = PlatformAdapter::new(self, kind).claim_rewards(&position.platform);
        if reward.amount > 0 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&reward.token_identifier, 0, &reward.amount)
                .transfer();
        }

        self.claim_rewards_event(&caller, &reward);
        reward
    }
}

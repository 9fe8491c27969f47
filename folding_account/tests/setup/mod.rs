use crate::{constants::*, proxys::*};

use common_structs::{
    DecreaseResult, IncreaseResult, PathStep, PlatformKind, PnlSimulation, PositionSnapshot,
    StopLossConfig, UnwindResult,
};
use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, EgldOrEsdtTokenPayment, ManagedAddress, ManagedDecimal,
    ManagedVec, MultiValueEncoded, NumDecimals, ReturnsNewManagedAddress, ReturnsResult,
    TestAddress,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, TestTokenIdentifier},
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(FOLDING_ACCOUNT_PATH, folding_account::ContractBuilder);
    blockchain.register_contract(COMPTROLLER_MOCK_PATH, comptroller_mock::ContractBuilder);
    blockchain.register_contract(AAVE_MOCK_PATH, aave_mock::ContractBuilder);
    blockchain.register_contract(SWAP_MOCK_PATH, swap_mock::ContractBuilder);

    blockchain
}

pub fn token(id: TestTokenIdentifier) -> EgldOrEsdtTokenIdentifier<StaticApi> {
    EgldOrEsdtTokenIdentifier::esdt(id.to_token_identifier())
}

pub fn wad(value: u128) -> BigUint<StaticApi> {
    BigUint::from(value)
}

/// Raw amount of `whole` tokens with `decimals` decimals.
pub fn units(whole: u64, decimals: usize) -> BigUint<StaticApi> {
    BigUint::from(whole) * BigUint::from(10u64).pow(decimals as u32)
}

pub fn path(steps: &[(TestTokenIdentifier, u32)]) -> ManagedVec<StaticApi, PathStep<StaticApi>> {
    let mut path = ManagedVec::new();
    for (id, fee) in steps {
        path.push(PathStep::new(token(id.clone()), *fee));
    }
    path
}

/// Supply side route of a WETH/DAI position.
pub fn weth_to_dai() -> ManagedVec<StaticApi, PathStep<StaticApi>> {
    path(&[(WETH_TOKEN, POOL_FEE), (DAI_TOKEN, 0)])
}

/// Debt side route of a WETH/DAI position.
pub fn dai_to_weth() -> ManagedVec<StaticApi, PathStep<StaticApi>> {
    path(&[(DAI_TOKEN, POOL_FEE), (WETH_TOKEN, 0)])
}

pub fn empty_path() -> ManagedVec<StaticApi, PathStep<StaticApi>> {
    ManagedVec::new()
}

/// Amount of token_b raw units per raw unit of token_a, WAD scaled.
pub fn pool_price(
    price_a_usd: u64,
    decimals_a: usize,
    price_b_usd: u64,
    decimals_b: usize,
) -> BigUint<StaticApi> {
    units(price_a_usd, decimals_b) * BigUint::from(WAD) / units(price_b_usd, decimals_a)
}

/// Comptroller price of one raw unit scaled by 1e18, i.e. `usd * 10^(36 - decimals)`.
pub fn comptroller_price(usd: u64, decimals: usize) -> BigUint<StaticApi> {
    units(usd, 36 - decimals)
}

/// Aave oracle price, 8 decimals per whole token.
pub fn aave_price(usd: u64) -> BigUint<StaticApi> {
    units(usd, 8)
}

pub struct FoldingTestState {
    pub world: ScenarioWorld,
    pub kind: PlatformKind,
    pub account_sc: ManagedAddress<StaticApi>,
    pub platform_sc: ManagedAddress<StaticApi>,
    pub weth_dai_pool: ManagedAddress<StaticApi>,
    pub weth_usdc_pool: ManagedAddress<StaticApi>,
    pub usdc_dai_pool: ManagedAddress<StaticApi>,
}

impl FoldingTestState {
    pub fn new() -> Self {
        Self::with_platform(PlatformKind::CompoundFork)
    }

    pub fn with_platform(kind: PlatformKind) -> Self {
        let mut world = world();
        world.current_block().block_timestamp(0);
        setup_accounts(&mut world);

        let platform_sc = match kind {
            PlatformKind::Aave => setup_aave(&mut world),
            PlatformKind::CompoundFork | PlatformKind::Venus => setup_comptroller(&mut world),
        };

        let weth_dai_pool = setup_pool(
            &mut world,
            WETH_TOKEN,
            DAI_TOKEN,
            POOL_FEE,
            pool_price(WETH_USD, WETH_DECIMALS, 1, DAI_DECIMALS),
        );
        let weth_usdc_pool = setup_pool(
            &mut world,
            WETH_TOKEN,
            USDC_TOKEN,
            POOL_FEE,
            pool_price(WETH_USD, WETH_DECIMALS, 1, USDC_DECIMALS),
        );
        let usdc_dai_pool = setup_pool(
            &mut world,
            USDC_TOKEN,
            DAI_TOKEN,
            STABLE_POOL_FEE,
            pool_price(1, USDC_DECIMALS, 1, DAI_DECIMALS),
        );

        let account_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(FoldingAccountProxy)
            .init(
                ACCOUNT_OWNER_ADDRESS,
                SUBSIDY_HOLDER_ADDRESS,
                wad(SUBSIDY_PRINCIPAL_FACTOR),
                wad(SUBSIDY_PROFIT_FACTOR),
            )
            .code(FOLDING_ACCOUNT_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let mut state = Self {
            world,
            kind,
            account_sc,
            platform_sc,
            weth_dai_pool,
            weth_usdc_pool,
            usdc_dai_pool,
        };

        state.register_platform(state.platform_sc.clone(), kind);
        state.register_pool(WETH_TOKEN, DAI_TOKEN, POOL_FEE, state.weth_dai_pool.clone());
        state.register_pool(WETH_TOKEN, USDC_TOKEN, POOL_FEE, state.weth_usdc_pool.clone());
        state.register_pool(
            USDC_TOKEN,
            DAI_TOKEN,
            STABLE_POOL_FEE,
            state.usdc_dai_pool.clone(),
        );

        state
    }

    // Registry

    pub fn register_platform(&mut self, platform: ManagedAddress<StaticApi>, kind: PlatformKind) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .register_platform(platform, kind)
            .run();
    }

    pub fn register_pool(
        &mut self,
        token_a: TestTokenIdentifier,
        token_b: TestTokenIdentifier,
        fee: u32,
        pool: ManagedAddress<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .register_pool(token(token_a), token(token_b), fee, pool)
            .run();
    }

    pub fn set_subsidy_config(&mut self, principal_factor: u128, profit_factor: u128) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .set_subsidy_config(
                SUBSIDY_HOLDER_ADDRESS,
                wad(principal_factor),
                wad(profit_factor),
            )
            .run();
    }

    pub fn pause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .pause_endpoint()
            .run();
    }

    pub fn unpause(&mut self) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .unpause_endpoint()
            .run();
    }

    // Market moves

    /// Moves the WETH price on the lending platform and on every WETH pool.
    pub fn set_weth_price(&mut self, usd: u64) {
        match self.kind {
            PlatformKind::Aave => {
                self.world
                    .tx()
                    .from(OWNER_ADDRESS)
                    .to(self.platform_sc.clone())
                    .typed(proxy_aave_pool::AavePoolMockProxy)
                    .set_asset_price(token(WETH_TOKEN), aave_price(usd))
                    .run();
            },
            PlatformKind::CompoundFork | PlatformKind::Venus => {
                self.world
                    .tx()
                    .from(OWNER_ADDRESS)
                    .to(self.platform_sc.clone())
                    .typed(proxy_comptroller::ComptrollerMockProxy)
                    .set_underlying_price(token(WETH_TOKEN), comptroller_price(usd, WETH_DECIMALS))
                    .run();
            },
        }

        self.set_pool_price(
            self.weth_dai_pool.clone(),
            pool_price(usd, WETH_DECIMALS, 1, DAI_DECIMALS),
        );
        self.set_pool_price(
            self.weth_usdc_pool.clone(),
            pool_price(usd, WETH_DECIMALS, 1, USDC_DECIMALS),
        );
    }

    pub fn set_pool_price(&mut self, pool: ManagedAddress<StaticApi>, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(pool)
            .typed(proxy_swap_pool::SwapPoolMockProxy)
            .set_price(price)
            .run();
    }

    pub fn change_timestamp(&mut self, timestamp: u64) {
        self.world.current_block().block_timestamp(timestamp);
    }

    // Position management

    pub fn increase(
        &mut self,
        principal: u128,
        supply_amount: u128,
        max_borrow_amount: u128,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
    ) -> IncreaseResult<StaticApi> {
        let tx = self
            .world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .increase_position_with_flash_swap(
                self.platform_sc.clone(),
                token(WETH_TOKEN),
                token(DAI_TOKEN),
                BigUint::from(supply_amount),
                BigUint::from(max_borrow_amount),
                path,
            );

        if principal > 0 {
            tx.single_esdt(
                &WETH_TOKEN.to_token_identifier(),
                0,
                &BigUint::from(principal),
            )
            .returns(ReturnsResult)
            .run()
        } else {
            tx.returns(ReturnsResult).run()
        }
    }

    pub fn increase_error(
        &mut self,
        from: TestAddress,
        principal: u128,
        supply_amount: u128,
        max_borrow_amount: u128,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
        error_message: &[u8],
    ) {
        let tx = self
            .world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .increase_position_with_flash_swap(
                self.platform_sc.clone(),
                token(WETH_TOKEN),
                token(DAI_TOKEN),
                BigUint::from(supply_amount),
                BigUint::from(max_borrow_amount),
                path,
            );

        let message = core::str::from_utf8(error_message).unwrap();
        if principal > 0 {
            tx.single_esdt(
                &WETH_TOKEN.to_token_identifier(),
                0,
                &BigUint::from(principal),
            )
            .returns(ExpectMessage(message))
            .run();
        } else {
            tx.returns(ExpectMessage(message)).run();
        }
    }

    /// Increase with explicit tokens, for positions other than WETH/DAI.
    pub fn increase_pair(
        &mut self,
        supply_token: TestTokenIdentifier,
        borrow_token: TestTokenIdentifier,
        principal: u128,
        supply_amount: u128,
        max_borrow_amount: u128,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
    ) -> IncreaseResult<StaticApi> {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .increase_position_with_flash_swap(
                self.platform_sc.clone(),
                token(supply_token),
                token(borrow_token),
                BigUint::from(supply_amount),
                BigUint::from(max_borrow_amount),
                path,
            )
            .single_esdt(
                &supply_token.to_token_identifier(),
                0,
                &BigUint::from(principal),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn decrease(
        &mut self,
        withdraw_amount: u128,
        repay_amount: u128,
        max_supply_repay_amount: u128,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
    ) -> DecreaseResult<StaticApi> {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .decrease_position_with_flash_swap(
                self.platform_sc.clone(),
                token(WETH_TOKEN),
                token(DAI_TOKEN),
                BigUint::from(withdraw_amount),
                BigUint::from(repay_amount),
                BigUint::from(max_supply_repay_amount),
                path,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn decrease_pair(
        &mut self,
        supply_token: TestTokenIdentifier,
        borrow_token: TestTokenIdentifier,
        withdraw_amount: u128,
        repay_amount: u128,
        max_supply_repay_amount: u128,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
    ) -> DecreaseResult<StaticApi> {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .decrease_position_with_flash_swap(
                self.platform_sc.clone(),
                token(supply_token),
                token(borrow_token),
                BigUint::from(withdraw_amount),
                BigUint::from(repay_amount),
                BigUint::from(max_supply_repay_amount),
                path,
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn decrease_error(
        &mut self,
        from: TestAddress,
        withdraw_amount: u128,
        repay_amount: u128,
        max_supply_repay_amount: u128,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .decrease_position_with_flash_swap(
                self.platform_sc.clone(),
                token(WETH_TOKEN),
                token(DAI_TOKEN),
                BigUint::from(withdraw_amount),
                BigUint::from(repay_amount),
                BigUint::from(max_supply_repay_amount),
                path,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    /// Opens the reference position: 1 WETH principal, 1 WETH flash swapped from DAI.
    pub fn open_default_position(&mut self) -> IncreaseResult<StaticApi> {
        self.increase(ONE_WETH, 2 * ONE_WETH, 2_100 * ONE_DAI, weth_to_dai())
    }

    // Ownership and rewards

    pub fn change_owner(&mut self, from: TestAddress, new_owner: TestAddress) {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .change_owner(new_owner)
            .run();
    }

    pub fn change_owner_error(
        &mut self,
        from: TestAddress,
        new_owner: TestAddress,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .change_owner(new_owner)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn claim_rewards(&mut self, from: TestAddress) -> EgldOrEsdtTokenPayment<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .claim_rewards()
            .returns(ReturnsResult)
            .run()
    }

    // PNL

    pub fn configure_pnl(
        &mut self,
        price_target: u128,
        is_take_profit: bool,
        fixed_reward: u128,
        percentage_reward: u128,
        unwind_factor: u128,
    ) -> usize {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .configure_pnl_setting(
                BigUint::from(price_target),
                is_take_profit,
                BigUint::from(fixed_reward),
                BigUint::from(percentage_reward),
                BigUint::from(unwind_factor),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn configure_pnl_error(
        &mut self,
        from: TestAddress,
        price_target: u128,
        is_take_profit: bool,
        unwind_factor: u128,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .configure_pnl_setting(
                BigUint::from(price_target),
                is_take_profit,
                BigUint::zero(),
                BigUint::zero(),
                BigUint::from(unwind_factor),
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn remove_pnl(&mut self, index: usize) {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .remove_pnl_setting(index)
            .run();
    }

    pub fn remove_all_pnl(&mut self) {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .remove_all_pnl_settings()
            .run();
    }

    pub fn execute_pnl(
        &mut self,
        from: TestAddress,
        index: usize,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
    ) -> UnwindResult<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .execute_pnl(index, path)
            .returns(ReturnsResult)
            .run()
    }

    /// Caller funded execution: the executor brings `repayment` DAI.
    pub fn execute_pnl_funded(
        &mut self,
        from: TestAddress,
        index: usize,
        repayment: u128,
    ) -> UnwindResult<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .execute_pnl(index, empty_path())
            .single_esdt(
                &DAI_TOKEN.to_token_identifier(),
                0,
                &BigUint::from(repayment),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute_pnl_error(
        &mut self,
        from: TestAddress,
        index: usize,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .execute_pnl(index, path)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn pnl_settings_count(&mut self) -> usize {
        let settings = self
            .world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .pnl_settings()
            .returns(ReturnsResult)
            .run();
        settings.len()
    }

    pub fn simulate_pnl(&mut self) -> Vec<PnlSimulation<StaticApi>> {
        let simulations: MultiValueEncoded<StaticApi, PnlSimulation<StaticApi>> = self
            .world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .simulate_pnl()
            .returns(ReturnsResult)
            .run();
        simulations.into_iter().collect()
    }

    // Stop loss

    pub fn configure_stop_loss(
        &mut self,
        unwind_factor: u128,
        slippage_incentive: u128,
        collateral_usage_limit: u128,
        open_to_anyone: bool,
    ) {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .configure_stop_loss(
                BigUint::from(unwind_factor),
                BigUint::from(slippage_incentive),
                BigUint::from(collateral_usage_limit),
                open_to_anyone,
            )
            .run();
    }

    pub fn configure_stop_loss_error(
        &mut self,
        unwind_factor: u128,
        slippage_incentive: u128,
        collateral_usage_limit: u128,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .configure_stop_loss(
                BigUint::from(unwind_factor),
                BigUint::from(slippage_incentive),
                BigUint::from(collateral_usage_limit),
                false,
            )
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn allow_executor(&mut self, executor: TestAddress) {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .allow_stop_loss_executor(executor)
            .run();
    }

    pub fn revoke_executor(&mut self, executor: TestAddress) {
        self.world
            .tx()
            .from(ACCOUNT_OWNER_ADDRESS)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .revoke_stop_loss_executor(executor)
            .run();
    }

    pub fn is_executor(&mut self, executor: TestAddress) -> bool {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .is_stop_loss_executor(executor)
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute_stop_loss(
        &mut self,
        from: TestAddress,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
    ) -> UnwindResult<StaticApi> {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .execute_stop_loss(path)
            .returns(ReturnsResult)
            .run()
    }

    pub fn execute_stop_loss_error(
        &mut self,
        from: TestAddress,
        path: ManagedVec<StaticApi, PathStep<StaticApi>>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from)
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .execute_stop_loss(path)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn stop_loss_config(&mut self) -> StopLossConfig<StaticApi> {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .get_stop_loss_config()
            .returns(ReturnsResult)
            .run()
    }

    pub fn simulate_stop_loss(&mut self) -> PnlSimulation<StaticApi> {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .simulate_stop_loss()
            .returns(ReturnsResult)
            .run()
    }

    // Views

    pub fn snapshot(&mut self) -> PositionSnapshot<StaticApi> {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .get_position_snapshot()
            .returns(ReturnsResult)
            .run()
    }

    pub fn collateral_usage_factor(&mut self) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .get_collateral_usage_factor()
            .returns(ReturnsResult)
            .run()
    }

    pub fn price_ratio(&mut self) -> ManagedDecimal<StaticApi, NumDecimals> {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .get_price_ratio()
            .returns(ReturnsResult)
            .run()
    }

    pub fn principal_value(&mut self) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .principal_value()
            .returns(ReturnsResult)
            .run()
    }

    pub fn is_flash_in_progress(&mut self) -> bool {
        self.world
            .query()
            .to(self.account_sc.clone())
            .typed(FoldingAccountProxy)
            .is_flash_in_progress()
            .returns(ReturnsResult)
            .run()
    }

    pub fn check_esdt_balance(
        &mut self,
        address: TestAddress,
        id: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world.check_account(address).esdt_balance(id, &amount);
    }

    pub fn check_account_sc_empty(&mut self) {
        let account_sc = self.account_sc.clone();
        for id in [WETH_TOKEN, DAI_TOKEN, USDC_TOKEN] {
            self.world
                .check_account(account_sc.clone())
                .esdt_balance(id, &BigUint::<StaticApi>::zero());
        }
    }
}

impl Default for FoldingTestState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn setup_accounts(world: &mut ScenarioWorld) {
    world.account(OWNER_ADDRESS).nonce(1);
    world
        .account(ACCOUNT_OWNER_ADDRESS)
        .nonce(1)
        .esdt_balance(WETH_TOKEN, BigUint::<StaticApi>::from(ACCOUNT_OWNER_WETH))
        .esdt_balance(USDC_TOKEN, BigUint::<StaticApi>::from(LIQUIDITY_USDC));
    world
        .account(EXECUTOR_ADDRESS)
        .nonce(1)
        .esdt_balance(DAI_TOKEN, BigUint::<StaticApi>::from(EXECUTOR_DAI));
    world
        .account(STRANGER_ADDRESS)
        .nonce(1)
        .esdt_balance(DAI_TOKEN, BigUint::<StaticApi>::from(EXECUTOR_DAI));
    world.account(SUBSIDY_HOLDER_ADDRESS).nonce(1);
}

pub fn setup_comptroller(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let comptroller = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_comptroller::ComptrollerMockProxy)
        .init(token(REWARD_TOKEN))
        .code(COMPTROLLER_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (id, decimals, usd) in [
        (WETH_TOKEN, WETH_DECIMALS, WETH_USD),
        (DAI_TOKEN, DAI_DECIMALS, 1),
        (USDC_TOKEN, USDC_DECIMALS, 1),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(comptroller.clone())
            .typed(proxy_comptroller::ComptrollerMockProxy)
            .support_market(
                token(id),
                decimals,
                wad(COLLATERAL_FACTOR),
                comptroller_price(usd, decimals),
            )
            .run();
    }

    fund_platform(world, &comptroller);
    comptroller
}

pub fn setup_aave(world: &mut ScenarioWorld) -> ManagedAddress<StaticApi> {
    let pool = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_aave_pool::AavePoolMockProxy)
        .init(token(REWARD_TOKEN))
        .code(AAVE_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (id, decimals, usd) in [
        (WETH_TOKEN, WETH_DECIMALS, WETH_USD),
        (DAI_TOKEN, DAI_DECIMALS, 1),
        (USDC_TOKEN, USDC_DECIMALS, 1),
    ] {
        world
            .tx()
            .from(OWNER_ADDRESS)
            .to(pool.clone())
            .typed(proxy_aave_pool::AavePoolMockProxy)
            .init_reserve(
                token(id),
                decimals,
                AAVE_LTV_BPS,
                AAVE_LIQUIDATION_THRESHOLD_BPS,
                aave_price(usd),
            )
            .run();
    }

    fund_platform(world, &pool);
    pool
}

/// Borrowable cash plus the reward token reserve.
fn fund_platform(world: &mut ScenarioWorld, platform: &ManagedAddress<StaticApi>) {
    world.set_esdt_balance(
        platform.clone(),
        DAI_TOKEN.as_bytes(),
        BigUint::<StaticApi>::from(LIQUIDITY_DAI),
    );
    world.set_esdt_balance(
        platform.clone(),
        USDC_TOKEN.as_bytes(),
        BigUint::<StaticApi>::from(LIQUIDITY_USDC),
    );
    world.set_esdt_balance(
        platform.clone(),
        WETH_TOKEN.as_bytes(),
        BigUint::<StaticApi>::from(LIQUIDITY_WETH),
    );
    world.set_esdt_balance(
        platform.clone(),
        REWARD_TOKEN.as_bytes(),
        BigUint::<StaticApi>::from(LIQUIDITY_DAI),
    );
}

pub fn setup_pool(
    world: &mut ScenarioWorld,
    token_a: TestTokenIdentifier,
    token_b: TestTokenIdentifier,
    fee: u32,
    price: BigUint<StaticApi>,
) -> ManagedAddress<StaticApi> {
    let pool = world
        .tx()
        .from(OWNER_ADDRESS)
        .typed(proxy_swap_pool::SwapPoolMockProxy)
        .init(token(token_a), token(token_b), fee, price)
        .code(SWAP_MOCK_PATH)
        .returns(ReturnsNewManagedAddress)
        .run();

    for (id, amount) in [
        (WETH_TOKEN, LIQUIDITY_WETH),
        (DAI_TOKEN, LIQUIDITY_DAI),
        (USDC_TOKEN, LIQUIDITY_USDC),
    ] {
        if id.as_bytes() == token_a.as_bytes() || id.as_bytes() == token_b.as_bytes() {
            world.set_esdt_balance(pool.clone(), id.as_bytes(), BigUint::<StaticApi>::from(amount));
        }
    }

    pool
}

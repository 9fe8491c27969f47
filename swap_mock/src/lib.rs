#![no_std]

use common_constants::{FEE_PRECISION, FLASH_SWAP_CALLBACK_ENDPOINT, WAD};
use common_errors::*;

multiversx_sc::imports!();

/// Two token pool with an owner controlled price.
///
/// `price` is the amount of `token_b` raw units paid for one raw unit of `token_a`,
/// WAD scaled. Exact output flash swaps send the output with a synchronous call to
/// `flashSwapCallback(token_owed, amount_owed)` on the caller and check the pool
/// balance afterwards.
#[multiversx_sc::contract]
pub trait SwapMock: common_math::SharedMathModule + multiversx_sc_modules::pause::PauseModule {
    #[init]
    fn init(
        &self,
        token_a: EgldOrEsdtTokenIdentifier,
        token_b: EgldOrEsdtTokenIdentifier,
        fee: u32,
        price: BigUint,
    ) {
        require!(token_a != token_b, ERROR_INVALID_POOL_TOKEN);
        require!(fee < FEE_PRECISION, ERROR_INVALID_FEE_TIER);
        require!(price > 0, ERROR_INVALID_PRICE);

        self.token_a().set(token_a);
        self.token_b().set(token_b);
        self.fee().set(fee);
        self.price().set(price);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setPrice)]
    fn set_price(&self, price: BigUint) {
        require!(price > 0, ERROR_INVALID_PRICE);
        self.price().set(price);
    }

    #[payable]
    #[endpoint(addLiquidity)]
    fn add_liquidity(&self) {
        let payment = self.call_value().egld_or_single_esdt();
        self.require_pool_token(&payment.token_identifier);
    }

    /// Sends exactly `amount_out` of `token_out` and expects the counter token back
    /// during the callback. Returns the amount that was owed.
    #[endpoint(flashSwap)]
    fn flash_swap(&self, token_out: EgldOrEsdtTokenIdentifier, amount_out: BigUint) -> BigUint {
        self.require_not_paused();
        require!(amount_out > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);

        let token_in = self.counter_token(&token_out);
        let amount_in = self.get_amount_in(&token_out, &amount_out);
        self.lend_and_collect(&token_out, &amount_out, &token_in, &amount_in);

        amount_in
    }

    /// Same token flash loan, repaid with the pool fee on top.
    #[endpoint(flash)]
    fn flash(&self, token: EgldOrEsdtTokenIdentifier, amount: BigUint) -> BigUint {
        self.require_not_paused();
        require!(amount > 0, ERROR_AMOUNT_MUST_BE_GREATER_THAN_ZERO);
        self.require_pool_token(&token);

        let fee_amount = self.mul_div_ceil(
            &amount,
            &BigUint::from(self.fee().get()),
            &BigUint::from(FEE_PRECISION),
        );
        let owed = &amount + &fee_amount;
        self.lend_and_collect(&token, &amount, &token, &owed);

        owed
    }

    #[payable]
    #[endpoint(swapExactInput)]
    fn swap_exact_input(&self, min_amount_out: BigUint) -> EgldOrEsdtTokenPayment {
        self.require_not_paused();
        let payment = self.call_value().egld_or_single_esdt();
        let token_out = self.counter_token(&payment.token_identifier);

        let amount_out = self.get_amount_out(&payment.token_identifier, &payment.amount);
        require!(amount_out >= min_amount_out, ERROR_TOO_LITTLE_RECEIVED);
        self.require_liquidity(&token_out, &amount_out);

        let caller = self.blockchain().get_caller();
        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token_out, 0, &amount_out)
            .transfer();

        EgldOrEsdtTokenPayment::new(token_out, 0, amount_out)
    }

    #[payable]
    #[endpoint(swapExactOutput)]
    fn swap_exact_output(
        &self,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_out: BigUint,
    ) -> EgldOrEsdtTokenPayment {
        self.require_not_paused();
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.counter_token(&token_out),
            ERROR_INVALID_POOL_TOKEN
        );

        let amount_in = self.get_amount_in(&token_out, &amount_out);
        require!(payment.amount >= amount_in, ERROR_TOO_MUCH_REQUESTED);
        self.require_liquidity(&token_out, &amount_out);

        let caller = self.blockchain().get_caller();
        let refund = &payment.amount - &amount_in;
        if refund > 0 {
            self.tx()
                .to(&caller)
                .egld_or_single_esdt(&payment.token_identifier, 0, &refund)
                .transfer();
        }

        self.tx()
            .to(&caller)
            .egld_or_single_esdt(&token_out, 0, &amount_out)
            .transfer();

        EgldOrEsdtTokenPayment::new(token_out, 0, amount_out)
    }

    #[view(quoteExactOutput)]
    fn quote_exact_output(
        &self,
        token_out: EgldOrEsdtTokenIdentifier,
        amount_out: BigUint,
    ) -> BigUint {
        self.get_amount_in(&token_out, &amount_out)
    }

    #[view(quoteExactInput)]
    fn quote_exact_input(
        &self,
        token_in: EgldOrEsdtTokenIdentifier,
        amount_in: BigUint,
    ) -> BigUint {
        self.get_amount_out(&token_in, &amount_in)
    }

    #[view(getReserves)]
    fn get_reserves(&self) -> MultiValue2<BigUint, BigUint> {
        let reserve_a = self.blockchain().get_sc_balance(&self.token_a().get(), 0);
        let reserve_b = self.blockchain().get_sc_balance(&self.token_b().get(), 0);
        (reserve_a, reserve_b).into()
    }

    fn lend_and_collect(
        &self,
        token_out: &EgldOrEsdtTokenIdentifier,
        amount_out: &BigUint,
        token_in: &EgldOrEsdtTokenIdentifier,
        amount_in: &BigUint,
    ) {
        self.require_liquidity(token_out, amount_out);
        let balance_before = self.blockchain().get_sc_balance(token_in, 0);
        let caller = self.blockchain().get_caller();

        self.tx()
            .to(&caller)
            .raw_call(ManagedBuffer::new_from_bytes(FLASH_SWAP_CALLBACK_ENDPOINT))
            .argument(token_in)
            .argument(amount_in)
            .egld_or_single_esdt(token_out, 0, amount_out)
            .sync_call();

        // For a same token flash the output left the pool before the repayment came in
        let mut expected = balance_before + amount_in;
        if token_in == token_out {
            expected -= amount_out;
        }
        let balance_after = self.blockchain().get_sc_balance(token_in, 0);
        require!(balance_after >= expected, ERROR_INSUFFICIENT_INPUT_AMOUNT);
    }

    fn get_amount_in(
        &self,
        token_out: &EgldOrEsdtTokenIdentifier,
        amount_out: &BigUint,
    ) -> BigUint {
        let price = self.price().get();
        let wad = BigUint::from(WAD);
        let base_in = if token_out == &self.token_a().get() {
            self.mul_div_ceil(amount_out, &price, &wad)
        } else {
            self.require_pool_token(token_out);
            self.mul_div_ceil(amount_out, &wad, &price)
        };

        let fee = self.fee().get();
        self.mul_div_ceil(
            &base_in,
            &BigUint::from(FEE_PRECISION),
            &BigUint::from(FEE_PRECISION - fee),
        )
    }

    fn get_amount_out(&self, token_in: &EgldOrEsdtTokenIdentifier, amount_in: &BigUint) -> BigUint {
        let fee = self.fee().get();
        let net_in = self.mul_div_floor(
            amount_in,
            &BigUint::from(FEE_PRECISION - fee),
            &BigUint::from(FEE_PRECISION),
        );

        let price = self.price().get();
        let wad = BigUint::from(WAD);
        if token_in == &self.token_a().get() {
            self.mul_div_floor(&net_in, &price, &wad)
        } else {
            self.require_pool_token(token_in);
            self.mul_div_floor(&net_in, &wad, &price)
        }
    }

    fn counter_token(&self, token: &EgldOrEsdtTokenIdentifier) -> EgldOrEsdtTokenIdentifier {
        let token_a = self.token_a().get();
        if token == &token_a {
            return self.token_b().get();
        }
        self.require_pool_token(token);
        token_a
    }

    fn require_pool_token(&self, token: &EgldOrEsdtTokenIdentifier) {
        require!(
            token == &self.token_a().get() || token == &self.token_b().get(),
            ERROR_INVALID_POOL_TOKEN
        );
    }

    fn require_liquidity(&self, token: &EgldOrEsdtTokenIdentifier, amount: &BigUint) {
        let reserve = self.blockchain().get_sc_balance(token, 0);
        require!(&reserve >= amount, ERROR_INSUFFICIENT_LIQUIDITY);
    }

    #[view(getTokenA)]
    #[storage_mapper("token_a")]
    fn token_a(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getTokenB)]
    #[storage_mapper("token_b")]
    fn token_b(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getFee)]
    #[storage_mapper("fee")]
    fn fee(&self) -> SingleValueMapper<u32>;

    #[view(getPrice)]
    #[storage_mapper("price")]
    fn price(&self) -> SingleValueMapper<BigUint>;
}

fn main() {
    multiversx_sc_meta_lib::cli_main::<aave_mock::AbiProvider>();
}

fn main() {
    multiversx_sc_meta_lib::cli_main::<folding_account::AbiProvider>();
}

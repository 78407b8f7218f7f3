fn main() {
    multiversx_sc_meta_lib::cli_main::<avatar_scheme::AbiProvider>();
}

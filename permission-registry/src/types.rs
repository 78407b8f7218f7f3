multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Allowance for calls from `from` to `(to, function)`.
///
/// `from_time == 0` means the call is not allowed. The transferred value
/// is tracked per block and reset on the first use in a new block.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct EthPermission<M: ManagedTypeApi> {
    pub value_transferred: BigUint<M>,
    pub value_transferred_on_block: u64,
    pub value_allowed: BigUint<M>,
    pub from_time: u64,
}

impl<M: ManagedTypeApi> Default for EthPermission<M> {
    fn default() -> Self {
        EthPermission {
            value_transferred: BigUint::zero(),
            value_transferred_on_block: 0,
            value_allowed: BigUint::zero(),
            from_time: 0,
        }
    }
}

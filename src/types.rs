multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Scheme — registration record kept by the controller
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Scheme<M: ManagedTypeApi> {
    /// Identifier of the configuration the scheme was registered with
    pub params_hash: ManagedBuffer<M>,
    pub is_registered: bool,
    pub can_manage_schemes: bool,
    pub can_make_avatar_calls: bool,
}

impl<M: ManagedTypeApi> Default for Scheme<M> {
    fn default() -> Self {
        Scheme {
            params_hash: ManagedBuffer::new(),
            is_registered: false,
            can_manage_schemes: false,
            can_make_avatar_calls: false,
        }
    }
}

// ============================================================
// ProposalAndScheme — one entry of the batch proposal views
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct ProposalAndScheme<M: ManagedTypeApi> {
    pub proposal_id: ManagedBuffer<M>,
    pub scheme: ManagedAddress<M>,
}

#![no_std]

multiversx_sc::imports!();

pub mod dao_controller_proxy;
pub mod types;

use dao_avatar::avatar_proxy::AvatarProxy;
use dao_reputation::reputation_proxy::ReputationProxy;
use types::{ProposalAndScheme, Scheme};

// ============================================================
// Error messages
// ============================================================

pub const ERR_SENDER_NOT_REGISTERED: &str = "DAOController: sender is not a registered scheme";
pub const ERR_SENDER_CANNOT_MANAGE_SCHEMES: &str = "DAOController: sender cannot manage schemes";
pub const ERR_SENDER_CANNOT_MAKE_AVATAR_CALLS: &str =
    "DAOController: sender cannot perform avatar calls";
pub const ERR_LAST_MANAGER_PROTECTED: &str =
    "DAOController: cannot remove the last scheme with manage schemes permission";
pub const ERR_PROPOSAL_ID_ALREADY_USED: &str = "DAOController: proposal id already used";
pub const ERR_SENDER_NOT_PROPOSER: &str = "DAOController: sender is not the scheme of the proposal";
pub const ERR_SENDER_NOT_REGISTERED_OR_PROPOSAL_INACTIVE: &str =
    "DAOController: sender is not registered or proposal is inactive";
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "DAOController: proposal is not active";
pub const ERR_START_OUT_OF_RANGE: &str = "DAOController: start cannot be bigger than list length";
pub const ERR_END_OUT_OF_RANGE: &str = "DAOController: end cannot be bigger than list length";
pub const ERR_START_BIGGER_THAN_END: &str = "DAOController: start cannot be bigger than end";

// ============================================================
// Contract
// ============================================================

/// Authorization broker between schemes, the avatar and the reputation token.
///
/// Proposal ids are owned by the scheme that started them. The owner map is
/// append-only, so an id can never be reused or reassigned.
#[multiversx_sc::contract]
pub trait DaoController {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Registers `scheme` with every permission; it is the first manager.
    #[init]
    fn init(&self, scheme: ManagedAddress, reputation: ManagedAddress, params_hash: ManagedBuffer) {
        self.schemes(&scheme).set(Scheme {
            params_hash,
            is_registered: true,
            can_manage_schemes: true,
            can_make_avatar_calls: true,
        });
        self.schemes_with_manage_schemes_permission().set(1u32);
        self.reputation().set(&reputation);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: registerScheme
    // Overwrites the whole record of `scheme`, including the caller's own.
    // ========================================================

    #[endpoint(registerScheme)]
    fn register_scheme(
        &self,
        scheme: ManagedAddress,
        params_hash: ManagedBuffer,
        can_manage_schemes: bool,
        can_make_avatar_calls: bool,
    ) -> bool {
        let caller = self.require_scheme_manager();

        let current = self.get_scheme(&scheme);
        let had_manage_permission = current.is_registered && current.can_manage_schemes;
        if !had_manage_permission && can_manage_schemes {
            self.schemes_with_manage_schemes_permission()
                .update(|count| *count += 1);
        } else if had_manage_permission && !can_manage_schemes {
            self.revoke_manage_schemes_permission();
        }

        self.schemes(&scheme).set(Scheme {
            params_hash,
            is_registered: true,
            can_manage_schemes,
            can_make_avatar_calls,
        });

        self.register_scheme_event(&caller, &scheme);
        true
    }

    // ========================================================
    // ENDPOINT: unregisterScheme
    // Returns false when `scheme` is not registered.
    // ========================================================

    #[endpoint(unregisterScheme)]
    fn unregister_scheme(&self, scheme: ManagedAddress) -> bool {
        let caller = self.require_scheme_manager();

        let current = self.get_scheme(&scheme);
        if !current.is_registered {
            return false;
        }
        if current.can_manage_schemes {
            self.revoke_manage_schemes_permission();
        }

        self.schemes(&scheme).clear();

        self.unregister_scheme_event(&caller, &scheme);
        true
    }

    fn revoke_manage_schemes_permission(&self) {
        let count = self.schemes_with_manage_schemes_permission().get();
        require!(count > 1, ERR_LAST_MANAGER_PROTECTED);
        self.schemes_with_manage_schemes_permission().set(count - 1);
    }

    // ========================================================
    // ENDPOINT: avatarCall
    // Forwards to the avatar verbatim; the result is not interpreted.
    // ========================================================

    #[endpoint(avatarCall)]
    fn avatar_call(
        &self,
        avatar: ManagedAddress,
        to: ManagedAddress,
        function: ManagedBuffer,
        value: BigUint,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValue2<bool, ManagedVec<ManagedBuffer>> {
        let (_, scheme) = self.require_registered_scheme();
        require!(scheme.can_make_avatar_calls, ERR_SENDER_CANNOT_MAKE_AVATAR_CALLS);

        self.tx()
            .to(&avatar)
            .typed(AvatarProxy)
            .execute_call(to, function, value, arguments)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // ENDPOINTS: proposal tracking
    // ========================================================

    #[endpoint(startProposal)]
    fn start_proposal(&self, proposal_id: ManagedBuffer) {
        let (caller, _) = self.require_registered_scheme();
        require!(
            self.scheme_of_proposal(&proposal_id).is_empty(),
            ERR_PROPOSAL_ID_ALREADY_USED
        );

        self.active_proposals().insert(proposal_id.clone());
        self.scheme_of_proposal(&proposal_id).set(&caller);

        self.proposal_started_event(&proposal_id, &caller);
    }

    /// Closes a proposal of the caller. A scheme that has been unregistered
    /// can still close the proposals it left active.
    #[endpoint(endProposal)]
    fn end_proposal(&self, proposal_id: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let owner = self.scheme_of_proposal(&proposal_id);
        require!(
            !owner.is_empty() && owner.get() == caller,
            ERR_SENDER_NOT_PROPOSER
        );

        let is_active = self.active_proposals().contains(&proposal_id);
        require!(
            self.get_scheme(&caller).is_registered || is_active,
            ERR_SENDER_NOT_REGISTERED_OR_PROPOSAL_INACTIVE
        );
        require!(is_active, ERR_PROPOSAL_NOT_ACTIVE);

        self.active_proposals().swap_remove(&proposal_id);
        self.inactive_proposals().insert(proposal_id.clone());

        self.proposal_ended_event(&proposal_id, &caller);
    }

    // ========================================================
    // ENDPOINTS: reputation bridge
    // ========================================================

    #[endpoint(mintReputation)]
    fn mint_reputation(&self, amount: BigUint, account: ManagedAddress) -> bool {
        self.require_registered_scheme();

        self.tx()
            .to(&self.reputation().get())
            .typed(ReputationProxy)
            .mint(account, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[endpoint(burnReputation)]
    fn burn_reputation(&self, amount: BigUint, account: ManagedAddress) -> bool {
        self.require_registered_scheme();

        self.tx()
            .to(&self.reputation().get())
            .typed(ReputationProxy)
            .burn(account, amount)
            .returns(ReturnsResult)
            .sync_call()
    }

    // ========================================================
    // INTERNAL: caller checks
    // ========================================================

    fn require_registered_scheme(&self) -> (ManagedAddress, Scheme<Self::Api>) {
        let caller = self.blockchain().get_caller();
        let scheme = self.get_scheme(&caller);
        require!(scheme.is_registered, ERR_SENDER_NOT_REGISTERED);
        (caller, scheme)
    }

    fn require_scheme_manager(&self) -> ManagedAddress {
        let (caller, scheme) = self.require_registered_scheme();
        require!(scheme.can_manage_schemes, ERR_SENDER_CANNOT_MANAGE_SCHEMES);
        caller
    }

    fn get_scheme(&self, scheme: &ManagedAddress) -> Scheme<Self::Api> {
        let mapper = self.schemes(scheme);
        if mapper.is_empty() {
            Scheme::default()
        } else {
            mapper.get()
        }
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    /// `end == 0` selects through the last element; the range is inclusive.
    #[view(getActiveProposals)]
    fn get_active_proposals(
        &self,
        start: usize,
        end: usize,
    ) -> ManagedVec<ProposalAndScheme<Self::Api>> {
        self.proposals_batch(start, end, self.active_proposals())
    }

    /// `end == 0` selects through the last element; the range is inclusive.
    #[view(getInactiveProposals)]
    fn get_inactive_proposals(
        &self,
        start: usize,
        end: usize,
    ) -> ManagedVec<ProposalAndScheme<Self::Api>> {
        self.proposals_batch(start, end, self.inactive_proposals())
    }

    fn proposals_batch(
        &self,
        start: usize,
        end: usize,
        proposals: UnorderedSetMapper<ManagedBuffer>,
    ) -> ManagedVec<ProposalAndScheme<Self::Api>> {
        let mut result = ManagedVec::new();
        let total = proposals.len();
        if total == 0 {
            return result;
        }

        require!(start < total, ERR_START_OUT_OF_RANGE);
        require!(end < total, ERR_END_OUT_OF_RANGE);
        let last = if end == 0 { total - 1 } else { end };
        require!(start <= last, ERR_START_BIGGER_THAN_END);

        // UnorderedSetMapper indexes from 1
        for index in start..=last {
            let proposal_id = proposals.get_by_index(index + 1);
            let scheme = self.scheme_of_proposal(&proposal_id).get();
            result.push(ProposalAndScheme { proposal_id, scheme });
        }
        result
    }

    #[view(getActiveProposalsCount)]
    fn get_active_proposals_count(&self) -> usize {
        self.active_proposals().len()
    }

    #[view(getInactiveProposalsCount)]
    fn get_inactive_proposals_count(&self) -> usize {
        self.inactive_proposals().len()
    }

    #[view(isProposalActive)]
    fn is_proposal_active(&self, proposal_id: ManagedBuffer) -> bool {
        self.active_proposals().contains(&proposal_id)
    }

    #[view(getSchemeOfProposal)]
    fn get_scheme_of_proposal(&self, proposal_id: ManagedBuffer) -> ManagedAddress {
        let owner = self.scheme_of_proposal(&proposal_id);
        if owner.is_empty() {
            ManagedAddress::zero()
        } else {
            owner.get()
        }
    }

    #[view(isSchemeRegistered)]
    fn is_scheme_registered(&self, scheme: ManagedAddress) -> bool {
        self.get_scheme(&scheme).is_registered
    }

    #[view(getSchemeParameters)]
    fn get_scheme_parameters(&self, scheme: ManagedAddress) -> ManagedBuffer {
        self.get_scheme(&scheme).params_hash
    }

    #[view(getSchemeCanManageSchemes)]
    fn get_scheme_can_manage_schemes(&self, scheme: ManagedAddress) -> bool {
        self.get_scheme(&scheme).can_manage_schemes
    }

    #[view(getSchemeCanMakeAvatarCalls)]
    fn get_scheme_can_make_avatar_calls(&self, scheme: ManagedAddress) -> bool {
        self.get_scheme(&scheme).can_make_avatar_calls
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("registerScheme")]
    fn register_scheme_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] scheme: &ManagedAddress,
    );

    #[event("unregisterScheme")]
    fn unregister_scheme_event(
        &self,
        #[indexed] sender: &ManagedAddress,
        #[indexed] scheme: &ManagedAddress,
    );

    #[event("proposalStarted")]
    fn proposal_started_event(
        &self,
        #[indexed] proposal_id: &ManagedBuffer,
        #[indexed] scheme: &ManagedAddress,
    );

    #[event("proposalEnded")]
    fn proposal_ended_event(
        &self,
        #[indexed] proposal_id: &ManagedBuffer,
        #[indexed] scheme: &ManagedAddress,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("schemes")]
    fn schemes(&self, scheme: &ManagedAddress) -> SingleValueMapper<Scheme<Self::Api>>;

    #[view(getSchemesWithManageSchemesPermissionsCount)]
    #[storage_mapper("schemesWithManageSchemesPermission")]
    fn schemes_with_manage_schemes_permission(&self) -> SingleValueMapper<u32>;

    #[view(getDaoReputation)]
    #[storage_mapper("reputation")]
    fn reputation(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    /// Never cleared: proposal ids are not reusable.
    #[storage_mapper("schemeOfProposal")]
    fn scheme_of_proposal(&self, proposal_id: &ManagedBuffer) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("activeProposals")]
    fn active_proposals(&self) -> UnorderedSetMapper<ManagedBuffer>;

    #[storage_mapper("inactiveProposals")]
    fn inactive_proposals(&self) -> UnorderedSetMapper<ManagedBuffer>;
}

#![no_std]

multiversx_sc::imports!();

pub mod avatar_scheme_proxy;
pub mod types;

use dao_controller::dao_controller_proxy::DaoControllerProxy;
use dao_reputation::reputation_proxy::ReputationProxy;
use permission_registry::permission_registry_proxy::PermissionRegistryProxy;
use types::{CallAction, Proposal, ProposalCall, ProposalState};

// ============================================================
// Constants
// ============================================================

/// Lower bound for the execution window: 24 hours in seconds
pub const MIN_SECONDS_FOR_EXECUTION: u64 = 86_400;

/// Execution window right after deployment: 24 hours in seconds
pub const DEFAULT_MAX_SECONDS_FOR_EXECUTION: u64 = 86_400;

/// Reputation supply change is bounded in whole percents
pub const MAX_REP_PERCENTAGE: u64 = 100;

/// Winning option meaning "reject"; approve options are numbered from 1
pub const REJECT_OPTION: u32 = 0;

pub const SCHEME_TYPE: &[u8] = b"AvatarScheme_v1";

const SET_ESDT_BALANCES_FUNCTION: &[u8] = b"setEsdtBalances";
const SET_ETH_PERMISSION_USED_FUNCTION: &[u8] = b"setEthPermissionUsed";

// ============================================================
// Error messages
// ============================================================

pub const ERR_ONLY_AVATAR: &str = "AvatarScheme: only the avatar can call this";
pub const ERR_ONLY_VOTING_MACHINE: &str = "AvatarScheme: only the voting machine can execute";
pub const ERR_PROPOSAL_ALREADY_EXECUTING: &str =
    "AvatarScheme: proposal execution already running";
pub const ERR_PROPOSAL_NOT_SUBMITTED: &str = "AvatarScheme: proposal is not in submitted state";
pub const ERR_MAX_SECONDS_TOO_LOW: &str =
    "AvatarScheme: max seconds for execution must be at least 86400";
pub const ERR_INVALID_REP_PERCENTAGE: &str =
    "AvatarScheme: max rep percentage change must be at most 100";
pub const ERR_NO_CALLS: &str = "AvatarScheme: proposal needs at least one call";
pub const ERR_INVALID_TOTAL_OPTIONS: &str = "AvatarScheme: total options must be at least 1";
pub const ERR_CALLS_NOT_DIVISIBLE: &str = "AvatarScheme: calls must divide evenly between options";
pub const ERR_INVALID_WINNING_OPTION: &str = "AvatarScheme: winning option out of range";
pub const ERR_INVALID_REPUTATION_CALL: &str = "AvatarScheme: malformed reputation call arguments";
pub const ERR_PERMISSION_CHECK_FAILED: &str = "AvatarScheme: setEthPermissionUsed failed";
pub const ERR_CALL_FAILED: &str = "AvatarScheme: call execution failed";
pub const ERR_REP_CHANGE_EXCEEDED: &str =
    "AvatarScheme: reputation supply change exceeds the limit";
pub const ERR_ESDT_LIMITS_EXCEEDED: &str = "AvatarScheme: ESDT limits exceeded";

// ============================================================
// Contract
// ============================================================

/// Stores call batches and executes the winning one through the avatar.
///
/// Execution is all or nothing: any failing call, permission check or
/// post-condition fails the transaction, which discards every effect of
/// the batch including the optimistic `ExecutionSucceeded` state.
#[multiversx_sc::contract]
pub trait AvatarScheme {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        controller: ManagedAddress,
        avatar: ManagedAddress,
        voting_machine: ManagedAddress,
        permission_registry: ManagedAddress,
        scheme_name: ManagedBuffer,
        max_rep_percentage_change: u64,
    ) {
        require!(
            max_rep_percentage_change <= MAX_REP_PERCENTAGE,
            ERR_INVALID_REP_PERCENTAGE
        );

        self.controller().set(&controller);
        self.avatar().set(&avatar);
        self.voting_machine().set(&voting_machine);
        self.permission_registry().set(&permission_registry);
        self.scheme_name().set(&scheme_name);
        self.max_rep_percentage_change().set(max_rep_percentage_change);
        self.max_seconds_for_execution()
            .set(DEFAULT_MAX_SECONDS_FOR_EXECUTION);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(setMaxSecondsForExecution)]
    fn set_max_seconds_for_execution(&self, seconds: u64) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.avatar().get(), ERR_ONLY_AVATAR);
        require!(seconds >= MIN_SECONDS_FOR_EXECUTION, ERR_MAX_SECONDS_TOO_LOW);

        self.max_seconds_for_execution().set(seconds);
    }

    // ========================================================
    // ENDPOINT: proposeCalls
    // Calls are split in `total_options` equal, contiguous slices;
    // approve option `n` owns slice `n - 1`.
    // ========================================================

    #[endpoint(proposeCalls)]
    fn propose_calls(
        &self,
        total_options: u32,
        title: ManagedBuffer,
        description_hash: ManagedBuffer,
        calls: MultiValueEncoded<ProposalCall<Self::Api>>,
    ) -> ManagedBuffer {
        require!(total_options > 0, ERR_INVALID_TOTAL_OPTIONS);

        let proposal_id = self.next_proposal_id();
        let mut calls_mapper = self.proposal_calls(&proposal_id);
        for call in calls.into_iter() {
            calls_mapper.push(&call);
        }

        let call_count = calls_mapper.len();
        require!(call_count > 0, ERR_NO_CALLS);
        require!(
            call_count % total_options as usize == 0,
            ERR_CALLS_NOT_DIVISIBLE
        );

        let proposal = Proposal {
            proposer: self.blockchain().get_caller(),
            title,
            description_hash,
            state: ProposalState::Submitted,
            submitted_time: self.blockchain().get_block_timestamp(),
            total_options,
        };
        self.proposals(&proposal_id).set(&proposal);
        self.proposal_list().push(&proposal_id);

        self.tx()
            .to(&self.controller().get())
            .typed(DaoControllerProxy)
            .start_proposal(proposal_id.clone())
            .sync_call();

        self.proposal_state_change_event(&proposal_id, ProposalState::Submitted);
        proposal_id
    }

    fn next_proposal_id(&self) -> ManagedBuffer {
        let nonce = self.proposal_nonce().update(|nonce| {
            *nonce += 1;
            *nonce
        });

        let mut seed = self.blockchain().get_sc_address().as_managed_buffer().clone();
        seed.append_bytes(&nonce.to_be_bytes());
        self.crypto().keccak256(&seed).as_managed_buffer().clone()
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Timeout is checked before the vote outcome, so an expired
    // proposal never runs, whatever option won.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: ManagedBuffer, winning_option: u32) -> bool {
        require!(
            !self.executing_proposal().get(),
            ERR_PROPOSAL_ALREADY_EXECUTING
        );
        let caller = self.blockchain().get_caller();
        require!(caller == self.voting_machine().get(), ERR_ONLY_VOTING_MACHINE);
        self.executing_proposal().set(true);

        let proposal_mapper = self.proposals(&proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_SUBMITTED);
        let mut proposal = proposal_mapper.get();
        require!(
            proposal.state == ProposalState::Submitted,
            ERR_PROPOSAL_NOT_SUBMITTED
        );

        let now = self.blockchain().get_block_timestamp();
        let deadline = proposal
            .submitted_time
            .saturating_add(self.max_seconds_for_execution().get());

        if now > deadline {
            proposal.state = ProposalState::ExecutionTimeout;
            proposal_mapper.set(&proposal);
        } else if winning_option == REJECT_OPTION {
            proposal.state = ProposalState::Rejected;
            proposal_mapper.set(&proposal);
        } else {
            require!(
                winning_option <= proposal.total_options,
                ERR_INVALID_WINNING_OPTION
            );

            // Calls made during the batch already observe the proposal as succeeded
            proposal.state = ProposalState::ExecutionSucceeded;
            proposal_mapper.set(&proposal);

            self.execute_winning_calls(&proposal_id, proposal.total_options, winning_option);
        }

        self.proposal_state_change_event(&proposal_id, proposal.state);

        self.tx()
            .to(&self.controller().get())
            .typed(DaoControllerProxy)
            .end_proposal(proposal_id)
            .sync_call();

        self.executing_proposal().set(false);
        true
    }

    fn execute_winning_calls(
        &self,
        proposal_id: &ManagedBuffer,
        total_options: u32,
        winning_option: u32,
    ) {
        let controller = self.controller().get();
        let registry = self.permission_registry().get();
        let old_rep_supply = self.reputation_supply(&controller);

        self.call_through_avatar(
            &registry,
            ManagedBuffer::from(SET_ESDT_BALANCES_FUNCTION),
            BigUint::zero(),
            MultiValueEncoded::new(),
        );

        let calls = self.proposal_calls(proposal_id);
        let calls_per_option = calls.len() / total_options as usize;
        let first_call = calls_per_option * (winning_option - 1) as usize;

        // VecMapper indexes from 1
        for index in first_call..first_call + calls_per_option {
            let call = calls.get(index + 1);
            let action = CallAction::from_call(call, &controller)
                .unwrap_or_else(|| sc_panic!(ERR_INVALID_REPUTATION_CALL));

            match action {
                CallAction::MintReputation { amount, account } => {
                    let minted: bool = self
                        .tx()
                        .to(&controller)
                        .typed(DaoControllerProxy)
                        .mint_reputation(amount, account)
                        .returns(ReturnsResult)
                        .sync_call();
                    require!(minted, ERR_CALL_FAILED);
                }
                CallAction::BurnReputation { amount, account } => {
                    let burned: bool = self
                        .tx()
                        .to(&controller)
                        .typed(DaoControllerProxy)
                        .burn_reputation(amount, account)
                        .returns(ReturnsResult)
                        .sync_call();
                    require!(burned, ERR_CALL_FAILED);
                }
                CallAction::GenericCall(call) => self.execute_generic_call(&registry, call),
            }
        }

        let new_rep_supply = self.reputation_supply(&controller);
        self.require_rep_supply_within_bounds(&old_rep_supply, &new_rep_supply);

        let within_limits: bool = self
            .tx()
            .to(&registry)
            .typed(PermissionRegistryProxy)
            .check_esdt_limits(self.avatar().get())
            .returns(ReturnsResult)
            .sync_call();
        require!(within_limits, ERR_ESDT_LIMITS_EXCEEDED);
    }

    fn execute_generic_call(&self, registry: &ManagedAddress, call: ProposalCall<Self::Api>) {
        let mut permission_arguments = MultiValueEncoded::new();
        permission_arguments.push(self.avatar().get().as_managed_buffer().clone());
        permission_arguments.push(call.to.as_managed_buffer().clone());
        permission_arguments.push(call.function.clone());
        permission_arguments.push(call.value.to_bytes_be_buffer());

        let permitted = self.call_through_avatar(
            registry,
            ManagedBuffer::from(SET_ETH_PERMISSION_USED_FUNCTION),
            BigUint::zero(),
            permission_arguments,
        );
        require!(permitted, ERR_PERMISSION_CHECK_FAILED);

        let succeeded = self.call_through_avatar(
            &call.to,
            call.function,
            call.value,
            MultiValueEncoded::from(call.arguments),
        );
        require!(succeeded, ERR_CALL_FAILED);
    }

    fn call_through_avatar(
        &self,
        to: &ManagedAddress,
        function: ManagedBuffer,
        value: BigUint,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> bool {
        let (success, _) = self
            .tx()
            .to(&self.controller().get())
            .typed(DaoControllerProxy)
            .avatar_call(self.avatar().get(), to.clone(), function, value, arguments)
            .returns(ReturnsResult)
            .sync_call()
            .into_tuple();
        success
    }

    fn reputation_supply(&self, controller: &ManagedAddress) -> BigUint {
        let reputation = self
            .tx()
            .to(controller)
            .typed(DaoControllerProxy)
            .reputation()
            .returns(ReturnsResult)
            .sync_call();

        self.tx()
            .to(&reputation)
            .typed(ReputationProxy)
            .total_supply()
            .returns(ReturnsResult)
            .sync_call()
    }

    /// Both bounds are inclusive.
    fn require_rep_supply_within_bounds(&self, old_supply: &BigUint, new_supply: &BigUint) {
        let max_change = self.max_rep_percentage_change().get();
        let hundred = BigUint::from(MAX_REP_PERCENTAGE);
        let lower_bound =
            &(old_supply * &BigUint::from(MAX_REP_PERCENTAGE - max_change)) / &hundred;
        let upper_bound =
            &(old_supply * &BigUint::from(MAX_REP_PERCENTAGE + max_change)) / &hundred;

        require!(
            *new_supply >= lower_bound && *new_supply <= upper_bound,
            ERR_REP_CHANGE_EXCEEDED
        );
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getSchemeType)]
    fn get_scheme_type(&self) -> ManagedBuffer {
        ManagedBuffer::from(SCHEME_TYPE)
    }

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: ManagedBuffer) -> OptionalValue<Proposal<Self::Api>> {
        let mapper = self.proposals(&proposal_id);
        if mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(mapper.get())
        }
    }

    #[view(getProposalState)]
    fn get_proposal_state(&self, proposal_id: ManagedBuffer) -> ProposalState {
        let mapper = self.proposals(&proposal_id);
        if mapper.is_empty() {
            ProposalState::None
        } else {
            mapper.get().state
        }
    }

    #[view(getProposalCalls)]
    fn get_proposal_calls(
        &self,
        proposal_id: ManagedBuffer,
    ) -> MultiValueEncoded<ProposalCall<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for call in self.proposal_calls(&proposal_id).iter() {
            result.push(call);
        }
        result
    }

    #[view(getOrganizationProposals)]
    fn get_organization_proposals(&self) -> MultiValueEncoded<ManagedBuffer> {
        let mut result = MultiValueEncoded::new();
        for proposal_id in self.proposal_list().iter() {
            result.push(proposal_id);
        }
        result
    }

    #[view(getOrganizationProposalsCount)]
    fn get_organization_proposals_count(&self) -> usize {
        self.proposal_list().len()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalStateChange")]
    fn proposal_state_change_event(
        &self,
        #[indexed] proposal_id: &ManagedBuffer,
        state: ProposalState,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getAvatar)]
    #[storage_mapper("avatar")]
    fn avatar(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getVotingMachine)]
    #[storage_mapper("votingMachine")]
    fn voting_machine(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getPermissionRegistry)]
    #[storage_mapper("permissionRegistry")]
    fn permission_registry(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(getSchemeName)]
    #[storage_mapper("schemeName")]
    fn scheme_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[view(getMaxSecondsForExecution)]
    #[storage_mapper("maxSecondsForExecution")]
    fn max_seconds_for_execution(&self) -> SingleValueMapper<u64>;

    #[view(getMaxRepPercentageChange)]
    #[storage_mapper("maxRepPercentageChange")]
    fn max_rep_percentage_change(&self) -> SingleValueMapper<u64>;

    // ── Proposals ──

    #[storage_mapper("proposalNonce")]
    fn proposal_nonce(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: &ManagedBuffer) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("proposalCalls")]
    fn proposal_calls(&self, proposal_id: &ManagedBuffer) -> VecMapper<ProposalCall<Self::Api>>;

    #[storage_mapper("proposalList")]
    fn proposal_list(&self) -> VecMapper<ManagedBuffer>;

    // ── Re-entrancy guard ──

    #[storage_mapper("executingProposal")]
    fn executing_proposal(&self) -> SingleValueMapper<bool>;
}

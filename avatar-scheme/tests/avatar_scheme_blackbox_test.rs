use multiversx_sc_scenario::imports::*;

use avatar_scheme::{avatar_scheme_proxy::AvatarSchemeProxy, types::{ProposalCall, ProposalState}};
use dao_avatar::avatar_proxy::AvatarProxy;
use dao_controller::dao_controller_proxy::DaoControllerProxy;
use dao_reputation::reputation_proxy::ReputationProxy;
use permission_registry::permission_registry_proxy::PermissionRegistryProxy;

const OWNER: TestAddress = TestAddress::new("owner");
const MANAGER: TestAddress = TestAddress::new("manager");
const PROPOSER: TestAddress = TestAddress::new("proposer");
const VOTING_MACHINE: TestAddress = TestAddress::new("voting-machine");
const HOLDER: TestAddress = TestAddress::new("holder");
const RECIPIENT: TestAddress = TestAddress::new("recipient");
const STRANGER: TestAddress = TestAddress::new("stranger");

const GOV_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("GOV-123456");

const CONTROLLER_ADDRESS: TestSCAddress = TestSCAddress::new("controller");
const AVATAR_ADDRESS: TestSCAddress = TestSCAddress::new("avatar");
const REPUTATION_ADDRESS: TestSCAddress = TestSCAddress::new("reputation");
const REGISTRY_ADDRESS: TestSCAddress = TestSCAddress::new("permission-registry");
const SCHEME_ADDRESS: TestSCAddress = TestSCAddress::new("avatar-scheme");

const CONTROLLER_CODE: MxscPath = MxscPath::new("../output/dao-controller.mxsc.json");
const AVATAR_CODE: MxscPath = MxscPath::new("../avatar/output/dao-avatar.mxsc.json");
const REPUTATION_CODE: MxscPath = MxscPath::new("../reputation/output/dao-reputation.mxsc.json");
const REGISTRY_CODE: MxscPath =
    MxscPath::new("../permission-registry/output/permission-registry.mxsc.json");
const SCHEME_CODE: MxscPath = MxscPath::new("output/avatar-scheme.mxsc.json");

const START_TIMESTAMP: u64 = 1_000;
const ONE_DAY: u64 = 86_400;
const AVATAR_FUNDS: u64 = 1_000;
const INITIAL_REPUTATION: u64 = 1_000;
const MAX_REP_PERCENTAGE_CHANGE: u64 = 10;
const AVATAR_TOKENS: u64 = 500;
const TOKEN_LIMIT: u64 = 100;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(CONTROLLER_CODE, dao_controller::ContractBuilder);
    blockchain.register_contract(AVATAR_CODE, dao_avatar::ContractBuilder);
    blockchain.register_contract(REPUTATION_CODE, dao_reputation::ContractBuilder);
    blockchain.register_contract(REGISTRY_CODE, permission_registry::ContractBuilder);
    blockchain.register_contract(SCHEME_CODE, avatar_scheme::ContractBuilder);
    blockchain
}

fn address_of(address: TestAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn sc_address_of(address: TestSCAddress) -> ManagedAddress<StaticApi> {
    ManagedAddress::from(address.to_address())
}

fn encoded<T: TopEncode>(value: T) -> ManagedBuffer<StaticApi> {
    let mut buffer = ManagedBuffer::new();
    value.top_encode(&mut buffer).unwrap();
    buffer
}

fn transfer(to: TestAddress, amount: u64) -> ProposalCall<StaticApi> {
    ProposalCall {
        to: address_of(to),
        function: ManagedBuffer::new(),
        arguments: ManagedVec::new(),
        value: BigUint::from(amount),
    }
}

fn reputation_call(function: &str, amount: u64, account: TestAddress) -> ProposalCall<StaticApi> {
    let mut arguments = ManagedVec::new();
    arguments.push(BigUint::<StaticApi>::from(amount).to_bytes_be_buffer());
    arguments.push(address_of(account).as_managed_buffer().clone());

    ProposalCall {
        to: sc_address_of(CONTROLLER_ADDRESS),
        function: ManagedBuffer::from(function),
        arguments,
        value: BigUint::zero(),
    }
}

fn scheme_call(
    function: &str,
    arguments: ManagedVec<StaticApi, ManagedBuffer<StaticApi>>,
) -> ProposalCall<StaticApi> {
    ProposalCall {
        to: sc_address_of(SCHEME_ADDRESS),
        function: ManagedBuffer::from(function),
        arguments,
        value: BigUint::zero(),
    }
}

fn token_transfer(to: TestAddress, amount: u64) -> ProposalCall<StaticApi> {
    let mut arguments = ManagedVec::new();
    arguments.push(address_of(to).as_managed_buffer().clone());
    arguments.push(GOV_TOKEN.to_token_identifier().as_managed_buffer().clone());
    arguments.push(BigUint::<StaticApi>::from(amount).to_bytes_be_buffer());

    ProposalCall {
        to: sc_address_of(AVATAR_ADDRESS),
        function: ManagedBuffer::from("transferEsdt"),
        arguments,
        value: BigUint::zero(),
    }
}

fn allow_avatar_call(
    world: &mut ScenarioWorld,
    to: ManagedAddress<StaticApi>,
    function: &str,
    value_allowed: u64,
) {
    world
        .tx()
        .from(OWNER)
        .to(REGISTRY_ADDRESS)
        .typed(PermissionRegistryProxy)
        .set_eth_permission(
            sc_address_of(AVATAR_ADDRESS),
            to,
            ManagedBuffer::from(function),
            value_allowed,
            true,
        )
        .run();
}

fn setup() -> ScenarioWorld {
    let mut world = world();
    world
        .current_block()
        .block_nonce(10)
        .block_timestamp(START_TIMESTAMP);

    world
        .account(OWNER)
        .nonce(1)
        .balance(AVATAR_FUNDS)
        .esdt_balance(GOV_TOKEN, AVATAR_TOKENS);
    world.account(MANAGER).nonce(1);
    world.account(PROPOSER).nonce(1);
    world.account(VOTING_MACHINE).nonce(1);
    world.account(HOLDER).nonce(1);
    world.account(RECIPIENT).nonce(1);
    world.account(STRANGER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .typed(ReputationProxy)
        .init(sc_address_of(CONTROLLER_ADDRESS))
        .code(REPUTATION_CODE)
        .new_address(REPUTATION_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(AvatarProxy)
        .init(sc_address_of(CONTROLLER_ADDRESS))
        .code(AVATAR_CODE)
        .new_address(AVATAR_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(DaoControllerProxy)
        .init(
            address_of(MANAGER),
            sc_address_of(REPUTATION_ADDRESS),
            ManagedBuffer::from("manager-params"),
        )
        .code(CONTROLLER_CODE)
        .new_address(CONTROLLER_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(PermissionRegistryProxy)
        .init()
        .code(REGISTRY_CODE)
        .new_address(REGISTRY_ADDRESS)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(AvatarSchemeProxy)
        .init(
            sc_address_of(CONTROLLER_ADDRESS),
            sc_address_of(AVATAR_ADDRESS),
            address_of(VOTING_MACHINE),
            sc_address_of(REGISTRY_ADDRESS),
            ManagedBuffer::from("treasury"),
            MAX_REP_PERCENTAGE_CHANGE,
        )
        .code(SCHEME_CODE)
        .new_address(SCHEME_ADDRESS)
        .run();

    world
        .tx()
        .from(MANAGER)
        .to(CONTROLLER_ADDRESS)
        .typed(DaoControllerProxy)
        .register_scheme(
            sc_address_of(SCHEME_ADDRESS),
            ManagedBuffer::from("scheme-params"),
            false,
            true,
        )
        .run();

    world
        .tx()
        .from(MANAGER)
        .to(CONTROLLER_ADDRESS)
        .typed(DaoControllerProxy)
        .mint_reputation(INITIAL_REPUTATION, address_of(HOLDER))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(AVATAR_ADDRESS)
        .typed(AvatarProxy)
        .deposit()
        .egld(AVATAR_FUNDS)
        .run();

    // Per-block EGLD budget of the avatar
    allow_avatar_call(&mut world, ManagedAddress::zero(), "", AVATAR_FUNDS);

    world
}

fn setup_with_tokens() -> ScenarioWorld {
    let mut world = setup();

    world
        .tx()
        .from(OWNER)
        .to(AVATAR_ADDRESS)
        .typed(AvatarProxy)
        .deposit()
        .single_esdt(&GOV_TOKEN.to_token_identifier(), 0, &BigUint::from(AVATAR_TOKENS))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(REGISTRY_ADDRESS)
        .typed(PermissionRegistryProxy)
        .add_esdt_limit(
            sc_address_of(AVATAR_ADDRESS),
            GOV_TOKEN.to_token_identifier(),
            TOKEN_LIMIT,
        )
        .run();

    allow_avatar_call(&mut world, sc_address_of(AVATAR_ADDRESS), "transferEsdt", 0);

    world
}

fn propose(
    world: &mut ScenarioWorld,
    total_options: u32,
    calls: Vec<ProposalCall<StaticApi>>,
) -> ManagedBuffer<StaticApi> {
    let mut encoded_calls = MultiValueEncoded::new();
    for call in calls {
        encoded_calls.push(call);
    }

    world
        .tx()
        .from(PROPOSER)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .propose_calls(
            total_options,
            ManagedBuffer::from("Pay contributors"),
            ManagedBuffer::from("description-hash"),
            encoded_calls,
        )
        .returns(ReturnsResult)
        .run()
}

fn execute(world: &mut ScenarioWorld, proposal_id: &ManagedBuffer<StaticApi>, winning_option: u32) {
    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), winning_option)
        .run();
}

fn check_state(
    world: &mut ScenarioWorld,
    proposal_id: &ManagedBuffer<StaticApi>,
    state: ProposalState,
) {
    world
        .query()
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .get_proposal_state(proposal_id.clone())
        .returns(ExpectValue(state))
        .run();
}

fn check_active(world: &mut ScenarioWorld, proposal_id: &ManagedBuffer<StaticApi>, active: bool) {
    world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(DaoControllerProxy)
        .is_proposal_active(proposal_id.clone())
        .returns(ExpectValue(active))
        .run();
}

fn check_reputation_supply(world: &mut ScenarioWorld, supply: u64) {
    world
        .query()
        .to(REPUTATION_ADDRESS)
        .typed(ReputationProxy)
        .total_supply()
        .returns(ExpectValue(BigUint::<StaticApi>::from(supply)))
        .run();
}

// ============================================================
// Proposing
// ============================================================

#[test]
fn proposal_is_registered_with_the_controller() {
    let mut world = setup();

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
    check_active(&mut world, &proposal_id, true);

    world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(DaoControllerProxy)
        .get_scheme_of_proposal(proposal_id.clone())
        .returns(ExpectValue(sc_address_of(SCHEME_ADDRESS)))
        .run();

    world
        .query()
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .get_organization_proposals_count()
        .returns(ExpectValue(1usize))
        .run();
}

#[test]
fn consecutive_proposals_get_distinct_ids() {
    let mut world = setup();

    let first = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);
    let second = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);

    assert_ne!(first, second);
    world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(DaoControllerProxy)
        .get_active_proposals_count()
        .returns(ExpectValue(2usize))
        .run();
}

#[test]
fn proposal_without_calls_is_rejected() {
    let mut world = setup();

    world
        .tx()
        .from(PROPOSER)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .propose_calls(
            1u32,
            ManagedBuffer::from("Empty"),
            ManagedBuffer::from("description-hash"),
            MultiValueEncoded::<StaticApi, ProposalCall<StaticApi>>::new(),
        )
        .returns(ExpectError(4, avatar_scheme::ERR_NO_CALLS))
        .run();
}

#[test]
fn proposal_options_must_split_calls_evenly() {
    let mut world = setup();

    let mut calls = MultiValueEncoded::new();
    calls.push(transfer(RECIPIENT, 1));
    calls.push(transfer(RECIPIENT, 2));
    calls.push(transfer(RECIPIENT, 3));

    world
        .tx()
        .from(PROPOSER)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .propose_calls(
            2u32,
            ManagedBuffer::from("Uneven"),
            ManagedBuffer::from("description-hash"),
            calls,
        )
        .returns(ExpectError(4, avatar_scheme::ERR_CALLS_NOT_DIVISIBLE))
        .run();

    let mut calls = MultiValueEncoded::new();
    calls.push(transfer(RECIPIENT, 1));

    world
        .tx()
        .from(PROPOSER)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .propose_calls(
            0u32,
            ManagedBuffer::from("No options"),
            ManagedBuffer::from("description-hash"),
            calls,
        )
        .returns(ExpectError(4, avatar_scheme::ERR_INVALID_TOTAL_OPTIONS))
        .run();
}

#[test]
fn scheme_type_is_versioned() {
    let mut world = setup();

    world
        .query()
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .get_scheme_type()
        .returns(ExpectValue(ManagedBuffer::<StaticApi>::from("AvatarScheme_v1")))
        .run();
}

// ============================================================
// Execution outcomes
// ============================================================

#[test]
fn winning_calls_are_executed_through_the_avatar() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        1,
        vec![transfer(RECIPIENT, 100), transfer(HOLDER, 50)],
    );
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    check_active(&mut world, &proposal_id, false);
    world.check_account(RECIPIENT).balance(100u64);
    world.check_account(HOLDER).balance(50u64);
    world.check_account(AVATAR_ADDRESS).balance(AVATAR_FUNDS - 150);

    world
        .query()
        .to(CONTROLLER_ADDRESS)
        .typed(DaoControllerProxy)
        .get_inactive_proposals_count()
        .returns(ExpectValue(1usize))
        .run();
}

#[test]
fn only_the_winning_option_slice_runs() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        2,
        vec![transfer(RECIPIENT, 10), transfer(RECIPIENT, 20)],
    );
    execute(&mut world, &proposal_id, 2);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    world.check_account(RECIPIENT).balance(20u64);
    world.check_account(AVATAR_ADDRESS).balance(AVATAR_FUNDS - 20);
}

#[test]
fn reject_option_makes_no_calls() {
    let mut world = setup();

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);
    execute(&mut world, &proposal_id, 0);

    check_state(&mut world, &proposal_id, ProposalState::Rejected);
    check_active(&mut world, &proposal_id, false);
    world.check_account(RECIPIENT).balance(0u64);
    world.check_account(AVATAR_ADDRESS).balance(AVATAR_FUNDS);
}

#[test]
fn expired_proposal_times_out_whatever_option_won() {
    let mut world = setup();

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);

    world
        .current_block()
        .block_nonce(11)
        .block_timestamp(START_TIMESTAMP + ONE_DAY + 1);
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionTimeout);
    check_active(&mut world, &proposal_id, false);
    world.check_account(RECIPIENT).balance(0u64);
}

#[test]
fn proposal_can_still_execute_on_its_deadline() {
    let mut world = setup();

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);

    world
        .current_block()
        .block_nonce(11)
        .block_timestamp(START_TIMESTAMP + ONE_DAY);
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    world.check_account(RECIPIENT).balance(100u64);
}

#[test]
fn finished_proposal_cannot_execute_again() {
    let mut world = setup();

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);
    execute(&mut world, &proposal_id, 1);

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectError(4, avatar_scheme::ERR_PROPOSAL_NOT_SUBMITTED))
        .run();

    world.check_account(RECIPIENT).balance(100u64);
}

#[test]
fn unknown_proposal_cannot_execute() {
    let mut world = setup();

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(ManagedBuffer::from("missing"), 1u32)
        .returns(ExpectError(4, avatar_scheme::ERR_PROPOSAL_NOT_SUBMITTED))
        .run();
}

#[test]
fn only_voting_machine_executes() {
    let mut world = setup();

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);

    world
        .tx()
        .from(STRANGER)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectError(4, avatar_scheme::ERR_ONLY_VOTING_MACHINE))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
}

#[test]
fn winning_option_above_total_fails() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        2,
        vec![transfer(RECIPIENT, 10), transfer(RECIPIENT, 20)],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 3u32)
        .returns(ExpectError(4, avatar_scheme::ERR_INVALID_WINNING_OPTION))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
}

// ============================================================
// All-or-nothing execution
// ============================================================

#[test]
fn failing_call_reverts_the_whole_batch() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        1,
        vec![
            transfer(RECIPIENT, 100),
            reputation_call("burnReputation", 2 * INITIAL_REPUTATION, HOLDER),
        ],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectMessage(dao_reputation::ERR_BURN_EXCEEDS_BALANCE))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
    check_active(&mut world, &proposal_id, true);
    world.check_account(RECIPIENT).balance(0u64);
    world.check_account(AVATAR_ADDRESS).balance(AVATAR_FUNDS);
    check_reputation_supply(&mut world, INITIAL_REPUTATION);
}

#[test]
fn call_without_permission_is_refused() {
    let mut world = setup();

    let mut arguments = ManagedVec::new();
    arguments.push(encoded(ONE_DAY * 2));
    let proposal_id = propose(
        &mut world,
        1,
        vec![scheme_call("setMaxSecondsForExecution", arguments)],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectMessage(permission_registry::ERR_CALL_NOT_ALLOWED))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
}

#[test]
fn value_above_avatar_budget_is_refused() {
    let mut world = setup();

    allow_avatar_call(&mut world, ManagedAddress::zero(), "", 100);
    let proposal_id = propose(
        &mut world,
        1,
        vec![transfer(RECIPIENT, 60), transfer(HOLDER, 60)],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectMessage(permission_registry::ERR_VALUE_LIMIT_REACHED))
        .run();

    world.check_account(RECIPIENT).balance(0u64);
    world.check_account(HOLDER).balance(0u64);
}

#[test]
fn nested_execution_is_blocked() {
    let mut world = setup();

    allow_avatar_call(&mut world, sc_address_of(SCHEME_ADDRESS), "executeProposal", 0);

    let mut arguments = ManagedVec::new();
    arguments.push(ManagedBuffer::from("other-proposal"));
    arguments.push(encoded(1u32));
    let proposal_id = propose(&mut world, 1, vec![scheme_call("executeProposal", arguments)]);

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectMessage(avatar_scheme::ERR_PROPOSAL_ALREADY_EXECUTING))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
}

#[test]
fn token_outflow_within_limit_succeeds() {
    let mut world = setup_with_tokens();

    let proposal_id = propose(
        &mut world,
        1,
        vec![token_transfer(RECIPIENT, 60), token_transfer(HOLDER, 40)],
    );
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    world.check_account(RECIPIENT).esdt_balance(GOV_TOKEN, 60u64);
    world.check_account(HOLDER).esdt_balance(GOV_TOKEN, 40u64);
    world
        .check_account(AVATAR_ADDRESS)
        .esdt_balance(GOV_TOKEN, AVATAR_TOKENS - TOKEN_LIMIT);
}

#[test]
fn token_outflow_above_limit_reverts_the_whole_batch() {
    let mut world = setup_with_tokens();

    let proposal_id = propose(
        &mut world,
        1,
        vec![
            transfer(RECIPIENT, 100),
            token_transfer(RECIPIENT, 60),
            token_transfer(HOLDER, 41),
        ],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectMessage(permission_registry::ERR_VALUE_LIMIT_REACHED))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
    check_active(&mut world, &proposal_id, true);
    world.check_account(RECIPIENT).balance(0u64);
    world.check_account(AVATAR_ADDRESS).balance(AVATAR_FUNDS);
    world
        .check_account(AVATAR_ADDRESS)
        .esdt_balance(GOV_TOKEN, AVATAR_TOKENS);
}

// ============================================================
// Reputation bounds
// ============================================================

#[test]
fn reputation_mint_within_bound_succeeds() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        1,
        vec![reputation_call("mintReputation", 50, RECIPIENT)],
    );
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    check_reputation_supply(&mut world, INITIAL_REPUTATION + 50);
    world
        .query()
        .to(REPUTATION_ADDRESS)
        .typed(ReputationProxy)
        .balance(address_of(RECIPIENT))
        .returns(ExpectValue(BigUint::<StaticApi>::from(50u64)))
        .run();
}

#[test]
fn reputation_change_exactly_at_bound_succeeds() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        1,
        vec![reputation_call("burnReputation", 100, HOLDER)],
    );
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    check_reputation_supply(&mut world, INITIAL_REPUTATION - 100);
}

#[test]
fn reputation_change_above_bound_reverts() {
    let mut world = setup();

    let proposal_id = propose(
        &mut world,
        1,
        vec![
            reputation_call("mintReputation", 60, RECIPIENT),
            reputation_call("mintReputation", 41, HOLDER),
        ],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectError(4, avatar_scheme::ERR_REP_CHANGE_EXCEEDED))
        .run();

    check_state(&mut world, &proposal_id, ProposalState::Submitted);
    check_reputation_supply(&mut world, INITIAL_REPUTATION);
}

#[test]
fn malformed_reputation_call_fails() {
    let mut world = setup();

    let mut call = reputation_call("mintReputation", 10, RECIPIENT);
    call.arguments = ManagedVec::new();
    let proposal_id = propose(&mut world, 1, vec![call]);

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectError(4, avatar_scheme::ERR_INVALID_REPUTATION_CALL))
        .run();
}

// ============================================================
// Execution window
// ============================================================

#[test]
fn only_avatar_sets_execution_window() {
    let mut world = setup();

    world
        .tx()
        .from(STRANGER)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .set_max_seconds_for_execution(ONE_DAY * 2)
        .returns(ExpectError(4, avatar_scheme::ERR_ONLY_AVATAR))
        .run();
}

#[test]
fn execution_window_changes_through_a_proposal() {
    let mut world = setup();

    allow_avatar_call(
        &mut world,
        sc_address_of(SCHEME_ADDRESS),
        "setMaxSecondsForExecution",
        0,
    );

    let mut arguments = ManagedVec::new();
    arguments.push(encoded(ONE_DAY * 2));
    let proposal_id = propose(
        &mut world,
        1,
        vec![scheme_call("setMaxSecondsForExecution", arguments)],
    );
    execute(&mut world, &proposal_id, 1);

    world
        .query()
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .max_seconds_for_execution()
        .returns(ExpectValue(ONE_DAY * 2))
        .run();
}

#[test]
fn execution_window_below_one_day_is_refused() {
    let mut world = setup();

    allow_avatar_call(
        &mut world,
        sc_address_of(SCHEME_ADDRESS),
        "setMaxSecondsForExecution",
        0,
    );

    let mut arguments = ManagedVec::new();
    arguments.push(encoded(ONE_DAY - 1));
    let proposal_id = propose(
        &mut world,
        1,
        vec![scheme_call("setMaxSecondsForExecution", arguments)],
    );

    world
        .tx()
        .from(VOTING_MACHINE)
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .execute_proposal(proposal_id.clone(), 1u32)
        .returns(ExpectMessage(avatar_scheme::ERR_MAX_SECONDS_TOO_LOW))
        .run();

    world
        .query()
        .to(SCHEME_ADDRESS)
        .typed(AvatarSchemeProxy)
        .max_seconds_for_execution()
        .returns(ExpectValue(ONE_DAY))
        .run();
}

#[test]
fn widest_execution_window_never_times_out() {
    let mut world = setup();

    allow_avatar_call(
        &mut world,
        sc_address_of(SCHEME_ADDRESS),
        "setMaxSecondsForExecution",
        0,
    );

    let mut arguments = ManagedVec::new();
    arguments.push(encoded(u64::MAX));
    let widen_window = propose(
        &mut world,
        1,
        vec![scheme_call("setMaxSecondsForExecution", arguments)],
    );
    execute(&mut world, &widen_window, 1);

    let proposal_id = propose(&mut world, 1, vec![transfer(RECIPIENT, 100)]);
    world
        .current_block()
        .block_nonce(11)
        .block_timestamp(START_TIMESTAMP + 365 * ONE_DAY);
    execute(&mut world, &proposal_id, 1);

    check_state(&mut world, &proposal_id, ProposalState::ExecutionSucceeded);
    world.check_account(RECIPIENT).balance(100u64);
}

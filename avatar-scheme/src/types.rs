multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub const MINT_REPUTATION_FUNCTION: &[u8] = b"mintReputation";
pub const BURN_REPUTATION_FUNCTION: &[u8] = b"burnReputation";

// ============================================================
// Proposal State — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalState {
    /// Unknown proposal id.
    None,
    /// Waiting for the voting machine to call `executeProposal`.
    Submitted,
    /// The reject option won. Terminal state.
    Rejected,
    /// The execution window elapsed before execution. Terminal state.
    ExecutionTimeout,
    /// Calls of the winning option were executed. Terminal state.
    ExecutionSucceeded,
}

// ============================================================
// Proposal — metadata of a stored call batch
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub proposer: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description_hash: ManagedBuffer<M>,
    pub state: ProposalState,
    pub submitted_time: u64,
    /// Number of approve options; option 0 is always reject
    pub total_options: u32,
}

/// One call of a proposal batch, made by the avatar.
/// An empty `function` is a plain EGLD transfer.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ProposalCall<M: ManagedTypeApi> {
    pub to: ManagedAddress<M>,
    pub function: ManagedBuffer<M>,
    pub arguments: ManagedVec<M, ManagedBuffer<M>>,
    pub value: BigUint<M>,
}

// ============================================================
// CallAction — how one proposal call is carried out
// ============================================================

pub enum CallAction<M: ManagedTypeApi> {
    /// `mintReputation(amount, account)` on the controller, called directly.
    MintReputation {
        amount: BigUint<M>,
        account: ManagedAddress<M>,
    },
    /// `burnReputation(amount, account)` on the controller, called directly.
    BurnReputation {
        amount: BigUint<M>,
        account: ManagedAddress<M>,
    },
    /// Any other call, checked by the permission registry and made by the avatar.
    GenericCall(ProposalCall<M>),
}

impl<M: ManagedTypeApi> CallAction<M> {
    /// Returns `None` when a reputation call to the controller carries
    /// malformed arguments.
    pub fn from_call(call: ProposalCall<M>, controller: &ManagedAddress<M>) -> Option<Self> {
        if &call.to != controller {
            return Some(CallAction::GenericCall(call));
        }

        if call.function == ManagedBuffer::<M>::from(MINT_REPUTATION_FUNCTION) {
            let (amount, account) = decode_reputation_arguments(&call.arguments)?;
            Some(CallAction::MintReputation { amount, account })
        } else if call.function == ManagedBuffer::<M>::from(BURN_REPUTATION_FUNCTION) {
            let (amount, account) = decode_reputation_arguments(&call.arguments)?;
            Some(CallAction::BurnReputation { amount, account })
        } else {
            Some(CallAction::GenericCall(call))
        }
    }
}

fn decode_reputation_arguments<M: ManagedTypeApi>(
    arguments: &ManagedVec<M, ManagedBuffer<M>>,
) -> Option<(BigUint<M>, ManagedAddress<M>)> {
    if arguments.len() != 2 {
        return None;
    }

    let amount = BigUint::from_bytes_be_buffer(&arguments.get(0));
    let account = ManagedAddress::top_decode((*arguments.get(1)).clone()).ok()?;
    Some((amount, account))
}

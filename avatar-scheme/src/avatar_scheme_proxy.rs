use multiversx_sc::proxy_imports::*;

use crate::types::{Proposal, ProposalCall, ProposalState};

pub struct AvatarSchemeProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AvatarSchemeProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AvatarSchemeProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AvatarSchemeProxyMethods { wrapped_tx: tx }
    }
}

pub struct AvatarSchemeProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> AvatarSchemeProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedAddress<Env::Api>>,
        Arg3: ProxyArg<ManagedAddress<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<u64>,
    >(
        self,
        controller: Arg0,
        avatar: Arg1,
        voting_machine: Arg2,
        permission_registry: Arg3,
        scheme_name: Arg4,
        max_rep_percentage_change: Arg5,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&controller)
            .argument(&avatar)
            .argument(&voting_machine)
            .argument(&permission_registry)
            .argument(&scheme_name)
            .argument(&max_rep_percentage_change)
            .original_result()
    }
}

impl<Env, From, To, Gas> AvatarSchemeProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_max_seconds_for_execution<Arg0: ProxyArg<u64>>(
        self,
        seconds: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setMaxSecondsForExecution")
            .argument(&seconds)
            .original_result()
    }

    pub fn propose_calls<
        Arg0: ProxyArg<u32>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<MultiValueEncoded<Env::Api, ProposalCall<Env::Api>>>,
    >(
        self,
        total_options: Arg0,
        title: Arg1,
        description_hash: Arg2,
        calls: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("proposeCalls")
            .argument(&total_options)
            .argument(&title)
            .argument(&description_hash)
            .argument(&calls)
            .original_result()
    }

    pub fn execute_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u32>,
    >(
        self,
        proposal_id: Arg0,
        winning_option: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("executeProposal")
            .argument(&proposal_id)
            .argument(&winning_option)
            .original_result()
    }

    pub fn get_scheme_type(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSchemeType")
            .original_result()
    }

    pub fn get_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<Proposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_state<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ProposalState> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalState")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_proposal_calls<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ProposalCall<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProposalCalls")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_organization_proposals(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOrganizationProposals")
            .original_result()
    }

    pub fn get_organization_proposals_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOrganizationProposalsCount")
            .original_result()
    }

    pub fn max_seconds_for_execution(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxSecondsForExecution")
            .original_result()
    }

    pub fn max_rep_percentage_change(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxRepPercentageChange")
            .original_result()
    }
}

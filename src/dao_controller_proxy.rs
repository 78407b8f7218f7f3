use multiversx_sc::proxy_imports::*;

use crate::types::ProposalAndScheme;

pub struct DaoControllerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for DaoControllerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = DaoControllerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        DaoControllerProxyMethods { wrapped_tx: tx }
    }
}

pub struct DaoControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> DaoControllerProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        scheme: Arg0,
        reputation: Arg1,
        params_hash: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&scheme)
            .argument(&reputation)
            .argument(&params_hash)
            .original_result()
    }
}

impl<Env, From, To, Gas> DaoControllerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn register_scheme<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<bool>,
        Arg3: ProxyArg<bool>,
    >(
        self,
        scheme: Arg0,
        params_hash: Arg1,
        can_manage_schemes: Arg2,
        can_make_avatar_calls: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("registerScheme")
            .argument(&scheme)
            .argument(&params_hash)
            .argument(&can_manage_schemes)
            .argument(&can_make_avatar_calls)
            .original_result()
    }

    pub fn unregister_scheme<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        scheme: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("unregisterScheme")
            .argument(&scheme)
            .original_result()
    }

    pub fn avatar_call<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<MultiValueEncoded<Env::Api, ManagedBuffer<Env::Api>>>,
    >(
        self,
        avatar: Arg0,
        to: Arg1,
        function: Arg2,
        value: Arg3,
        arguments: Arg4,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue2<bool, ManagedVec<Env::Api, ManagedBuffer<Env::Api>>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("avatarCall")
            .argument(&avatar)
            .argument(&to)
            .argument(&function)
            .argument(&value)
            .argument(&arguments)
            .original_result()
    }

    pub fn start_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("startProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn end_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("endProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn mint_reputation<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        amount: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("mintReputation")
            .argument(&amount)
            .argument(&account)
            .original_result()
    }

    pub fn burn_reputation<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
    >(
        self,
        amount: Arg0,
        account: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("burnReputation")
            .argument(&amount)
            .argument(&account)
            .original_result()
    }

    pub fn get_active_proposals<Arg0: ProxyArg<usize>, Arg1: ProxyArg<usize>>(
        self,
        start: Arg0,
        end: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        ManagedVec<Env::Api, ProposalAndScheme<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveProposals")
            .argument(&start)
            .argument(&end)
            .original_result()
    }

    pub fn get_inactive_proposals<Arg0: ProxyArg<usize>, Arg1: ProxyArg<usize>>(
        self,
        start: Arg0,
        end: Arg1,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        ManagedVec<Env::Api, ProposalAndScheme<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInactiveProposals")
            .argument(&start)
            .argument(&end)
            .original_result()
    }

    pub fn get_active_proposals_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getActiveProposalsCount")
            .original_result()
    }

    pub fn get_inactive_proposals_count(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, usize> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getInactiveProposalsCount")
            .original_result()
    }

    pub fn is_proposal_active<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isProposalActive")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn get_scheme_of_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        proposal_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSchemeOfProposal")
            .argument(&proposal_id)
            .original_result()
    }

    pub fn is_scheme_registered<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        scheme: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isSchemeRegistered")
            .argument(&scheme)
            .original_result()
    }

    pub fn get_scheme_parameters<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        scheme: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSchemeParameters")
            .argument(&scheme)
            .original_result()
    }

    pub fn get_scheme_can_manage_schemes<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        scheme: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSchemeCanManageSchemes")
            .argument(&scheme)
            .original_result()
    }

    pub fn get_scheme_can_make_avatar_calls<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        scheme: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSchemeCanMakeAvatarCalls")
            .argument(&scheme)
            .original_result()
    }

    pub fn schemes_with_manage_schemes_permission(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getSchemesWithManageSchemesPermissionsCount")
            .original_result()
    }

    pub fn reputation(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getDaoReputation")
            .original_result()
    }
}

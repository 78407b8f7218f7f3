use multiversx_sc::proxy_imports::*;

use crate::types::EthPermission;

pub struct PermissionRegistryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for PermissionRegistryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = PermissionRegistryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        PermissionRegistryProxyMethods { wrapped_tx: tx }
    }
}

pub struct PermissionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> PermissionRegistryProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init(self) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .original_result()
    }
}

impl<Env, From, To, Gas> PermissionRegistryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn set_eth_permission_delay<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        delay: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setEthPermissionDelay")
            .argument(&from)
            .argument(&delay)
            .original_result()
    }

    pub fn set_eth_permission<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
        Arg4: ProxyArg<bool>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        function: Arg2,
        value_allowed: Arg3,
        allowed: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setEthPermission")
            .argument(&from)
            .argument(&to)
            .argument(&function)
            .argument(&value_allowed)
            .argument(&allowed)
            .original_result()
    }

    pub fn set_eth_permission_used<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg3: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        function: Arg2,
        value: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setEthPermissionUsed")
            .argument(&from)
            .argument(&to)
            .argument(&function)
            .argument(&value)
            .original_result()
    }

    pub fn add_esdt_limit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
    >(
        self,
        from: Arg0,
        token: Arg1,
        value_allowed: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("addEsdtLimit")
            .argument(&from)
            .argument(&token)
            .argument(&value_allowed)
            .original_result()
    }

    pub fn remove_esdt_limit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        from: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("removeEsdtLimit")
            .argument(&from)
            .argument(&token)
            .original_result()
    }

    pub fn set_esdt_balances(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setEsdtBalances")
            .original_result()
    }

    pub fn check_esdt_limits<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        from: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("checkEsdtLimits")
            .argument(&from)
            .original_result()
    }

    pub fn get_eth_permission<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        function: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, EthPermission<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEthPermission")
            .argument(&from)
            .argument(&to)
            .argument(&function)
            .original_result()
    }

    pub fn get_esdt_limit<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<TokenIdentifier<Env::Api>>,
    >(
        self,
        from: Arg0,
        token: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEsdtLimit")
            .argument(&from)
            .argument(&token)
            .original_result()
    }

    pub fn permission_delay<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        from: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEthPermissionDelay")
            .argument(&from)
            .original_result()
    }
}

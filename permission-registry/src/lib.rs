#![no_std]

multiversx_sc::imports!();

pub mod permission_registry_proxy;
pub mod types;

use dao_avatar::avatar_proxy::AvatarProxy;
use types::EthPermission;

// ============================================================
// Error messages
// ============================================================

pub const ERR_ONLY_OWNER_OR_FROM: &str = "PermissionRegistry: only owner can specify from value";
pub const ERR_CALL_NOT_ALLOWED: &str = "PermissionRegistry: Call not allowed";
pub const ERR_CALL_NOT_ALLOWED_YET: &str = "PermissionRegistry: Call not allowed yet";
pub const ERR_VALUE_LIMIT_REACHED: &str = "PermissionRegistry: Value limit reached";
pub const ERR_BALANCES_NOT_SET: &str = "PermissionRegistry: ESDT initial balances not set";
pub const ERR_INVALID_TOKEN: &str = "PermissionRegistry: invalid token identifier";

// ============================================================
// Contract
// ============================================================

/// Policy oracle for the calls an organization may make.
///
/// Two kinds of rules are kept per caller (`from`):
/// - call permissions keyed by `(to, function)` with a per-block value budget,
///   plus a global value budget stored under `(zero address, "")`;
/// - ESDT outflow limits, checked against a balance snapshot taken in the
///   same block.
#[multiversx_sc::contract]
pub trait PermissionRegistry {
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINTS: call permissions
    // ========================================================

    #[endpoint(setEthPermissionDelay)]
    fn set_eth_permission_delay(&self, from: ManagedAddress, delay: u64) {
        self.require_owner_or_from(&from);
        self.permission_delay(&from).set(delay);
    }

    #[endpoint(setEthPermission)]
    fn set_eth_permission(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        function: ManagedBuffer,
        value_allowed: BigUint,
        allowed: bool,
    ) {
        self.require_owner_or_from(&from);

        let mut permission = self.get_eth_permission(&from, &to, &function);
        permission.from_time = if allowed {
            self.blockchain().get_block_timestamp() + self.permission_delay(&from).get()
        } else {
            0
        };
        permission.value_allowed = value_allowed;
        self.eth_permission(&from, &to, &function).set(&permission);

        self.eth_permission_set_event(&from, &to, &function, allowed);
    }

    /// Records a call about to be made by `from` and fails if policy forbids it.
    #[endpoint(setEthPermissionUsed)]
    fn set_eth_permission_used(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        function: ManagedBuffer,
        value: BigUint,
    ) {
        self.require_owner_or_from(&from);

        if value > 0u64 {
            let any_target = ManagedAddress::zero();
            self.add_value_transferred(&from, &any_target, &ManagedBuffer::new(), &value);
        }

        let permission = self.get_eth_permission(&from, &to, &function);
        if permission.from_time > 0 {
            require!(
                permission.from_time <= self.blockchain().get_block_timestamp(),
                ERR_CALL_NOT_ALLOWED_YET
            );
            self.add_value_transferred(&from, &to, &function, &value);
        } else {
            require!(function.is_empty(), ERR_CALL_NOT_ALLOWED);
        }
    }

    fn add_value_transferred(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        function: &ManagedBuffer,
        value: &BigUint,
    ) {
        let block = self.blockchain().get_block_nonce();
        let mut permission = self.get_eth_permission(from, to, function);

        if permission.value_transferred_on_block < block {
            permission.value_transferred = value.clone();
            permission.value_transferred_on_block = block;
        } else {
            permission.value_transferred += value;
        }
        require!(
            permission.value_transferred <= permission.value_allowed,
            ERR_VALUE_LIMIT_REACHED
        );

        self.eth_permission(from, to, function).set(&permission);
    }

    // ========================================================
    // ENDPOINTS: ESDT limits
    // ========================================================

    #[endpoint(addEsdtLimit)]
    fn add_esdt_limit(&self, from: ManagedAddress, token: TokenIdentifier, value_allowed: BigUint) {
        self.require_owner_or_from(&from);
        require!(token.is_valid_esdt_identifier(), ERR_INVALID_TOKEN);

        self.esdt_limits(&from).insert(token.clone(), value_allowed.clone());
        self.esdt_limit_set_event(&from, &token, &value_allowed);
    }

    #[endpoint(removeEsdtLimit)]
    fn remove_esdt_limit(&self, from: ManagedAddress, token: TokenIdentifier) {
        self.require_owner_or_from(&from);

        self.esdt_limits(&from).remove(&token);
        self.esdt_initial_balance(&from, &token).clear();
        self.esdt_limit_set_event(&from, &token, &BigUint::zero());
    }

    /// Snapshots the caller's balance of every limited token.
    #[endpoint(setEsdtBalances)]
    fn set_esdt_balances(&self) {
        let caller = self.blockchain().get_caller();

        for (token, _) in self.esdt_limits(&caller).iter() {
            let balance = self.esdt_balance_of(&caller, token.clone());
            self.esdt_initial_balance(&caller, &token).set(&balance);
        }
        self.esdt_balances_block(&caller)
            .set(self.blockchain().get_block_nonce());
    }

    #[view(checkEsdtLimits)]
    fn check_esdt_limits(&self, from: ManagedAddress) -> bool {
        let snapshot_block = self.esdt_balances_block(&from);
        require!(
            !snapshot_block.is_empty()
                && snapshot_block.get() == self.blockchain().get_block_nonce(),
            ERR_BALANCES_NOT_SET
        );

        for (token, value_allowed) in self.esdt_limits(&from).iter() {
            let initial = self.esdt_initial_balance(&from, &token).get();
            let current = self.esdt_balance_of(&from, token.clone());
            if current < initial {
                require!(initial - current <= value_allowed, ERR_VALUE_LIMIT_REACHED);
            }
        }
        true
    }

    /// Limited accounts are avatars, which report their own balance.
    fn esdt_balance_of(&self, account: &ManagedAddress, token: TokenIdentifier) -> BigUint {
        self.tx()
            .to(account)
            .typed(AvatarProxy)
            .get_esdt_balance(token)
            .returns(ReturnsResult)
            .sync_call()
    }

    fn require_owner_or_from(&self, from: &ManagedAddress) {
        let caller = self.blockchain().get_caller();
        require!(
            &caller == from || caller == self.blockchain().get_owner_address(),
            ERR_ONLY_OWNER_OR_FROM
        );
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getEthPermission)]
    fn get_eth_permission(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        function: &ManagedBuffer,
    ) -> EthPermission<Self::Api> {
        let mapper = self.eth_permission(from, to, function);
        if mapper.is_empty() {
            EthPermission::default()
        } else {
            mapper.get()
        }
    }

    #[view(getEsdtLimit)]
    fn get_esdt_limit(&self, from: ManagedAddress, token: TokenIdentifier) -> BigUint {
        self.esdt_limits(&from).get(&token).unwrap_or_default()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("ethPermission")]
    fn eth_permission(
        &self,
        from: &ManagedAddress,
        to: &ManagedAddress,
        function: &ManagedBuffer,
    ) -> SingleValueMapper<EthPermission<Self::Api>>;

    #[view(getEthPermissionDelay)]
    #[storage_mapper("permissionDelay")]
    fn permission_delay(&self, from: &ManagedAddress) -> SingleValueMapper<u64>;

    #[storage_mapper("esdtLimits")]
    fn esdt_limits(&self, from: &ManagedAddress) -> MapMapper<TokenIdentifier, BigUint>;

    #[storage_mapper("esdtInitialBalance")]
    fn esdt_initial_balance(
        &self,
        from: &ManagedAddress,
        token: &TokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("esdtBalancesBlock")]
    fn esdt_balances_block(&self, from: &ManagedAddress) -> SingleValueMapper<u64>;

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ethPermissionSet")]
    fn eth_permission_set_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        #[indexed] function: &ManagedBuffer,
        allowed: bool,
    );

    #[event("esdtLimitSet")]
    fn esdt_limit_set_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        value_allowed: &BigUint,
    );
}

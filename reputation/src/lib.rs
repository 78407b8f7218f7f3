#![no_std]

multiversx_sc::imports!();

pub mod reputation_proxy;

// ============================================================
// Error messages
// ============================================================

pub const ERR_ONLY_CONTROLLER: &str = "Reputation: only the controller can mint or burn";
pub const ERR_BURN_EXCEEDS_BALANCE: &str = "Reputation: burn amount exceeds balance";

// ============================================================
// Contract
// ============================================================

/// Non-transferable voting weight of the organization.
///
/// Balances only move through `mint` and `burn`, and only the controller
/// may call those.
#[multiversx_sc::contract]
pub trait Reputation {
    #[init]
    fn init(&self, controller: ManagedAddress) {
        self.controller().set(&controller);
        self.total_supply().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[only_owner]
    #[endpoint(setController)]
    fn set_controller(&self, controller: ManagedAddress) {
        self.controller().set(&controller);
    }

    // ========================================================
    // ENDPOINT: mint / burn
    // ========================================================

    #[endpoint(mint)]
    fn mint(&self, account: ManagedAddress, amount: BigUint) -> bool {
        self.require_controller();

        self.balance(&account).update(|b| *b += &amount);
        self.total_supply().update(|ts| *ts += &amount);

        self.mint_event(&account, &amount);
        true
    }

    #[endpoint(burn)]
    fn burn(&self, account: ManagedAddress, amount: BigUint) -> bool {
        self.require_controller();

        let balance = self.balance(&account).get();
        require!(balance >= amount, ERR_BURN_EXCEEDS_BALANCE);

        self.balance(&account).set(&(balance - &amount));
        self.total_supply().update(|ts| *ts -= &amount);

        self.burn_event(&account, &amount);
        true
    }

    fn require_controller(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.controller().get(), ERR_ONLY_CONTROLLER);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[view(balanceOf)]
    #[storage_mapper("balance")]
    fn balance(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mint")]
    fn mint_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);

    #[event("burn")]
    fn burn_event(&self, #[indexed] account: &ManagedAddress, amount: &BigUint);
}

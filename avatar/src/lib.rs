#![no_std]

multiversx_sc::imports!();

pub mod avatar_proxy;

pub const ERR_ONLY_CONTROLLER: &str = "Avatar: only the controller can execute calls";
pub const ERR_ONLY_CONTROLLER_OR_SELF: &str =
    "Avatar: only the controller or the avatar can transfer";

// ============================================================
// Contract
// ============================================================

/// Holds the organization's assets and acts on its behalf.
///
/// Every outgoing call goes through `executeCall`, which only the
/// controller may invoke.
#[multiversx_sc::contract]
pub trait Avatar {
    #[init]
    fn init(&self, controller: ManagedAddress) {
        self.controller().set(&controller);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        self.deposit_event(&caller, &token, &amount);
    }

    // ========================================================
    // ENDPOINT: executeCall
    // An empty function name is a plain EGLD transfer.
    // A failing callee fails the whole transaction.
    // ========================================================

    #[endpoint(executeCall)]
    fn execute_call(
        &self,
        to: ManagedAddress,
        function: ManagedBuffer,
        value: BigUint,
        arguments: MultiValueEncoded<ManagedBuffer>,
    ) -> MultiValue2<bool, ManagedVec<ManagedBuffer>> {
        let caller = self.blockchain().get_caller();
        require!(caller == self.controller().get(), ERR_ONLY_CONTROLLER);

        let return_data = if function.is_empty() {
            if value > 0u64 {
                self.tx().to(&to).egld(&value).transfer();
            }
            ManagedVec::new()
        } else {
            let mut arg_buffer = ManagedArgBuffer::new();
            for argument in arguments.into_iter() {
                arg_buffer.push_arg_raw(argument);
            }

            self.tx()
                .to(&to)
                .egld(&value)
                .raw_call(function.clone())
                .arguments_raw(arg_buffer)
                .returns(ReturnsRawResult)
                .sync_call()
        };

        self.call_executed_event(&to, &function, &value);
        (true, return_data).into()
    }

    /// Sends a fungible ESDT held by the avatar. Proposals reach it as a
    /// call from the avatar to itself.
    #[endpoint(transferEsdt)]
    fn transfer_esdt(&self, to: ManagedAddress, token: TokenIdentifier, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.controller().get() || caller == self.blockchain().get_sc_address(),
            ERR_ONLY_CONTROLLER_OR_SELF
        );

        self.tx().to(&to).single_esdt(&token, 0, &amount).transfer();
        self.esdt_transferred_event(&to, &token, &amount);
    }

    #[view(getEsdtBalance)]
    fn get_esdt_balance(&self, token: TokenIdentifier) -> BigUint {
        self.blockchain()
            .get_sc_balance(&EgldOrEsdtTokenIdentifier::esdt(token), 0)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getController)]
    #[storage_mapper("controller")]
    fn controller(&self) -> SingleValueMapper<ManagedAddress>;

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] token: &EgldOrEsdtTokenIdentifier,
        amount: &BigUint,
    );

    #[event("callExecuted")]
    fn call_executed_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] function: &ManagedBuffer,
        value: &BigUint,
    );

    #[event("esdtTransferred")]
    fn esdt_transferred_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] token: &TokenIdentifier,
        amount: &BigUint,
    );
}

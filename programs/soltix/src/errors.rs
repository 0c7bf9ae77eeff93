use anchor_lang::prelude::*;

#[error_code]
pub enum EventError {
    #[msg("An event with this name already exists for this organizer")]
    AlreadyExists,
    #[msg("The organizer must sign the request")]
    Unauthorized,
    #[msg("Event name does not match the supplied event account")]
    NameMismatch,
    #[msg("Token mint does not match the event's ticket mint")]
    MintMismatch,
    #[msg("Insufficient funds to cover account rent")]
    InsufficientFunds,
    #[msg("Account not found")]
    NotFound,
    #[msg("Event name cannot be used as an address seed. Max length is 32 bytes")]
    InvalidSeed,

    #[msg("Event name cannot be empty")]
    NameEmpty,
    #[msg("Event date is too long. Max length is 20 characters")]
    DateTooLong,
    #[msg("Supplied account is not the derived address")]
    AddressMismatch,
    #[msg("Holding account is not the recipient's associated token account")]
    HoldingMismatch,
    #[msg("Mint is not a self-authorized ticket mint")]
    InvalidMintState,
}

use anchor_lang::prelude::*;

#[error_code]
pub enum LandError {
    #[msg("Incorrect token id")]
    InvalidTokenId,

    #[msg("Out of land boundary")]
    OutOfBounds,

    #[msg("Land is not available")]
    NotAvailable,

    #[msg("Incorrect width or height")]
    InvalidDimensions,

    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Random seed pool is full")]
    SeedPoolFull,

    #[msg("Insufficient random seeds")]
    InsufficientSeeds,

    #[msg("Session not started")]
    NotStarted,

    #[msg("Session ended")]
    Ended,

    #[msg("Invalid merkle proof")]
    InvalidProof,

    #[msg("No parcels left in this campaign")]
    CampaignExhausted,

    #[msg("Asset account count does not match token ids")]
    AssetCountMismatch,

    #[msg("Collection not set")]
    CollectionNotSet,

    #[msg("Invalid collection")]
    InvalidCollection,
}

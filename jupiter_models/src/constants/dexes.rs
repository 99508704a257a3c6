use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// AMM labels accepted by the `dexes` and `excludeDexes` quote filters.
///
/// The full, current list is served at `{api_url}/program-id-to-label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, AsRefStr)]
pub enum Dex {
    #[strum(to_string = "Clone Protocol")]
    CloneProtocol,
    #[strum(to_string = "Saros")]
    Saros,
    #[strum(to_string = "Sanctum")]
    Sanctum,
    #[strum(to_string = "Raydium CP")]
    RaydiumCp,
    #[strum(to_string = "OpenBook V2")]
    OpenBookV2,
    #[strum(to_string = "Cropper")]
    Cropper,
    #[strum(to_string = "Raydium CLMM")]
    RaydiumClmm,
    #[strum(to_string = "Aldrin V2")]
    AldrinV2,
    #[strum(to_string = "Meteora DLMM")]
    MeteoraDlmm,
    #[strum(to_string = "Marinade")]
    Marinade,
    #[strum(to_string = "Penguin")]
    Penguin,
    #[strum(to_string = "Token Swap")]
    TokenSwap,
    #[strum(to_string = "Crema")]
    Crema,
    #[strum(to_string = "Sanctum Infinity")]
    SanctumInfinity,
    #[strum(to_string = "Phoenix")]
    Phoenix,
    #[strum(to_string = "Meteora")]
    Meteora,
    #[strum(to_string = "Orca V2")]
    OrcaV2,
    #[strum(to_string = "Aldrin")]
    Aldrin,
    #[strum(to_string = "Orca V1")]
    OrcaV1,
    #[strum(to_string = "Perps")]
    Perps,
    #[strum(to_string = "Helium Network")]
    HeliumNetwork,
    #[strum(to_string = "Saber")]
    Saber,
    #[strum(to_string = "Cropper Legacy")]
    CropperLegacy,
    #[strum(to_string = "Raydium")]
    Raydium,
    #[strum(to_string = "FluxBeam")]
    FluxBeam,
    #[strum(to_string = "GooseFX")]
    GooseFx,
    #[strum(to_string = "Openbook")]
    Openbook,
    #[strum(to_string = "Bonkswap")]
    Bonkswap,
    #[strum(to_string = "Saber (Decimals)")]
    SaberDecimals,
    #[strum(to_string = "Invariant")]
    Invariant,
    #[strum(to_string = "Whirlpool")]
    Whirlpool,
    #[strum(to_string = "StepN")]
    StepN,
    #[strum(to_string = "Lifinity V2")]
    LifinityV2,
    #[strum(to_string = "Lifinity V1")]
    LifinityV1,
    #[strum(to_string = "Dexlab")]
    Dexlab,
    #[strum(to_string = "Oasis")]
    Oasis,
    #[strum(to_string = "Mercuria")]
    Mercuria,
}

impl Dex {
    pub fn label(&self) -> &str {
        self.as_ref()
    }
}

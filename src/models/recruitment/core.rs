//! Core logic for the immune recruitment model.

/// Name under which the recruitment network compiles.
pub const MODEL_NAME: &str = "immuneRecruitment";

/// The recruitment signal state variable.
pub const STATE: &str = "S";

/// Input symbol: total cytokine sampled from the field by the host.
pub const TOTAL_CYTOKINE: &str = "totalCytokine";

/// Input symbol: current immune cell count, maintained by the host.
pub const NUM_IMMUNE_CELLS: &str = "numImmuneCells";

/// Rate constants and inputs for the immune recruitment network.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecruitmentParams {
    /// Constant addition rate of the recruitment signal.
    pub add_rate: f64,

    /// Subtraction rate per immune cell present.
    pub sub_rate: f64,

    /// Delay divisor applied to the cytokine contribution.
    pub delay_rate: f64,

    /// First-order decay rate of the signal.
    pub decay_rate: f64,

    /// Total cytokine input at generation time.
    pub total_cytokine: f64,

    /// Immune cell count at generation time.
    pub num_immune_cells: f64,

    /// Initial value of the signal `S`.
    pub s_init: f64,
}

/// The textual recruitment network definition for the given parameters.
///
/// Deterministic: the same parameters always produce the same text.
#[must_use]
pub fn definition(params: &RecruitmentParams) -> String {
    format!(
        "model {name}()
  -> S ; addRate + totalCytokine / delayRate;
S ->   ; subRate * numImmuneCells + decayRate * S;
addRate = {add};
subRate = {sub};
delayRate = {delay};
decayRate = {decay};
numImmuneCells = {num_immune};
totalCytokine = {total_ck};
S = {s};
end",
        name = MODEL_NAME,
        add = params.add_rate,
        sub = params.sub_rate,
        delay = params.delay_rate,
        decay = params.decay_rate,
        num_immune = params.num_immune_cells,
        total_ck = params.total_cytokine,
        s = params.s_init,
    )
}

/// Rate constants and initial values for the viral replication network.
///
/// Rates are in the host's model units (per second of model time). The
/// `Secretion` accumulator always starts at zero and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReplicationParams {
    /// Rate of `U -> R` conversion.
    pub unpacking_rate: f64,

    /// Maximum rate of saturating `R` self-amplification.
    pub replicating_rate: f64,

    /// Value of `R` at which replication runs at half its maximum.
    pub r_half: f64,

    /// Rate of `R -> P` conversion.
    pub translating_rate: f64,

    /// Rate of `P -> A` conversion.
    pub packing_rate: f64,

    /// Rate of `A -> Secretion` transfer.
    pub secretion_rate: f64,

    /// Initial unpacking load `U`.
    pub u_init: f64,

    /// Initial replicating load `R`.
    pub r_init: f64,

    /// Initial packing load `P`.
    pub p_init: f64,

    /// Initial assembled load `A`.
    pub a_init: f64,

    /// Initial value of the `Uptake` input port.
    pub uptake_init: f64,
}

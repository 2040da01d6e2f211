use super::ReplicationParams;

/// Name under which the stock replication network compiles.
///
/// Every cell's instance compiles under the same name; instances are
/// distinguished by their per-cell binding in the integration service, not
/// by name.
pub const MODEL_NAME: &str = "viralReplication";

/// A generator of replication-network definitions.
///
/// The stock network is [`StandardReplicationNetwork`]. Alternative
/// generators are handed to
/// [`ReplicationManager::with_network`](super::ReplicationManager::with_network)
/// to substitute the model without touching the manager, provided the
/// generated network keeps the `Uptake` and `Secretion` ports.
pub trait ReplicationNetwork {
    /// Name under which the generated network compiles.
    fn name(&self) -> &str;

    /// The textual network definition for the given parameters.
    ///
    /// Must be deterministic: the same parameters always produce the same
    /// text, and the symbols defined match [`STATE_SYMBOLS`](super::STATE_SYMBOLS).
    fn definition(&self, params: &ReplicationParams) -> String;
}

/// The stock viral replication network.
///
/// Reaction topology is fixed; only the rate constants and initial values
/// are parameters:
///
/// ```text
///   -> U          at Uptake
/// U -> R          at unpacking_rate * U
///   -> R          at replicating_rate * r_half * R / (r_half + R)
/// R -> P          at translating_rate * R
/// P -> A          at packing_rate * P
/// A -> Secretion  at secretion_rate * A
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardReplicationNetwork;

impl ReplicationNetwork for StandardReplicationNetwork {
    fn name(&self) -> &str {
        MODEL_NAME
    }

    fn definition(&self, params: &ReplicationParams) -> String {
        format!(
            "model {name}()
  -> U ; Uptake
U -> R ; unpacking_rate * U;
  -> R ; replicating_rate * r_half * R / (r_half + R);
R -> P ; translating_rate * R;
P -> A ; packing_rate * P;
A -> Secretion ; secretion_rate * A;

unpacking_rate = {unpacking};
replicating_rate = {replicating};
r_half = {r_half};
translating_rate = {translating};
packing_rate = {packing};
secretion_rate = {secretion};
U = {u};
R = {r};
P = {p};
A = {a};
Uptake = {uptake};
Secretion = 0;
end",
            name = MODEL_NAME,
            unpacking = params.unpacking_rate,
            replicating = params.replicating_rate,
            r_half = params.r_half,
            translating = params.translating_rate,
            packing = params.packing_rate,
            secretion = params.secretion_rate,
            u = params.u_init,
            r = params.r_init,
            p = params.p_init,
            a = params.a_init,
            uptake = params.uptake_init,
        )
    }
}

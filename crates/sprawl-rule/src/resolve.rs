//! Conflict resolution between realized targets.

use sprawl_core::{Contest, Outcome, Target};

use crate::realize::Realization;

/// Pick the outcome for one cell.
///
/// When both targets are realized the urban transition wins only with a
/// strictly higher probability; exact ties go to semi-urban. Also returns
/// the raw [`Contest`] layer value for diagnostics.
pub fn resolve(realization: Realization, p_urban: f64, p_semi_urban: f64) -> (Outcome, Contest) {
    match (realization.urban, realization.semi_urban) {
        (true, true) => {
            if p_urban > p_semi_urban {
                (Outcome::ToUrban, Contest::Urban)
            } else {
                (Outcome::ToSemiUrban, Contest::SemiUrban)
            }
        }
        (true, false) => (Outcome::to(Target::Urban), Contest::Unresolved),
        (false, true) => (Outcome::to(Target::SemiUrban), Contest::Unresolved),
        (false, false) => (Outcome::NoChange, Contest::Idle),
    }
}

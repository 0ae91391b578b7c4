//! D'Hondt seat apportionment.
//!
//! Given the vote tally of every party running in a demarcació and the number
//! of seats apportioned to it, [`dhondt`] distributes the seats one by one:
//! each seat goes to the party with the highest quotient `votes / (seats
//! already won + 1)`. The arithmetic is integer-only; quotients are compared
//! by cross-multiplication so no precision is lost.
//!
//! Tie-break rule, applied when two quotients are equal: the party with more
//! total votes wins the seat; if the totals are equal too, the party whose
//! short code sorts first wins. The same inputs always produce the same
//! assignment.

use std::collections::BTreeMap;

/// Distribute `escons` seats among the parties in `vots` (party short code →
/// total votes) using the D'Hondt divisor method.
///
/// Every party in the input appears in the output, with zero seats when it
/// won none. Parties with zero votes never win a seat, so when nobody has
/// votes the whole assignment is zero.
pub fn dhondt(vots: &BTreeMap<String, i64>, escons: i64) -> BTreeMap<String, i64> {
    let mut assignacio: BTreeMap<String, i64> = vots.keys().map(|p| (p.clone(), 0)).collect();

    if escons <= 0 || vots.values().all(|&v| v <= 0) {
        return assignacio;
    }

    for _ in 0..escons {
        let mut best: Option<&String> = None;

        // Parties iterate in short-code order, so on a full tie the party
        // already held in `best` is the one that sorts first and it keeps
        // the seat.
        for (partit, &v) in vots {
            if v <= 0 {
                continue;
            }

            let Some(actual) = best else {
                best = Some(partit);
                continue;
            };

            let av = vots[actual];
            let quocient = i128::from(v) * i128::from(assignacio[actual] + 1);
            let quocient_actual = i128::from(av) * i128::from(assignacio[partit.as_str()] + 1);

            if quocient > quocient_actual || (quocient == quocient_actual && v > av) {
                best = Some(partit);
            }
        }

        match best {
            Some(partit) => {
                if let Some(seients) = assignacio.get_mut(partit) {
                    *seients += 1;
                }
            }
            None => break,
        }
    }

    assignacio
}

/// Total seats assigned by an apportionment map.
pub fn total_assigned(assignacio: &BTreeMap<String, i64>) -> i64 {
    assignacio.values().sum()
}

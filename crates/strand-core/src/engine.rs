//! Execution engine — walks a segment's codons and emits output tokens.
//!
//! The codon-to-protein table uses tagged variants instead of callables so
//! the engine evaluates every entry uniformly. The environment is read-only
//! during execution.

use crate::types::{Codon, Environment, Segment, Setting, VirusEntry, VirusTable};

/// How a protein codon produces its output token.
#[derive(Debug, Clone, Copy)]
pub enum ProteinAction {
    /// Always the same token.
    Fixed(&'static str),
    /// Token depends on the current value of one environment setting.
    Conditional {
        setting: Setting,
        arms: &'static [(&'static str, &'static str)],
        fallback: &'static str,
    },
}

impl ProteinAction {
    /// Resolve the output token under an environment.
    pub fn evaluate(&self, environment: &Environment) -> &'static str {
        match self {
            ProteinAction::Fixed(token) => token,
            ProteinAction::Conditional {
                setting,
                arms,
                fallback,
            } => {
                let value = environment.setting(*setting);
                arms.iter()
                    .find(|(arm, _)| *arm == value)
                    .map(|(_, token)| *token)
                    .unwrap_or(fallback)
            }
        }
    }
}

const PROTEIN_TABLE: &[(&str, ProteinAction)] = &[
    ("ACC", ProteinAction::Fixed("Protein_X")),
    (
        "GAT",
        ProteinAction::Conditional {
            setting: Setting::Energy,
            arms: &[("HIGH", "Transport")],
            fallback: "Transport Blocked",
        },
    ),
    ("CCG", ProteinAction::Fixed("Synthesis")),
];

/// Look up the action for a protein-producing codon.
pub fn protein_action(codon: &Codon) -> Option<&'static ProteinAction> {
    PROTEIN_TABLE
        .iter()
        .find(|(key, _)| *key == codon.as_str())
        .map(|(_, action)| action)
}

/// The outcome of executing one segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    pub proteins: Vec<String>,
    /// Name of the virus that fired, if any. A virus match appends its
    /// effect token and ends the segment's execution.
    pub virus: Option<String>,
}

/// Execute a segment under an environment, with virus scanning armed when a
/// table is supplied.
///
/// Single forward pass. At each codon the virus table is consulted first: a
/// window of upcoming codons joining to an entry's key records the virus,
/// appends its effect token, and terminates the segment. Otherwise a protein
/// codon appends exactly one token, and an unrecognized codon is a no-op.
pub fn execute(
    segment: &Segment,
    environment: &Environment,
    viruses: Option<&VirusTable>,
) -> Execution {
    let mut out = Execution::default();
    for (i, codon) in segment.codons.iter().enumerate() {
        if let Some(table) = viruses {
            if let Some(entry) = match_virus(&segment.codons[i..], table) {
                out.proteins.push(entry.effect.clone());
                out.virus = Some(entry.name.clone());
                return out;
            }
        }
        if let Some(action) = protein_action(codon) {
            out.proteins.push(action.evaluate(environment).to_string());
        }
    }
    out
}

/// First entry whose key equals the joined window of upcoming codons.
fn match_virus<'t>(upcoming: &[Codon], table: &'t VirusTable) -> Option<&'t VirusEntry> {
    table.entries().iter().find(|entry| {
        let window = entry.window();
        window > 0
            && upcoming.len() >= window
            && upcoming[..window]
                .iter()
                .map(Codon::as_str)
                .collect::<String>()
                == entry.key
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::tokenize;

    fn segment(symbols: &str) -> Segment {
        Segment {
            codons: tokenize(symbols),
        }
    }

    #[test]
    fn fixed_codons_always_produce_their_token() {
        let result = execute(&segment("ACCCCG"), &Environment::prefix_defaults(), None);
        assert_eq!(result.proteins, ["Protein_X", "Synthesis"]);
        assert!(result.virus.is_none());
    }

    #[test]
    fn transport_codon_reads_the_energy_setting() {
        let mut env = Environment::prefix_defaults();

        let blocked = execute(&segment("GAT"), &env, None);
        assert_eq!(blocked.proteins, ["Transport Blocked"]);

        env.energy = crate::types::Energy::High;
        let allowed = execute(&segment("GAT"), &env, None);
        assert_eq!(allowed.proteins, ["Transport"]);

        env.energy = crate::types::Energy::Low;
        let blocked = execute(&segment("GAT"), &env, None);
        assert_eq!(blocked.proteins, ["Transport Blocked"]);
    }

    #[test]
    fn unknown_codons_are_silently_skipped() {
        let result = execute(&segment("AAAACCTAA"), &Environment::prefix_defaults(), None);
        assert_eq!(result.proteins, ["Protein_X"]);
    }

    #[test]
    fn virus_match_is_exclusive() {
        let mut table = VirusTable::new();
        table.insert(VirusEntry::new("GATTAAACC", "Midi_Virus", "Virus_Addition"));

        // ACC executes normally, then the window GAT TAA ACC fires and the
        // trailing CCG is never reached.
        let result = execute(
            &segment("ACCGATTAAACCCCG"),
            &Environment::prefix_defaults(),
            Some(&table),
        );
        assert_eq!(result.proteins, ["Protein_X", "Virus_Addition"]);
        assert_eq!(result.virus.as_deref(), Some("Midi_Virus"));
    }

    #[test]
    fn no_match_without_a_table() {
        let result = execute(&segment("GATTAAACC"), &Environment::prefix_defaults(), None);
        assert_eq!(result.proteins, ["Transport Blocked", "Protein_X"]);
    }

    #[test]
    fn short_codon_windows_never_match() {
        let mut table = VirusTable::new();
        table.insert(VirusEntry::new("ACCGA", "Stub", "Stub_Token"));

        // The trailing short codon "GA" joins to "ACCGA" only if short
        // codons were allowed to match; the window arithmetic forbids it.
        let result = execute(&segment("ACCGA"), &Environment::prefix_defaults(), Some(&table));
        assert!(result.virus.is_none());
        assert_eq!(result.proteins, ["Protein_X"]);
    }
}

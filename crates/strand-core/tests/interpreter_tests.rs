//! End-to-end interpretation scenarios through the facade.

use strand_core::prelude::*;

#[test]
fn reference_sequence_with_defaults() {
    let result = Interpreter::new()
        .interpret("ATGACCGATTAA")
        .expect("valid sequence should interpret");

    assert_eq!(result.proteins, ["Protein_X", "Transport Blocked"]);
    assert!(result.viruses.is_empty());
    match result.environment {
        EnvironmentReport::Single(env) => {
            assert_eq!(env.temp, Temperature::Neutral);
            assert_eq!(env.energy, Energy::Medium);
        }
        other => panic!("expected single environment, got {:?}", other),
    }
}

#[test]
fn energy_prefix_unblocks_transport() {
    // GGG in the three-codon prefix forces ENERGY=HIGH.
    let result = Interpreter::new()
        .interpret("GGGATGACCGATTAA")
        .expect("valid sequence should interpret");

    assert_eq!(result.proteins, ["Protein_X", "Transport"]);
}

#[test]
fn invalid_alphabet_fails_fast() {
    let err = Interpreter::new().interpret("ATGAXCGATTAA").unwrap_err();
    match err {
        StrandError::Alphabet(e) => assert_eq!(e.symbol, 'X'),
        other => panic!("expected alphabet error, got {:?}", other),
    }
}

#[test]
fn whitespace_is_a_permitted_separator() {
    let result = Interpreter::new()
        .interpret("ATG ACC GAT TAA\n")
        .expect("whitespace-separated sequence should interpret");
    assert_eq!(result.proteins, ["Protein_X", "Transport Blocked"]);
}

#[test]
fn sequence_without_markers_produces_nothing() {
    let result = Interpreter::new().interpret("ACCGATCCG").unwrap();
    assert!(result.proteins.is_empty());
    assert!(result.viruses.is_empty());
}

#[test]
fn unterminated_segment_still_executes() {
    let result = Interpreter::new().interpret("ATGACCCCG").unwrap();
    assert_eq!(result.proteins, ["Protein_X", "Synthesis"]);
}

#[test]
fn trailing_short_codon_is_inert() {
    let result = Interpreter::new().interpret("ATGACCGATTAAGA").unwrap();
    assert_eq!(result.proteins, ["Protein_X", "Transport Blocked"]);
}

#[test]
fn block_path_decodes_a_named_environment() {
    let name_symbols = strand_core::environment::encode_name("LAB").unwrap();
    let symbols = format!("GTG{}AAAGGGATGGATTAA", name_symbols);

    let result = Interpreter::new()
        .interpret_blocks(&symbols)
        .expect("block sequence should interpret");

    assert_eq!(result.proteins, ["Transport"]);
    match &result.environment {
        EnvironmentReport::Named(map) => {
            let env = &map["LAB"];
            assert_eq!(env.name.as_deref(), Some("LAB"));
            assert_eq!(env.temp, Temperature::High);
            assert_eq!(env.energy, Energy::High);
        }
        other => panic!("expected named environments, got {:?}", other),
    }
}

#[test]
fn block_path_without_blocks_uses_block_defaults() {
    let result = Interpreter::new().interpret_blocks("ATGGATTAA").unwrap();
    // Block defaults leave ENERGY=LOW, so transport stays blocked.
    assert_eq!(result.proteins, ["Transport Blocked"]);
    match &result.environment {
        EnvironmentReport::Named(map) => assert!(map.is_empty()),
        other => panic!("expected named environments, got {:?}", other),
    }
}

#[test]
fn block_with_undecodable_name_aborts_the_run() {
    // ACC is not a digit codon, so the block's name-material is undefined.
    let err = Interpreter::new()
        .interpret_blocks("GTGACCAAAATGACCTAA")
        .unwrap_err();
    match err {
        StrandError::Decode(_) => {}
        other => panic!("expected decode error, got {:?}", other),
    }
}

#[test]
fn result_round_trips_through_json() {
    let result = Interpreter::new().interpret("GGGATGACCGATTAA").unwrap();
    let json = serde_json::to_string(&result).expect("result should serialize");
    let back: InterpretationResult =
        serde_json::from_str(&json).expect("result should deserialize");
    assert_eq!(back, result);
}

#[test]
fn pathway_scan_through_the_facade() {
    let scan = Interpreter::new().pathways("ACCATGAAACCCGGGATG").unwrap();
    assert_eq!(scan.pathways.len(), 1);
    assert_eq!(scan.pathways[0].nodes(), ["AAA", "CCC", "GGG"]);
    // The trailing bare start marker has no definition behind it.
    assert_eq!(scan.incomplete, [5]);
}

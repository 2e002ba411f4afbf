//! End-to-end runs of the orchestrator over complete raw option sets.

use idparams::core::catalogs::{EnzymeRegistry, ModificationRegistry};
use idparams::core::models::algorithms::{Algorithm, AlgorithmParameters};
use idparams::core::options::raw::RawOptionSet;
use idparams::engine::error::{EngineError, ErrorKind, Rejection, Stage};
use idparams::engine::orchestrator::{Orchestrator, Outcome};
use idparams::engine::progress::ProgressReporter;
use idparams::engine::state::OrchestratorState;
use std::path::Path;
use tempfile::NamedTempFile;

struct Catalogs {
    enzymes: EnzymeRegistry,
    modifications: ModificationRegistry,
    reporter: ProgressReporter<'static>,
}

impl Catalogs {
    fn builtin() -> Self {
        Self {
            enzymes: EnzymeRegistry::builtin(),
            modifications: ModificationRegistry::builtin(),
            reporter: ProgressReporter::new(),
        }
    }

    fn orchestrator(&self) -> Orchestrator<'_> {
        Orchestrator::new(&self.enzymes, &self.modifications, &self.reporter)
    }
}

fn database() -> NamedTempFile {
    NamedTempFile::new().expect("temporary database file")
}

fn options_with_database(database: &NamedTempFile) -> RawOptionSet {
    RawOptionSet::new()
        .with("out", "run1")
        .with("db", database.path().to_string_lossy())
}

fn expect_rejection(result: Result<Outcome, EngineError>) -> Rejection {
    match result {
        Err(EngineError::Rejected(rejection)) => rejection,
        other => panic!("expected a rejection, got {:?}", other),
    }
}

#[test]
fn minimal_valid_options_reach_bound() {
    let catalogs = Catalogs::builtin();
    let database = database();
    let options = options_with_database(&database).with("enzyme", "Trypsin");

    let mut orchestrator = catalogs.orchestrator();
    let outcome = orchestrator.run(&options).unwrap();

    assert_eq!(orchestrator.state(), OrchestratorState::Bound);
    let Outcome::Bound(parameters) = outcome else {
        panic!("expected a bound bundle");
    };
    assert_eq!(parameters.general().enzyme.name, "Trypsin");
    assert_eq!(parameters.output_path(), Path::new("run1.parameters"));
    for algorithm in Algorithm::ALL {
        assert_eq!(
            parameters.algorithm(algorithm),
            Some(&algorithm.default_parameters())
        );
    }
}

#[test]
fn missing_database_is_rejected_before_anything_else() {
    let catalogs = Catalogs::builtin();
    let options = RawOptionSet::new().with("out", "run1").with("prec_ppm", "3");

    let mut orchestrator = catalogs.orchestrator();
    let rejection = expect_rejection(orchestrator.run(&options));

    assert_eq!(rejection.stage(), Stage::General);
    assert_eq!(OrchestratorState::before(rejection.stage()), OrchestratorState::Start);
    assert_eq!(rejection.kind(), ErrorKind::MissingMandatoryOption);
    assert_eq!(rejection.to_string(), "No database specified!");
    assert_eq!(orchestrator.state(), OrchestratorState::Rejected);
}

#[test]
fn unsupported_precursor_unit_lists_the_allowed_codes() {
    let catalogs = Catalogs::builtin();
    let database = database();
    let options = options_with_database(&database).with("prec_ppm", "3");

    let rejection = expect_rejection(catalogs.orchestrator().run(&options));

    assert_eq!(rejection.stage(), Stage::Options);
    assert_eq!(rejection.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        rejection.to_string(),
        "Error parsing the prec_ppm option: Found 3. Supported input: [1, 2]."
    );
}

#[test]
fn negative_missed_cleavages_are_rejected() {
    let catalogs = Catalogs::builtin();
    let database = database();
    let options = options_with_database(&database).with("mc", "-1");

    let rejection = expect_rejection(catalogs.orchestrator().run(&options));

    assert_eq!(rejection.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        rejection.to_string(),
        "Error parsing the mc option: Negative value found."
    );
}

#[test]
fn modification_listing_needs_no_mandatory_options() {
    let catalogs = Catalogs::builtin();
    let options = RawOptionSet::new().with("mods", "");

    let mut orchestrator = catalogs.orchestrator();
    assert_eq!(orchestrator.run(&options).unwrap(), Outcome::ListModifications);
    assert_eq!(orchestrator.state(), OrchestratorState::Done);
}

#[test]
fn supplied_engine_options_override_only_their_engine() {
    let catalogs = Catalogs::builtin();
    let database = database();
    let options = options_with_database(&database)
        .with("msgf_isotope_high", "2")
        .with("msgf_num_ptms", "4")
        .with("directag_tic_cutoff", "100");

    let Outcome::Bound(parameters) = catalogs.orchestrator().run(&options).unwrap() else {
        panic!("expected a bound bundle");
    };

    let Some(AlgorithmParameters::MsgfPlus(msgf)) = parameters.algorithm(Algorithm::MsgfPlus)
    else {
        panic!("expected MS-GF+ parameters");
    };
    assert_eq!(msgf.upper_isotope_error, 2);
    assert_eq!(msgf.max_ptms, 4);

    let Some(AlgorithmParameters::DirecTag(directag)) = parameters.algorithm(Algorithm::DirecTag)
    else {
        panic!("expected DirecTag parameters");
    };
    assert_eq!(directag.tic_cutoff_percentage, 100);

    assert_eq!(
        parameters.algorithm(Algorithm::Omssa),
        Some(&Algorithm::Omssa.default_parameters())
    );
}

#[test]
fn out_of_range_engine_value_is_refused() {
    let catalogs = Catalogs::builtin();
    let database = database();
    let options = options_with_database(&database).with("directag_tic_cutoff", "101");

    let rejection = expect_rejection(catalogs.orchestrator().run(&options));
    assert_eq!(
        rejection.to_string(),
        "Error parsing the directag_tic_cutoff option: Not in the range [0 - 100]."
    );
}

use super::binder::{self, ModificationList};
use super::error::{Diagnostic, EngineError, ErrorKind, Rejection, Stage};
use super::progress::{Progress, ProgressReporter};
use super::state::OrchestratorState;
use crate::core::catalogs::{EnzymeCatalog, ModificationCatalog};
use crate::core::models::algorithms::Algorithm;
use crate::core::models::bundle::IdentificationParameters;
use crate::core::options::catalog::{self, CATALOG};
use crate::core::options::raw::RawOptionSet;
use crate::core::options::rules::rule_for;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// How many option failures are collected before the invocation is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Stop at the first failing option.
    #[default]
    FailFast,
    /// Check every supplied option and every modification name, then report all
    /// failures together. General settings still stop at the first problem.
    AccumulateAll,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The modification listing was requested; nothing was validated or bound.
    ListModifications,
    Bound(IdentificationParameters),
}

/// Sequences general, modification and per-option validation, then binding.
///
/// The catalogs are borrowed from the caller, so the orchestrator itself holds no
/// global state and may be driven against any catalog implementation.
pub struct Orchestrator<'a> {
    enzymes: &'a dyn EnzymeCatalog,
    modifications: &'a dyn ModificationCatalog,
    reporter: &'a ProgressReporter<'a>,
    mode: ValidationMode,
    state: OrchestratorState,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        enzymes: &'a dyn EnzymeCatalog,
        modifications: &'a dyn ModificationCatalog,
        reporter: &'a ProgressReporter<'a>,
    ) -> Self {
        Self {
            enzymes,
            modifications,
            reporter,
            mode: ValidationMode::default(),
            state: OrchestratorState::Start,
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validates `options` and, when every check passes, binds them into a bundle.
    ///
    /// A refused invocation comes back as [`EngineError::Rejected`] and leaves the
    /// orchestrator in [`OrchestratorState::Rejected`].
    pub fn run(&mut self, options: &RawOptionSet) -> Result<Outcome, EngineError> {
        self.state = OrchestratorState::Start;

        if options.flag(catalog::LIST_MODIFICATIONS) {
            info!("Modification listing requested, skipping validation.");
            self.transition(OrchestratorState::Done);
            return Ok(Outcome::ListModifications);
        }

        self.pass(Stage::General, |o| o.validate_general(options))?;
        self.pass(Stage::Modifications, |o| o.validate_modifications(options))?;
        self.pass(Stage::Options, |o| o.validate_options(options))?;

        match self.reporter.phase("Binding parameters", || self.bind(options)) {
            Ok(parameters) => {
                self.transition(OrchestratorState::Bound);
                Ok(Outcome::Bound(parameters))
            }
            Err(error) => {
                warn!("Binding failed after validation: {}", error);
                self.transition(OrchestratorState::Rejected);
                Err(error)
            }
        }
    }

    /// Marks a bound bundle as handed off. Only valid after a successful bind.
    pub fn finish(&mut self) -> Result<(), EngineError> {
        if self.state != OrchestratorState::Bound {
            return Err(EngineError::Internal(format!(
                "cannot finish from state {}",
                self.state
            )));
        }
        self.transition(OrchestratorState::Done);
        Ok(())
    }

    fn transition(&mut self, next: OrchestratorState) {
        debug!(from = %self.state, to = %next, "Orchestrator transition");
        self.state = next;
    }

    fn pass(
        &mut self,
        stage: Stage,
        check: impl FnOnce(&Self) -> Result<(), Rejection>,
    ) -> Result<(), EngineError> {
        if self.state != OrchestratorState::before(stage) {
            return Err(EngineError::Internal(format!(
                "{} checked from state {}",
                stage, self.state
            )));
        }

        match self.reporter.phase(phase_name(stage), || check(self)) {
            Ok(()) => {
                self.transition(OrchestratorState::after(stage));
                Ok(())
            }
            Err(rejection) => {
                warn!(
                    stage = %stage,
                    diagnostics = rejection.diagnostics().len(),
                    "Options rejected: {}",
                    rejection.first()
                );
                self.transition(OrchestratorState::Rejected);
                Err(rejection.into())
            }
        }
    }

    fn validate_general(&self, options: &RawOptionSet) -> Result<(), Rejection> {
        let reject = |kind: ErrorKind, option: &str, message: String| -> Result<(), Rejection> {
            Err(Rejection::single(
                Stage::General,
                Diagnostic::new(kind, option, message),
            ))
        };

        if options.is_empty() {
            return reject(
                ErrorKind::MissingMandatoryOption,
                "",
                "No options specified!".to_string(),
            );
        }
        for descriptor in catalog::mandatory_options() {
            if options.non_blank(descriptor.id).is_none() {
                return reject(
                    ErrorKind::MissingMandatoryOption,
                    descriptor.id,
                    missing_option_message(descriptor.id),
                );
            }
        }
        let database = options.non_blank(catalog::DATABASE).unwrap_or_default();
        if !Path::new(database).exists() {
            return reject(
                ErrorKind::FileNotFound,
                catalog::DATABASE,
                "Database not found.".to_string(),
            );
        }

        let enzyme = binder::enzyme_name(options);
        if self.enzymes.resolve(enzyme).is_none() {
            return reject(
                ErrorKind::UnresolvableReference,
                catalog::ENZYME,
                format!("Enzyme {} not recognized.", enzyme),
            );
        }
        debug!(database, enzyme, "General settings accepted");
        Ok(())
    }

    fn validate_modifications(&self, options: &RawOptionSet) -> Result<(), Rejection> {
        let mut diagnostics = Vec::new();
        for list in ModificationList::ALL {
            for name in binder::modification_names(options, list) {
                if self.modifications.resolve(name).is_some() {
                    continue;
                }
                diagnostics.push(Diagnostic::new(
                    ErrorKind::UnresolvableReference,
                    list.option_id(),
                    format!(
                        "An error occurred while parsing the {} modifications: PTM {} not found.",
                        list, name
                    ),
                ));
                if self.mode == ValidationMode::FailFast {
                    return Err(Rejection::single(Stage::Modifications, diagnostics.remove(0)));
                }
            }
        }
        Rejection::collect(Stage::Modifications, diagnostics).map_or(Ok(()), Err)
    }

    fn validate_options(&self, options: &RawOptionSet) -> Result<(), Rejection> {
        for (id, _) in options.iter() {
            if catalog::lookup(id).is_none() {
                warn!(option = id, "Ignoring unrecognized option");
            }
        }

        let mut diagnostics = Vec::new();
        for descriptor in CATALOG {
            let (Some(raw), Some(rule)) = (options.get(descriptor.id), rule_for(descriptor.id))
            else {
                continue;
            };
            if let Err(error) = rule.validate(descriptor.id, raw) {
                diagnostics.push(Diagnostic::from(error));
                if self.mode == ValidationMode::FailFast {
                    break;
                }
            }
        }
        Rejection::collect(Stage::Options, diagnostics).map_or(Ok(()), Err)
    }

    fn bind(&self, options: &RawOptionSet) -> Result<IdentificationParameters, EngineError> {
        let general = binder::bind_general(options, self.enzymes, self.modifications)?;

        self.reporter.report(Progress::TaskStart {
            total_steps: Algorithm::ALL.len() as u64,
        });
        let mut algorithms = BTreeMap::new();
        for algorithm in Algorithm::ALL {
            let parameters = binder::bind_algorithm(algorithm, options)?;
            debug!(%algorithm, "Bound engine parameters");
            algorithms.insert(algorithm, parameters);
            self.reporter.report(Progress::TaskIncrement);
        }
        self.reporter.report(Progress::TaskFinish);

        let output = options.non_blank(catalog::OUTPUT).ok_or_else(|| {
            EngineError::Internal("output path missing after validation".to_string())
        })?;
        let output_path = binder::normalize_output_path(output);
        info!(path = %output_path.display(), "Identification parameters bound");

        Ok(IdentificationParameters::new(general, algorithms, output_path))
    }
}

fn missing_option_message(id: &str) -> String {
    match id {
        catalog::OUTPUT => "No output file specified!".to_string(),
        catalog::DATABASE => "No database specified!".to_string(),
        other => format!("No {} specified!", other),
    }
}

fn phase_name(stage: Stage) -> &'static str {
    match stage {
        Stage::General => "Validating general settings",
        Stage::Modifications => "Resolving modifications",
        Stage::Options => "Validating option values",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalogs::{Enzyme, EnzymeRegistry, ModificationRegistry};
    use crate::core::models::algorithms::AlgorithmParameters;
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};
    use tempfile::NamedTempFile;

    struct Fixture {
        enzymes: EnzymeRegistry,
        modifications: ModificationRegistry,
        reporter: ProgressReporter<'static>,
        database: NamedTempFile,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                enzymes: EnzymeRegistry::builtin(),
                modifications: ModificationRegistry::builtin(),
                reporter: ProgressReporter::new(),
                database: NamedTempFile::new().unwrap(),
            }
        }

        fn orchestrator(&self) -> Orchestrator<'_> {
            Orchestrator::new(&self.enzymes, &self.modifications, &self.reporter)
        }

        fn valid_options(&self) -> RawOptionSet {
            RawOptionSet::new()
                .with("out", "run1")
                .with("db", self.database.path().to_string_lossy())
        }
    }

    fn rejection(result: Result<Outcome, EngineError>) -> Rejection {
        match result {
            Err(EngineError::Rejected(rejection)) => rejection,
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn valid_options_are_bound_with_defaults() {
        let fixture = Fixture::new();
        let mut orchestrator = fixture.orchestrator();

        let Outcome::Bound(parameters) = orchestrator.run(&fixture.valid_options()).unwrap()
        else {
            panic!("expected a bound bundle");
        };

        assert_eq!(orchestrator.state(), OrchestratorState::Bound);
        assert_eq!(parameters.output_path(), Path::new("run1.parameters"));
        assert_eq!(parameters.general().enzyme.name, "Trypsin");
        assert_eq!(parameters.algorithms().len(), Algorithm::ALL.len());
        assert!(!parameters.list_modifications());

        orchestrator.finish().unwrap();
        assert_eq!(orchestrator.state(), OrchestratorState::Done);
    }

    #[test]
    fn finish_requires_a_bound_bundle() {
        let fixture = Fixture::new();
        let mut orchestrator = fixture.orchestrator();
        assert!(matches!(orchestrator.finish(), Err(EngineError::Internal(_))));
    }

    #[test]
    fn listing_modifications_skips_mandatory_options() {
        let fixture = Fixture::new();
        let mut orchestrator = fixture.orchestrator();
        let options = RawOptionSet::new().with("mods", "");

        assert_eq!(orchestrator.run(&options).unwrap(), Outcome::ListModifications);
        assert_eq!(orchestrator.state(), OrchestratorState::Done);
    }

    #[test]
    fn disabled_listing_flag_does_not_skip_validation() {
        let fixture = Fixture::new();
        for value in ["0", "false"] {
            let mut orchestrator = fixture.orchestrator();
            let options = RawOptionSet::new().with("mods", value).with("out", "x");

            let rejection = rejection(orchestrator.run(&options));
            assert_eq!(rejection.to_string(), "No database specified!");
            assert_eq!(orchestrator.state(), OrchestratorState::Rejected);
        }

        let options = fixture.valid_options().with("mods", "0");
        assert!(matches!(
            fixture.orchestrator().run(&options),
            Ok(Outcome::Bound(_))
        ));
    }

    #[test]
    fn blank_enzyme_is_not_replaced_by_the_default() {
        let fixture = Fixture::new();
        let options = fixture.valid_options().with("enzyme", "  ");

        let rejection = rejection(fixture.orchestrator().run(&options));
        assert_eq!(rejection.kind(), ErrorKind::UnresolvableReference);
        assert_eq!(rejection.first().option, "enzyme");
        assert_eq!(rejection.to_string(), "Enzyme    not recognized.");
    }

    /// Resolves each enzyme once, then forgets it.
    struct ForgetfulEnzymes {
        inner: EnzymeRegistry,
        lookups: Cell<usize>,
    }

    impl EnzymeCatalog for ForgetfulEnzymes {
        fn resolve(&self, name: &str) -> Option<&Enzyme> {
            self.lookups.set(self.lookups.get() + 1);
            (self.lookups.get() == 1).then(|| self.inner.resolve(name)).flatten()
        }
    }

    #[test]
    fn binding_failure_leaves_the_run_rejected() {
        let fixture = Fixture::new();
        let enzymes = ForgetfulEnzymes {
            inner: EnzymeRegistry::builtin(),
            lookups: Cell::new(0),
        };
        let mut orchestrator =
            Orchestrator::new(&enzymes, &fixture.modifications, &fixture.reporter);

        assert!(matches!(
            orchestrator.run(&fixture.valid_options()),
            Err(EngineError::Internal(_))
        ));
        assert_eq!(orchestrator.state(), OrchestratorState::Rejected);
        assert!(orchestrator.finish().is_err());
    }

    #[test]
    fn empty_option_set_is_rejected() {
        let fixture = Fixture::new();
        let mut orchestrator = fixture.orchestrator();

        let rejection = rejection(orchestrator.run(&RawOptionSet::new()));
        assert_eq!(rejection.kind(), ErrorKind::MissingMandatoryOption);
        assert_eq!(rejection.to_string(), "No options specified!");
        assert_eq!(orchestrator.state(), OrchestratorState::Rejected);
    }

    #[test]
    fn general_checks_run_in_order() {
        let fixture = Fixture::new();
        let database = fixture.database.path().to_string_lossy().to_string();
        let cases = [
            (
                RawOptionSet::new().with("db", "missing.fasta"),
                ErrorKind::MissingMandatoryOption,
                "No output file specified!",
            ),
            (
                RawOptionSet::new().with("out", "run1").with("db", "  "),
                ErrorKind::MissingMandatoryOption,
                "No database specified!",
            ),
            (
                RawOptionSet::new()
                    .with("out", "run1")
                    .with("db", "/definitely/not/here.fasta")
                    .with("enzyme", "Nonsense"),
                ErrorKind::FileNotFound,
                "Database not found.",
            ),
            (
                RawOptionSet::new()
                    .with("out", "run1")
                    .with("db", database.as_str())
                    .with("enzyme", "trypsin"),
                ErrorKind::UnresolvableReference,
                "Enzyme trypsin not recognized.",
            ),
        ];

        for (options, kind, message) in cases {
            let rejection = rejection(fixture.orchestrator().run(&options));
            assert_eq!(rejection.stage(), Stage::General);
            assert_eq!(rejection.kind(), kind);
            assert_eq!(rejection.to_string(), message);
        }
    }

    #[test]
    fn unknown_modification_names_its_list() {
        let fixture = Fixture::new();
        let options = fixture
            .valid_options()
            .with("fixed_mods", "Carbamidomethylation of C")
            .with("variable_mods", "Oxidation of M, oxidation of m");

        let rejection = rejection(fixture.orchestrator().run(&options));
        assert_eq!(rejection.stage(), Stage::Modifications);
        assert_eq!(rejection.kind(), ErrorKind::UnresolvableReference);
        assert_eq!(
            rejection.to_string(),
            "An error occurred while parsing the variable modifications: PTM oxidation of m not found."
        );
    }

    #[test]
    fn fail_fast_reports_only_the_first_bad_option() {
        let fixture = Fixture::new();
        let options = fixture
            .valid_options()
            .with("prec_ppm", "3")
            .with("mc", "-1")
            .with("omssa_memory", "yes");

        let rejection = rejection(fixture.orchestrator().run(&options));
        assert_eq!(rejection.stage(), Stage::Options);
        assert_eq!(rejection.diagnostics().len(), 1);
        assert_eq!(rejection.first().option, "prec_ppm");
        assert!(rejection.to_string().contains("1, 2"));
    }

    #[test]
    fn accumulate_mode_reports_every_bad_option() {
        let fixture = Fixture::new();
        let options = fixture
            .valid_options()
            .with("prec_ppm", "3")
            .with("mc", "-1")
            .with("omssa_memory", "yes");

        let mut orchestrator = fixture.orchestrator().with_mode(ValidationMode::AccumulateAll);
        let rejection = rejection(orchestrator.run(&options));

        let options: Vec<_> = rejection
            .diagnostics()
            .iter()
            .map(|d| d.option.as_str())
            .collect();
        assert_eq!(options, vec!["prec_ppm", "mc", "omssa_memory"]);
        assert_eq!(rejection.diagnostics()[2].kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn accumulate_mode_collects_every_missing_modification() {
        let fixture = Fixture::new();
        let options = fixture
            .valid_options()
            .with("fixed_mods", "Unknown A")
            .with("variable_mods", "Unknown B");

        let mut orchestrator = fixture.orchestrator().with_mode(ValidationMode::AccumulateAll);
        let rejection = rejection(orchestrator.run(&options));
        assert_eq!(rejection.diagnostics().len(), 2);
        assert_eq!(rejection.diagnostics()[0].option, "fixed_mods");
        assert_eq!(rejection.diagnostics()[1].option, "variable_mods");
    }

    #[test]
    fn unrecognized_options_are_ignored() {
        let fixture = Fixture::new();
        let options = fixture.valid_options().with("not_an_option", "whatever");
        assert!(matches!(
            fixture.orchestrator().run(&options),
            Ok(Outcome::Bound(_))
        ));
    }

    #[test]
    fn binding_twice_gives_equal_bundles() {
        let fixture = Fixture::new();
        let options = fixture
            .valid_options()
            .with("enzyme", "Lys-C")
            .with("comet_num_matches", "3")
            .with("tide_decoy_format", "shuffle");

        let first = fixture.orchestrator().run(&options).unwrap();
        let second = fixture.orchestrator().run(&options).unwrap();
        assert_eq!(first, second);

        let Outcome::Bound(parameters) = first else {
            panic!("expected a bound bundle");
        };
        let Some(AlgorithmParameters::Comet(comet)) = parameters.algorithm(Algorithm::Comet) else {
            panic!("expected Comet parameters");
        };
        assert_eq!(comet.num_spectrum_matches, 3);
        assert_eq!(parameters.general().database, PathBuf::from(fixture.database.path()));
    }

    #[test]
    fn progress_follows_the_passes() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let mut fixture = Fixture::new();
        fixture.reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));

        fixture.orchestrator().run(&fixture.valid_options()).unwrap();

        let events = events.lock().unwrap();
        let phases: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                Progress::PhaseStart { name } => Some(*name),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                "Validating general settings",
                "Resolving modifications",
                "Validating option values",
                "Binding parameters"
            ]
        );
        let increments = events
            .iter()
            .filter(|e| **e == Progress::TaskIncrement)
            .count();
        assert_eq!(increments, Algorithm::ALL.len());
    }
}

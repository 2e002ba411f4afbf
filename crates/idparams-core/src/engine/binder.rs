use super::error::EngineError;
use crate::core::catalogs::{EnzymeCatalog, Modification, ModificationCatalog};
use crate::core::models::algorithms::{
    Algorithm, AlgorithmParameters, CometParameters, DirecTagParameters, MsAmandaParameters,
    MsgfParameters, MyriMatchParameters, OmssaParameters, PNovoParameters, PepNovoParameters,
    TideParameters, XTandemParameters,
};
use crate::core::models::general::{GeneralSearchParameters, GeneralSearchParametersBuilder};
use crate::core::options::catalog;
use crate::core::options::raw::{ConversionError, RawOptionSet};
use std::fmt;
use std::path::PathBuf;

pub const PARAMETERS_EXTENSION: &str = ".parameters";

/// The two comma separated modification lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModificationList {
    Fixed,
    Variable,
}

impl ModificationList {
    pub const ALL: [ModificationList; 2] = [ModificationList::Fixed, ModificationList::Variable];

    pub fn option_id(self) -> &'static str {
        match self {
            ModificationList::Fixed => catalog::FIXED_MODIFICATIONS,
            ModificationList::Variable => catalog::VARIABLE_MODIFICATIONS,
        }
    }
}

impl fmt::Display for ModificationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModificationList::Fixed => f.write_str("fixed"),
            ModificationList::Variable => f.write_str("variable"),
        }
    }
}

/// Appends the parameters extension unless the path already carries it.
pub fn normalize_output_path(raw: &str) -> PathBuf {
    if raw.ends_with(PARAMETERS_EXTENSION) {
        PathBuf::from(raw)
    } else {
        PathBuf::from(format!("{}{}", raw, PARAMETERS_EXTENSION))
    }
}

/// Splits a comma separated modification list into trimmed, non-empty names.
pub fn split_modification_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|name| !name.is_empty())
}

/// The names listed in `list`, in the order given.
pub fn modification_names(options: &RawOptionSet, list: ModificationList) -> Vec<&str> {
    options
        .get(list.option_id())
        .map(|raw| split_modification_list(raw).collect())
        .unwrap_or_default()
}

/// The enzyme name to resolve: the supplied one as written, or the default when
/// the option is absent. A blank name is kept so that it fails to resolve.
pub fn enzyme_name(options: &RawOptionSet) -> &str {
    options
        .get(catalog::ENZYME)
        .unwrap_or(GeneralSearchParameters::DEFAULT_ENZYME)
}

fn resolve_modifications(
    options: &RawOptionSet,
    list: ModificationList,
    modifications: &dyn ModificationCatalog,
) -> Result<Vec<Modification>, EngineError> {
    modification_names(options, list)
        .into_iter()
        .map(|name| {
            modifications.resolve(name).cloned().ok_or_else(|| {
                EngineError::Internal(format!(
                    "{} modification '{}' vanished from the catalog after validation",
                    list, name
                ))
            })
        })
        .collect()
}

/// Binds the shared search settings. Only called on validated options.
pub fn bind_general(
    options: &RawOptionSet,
    enzymes: &dyn EnzymeCatalog,
    modifications: &dyn ModificationCatalog,
) -> Result<GeneralSearchParameters, EngineError> {
    let name = enzyme_name(options);
    let enzyme = enzymes.resolve(name).cloned().ok_or_else(|| {
        EngineError::Internal(format!(
            "enzyme '{}' vanished from the catalog after validation",
            name
        ))
    })?;

    let mut builder = GeneralSearchParametersBuilder::new()
        .enzyme(enzyme)
        .fixed_modifications(resolve_modifications(
            options,
            ModificationList::Fixed,
            modifications,
        )?)
        .variable_modifications(resolve_modifications(
            options,
            ModificationList::Variable,
            modifications,
        )?);

    if let Some(database) = options.non_blank(catalog::DATABASE) {
        builder = builder.database(PathBuf::from(database));
    }
    if let Some(tolerance) = options.parsed(catalog::PRECURSOR_TOLERANCE)? {
        builder = builder.precursor_tolerance(tolerance);
    }
    if let Some(unit) = options.parsed(catalog::PRECURSOR_ACCURACY)? {
        builder = builder.precursor_accuracy_type(unit);
    }
    if let Some(tolerance) = options.parsed(catalog::FRAGMENT_TOLERANCE)? {
        builder = builder.fragment_tolerance(tolerance);
    }
    if let Some(unit) = options.parsed(catalog::FRAGMENT_ACCURACY)? {
        builder = builder.fragment_accuracy_type(unit);
    }
    if let Some(count) = options.parsed(catalog::MISSED_CLEAVAGES)? {
        builder = builder.missed_cleavages(count);
    }
    if let Some(charge) = options.parsed(catalog::MIN_CHARGE)? {
        builder = builder.min_charge(charge);
    }
    if let Some(charge) = options.parsed(catalog::MAX_CHARGE)? {
        builder = builder.max_charge(charge);
    }
    if let Some(ion) = options.non_blank(catalog::FORWARD_ION) {
        builder = builder.forward_ion(ion.to_string());
    }
    if let Some(ion) = options.non_blank(catalog::REWIND_ION) {
        builder = builder.rewind_ion(ion.to_string());
    }

    Ok(builder.build()?)
}

/// Binds one engine's parameter set, starting from that engine's defaults.
pub fn bind_algorithm(
    algorithm: Algorithm,
    options: &RawOptionSet,
) -> Result<AlgorithmParameters, ConversionError> {
    Ok(match algorithm {
        Algorithm::Omssa => AlgorithmParameters::Omssa(bind_omssa(options)?),
        Algorithm::XTandem => AlgorithmParameters::XTandem(bind_xtandem(options)?),
        Algorithm::MsgfPlus => AlgorithmParameters::MsgfPlus(bind_msgf(options)?),
        Algorithm::MsAmanda => AlgorithmParameters::MsAmanda(bind_ms_amanda(options)?),
        Algorithm::MyriMatch => AlgorithmParameters::MyriMatch(bind_myrimatch(options)?),
        Algorithm::Comet => AlgorithmParameters::Comet(bind_comet(options)?),
        Algorithm::Tide => AlgorithmParameters::Tide(bind_tide(options)?),
        Algorithm::PepNovo => AlgorithmParameters::PepNovo(bind_pepnovo(options)?),
        Algorithm::DirecTag => AlgorithmParameters::DirecTag(bind_directag(options)?),
        Algorithm::PNovo => AlgorithmParameters::PNovo(bind_pnovo(options)?),
    })
}

fn bind_omssa(o: &RawOptionSet) -> Result<OmssaParameters, ConversionError> {
    let mut p = OmssaParameters::default();
    o.assign("omssa_memory", &mut p.sequences_in_memory)?;
    o.assign("omssa_isotopes", &mut p.number_of_isotopes)?;
    o.assign("omssa_neutron", &mut p.neutron_threshold)?;
    o.assign("omssa_low_intensity", &mut p.low_intensity_cutoff)?;
    o.assign("omssa_high_intensity", &mut p.high_intensity_cutoff)?;
    o.assign("omssa_intensity_incr", &mut p.intensity_cutoff_increment)?;
    o.assign("omssa_single_window_wd", &mut p.single_charge_window)?;
    o.assign("omssa_double_window_wd", &mut p.double_charge_window)?;
    o.assign("omssa_single_window_pk", &mut p.peaks_in_single_charge_window)?;
    o.assign("omssa_double_window_pk", &mut p.peaks_in_double_charge_window)?;
    o.assign("omssa_min_ann_int_pks", &mut p.min_annotated_intense_peaks)?;
    o.assign("omssa_min_annotated_peaks", &mut p.min_annotated_peaks)?;
    o.assign("omssa_min_peaks", &mut p.min_peak_count)?;
    o.assign("omssa_methionine", &mut p.cleave_n_terminal_methionine)?;
    o.assign("omssa_max_ladders", &mut p.max_mz_ladders)?;
    o.assign("omssa_max_frag_charge", &mut p.max_fragment_charge)?;
    o.assign("omssa_fraction", &mut p.charge_one_fraction)?;
    o.assign("omssa_plus_one", &mut p.determine_charge_plus_one)?;
    o.assign("omssa_charge", &mut p.positive_fragment_ions)?;
    o.assign("omssa_prec_per_spectrum", &mut p.min_precursors_per_spectrum)?;
    o.assign("omssa_forward", &mut p.search_forward_ions)?;
    o.assign("omssa_rewind", &mut p.search_rewind_ions)?;
    o.assign("omssa_max_frag_series", &mut p.max_fragments_per_series)?;
    o.assign("omssa_corr", &mut p.use_correlation_correction)?;
    o.assign("omssa_consecutive_p", &mut p.consecutive_ion_probability)?;
    o.assign("omssa_it_sequence_evalue", &mut p.iterative_sequence_evalue)?;
    o.assign("omssa_it_spectrum_evalue", &mut p.iterative_spectrum_evalue)?;
    o.assign("omssa_it_replace_evalue", &mut p.iterative_replace_evalue)?;
    o.assign("omssa_remove_prec", &mut p.remove_precursor)?;
    o.assign("omssa_scale_prec", &mut p.scale_precursor_mass)?;
    o.assign("omssa_estimate_charge", &mut p.estimate_charge)?;
    o.assign("omssa_max_evalue", &mut p.max_evalue)?;
    o.assign("omssa_hitlist_length", &mut p.hitlist_length)?;
    o.assign("omssa_hitlist_charge", &mut p.hits_per_spectrum_per_charge)?;
    o.assign("omssa_min_pep_length", &mut p.min_peptide_length)?;
    o.assign("omssa_max_pep_length", &mut p.max_peptide_length)?;
    o.assign("omssa_format", &mut p.output_format)?;
    Ok(p)
}

fn bind_xtandem(o: &RawOptionSet) -> Result<XTandemParameters, ConversionError> {
    let mut p = XTandemParameters::default();
    o.assign("xtandem_dynamic_range", &mut p.dynamic_range)?;
    o.assign("xtandem_npeaks", &mut p.total_peaks)?;
    o.assign("xtandem_min_frag_mz", &mut p.min_fragment_mz)?;
    o.assign("xtandem_min_peaks", &mut p.min_peak_count)?;
    o.assign("xtandem_noise_suppr", &mut p.use_noise_suppression)?;
    o.assign("xtandem_min_prec_mass", &mut p.min_precursor_mass)?;
    o.assign("xtandem_quick_acetyl", &mut p.protein_quick_acetyl)?;
    o.assign("xtandem_quick_pyro", &mut p.quick_pyrolidone)?;
    o.assign("xtandem_stp_bias", &mut p.stp_bias)?;
    o.assign("xtandem_refine", &mut p.refine)?;
    o.assign("xtandem_refine_evalue", &mut p.refine_max_evalue)?;
    o.assign("xtandem_refine_unc", &mut p.refine_unanticipated_cleavage)?;
    o.assign("xtandem_refine_semi", &mut p.refine_semi)?;
    o.assign("xtandem_refine_pot", &mut p.potential_mods_for_full_refinement)?;
    o.assign("xtandem_refine_p_mut", &mut p.refine_point_mutations)?;
    o.assign("xtandem_refine_snaps", &mut p.refine_snaps)?;
    o.assign("xtandem_refine_spec_synt", &mut p.refine_spectrum_synthesis)?;
    o.assign("xtandem_evalue", &mut p.max_evalue)?;
    o.assign("xtandem_output_proteins", &mut p.output_proteins)?;
    o.assign("xtandem_output_sequences", &mut p.output_sequences)?;
    o.assign("xtandem_output_spectra", &mut p.output_spectra)?;
    o.assign("xtandem_skyline_path", &mut p.skyline_path)?;
    Ok(p)
}

fn bind_msgf(o: &RawOptionSet) -> Result<MsgfParameters, ConversionError> {
    let mut p = MsgfParameters::default();
    o.assign("msgf_decoy", &mut p.search_decoy)?;
    o.assign("msgf_instrument", &mut p.instrument)?;
    o.assign("msgf_fragmentation", &mut p.fragmentation)?;
    o.assign("msgf_protocol", &mut p.protocol)?;
    o.assign("msgf_min_pep_length", &mut p.min_peptide_length)?;
    o.assign("msgf_max_pep_length", &mut p.max_peptide_length)?;
    o.assign("msgf_num_matches", &mut p.num_spectrum_matches)?;
    o.assign("msgf_additional", &mut p.additional_output)?;
    o.assign("msgf_isotope_low", &mut p.lower_isotope_error)?;
    o.assign("msgf_isotope_high", &mut p.upper_isotope_error)?;
    o.assign("msgf_termini", &mut p.tolerable_termini)?;
    o.assign("msgf_num_ptms", &mut p.max_ptms)?;
    Ok(p)
}

fn bind_ms_amanda(o: &RawOptionSet) -> Result<MsAmandaParameters, ConversionError> {
    let mut p = MsAmandaParameters::default();
    o.assign("ms_amanda_decoy", &mut p.generate_decoy)?;
    o.assign("ms_amanda_instrument", &mut p.instrument)?;
    o.assign("ms_amanda_max_rank", &mut p.max_rank)?;
    o.assign("ms_amanda_mono", &mut p.monoisotopic)?;
    o.assign("ms_low_mem_mode", &mut p.low_memory_mode)?;
    Ok(p)
}

fn bind_myrimatch(o: &RawOptionSet) -> Result<MyriMatchParameters, ConversionError> {
    let mut p = MyriMatchParameters::default();
    o.assign("myrimatch_min_pep_length", &mut p.min_peptide_length)?;
    o.assign("myrimatch_max_pep_length", &mut p.max_peptide_length)?;
    o.assign("myrimatch_min_prec_mass", &mut p.min_precursor_mass)?;
    o.assign("myrimatch_max_prec_mass", &mut p.max_precursor_mass)?;
    o.assign("myrimatch_isotope_low", &mut p.lower_isotope_correction)?;
    o.assign("myrimatch_isotope_high", &mut p.upper_isotope_correction)?;
    o.assign("myrimatch_num_matches", &mut p.num_spectrum_matches)?;
    o.assign("myrimatch_num_ptms", &mut p.max_dynamic_mods)?;
    o.assign("myrimatch_fragmentation", &mut p.fragmentation_rule)?;
    o.assign("myrimatch_termini", &mut p.min_termini)?;
    o.assign("myrimatch_plus_three", &mut p.use_smart_plus_three)?;
    o.assign("myrimatch_xcorr", &mut p.compute_xcorr)?;
    o.assign("myrimatch_tic_cutoff", &mut p.tic_cutoff)?;
    o.assign("myrimatch_intensity_classes", &mut p.intensity_classes)?;
    o.assign("myrimatch_class_multiplier", &mut p.class_size_multiplier)?;
    o.assign("myrimatch_num_batches", &mut p.num_batches)?;
    o.assign("myrimatch_max_peak", &mut p.max_peak_count)?;
    o.assign("myrimatch_output", &mut p.output_format)?;
    Ok(p)
}

fn bind_comet(o: &RawOptionSet) -> Result<CometParameters, ConversionError> {
    let mut p = CometParameters::default();
    o.assign("comet_num_matches", &mut p.num_spectrum_matches)?;
    o.assign("comet_num_ptms", &mut p.max_variable_mods)?;
    o.assign("comet_req_ptms", &mut p.require_variable_mods)?;
    o.assign("comet_min_peaks", &mut p.min_peaks)?;
    o.assign("comet_min_peak_int", &mut p.min_peak_intensity)?;
    o.assign("comet_remove_prec", &mut p.remove_precursor)?;
    o.assign("comet_remove_prec_tol", &mut p.remove_precursor_tolerance)?;
    o.assign("comet_clear_mz_range_lower", &mut p.lower_clear_mz_range)?;
    o.assign("comet_clear_mz_range_upper", &mut p.upper_clear_mz_range)?;
    o.assign("comet_enzyme_type", &mut p.enzyme_type)?;
    o.assign("comet_isotope_correction", &mut p.isotope_correction)?;
    o.assign("comet_min_prec_mass", &mut p.min_precursor_mass)?;
    o.assign("comet_max_prec_mass", &mut p.max_precursor_mass)?;
    o.assign("comet_max_frag_charge", &mut p.max_fragment_charge)?;
    o.assign("comet_remove_meth", &mut p.remove_methionine)?;
    o.assign("comet_batch_size", &mut p.batch_size)?;
    o.assign("comet_theoretical_fragment_ions", &mut p.theoretical_fragment_ions)?;
    o.assign("comet_frag_bin_offset", &mut p.fragment_bin_offset)?;
    o.assign("comet_sparse_matrix", &mut p.use_sparse_matrix)?;
    Ok(p)
}

fn bind_tide(o: &RawOptionSet) -> Result<TideParameters, ConversionError> {
    let mut p = TideParameters::default();
    o.assign_some("tide_num_ptms", &mut p.max_variable_mods)?;
    o.assign("tide_num_ptms_per_type", &mut p.max_variable_mods_per_type)?;
    o.assign("tide_min_pep_length", &mut p.min_peptide_length)?;
    o.assign("tide_max_pep_length", &mut p.max_peptide_length)?;
    o.assign("tide_min_prec_mass", &mut p.min_precursor_mass)?;
    o.assign("tide_max_prec_mass", &mut p.max_precursor_mass)?;
    o.assign("tide_decoy_format", &mut p.decoy_format)?;
    o.assign("tide_keep_terminals", &mut p.kept_terminals)?;
    o.assign("tide_dedoy_seed", &mut p.decoy_seed)?;
    o.assign("tide_output_folder", &mut p.output_folder)?;
    o.assign("tide_print_peptides", &mut p.print_peptides)?;
    o.assign("tide_verbosity", &mut p.verbosity)?;
    o.assign("tide_monoisotopic", &mut p.monoisotopic_precursor)?;
    o.assign("tide_clip_n_term", &mut p.clip_n_term_methionine)?;
    o.assign("tide_digestion_type", &mut p.digestion)?;
    o.assign("tide_compute_sp", &mut p.compute_sp)?;
    o.assign("tide_max_psms", &mut p.max_psms)?;
    o.assign("tide_compute_p", &mut p.compute_exact_p_values)?;
    o.assign("tide_min_spectrum_mz", &mut p.min_spectrum_mz)?;
    o.assign_some("tide_max_spectrum_mz", &mut p.max_spectrum_mz)?;
    o.assign("tide_min_spectrum_peaks", &mut p.min_spectrum_peaks)?;
    o.assign("tide_spectrum_charges", &mut p.spectrum_charges)?;
    o.assign("tide_remove_prec", &mut p.remove_precursor)?;
    o.assign("tide_remove_prec_tol", &mut p.remove_precursor_tolerance)?;
    o.assign("tide_progress_indicator", &mut p.progress_indicator)?;
    o.assign("tide_use_flanking", &mut p.use_flanking_peaks)?;
    o.assign("tide_use_neutral_losses", &mut p.use_neutral_loss_peaks)?;
    o.assign("tide_mz_bin_width", &mut p.mz_bin_width)?;
    o.assign("tide_mz_bin_offset", &mut p.mz_bin_offset)?;
    o.assign("tide_concat", &mut p.concatenate_target_decoy)?;
    o.assign_some("tide_store_spectra", &mut p.store_spectra_file)?;
    o.assign("tide_export_text", &mut p.export_text)?;
    o.assign("tide_export_sqt", &mut p.export_sqt)?;
    o.assign("tide_export_pepxml", &mut p.export_pepxml)?;
    o.assign("tide_export_mzid", &mut p.export_mzid)?;
    o.assign("tide_export_pin", &mut p.export_pin)?;
    o.assign("tide_remove_temp", &mut p.remove_temp_folders)?;
    Ok(p)
}

fn bind_pepnovo(o: &RawOptionSet) -> Result<PepNovoParameters, ConversionError> {
    let mut p = PepNovoParameters::default();
    o.assign("pepnovo_hitlist_length", &mut p.hitlist_length)?;
    o.assign("pepnovo_estimate_charge", &mut p.estimate_charge)?;
    o.assign("pepnovo_correct_prec_mass", &mut p.correct_precursor_mass)?;
    o.assign("pepnovo_discard_spectra", &mut p.discard_low_quality_spectra)?;
    o.assign("pepnovo_fragmentation_model", &mut p.fragmentation_model)?;
    o.assign("pepnovo_generate_blast", &mut p.generate_blast_query)?;
    Ok(p)
}

fn bind_directag(o: &RawOptionSet) -> Result<DirecTagParameters, ConversionError> {
    let mut p = DirecTagParameters::default();
    o.assign("directag_tic_cutoff", &mut p.tic_cutoff_percentage)?;
    o.assign("directag_max_peak_count", &mut p.max_peak_count)?;
    o.assign("directag_intensity_classes", &mut p.intensity_classes)?;
    o.assign("directag_adjust_precursor", &mut p.adjust_precursor_mass)?;
    o.assign("directag_min_adjustment", &mut p.min_precursor_adjustment)?;
    o.assign("directag_max_adjustment", &mut p.max_precursor_adjustment)?;
    o.assign("directag_adjustment_step", &mut p.precursor_adjustment_step)?;
    o.assign("directag_charge_states", &mut p.num_charge_states)?;
    o.assign("directag_output_suffix", &mut p.output_suffix)?;
    o.assign("directag_ms_charge_state", &mut p.use_charge_state_from_ms)?;
    o.assign("directag_duplicate_spectra", &mut p.duplicate_spectra)?;
    o.assign("directag_deisotoping", &mut p.deisotoping_mode)?;
    o.assign("directag_isotope_tolerance", &mut p.isotope_mz_tolerance)?;
    o.assign("directag_complement_tolerance", &mut p.complement_mz_tolerance)?;
    o.assign("directag_tag_length", &mut p.tag_length)?;
    o.assign("directag_max_var_mods", &mut p.max_dynamic_mods)?;
    o.assign("directag_max_tag_count", &mut p.max_tag_count)?;
    o.assign("directag_intensity_weight", &mut p.intensity_score_weight)?;
    o.assign("directag_fidelity_weight", &mut p.mz_fidelity_score_weight)?;
    o.assign("directag_complement_weight", &mut p.complement_score_weight)?;
    Ok(p)
}

fn bind_pnovo(o: &RawOptionSet) -> Result<PNovoParameters, ConversionError> {
    let mut p = PNovoParameters::default();
    o.assign("pnovo_num_peptides", &mut p.peptides_per_spectrum)?;
    o.assign("pnovo_lower_prec", &mut p.lower_precursor_mass)?;
    o.assign("pnovo_upper_prec", &mut p.upper_precursor_mass)?;
    o.assign("pnovo_activation", &mut p.activation)?;
    Ok(p)
}

use super::validators::ValidationRule;
use phf::{Map, phf_map};

const COUNT: ValidationRule = ValidationRule::PositiveInteger { allow_zero: false };
const COUNT_OR_ZERO: ValidationRule = ValidationRule::PositiveInteger { allow_zero: true };
const AMOUNT: ValidationRule = ValidationRule::PositiveDouble { allow_zero: false };
const AMOUNT_OR_ZERO: ValidationRule = ValidationRule::PositiveDouble { allow_zero: true };
const INTEGER: ValidationRule = ValidationRule::PlainInteger;
const DOUBLE: ValidationRule = ValidationRule::PlainDouble;
const FLAG: ValidationRule = ValidationRule::Boolean01;

const fn one_of(allowed: &'static [&'static str]) -> ValidationRule {
    ValidationRule::EnumMembership(allowed)
}

pub const ACCURACY_CODES: &[&str] = &["1", "2"];
pub const OMSSA_FORMATS: &[&str] = &["0", "1", "2"];
pub const MSGF_INSTRUMENTS: &[&str] = &["0", "1", "2", "3"];
pub const MSGF_FRAGMENTATIONS: &[&str] = &["0", "1", "2", "3"];
pub const MSGF_PROTOCOLS: &[&str] = &["0", "1", "2", "3", "4", "5"];
pub const ENZYMATIC_TERMINI: &[&str] = &["0", "1", "2"];
pub const MYRIMATCH_OUTPUT_FORMATS: &[&str] = &["mzIdentML", "pepXML"];
pub const COMET_PRECURSOR_REMOVAL: &[&str] = &["0", "1", "2"];
pub const COMET_ENZYME_TYPES: &[&str] = &["1", "2", "8", "9"];
pub const COMET_ISOTOPE_CORRECTIONS: &[&str] = &["0", "1", "2"];
pub const TIDE_DECOY_FORMATS: &[&str] = &["none", "shuffle", "peptide-reverse", "protein-reverse"];
pub const TIDE_KEPT_TERMINALS: &[&str] = &["N", "C", "NC"];
pub const TIDE_VERBOSITY_LEVELS: &[&str] = &["0", "10", "20", "30", "40", "50", "60"];
pub const TIDE_DIGESTION_TYPES: &[&str] = &["full-digest", "partial-digest"];
pub const TIDE_SPECTRUM_CHARGES: &[&str] = &["1", "2", "3", "all"];
pub const PEPNOVO_FRAGMENTATION_MODELS: &[&str] = &["CID_IT_TRYP"];
pub const DIRECTAG_DEISOTOPING_MODES: &[&str] = &["0", "1", "2"];
pub const PNOVO_ACTIVATION_TYPES: &[&str] = &["HCD", "CID", "ETD"];

/// The rule each validated option must satisfy.
///
/// Options missing from the table (paths, free text, catalog names and the
/// `mods` flag) are accepted as given; catalog names are resolved separately.
#[rustfmt::skip]
pub static OPTION_RULES: Map<&'static str, ValidationRule> = phf_map! {
    // --- General ---
    "prec_ppm" => one_of(ACCURACY_CODES),
    "frag_ppm" => one_of(ACCURACY_CODES),
    "prec_tol" => AMOUNT,
    "frag_tol" => AMOUNT,
    "mc" => COUNT_OR_ZERO,
    "min_charge" => COUNT,
    "max_charge" => COUNT,

    // --- OMSSA ---
    "omssa_memory" => FLAG,
    "omssa_isotopes" => COUNT_OR_ZERO,
    "omssa_neutron" => AMOUNT,
    "omssa_low_intensity" => AMOUNT_OR_ZERO,
    "omssa_high_intensity" => AMOUNT,
    "omssa_intensity_incr" => AMOUNT,
    "omssa_single_window_wd" => COUNT,
    "omssa_double_window_wd" => COUNT,
    "omssa_single_window_pk" => COUNT,
    "omssa_double_window_pk" => COUNT,
    "omssa_min_ann_int_pks" => COUNT,
    "omssa_min_annotated_peaks" => COUNT,
    "omssa_min_peaks" => COUNT,
    "omssa_methionine" => FLAG,
    "omssa_max_ladders" => COUNT,
    "omssa_max_frag_charge" => COUNT,
    "omssa_fraction" => AMOUNT,
    "omssa_plus_one" => FLAG,
    "omssa_charge" => FLAG,
    "omssa_prec_per_spectrum" => COUNT,
    "omssa_forward" => FLAG,
    "omssa_rewind" => FLAG,
    "omssa_max_frag_series" => COUNT,
    "omssa_corr" => FLAG,
    "omssa_consecutive_p" => AMOUNT,
    "omssa_it_sequence_evalue" => AMOUNT_OR_ZERO,
    "omssa_it_spectrum_evalue" => AMOUNT,
    "omssa_it_replace_evalue" => AMOUNT,
    "omssa_remove_prec" => FLAG,
    "omssa_scale_prec" => FLAG,
    "omssa_estimate_charge" => FLAG,
    "omssa_max_evalue" => AMOUNT,
    "omssa_hitlist_length" => COUNT_OR_ZERO,
    "omssa_hitlist_charge" => COUNT,
    "omssa_min_pep_length" => COUNT,
    "omssa_max_pep_length" => COUNT,
    "omssa_format" => one_of(OMSSA_FORMATS),

    // --- X!Tandem ---
    "xtandem_dynamic_range" => AMOUNT,
    "xtandem_npeaks" => COUNT,
    "xtandem_min_frag_mz" => AMOUNT,
    "xtandem_min_peaks" => COUNT,
    "xtandem_noise_suppr" => FLAG,
    "xtandem_min_prec_mass" => AMOUNT,
    "xtandem_quick_acetyl" => FLAG,
    "xtandem_quick_pyro" => FLAG,
    "xtandem_stp_bias" => FLAG,
    "xtandem_refine" => FLAG,
    "xtandem_refine_evalue" => AMOUNT,
    "xtandem_refine_unc" => FLAG,
    "xtandem_refine_semi" => FLAG,
    "xtandem_refine_pot" => FLAG,
    "xtandem_refine_p_mut" => FLAG,
    "xtandem_refine_snaps" => FLAG,
    "xtandem_refine_spec_synt" => FLAG,
    "xtandem_evalue" => AMOUNT,
    "xtandem_output_proteins" => FLAG,
    "xtandem_output_sequences" => FLAG,
    "xtandem_output_spectra" => FLAG,

    // --- MS-GF+ ---
    "msgf_decoy" => FLAG,
    "msgf_instrument" => one_of(MSGF_INSTRUMENTS),
    "msgf_fragmentation" => one_of(MSGF_FRAGMENTATIONS),
    "msgf_protocol" => one_of(MSGF_PROTOCOLS),
    "msgf_min_pep_length" => COUNT,
    "msgf_max_pep_length" => COUNT,
    "msgf_num_matches" => COUNT,
    "msgf_additional" => FLAG,
    "msgf_isotope_low" => COUNT_OR_ZERO,
    "msgf_isotope_high" => COUNT_OR_ZERO,
    "msgf_termini" => one_of(ENZYMATIC_TERMINI),
    "msgf_num_ptms" => COUNT_OR_ZERO,

    // --- MS Amanda ---
    "ms_amanda_decoy" => FLAG,
    "ms_amanda_max_rank" => COUNT,
    "ms_amanda_mono" => FLAG,
    "ms_low_mem_mode" => FLAG,

    // --- MyriMatch ---
    "myrimatch_min_pep_length" => COUNT,
    "myrimatch_max_pep_length" => COUNT,
    "myrimatch_min_prec_mass" => AMOUNT_OR_ZERO,
    "myrimatch_max_prec_mass" => AMOUNT,
    "myrimatch_isotope_low" => INTEGER,
    "myrimatch_isotope_high" => INTEGER,
    "myrimatch_num_matches" => COUNT,
    "myrimatch_num_ptms" => COUNT_OR_ZERO,
    "myrimatch_termini" => one_of(ENZYMATIC_TERMINI),
    "myrimatch_plus_three" => FLAG,
    "myrimatch_xcorr" => FLAG,
    "myrimatch_tic_cutoff" => ValidationRule::DoubleRange { min: 0.0, max: 1.0 },
    "myrimatch_intensity_classes" => COUNT_OR_ZERO,
    "myrimatch_class_multiplier" => COUNT_OR_ZERO,
    "myrimatch_num_batches" => COUNT,
    "myrimatch_max_peak" => COUNT,
    "myrimatch_output" => one_of(MYRIMATCH_OUTPUT_FORMATS),

    // --- Comet ---
    "comet_num_matches" => COUNT,
    "comet_num_ptms" => COUNT_OR_ZERO,
    "comet_req_ptms" => FLAG,
    "comet_min_peaks" => COUNT,
    "comet_min_peak_int" => AMOUNT_OR_ZERO,
    "comet_remove_prec" => one_of(COMET_PRECURSOR_REMOVAL),
    "comet_remove_prec_tol" => AMOUNT,
    "comet_clear_mz_range_lower" => AMOUNT_OR_ZERO,
    "comet_clear_mz_range_upper" => AMOUNT_OR_ZERO,
    "comet_enzyme_type" => one_of(COMET_ENZYME_TYPES),
    "comet_isotope_correction" => one_of(COMET_ISOTOPE_CORRECTIONS),
    "comet_min_prec_mass" => AMOUNT_OR_ZERO,
    "comet_max_prec_mass" => AMOUNT_OR_ZERO,
    "comet_max_frag_charge" => ValidationRule::IntegerRange { min: 1, max: 5 },
    "comet_remove_meth" => FLAG,
    "comet_batch_size" => COUNT_OR_ZERO,
    "comet_theoretical_fragment_ions" => FLAG,
    "comet_frag_bin_offset" => AMOUNT_OR_ZERO,
    "comet_sparse_matrix" => FLAG,

    // --- Tide ---
    "tide_num_ptms" => COUNT_OR_ZERO,
    "tide_num_ptms_per_type" => COUNT_OR_ZERO,
    "tide_min_pep_length" => COUNT_OR_ZERO,
    "tide_max_pep_length" => COUNT,
    "tide_min_prec_mass" => AMOUNT_OR_ZERO,
    "tide_max_prec_mass" => AMOUNT_OR_ZERO,
    "tide_decoy_format" => one_of(TIDE_DECOY_FORMATS),
    "tide_keep_terminals" => one_of(TIDE_KEPT_TERMINALS),
    "tide_dedoy_seed" => COUNT,
    "tide_print_peptides" => FLAG,
    "tide_verbosity" => one_of(TIDE_VERBOSITY_LEVELS),
    "tide_monoisotopic" => FLAG,
    "tide_clip_n_term" => FLAG,
    "tide_digestion_type" => one_of(TIDE_DIGESTION_TYPES),
    "tide_compute_sp" => FLAG,
    "tide_max_psms" => COUNT,
    "tide_compute_p" => FLAG,
    "tide_min_spectrum_mz" => AMOUNT_OR_ZERO,
    "tide_max_spectrum_mz" => AMOUNT_OR_ZERO,
    "tide_min_spectrum_peaks" => COUNT,
    "tide_spectrum_charges" => one_of(TIDE_SPECTRUM_CHARGES),
    "tide_remove_prec" => FLAG,
    "tide_remove_prec_tol" => AMOUNT,
    "tide_progress_indicator" => COUNT_OR_ZERO,
    "tide_use_flanking" => FLAG,
    "tide_use_neutral_losses" => FLAG,
    "tide_mz_bin_width" => AMOUNT_OR_ZERO,
    "tide_mz_bin_offset" => AMOUNT_OR_ZERO,
    "tide_concat" => FLAG,
    "tide_export_text" => FLAG,
    "tide_export_sqt" => FLAG,
    "tide_export_pepxml" => FLAG,
    "tide_export_mzid" => FLAG,
    "tide_export_pin" => FLAG,
    "tide_remove_temp" => FLAG,

    // --- PepNovo+ ---
    "pepnovo_hitlist_length" => ValidationRule::IntegerRange { min: 1, max: 20 },
    "pepnovo_estimate_charge" => FLAG,
    "pepnovo_correct_prec_mass" => FLAG,
    "pepnovo_discard_spectra" => FLAG,
    "pepnovo_fragmentation_model" => one_of(PEPNOVO_FRAGMENTATION_MODELS),
    "pepnovo_generate_blast" => FLAG,

    // --- DirecTag ---
    "directag_tic_cutoff" => ValidationRule::IntegerRange { min: 0, max: 100 },
    "directag_max_peak_count" => COUNT_OR_ZERO,
    "directag_intensity_classes" => COUNT_OR_ZERO,
    "directag_adjust_precursor" => FLAG,
    "directag_min_adjustment" => DOUBLE,
    "directag_max_adjustment" => DOUBLE,
    "directag_adjustment_step" => DOUBLE,
    "directag_charge_states" => COUNT_OR_ZERO,
    "directag_ms_charge_state" => FLAG,
    "directag_duplicate_spectra" => FLAG,
    "directag_deisotoping" => one_of(DIRECTAG_DEISOTOPING_MODES),
    "directag_isotope_tolerance" => AMOUNT,
    "directag_complement_tolerance" => AMOUNT,
    "directag_tag_length" => COUNT,
    "directag_max_var_mods" => COUNT_OR_ZERO,
    "directag_max_tag_count" => COUNT,
    "directag_intensity_weight" => AMOUNT_OR_ZERO,
    "directag_fidelity_weight" => AMOUNT_OR_ZERO,
    "directag_complement_weight" => AMOUNT_OR_ZERO,

    // --- pNovo+ ---
    "pnovo_num_peptides" => COUNT,
    "pnovo_lower_prec" => AMOUNT_OR_ZERO,
    "pnovo_upper_prec" => AMOUNT,
    "pnovo_activation" => one_of(PNOVO_ACTIVATION_TYPES),
};

pub fn rule_for(id: &str) -> Option<&'static ValidationRule> {
    OPTION_RULES.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::catalog;

    #[test]
    fn every_rule_belongs_to_a_catalog_option() {
        for id in OPTION_RULES.keys() {
            assert!(catalog::lookup(id).is_some(), "rule for unknown option {}", id);
        }
    }

    #[test]
    fn free_text_options_have_no_rule() {
        for id in [
            "out",
            "db",
            "enzyme",
            "fixed_mods",
            "variable_mods",
            "fi",
            "ri",
            "mods",
            "xtandem_skyline_path",
            "ms_amanda_instrument",
            "myrimatch_fragmentation",
            "tide_output_folder",
            "tide_store_spectra",
            "directag_output_suffix",
        ] {
            assert!(rule_for(id).is_none(), "{} should not be validated", id);
        }
    }

    #[test]
    fn boolean_options_accept_only_zero_and_one() {
        let flags: Vec<_> = OPTION_RULES
            .entries()
            .filter(|(_, rule)| **rule == FLAG)
            .map(|(id, _)| *id)
            .collect();
        assert!(flags.len() > 50);
        for id in flags {
            let rule = rule_for(id).unwrap();
            assert!(rule.validate(id, "0").is_ok());
            assert!(rule.validate(id, "1").is_ok());
            for bad in ["2", "true", "", "-1"] {
                assert!(rule.validate(id, bad).is_err(), "{} accepted {:?}", id, bad);
            }
        }
    }

    #[test]
    fn integer_ranges_are_inclusive() {
        for (id, rule) in OPTION_RULES.entries() {
            if let ValidationRule::IntegerRange { min, max } = *rule {
                assert!(rule.validate(id, &min.to_string()).is_ok());
                assert!(rule.validate(id, &max.to_string()).is_ok());
                assert!(rule.validate(id, &(min - 1).to_string()).is_err());
                assert!(rule.validate(id, &(max + 1).to_string()).is_err());
                let error = rule.validate(id, "many").unwrap_err();
                assert!(error.violation.is_type_mismatch(), "{}", id);
            }
        }
    }

    #[test]
    fn enumerated_options_list_members_in_declared_order() {
        for (id, rule) in OPTION_RULES.entries() {
            if let ValidationRule::EnumMembership(allowed) = *rule {
                for member in allowed {
                    assert!(rule.validate(id, member).is_ok());
                }
                let error = rule.validate(id, "unknown").unwrap_err();
                assert!(error.to_string().contains(&allowed.join(", ")));
            }
        }
    }

    #[test]
    fn enumerated_options_are_case_sensitive() {
        let rule = rule_for("pnovo_activation").unwrap();
        assert!(rule.validate("pnovo_activation", "HCD").is_ok());
        assert!(rule.validate("pnovo_activation", "hcd").is_err());
    }

    #[test]
    fn missed_cleavages_allow_zero_but_not_negative() {
        let rule = rule_for("mc").unwrap();
        assert!(rule.validate("mc", "0").is_ok());
        let error = rule.validate("mc", "-1").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Error parsing the mc option: Negative value found."
        );
    }
}

use crate::core::models::algorithms::Algorithm;
use std::iter;

/// The group an option belongs to; drives usage layout and binder dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    General,
    Engine(Algorithm),
}

impl Section {
    /// Every section in usage order: general settings first, then each engine.
    pub fn all() -> impl Iterator<Item = Section> {
        iter::once(Section::General).chain(Algorithm::ALL.into_iter().map(Section::Engine))
    }

    /// The usage heading the section's options are listed under.
    pub fn heading(self) -> &'static str {
        match self {
            Section::General => "Search Parameters",
            Section::Engine(algorithm) => algorithm.name(),
        }
    }
}

/// One recognized command-line option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDescriptor {
    pub id: &'static str,
    pub description: &'static str,
    pub mandatory: bool,
    pub section: Section,
    /// `false` for bare flags such as `mods`.
    pub takes_value: bool,
}

const fn general(id: &'static str, description: &'static str) -> OptionDescriptor {
    OptionDescriptor {
        id,
        description,
        mandatory: false,
        section: Section::General,
        takes_value: true,
    }
}

const fn required(id: &'static str, description: &'static str) -> OptionDescriptor {
    OptionDescriptor {
        mandatory: true,
        ..general(id, description)
    }
}

const fn flag(id: &'static str, description: &'static str) -> OptionDescriptor {
    OptionDescriptor {
        takes_value: false,
        ..general(id, description)
    }
}

const fn engine(
    algorithm: Algorithm,
    id: &'static str,
    description: &'static str,
) -> OptionDescriptor {
    OptionDescriptor {
        section: Section::Engine(algorithm),
        ..general(id, description)
    }
}

use Algorithm::{
    Comet, DirecTag, MsAmanda, MsgfPlus, MyriMatch, Omssa, PNovo, PepNovo, Tide, XTandem,
};

pub const OUTPUT: &str = "out";
pub const DATABASE: &str = "db";
pub const PRECURSOR_ACCURACY: &str = "prec_ppm";
pub const FRAGMENT_ACCURACY: &str = "frag_ppm";
pub const PRECURSOR_TOLERANCE: &str = "prec_tol";
pub const FRAGMENT_TOLERANCE: &str = "frag_tol";
pub const ENZYME: &str = "enzyme";
pub const FIXED_MODIFICATIONS: &str = "fixed_mods";
pub const VARIABLE_MODIFICATIONS: &str = "variable_mods";
pub const MIN_CHARGE: &str = "min_charge";
pub const MAX_CHARGE: &str = "max_charge";
pub const MISSED_CLEAVAGES: &str = "mc";
pub const FORWARD_ION: &str = "fi";
pub const REWIND_ION: &str = "ri";
pub const LIST_MODIFICATIONS: &str = "mods";

/// Every recognized option, in usage order.
#[rustfmt::skip]
pub static CATALOG: &[OptionDescriptor] = &[
    // --- General ---
    required(OUTPUT, "The destination Identification Parameters file (.parameters)."),
    required(DATABASE, "The sequence database in FASTA format."),
    general(PRECURSOR_ACCURACY, "Precursor ion tolerance unit: ppm (1) or Da (2), default is '1'."),
    general(FRAGMENT_ACCURACY, "Fragment ion tolerance unit: ppm (1) or Da (2), default is '2'."),
    general(PRECURSOR_TOLERANCE, "Precursor ion mass tolerance, default is '10' ppm."),
    general(FRAGMENT_TOLERANCE, "Fragment ion mass tolerance, default is '0.5' Da."),
    general(ENZYME, "Enzyme, default is 'Trypsin'. Available enzymes are listed with their exact names. (Note: case sensitive.)"),
    general(FIXED_MODIFICATIONS, "Fixed modifications as comma separated list, e.g., \"Oxidation of M, Phosphorylation of S\"."),
    general(VARIABLE_MODIFICATIONS, "Variable modifications as comma separated list, e.g., \"Oxidation of M, Phosphorylation of S\"."),
    general(MIN_CHARGE, "Minimal charge to search for, default is '2'."),
    general(MAX_CHARGE, "Maximal charge to search for, default is '4'."),
    general(MISSED_CLEAVAGES, "Number of allowed missed cleavages, default is '2'."),
    general(FORWARD_ION, "Type of forward ion searched, default is 'b'."),
    general(REWIND_ION, "Type of rewind ion searched, default is 'y'."),
    flag(LIST_MODIFICATIONS, "Lists the available modifications."),

    // --- OMSSA ---
    engine(Omssa, "omssa_memory", "OMSSA map sequences in memory option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_isotopes", "OMSSA number of isotopes option, integer, 0: monoisotopic, default is '0'."),
    engine(Omssa, "omssa_neutron", "Mass after which OMSSA should consider neutron exact mass, default is '1446.94'."),
    engine(Omssa, "omssa_low_intensity", "OMSSA low intensity cutoff as percentage of the most intense peak, default is '0.0'."),
    engine(Omssa, "omssa_high_intensity", "OMSSA high intensity cutoff as percentage of the most intense peak, default is '0.2'."),
    engine(Omssa, "omssa_intensity_incr", "OMSSA intensity increment, default is '0.0005'."),
    engine(Omssa, "omssa_single_window_wd", "OMSSA single charge window width in Da, integer, default is '27'."),
    engine(Omssa, "omssa_double_window_wd", "OMSSA double charge window width in Da, integer, default is '14'."),
    engine(Omssa, "omssa_single_window_pk", "OMSSA single charge window number of peaks, integer, default is '2'."),
    engine(Omssa, "omssa_double_window_pk", "OMSSA double charge window number of peaks, integer, default is '2'."),
    engine(Omssa, "omssa_min_ann_int_pks", "OMSSA minimum number of annotated peaks among the most intense ones, integer, default is '6'."),
    engine(Omssa, "omssa_min_annotated_peaks", "OMSSA minimum number of annotated peaks, integer, default is '2'."),
    engine(Omssa, "omssa_min_peaks", "OMSSA minimum number of peaks, integer, default is '4'."),
    engine(Omssa, "omssa_methionine", "OMSSA N-terminal methionine cleavage option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_max_ladders", "OMSSA maximum number of m/z ladders, integer, default is '128'."),
    engine(Omssa, "omssa_max_frag_charge", "OMSSA maximum fragment charge, integer, default is '2'."),
    engine(Omssa, "omssa_fraction", "OMSSA fraction of peaks to estimate charge 1, default is '0.95'."),
    engine(Omssa, "omssa_plus_one", "OMSSA estimate plus one charge algorithmically option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_charge", "OMSSA fragment charge option, 1: plus, 0: minus, default is '1'."),
    engine(Omssa, "omssa_prec_per_spectrum", "OMSSA minimum number of precursors per spectrum, integer, default is '1'."),
    engine(Omssa, "omssa_forward", "OMSSA include first forward ion (b1) in search, 1: true, 0: false, default is '0'."),
    engine(Omssa, "omssa_rewind", "OMSSA search rewind (C-terminal) ions option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_max_frag_series", "OMSSA maximum fragment per series option, integer, default is '100'."),
    engine(Omssa, "omssa_corr", "OMSSA use correlation correction score option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_consecutive_p", "OMSSA consecutive ion probability, default is '0.5'."),
    engine(Omssa, "omssa_it_sequence_evalue", "OMSSA e-value cutoff to consider a sequence in the iterative search, 0.0 means all, default is '0.0'."),
    engine(Omssa, "omssa_it_spectrum_evalue", "OMSSA e-value cutoff to consider a spectrum in the iterative search, 0.0 means all, default is '0.01'."),
    engine(Omssa, "omssa_it_replace_evalue", "OMSSA e-value cutoff to replace a hit in the iterative search, 0.0 means keep best, default is '0.0'."),
    engine(Omssa, "omssa_remove_prec", "OMSSA remove precursor option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_scale_prec", "OMSSA scale precursor mass option, 1: true, 0: false, default is '0'."),
    engine(Omssa, "omssa_estimate_charge", "OMSSA estimate precursor charge option, 1: true, 0: false, default is '1'."),
    engine(Omssa, "omssa_max_evalue", "OMSSA maximal evalue considered, default is '100'."),
    engine(Omssa, "omssa_hitlist_length", "OMSSA hitlist length, 0 means all, default is '0'."),
    engine(Omssa, "omssa_hitlist_charge", "OMSSA number of hits per spectrum per charge, default is '30'."),
    engine(Omssa, "omssa_min_pep_length", "OMSSA minimum peptide length (semi-tryptic or no enzyme searches only), default is '6'."),
    engine(Omssa, "omssa_max_pep_length", "OMSSA maximum peptide length (semi-tryptic or no enzyme searches only), default is '30'."),
    engine(Omssa, "omssa_format", "OMSSA output format. 0: omx, 1: csv, 2: pepXML, default is 'omx'."),

    // --- X!Tandem ---
    engine(XTandem, "xtandem_dynamic_range", "X!Tandem 'spectrum, dynamic range' option, default is '100'."),
    engine(XTandem, "xtandem_npeaks", "X!Tandem 'spectrum, total peaks' option, default is '50'."),
    engine(XTandem, "xtandem_min_frag_mz", "X!Tandem 'spectrum, minimum fragment mz' option, default is '200'."),
    engine(XTandem, "xtandem_min_peaks", "X!Tandem 'spectrum, minimum peaks' option, default is '15'."),
    engine(XTandem, "xtandem_noise_suppr", "X!Tandem 'spectrum, use noise suppression' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_min_prec_mass", "X!Tandem 'spectrum, minimum parent m+h' option, default is '500'."),
    engine(XTandem, "xtandem_quick_acetyl", "X!Tandem 'protein, quick acetyl' option. 1: true, 0: false, default is '1'."),
    engine(XTandem, "xtandem_quick_pyro", "X!Tandem 'protein, quick pyrolidone' option. 1: true, 0: false, default is '1'."),
    engine(XTandem, "xtandem_stp_bias", "X!Tandem 'protein, stP bias' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_refine", "X!Tandem 'refine' option. 1: true, 0: false, default is '1'."),
    engine(XTandem, "xtandem_refine_evalue", "X!Tandem 'refine, maximum valid expectation value' option, default is '0.01'."),
    engine(XTandem, "xtandem_refine_unc", "X!Tandem 'refine, unanticipated cleavage' option. 1: true, 0: false, default is '1'."),
    engine(XTandem, "xtandem_refine_semi", "X!Tandem 'refine, cleavage semi' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_refine_pot", "X!Tandem 'refine, use potential modifications for full refinement' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_refine_p_mut", "X!Tandem 'refine, point mutations' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_refine_snaps", "X!Tandem 'refine, saps' option. 1: true, 0: false, default is '1'."),
    engine(XTandem, "xtandem_refine_spec_synt", "X!Tandem 'refine, spectrum synthesis' option. 1: true, 0: false, default is '1'."),
    engine(XTandem, "xtandem_evalue", "X!Tandem 'output, maximum valid expectation value' option, default is '100'."),
    engine(XTandem, "xtandem_output_proteins", "X!Tandem 'output, proteins' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_output_sequences", "X!Tandem 'output, sequences' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_output_spectra", "X!Tandem 'output, spectra' option. 1: true, 0: false, default is '0'."),
    engine(XTandem, "xtandem_skyline_path", "X!Tandem 'spectrum, skyline path' option."),

    // --- MS-GF+ ---
    engine(MsgfPlus, "msgf_decoy", "MS-GF+ search decoys option, 1: true, 0: false, default is '0'."),
    engine(MsgfPlus, "msgf_instrument", "MS-GF+ instrument id option, 0: Low-res LCQ/LTQ, 1: High-res LTQ, 2: TOF, 3: Q-Exactive (Default)."),
    engine(MsgfPlus, "msgf_fragmentation", "MS-GF+ fragmentation id option, 0: As written in the spectrum or CID if no info, 1: CID, 2: ETD, 3: HCD (Default)."),
    engine(MsgfPlus, "msgf_protocol", "MS-GF+ protocol id option, 0: Automatic (Default), 1: Phosphorylation, 2: iTRAQ, 3: iTRAQPhospho, 4: TMT, 5: Standard."),
    engine(MsgfPlus, "msgf_min_pep_length", "MS-GF+ minimum peptide length, default is '6'."),
    engine(MsgfPlus, "msgf_max_pep_length", "MS-GF+ maximum peptide length, default is '30'."),
    engine(MsgfPlus, "msgf_num_matches", "MS-GF+ maximum number of spectrum matches, default is '10'."),
    engine(MsgfPlus, "msgf_additional", "MS-GF+ additional features, 0: output basic scores only (Default), 1: output additional features."),
    engine(MsgfPlus, "msgf_isotope_low", "MS-GF+ lower isotope error range, default is '0'."),
    engine(MsgfPlus, "msgf_isotope_high", "MS-GF+ upper isotope error range, default is '1'."),
    engine(MsgfPlus, "msgf_termini", "MS-GF+ number of tolerable termini, e.g. 0: non-tryptic, 1: semi-tryptic, 2: fully-tryptic, default is '2'."),
    engine(MsgfPlus, "msgf_num_ptms", "MS-GF+ max number of PTMs per peptide, default is '2'."),

    // --- MS Amanda ---
    engine(MsAmanda, "ms_amanda_decoy", "MS Amanda generate decoys option, 0: false, 1: true, default is '0'."),
    engine(MsAmanda, "ms_amanda_instrument", "MS Amanda instrument id option, i.e. the fragment ion types considered, default is 'b, y'. (Note: case sensitive.)"),
    engine(MsAmanda, "ms_amanda_max_rank", "MS Amanda maximum rank, default is '10'."),
    engine(MsAmanda, "ms_amanda_mono", "MS Amanda use monoisotopic mass values, 0: false, 1: true, default is '1'."),
    engine(MsAmanda, "ms_low_mem_mode", "MS Amanda use low memory mode option, 0: false, 1: true, default is '1'."),

    // --- MyriMatch ---
    engine(MyriMatch, "myrimatch_min_pep_length", "MyriMatch minimum peptide length, default is '6'."),
    engine(MyriMatch, "myrimatch_max_pep_length", "MyriMatch maximum peptide length, default is '30'."),
    engine(MyriMatch, "myrimatch_min_prec_mass", "MyriMatch minimum precursor mass, default is '0.0'."),
    engine(MyriMatch, "myrimatch_max_prec_mass", "MyriMatch maximum precursor mass, default is '10000.0'."),
    engine(MyriMatch, "myrimatch_isotope_low", "MyriMatch lower isotope error range, default is '-1'."),
    engine(MyriMatch, "myrimatch_isotope_high", "MyriMatch upper isotope error range, default is '2'."),
    engine(MyriMatch, "myrimatch_num_matches", "MyriMatch maximum number of spectrum matches, default is '10'."),
    engine(MyriMatch, "myrimatch_num_ptms", "MyriMatch max number of PTMs per peptide, default is '2'."),
    engine(MyriMatch, "myrimatch_fragmentation", "MyriMatch fragmentation method, CID (b, y), ETD (c, z*) or manual (a comma-separated list of [abcxyz] or z* (z+1), e.g. manual:b,y,z), default is 'CID'."),
    engine(MyriMatch, "myrimatch_termini", "MyriMatch number of enzymatic termini, e.g. 0: non-tryptic, 1: semi-tryptic, 2: fully-tryptic, default is '2'."),
    engine(MyriMatch, "myrimatch_plus_three", "MyriMatch smart plus three option, 1: true, 0: false, default is '1'."),
    engine(MyriMatch, "myrimatch_xcorr", "MyriMatch xcorr option, 1: true, 0: false, default is '0'."),
    engine(MyriMatch, "myrimatch_tic_cutoff", "MyriMatch TIC cutoff percentage [0.0-1.0], default is '0.98'."),
    engine(MyriMatch, "myrimatch_intensity_classes", "MyriMatch number of intensity classes, default is '3'."),
    engine(MyriMatch, "myrimatch_class_multiplier", "MyriMatch class multiplier option, default is '2'."),
    engine(MyriMatch, "myrimatch_num_batches", "MyriMatch number of batches option, default is '50'."),
    engine(MyriMatch, "myrimatch_max_peak", "MyriMatch max number of peaks option, default is '100'."),
    engine(MyriMatch, "myrimatch_output", "MyriMatch output format option, mzIdentML or pepXML, default is 'mzIdentML'."),

    // --- Comet ---
    engine(Comet, "comet_num_matches", "Comet maximum number of spectrum matches, default is '10'."),
    engine(Comet, "comet_num_ptms", "Comet max number of PTMs per peptide, default is '10'."),
    engine(Comet, "comet_req_ptms", "Comet require at least one variable PTM per peptide, 1: true, 0: false, default is '0'."),
    engine(Comet, "comet_min_peaks", "Comet min number of peaks for a spectrum, default is '10'."),
    engine(Comet, "comet_min_peak_int", "Comet min peak intensity, default is '0.0'."),
    engine(Comet, "comet_remove_prec", "Comet remove precursor, 0: off, 1: on, 2: as expected for ETD/ECD spectra, default is '0'."),
    engine(Comet, "comet_remove_prec_tol", "Comet remove precursor tolerance, default is '1.5'."),
    engine(Comet, "comet_clear_mz_range_lower", "Comet clear mz range lower, default is '0.0'."),
    engine(Comet, "comet_clear_mz_range_upper", "Comet clear mz range upper, default is '0.0'."),
    engine(Comet, "comet_enzyme_type", "Comet enzyme type, 1: semi-specific, 2: full-enzyme, 8: unspecific N-term, 9: unspecific C-term, default is '2'."),
    engine(Comet, "comet_isotope_correction", "Comet isotope correction, 0: off, 1: -1,0,+1,+2,+3, 2: -8,-4,0,+4,+8, default is '0'."),
    engine(Comet, "comet_min_prec_mass", "Comet minimum precursor mass, default is '0.0'."),
    engine(Comet, "comet_max_prec_mass", "Comet maximum precursor mass, default is '10000.0'."),
    engine(Comet, "comet_max_frag_charge", "Comet maximum fragment charge [1-5], default is '3'."),
    engine(Comet, "comet_remove_meth", "Comet remove methionine, 1: true, 0: false, default is '0'."),
    engine(Comet, "comet_batch_size", "Comet batch size, '0' means load and search all spectra at once, default is '0'."),
    engine(Comet, "comet_theoretical_fragment_ions", "Comet theoretical_fragment_ions option, 1: true, 0: false, default is '1'."),
    engine(Comet, "comet_frag_bin_offset", "Comet fragment bin offset, default is '0.0'."),
    engine(Comet, "comet_sparse_matrix", "Comet use sparse matrix, 1: true, 0: false, default is '1'."),

    // --- Tide ---
    engine(Tide, "tide_num_ptms", "Tide max number of PTMs per peptide, default is no limit."),
    engine(Tide, "tide_num_ptms_per_type", "Tide max number of PTMs of each type per peptide, default is '2'."),
    engine(Tide, "tide_min_pep_length", "Tide minimum peptide length, default is '6'."),
    engine(Tide, "tide_max_pep_length", "Tide maximum peptide length, default is '30'."),
    engine(Tide, "tide_min_prec_mass", "Tide minimum precursor mass, default is '200.0'."),
    engine(Tide, "tide_max_prec_mass", "Tide maximum precursor mass, default is '7200.0'."),
    engine(Tide, "tide_decoy_format", "Tide decoy format (none|shuffle|peptide-reverse|protein-reverse), default is 'none'."),
    engine(Tide, "tide_keep_terminals", "Tide keep terminal amino acids when creating decoys (N|C|NC), default is 'NC'."),
    engine(Tide, "tide_dedoy_seed", "Tide decoy seed, default is '1'."),
    engine(Tide, "tide_output_folder", "Tide output folder (relative to the Tide working folder), default is 'crux-output'."),
    engine(Tide, "tide_print_peptides", "Tide print peptides, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_verbosity", "Tide progress display verbosity (0|10|20|30|40|50|60), default is '30'."),
    engine(Tide, "tide_monoisotopic", "Tide monoisotopic precursor, 1: true, 0: false, default is '1'."),
    engine(Tide, "tide_clip_n_term", "Tide clip n term methionine, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_digestion_type", "Tide digestion type (full-digest or partial-digest), default is 'full-digest'."),
    engine(Tide, "tide_compute_sp", "Tide compute sp score, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_max_psms", "Tide maximum number of spectrum matches per spectrum, default is '10'."),
    engine(Tide, "tide_compute_p", "Tide compute exact p-values, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_min_spectrum_mz", "Tide minimum spectrum mz, default is '0.0'."),
    engine(Tide, "tide_max_spectrum_mz", "Tide maximum spectrum mz, default is no limit."),
    engine(Tide, "tide_min_spectrum_peaks", "Tide min spectrum peaks, default is '20'."),
    engine(Tide, "tide_spectrum_charges", "Tide spectrum charges (1|2|3|all), default is 'all'."),
    engine(Tide, "tide_remove_prec", "Tide remove precursor, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_remove_prec_tol", "Tide remove precursor tolerance, default is '1.5'."),
    engine(Tide, "tide_progress_indicator", "Tide progress indicator frequency, default is '1000'."),
    engine(Tide, "tide_use_flanking", "Tide use flanking peaks, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_use_neutral_losses", "Tide use neutral losses peaks, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_mz_bin_width", "Tide mz bin width, default is '0.02'."),
    engine(Tide, "tide_mz_bin_offset", "Tide mz bin offset, default is '0.0'."),
    engine(Tide, "tide_concat", "Tide concatenate target and decoy results, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_store_spectra", "Tide file name in which to store the binary spectra, default is not set."),
    engine(Tide, "tide_export_text", "Tide export text file, 1: true, 0: false, default is '1'."),
    engine(Tide, "tide_export_sqt", "Tide export SQT file, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_export_pepxml", "Tide export pepxml, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_export_mzid", "Tide export mzid, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_export_pin", "Tide export Percolator input file, 1: true, 0: false, default is '0'."),
    engine(Tide, "tide_remove_temp", "Tide remove temp folders when the search is done, 1: true, 0: false, default is '1'."),

    // --- PepNovo+ ---
    engine(PepNovo, "pepnovo_hitlist_length", "PepNovo+ number of de novo solutions [1-20], default is '10'."),
    engine(PepNovo, "pepnovo_estimate_charge", "PepNovo+ estimate precursor charge option. 1: true, 0: false, default is '1'."),
    engine(PepNovo, "pepnovo_correct_prec_mass", "PepNovo+ correct precursor mass option. 1: true, 0: false, default is '1'."),
    engine(PepNovo, "pepnovo_discard_spectra", "PepNovo+ discard low quality spectra option. 1: true, 0: false, default is '1'."),
    engine(PepNovo, "pepnovo_fragmentation_model", "PepNovo+ fragmentation model, default is 'CID_IT_TRYP'."),
    engine(PepNovo, "pepnovo_generate_blast", "PepNovo+ generate a BLAST query. 1: true, 0: false, default is '0'."),

    // --- DirecTag ---
    engine(DirecTag, "directag_tic_cutoff", "DirecTag TIC cutoff in percent [0-100], default is '85'."),
    engine(DirecTag, "directag_max_peak_count", "DirecTag max peak count, default is '400'."),
    engine(DirecTag, "directag_intensity_classes", "DirecTag number of intensity classes, default is '3'."),
    engine(DirecTag, "directag_adjust_precursor", "DirecTag adjust precursor, 1: true, 0: false, default is '0'."),
    engine(DirecTag, "directag_min_adjustment", "DirecTag minimum precursor adjustment, default is '-2.5'."),
    engine(DirecTag, "directag_max_adjustment", "DirecTag maximum precursor adjustment, default is '2.5'."),
    engine(DirecTag, "directag_adjustment_step", "DirecTag precursor adjustment step, default is '0.1'."),
    engine(DirecTag, "directag_charge_states", "DirecTag number of charge states considered, default is '3'."),
    engine(DirecTag, "directag_output_suffix", "DirecTag output suffix, default is no suffix."),
    engine(DirecTag, "directag_ms_charge_state", "DirecTag use charge state from MS spectrum, 1: true, 0: false, default is '0'."),
    engine(DirecTag, "directag_duplicate_spectra", "DirecTag duplicate spectra per charge, 1: true, 0: false, default is '1'."),
    engine(DirecTag, "directag_deisotoping", "DirecTag deisotoping mode, 0: no deisotoping, 1: precursor only, 2: precursor and candidate, default is '0'."),
    engine(DirecTag, "directag_isotope_tolerance", "DirecTag isotope mz tolerance, default is '0.25'."),
    engine(DirecTag, "directag_complement_tolerance", "DirecTag complement mz tolerance, default is '0.5'."),
    engine(DirecTag, "directag_tag_length", "DirecTag tag length, default is '3'."),
    engine(DirecTag, "directag_max_var_mods", "DirecTag maximum variable modifications per sequence, default is '2'."),
    engine(DirecTag, "directag_max_tag_count", "DirecTag maximum tag count, default is '20'."),
    engine(DirecTag, "directag_intensity_weight", "DirecTag intensity score weight, default is '1.0'."),
    engine(DirecTag, "directag_fidelity_weight", "DirecTag fidelity score weight, default is '1.0'."),
    engine(DirecTag, "directag_complement_weight", "DirecTag complement score weight, default is '1.0'."),

    // --- pNovo+ ---
    engine(PNovo, "pnovo_num_peptides", "pNovo+ number of peptides per spectrum, default is '10'."),
    engine(PNovo, "pnovo_lower_prec", "pNovo+ minimum precursor mass, default is '300'."),
    engine(PNovo, "pnovo_upper_prec", "pNovo+ maximum precursor mass, default is '5000'."),
    engine(PNovo, "pnovo_activation", "pNovo+ activation type (HCD, CID or ETD), default is 'HCD'."),
];

/// Finds the descriptor of `id`.
pub fn lookup(id: &str) -> Option<&'static OptionDescriptor> {
    CATALOG.iter().find(|descriptor| descriptor.id == id)
}

/// Descriptors of one section, in catalog order.
pub fn options_for(section: Section) -> impl Iterator<Item = &'static OptionDescriptor> {
    CATALOG
        .iter()
        .filter(move |descriptor| descriptor.section == section)
}

pub fn mandatory_options() -> impl Iterator<Item = &'static OptionDescriptor> {
    CATALOG.iter().filter(|descriptor| descriptor.mandatory)
}

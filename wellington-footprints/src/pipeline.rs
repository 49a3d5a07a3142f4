use anyhow::{Context, Result};
use log::{debug, info};

use wellington_core::{FootprintCall, FootprintRecord, GenomicInterval, IntervalSet};
use wellington_io::ResultWriter;

use crate::config::{FootprintArgs, FootprintConfig};
use crate::dispatch::Dispatcher;
use crate::fdr::interval_rng;
use crate::scorer::{FootprintScorer, FootprintTrack, ReadSource};

///
/// Counts of what a run wrote.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub intervals: usize,
    pub fdr_eligible_intervals: usize,
    pub fdr_calls: usize,
    /// calls written per fixed p-value cutoff, in cutoff order
    pub cutoff_calls: Vec<(f64, usize)>,
}

///
/// Score one interval, calibrate its FDR cutoff and call its footprints at the FDR cutoff
/// and at every fixed p-value cutoff. Calls at the fixed cutoffs are always merged.
///
pub fn footprint_interval<S: FootprintScorer>(
    interval: &GenomicInterval,
    reads: &dyn ReadSource,
    scorer: &S,
    config: &FootprintConfig,
) -> Result<FootprintRecord> {
    let track = scorer
        .score(interval, reads, &config.params)
        .with_context(|| format!("Failed to score {}", interval))?;

    let mut rng = interval_rng(config.seed, interval);
    let selection = config
        .fdr
        .select(&track, reads, &config.params, &mut rng, config.merge)?;

    // the merge toggle only applies to the FDR calls
    let cutoff_calls = config
        .pv_cutoffs
        .iter()
        .map(|&cutoff| name_calls(track.footprints(cutoff, true), interval))
        .collect();

    Ok(FootprintRecord {
        result: track.to_result()?,
        fdr_threshold: selection.threshold,
        fdr_calls: name_calls(selection.calls, interval),
        cutoff_calls,
    })
}

///
/// Calls the scorer left unnamed take the name of the region they were called in, if the
/// region file had a name column.
///
fn name_calls(mut calls: Vec<FootprintCall>, interval: &GenomicInterval) -> Vec<FootprintCall> {
    if let Some(name) = interval.name() {
        for call in calls.iter_mut().filter(|call| call.name.is_none()) {
            call.name = Some(name.to_string());
        }
    }
    calls
}

///
/// Footprint the intervals of one chunk, one after the other.
///
pub fn footprint_chunk<S: FootprintScorer>(
    intervals: &[GenomicInterval],
    reads: &dyn ReadSource,
    scorer: &S,
    config: &FootprintConfig,
) -> Result<Vec<FootprintRecord>> {
    intervals
        .iter()
        .map(|interval| footprint_interval(interval, reads, scorer, config))
        .collect()
}

///
/// Footprint `intervals` over the configured worker pool. The returned chunks, read in order,
/// follow the order of `intervals`.
///
pub fn compute_footprints<S: FootprintScorer>(
    intervals: &[GenomicInterval],
    reads: &dyn ReadSource,
    scorer: &S,
    config: &FootprintConfig,
) -> Result<Vec<Vec<FootprintRecord>>> {
    let dispatcher = Dispatcher::new(config.threads, config.chunks)?.with_progress(!config.quiet);

    info!(
        "Calculating footprints ({} threads) ...",
        dispatcher.threads()
    );
    debug!(
        "{} intervals split into {} chunks",
        intervals.len(),
        dispatcher.chunk_count()
    );

    dispatcher.run(intervals, |chunk| {
        footprint_chunk(chunk, reads, scorer, config)
    })
}

///
/// Write computed records to the run's output files, in chunk order.
///
pub fn write_footprints(
    chunks: &[Vec<FootprintRecord>],
    config: &FootprintConfig,
) -> Result<RunSummary> {
    info!("Writing output to {}", config.layout.dir.display());

    let mut writer = ResultWriter::create(&config.layout, config.fdr.fraction, &config.pv_cutoffs)
        .context("Failed to open output files")?;

    let mut fdr_eligible_intervals = 0;
    for record in chunks.iter().flatten() {
        writer
            .write_record(record)
            .with_context(|| format!("Failed to write results for {}", record.result.interval))?;
        if record
            .fdr_threshold
            .is_some_and(|threshold| config.fdr.is_significant(threshold))
        {
            fdr_eligible_intervals += 1;
        }
    }

    let summary = RunSummary {
        intervals: writer.intervals_written(),
        fdr_eligible_intervals,
        fdr_calls: writer.fdr_calls_written(),
        cutoff_calls: writer.cutoff_calls_written(),
    };
    writer.finish().context("Failed to flush output files")?;

    Ok(summary)
}

///
/// Footprint every interval of `regions` in chromosome, basepair order and write the results.
///
/// Output files are only created once every interval has been scored, so a failing run leaves
/// the output directory untouched.
///
pub fn run_footprinting<S: FootprintScorer>(
    config: &FootprintConfig,
    regions: &IntervalSet,
    reads: &dyn ReadSource,
    scorer: &S,
) -> Result<RunSummary> {
    let ordered = regions.ordered();
    let chunks = compute_footprints(&ordered, reads, scorer, config)?;
    let summary = write_footprints(&chunks, config)?;

    info!(
        "Footprinted {} intervals: {} FDR footprints in {} FDR-eligible intervals",
        summary.intervals, summary.fdr_calls, summary.fdr_eligible_intervals
    );
    Ok(summary)
}

///
/// Validate `args`, load the region file and run the pipeline.
///
pub fn footprint_from_args<S: FootprintScorer>(
    args: &FootprintArgs,
    reads: &dyn ReadSource,
    scorer: &S,
) -> Result<RunSummary> {
    let config = args.validate()?;
    let regions = IntervalSet::try_from(config.regions.as_path())
        .with_context(|| format!("Failed to load regions from {}", config.regions.display()))?;
    info!("Loaded {} regions", regions.len());

    run_footprinting(&config, &regions, reads, scorer)
}

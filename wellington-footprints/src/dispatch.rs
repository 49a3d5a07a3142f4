use anyhow::{Context, Result};
use indicatif::ProgressBar;
use rayon::ThreadPool;
use rayon::prelude::*;

///
/// Split `items` into `chunk_count` contiguous chunks whose sizes differ by at most one; the
/// first `len % chunk_count` chunks get the extra item. There are always `chunk_count` chunks,
/// trailing ones are empty when there are fewer items than chunks.
///
pub fn split_chunks<T>(items: &[T], chunk_count: usize) -> Vec<&[T]> {
    let chunk_count = chunk_count.max(1);
    let base = items.len() / chunk_count;
    let extra = items.len() % chunk_count;

    let mut chunks = Vec::with_capacity(chunk_count);
    let mut offset = 0;
    for index in 0..chunk_count {
        let size = base + usize::from(index < extra);
        chunks.push(&items[offset..offset + size]);
        offset += size;
    }
    chunks
}

///
/// Runs a per-chunk task over a fixed-size rayon pool.
///
/// The number of chunks and the number of worker threads are separate knobs. Results come
/// back in chunk submission order whatever order the workers finish in.
///
pub struct Dispatcher {
    pool: ThreadPool,
    chunk_count: usize,
    progress: bool,
}

impl Dispatcher {
    pub fn new(threads: usize, chunk_count: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .with_context(|| format!("Failed to build a pool of {} threads", threads))?;

        Ok(Dispatcher {
            pool,
            chunk_count,
            progress: false,
        })
    }

    /// Show a progress bar ticking once per finished chunk
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    ///
    /// Apply `task` to every chunk of `items` in parallel.
    ///
    /// Each chunk is processed start to finish by a single worker. The returned outer vector
    /// holds one entry per chunk, in chunk order. A failing chunk fails the whole run.
    ///
    pub fn run<T, U, F>(&self, items: &[T], task: F) -> Result<Vec<Vec<U>>>
    where
        T: Sync,
        U: Send,
        F: Fn(&[T]) -> Result<Vec<U>> + Sync,
    {
        let chunks = split_chunks(items, self.chunk_count);
        let n_chunks = chunks.len();

        let bar = match self.progress {
            true => ProgressBar::new(n_chunks as u64),
            false => ProgressBar::hidden(),
        };

        let results = self.pool.install(|| {
            chunks
                .par_iter()
                .enumerate()
                .map(|(index, chunk)| {
                    let output = task(*chunk)
                        .with_context(|| format!("Chunk {} of {} failed", index + 1, n_chunks));
                    bar.inc(1);
                    output
                })
                .collect::<Result<Vec<Vec<U>>>>()
        });

        bar.finish_and_clear();
        results
    }
}

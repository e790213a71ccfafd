use std::time::{Duration, Instant};

use list_sort_research::counter::ComparisonCounter;
use list_sort_research::iterative::{bottom_up, doubling};
use list_sort_research::list::{Link, NodeArena};
use list_sort_research::recursion::recursive;
use list_sort_research::verify::{check_reset, check_sorted};
use list_sort_research::{engine_by_name, Engine, ENGINES};
use list_test_tools::lists::{self, Placement};
use list_test_tools::patterns;
use rand::prelude::*;
use tracing::{debug, info, warn};

use crate::report::{self, CountRow, TimeRow};
use crate::{Args, BenchError, Pattern};

/// Engines compared by `--count-comparisons`, in report column order.
const COUNTED: [Engine; 3] = [
    Engine::of::<recursive::SortImpl>(),
    Engine::of::<bottom_up::SortImpl>(),
    Engine::of::<doubling::SortImpl>(),
];

pub fn pin_thread_to_core(core: usize) {
    match core_affinity::get_core_ids().and_then(|ids| ids.get(core).cloned()) {
        Some(core_id) => {
            core_affinity::set_for_current(core_id);
            info!(core, "pinned benchmark thread");
        }
        None => warn!(core, "no such core, benchmark thread not pinned"),
    }
}

struct KeySource {
    pattern: Pattern,
    crypto: bool,
    rng: StdRng,
}

impl KeySource {
    fn new(args: &Args) -> Self {
        Self {
            pattern: args.pattern,
            crypto: args.crypto,
            rng: StdRng::from_entropy(),
        }
    }

    fn keys(&mut self, len: usize) -> Vec<u64> {
        match self.pattern {
            Pattern::Random => self.random(len),
            Pattern::Ascending => patterns::ascending(len),
            Pattern::Descending => patterns::descending(len),
        }
    }

    fn random(&mut self, len: usize) -> Vec<u64> {
        if self.crypto {
            patterns::random_crypto(len)
        } else {
            (0..len).map(|_| self.rng.gen()).collect()
        }
    }
}

fn lengths(args: &Args) -> Result<impl Iterator<Item = usize>, BenchError> {
    if args.increment == 0 {
        return Err(BenchError::ZeroIncrement);
    }
    Ok((args.begin..args.until).step_by(args.increment))
}

pub fn time_sorts(args: &Args) -> Result<(), BenchError> {
    let engine = engine_by_name(&args.engine).ok_or_else(|| {
        let known: Vec<&str> = ENGINES.iter().map(|e| e.name).collect();
        BenchError::UnknownEngine(args.engine.clone(), known.join(", "))
    })?;
    let lengths = lengths(args)?;
    let placement = Placement::from(args.layout);
    let mut keys = KeySource::new(args);

    info!(
        engine = engine.name,
        begin = args.begin,
        until = args.until,
        increment = args.increment,
        iterations = args.iterations,
        "timing sorts"
    );
    report::header(args, &format!("{} sort", engine.name));

    for len in lengths {
        let mut total = Duration::ZERO;
        let mut looping = Duration::ZERO;
        let mut min = Duration::MAX;
        let mut max = Duration::ZERO;

        let mut reused: Option<(NodeArena, Link)> =
            args.reuse.then(|| lists::from_keys(&keys.keys(len), placement));

        for iteration in 0..args.iterations {
            let before_iteration = Instant::now();
            let (mut arena, head) = match reused.take() {
                Some(list) => list,
                None => lists::from_keys(&keys.keys(len), placement),
            };

            let before = Instant::now();
            let sorted = (engine.sort)(&mut arena, head);
            let elapsed = before.elapsed();

            total += elapsed;
            min = min.min(elapsed);
            max = max.max(elapsed);

            check_sorted(&arena, sorted, len).map_err(|source| BenchError::Verify {
                engine: engine.name,
                iteration,
                source,
            })?;
            debug!(len, iteration, secs = elapsed.as_secs_f64(), "sorted");

            if args.reuse {
                arena.refresh_keys(sorted, keys.random(len));
                reused = Some((arena, sorted));
            }

            looping += before_iteration.elapsed();
        }

        report::time_row(
            &TimeRow {
                len,
                mean_secs: (total / args.iterations).as_secs_f64(),
                total_secs: looping.as_secs_f64(),
                min_secs: min.as_secs_f64(),
                max_secs: max.as_secs_f64(),
            },
            args.json,
        )?;
    }

    report::footer(args);
    Ok(())
}

/// Sorts each list with every engine in [`COUNTED`], restoring the original order through the
/// reset chain in between, so all of them see the same input.
pub fn count_comparisons(args: &Args) -> Result<(), BenchError> {
    let lengths = lengths(args)?;
    let placement = Placement::from(args.layout);
    let mut keys = KeySource::new(args);

    info!(begin = args.begin, until = args.until, "counting comparisons");
    report::header(args, "comparison counting");

    let counter = ComparisonCounter::new();
    for len in lengths {
        let (mut arena, head) = lists::from_keys(&keys.keys(len), placement);
        let mut counts = [0u64; COUNTED.len()];

        for (count, engine) in counts.iter_mut().zip(&COUNTED) {
            let verify_error = |source| BenchError::Verify {
                engine: engine.name,
                iteration: 0,
                source,
            };

            counter.reset();
            let sorted = (engine.sort_by)(&mut arena, head, &mut counter.compare());
            *count = counter.count();

            check_sorted(&arena, sorted, len).map_err(verify_error)?;
            check_reset(&mut arena, head, len).map_err(verify_error)?;
        }

        let [recursive, bottom_up, doubling] = counts;
        report::count_row(
            &CountRow {
                len,
                recursive,
                bottom_up,
                doubling,
            },
            args.json,
        )?;
    }

    report::footer(args);
    Ok(())
}

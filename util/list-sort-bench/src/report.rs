use std::mem::size_of;

use chrono::{Local, SecondsFormat};
use list_sort_research::list::Node;
use serde::Serialize;

use crate::{Args, LayoutArg, Pattern};

#[derive(Debug, Serialize)]
pub struct TimeRow {
    pub len: usize,
    pub mean_secs: f64,
    pub total_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
}

#[derive(Debug, Serialize)]
pub struct CountRow {
    pub len: usize,
    pub recursive: u64,
    pub bottom_up: u64,
    pub doubling: u64,
}

fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn hostname() -> String {
    gethostname::gethostname().to_string_lossy().into_owned()
}

/// First header line, `# <rfc3339 time> on <host>`.
pub fn started_line() -> String {
    format!("# {} on {}", timestamp(), hostname())
}

/// Last line of a report, `# ending at <rfc3339 time> on <host>`.
pub fn ending_line() -> String {
    format!("# ending at {} on {}", timestamp(), hostname())
}

/// Describes the run in `#` comment lines. Nothing in JSON mode.
pub fn header(args: &Args, what: &str) {
    if args.json {
        return;
    }

    println!("{}", started_line());
    println!(
        "# Start at {} nodes, end before {} nodes, increment {}",
        args.begin, args.until, args.increment
    );
    println!("# {what}");

    let layout = match args.layout {
        LayoutArg::Prepended => "idiomatic",
        LayoutArg::AddressOrdered => "memory address",
        LayoutArg::Scattered => "randomly-addressed",
    };
    println!("# {layout} list in-memory ordering");

    if args.reuse {
        println!("# re-random-value and re-use list");
    }
    let source = if args.crypto { "cryptographic" } else { "StdRng" };
    println!("# {source} random numbers as list node values");

    let values = match args.pattern {
        Pattern::Random => "randomly chosen",
        Pattern::Ascending => "presorted",
        Pattern::Descending => "reverse sorted",
    };
    println!("# {values} data values");
    println!("# nodes {} bytes in size", size_of::<Node>());

    if args.count_comparisons {
        println!("# list length, recursive, bottom up, doubling comparisons");
    } else {
        println!("# list length, mean sort seconds, total seconds, min, max");
    }
}

pub fn time_row(row: &TimeRow, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(row)?);
    } else {
        println!(
            "{}\t{:.04}\t{:.04}\t{:.04}\t{:.04}",
            row.len, row.mean_secs, row.total_secs, row.min_secs, row.max_secs
        );
    }
    Ok(())
}

pub fn count_row(row: &CountRow, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string(row)?);
    } else {
        println!(
            "{}\t{}\t{}\t{}",
            row.len, row.recursive, row.bottom_up, row.doubling
        );
    }
    Ok(())
}

pub fn footer(args: &Args) {
    if !args.json {
        println!("{}", ending_line());
    }
}

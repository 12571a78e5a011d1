use std::path::PathBuf;

use clap::{Parser, Subcommand};
use redis_timeseries::{
    load_options, Aggregation, BucketTimestamp, GetOptions, MultiGetOptions, MultiRangeOptions,
    RangeOptions, Reducer, TsCommand,
};

#[derive(Parser)]
#[command(name = "ts-args")]
#[command(about = "Build and issue RedisTimeSeries query commands")]
struct Args {
    /// Redis URL. When set, the command is sent and the raw reply printed
    #[arg(long, env = "REDIS_URL")]
    url: Option<String>,

    /// Only print the command, even if a URL is configured
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand)]
enum Query {
    /// TS.GET
    Get {
        key: String,

        #[arg(long)]
        latest: bool,
    },
    /// TS.MGET
    Mget {
        /// Label filter expressions, e.g. region=eu
        filters: Vec<String>,

        #[arg(long)]
        latest: bool,

        #[arg(long)]
        with_labels: bool,
    },
    /// TS.RANGE
    Range(RangeQuery),
    /// TS.REVRANGE
    Revrange(RangeQuery),
    /// TS.MRANGE
    Mrange(MultiRangeQuery),
    /// TS.MREVRANGE
    Mrevrange(MultiRangeQuery),
}

#[derive(clap::Args)]
struct RangeQuery {
    key: String,
    from: i64,
    to: i64,

    /// JSON file with base options. Flags override it
    #[arg(long)]
    options: Option<PathBuf>,

    #[command(flatten)]
    flags: RangeFlags,
}

impl RangeQuery {
    fn options(&self) -> anyhow::Result<RangeOptions> {
        let base = match &self.options {
            Some(path) => load_options(path)?,
            None => RangeOptions::default(),
        };
        Ok(self.flags.apply(base))
    }
}

#[derive(clap::Args)]
struct MultiRangeQuery {
    from: i64,
    to: i64,

    /// Label filter expressions, e.g. region=eu
    filters: Vec<String>,

    /// JSON file with base options. Flags override it
    #[arg(long)]
    options: Option<PathBuf>,

    #[command(flatten)]
    flags: RangeFlags,

    #[arg(long)]
    with_labels: bool,

    /// Comma-separated label names
    #[arg(long, value_delimiter = ',')]
    selected_labels: Vec<String>,

    #[arg(long, requires = "reduce")]
    group_by: Option<String>,

    #[arg(long, requires = "group_by")]
    reduce: Option<Reducer>,
}

impl MultiRangeQuery {
    fn options(&self) -> anyhow::Result<MultiRangeOptions> {
        let mut options = match &self.options {
            Some(path) => load_options(path)?,
            None => MultiRangeOptions::default(),
        };
        options.range = self.flags.apply(options.range);
        if self.with_labels {
            options = options.with_labels(true);
        }
        if !self.selected_labels.is_empty() {
            options = options.selected_labels(self.selected_labels.iter().cloned());
        }
        if let (Some(label), Some(reducer)) = (&self.group_by, self.reduce) {
            options = options.group_by(label.as_str(), reducer);
        }
        Ok(options)
    }
}

#[derive(clap::Args)]
struct RangeFlags {
    #[arg(long)]
    latest: bool,

    /// Lower bound of FILTER_BY_VALUE
    #[arg(long, requires = "max_value", allow_negative_numbers = true)]
    min_value: Option<f64>,

    /// Upper bound of FILTER_BY_VALUE
    #[arg(long, requires = "min_value", allow_negative_numbers = true)]
    max_value: Option<f64>,

    /// Comma-separated timestamps for FILTER_BY_TS
    #[arg(long, value_delimiter = ',')]
    filter_by_ts: Vec<i64>,

    #[arg(long, requires = "bucket")]
    aggregation: Option<Aggregation>,

    /// Aggregation bucket duration in milliseconds
    #[arg(long, requires = "aggregation")]
    bucket: Option<u64>,

    #[arg(long)]
    count: Option<i64>,

    #[arg(long)]
    align: Option<i64>,

    /// low (-), high (+) or mid (~)
    #[arg(long)]
    bucket_timestamp: Option<BucketTimestamp>,

    /// Report empty buckets
    #[arg(long)]
    empty: bool,
}

impl RangeFlags {
    fn apply(&self, mut options: RangeOptions) -> RangeOptions {
        if self.latest {
            options = options.latest(true);
        }
        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            options = options.filter_by_value(min, max);
        }
        if !self.filter_by_ts.is_empty() {
            options = options.filter_by_ts(self.filter_by_ts.iter().copied());
        }
        if let (Some(aggregation), Some(bucket)) = (self.aggregation, self.bucket) {
            options = options.aggregation(aggregation, bucket);
        }
        if let Some(count) = self.count {
            options = options.count(count);
        }
        if let Some(align) = self.align {
            options = options.align(align);
        }
        if let Some(mode) = self.bucket_timestamp {
            options = options.bucket_timestamp(mode);
        }
        if self.empty {
            options = options.empty(true);
        }
        options
    }
}

fn build(query: Query) -> anyhow::Result<TsCommand> {
    let command = match query {
        Query::Get { key, latest } => TsCommand::get(&key, &GetOptions::new().latest(latest)),
        Query::Mget {
            filters,
            latest,
            with_labels,
        } => {
            let options = MultiGetOptions::new()
                .latest(latest)
                .with_labels(with_labels);
            TsCommand::mget(&options, &filters)
        }
        Query::Range(q) => TsCommand::range(&q.key, q.from, q.to, &q.options()?),
        Query::Revrange(q) => TsCommand::revrange(&q.key, q.from, q.to, &q.options()?),
        Query::Mrange(q) => TsCommand::mrange(q.from, q.to, &q.options()?, &q.filters),
        Query::Mrevrange(q) => TsCommand::mrevrange(q.from, q.to, &q.options()?, &q.filters),
    };
    Ok(command)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let command = build(args.query)?;

    match args.url {
        Some(url) if !args.dry_run => {
            let client = redis::Client::open(url.as_str())?;
            let mut con = client.get_connection()?;
            tracing::info!("Connected, sending {}", command.name());
            let reply = command.query(&mut con)?;
            println!("{:?}", reply);
        }
        _ => println!("{}", command),
    }

    Ok(())
}

use casescope::record::{self, CaseRecord};
use casescope::report::{self, AnalyzeOpts};
use casescope::similarity;
use clap::Parser;
use std::fs;
use std::io::Read;
use std::sync::Once;

fn init_parallelism() {
    static START: Once = Once::new();
    START.call_once(|| {
        let n = num_cpus::get();
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    });
}

#[derive(Parser, Debug)]
#[command(name = "casescope", version, about = "Structured intelligence over research case-study collections")]
struct Cli {
    /// Input files of case records, JSON array or NDJSON (`-` for stdin)
    #[arg(required = false)]
    input: Vec<String>,

    /// Print only one section: summary | clusters | anomalies | predictions | patterns | trends | recommendations
    #[arg(long = "only")]
    only: Option<String>,

    /// Cluster count for the k-means pass
    #[arg(long = "clusters", default_value_t = 5)]
    clusters: usize,

    /// Seed for centroid initialization (reproducible runs)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Rank records most similar to the given record id and exit
    #[arg(long = "similar")]
    similar: Option<String>,

    /// Result cap for --similar
    #[arg(long = "top", default_value_t = 5)]
    top: usize,
}

fn read_records(paths: &[String]) -> anyhow::Result<Vec<CaseRecord>> {
    let mut records = Vec::new();
    if paths.is_empty() {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        records.extend(record::parse_records(&buf)?);
        return Ok(records);
    }
    for p in paths {
        let buf = if p == "-" {
            let mut b = String::new();
            std::io::stdin().read_to_string(&mut b)?;
            b
        } else {
            fs::read_to_string(p)?
        };
        records.extend(record::parse_records(&buf)?);
    }
    Ok(records)
}

fn main() -> anyhow::Result<()> {
    init_parallelism();
    let cli = Cli::parse();
    let records = read_records(&cli.input)?;

    if let Some(target) = cli.similar.as_deref() {
        let features = report::build_features(&records, chrono::Utc::now());
        let result = similarity::find_similar(&features, target, cli.top)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let opts = AnalyzeOpts {
        cluster_count: cli.clusters,
        seed: cli.seed,
        ..AnalyzeOpts::default()
    };
    let report = report::analyze(&records, &opts);
    let value = match cli.only.as_deref() {
        None => serde_json::to_value(&report)?,
        Some("summary") => serde_json::to_value(&report.summary)?,
        Some("clusters") => serde_json::to_value(&report.clusters)?,
        Some("anomalies") => serde_json::to_value(&report.anomalies)?,
        Some("predictions") => serde_json::to_value(&report.predictions)?,
        Some("patterns") => serde_json::to_value(&report.patterns)?,
        Some("trends") => serde_json::to_value(&report.trends)?,
        Some("recommendations") => serde_json::to_value(&report.recommendations)?,
        Some(other) => anyhow::bail!("unknown section: {other}"),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

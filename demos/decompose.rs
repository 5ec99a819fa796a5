use clap::Parser;

use bidec_rs::gate::GateType;
use bidec_rs::manager::Manager;
use bidec_rs::params::Params;
use bidec_rs::truth;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Truth table of the function, in hex (most significant digit first).
    #[arg(value_name = "HEX")]
    func: String,

    /// Number of variables.
    #[arg(value_name = "INT")]
    n_vars: usize,

    /// Care mask, in hex. All points are cared for by default.
    #[clap(long, value_name = "HEX")]
    care: Option<String>,

    /// Divisor truth table, in hex. May be repeated.
    #[clap(long = "divisor", value_name = "HEX")]
    divisors: Vec<String>,

    /// Maximum number of nodes to create.
    #[clap(long, value_name = "INT", default_value = "20")]
    budget: usize,

    /// Maximum support size of the manager.
    #[clap(long, value_name = "INT", default_value = "8")]
    max_support: usize,

    /// Disable XOR splits.
    #[clap(long)]
    no_xor: bool,

    /// Print the network in DOT format.
    #[clap(long)]
    dot: bool,

    /// Log every decomposition step.
    #[clap(long)]
    verbose: bool,
}

/// Parses a hex truth table into `word_num(n_vars)` words, least significant word first.
fn parse_hex(s: &str, n_vars: usize) -> color_eyre::Result<Vec<u64>> {
    let digits = s.trim_start_matches("0x");
    let mut words = truth::zeros(n_vars);
    let bytes = digits.as_bytes();
    for (i, chunk) in bytes.rchunks(16).enumerate() {
        if i >= words.len() {
            color_eyre::eyre::bail!("Truth table '{}' is too long for {} variables", s, n_vars);
        }
        words[i] = u64::from_str_radix(std::str::from_utf8(chunk)?, 16)?;
    }
    Ok(words)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        if args.verbose {
            simplelog::LevelFilter::Debug
        } else {
            simplelog::LevelFilter::Info
        },
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();
    println!("args = {:?}", args);

    let func = parse_hex(&args.func, args.n_vars)?;
    let care = match &args.care {
        Some(care) => parse_hex(care, args.n_vars)?,
        None => truth::ones(args.n_vars),
    };
    let divisors = args
        .divisors
        .iter()
        .map(|d| parse_hex(d, args.n_vars))
        .collect::<Result<Vec<_>, _>>()?;

    let mut params = Params::default()
        .with_max_support(args.max_support)
        .with_verbose(true)
        .with_very_verbose(args.verbose);
    if args.no_xor {
        params = params.with_operators(vec![GateType::And, GateType::Or]);
    }

    let mut mgr = Manager::new(params);
    println!("mgr = {:?}", mgr);

    match mgr.decompose(&func, &care, args.n_vars, &divisors, args.budget) {
        Ok(root) => {
            println!("root = {}", root);
            println!("nodes: {}", mgr.node_num());
            for node in mgr.nodes() {
                println!(
                    "- {} = {}({}, {})",
                    node,
                    mgr.node(node).op().map_or("?", |op| op.name()),
                    mgr.fanin0(node),
                    mgr.fanin1(node)
                );
            }
            println!("expr = {}", mgr.to_expr_string(root));
            println!("stats = {:?}", mgr.stats());
            if args.dot {
                println!("{}", mgr.to_dot(&[root])?);
            }
        }
        Err(e) => {
            println!("Failed: {}", e);
        }
    }

    let time_total = time_total.elapsed();
    println!("\nAll done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}

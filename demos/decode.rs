use clap::Parser;
use color_eyre::eyre::bail;
use log::info;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use reed_muller_rs::code::ReedMuller;
use reed_muller_rs::decoder::ListDecoder;
use reed_muller_rs::function::BooleanFunction;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of variables.
    #[arg(value_name = "INT", default_value = "3")]
    m: u32,

    /// Degree of the code.
    #[arg(value_name = "INT", default_value = "1")]
    s: u32,

    /// Slack subtracted from the relative radius.
    #[clap(long, value_name = "FLOAT", default_value = "0.1")]
    epsilon: f64,

    /// Number of distinct positions flipped in the all-zero codeword.
    #[clap(long, value_name = "INT", default_value = "1")]
    errors: usize,

    /// Seed for the error positions.
    #[clap(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Received word as a 0/1 truth table (overrides `m` and `errors`).
    #[clap(long, value_name = "BITS")]
    word: Option<BooleanFunction>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    println!("args = {:?}", args);

    let (sent, received) = match args.word {
        Some(word) => (None, word),
        None => {
            let sent = BooleanFunction::new(args.m)?;
            let mut received = sent.clone();
            let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
            if args.errors > received.size() {
                bail!(
                    "cannot flip {} positions of a {}-entry truth table",
                    args.errors,
                    received.size()
                );
            }
            for x in rand::seq::index::sample(&mut rng, received.size(), args.errors) {
                received.set(x, !received.eval(x)?)?;
            }
            (Some(sent), received)
        }
    };

    let code = ReedMuller::new(args.s, received.num_vars())?;
    println!(
        "RM({}, {}): length = {}, dimension = {}, distance = {}, codewords = {}",
        code.order(),
        code.num_vars(),
        code.length(),
        code.dimension(),
        code.min_distance(),
        code.size()
    );
    println!("radius = {}", code.radius(args.epsilon));

    let decoder = ListDecoder::new(args.epsilon);
    let time_decode = std::time::Instant::now();
    let candidates = decoder.decode(&received, code.order())?;
    let elapsed = time_decode.elapsed();
    info!("decoder stats: {:?}", decoder.stats());

    println!("Found {} candidate codewords:", candidates.len());
    for candidate in &candidates {
        println!(
            "  {} (distance: {})",
            candidate,
            received.distance(candidate)?
        );
    }

    let min_distance = candidates
        .iter()
        .map(|c| received.distance(c))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .min();
    match min_distance {
        Some(d) => println!("Min distance: {}", d),
        None => println!("Min distance: -"),
    }
    if let Some(sent) = &sent {
        println!(
            "Original in candidates: {}",
            if candidates.contains(sent) { "Yes" } else { "No" }
        );
    }
    println!("Time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}

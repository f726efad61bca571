use std::error::Error;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use band_gen_core::fetch::DEFAULT_WORD_LIST_URL;
use band_gen_core::{BandNameGenerator, Pattern, WordListConfig, WordListFetch, WordSource};
use clap::Parser;
use env_logger::Env;
use log::debug;
use rand::Rng;

/// Generate random band names like Depeche Mode, Iron Maiden, Limp Bizkit
#[derive(Parser, Debug)]
#[command(name = "band-name-gen", version)]
struct Args {
	/// Number of band names to generate (default: 1, unlimited in random mode)
	#[arg(short = 'n', long)]
	count: Option<usize>,

	/// Specific pattern to use, see --list-patterns (random if not specified)
	#[arg(short, long)]
	pattern: Option<Pattern>,

	/// List all available patterns and exit
	#[arg(short, long)]
	list_patterns: bool,

	/// Continuous random mode, one name per interval (Ctrl+C to stop)
	#[arg(short, long)]
	random: bool,

	/// Seconds between names in random mode
	#[arg(short, long, default_value_t = 5.0, value_parser = parse_interval)]
	interval: f64,

	/// Print N generic words (remote list with built-in fallback) instead of names
	#[arg(short, long, value_name = "N")]
	words: Option<usize>,

	/// Fetch the remote word list on every call instead of once
	#[arg(long)]
	no_cache: bool,

	/// Remote word list used by --words
	#[arg(long, env = "BAND_GEN_WORD_LIST_URL", default_value = DEFAULT_WORD_LIST_URL)]
	word_list_url: String,

	/// Seed for reproducible output
	#[arg(long)]
	seed: Option<u64>,

	/// Enable debug logging (RUST_LOG takes precedence)
	#[arg(short, long)]
	verbose: bool,
}

fn parse_interval(value: &str) -> Result<f64, String> {
	let interval: f64 = value.parse().map_err(|_| format!("'{value}' is not a number"))?;
	if !interval.is_finite() || interval < 0.0 {
		return Err("interval must be a non-negative number of seconds".to_owned());
	}
	Ok(interval)
}

fn main() -> ExitCode {
	let args = Args::parse();

	let default_filter = if args.verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
	if args.list_patterns {
		print_patterns();
		return Ok(());
	}

	let seed = args.seed.unwrap_or_else(|| rand::rng().random());
	debug!("Using seed {seed}");

	let config = WordListConfig::with_url(args.word_list_url.as_str());
	let mut generator = BandNameGenerator::from_source(WordSource::with_seed(config, seed)?);

	if let Some(count) = args.words {
		let words = generator.word_source().get_generic_words(count, !args.no_cache);
		print_list("word", &words);
		return Ok(());
	}

	if args.random {
		// 0 means forever
		return run_random_mode(&mut generator, args.pattern, args.count.unwrap_or(0), args.interval);
	}

	let names = generator.generate(args.pattern, args.count.unwrap_or(1))?;
	print_list("band name", &names);
	Ok(())
}

fn print_patterns() {
	println!("Available patterns:");

	println!("\nTwo-word patterns:");
	for pattern in Pattern::two_word_patterns() {
		println!("  - {pattern} ({})", pattern.example());
	}

	println!("\nMulti-word patterns:");
	for pattern in Pattern::multi_word_patterns() {
		if !Pattern::two_word_patterns().contains(pattern) {
			println!("  - {pattern} ({})", pattern.example());
		}
	}

	println!("\nNot implemented yet:");
	for pattern in Pattern::ALL.iter().filter(|p| !p.is_implemented()) {
		println!("  - {pattern} ({})", pattern.example());
	}
}

/// Prints a single item inline, several items as a numbered list.
fn print_list(kind: &str, items: &[String]) {
	println!();
	if let [item] = items {
		println!("Generated {kind}:");
		println!("  {item}");
	} else {
		println!("Generated {} {kind}s:", items.len());
		for (i, item) in items.iter().enumerate() {
			println!("  {}. {item}", i + 1);
		}
	}
	println!();
}

/// Generates one name per `interval` seconds until `count` names are shown,
/// or forever when `count` is 0. Ctrl+C terminates the process.
fn run_random_mode<F: WordListFetch, R: Rng>(
	generator: &mut BandNameGenerator<F, R>,
	pattern: Option<Pattern>,
	count: usize,
	interval: f64,
) -> Result<(), Box<dyn Error>> {
	println!("\nRandom Band Name Generator");
	if count > 0 {
		println!("Generating {count} names with {interval:.1}s intervals [Press Ctrl+C to stop]\n");
	} else {
		println!("Generating names continuously with {interval:.1}s intervals [Press Ctrl+C to stop]\n");
	}

	let pause = Duration::from_secs_f64(interval);
	let mut iteration = 0;
	loop {
		iteration += 1;
		for name in generator.generate(pattern, 1)? {
			println!("Generated band name:");
			println!("  {name}");
			println!();
		}

		if count > 0 && iteration >= count {
			println!("Generated {count} names. Exiting.");
			return Ok(());
		}

		thread::sleep(pause);
	}
}

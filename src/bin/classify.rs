use clap::Parser;
use poker_classify::deck::sample_hand;
use poker_classify::report::{render_line, DEMO_HANDS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Classify five-card poker hands.
///
/// With no arguments, prints a table of sample hands.
#[derive(Debug, Parser)]
#[command(name = "poker-classify", version)]
struct Args {
    /// Hands to classify, one argument each, e.g. "Ah Kh Qh Jh Th"
    hands: Vec<String>,

    /// Classify this many randomly sampled hands instead
    #[arg(long, conflicts_with = "hands")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Some(n) = args.random {
        log::info!("sampling {n} hands with seed {}", args.seed);
        let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
        for _ in 0..n {
            let hand = sample_hand(&mut rng).to_string();
            println!("{}", render_line(&hand));
        }
        return;
    }

    if args.hands.is_empty() {
        DEMO_HANDS.iter().for_each(|hand| println!("{}", render_line(hand)));
    } else {
        args.hands.iter().for_each(|hand| println!("{}", render_line(hand)));
    }
}

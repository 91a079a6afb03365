use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rs_video_poker::core::{Hand, HoldMask, VideoPokerError};
use rs_video_poker::eval::{
    Category, DeucesBonusEvaluator, DeucesEvaluator, Evaluator, Ruleset, StandardEvaluator,
};
use rs_video_poker::hot_roll::HotRollConfig;
use rs_video_poker::paytable::{PayTable, PayoutSchedule};
use rs_video_poker::search::{
    HoldEstimate, SearchConfig, SearchMethod, SearchStrategy, exact_mask_evs, frozen_ev,
    mask_evs,
};
use rs_video_poker::sim::{SimConfig, simulate};
use rs_video_poker::strategy::{
    AnyPair, HoldAll, HoldNothing, HoldStrategy, JRiffStrategy, JacksOrBetterPair, RiffStrategy,
};
use tracing::event;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "vipoker")]
#[command(about = "Video poker research: simulate strategies and search for the best hold")]
struct Cli {
    /// Which game to play.
    #[arg(long, value_enum, default_value_t = Ruleset::Standard)]
    ruleset: Ruleset,

    /// Paytable JSON file. Defaults to the built in table for the ruleset.
    #[arg(long)]
    paytable: Option<PathBuf>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play many hands with one strategy
    Simulate {
        /// Hands to simulate
        #[arg(long, default_value_t = 100_000)]
        hands: u64,
        /// Bet per hand (coins)
        #[arg(long, default_value_t = 1)]
        bet: u32,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Log the first N hands
        #[arg(long, default_value_t = 0)]
        trace: u64,
        #[arg(long, value_enum, default_value_t = StrategyKind::AnyPair)]
        strategy: StrategyKind,
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        hot_roll: HotRollArgs,
    },
    /// Play one hand with a fixed hold many times
    Frozen {
        /// The dealt hand, like "AS 2H 3C 4D KD"
        hand: String,
        /// Five bit hold mask, bit i holds card i
        #[arg(long, default_value_t = 0)]
        hold_mask: u8,
        #[arg(long, default_value_t = 200_000)]
        trials: u64,
        /// Bet per hand (coins)
        #[arg(long, default_value_t = 1)]
        bet: u32,
        /// RNG seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
    /// Show the EV of every hold of one hand
    Analyze {
        /// The dealt hand, like "AS 2H 3C 4D KD"
        hand: String,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        hot_roll: HotRollArgs,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Discard everything
    None,
    /// Keep everything
    All,
    /// Keep any pairs
    AnyPair,
    /// Keep jacks or better pairs
    JobPair,
    /// Rule based jacks or better play
    Riff,
    /// Rule based deuces wild bonus play
    JRiff,
    /// Best EV hold found by searching
    Search,
}

#[derive(Args)]
struct SearchArgs {
    /// Sampled draws per hold mask
    #[arg(long, default_value_t = 200)]
    mc_trials: usize,
    /// Enumerate every draw instead of sampling
    #[arg(long)]
    exact: bool,
}

#[derive(Args)]
struct HotRollArgs {
    /// Play with Hot Roll
    #[arg(long)]
    hot_roll: bool,
    /// Per hand Hot Roll incidence
    #[arg(long, default_value_t = 1.0 / 6.0)]
    hot_roll_rate: f64,
    /// Given a Hot Roll, the chance it triggers on the deal rather than the
    /// draw
    #[arg(long, default_value_t = 0.5)]
    hot_roll_deal_share: f64,
}

impl HotRollArgs {
    fn config(&self) -> Option<HotRollConfig> {
        self.hot_roll.then_some(HotRollConfig {
            p_per_hand: self.hot_roll_rate,
            p_deal_given_roll: self.hot_roll_deal_share,
        })
    }
}

impl SearchArgs {
    fn method(&self) -> SearchMethod {
        if self.exact {
            SearchMethod::Exhaustive
        } else {
            SearchMethod::MonteCarlo
        }
    }

    fn config(
        &self,
        seed: u64,
        hot_roll: Option<&HotRollConfig>,
        paytable_bet: u32,
    ) -> SearchConfig {
        let config = SearchConfig {
            trials_per_mask: self.mc_trials,
            seed,
            ..SearchConfig::default()
        };
        match hot_roll {
            Some(hot_roll) => config.with_hot_roll(hot_roll, paytable_bet),
            None => config,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.ruleset {
        Ruleset::Standard => run(&cli, StandardEvaluator),
        Ruleset::Deuces => run(&cli, DeucesEvaluator),
        Ruleset::DeucesBonus => run(&cli, DeucesBonusEvaluator),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_paytable(cli: &Cli) -> Result<PayTable, VideoPokerError> {
    match &cli.paytable {
        Some(path) => PayTable::from_path(path),
        None => PayTable::builtin(cli.ruleset),
    }
}

fn run<E: Evaluator + Copy + 'static>(cli: &Cli, evaluator: E) -> Result<(), VideoPokerError> {
    let table = load_paytable(cli)?;
    for key in table.unknown_keys::<E::Category>() {
        event!(
            tracing::Level::WARN,
            key,
            ruleset = %cli.ruleset,
            "paytable entry is not a category of the ruleset"
        );
    }
    let schedule = table.schedule::<E::Category>();
    for (category, units) in schedule.iter() {
        event!(tracing::Level::DEBUG, %category, units, "payout");
    }

    match &cli.command {
        Commands::Simulate {
            hands,
            bet,
            seed,
            trace,
            strategy,
            search,
            hot_roll,
        } => {
            let sim_config = SimConfig {
                hands: *hands,
                bet_per_hand: *bet,
                seed: *seed,
                trace_hands: *trace,
                hot_roll: hot_roll.config(),
                ..SimConfig::default()
            };
            let search_config = search.config(
                *seed,
                sim_config.hot_roll.as_ref(),
                sim_config.hot_roll_paytable_bet,
            );
            let mut player = build_strategy(
                *strategy,
                cli.ruleset,
                evaluator,
                schedule.clone(),
                search_config,
                search.method(),
            );
            let report = simulate(&schedule, &evaluator, &mut player, &sim_config)?;

            if cli.json {
                print_json(&report)?;
                return Ok(());
            }
            if let Some(hot_roll) = &sim_config.hot_roll {
                println!(
                    "Hot Roll: enabled  rate={}  deal_share={}",
                    hot_roll.p_per_hand, hot_roll.p_deal_given_roll
                );
                println!(
                    "Hot Roll: bet_cost={}  paytable_bet={}  multiplier=2d6  rolled={}",
                    sim_config.hot_roll_bet_cost,
                    sim_config.hot_roll_paytable_bet,
                    report.hot_rolls
                );
            }
            println!("Paytable: {} (bet unit {})", table.name(), table.bet_unit());
            println!("Ruleset:  {}", cli.ruleset);
            println!("Strategy: {:?}", strategy);
            if *strategy == StrategyKind::Search && !search.exact {
                println!("MC trials per mask: {}", search.mc_trials);
            }
            println!("Hands:    {}", report.hands);
            println!("Bet:      {}", report.total_bet);
            println!("Payout:   {}", report.total_payout);
            println!("Net:      {}", report.total_net);
            println!("EV/hand:  {:.6}", report.ev_per_hand);
            println!("Return%:  {:.4}%", 100.0 * report.return_pct);
            print_counts(report.category_counts.iter(), report.hands);
        }
        Commands::Frozen {
            hand,
            hold_mask,
            trials,
            bet,
            seed,
        } => {
            let hand: Hand = hand.parse()?;
            let mask = HoldMask::new(*hold_mask)?;
            let report = frozen_ev(&schedule, &evaluator, &hand, mask, *trials, *bet, *seed)?;

            if cli.json {
                print_json(&report)?;
                return Ok(());
            }
            println!("Frozen:       {}", report.hand);
            println!("Hold mask:    {} ({})", mask.bits(), mask);
            println!("Held indices: {:?}", report.held_indices);
            println!("Trials:       {}", report.trials);
            println!("Avg payout:   {:.6}", report.avg_payout);
            println!("Avg net:      {:.6}", report.avg_net);
            print_counts(report.category_counts.iter(), report.trials);
        }
        Commands::Analyze {
            hand,
            seed,
            search,
            hot_roll,
        } => {
            let hand: Hand = hand.parse()?;
            let hot_roll = hot_roll.config();
            let config = search.config(
                *seed,
                hot_roll.as_ref(),
                SimConfig::default().hot_roll_paytable_bet,
            );
            let mut estimates = match search.method() {
                SearchMethod::Exhaustive => exact_mask_evs(&hand, &schedule, &evaluator, &config)?,
                SearchMethod::MonteCarlo => mask_evs(&hand, &schedule, &evaluator, &config)?,
            };

            if cli.json {
                print_json(&estimates)?;
                return Ok(());
            }
            println!("Hand:     {}", hand);
            println!("Category: {}", evaluator.evaluate_hand(&hand));
            print_estimates(&hand, &mut estimates);
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), VideoPokerError> {
    let json = serde_json::to_string_pretty(value).map_err(VideoPokerError::Report)?;
    println!("{json}");
    Ok(())
}

fn build_strategy<E: Evaluator + 'static>(
    kind: StrategyKind,
    ruleset: Ruleset,
    evaluator: E,
    schedule: PayoutSchedule<E::Category>,
    config: SearchConfig,
    method: SearchMethod,
) -> Box<dyn HoldStrategy> {
    let expected = match kind {
        StrategyKind::Riff => Some(Ruleset::Standard),
        StrategyKind::JRiff => Some(Ruleset::DeucesBonus),
        _ => None,
    };
    if let Some(expected) = expected.filter(|r| *r != ruleset) {
        event!(
            tracing::Level::WARN,
            strategy = ?kind,
            written_for = %expected,
            ruleset = %ruleset,
            "strategy was written for another ruleset"
        );
    }

    match kind {
        StrategyKind::None => Box::new(HoldNothing),
        StrategyKind::All => Box::new(HoldAll),
        StrategyKind::AnyPair => Box::new(AnyPair),
        StrategyKind::JobPair => Box::new(JacksOrBetterPair),
        StrategyKind::Riff => Box::new(RiffStrategy::new()),
        StrategyKind::JRiff => Box::new(JRiffStrategy::new()),
        StrategyKind::Search => Box::new(SearchStrategy::new(evaluator, schedule, config, method)),
    }
}

/// Most common first.
fn print_counts<'a, C: Category>(counts: impl Iterator<Item = (&'a C, &'a u64)>, total: u64) {
    let mut counts: Vec<(C, u64)> = counts.map(|(c, n)| (*c, *n)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.name().cmp(b.0.name())));

    println!();
    println!("Category counts:");
    for (category, n) in counts {
        let pct = if total == 0 {
            0.0
        } else {
            100.0 * n as f64 / total as f64
        };
        println!("  {:24} {:>9}  {:6.3}%", category.name(), n, pct);
    }
}

/// Best hold first.
fn print_estimates(hand: &Hand, estimates: &mut [HoldEstimate]) {
    estimates.sort_by(|a, b| b.ev.total_cmp(&a.ev).then(a.mask.cmp(&b.mask)));

    println!();
    println!("  {:5}  {:>2}  {:16}  {:>12}", "Mask", "#", "Held", "EV");
    for estimate in estimates.iter() {
        let held: Vec<String> = estimate
            .mask
            .held_cards(hand)
            .iter()
            .map(|c| c.to_string())
            .collect();
        println!(
            "  {:5}  {:>2}  {:16}  {:>12.6}",
            estimate.mask.to_string(),
            estimate.mask.bits(),
            held.join(" "),
            estimate.ev
        );
    }
}

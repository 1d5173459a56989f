//! Command-line front end.
//!
//! - `decide` searches a single betting state and prints the decision as JSON
//! - `play` runs a heads-up match of the engine against a sparring partner

use clap::Parser;
use robolimit::betting::RaiseCapState;
use robolimit::cards::Observation;
use robolimit::equity::Estimator;
use robolimit::equity::MonteCarlo;
use robolimit::gameroom::Table;
use robolimit::learning::Memory;
use robolimit::players::Agent;
use robolimit::players::Human;
use robolimit::players::Robot;
use robolimit::search::Search;
use robolimit::search::Settings;
use robolimit::search::Valuation;
use robolimit::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(about = "Choose an action for one betting state", alias = "d")]
    Decide {
        #[arg(required = true, help = "pocket and board, e.g. \"As Ks ~ 2c 7d Th\"")]
        observation: String,
        #[arg(long, default_value_t = B_BLIND)]
        hero_bet: Chips,
        #[arg(long, default_value_t = B_BLIND)]
        villain_bet: Chips,
        #[arg(long, default_value_t = STACK - B_BLIND)]
        hero_stack: Chips,
        #[arg(long, default_value_t = STACK - B_BLIND)]
        villain_stack: Chips,
        #[arg(long, default_value_t = RAISES_PER_STREET)]
        street_raises: u8,
        #[arg(long, default_value_t = RAISES_PER_ROUND)]
        hero_raises: u8,
        #[arg(long, default_value_t = RAISES_PER_ROUND)]
        villain_raises: u8,
        #[arg(long, help = "no action has been taken on this street yet")]
        first: bool,
        #[arg(long, default_value_t = EQUITY_TRIALS)]
        trials: usize,
    },
    #[command(about = "Play a heads-up match against a sparring partner", alias = "p")]
    Play {
        #[arg(long, default_value_t = 1000)]
        hands: usize,
        #[arg(long, default_value_t = TENDENCY_WEIGHT)]
        weight: Probability,
        #[arg(long, default_value_t = WARMUP_HANDS)]
        warmup: usize,
        #[arg(long, default_value_t = EQUITY_TRIALS)]
        trials: usize,
        #[arg(long, help = "take the opposing seat yourself")]
        human: bool,
    },
}

fn main() -> anyhow::Result<()> {
    log();
    match Command::parse() {
        Command::Decide {
            observation,
            hero_bet,
            villain_bet,
            hero_stack,
            villain_stack,
            street_raises,
            hero_raises,
            villain_raises,
            first,
            trials,
        } => {
            let observation = Observation::try_from(observation.as_str())?;
            let state = RaiseCapState {
                street: observation.street(),
                street_raises,
                hero_raises,
                villain_raises,
                hero_bet,
                villain_bet,
                hero_stack,
                villain_stack,
            };
            anyhow::ensure!(street_raises <= RAISES_PER_STREET, "at most {} raises per street", RAISES_PER_STREET);
            anyhow::ensure!(hero_raises <= RAISES_PER_ROUND, "at most {} raises per hand", RAISES_PER_ROUND);
            anyhow::ensure!(villain_raises <= RAISES_PER_ROUND, "at most {} raises per hand", RAISES_PER_ROUND);
            anyhow::ensure!(hero_bet >= 0 && villain_bet >= 0, "bets cannot be negative");
            anyhow::ensure!(villain_stack >= 0, "stacks cannot be negative");
            anyhow::ensure!(
                hero_stack >= state.to_call(betting::Turn::Hero),
                "hero cannot cover the {} to call",
                state.to_call(betting::Turn::Hero)
            );
            let settings = Settings {
                trials,
                ..Settings::default()
            };
            settings.validate()?;
            let probability = Estimator::new(MonteCarlo::default(), trials).estimate(&observation)?;
            let memory = Memory::default();
            let valuation = Valuation::new(state.street, probability, &memory, &settings);
            let decision = Search::from(valuation).decide(&state, first);
            log::info!("{} p={:.3} {}", observation, probability, decision);
            let report = serde_json::json!({
                "observation": observation.to_string(),
                "probability": probability,
                "decision": decision,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Play {
            hands,
            weight,
            warmup,
            trials,
            human,
        } => {
            let settings = Settings {
                weight,
                warmup,
                trials,
            };
            settings.validate()?;
            let agent = Agent::new(MonteCarlo::default(), settings);
            let summary = match human {
                true => Table::new(agent, Human).play(hands)?,
                false => Table::new(agent, Robot::default()).play(hands)?,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

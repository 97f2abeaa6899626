use anyhow::{Context, Result};
use clap::Parser;
use galactic_wanderer::game::{Planet, Session, SessionConfig, Status};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "wanderer", about = "Galactic Wanderer, played from the terminal")]
struct Cli {
    /// Seed for planet generation and every roll. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Stay in orbit after exploring or scanning instead of moving on to a new planet.
    #[arg(long)]
    stay: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = Session::new(session_config(&cli));

    let stdin = io::stdin();
    let stdout = io::stdout();
    play(&mut session, stdin.lock(), stdout.lock())
}

fn session_config(cli: &Cli) -> SessionConfig {
    SessionConfig {
        seed: cli.seed.unwrap_or_else(rand::random),
        auto_next_planet: !cli.stay,
        ..SessionConfig::default()
    }
}

enum Step {
    Continue,
    Quit,
}

fn play<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut out: W) -> Result<()> {
    writeln!(out, "Welcome to GALACTIC WANDERER (CLI)")?;
    loop {
        if let Some(msg) = session.status().message() {
            writeln!(out, "{msg}")?;
            break;
        }

        print_planet(&mut out, session.planet())?;
        let player = session.player();
        writeln!(
            out,
            "Fuel {}  Hull {}  Credits {}  Turn {}",
            player.fuel, player.hull, player.credits, player.turns
        )?;
        writeln!(out, "Actions: 1) Explore  2) Scan  3) Trade  4) Leave  5) Quit")?;

        let Some(action) = prompt(&mut input, &mut out, "> ")? else {
            break;
        };
        let step = match action.as_str() {
            "1" => {
                if let Some(res) = session.explore() {
                    print_lines(&mut out, &res.messages)?;
                }
                Step::Continue
            }
            "2" => {
                if let Some(res) = session.scan() {
                    print_lines(&mut out, &res.messages)?;
                }
                Step::Continue
            }
            "3" => trade(session, &mut input, &mut out)?,
            "4" => {
                if let Some(res) = session.leave() {
                    print_lines(&mut out, &res.messages)?;
                }
                Step::Continue
            }
            "5" => Step::Quit,
            _ => {
                writeln!(out, "Invalid input.")?;
                Step::Continue
            }
        };
        if let Step::Quit = step {
            break;
        }
    }

    if session.status() == Status::Active {
        writeln!(out, "Bye.")?;
    }
    out.flush().context("flushing terminal output")
}

fn trade<R: BufRead, W: Write>(session: &mut Session, input: &mut R, out: &mut W) -> Result<Step> {
    let Some(quote) = session.market() else {
        writeln!(out, "Locals hostile. Trade unavailable.")?;
        return Ok(Step::Continue);
    };
    writeln!(
        out,
        "{}: Buy {} / Sell {}",
        quote.resource, quote.buy_price, quote.sell_price
    )?;

    let Some(choice) = prompt(input, out, "(B)uy/(S)ell/(L)eave: ")? else {
        return Ok(Step::Quit);
    };
    let buying = match choice.to_lowercase().as_str() {
        "b" => true,
        "s" => false,
        _ => return Ok(Step::Continue),
    };

    let Some(raw_qty) = prompt(input, out, "Qty? ")? else {
        return Ok(Step::Quit);
    };
    let qty = if raw_qty.is_empty() {
        1
    } else {
        match raw_qty.parse::<u32>() {
            Ok(qty) => qty,
            Err(_) => {
                writeln!(out, "Invalid quantity.")?;
                return Ok(Step::Continue);
            }
        }
    };

    let result = if buying {
        session.buy(qty)
    } else {
        session.sell(qty)
    };
    print_lines(out, &result.messages)?;
    Ok(Step::Continue)
}

/// Reads one trimmed line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading player input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn print_planet<W: Write>(out: &mut W, planet: &Planet) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Planet {} - {} ({})", planet.name, planet.biome, planet.climate)?;
    writeln!(
        out,
        "Life: {}  Atmosphere: {}  Danger: {}",
        planet.life, planet.atmosphere, planet.danger
    )?;
    writeln!(out, "Civilization: {} ({})", planet.civilization, planet.temperament)?;
    writeln!(out, "Resource: {} (value {})", planet.resource, planet.value)
}

fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

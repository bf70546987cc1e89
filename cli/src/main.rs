use std::error::Error;

use clap::{Parser, ValueEnum};
use tracing::{event, Level};
use tracing_subscriber::prelude::*;

use alu::{calculate, Interpretation, Operand, Operation};
use base::prelude::*;

mod render;

use render::TraceTableWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Signed,
    Unsigned,
}

impl From<Mode> for Interpretation {
    fn from(mode: Mode) -> Interpretation {
        match mode {
            Mode::Signed => Interpretation::Signed,
            Mode::Unsigned => Interpretation::Unsigned,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl From<Op> for Operation {
    fn from(op: Op) -> Operation {
        match op {
            Op::Add => Operation::Add,
            Op::Sub => Operation::Subtract,
            Op::Mul => Operation::Multiply,
            Op::Div => Operation::Divide,
        }
    }
}

/// Simulate fixed-width binary arithmetic the way a simple CPU's
/// arithmetic unit performs it, printing every register transfer.
#[derive(Debug, Parser)]
#[command(name = "binary-alu")]
struct Args {
    /// Operation to perform.
    #[arg(value_enum)]
    operation: Op,

    /// First operand: a binary string of exactly --width digits, or a
    /// decimal integer with --decimal.
    a: String,

    /// Second operand, in the same form as the first.
    b: String,

    /// Register width in bits.
    #[arg(long, default_value_t = 8)]
    width: u32,

    /// How operand bit patterns are read.
    #[arg(long, value_enum, default_value = "signed")]
    mode: Mode,

    /// Treat the operands as decimal integers and encode them into
    /// the register width before calculating.
    #[arg(long)]
    decimal: bool,
}

fn parse_operand(text: &str, args: &Args) -> Result<BitVector, Box<dyn Error>> {
    if args.decimal {
        let value: i128 = text.parse()?;
        match checked_encode(value, args.width) {
            Ok(bits) => Ok(bits),
            Err(e) => Err(format!(
                "operand {text} does not fit in {} bits: {e}",
                args.width
            )
            .into()),
        }
    } else {
        let operand = Operand::from_binary(text, Interpretation::from(args.mode))?;
        Ok(operand.bits)
    }
}

fn run_calculator() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // See
    // https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/index.html#filtering-events-with-environment-variables
    // for instructions on how to select which trace messages get
    // printed.
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);
    let filter_layer = match tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
    {
        Err(e) => {
            return Err(Box::new(e));
        }
        Ok(layer) => layer,
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    let interpretation = Interpretation::from(args.mode);
    let a = parse_operand(&args.a, &args)?;
    let b = parse_operand(&args.b, &args)?;
    event!(
        Level::DEBUG,
        "operands decoded as {} and {} ({} reading)",
        Operand::new(a, interpretation).decimal(),
        Operand::new(b, interpretation).decimal(),
        interpretation,
    );

    let outcome = calculate(a, b, Operation::from(args.operation), interpretation, args.width)?;
    let mut writer = TraceTableWriter::new();
    writer.write_outcome(&outcome)?;
    Ok(())
}

fn main() {
    match run_calculator() {
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Ok(()) => {
            std::process::exit(0);
        }
    }
}

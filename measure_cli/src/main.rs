use clap::{Parser, Subcommand};
use measure_core::*;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "measure")]
#[command(about = "Unit conversion with dimensional analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Value to convert
        #[arg(allow_negative_numbers = true)]
        value: String,

        /// Unit symbol of the value
        from: String,

        /// Target unit symbol
        to: String,

        /// Use decimal arithmetic with the configured precision
        #[arg(long)]
        decimal: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the dimension and system unit of a unit
    Info {
        /// Unit symbol
        symbol: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known unit symbols
    List,
}

#[derive(Serialize)]
#[serde(untagged)]
enum Number {
    Float(f64),
    Decimal(String),
}

#[derive(Serialize)]
struct Conversion {
    value: Number,
    from: String,
    to: String,
    result: Number,
    converter: String,
}

#[derive(Serialize)]
struct UnitInfo {
    symbol: String,
    name: Option<String>,
    dimension: String,
    system_unit: String,
    is_system_unit: bool,
    quantity_kind: Option<QuantityKind>,
    converter_to_si: String,
    linear: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    measure_core::logging::init_from_config(&config.logging);

    match cli.command {
        Commands::Convert {
            value,
            from,
            to,
            decimal,
            json,
        } => cmd_convert(&value, &from, &to, decimal, json, &config),
        Commands::Info { symbol, json } => cmd_info(&symbol, json),
        Commands::List => cmd_list(),
    }
}

fn cmd_convert(
    value: &str,
    from: &str,
    to: &str,
    decimal: bool,
    json: bool,
    config: &Config,
) -> Result<()> {
    let si = get_si();
    let from_unit = si.unit(from)?;
    let to_unit = si.unit(to)?;
    let converter = from_unit.converter_to(&to_unit)?;
    tracing::debug!("converting {} {} to {} via {}", value, from, to, converter);

    let (input, output) = if decimal {
        let input = Decimal::from_str(value)
            .map_err(|e| Error::InvalidArgument(format!("invalid decimal {:?}: {}", value, e)))?;
        let ctx = config.decimal.math_context();
        let output = converter.convert_decimal(input, &ctx)?.normalize();
        (
            Number::Decimal(input.to_string()),
            Number::Decimal(output.to_string()),
        )
    } else {
        let input = f64::from_str(value)
            .map_err(|e| Error::InvalidArgument(format!("invalid number {:?}: {}", value, e)))?;
        (Number::Float(input), Number::Float(converter.convert(input)))
    };

    let conversion = Conversion {
        value: input,
        from: from_unit.to_string(),
        to: to_unit.to_string(),
        result: output,
        converter: converter.to_string(),
    };

    if json {
        print_json(&conversion)?;
    } else {
        println!(
            "{} {} = {} {}",
            display(&conversion.value),
            conversion.from,
            display(&conversion.result),
            conversion.to
        );
    }
    Ok(())
}

fn cmd_info(symbol: &str, json: bool) -> Result<()> {
    let si = get_si();
    let unit = si.unit(symbol)?;
    let system_unit = unit.system_unit()?;
    let converter = unit.converter_to_si()?;

    let quantity_kind = QuantityKind::ALL
        .into_iter()
        .find(|kind| si.unit_for(*kind).is_ok_and(|u| u == system_unit));

    let info = UnitInfo {
        symbol: unit.to_string(),
        name: unit.name().map(String::from),
        dimension: unit.dimension()?.to_string(),
        system_unit: system_unit.to_string(),
        is_system_unit: unit.is_system_unit(),
        quantity_kind,
        converter_to_si: converter.to_string(),
        linear: converter.is_linear(),
    };

    if json {
        return print_json(&info);
    }

    println!("Symbol:       {}", info.symbol);
    if let Some(name) = &info.name {
        println!("Name:         {}", name);
    }
    println!("Dimension:    {}", info.dimension);
    println!("System unit:  {}", info.system_unit);
    if let Some(kind) = info.quantity_kind {
        println!("Quantity:     {}", kind);
    }
    println!("Converter:    {}", info.converter_to_si);
    println!("Linear:       {}", if info.linear { "yes" } else { "no" });
    Ok(())
}

fn cmd_list() -> Result<()> {
    let si = get_si();
    println!("Units in {}:", si.name());
    for unit in si.units() {
        match unit.name() {
            Some(name) => println!("  {:<6} {}", unit.to_string(), name),
            None => println!("  {}", unit),
        }
    }
    Ok(())
}

fn display(number: &Number) -> String {
    match number {
        Number::Float(v) => v.to_string(),
        Number::Decimal(v) => v.clone(),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{}", out);
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use envelope_core::ports::{SystemClock, UlidTraceIdGenerator};
use envelope_core::{ResultEnvelope, StatusCode};

/// Build or inspect response envelopes from the command line.
#[derive(Parser, Debug)]
#[command(name = "envelope", version)]
struct Args {
    /// Logging filter (trace, debug, info, warn, error or an EnvFilter directive)
    #[arg(long, global = true, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Pretty-print JSON output
    #[arg(long, global = true, env = "ENVELOPE_PRETTY")]
    pretty: bool,

    /// Attach a freshly generated trace id
    #[arg(long, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a success envelope
    Success {
        #[arg(short, long)]
        message: Option<String>,

        /// Payload as a JSON document
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Print a failure envelope
    Failure {
        #[arg(short, long, default_value_t = StatusCode::Error.code(), allow_hyphen_values = true)]
        code: i32,

        #[arg(short, long)]
        message: Option<String>,

        /// Payload as a JSON document
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Decode an envelope and report its classification
    Inspect { input: String },
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_data(raw: Option<&str>) -> Result<Option<Value>> {
    raw.map(|s| serde_json::from_str(s).with_context(|| format!("--data is not valid JSON: {s}")))
        .transpose()
}

fn render(env: ResultEnvelope<Value>, args: &Args) -> Result<String> {
    let env = if args.trace {
        env.with_generated_trace_id(&UlidTraceIdGenerator::new(SystemClock))
    } else {
        env
    };
    let out = if args.pretty {
        env.to_json_pretty()
    } else {
        env.to_json()
    };
    Ok(out?)
}

fn run(args: &Args) -> Result<String> {
    match &args.command {
        Command::Success { message, data } => {
            let data = parse_data(data.as_deref())?;
            let message = message
                .clone()
                .unwrap_or_else(|| StatusCode::Success.message().to_string());
            let env = match data {
                Some(d) => ResultEnvelope::success_with(message, d),
                None => ResultEnvelope::of(StatusCode::Success.code(), message),
            };
            render(env, args)
        }
        Command::Failure {
            code,
            message,
            data,
        } => {
            let data = parse_data(data.as_deref())?;
            let message = message
                .clone()
                .unwrap_or_else(|| StatusCode::Error.message().to_string());
            let env = match data {
                Some(d) => ResultEnvelope::failure_data(*code, message, d),
                None => ResultEnvelope::failure_with(*code, message),
            };
            if env.is_success() {
                tracing::warn!("failure envelope built with success code 0");
            }
            render(env, args)
        }
        Command::Inspect { input } => {
            let env: ResultEnvelope<Value> =
                ResultEnvelope::from_json(input).context("inspect: input is not an envelope")?;
            tracing::info!(code = env.code(), "decoded envelope");
            let status = if env.is_success() { "success" } else { "error" };
            Ok(format!(
                "code={} message='{}' status={} traceId={} data={}",
                env.code(),
                env.message(),
                status,
                env.trace_id().unwrap_or("-"),
                env.data().map_or_else(|| "-".to_string(), Value::to_string),
            ))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let out = run(&args)?;
    println!("{out}");
    Ok(())
}

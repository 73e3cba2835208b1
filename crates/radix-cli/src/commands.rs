//! Command handlers. Each returns the text to print and whether the
//! conversion was valid; printing and exit codes stay in `main`.

use radix_core::{conversion_pairs, convert_number, convert_to_all_systems, NUMBER_SYSTEMS};
use radix_out::{render_all, render_conversion, render_systems, ConversionInput, RenderOptions};
use tracing::info;

use crate::cli::{joined, AllArgs, ConvertArgs};
use crate::config::CliConfig;

/// Output of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub text: String,
    pub is_valid: bool,
    /// Machine-readable output goes to stdout even when invalid
    pub json: bool,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        if self.is_valid {
            0
        } else {
            1
        }
    }
}

pub fn run_convert(args: &ConvertArgs, config: &CliConfig) -> anyhow::Result<Outcome> {
    let value = joined(&args.value);
    info!(from = args.from.radix(), to = args.to.radix(), "convert");

    let result = convert_number(&value, args.from.radix(), args.to.radix());
    let text = if args.json {
        serde_json::to_string_pretty(&result)?
    } else {
        let input = ConversionInput {
            value: &value,
            from: args.from,
            to: args.to,
        };
        let options = RenderOptions {
            color: config.color,
            show_steps: !args.no_steps,
        };
        render_conversion(&result, &input, &options)?
    };

    Ok(Outcome {
        text,
        is_valid: result.is_valid,
        json: args.json,
    })
}

pub fn run_all(args: &AllArgs) -> anyhow::Result<Outcome> {
    let value = joined(&args.value);
    info!(from = args.from.radix(), "convert to all systems");

    let result = convert_to_all_systems(&value, args.from.radix());
    let text = if args.json {
        serde_json::to_string_pretty(&result)?
    } else {
        render_all(&result, &value, args.from)?
    };

    Ok(Outcome {
        text,
        is_valid: result.is_valid,
        json: args.json,
    })
}

pub fn run_systems() -> anyhow::Result<Outcome> {
    let pairs = conversion_pairs();
    Ok(Outcome {
        text: render_systems(&NUMBER_SYSTEMS, &pairs)?,
        is_valid: true,
        json: false,
    })
}

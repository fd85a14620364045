use tbl::models::CheckingPolicy;
use tbl::{Money, Result};

use std::env;

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("Unknown argument: {0}")]
    Unknown(String),
}

/// Parses the optional `--withdrawal-limit <amount>` and `--max-withdrawals <count>` flags,
/// falling back to the default checking policy for anything not given
pub fn parse_policy_args() -> Result<CheckingPolicy> {
    parse_policy(env::args().skip(1))
}

fn parse_policy(args: impl IntoIterator<Item = String>) -> Result<CheckingPolicy> {
    let mut policy = CheckingPolicy::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
            None => (arg.clone(), None),
        };

        match flag.as_str() {
            "--withdrawal-limit" => {
                let value = flag_value(&flag, inline_value, &mut args)?;

                let limit = Money::parse(&value).with_context(|| {
                    InputArgsError::Parse(format!("{flag} expects an amount, got {value:?}"))
                })?;

                if !limit.is_positive() {
                    Err(InputArgsError::Parse(format!("{flag} must be greater than zero")))?
                }

                policy.withdrawal_limit = limit;
            }
            "--max-withdrawals" => {
                let value = flag_value(&flag, inline_value, &mut args)?;

                policy.max_withdrawals = value.parse::<u32>().with_context(|| {
                    InputArgsError::Parse(format!("{flag} expects a count, got {value:?}"))
                })?;
            }
            _ => Err(InputArgsError::Unknown(arg))?,
        }
    }

    Ok(policy)
}

fn flag_value(
    flag: &str,
    inline_value: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String> {
    inline_value
        .or_else(|| args.next())
        .ok_or_else(|| InputArgsError::Parse(format!("{flag} requires a value")).into())
}

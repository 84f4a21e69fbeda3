// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::io::{self, BufRead, Write};

use diamond_tools::app::{Action, Dapp};
use eyre::bail;

use super::Args;
use crate::{constants::CONSOLE_PROMPT, error::CliResult, render};

const HELP: &str = "\
commands:
  connect      connect the wallet and show the current value
  get          show the current value
  set <value>  store a new value
  upgrade      run the diamond cut
  help         show this message
  quit         leave the console";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Action(Action),
    Help,
    Quit,
    Empty,
}

fn parse_line(line: &str) -> eyre::Result<Input> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Input::Empty);
    };
    let input = match (command, words.next()) {
        ("connect", None) => Input::Action(Action::Connect),
        ("get", None) => Input::Action(Action::GetValue),
        ("set", Some(value)) => Input::Action(Action::SetValue(value.to_string())),
        ("set", None) => bail!("usage: set <value>"),
        ("upgrade", None) => Input::Action(Action::Upgrade),
        ("help", None) => Input::Help,
        ("quit" | "exit", None) => Input::Quit,
        _ => bail!("unknown command {line:?}, try `help`"),
    };
    if words.next().is_some() {
        bail!("unexpected arguments in {line:?}");
    }
    Ok(input)
}

/// Runs actions read from stdin against one dapp, so the session outlives each action.
///
/// Updates are rendered after each action completes, so they always land before the next prompt.
pub async fn exec(args: Args) -> CliResult {
    let injected = args.wallet.open().await?;
    let config = args.diamond.config();
    let (mut dapp, mut rx) = Dapp::new(injected, config.clone());

    let stdin = io::stdin();
    loop {
        print!("{CONSOLE_PROMPT}");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match parse_line(&line) {
            // Failures are already reported through the dapp.
            Ok(Input::Action(action)) => {
                let _ = dapp.dispatch(action).await;
                render::flush(&mut rx, &config.network);
            }
            Ok(Input::Help) => println!("{HELP}"),
            Ok(Input::Quit) => break,
            Ok(Input::Empty) => {}
            Err(err) => crate::utils::print_error(err),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(
            parse_line("connect\n").unwrap(),
            Input::Action(Action::Connect)
        );
        assert_eq!(parse_line("  get ").unwrap(), Input::Action(Action::GetValue));
        assert_eq!(
            parse_line("set 42").unwrap(),
            Input::Action(Action::SetValue("42".into()))
        );
        assert_eq!(parse_line("upgrade").unwrap(), Input::Action(Action::Upgrade));
        assert_eq!(parse_line("exit").unwrap(), Input::Quit);
        assert_eq!(parse_line("\n").unwrap(), Input::Empty);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_line("set").is_err());
        assert!(parse_line("set 1 2").is_err());
        assert!(parse_line("get 1").is_err());
        assert!(parse_line("withdraw").is_err());
    }
}

//! TMX CLI - render and inspect the monthly temperature matrix.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "tmx-cli",
    version,
    about = "Monthly temperature matrix toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: tmx_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    tmx_cmd::run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn month_outside_1_to_12_is_rejected() {
        let parsed = Cli::try_parse_from([
            "tmx-cli", "tooltip", "--input", "t.csv", "--year", "2020", "--month", "13",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn mode_parses_case_insensitively() {
        let parsed = Cli::try_parse_from([
            "tmx-cli", "render", "-i", "t.csv", "-o", "m.svg", "--mode", "MIN",
        ]);
        assert!(parsed.is_ok());
    }
}

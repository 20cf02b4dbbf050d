use clap::Parser;
use std::path::PathBuf;

/// Invoke ledger operations against a CSV-backed key-value store
#[derive(Parser, Debug)]
#[command(name = "ledger-engine")]
#[command(about = "Minimal ledger state machine over a key-value store", long_about = None)]
pub struct CliArgs {
    /// Path of the CSV store file (created on first write)
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = "ledger.csv",
        help = "Path to the CSV store file"
    )]
    pub store: PathBuf,

    /// Function to invoke: init, transfer, earn, set, or balance
    #[arg(value_name = "FUNCTION", help = "Function name (init, transfer, earn, set, balance)")]
    pub function: String,

    /// Ordered string arguments for the function
    ///
    /// Hyphen values are allowed so negative amounts like `-700` parse as
    /// arguments, not flags.
    #[arg(value_name = "ARGS", help = "Function arguments, in order", allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::init(&["program", "init", "alice", "bob"], "init", &["alice", "bob"])]
    #[case::transfer(&["program", "transfer", "alice", "bob", "300"], "transfer", &["alice", "bob", "300"])]
    #[case::balance_no_args_parse(&["program", "balance", "alice"], "balance", &["alice"])]
    #[case::no_args(&["program", "init"], "init", &[])]
    fn test_function_and_args_parsing(
        #[case] argv: &[&str],
        #[case] function: &str,
        #[case] expected_args: &[&str],
    ) {
        let parsed = CliArgs::try_parse_from(argv).unwrap();
        assert_eq!(parsed.function, function);
        assert_eq!(parsed.args, expected_args);
    }

    #[test]
    fn test_default_store_path() {
        let parsed = CliArgs::try_parse_from(["program", "balance", "alice"]).unwrap();
        assert_eq!(parsed.store, PathBuf::from("ledger.csv"));
    }

    #[test]
    fn test_custom_store_path() {
        let parsed =
            CliArgs::try_parse_from(["program", "--store", "/tmp/l.csv", "balance", "alice"])
                .unwrap();
        assert_eq!(parsed.store, PathBuf::from("/tmp/l.csv"));
    }

    #[test]
    fn test_missing_function_is_an_error() {
        assert!(CliArgs::try_parse_from(["program"]).is_err());
    }

    // Leading-dash amounts must be usable: clap must not eat "-700" as a flag
    #[test]
    fn test_negative_amount_parses_as_argument() {
        let parsed = CliArgs::try_parse_from(["program", "earn", "alice", "-700"]).unwrap();
        assert_eq!(parsed.args, vec!["alice", "-700"]);
    }
}

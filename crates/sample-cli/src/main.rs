use clap::Parser;
use sample_core::{DecodeError, SampleGroup};
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 入力が指定されなかったときにデコードするサンプル
const DEMO_INPUT: &str = r#"
{
    "id": "123",
    "samples": {
        "1": { "type": "one", "body": { "value": "this is a value 1" } },
        "2": { "type": "two", "body": { "value": "this is a value 2" } },
        "3": { "type": "three", "body": { "value": "this is a value 3" } }
    }
}
"#;

#[derive(Parser)]
#[command(name = "sample-cli", about = "Decode tagged sample groups from JSON")]
struct Cli {
    /// JSON file to decode (`-` reads stdin). Uses a built-in demo when omitted.
    #[arg(long, short, env = "SAMPLE_INPUT")]
    input: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

fn read_err(path: impl Into<String>) -> impl FnOnce(std::io::Error) -> CliError {
    let path = path.into();
    move |source| CliError::Read { path, source }
}

/// `-` のときは `stdin` から読む
fn read_input(input: Option<&Path>, mut stdin: impl Read) -> Result<Vec<u8>, CliError> {
    match input {
        None => Ok(DEMO_INPUT.as_bytes().to_vec()),
        Some(path) if path == Path::new("-") => {
            let mut buf = Vec::new();
            stdin
                .read_to_end(&mut buf)
                .map_err(read_err("<stdin>"))?;
            Ok(buf)
        }
        Some(path) => std::fs::read(path).map_err(read_err(path.display().to_string())),
    }
}

/// id を先頭に、各 sample を `key: value` で並べる（key 順）
fn render(group: &SampleGroup) -> Vec<String> {
    let mut entries: Vec<_> = group.samples().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(group.id().to_string());
    lines.extend(
        entries
            .into_iter()
            .map(|(key, sample)| format!("{key}: {}", sample.value())),
    );
    lines
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let bytes = read_input(cli.input.as_deref(), std::io::stdin().lock())?;
    let group = SampleGroup::from_slice(&bytes)?;
    tracing::info!(id = %group.id(), samples = group.len(), "decoded sample group");

    for line in render(&group) {
        println!("{line}");
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "failed to decode samples");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn demo_input_renders_sorted_lines() {
        let bytes = read_input(None, std::io::empty()).unwrap();
        let group = SampleGroup::from_slice(&bytes).unwrap();
        assert_eq!(
            render(&group),
            vec![
                "123",
                "1: this is a value 1",
                "2: this is a value 2",
                "3: this is a value 3",
            ]
        );
    }

    #[test]
    fn dash_reads_from_stdin() {
        let stdin: &[u8] =
            br#"{"id":"s","samples":{"k":{"type":"two","body":{"value":"piped"}}}}"#;
        let bytes = read_input(Some(Path::new("-")), stdin).unwrap();
        let group = SampleGroup::from_slice(&bytes).unwrap();
        assert_eq!(render(&group), vec!["s", "k: piped"]);
    }

    #[test]
    fn input_flag_is_backed_by_env() {
        let cmd = Cli::command();
        let input = cmd
            .get_arguments()
            .find(|arg| arg.get_id() == "input")
            .unwrap();
        assert_eq!(input.get_env(), Some(std::ffi::OsStr::new("SAMPLE_INPUT")));

        let cli = Cli::try_parse_from(["sample-cli", "--input", "-"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some(Path::new("-")));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = read_input(Some(Path::new("/definitely/not/here.json")), std::io::empty())
            .unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn decode_errors_pass_through() {
        let err: CliError = SampleGroup::from_slice(b"[]").unwrap_err().into();
        assert!(err.to_string().starts_with("malformed input"));
    }
}

use clap::Parser;
use sqlsplit::{Error, Result, StatementList, config, split};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Split a SQL script into statements and print where they are.
#[derive(Parser, Debug)]
#[command(name = "sqlsplit")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Print one line per token instead of one per statement
    #[arg(long)]
    tokens: bool,

    /// Script to split, stdin when omitted
    file: Option<PathBuf>,
}

fn main() -> Result {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config().log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let sql = read(cli.file.as_deref(), config().max_input_bytes)?;
    tracing::info!(bytes = sql.len(), file = ?cli.file, "read script");

    let statements = split(&sql);
    if cli.tokens {
        print_tokens(&statements);
    } else {
        print_statements(&statements);
    }
    Ok(())
}

fn read(file: Option<&Path>, limit: usize) -> Result<String> {
    // One byte past the limit is enough to tell it was exceeded.
    let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    match file {
        Some(path) => {
            // Pipes and devices report a length of zero, so this only catches
            // regular files early. The bounded read below covers the rest.
            let size = usize::try_from(std::fs::metadata(path)?.len()).unwrap_or(usize::MAX);
            if size > limit {
                return Err(Error::InputTooLarge { size, limit });
            }
            std::fs::File::open(path)?.take(cap).read_to_end(&mut bytes)?;
        }
        None => {
            std::io::stdin().take(cap).read_to_end(&mut bytes)?;
        }
    }
    if bytes.len() > limit {
        return Err(Error::InputTooLarge {
            size: bytes.len(),
            limit,
        });
    }
    String::from_utf8(bytes)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}

fn print_statements(statements: &StatementList) {
    for (index, statement) in statements.iter().enumerate() {
        let lens = statement
            .code_lens_line_number()
            .map_or_else(|| "-".to_string(), |line| line.to_string());
        println!(
            "{index}\t{}\t{lens}\t{}",
            statement.range(),
            statement.needs_semicolon()
        );
    }
}

fn print_tokens(statements: &StatementList) {
    for token in statements.iter().flat_map(|s| s.iter()) {
        let depth = token.depth.map_or_else(|| "-".to_string(), |d| d.to_string());
        println!("{}\t{}\t{depth}\t{:?}", token.kind, token.range, token.text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_over_the_limit_is_rejected() -> Result {
        let path = std::env::temp_dir().join(format!("sqlsplit-{}.sql", std::process::id()));
        std::fs::write(&path, "select 1;\nselect 2;\n")?;

        let too_large = read(Some(path.as_path()), 8);
        let fits = read(Some(path.as_path()), 64);
        std::fs::remove_file(&path)?;

        assert!(matches!(too_large, Err(Error::InputTooLarge { size: 20, limit: 8 })));
        assert_eq!(fits?, "select 1;\nselect 2;\n");
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn unsized_file_is_read_up_to_the_limit() {
        let endless = read(Some(Path::new("/dev/zero")), 16);
        assert!(matches!(endless, Err(Error::InputTooLarge { size: 17, limit: 16 })));
    }
}

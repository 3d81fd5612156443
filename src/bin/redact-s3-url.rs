use elog_redact::leak;
use elog_redact::redact;
use std::env;
use std::path::Path;
use std::process::ExitCode;

fn print_usage() {
    eprintln!("Usage: redact-s3-url");
    eprintln!();
    eprintln!("Takes no arguments. Intended as a `git filter-branch` tree-filter:");
    eprintln!("run once per checked-out commit, with the tree root as the CWD.");
    eprintln!("Replaces the leaked presigned S3 URL in {} if present.", leak::TARGET_FILE);
}

fn main() -> ExitCode {
    // A misinvoked tree-filter should fail loudly, not silently ignore args
    if env::args().len() > 1 {
        print_usage();
        return ExitCode::from(1);
    }

    let target = Path::new(leak::TARGET_FILE);
    match redact::redact_file(target, leak::OLD_URL, leak::NEW_URL) {
        Ok(redact::Outcome::Redacted { occurrences }) => {
            eprintln!("Redacted {occurrences} occurrence(s) in {}", leak::TARGET_FILE);
            ExitCode::SUCCESS
        }
        // Missing file and no match are expected across historical snapshots
        Ok(redact::Outcome::Missing | redact::Outcome::Clean) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Cannot redact {}: {e}", leak::TARGET_FILE);
            ExitCode::from(1)
        }
    }
}

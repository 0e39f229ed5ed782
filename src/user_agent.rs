use std::fs;
use std::path::Path;

use log::{error, warn};

/// Returned whenever the user-agent file cannot supply a candidate.
pub const FALLBACK_USER_AGENT: &str = "Mozilla/5.0";

/// Picks one user-agent string at random from a line-oriented file.
///
/// The file is re-read on every call, so edits take effect mid-run. Lines are
/// trimmed and blank lines ignored. A file that is missing or holds no usable
/// lines yields [`FALLBACK_USER_AGENT`].
pub fn random_user_agent(path: &Path) -> String {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Could not read user agent file {}: {}", path.display(), e);
            return FALLBACK_USER_AGENT.to_string();
        }
    };

    let agents: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if agents.is_empty() {
        warn!("User agent file {} has no usable lines", path.display());
        return FALLBACK_USER_AGENT.to_string();
    }

    use rand::Rng;
    let mut rng = rand::thread_rng();
    agents[rng.gen_range(0..agents.len())].to_string()
}

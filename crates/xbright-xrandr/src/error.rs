use thiserror::Error;

#[derive(Debug, Error)]
pub enum XrandrError {
    /// The tool could not be started at all (usually: not installed).
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and exited with a non-zero status.
    #[error("{command} failed: status {code:?}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

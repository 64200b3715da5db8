//! Path translation between the host and the plugin sandbox.

use std::path::PathBuf;

/// Directory for careboard's own files (trace output).
///
/// Resolves to `~/.local/share/zellij/careboard` on the host when Zellij was
/// started from the home directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("careboard")
}

/// Maps a leading `~` to the sandbox mount point.
///
/// ```
/// use careboard::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/clinic/catalog.json"), "/host/clinic/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/srv/catalog.toml"), "/srv/catalog.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

/// The inverse of [`expand_tilde`], for showing sandbox paths to the user.
///
/// ```
/// use careboard::infrastructure::display_path;
///
/// assert_eq!(display_path("/host/clinic/catalog.json"), "~/clinic/catalog.json");
/// assert_eq!(display_path("/srv/catalog.toml"), "/srv/catalog.toml");
/// ```
#[must_use]
pub fn display_path(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~user/file"), "~user/file");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn display_round_trips_expanded_paths() {
        for path in ["~", "~/a/b.json"] {
            assert_eq!(display_path(&expand_tilde(path)), path);
        }
        assert_eq!(display_path("/hostile/x"), "/hostile/x");
    }
}

//! # WindowFix Pro static site server
//!
//! `windowfix` serves the compiled `windowfix-web` bundle (a Leptos client-side
//! app) over HTTP. It carries no business logic: every page is rendered in the
//! browser and every "backend" interaction of the portal is simulated there.
//!
//! ## Routing
//!
//! - `GET /health` reports build metadata and whether the bundle is present.
//! - Any other path is looked up in the bundle directory. Paths that do not
//!   match a file fall back to `index.html` so the client router can resolve
//!   `/services`, `/login`, `/dashboard` and friends on a hard reload.

pub mod cli;
pub mod site;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }
}

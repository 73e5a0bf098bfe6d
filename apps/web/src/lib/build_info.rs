#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub fn git_commit_hash() -> &'static str {
    built_info::GIT_COMMIT_HASH.unwrap_or("unknown")
}

/// First seven characters of the commit, or the whole value when shorter.
pub fn short_commit_hash() -> &'static str {
    let hash = git_commit_hash();
    hash.get(..7).unwrap_or(hash)
}

pub fn version() -> &'static str {
    built_info::PKG_VERSION
}

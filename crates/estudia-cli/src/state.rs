//! Signed-in user state.
//!
//! `est login` records the authenticated user id in a small state file under
//! the user config directory; every later invocation is a fresh process, so
//! this file is what "signed in" means for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Path of the state file (`~/.config/estudia/current_user`).
fn current_user_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("estudia").join("current_user"))
}

/// Remember `user_id` as the signed-in user.
pub fn save_current_user(user_id: &str) -> anyhow::Result<()> {
    let path = current_user_path().context("no user config directory available")?;
    write_user_id(&path, user_id)
}

/// The signed-in user id, if any.
pub fn load_current_user() -> Option<String> {
    read_user_id(&current_user_path()?)
}

fn write_user_id(path: &Path, user_id: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, user_id).with_context(|| format!("failed to write {}", path.display()))
}

fn read_user_id(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let id = contents.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

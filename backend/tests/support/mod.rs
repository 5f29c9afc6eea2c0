#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use open_hours::db::{import_catalog, LocalRepository};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Number of usable rows in `tests/data/restaurants.csv`.
pub const FIXTURE_ROWS: usize = 8;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// In-memory repository loaded with the fixture catalog.
pub async fn fixture_repository() -> LocalRepository {
    let repo = LocalRepository::new();
    let imported = import_catalog(&repo, fixture_path("restaurants.csv"), true)
        .await
        .expect("fixture catalog should load");
    assert_eq!(imported, FIXTURE_ROWS);
    repo
}

/// Runs `f` with environment variables temporarily set (`Some`) or removed (`None`).
///
/// Calls are serialized on a process-wide lock and the previous values are
/// restored on drop, including when `f` panics.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

struct EnvRestore {
    previous: Vec<(String, Option<String>)>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let mut previous: Vec<(String, Option<String>)> = Vec::new();
        for (key, value) in changes {
            if !previous.iter().any(|(k, _)| k == key) {
                previous.push((key.to_string(), std::env::var(key).ok()));
            }
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
        Self { previous }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.previous.drain(..) {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }
}

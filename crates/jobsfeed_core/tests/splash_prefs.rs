use jobsfeed_core::db::migrations::latest_version;
use jobsfeed_core::db::{open_db, open_db_in_memory};
use jobsfeed_core::splash::sequence::complete_splash;
use jobsfeed_core::{
    EntryAction, PrefRepository, Route, SplashPhase, SplashSequence, SqlitePrefRepository,
    PREF_HAS_SEEN_SPLASH,
};
use std::time::Duration;

fn memory_repo() -> SqlitePrefRepository {
    SqlitePrefRepository::new(open_db_in_memory().unwrap())
}

#[test]
fn pref_set_get_round_trip_and_upsert() {
    let repo = memory_repo();
    assert_eq!(repo.get("k").unwrap(), None);

    repo.set("k", "v1").unwrap();
    assert_eq!(repo.get("k").unwrap().as_deref(), Some("v1"));

    repo.set("k", "v2").unwrap();
    assert_eq!(repo.get("k").unwrap().as_deref(), Some("v2"));

    repo.remove("k").unwrap();
    assert_eq!(repo.get("k").unwrap(), None);
}

#[test]
fn file_backed_store_persists_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.db");

    {
        let repo = SqlitePrefRepository::new(open_db(&path).unwrap());
        repo.set("jobfeed-ui-theme", "dark").unwrap();
    }

    let repo = SqlitePrefRepository::new(open_db(&path).unwrap());
    assert_eq!(
        repo.get("jobfeed-ui-theme").unwrap().as_deref(),
        Some("dark")
    );
}

#[test]
fn open_applies_migrations_to_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    let table_count: u32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'prefs';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(table_count, 1);
}

#[test]
fn splash_gate_opens_exactly_at_the_deadline() {
    assert_eq!(
        SplashSequence::phase_at(Duration::from_millis(0)),
        SplashPhase::Loading
    );
    assert_eq!(
        SplashSequence::phase_at(Duration::from_millis(2499)),
        SplashPhase::Loading
    );
    assert_eq!(
        SplashSequence::phase_at(Duration::from_millis(2500)),
        SplashPhase::Ready
    );
}

#[test]
fn every_entry_action_writes_the_seen_flag_and_routes_home() {
    for action in [EntryAction::Continue, EntryAction::Login, EntryAction::SignUp] {
        let repo = memory_repo();
        let route = complete_splash(&repo, action).unwrap();
        assert_eq!(route, Route::Home);
        assert_eq!(
            repo.get(PREF_HAS_SEEN_SPLASH).unwrap().as_deref(),
            Some("true")
        );
    }
}

#[test]
fn completing_splash_twice_is_harmless() {
    let repo = memory_repo();
    complete_splash(&repo, EntryAction::Continue).unwrap();
    complete_splash(&repo, EntryAction::Login).unwrap();
    assert_eq!(
        repo.get(PREF_HAS_SEEN_SPLASH).unwrap().as_deref(),
        Some("true")
    );
}

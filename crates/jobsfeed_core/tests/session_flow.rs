use jobsfeed_core::db::open_db_in_memory;
use jobsfeed_core::{
    AppSession, EntryAction, FeedCategory, MockDirectory, PrefRepository, Route,
    SqlitePrefRepository, ThemeMode, ThemePreference, PREF_HAS_SEEN_SPLASH, PREF_THEME,
};

fn session() -> AppSession<MockDirectory, SqlitePrefRepository> {
    let directory = MockDirectory::seeded().unwrap();
    let prefs = SqlitePrefRepository::new(open_db_in_memory().unwrap());
    AppSession::start(directory, prefs).unwrap()
}

#[test]
fn session_boots_on_splash_with_loaded_data() {
    let session = session();
    assert_eq!(session.route(), Route::Splash);
    assert!(!session.jobs().is_empty());
    assert_eq!(session.feed().saved_count(), session.user().saved_jobs.len());
}

#[test]
fn completing_splash_lands_on_home_and_records_the_flag() {
    let mut session = session();
    let route = session.complete_splash(EntryAction::Continue).unwrap();
    assert_eq!(route, Route::Home);
    assert_eq!(session.route(), Route::Home);
}

#[test]
fn navigation_follows_the_route_table() {
    let mut session = session();
    session.navigate_path("/settings");
    assert_eq!(session.route(), Route::Settings);
    session.navigate_path("/home");
    assert_eq!(session.route(), Route::Home);
    session.navigate_path("/does-not-exist");
    assert_eq!(session.route(), Route::NotFound);
}

#[test]
fn feed_operations_flow_through_the_session() {
    let mut session = session();
    let total = session.jobs().len();
    assert_eq!(session.visible_jobs().len(), total);

    session.feed_mut().set_category(FeedCategory::Saved);
    let saved_count = session.feed().saved_count();
    assert_eq!(session.visible_jobs().len(), saved_count);

    session.feed_mut().set_category(FeedCategory::All);
    session.feed_mut().set_query("no such posting anywhere");
    assert!(session.visible_jobs().is_empty());
}

#[test]
fn profile_editors_are_independent_copies() {
    let session = session();
    let mut first = session.profile_editor();
    first.set_name("Changed");

    let second = session.profile_editor();
    assert_ne!(second.user().name, "Changed");
    assert_eq!(session.user().name, second.user().name);
}

#[test]
fn theme_preference_persists_through_the_session_store() {
    let directory = MockDirectory::seeded().unwrap();
    let prefs = SqlitePrefRepository::new(open_db_in_memory().unwrap());
    prefs.set(PREF_THEME, "dark").unwrap();

    let mut session = AppSession::start(directory, prefs).unwrap();
    assert_eq!(session.theme().preference(), ThemePreference::Dark);
    assert_eq!(session.theme().resolve(ThemeMode::Light), ThemeMode::Dark);

    session.set_theme_preference(ThemePreference::System).unwrap();
    assert_eq!(session.theme().resolve(ThemeMode::Light), ThemeMode::Light);
}

#[test]
fn unknown_stored_theme_falls_back_to_system() {
    let directory = MockDirectory::seeded().unwrap();
    let prefs = SqlitePrefRepository::new(open_db_in_memory().unwrap());
    prefs.set(PREF_THEME, "solarized").unwrap();

    let session = AppSession::start(directory, prefs).unwrap();
    assert_eq!(session.theme().preference(), ThemePreference::System);
}

#[test]
fn seen_flag_is_written_but_never_read_by_session_boot() {
    // Boot twice against the same kind of store: the flag's presence has no
    // effect on the starting route, mirroring the original shell.
    let directory = MockDirectory::seeded().unwrap();
    let prefs = SqlitePrefRepository::new(open_db_in_memory().unwrap());
    prefs.set(PREF_HAS_SEEN_SPLASH, "true").unwrap();

    let session = AppSession::start(directory, prefs).unwrap();
    assert_eq!(session.route(), Route::Splash);
}

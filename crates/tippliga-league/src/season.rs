use tippliga_core::store::{FixtureStore, StoreError};

/// Highest matchday in the schedule, or 0 when no fixtures are loaded.
pub fn max_matchday(store: &impl FixtureStore) -> Result<u32, StoreError> {
    Ok(store
        .all_fixtures()?
        .iter()
        .map(|f| f.matchday)
        .max()
        .unwrap_or(0))
}

/// The matchday currently being played: the lowest one that still has an
/// unfinished fixture, or the final matchday once everything is done.
pub fn current_matchday(store: &impl FixtureStore) -> Result<u32, StoreError> {
    let fixtures = store.all_fixtures()?;
    let open = fixtures
        .iter()
        .filter(|f| !f.finished)
        .map(|f| f.matchday)
        .min();
    match open {
        Some(day) => Ok(day),
        None => Ok(fixtures.iter().map(|f| f.matchday).max().unwrap_or(0)),
    }
}

mod common;

use astro_journal_core::storage::SELECTED_ZODIAC_SIGN_KEY;
use astro_journal_core::{
    AppStore, ContentError, ContentResult, Horoscope, HoroscopeProvider, JournalEntry,
    NewJournalEntry, SqliteKeyValueStore, StaticHoroscopeProvider, StoreError, ZodiacSign,
};
use common::FlakyStore;
use std::sync::atomic::{AtomicBool, Ordering};

fn memory_store() -> AppStore<SqliteKeyValueStore, StaticHoroscopeProvider> {
    AppStore::new(
        SqliteKeyValueStore::open_in_memory().unwrap(),
        StaticHoroscopeProvider::new(),
    )
}

fn flaky_store() -> AppStore<FlakyStore, StaticHoroscopeProvider> {
    AppStore::new(FlakyStore::new(), StaticHoroscopeProvider::new())
}

/// Provider that can be switched to fail while delegating to static content.
#[derive(Default)]
struct SwitchableProvider {
    failing: AtomicBool,
}

impl HoroscopeProvider for SwitchableProvider {
    fn horoscope(&self, sign: ZodiacSign) -> ContentResult<Horoscope> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ContentError::Unavailable {
                sign,
                reason: "offline".to_string(),
            });
        }
        StaticHoroscopeProvider::new().horoscope(sign)
    }
}

#[tokio::test]
async fn save_update_delete_scenario() {
    let store = memory_store();

    let saved = store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "hello", ZodiacSign::Leo))
        .await
        .unwrap();

    let state = store.snapshot();
    assert_eq!(state.journal_entries.len(), 1);
    assert_eq!(state.journal_entries[0].date, "2024-01-01");
    assert_eq!(state.journal_entries[0].content, "hello");
    assert_eq!(state.journal_entries[0].zodiac_sign, ZodiacSign::Leo);
    assert_eq!(saved.created_at, saved.updated_at);

    let mut edited = saved.clone();
    edited.content = "hello world".to_string();
    let updated = store.update_journal_entry(edited).await.unwrap();

    let state = store.snapshot();
    let matching: Vec<&JournalEntry> = state
        .journal_entries
        .iter()
        .filter(|entry| entry.id == saved.id)
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].content, "hello world");
    assert!(matching[0].updated_at > matching[0].created_at);
    assert_eq!(matching[0].created_at, saved.created_at);
    assert_eq!(matching[0], &updated);

    store.delete_journal_entry(&saved.id).await.unwrap();

    assert!(store.snapshot().journal_entries.is_empty());
    assert!(store.repository().list_journal_entries().await.is_empty());
}

#[tokio::test]
async fn save_does_not_deduplicate_by_date() {
    let store = memory_store();

    let first = store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "a", ZodiacSign::Leo))
        .await
        .unwrap();
    let second = store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "b", ZodiacSign::Leo))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    let ids: Vec<_> = store
        .snapshot()
        .journal_entries
        .into_iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[tokio::test]
async fn sign_change_is_not_rolled_back_when_persisting_fails() {
    let store = flaky_store();
    store
        .repository()
        .put_selected_zodiac_sign(ZodiacSign::Aries)
        .await
        .unwrap();
    store.initialize().await;
    let horoscope_before = store.snapshot().horoscope;

    store.repository().store().fail_writes(true);
    let err = store
        .change_zodiac_sign(ZodiacSign::Taurus)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Storage(_)));
    let state = store.snapshot();
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Taurus);
    assert_eq!(state.horoscope, horoscope_before);
    assert_eq!(
        store
            .repository()
            .store()
            .raw(SELECTED_ZODIAC_SIGN_KEY)
            .await
            .as_deref(),
        Some("aries")
    );
}

#[tokio::test]
async fn sign_change_persists_and_refreshes_horoscope() {
    let store = memory_store();

    store.change_zodiac_sign(ZodiacSign::Sagittarius).await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Sagittarius);
    assert_eq!(state.horoscope.unwrap().mood, "Adventurous");
    assert_eq!(
        store.repository().get_selected_zodiac_sign().await,
        ZodiacSign::Sagittarius
    );
}

#[tokio::test]
async fn sign_change_keeps_sign_when_horoscope_fetch_fails() {
    let provider = SwitchableProvider::default();
    provider.failing.store(true, Ordering::SeqCst);
    let store = AppStore::new(SqliteKeyValueStore::open_in_memory().unwrap(), provider);

    let err = store.change_zodiac_sign(ZodiacSign::Libra).await.unwrap_err();

    assert!(matches!(err, StoreError::Content(_)));
    assert_eq!(store.snapshot().selected_zodiac_sign, ZodiacSign::Libra);
    assert_eq!(store.snapshot().horoscope, None);
    assert_eq!(
        store.repository().get_selected_zodiac_sign().await,
        ZodiacSign::Libra
    );
}

#[tokio::test]
async fn fetch_horoscope_defaults_to_selected_sign() {
    let store = memory_store();
    store.change_zodiac_sign(ZodiacSign::Cancer).await.unwrap();

    store.fetch_horoscope(None).await.unwrap();
    assert_eq!(store.snapshot().horoscope.unwrap().color, "Silver");

    store.fetch_horoscope(Some(ZodiacSign::Pisces)).await.unwrap();
    let state = store.snapshot();
    assert_eq!(state.horoscope.unwrap().color, "Sea Green");
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Cancer);
}

#[tokio::test]
async fn failed_fetch_keeps_previous_horoscope() {
    let store = AppStore::new(
        SqliteKeyValueStore::open_in_memory().unwrap(),
        SwitchableProvider::default(),
    );
    store.fetch_horoscope(Some(ZodiacSign::Leo)).await.unwrap();
    let before = store.snapshot().horoscope;
    assert!(before.is_some());

    store.provider().failing.store(true, Ordering::SeqCst);
    let err = store.fetch_horoscope(None).await.unwrap_err();

    assert!(matches!(err, StoreError::Content(_)));
    assert_eq!(store.snapshot().horoscope, before);
}

#[tokio::test]
async fn failed_save_appends_nothing() {
    let store = flaky_store();
    store.repository().store().fail_writes(true);

    let err = store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "lost", ZodiacSign::Leo))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::Storage(_)));
    assert!(store.snapshot().journal_entries.is_empty());
}

#[tokio::test]
async fn failed_update_and_delete_leave_memory_unchanged() {
    let store = flaky_store();
    let saved = store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "original", ZodiacSign::Leo))
        .await
        .unwrap();
    store.repository().store().fail_writes(true);

    let mut edited = saved.clone();
    edited.content = "edited".to_string();
    assert!(store.update_journal_entry(edited).await.is_err());
    assert!(store.delete_journal_entry(&saved.id).await.is_err());

    assert_eq!(store.snapshot().journal_entries, vec![saved]);
}

#[tokio::test]
async fn update_of_unknown_id_writes_through_but_leaves_memory() {
    let store = memory_store();
    let stray = JournalEntry::create(NewJournalEntry::new("2024-05-05", "stray", ZodiacSign::Virgo));

    let updated = store.update_journal_entry(stray.clone()).await.unwrap();

    assert!(store.snapshot().journal_entries.is_empty());
    let persisted = store.repository().list_journal_entries().await;
    assert_eq!(persisted, vec![updated]);

    let loaded = store.load_journal_entries().await.unwrap();
    assert_eq!(loaded, 1);
    assert_eq!(store.snapshot().journal_entries[0].id, stray.id);
}

#[tokio::test]
async fn delete_of_unknown_id_is_a_noop() {
    let store = memory_store();
    let saved = store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "stay", ZodiacSign::Leo))
        .await
        .unwrap();

    store.delete_journal_entry("missing").await.unwrap();

    assert_eq!(store.snapshot().journal_entries, vec![saved.clone()]);
    assert_eq!(store.repository().list_journal_entries().await, vec![saved]);
}

#[tokio::test]
async fn initialize_merges_persisted_sign_and_entries_once() {
    let store = memory_store();
    let seeded = JournalEntry::create(NewJournalEntry::new("2024-01-01", "old", ZodiacSign::Gemini));
    store.repository().put_journal_entry(&seeded).await.unwrap();
    store
        .repository()
        .put_selected_zodiac_sign(ZodiacSign::Gemini)
        .await
        .unwrap();

    assert!(store.initialize().await);

    let state = store.snapshot();
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Gemini);
    assert_eq!(state.horoscope.as_ref().unwrap().mood, "Curious");
    assert_eq!(state.journal_entries, vec![seeded]);
    assert_eq!(state.error, None);

    store
        .repository()
        .put_selected_zodiac_sign(ZodiacSign::Leo)
        .await
        .unwrap();
    assert!(!store.initialize().await);
    assert_eq!(store.snapshot().selected_zodiac_sign, ZodiacSign::Gemini);
}

#[tokio::test]
async fn initialize_dropped_midway_can_run_again() {
    let store = flaky_store();
    store
        .repository()
        .put_selected_zodiac_sign(ZodiacSign::Virgo)
        .await
        .unwrap();
    store.repository().store().yield_reads(true);

    tokio::select! {
        biased;
        _ = store.initialize() => panic!("initialize finished without yielding"),
        _ = async {} => {}
    }

    store.repository().store().yield_reads(false);
    assert!(store.initialize().await);
    let state = store.snapshot();
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Virgo);
    assert_eq!(state.horoscope.unwrap().mood, "Analytical");
    assert!(!store.initialize().await);
}

#[tokio::test]
async fn initialize_on_empty_storage_uses_aries() {
    let store = memory_store();

    store.initialize().await;

    let state = store.snapshot();
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Aries);
    assert_eq!(state.horoscope.unwrap().color, "Red");
    assert!(state.journal_entries.is_empty());
}

#[tokio::test]
async fn initialize_tolerates_horoscope_failure() {
    let provider = SwitchableProvider::default();
    provider.failing.store(true, Ordering::SeqCst);
    let store = AppStore::new(SqliteKeyValueStore::open_in_memory().unwrap(), provider);
    let seeded = JournalEntry::create(NewJournalEntry::new("2024-01-01", "kept", ZodiacSign::Aries));
    store.repository().put_journal_entry(&seeded).await.unwrap();

    assert!(store.initialize().await);

    let state = store.snapshot();
    assert_eq!(state.horoscope, None);
    assert_eq!(state.journal_entries, vec![seeded]);
}

#[tokio::test]
async fn subscribers_observe_commits() {
    let store = memory_store();
    let mut receiver = store.subscribe();

    store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "seen", ZodiacSign::Leo))
        .await
        .unwrap();

    assert!(receiver.has_changed().unwrap());
    assert_eq!(receiver.borrow_and_update().journal_entries.len(), 1);
}

#[tokio::test]
async fn clear_all_data_resets_storage_and_state() {
    let store = memory_store();
    store.change_zodiac_sign(ZodiacSign::Leo).await.unwrap();
    store
        .save_journal_entry(NewJournalEntry::new("2024-01-01", "bye", ZodiacSign::Leo))
        .await
        .unwrap();

    store.clear_all_data().await.unwrap();

    let state = store.snapshot();
    assert_eq!(state.selected_zodiac_sign, ZodiacSign::Aries);
    assert_eq!(state.horoscope, None);
    assert!(state.journal_entries.is_empty());
    assert!(store.repository().list_journal_entries().await.is_empty());
    assert_eq!(
        store.repository().get_selected_zodiac_sign().await,
        ZodiacSign::Aries
    );
}

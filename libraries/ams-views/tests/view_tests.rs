//! Tests for the table, dialog and auth views against an in-memory gateway.

mod common;

use ams_core::{
    navigation, AmsError, ArtistPatch, Gateway, LoginResponse, Role, SessionStore, SongInput,
    SongPatch, UserProfile,
};
use ams_views::auth::{INVALID_CREDENTIALS, INVALID_RESPONSE, PASSWORD_MISMATCH};
use ams_views::{
    ArtistForm, ArtistTable, FormDialog, LoginForm, Phase, Route, SignupFields, SignupForm,
    SongForm, SongTable, UNKNOWN_ARTIST,
};
use common::{artist, song, FakeGateway};
use std::sync::Arc;
use std::time::Duration;

fn three_artists() -> Arc<FakeGateway> {
    Arc::new(FakeGateway::new(
        vec![artist(1, "Ada"), artist(5, "Grace"), artist(9, "Hedy")],
        Vec::new(),
    ))
}

// =============================================================================
// Artist Table Tests
// =============================================================================

mod artist_table {
    use super::*;

    #[tokio::test]
    async fn test_load_enters_ready() {
        let gateway = three_artists();
        let table = ArtistTable::new(gateway.clone());
        assert_eq!(table.phase().await, Phase::Loading);

        table.load().await.unwrap();

        assert_eq!(table.phase().await, Phase::Ready);
        assert_eq!(table.total().await, 3);
    }

    #[tokio::test]
    async fn test_load_failure_enters_error() {
        let gateway = three_artists();
        gateway.fail("list_artists");
        let table = ArtistTable::new(gateway.clone());

        assert!(table.load().await.is_err());
        assert_eq!(
            table.phase().await,
            Phase::Error("Failed to load artists".into())
        );
    }

    #[tokio::test]
    async fn test_delete_removes_one_row_without_refetch() {
        let gateway = three_artists();
        let table = ArtistTable::new(gateway.clone());
        table.load().await.unwrap();

        table.request_delete(5).await;
        assert_eq!(table.pending_delete().await, Some(5));

        let deleted = table.confirm_delete().await.unwrap();

        assert_eq!(deleted, Some(5));
        assert_eq!(table.total().await, 2);
        assert!(table.find(5).await.is_none());
        assert!(table.find(1).await.is_some());
        assert!(table.find(9).await.is_some());
        assert_eq!(table.pending_delete().await, None);
        assert_eq!(gateway.calls("list_artists"), 1);
        assert_eq!(gateway.calls("delete_artist"), 1);
    }

    #[tokio::test]
    async fn test_cancel_delete_issues_no_call() {
        let gateway = three_artists();
        let table = ArtistTable::new(gateway.clone());
        table.load().await.unwrap();

        table.request_delete(5).await;
        table.cancel_delete().await;

        assert_eq!(table.pending_delete().await, None);
        assert_eq!(table.confirm_delete().await.unwrap(), None);
        assert_eq!(gateway.calls("delete_artist"), 0);
        assert_eq!(table.total().await, 3);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_rows_and_clears_pending() {
        let gateway = three_artists();
        gateway.fail("delete_artist");
        let table = ArtistTable::new(gateway.clone());
        table.load().await.unwrap();

        table.request_delete(5).await;
        assert!(table.confirm_delete().await.is_err());

        assert_eq!(
            table.phase().await,
            Phase::Error("Failed to delete artist".into())
        );
        assert_eq!(table.total().await, 3);
        assert_eq!(table.pending_delete().await, None);
    }

    #[tokio::test]
    async fn test_edit_replaces_row_in_place() {
        let gateway = three_artists();
        let table = ArtistTable::new(gateway.clone());
        table.load().await.unwrap();

        let patch = ArtistPatch {
            name: Some("Grace Hopper".into()),
            ..Default::default()
        };
        table.update(5, &patch).await.unwrap();

        let state = table.snapshot().await;
        assert_eq!(state.items[1].name, "Grace Hopper");
        assert_eq!(state.total(), 3);
        assert_eq!(gateway.calls("list_artists"), 1);
    }

    #[tokio::test]
    async fn test_add_dialog_appends_and_closes() {
        let gateway = three_artists();
        let table = ArtistTable::new(gateway.clone());
        table.load().await.unwrap();

        let mut dialog = FormDialog::<ArtistForm>::new();
        dialog.open_add();
        *dialog.form_mut() = ArtistForm {
            name: "Joan".into(),
            dob: "1985-02-03".into(),
            gender: "f".into(),
            address: "Lalitpur".into(),
            first_release_year: "2005".into(),
            no_of_albums_released: "4".into(),
        };

        let view = &table;
        let created = dialog
            .submit(|input| async move { view.create(&input).await })
            .await
            .unwrap();

        assert!(!dialog.is_visible());
        assert_eq!(table.total().await, 4);
        assert_eq!(table.find(created.id).await.unwrap().name, "Joan");
    }

    #[tokio::test]
    async fn test_failed_add_keeps_dialog_open() {
        let gateway = three_artists();
        gateway.fail("create_artist");
        let table = ArtistTable::new(gateway.clone());
        table.load().await.unwrap();

        let mut dialog = FormDialog::<ArtistForm>::new();
        dialog.open_edit(ArtistForm::from(&artist(0, "Joan")));

        let view = &table;
        let result = dialog
            .submit(|input| async move { view.create(&input).await })
            .await;

        assert!(matches!(result, Err(AmsError::Transport(_))));
        assert!(dialog.is_visible());
        assert_eq!(dialog.form().name, "Joan");
        assert_eq!(table.total().await, 3);
        assert_eq!(
            table.phase().await,
            Phase::Error("Failed to create artist".into())
        );
    }
}

// =============================================================================
// Song Table Tests
// =============================================================================

mod song_table {
    use super::*;

    fn catalog() -> Arc<FakeGateway> {
        Arc::new(FakeGateway::new(
            vec![artist(1, "Ada"), artist(2, "Grace")],
            vec![song(10, 1, "First"), song(11, 2, "Second")],
        ))
    }

    #[tokio::test]
    async fn test_load_fetches_songs_and_artists() {
        let gateway = catalog();
        let table = SongTable::new(gateway.clone());

        table.load().await.unwrap();

        assert_eq!(table.phase().await, Phase::Ready);
        assert_eq!(gateway.calls("list_songs"), 1);
        assert_eq!(gateway.calls("list_artists"), 1);

        let rows = table.rows().await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].artist_name, "Ada");
        assert_eq!(rows[1].artist_name, "Grace");
    }

    #[tokio::test]
    async fn test_artist_failure_fails_the_table() {
        let gateway = catalog();
        gateway.fail("list_artists");
        let table = SongTable::new(gateway.clone());

        assert!(table.load().await.is_err());
        assert_eq!(table.phase().await, Phase::Error("Failed to load songs".into()));
    }

    #[tokio::test]
    async fn test_create_with_known_and_unknown_artist() {
        let gateway = catalog();
        let table = SongTable::new(gateway.clone());
        table.load().await.unwrap();

        let known = table
            .songs()
            .create(&SongInput {
                artist_id: 2,
                title: "Third".into(),
                album_name: "Album".into(),
                genre: ams_core::Genre::Jazz,
            })
            .await
            .unwrap();

        let orphan = table
            .songs()
            .create(&SongInput {
                artist_id: 42,
                title: "Fourth".into(),
                album_name: "Album".into(),
                genre: ams_core::Genre::Jazz,
            })
            .await
            .unwrap();

        let rows = table.rows().await;
        assert_eq!(rows.len(), 4);

        let known_row = rows.iter().find(|r| r.song.id == known.id).unwrap();
        assert_eq!(known_row.artist_name, "Grace");

        let orphan_row = rows.iter().find(|r| r.song.id == orphan.id).unwrap();
        assert_eq!(orphan_row.artist_name, UNKNOWN_ARTIST);
        assert_eq!(table.artist_name(42).await, UNKNOWN_ARTIST);
        assert_eq!(gateway.calls("list_songs"), 1);
    }

    #[tokio::test]
    async fn test_add_song_dialog_picks_artist_by_name() {
        let gateway = catalog();
        let table = SongTable::new(gateway.clone());
        table.load().await.unwrap();

        let mut dialog = FormDialog::<SongForm>::new();
        dialog.open_add();
        let artists = table.artists().await;
        let form = dialog.form_mut();
        form.set_artists(&artists);
        form.title = "Third".into();
        form.artist_name = "Grace".into();
        form.album_name = "Album".into();
        form.genre = "R&B".into();

        let songs = table.songs();
        let created = dialog
            .submit(|input| async move { songs.create(&input).await })
            .await
            .unwrap();

        assert_eq!(created.artist_id, 2);
        assert_eq!(created.genre, ams_core::Genre::Rnb);
        assert!(!dialog.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_edits_last_write_wins() {
        let gateway = catalog();
        let table = SongTable::new(gateway.clone());
        table.load().await.unwrap();

        // The first save resolves quickly, the second one later
        gateway.delay_next_update(Duration::from_millis(10));
        gateway.delay_next_update(Duration::from_millis(50));

        let first = SongPatch {
            title: Some("First save".into()),
            ..Default::default()
        };
        let second = SongPatch {
            title: Some("Second save".into()),
            ..Default::default()
        };

        let (a, b) = tokio::join!(
            table.songs().update(10, &first),
            table.songs().update(10, &second)
        );
        assert!(a.is_ok());
        assert!(b.is_ok());

        let shown = table.songs().find(10).await.unwrap();
        assert_eq!(shown.title, "Second save");
        assert_eq!(table.songs().total().await, 2);
    }

    #[tokio::test]
    async fn test_reload_refetches() {
        let gateway = catalog();
        let table = SongTable::new(gateway.clone());
        table.load().await.unwrap();
        table.reload().await.unwrap();

        assert_eq!(gateway.calls("list_songs"), 2);
        assert_eq!(gateway.calls("list_artists"), 2);
    }
}

// =============================================================================
// Login / Signup Tests
// =============================================================================

mod auth_forms {
    use super::*;

    fn filled_signup(password: &str, confirm: &str) -> SignupForm {
        SignupForm::new(SignupFields {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: password.into(),
            confirm_password: confirm.into(),
            phone: "9800000000".into(),
            dob: "1990-04-12".into(),
            gender: "f".into(),
            address: "London".into(),
            role: "artist_manager".into(),
        })
    }

    #[tokio::test]
    async fn test_login_stores_role_in_session() {
        let gateway = FakeGateway::empty();
        gateway.set_login_response(LoginResponse {
            access_token: Some("A".into()),
            refresh_token: None,
            user: Some(UserProfile::with_role("ada@example.com", Role::ArtistManager)),
        });
        let session = SessionStore::in_memory();
        let mut changes = session.subscribe();

        let mut form = LoginForm::new("ada@example.com", "pw");
        let route = form.submit(&gateway, &session).await;

        assert_eq!(route, Some(Route::Dashboard));
        assert!(form.error().is_none());
        assert_eq!(session.access_token().as_deref(), Some("A"));
        assert_eq!(session.refresh_token(), None);
        assert_eq!(session.user().unwrap().role, Role::ArtistManager);
        assert_eq!(navigation::resolve(Some(session.role())).len(), 5);

        assert!(changes.has_changed().unwrap());
        assert_eq!(changes.borrow_and_update().role(), Role::ArtistManager);
    }

    #[tokio::test]
    async fn test_login_without_token_is_invalid_response() {
        let gateway = FakeGateway::empty();
        gateway.set_login_response(LoginResponse::default());
        let session = SessionStore::in_memory();

        let mut form = LoginForm::new("ada@example.com", "pw");
        assert_eq!(form.submit(&gateway, &session).await, None);

        assert_eq!(form.error(), Some(INVALID_RESPONSE));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejected_shows_generic_message() {
        let gateway = FakeGateway::empty();
        gateway.fail("login");
        let session = SessionStore::in_memory();

        let mut form = LoginForm::new("ada@example.com", "wrong");
        assert_eq!(form.submit(&gateway, &session).await, None);

        assert_eq!(form.error(), Some(INVALID_CREDENTIALS));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_requires_fields() {
        let gateway = FakeGateway::empty();
        let session = SessionStore::in_memory();

        let mut form = LoginForm::new("ada@example.com", "");
        assert_eq!(form.submit(&gateway, &session).await, None);

        assert!(form.error().is_some());
        assert_eq!(gateway.calls("login"), 0);
    }

    #[tokio::test]
    async fn test_signup_mismatch_makes_no_call() {
        let gateway = FakeGateway::empty();
        let mut form = filled_signup("a", "b");

        let route = form.submit(&gateway).await;

        assert_eq!(route, None);
        assert_eq!(form.error(), Some(PASSWORD_MISMATCH));
        assert_eq!(gateway.calls("sign_up"), 0);
    }

    #[tokio::test]
    async fn test_signup_success_routes_to_login() {
        let gateway = FakeGateway::empty();
        let mut form = filled_signup("secret", "secret");

        let route = form.submit(&gateway).await;

        assert_eq!(route, Some(Route::Login));
        let sent = gateway.signups();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].role, Role::ArtistManager);
    }

    #[tokio::test]
    async fn test_signup_keeps_password_padding() {
        let gateway = FakeGateway::empty();

        let mut form = filled_signup(" secret ", "secret");
        assert_eq!(form.submit(&gateway).await, None);
        assert_eq!(form.error(), Some(PASSWORD_MISMATCH));
        assert_eq!(gateway.calls("sign_up"), 0);

        let mut form = filled_signup(" secret ", " secret ");
        assert_eq!(form.submit(&gateway).await, Some(Route::Login));
        assert_eq!(gateway.signups()[0].password, " secret ");
    }

    #[tokio::test]
    async fn test_signup_rejects_unassignable_role() {
        let gateway = FakeGateway::empty();
        let mut form = filled_signup("secret", "secret");
        form.fields.role = "guest".into();

        assert_eq!(form.submit(&gateway).await, None);
        assert!(form.error().unwrap().contains("role"));
        assert_eq!(gateway.calls("sign_up"), 0);
    }

    #[tokio::test]
    async fn test_gateway_trait_object_is_usable() {
        let gateway: Arc<dyn Gateway> = three_artists();
        assert_eq!(gateway.list_artists().await.unwrap().len(), 3);
    }
}

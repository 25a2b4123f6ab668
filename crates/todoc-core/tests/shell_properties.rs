//! Behavioural tests for the app shell contract.
//!
//! These exercise the shell the way the UI drives it: every collaborator
//! callback becomes a `ShellAction`, and what the user sees is `layout()`.

use todoc_core::{
    Layout, Presentation, ProfileId, RootClassList, Screen, ShellAction, ShellState, Tab,
    ToastQueue,
};

/// Drive the shell through a list of actions against an in-memory root.
fn run(actions: &[ShellAction]) -> (ShellState, RootClassList) {
    let mut shell = ShellState::new();
    let mut root = RootClassList::new();
    for action in actions {
        shell
            .apply(action.clone(), &mut root)
            .expect("in-memory presentation never fails");
    }
    (shell, root)
}

// ============================================================================
// Session gating
// ============================================================================

#[test]
fn login_layout_iff_last_session_call_was_logout_or_none() {
    // Every login/logout sequence up to length 4
    for len in 0..=4u32 {
        for bits in 0..(1u32 << len) {
            let actions: Vec<ShellAction> = (0..len)
                .map(|i| {
                    if bits & (1 << i) != 0 {
                        ShellAction::Login
                    } else {
                        ShellAction::Logout
                    }
                })
                .collect();

            let (shell, _) = run(&actions);
            let expect_login = !matches!(actions.last(), Some(ShellAction::Login));
            assert_eq!(
                shell.layout().is_login(),
                expect_login,
                "sequence {:?}",
                actions
            );
        }
    }
}

#[test]
fn logout_always_resets_tab_to_home() {
    for tab in Tab::ALL {
        let (mut shell, mut root) = run(&[ShellAction::Login, ShellAction::SelectTab(tab)]);
        shell.apply(ShellAction::Logout, &mut root).unwrap();
        assert_eq!(shell.active_tab(), Tab::Home, "from {tab}");
    }
}

// ============================================================================
// Tabs and dispatch
// ============================================================================

#[test]
fn set_active_tab_reads_back() {
    let mut shell = ShellState::new();
    for tab in Tab::ALL {
        shell.set_active_tab(tab);
        assert_eq!(shell.active_tab(), tab);
    }
}

#[test]
fn unknown_tab_input_dispatches_home() {
    let shell = ShellState::new();
    for raw in [
        "", "settings", "HOME2", "records", "🍼", "chat ", "Chat", " RECORD", "Community",
    ] {
        assert_eq!(shell.dispatch_screen_str(raw), Screen::Home, "input {raw:?}");
    }
}

#[test]
fn known_tab_input_dispatches_its_screen() {
    let mut shell = ShellState::new();
    assert_eq!(shell.dispatch_screen_str("chat"), Screen::Chat);
    assert_eq!(shell.dispatch_screen_str("community"), Screen::Community);

    shell.set_active_tab_str("Chat");
    assert_eq!(shell.active_tab(), Tab::Home);
}

// ============================================================================
// Display mode
// ============================================================================

#[test]
fn dark_mode_set_twice_leaves_one_class() {
    let (_, root) = run(&[ShellAction::SetDarkMode(true), ShellAction::SetDarkMode(true)]);
    assert_eq!(root.occurrences("dark"), 1);
}

#[test]
fn dark_mode_toggle_adds_and_removes_class() {
    let mut shell = ShellState::new();
    let mut root = RootClassList::new();

    shell.set_display_mode(true, &mut root).unwrap();
    assert!(root.contains("dark"));

    shell.set_display_mode(false, &mut root).unwrap();
    assert!(!root.contains("dark"));
    assert_eq!(root.classes().count(), 0);
}

#[test]
fn dark_mode_class_set_independently_of_session() {
    // The toggle is reachable from the header only, but the root class follows
    // the flag regardless of the session.
    let mut root = RootClassList::new();
    root.set_root_class("app", true).unwrap();

    let mut shell = ShellState::new();
    shell.set_display_mode(true, &mut root).unwrap();
    assert_eq!(root.classes().collect::<Vec<_>>(), vec!["app", "dark"]);
}

// ============================================================================
// Profile
// ============================================================================

#[test]
fn selected_profile_is_a_pure_store() {
    let mut shell = ShellState::new();
    for id in ["2", "", "kid-42", "1"] {
        shell.set_selected_profile(id);
        assert_eq!(shell.selected_profile(), &ProfileId::from(id));
    }
}

// ============================================================================
// Toasts
// ============================================================================

#[test]
fn login_toast_expires_after_layout_switch() {
    // The queue outlives the login layout; only its clock decides expiry.
    let mut toasts = ToastQueue::with_settings(3, 1_000);
    let (mut shell, mut root) = run(&[]);
    assert!(shell.layout().is_login());

    toasts.error("Enter your password.");
    shell.apply(ShellAction::Login, &mut root).unwrap();
    assert!(!shell.layout().is_login());
    assert_eq!(toasts.len(), 1);

    for _ in 0..4 {
        toasts.advance(250);
    }
    assert!(toasts.is_empty());
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn scenario_login_lands_on_home() {
    let (shell, _) = run(&[ShellAction::Login]);
    match shell.layout() {
        Layout::Authenticated {
            screen, navigation, ..
        } => {
            assert_eq!(screen, Screen::Home);
            assert_eq!(navigation.active_tab, Tab::Home);
        }
        Layout::Login => panic!("expected authenticated layout"),
    }
}

#[test]
fn scenario_home_add_record_mounts_record() {
    let (mut shell, mut root) = run(&[ShellAction::Login]);
    assert_eq!(shell.active_tab(), Tab::Home);

    // Home's on_add_record_requested
    shell.apply(ShellAction::OpenRecord, &mut root).unwrap();

    assert_eq!(shell.active_tab(), Tab::Record);
    assert_eq!(
        shell.layout().screen(),
        Some(Screen::Record { dark_mode: false })
    );
}

#[test]
fn scenario_relogin_resets_tab_keeps_display_mode() {
    let (mut shell, mut root) = run(&[
        ShellAction::Login,
        ShellAction::SelectTab(Tab::Community),
    ]);
    assert!(!shell.is_dark_mode());

    shell.apply(ShellAction::Logout, &mut root).unwrap();
    shell.apply(ShellAction::Login, &mut root).unwrap();

    assert_eq!(shell.active_tab(), Tab::Home);
    assert!(!shell.is_dark_mode());
    assert!(!root.contains("dark"));
}

#[test]
fn scenario_dark_mode_survives_logout() {
    let (mut shell, mut root) = run(&[ShellAction::Login, ShellAction::SetDarkMode(true)]);
    shell.apply(ShellAction::Logout, &mut root).unwrap();
    shell.apply(ShellAction::Login, &mut root).unwrap();

    assert!(shell.is_dark_mode());
    assert!(root.contains("dark"));
    match shell.layout() {
        Layout::Authenticated { header, .. } => assert!(header.dark_mode),
        Layout::Login => panic!("expected authenticated layout"),
    }
}

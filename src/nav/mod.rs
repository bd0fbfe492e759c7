//! Responsive navigation shell.
//!
//! The shell shows sign-in controls or a user menu depending on three
//! external signals: the session, the configured login providers and whether
//! the viewport is narrow. Its only state is the [`DisclosureState`] of the
//! narrow-viewport menu.
//!
//! Sign-in, sign-out and navigation are not performed here. UI events go in
//! through [`NavShell::handle`] and come out as [`NavIntent`]s for the
//! external auth collaborator and router. The shell does not track what
//! happens to them; a completed sign-in shows up later as a new session in
//! [`NavInputs`].
//!
//! The menu only closes on explicit interaction: toggling it, or any
//! navigation or sign-out the bar itself emits, on either viewport. Outside
//! clicks, route changes, viewport changes and re-renders leave it as it is.

mod view;

pub use view::{
    ActionLink, AvatarControl, BrandLink, DisclosurePanel, ImageRef, NavBody, NavFrame,
    ProviderControl, TextKey, AVATAR_SIZE, ICON_PROVIDERS, LOADING_PLACEHOLDERS, LOGO_SIZE,
    LOGO_SRC, PROVIDER_GLYPH_SIZE,
};

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ============================================================================
// External inputs
// ============================================================================

/// The authenticated user, as far as the bar needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavSessionView {
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// A configured login provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthProviderDescriptor {
    pub id: String,
    pub name: String,
}

impl AuthProviderDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Everything the shell reads from its environment on each call.
///
/// `providers: None` means the list is still loading, which is different
/// from `Some(vec![])` (no providers configured).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavInputs {
    pub session: Option<NavSessionView>,
    pub providers: Option<Vec<AuthProviderDescriptor>>,
    pub is_narrow: bool,
    pub current_path: String,
}

impl NavInputs {
    pub fn mode(&self) -> NavMode {
        NavMode::select(
            self.providers.as_deref(),
            self.session.as_ref(),
            self.is_narrow,
        )
    }
}

// ============================================================================
// Modes and routes
// ============================================================================

/// Which of the mutually exclusive bar layouts is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavMode {
    ProvidersLoading,
    Unauthenticated,
    AuthenticatedWide,
    AuthenticatedNarrow,
}

impl NavMode {
    /// Selects the layout. A session wins over the provider list.
    pub fn select(
        providers: Option<&[AuthProviderDescriptor]>,
        session: Option<&NavSessionView>,
        is_narrow: bool,
    ) -> Self {
        match (session, providers) {
            (Some(_), _) if is_narrow => Self::AuthenticatedNarrow,
            (Some(_), _) => Self::AuthenticatedWide,
            (None, None) => Self::ProvidersLoading,
            (None, Some(_)) => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::AuthenticatedWide | Self::AuthenticatedNarrow)
    }
}

/// Pages the bar links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    CreatePost,
    Profile,
}

impl Route {
    pub fn href(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::CreatePost => "/create-prompt",
            Self::Profile => "/profile",
        }
    }
}

// ============================================================================
// DisclosureState
// ============================================================================

/// Open/closed state of the narrow-viewport menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisclosureState {
    Open,
    #[default]
    Closed,
}

impl DisclosureState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

// ============================================================================
// Events and intents
// ============================================================================

/// User interactions the shell reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    /// The avatar was clicked or tapped.
    AvatarActivated,
    /// A sign-in control was activated.
    ProviderActivated { provider_id: String },
    /// An inline or menu link was selected.
    LinkSelected(Route),
    /// The sign-out button was activated.
    SignOutRequested,
    /// The logo link was activated.
    BrandActivated,
}

/// Work handed to external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum NavIntent {
    SignIn { provider_id: String },
    SignOut { callback_url: Option<String> },
    Navigate { href: String },
}

impl NavIntent {
    fn navigate(route: Route) -> Self {
        Self::Navigate {
            href: route.href().to_string(),
        }
    }
}

/// Receives intents. Delivery is fire-and-forget.
pub trait IntentSink {
    fn dispatch(&mut self, intent: NavIntent);
}

impl IntentSink for Vec<NavIntent> {
    fn dispatch(&mut self, intent: NavIntent) {
        self.push(intent);
    }
}

impl IntentSink for Sender<NavIntent> {
    fn dispatch(&mut self, intent: NavIntent) {
        if let Err(err) = self.send(intent) {
            warn!(intent = ?err.0, "intent receiver is gone, dropping intent");
        }
    }
}

// ============================================================================
// NavShell
// ============================================================================

/// One navigation bar instance and its menu state.
///
/// # Example
///
/// ```
/// use duotone_ui::nav::{
///     DisclosureState, NavEvent, NavInputs, NavSessionView, NavShell,
/// };
///
/// let inputs = NavInputs {
///     session: Some(NavSessionView { display_name: "Ada".into(), avatar_url: None }),
///     providers: Some(vec![]),
///     is_narrow: true,
///     current_path: "/".into(),
/// };
///
/// let mut shell = NavShell::new(DisclosureState::Closed);
/// assert!(shell.handle(NavEvent::AvatarActivated, &inputs).is_empty());
/// assert!(shell.disclosure().is_open());
/// ```
#[derive(Debug, Clone, Default)]
pub struct NavShell {
    disclosure: DisclosureState,
}

impl NavShell {
    pub fn new(disclosure: DisclosureState) -> Self {
        Self { disclosure }
    }

    pub fn disclosure(&self) -> DisclosureState {
        self.disclosure
    }

    /// Builds the bar for the current inputs. Never changes state.
    pub fn view(&self, inputs: &NavInputs) -> NavFrame {
        view::build(inputs, self.disclosure)
    }

    /// Applies an event and returns the intents it produced.
    ///
    /// Events that do not match the current layout (a stale click on a
    /// control that is no longer shown) are ignored.
    pub fn handle(&mut self, event: NavEvent, inputs: &NavInputs) -> Vec<NavIntent> {
        let mode = inputs.mode();
        let mut intents = Vec::new();

        match (event, mode) {
            (NavEvent::AvatarActivated, NavMode::AuthenticatedNarrow) => {
                self.disclosure = self.disclosure.toggled();
                debug!(state = ?self.disclosure, "toggled nav disclosure");
            }
            (NavEvent::AvatarActivated, NavMode::AuthenticatedWide) => {
                self.close();
                intents.push(NavIntent::navigate(Route::Profile));
            }
            (NavEvent::ProviderActivated { provider_id }, NavMode::Unauthenticated) => {
                let known = inputs
                    .providers
                    .iter()
                    .flatten()
                    .any(|provider| provider.id == provider_id);
                if known {
                    intents.push(NavIntent::SignIn { provider_id });
                } else {
                    debug!(%provider_id, "ignoring sign-in for unlisted provider");
                }
            }
            (NavEvent::LinkSelected(route), NavMode::AuthenticatedWide) => {
                self.close();
                intents.push(NavIntent::navigate(route));
            }
            (NavEvent::LinkSelected(route), NavMode::AuthenticatedNarrow)
                if self.disclosure.is_open() =>
            {
                self.close();
                intents.push(NavIntent::navigate(route));
            }
            (NavEvent::SignOutRequested, NavMode::AuthenticatedWide) => {
                self.close();
                intents.push(NavIntent::SignOut {
                    callback_url: Some(Route::Home.href().to_string()),
                });
            }
            (NavEvent::SignOutRequested, NavMode::AuthenticatedNarrow)
                if self.disclosure.is_open() =>
            {
                self.close();
                intents.push(NavIntent::SignOut { callback_url: None });
            }
            (NavEvent::BrandActivated, _) => {
                self.close();
                intents.push(NavIntent::Navigate {
                    href: view::brand_href(&inputs.current_path),
                });
            }
            (event, mode) => {
                debug!(?event, ?mode, "ignoring nav event");
            }
        }

        intents
    }

    /// [`handle`](Self::handle), then forwards each intent to `sink`.
    pub fn handle_into(&mut self, event: NavEvent, inputs: &NavInputs, sink: &mut impl IntentSink) {
        for intent in self.handle(event, inputs) {
            sink.dispatch(intent);
        }
    }

    fn close(&mut self) {
        if self.disclosure.is_open() {
            debug!("closing nav disclosure");
        }
        self.disclosure = DisclosureState::Closed;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    fn session() -> NavSessionView {
        NavSessionView {
            display_name: "Ada".into(),
            avatar_url: Some("https://example.com/ada.png".into()),
        }
    }

    fn providers() -> Vec<AuthProviderDescriptor> {
        vec![
            AuthProviderDescriptor::new("github", "GitHub"),
            AuthProviderDescriptor::new("email", "Email"),
            AuthProviderDescriptor::new("google", "Google"),
        ]
    }

    fn signed_in(is_narrow: bool) -> NavInputs {
        NavInputs {
            session: Some(session()),
            providers: Some(providers()),
            is_narrow,
            current_path: "/feed".into(),
        }
    }

    fn signed_out(providers: Option<Vec<AuthProviderDescriptor>>) -> NavInputs {
        NavInputs {
            session: None,
            providers,
            is_narrow: false,
            current_path: "/".into(),
        }
    }

    // ------------------------------------------------------------------
    // Mode selection
    // ------------------------------------------------------------------

    #[test]
    fn mode_selection() {
        assert_eq!(NavMode::select(None, None, false), NavMode::ProvidersLoading);
        assert_eq!(NavMode::select(None, None, true), NavMode::ProvidersLoading);
        assert_eq!(NavMode::select(Some(&[]), None, false), NavMode::Unauthenticated);

        let user = session();
        assert_eq!(NavMode::select(Some(&[]), Some(&user), false), NavMode::AuthenticatedWide);
        assert_eq!(NavMode::select(Some(&[]), Some(&user), true), NavMode::AuthenticatedNarrow);
        assert_eq!(NavMode::select(None, Some(&user), true), NavMode::AuthenticatedNarrow);
    }

    #[test]
    fn loading_view_has_placeholders_only() {
        let shell = NavShell::default();
        let frame = shell.view(&signed_out(None));
        assert_eq!(
            frame.body,
            NavBody::ProvidersLoading {
                placeholders: LOADING_PLACEHOLDERS
            }
        );
    }

    #[test]
    fn empty_provider_list_renders_no_controls() {
        let shell = NavShell::default();
        let frame = shell.view(&signed_out(Some(vec![])));
        assert_eq!(frame.body, NavBody::Unauthenticated { controls: vec![] });
    }

    #[test]
    fn icon_eligible_providers_get_icon_controls() {
        let shell = NavShell::default();
        let NavBody::Unauthenticated { controls } = shell.view(&signed_out(Some(providers()))).body
        else {
            panic!("expected unauthenticated layout");
        };

        assert_eq!(controls.len(), 3);
        let ids: Vec<_> = controls.iter().map(ProviderControl::provider_id).collect();
        assert_eq!(ids, ["github", "email", "google"]);

        match &controls[0] {
            ProviderControl::Icon {
                aria_label,
                glyph,
                glyph_size,
                key,
                ..
            } => {
                assert_eq!(key, "GitHub");
                assert_eq!(glyph, "github");
                assert_eq!(*glyph_size, PROVIDER_GLYPH_SIZE);
                assert_eq!(aria_label.key, "Nav.signInWith");
                assert_eq!(aria_label.args, vec![("provider", "GitHub".to_string())]);
            }
            other => panic!("expected icon control, got {other:?}"),
        }
        assert!(matches!(
            &controls[1],
            ProviderControl::Labeled { label, .. } if label.key == "Nav.signIn"
        ));
        assert!(matches!(&controls[2], ProviderControl::Icon { .. }));
    }

    #[test]
    fn wide_view_has_inline_actions_and_no_panel() {
        let shell = NavShell::default();
        let frame = shell.view(&signed_in(false));

        let NavBody::AuthenticatedWide {
            create,
            sign_out,
            avatar,
        } = frame.body
        else {
            panic!("expected wide layout");
        };
        assert_eq!(create.route, Route::CreatePost);
        assert_eq!(sign_out.key, "Nav.signOut");
        assert_eq!(avatar.link, Some(Route::Profile));
        assert!(!avatar.toggles_panel);
        assert_eq!(avatar.image.src, "https://example.com/ada.png");
        assert_eq!(avatar.image.size, AVATAR_SIZE);
    }

    #[test]
    fn narrow_view_collapses_into_avatar() {
        let shell = NavShell::new(DisclosureState::Closed);
        let NavBody::AuthenticatedNarrow { avatar, panel } = shell.view(&signed_in(true)).body else {
            panic!("expected narrow layout");
        };
        assert!(avatar.toggles_panel);
        assert!(!avatar.pressed);
        assert_eq!(avatar.link, None);
        assert!(panel.is_none());

        let shell = NavShell::new(DisclosureState::Open);
        let NavBody::AuthenticatedNarrow { avatar, panel } = shell.view(&signed_in(true)).body else {
            panic!("expected narrow layout");
        };
        assert!(avatar.pressed);
        let panel = panel.expect("open panel");
        let routes: Vec<_> = panel.links.iter().map(|l| l.route).collect();
        assert_eq!(routes, [Route::Profile, Route::CreatePost]);
        assert_eq!(panel.links[0].label.key, "Nav.myProfile");
    }

    #[test]
    fn avatar_falls_back_to_logo() {
        let mut inputs = signed_in(false);
        inputs.session = Some(NavSessionView {
            display_name: "Grace".into(),
            avatar_url: None,
        });
        let NavBody::AuthenticatedWide { avatar, .. } = NavShell::default().view(&inputs).body else {
            panic!("expected wide layout");
        };
        assert_eq!(avatar.image.src, LOGO_SRC);
        assert_eq!(avatar.image.alt.key, "Nav.altUserProfile");
    }

    #[test]
    fn brand_link_wipes_on_home() {
        let shell = NavShell::default();
        assert_eq!(shell.view(&signed_out(None)).brand.href, "/?wipe=true");
        assert_eq!(shell.view(&signed_in(false)).brand.href, "/");

        let mut shell = NavShell::default();
        let intents = shell.handle(NavEvent::BrandActivated, &signed_out(None));
        assert_eq!(
            intents,
            [NavIntent::Navigate {
                href: "/?wipe=true".into()
            }]
        );
    }

    // ------------------------------------------------------------------
    // Disclosure
    // ------------------------------------------------------------------

    #[test]
    fn avatar_toggles_disclosure_on_narrow() {
        let inputs = signed_in(true);
        let mut shell = NavShell::new(DisclosureState::Closed);

        assert!(shell.handle(NavEvent::AvatarActivated, &inputs).is_empty());
        assert_eq!(shell.disclosure(), DisclosureState::Open);

        assert!(shell.handle(NavEvent::AvatarActivated, &inputs).is_empty());
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn avatar_navigates_on_wide_without_toggling() {
        let mut shell = NavShell::new(DisclosureState::Closed);
        let intents = shell.handle(NavEvent::AvatarActivated, &signed_in(false));

        assert_eq!(
            intents,
            [NavIntent::Navigate {
                href: "/profile".into()
            }]
        );
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn selecting_panel_link_closes_and_navigates() {
        let inputs = signed_in(true);
        let mut shell = NavShell::new(DisclosureState::Open);

        let intents = shell.handle(NavEvent::LinkSelected(Route::CreatePost), &inputs);
        assert_eq!(
            intents,
            [NavIntent::Navigate {
                href: "/create-prompt".into()
            }]
        );
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn panel_sign_out_closes_without_callback() {
        let inputs = signed_in(true);
        let mut shell = NavShell::new(DisclosureState::Open);

        let intents = shell.handle(NavEvent::SignOutRequested, &inputs);
        assert_eq!(intents, [NavIntent::SignOut { callback_url: None }]);
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn wide_sign_out_redirects_home() {
        let mut shell = NavShell::default();
        let intents = shell.handle(NavEvent::SignOutRequested, &signed_in(false));
        assert_eq!(
            intents,
            [NavIntent::SignOut {
                callback_url: Some("/".into())
            }]
        );
    }

    #[test]
    fn wide_navigation_closes_panel_like_sign_out() {
        let wide = signed_in(false);

        let mut shell = NavShell::new(DisclosureState::Open);
        let intents = shell.handle(NavEvent::LinkSelected(Route::CreatePost), &wide);
        assert_eq!(
            intents,
            [NavIntent::Navigate {
                href: "/create-prompt".into()
            }]
        );
        assert_eq!(shell.disclosure(), DisclosureState::Closed);

        let mut shell = NavShell::new(DisclosureState::Open);
        shell.handle(NavEvent::AvatarActivated, &wide);
        assert_eq!(shell.disclosure(), DisclosureState::Closed);

        let mut shell = NavShell::new(DisclosureState::Open);
        shell.handle(NavEvent::SignOutRequested, &wide);
        assert_eq!(shell.disclosure(), DisclosureState::Closed);

        let mut shell = NavShell::new(DisclosureState::Open);
        shell.handle(NavEvent::BrandActivated, &wide);
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn closed_panel_ignores_panel_events() {
        let inputs = signed_in(true);
        let mut shell = NavShell::new(DisclosureState::Closed);

        assert!(shell.handle(NavEvent::LinkSelected(Route::Profile), &inputs).is_empty());
        assert!(shell.handle(NavEvent::SignOutRequested, &inputs).is_empty());
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn rerender_and_unrelated_events_keep_disclosure() {
        let narrow = signed_in(true);
        let mut shell = NavShell::new(DisclosureState::Open);

        for _ in 0..3 {
            shell.view(&narrow);
        }
        assert_eq!(shell.disclosure(), DisclosureState::Open);

        // Provider clicks are stale once signed in
        let intents = shell.handle(
            NavEvent::ProviderActivated {
                provider_id: "github".into(),
            },
            &narrow,
        );
        assert!(intents.is_empty());
        assert_eq!(shell.disclosure(), DisclosureState::Open);

        // Route change observed through inputs only
        let mut moved = narrow.clone();
        moved.current_path = "/profile".into();
        shell.view(&moved);
        assert_eq!(shell.disclosure(), DisclosureState::Open);
    }

    #[test]
    fn disclosure_survives_viewport_round_trip() {
        let mut shell = NavShell::new(DisclosureState::Closed);
        shell.handle(NavEvent::AvatarActivated, &signed_in(true));
        assert!(shell.disclosure().is_open());

        let wide = shell.view(&signed_in(false));
        assert_eq!(wide.body.mode(), NavMode::AuthenticatedWide);
        assert!(shell.disclosure().is_open());

        let NavBody::AuthenticatedNarrow { panel, .. } = shell.view(&signed_in(true)).body else {
            panic!("expected narrow layout");
        };
        assert!(panel.is_some());
    }

    // ------------------------------------------------------------------
    // Sign-in
    // ------------------------------------------------------------------

    #[test]
    fn provider_activation_emits_sign_in() {
        let mut shell = NavShell::default();
        let inputs = signed_out(Some(providers()));

        let intents = shell.handle(
            NavEvent::ProviderActivated {
                provider_id: "email".into(),
            },
            &inputs,
        );
        assert_eq!(
            intents,
            [NavIntent::SignIn {
                provider_id: "email".into()
            }]
        );

        let intents = shell.handle(
            NavEvent::ProviderActivated {
                provider_id: "twitter".into(),
            },
            &inputs,
        );
        assert!(intents.is_empty());
    }

    #[test]
    fn loading_ignores_provider_activation() {
        let mut shell = NavShell::default();
        let intents = shell.handle(
            NavEvent::ProviderActivated {
                provider_id: "github".into(),
            },
            &signed_out(None),
        );
        assert!(intents.is_empty());
    }

    #[test]
    fn intents_flow_through_channel_sink() {
        let (mut tx, rx) = mpsc::channel::<NavIntent>();
        let mut shell = NavShell::default();

        shell.handle_into(
            NavEvent::ProviderActivated {
                provider_id: "google".into(),
            },
            &signed_out(Some(providers())),
            &mut tx,
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            NavIntent::SignIn {
                provider_id: "google".into()
            }
        );

        // A closed receiver is not an error for the shell
        drop(rx);
        shell.handle_into(NavEvent::SignOutRequested, &signed_in(false), &mut tx);
    }

    #[test]
    fn intents_collect_into_vec_sink() {
        let mut sink: Vec<NavIntent> = Vec::new();
        let mut shell = NavShell::new(DisclosureState::Closed);

        shell.handle_into(NavEvent::AvatarActivated, &signed_in(false), &mut sink);
        shell.handle_into(NavEvent::AvatarActivated, &signed_in(true), &mut sink);
        shell.handle_into(NavEvent::LinkSelected(Route::CreatePost), &signed_in(true), &mut sink);

        assert_eq!(
            sink,
            [
                NavIntent::Navigate {
                    href: "/profile".into()
                },
                NavIntent::Navigate {
                    href: "/create-prompt".into()
                },
            ]
        );
        assert_eq!(shell.disclosure(), DisclosureState::Closed);
    }

    #[test]
    fn intents_serialize_tagged() {
        let json = serde_json::to_string(&NavIntent::SignIn {
            provider_id: "github".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"intent":"sign-in","provider_id":"github"}"#);
    }
}

//! View model produced by the navigation shell.
//!
//! These types describe what to draw, not how. A front-end maps each variant
//! onto its own markup and resolves every [`TextKey`] through its localized
//! text provider.

use serde::Serialize;

use super::{AuthProviderDescriptor, DisclosureState, NavInputs, NavMode, NavSessionView, Route};

/// Providers that get an icon-only sign-in control.
pub const ICON_PROVIDERS: &[&str] = &["google", "github"];

/// Brand logo, also the avatar fallback.
pub const LOGO_SRC: &str = "/icons/svg/logo.favicon.svg";

pub const LOGO_SIZE: u32 = 40;
pub const AVATAR_SIZE: u32 = 37;
pub const PROVIDER_GLYPH_SIZE: u32 = 22;

/// Skeleton controls shown while providers load.
pub const LOADING_PLACEHOLDERS: usize = 2;

// ============================================================================
// Text
// ============================================================================

/// A localized string reference: a key plus interpolation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextKey {
    pub key: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<(&'static str, String)>,
}

impl TextKey {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.args.push((name, value.into()));
        self
    }
}

// ============================================================================
// View nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: TextKey,
    pub size: u32,
}

/// The logo link at the start of the bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandLink {
    pub href: String,
    pub logo: ImageRef,
    pub text: Vec<TextKey>,
}

/// A navigation link with a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionLink {
    pub route: Route,
    pub label: TextKey,
}

/// One sign-in control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProviderControl {
    /// Icon-only button; the glyph is named after the provider id.
    Icon {
        key: String,
        provider_id: String,
        aria_label: TextKey,
        glyph: String,
        glyph_size: u32,
    },
    /// Generic button with a text label.
    Labeled {
        key: String,
        provider_id: String,
        label: TextKey,
    },
}

impl ProviderControl {
    fn for_provider(provider: &AuthProviderDescriptor) -> Self {
        if ICON_PROVIDERS.contains(&provider.id.as_str()) {
            Self::Icon {
                key: provider.name.clone(),
                provider_id: provider.id.clone(),
                aria_label: TextKey::new("Nav.signInWith").arg("provider", &provider.name),
                glyph: provider.id.clone(),
                glyph_size: PROVIDER_GLYPH_SIZE,
            }
        } else {
            Self::Labeled {
                key: provider.name.clone(),
                provider_id: provider.id.clone(),
                label: TextKey::new("Nav.signIn"),
            }
        }
    }

    pub fn provider_id(&self) -> &str {
        match self {
            Self::Icon { provider_id, .. } | Self::Labeled { provider_id, .. } => provider_id,
        }
    }
}

/// The user's avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvatarControl {
    pub image: ImageRef,

    /// Set on wide viewports, where the avatar is a profile link.
    pub link: Option<Route>,

    /// Set on narrow viewports, where the avatar opens the panel.
    pub toggles_panel: bool,

    /// The panel is currently open.
    pub pressed: bool,
}

/// The narrow-viewport menu behind the avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisclosurePanel {
    pub links: Vec<ActionLink>,
    pub sign_out: TextKey,
}

/// The part of the bar that depends on session, providers and viewport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum NavBody {
    ProvidersLoading {
        placeholders: usize,
    },
    Unauthenticated {
        controls: Vec<ProviderControl>,
    },
    AuthenticatedWide {
        create: ActionLink,
        sign_out: TextKey,
        avatar: AvatarControl,
    },
    AuthenticatedNarrow {
        avatar: AvatarControl,
        panel: Option<DisclosurePanel>,
    },
}

impl NavBody {
    pub fn mode(&self) -> NavMode {
        match self {
            Self::ProvidersLoading { .. } => NavMode::ProvidersLoading,
            Self::Unauthenticated { .. } => NavMode::Unauthenticated,
            Self::AuthenticatedWide { .. } => NavMode::AuthenticatedWide,
            Self::AuthenticatedNarrow { .. } => NavMode::AuthenticatedNarrow,
        }
    }
}

/// A full navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavFrame {
    pub brand: BrandLink,
    pub body: NavBody,
}

// ============================================================================
// Builders
// ============================================================================

pub(super) fn build(inputs: &NavInputs, disclosure: DisclosureState) -> NavFrame {
    NavFrame {
        brand: brand_link(&inputs.current_path),
        body: body(inputs, disclosure),
    }
}

/// Re-activating the brand on the home page asks it to reset.
pub(super) fn brand_href(current_path: &str) -> String {
    let home = Route::Home.href();
    if current_path == home {
        format!("{home}?wipe=true")
    } else {
        home.to_string()
    }
}

fn brand_link(current_path: &str) -> BrandLink {
    BrandLink {
        href: brand_href(current_path),
        logo: ImageRef {
            src: LOGO_SRC.to_string(),
            alt: TextKey::new("Nav.altLogo"),
            size: LOGO_SIZE,
        },
        text: vec![
            TextKey::new("Nav.logoSubText.str0"),
            TextKey::new("Nav.logoSubText.str1"),
            TextKey::new("Nav.logoSubText.str2"),
            TextKey::new("Nav.logoSubText.str3"),
        ],
    }
}

fn body(inputs: &NavInputs, disclosure: DisclosureState) -> NavBody {
    let mode = inputs.mode();
    match (mode, inputs.session.as_ref(), inputs.providers.as_deref()) {
        (NavMode::AuthenticatedWide, Some(session), _) => NavBody::AuthenticatedWide {
            create: create_link(),
            sign_out: TextKey::new("Nav.signOut"),
            avatar: AvatarControl {
                image: avatar_image(session),
                link: Some(Route::Profile),
                toggles_panel: false,
                pressed: false,
            },
        },
        (NavMode::AuthenticatedNarrow, Some(session), _) => NavBody::AuthenticatedNarrow {
            avatar: AvatarControl {
                image: avatar_image(session),
                link: None,
                toggles_panel: true,
                pressed: disclosure.is_open(),
            },
            panel: disclosure.is_open().then(|| DisclosurePanel {
                links: vec![
                    ActionLink {
                        route: Route::Profile,
                        label: TextKey::new("Nav.myProfile"),
                    },
                    create_link(),
                ],
                sign_out: TextKey::new("Nav.signOut"),
            }),
        },
        (NavMode::Unauthenticated, _, Some(providers)) => NavBody::Unauthenticated {
            controls: providers.iter().map(ProviderControl::for_provider).collect(),
        },
        _ => NavBody::ProvidersLoading {
            placeholders: LOADING_PLACEHOLDERS,
        },
    }
}

fn create_link() -> ActionLink {
    ActionLink {
        route: Route::CreatePost,
        label: TextKey::new("Nav.createPrompt"),
    }
}

fn avatar_image(session: &NavSessionView) -> ImageRef {
    ImageRef {
        src: session
            .avatar_url
            .clone()
            .unwrap_or_else(|| LOGO_SRC.to_string()),
        alt: TextKey::new("Nav.altUserProfile"),
        size: AVATAR_SIZE,
    }
}

use std::rc::Rc;
use dioxus::prelude::*;
use crate::configs::SiteConfig;
use crate::platform::UriLauncher;
use crate::services::{ ContactFormSubmission, ContactIntentBuilder, ThemePreferenceResolver };
use crate::utils::{ NavigationDrawerState, ThemeMode };

/// State and collaborators owned by the root component and handed down
/// through Dioxus context.
#[derive(Clone)]
pub struct AppContext {
    pub theme: Signal<ThemeMode>,
    pub drawer: Signal<NavigationDrawerState>,
    pub contact: ContactIntentBuilder,
    resolver: ThemePreferenceResolver,
    launcher: Rc<dyn UriLauncher>,
}

impl AppContext {
    /// Must run inside a component scope; the signals belong to it.
    pub fn new(
        config: &SiteConfig,
        resolver: ThemePreferenceResolver,
        launcher: impl UriLauncher + 'static
    ) -> Self {
        let (resolver, mode) = bootstrap(config, resolver);

        Self {
            theme: Signal::new(mode),
            drawer: Signal::new(NavigationDrawerState::default()),
            contact: ContactIntentBuilder::new(config.contact_address.clone()),
            resolver,
            launcher: Rc::new(launcher),
        }
    }

    /// Binds the ports of the host this build runs on.
    pub fn from_environment() -> Self {
        let config = SiteConfig::from_env();

        #[cfg(target_arch = "wasm32")]
        {
            use crate::platform::{
                BrowserColorScheme,
                BrowserLauncher,
                BrowserPreferences,
                DocumentRootScope,
            };
            let resolver = ThemePreferenceResolver::new(
                BrowserPreferences,
                BrowserColorScheme,
                DocumentRootScope
            );
            Self::new(&config, resolver, BrowserLauncher)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::platform::{ FixedColorScheme, LoggingLauncher, MemoryPreferences, NoopScope };
            let resolver = ThemePreferenceResolver::new(
                MemoryPreferences::new(),
                FixedColorScheme::light(),
                NoopScope
            );
            Self::new(&config, resolver, LoggingLauncher)
        }
    }

    pub fn toggle_theme(&self) {
        let mut theme = self.theme;
        let next = self.resolver.toggle(*theme.peek());
        theme.set(next);
    }

    pub fn open_drawer(&self) {
        let mut drawer = self.drawer;
        drawer.write().open();
    }

    pub fn close_drawer(&self) {
        let mut drawer = self.drawer;
        drawer.write().close();
    }

    pub fn select_destination(&self) {
        let mut drawer = self.drawer;
        drawer.write().select_destination();
    }

    pub fn submit_contact(&self, submission: &ContactFormSubmission) -> Option<String> {
        submit_contact(&self.contact, self.launcher.as_ref(), submission)
    }
}

/// Startup step: binds the configured storage key, resolves the initial mode
/// and makes it visible on the document before the first render.
pub fn bootstrap(
    config: &SiteConfig,
    resolver: ThemePreferenceResolver
) -> (ThemePreferenceResolver, ThemeMode) {
    let resolver = resolver.with_storage_key(config.theme_storage_key.clone());
    let mode = resolver.resolve_initial();
    resolver.apply(mode);
    (resolver, mode)
}

/// Form submit: incomplete submissions are dropped, complete ones are turned
/// into a `mailto:` URI and handed to the launcher. Returns the launched URI.
pub fn submit_contact(
    builder: &ContactIntentBuilder,
    launcher: &dyn UriLauncher,
    submission: &ContactFormSubmission
) -> Option<String> {
    if !submission.is_complete() {
        log::debug!("Contact form incomplete, not opening mail client");
        return None;
    }

    let uri = builder.build(submission);
    log::info!("Opening mail client for contact from {}", submission.name);
    launcher.open(&uri);
    Some(uri)
}

/// Hands a URI to the host's default handler (for `mailto:`, the mail client).
pub trait UriLauncher {
    fn open(&self, uri: &str);
}

/// Used where no URI handler is reachable; records the request in the log.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingLauncher;

impl UriLauncher for LoggingLauncher {
    fn open(&self, uri: &str) {
        log::info!("Open requested for {}", uri);
    }
}

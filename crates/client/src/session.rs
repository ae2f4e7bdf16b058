//! One console, one session.

use crate::codes::{Buzzer, LedColor, LedMode, NotifyIcon};
use crate::error::{ErrorKind, Result};
use crate::records::{DirectoryRecord, GameRecord};
use crate::transport::{HttpTransport, Transport};
use std::sync::{Mutex, PoisonError};
use tracing::instrument;
use webmanrc_scrape::{CataloguePage, StatusPage};

const STATUS_PATH: &str = "/cpursx.ps3?/sman.ps3";
const TEMPERATURE_PATH: &str = "/cpursx_ps3";
const CATALOGUE_PATH: &str = "/sman.ps3?";
const NOTIFY_PATH: &str = "/notify.ps3mapi";
const BUZZER_PATH: &str = "/buzzer.ps3mapi";
const LED_PATH: &str = "/led.ps3mapi";
pub(crate) const MOUNT_PREFIX: &str = "/mount.ps3";
pub(crate) const METADATA_PREFIX: &str = "/md5.ps3";

/// A session against one console's web interface.
///
/// Holds the transport and a cached copy of the most recently fetched status
/// fragment. The cache is populated on demand and overwritten by an explicit
/// [`refresh`](Self::refresh); it is never invalidated automatically.
///
/// All I/O is synchronous and blocking. The session is constructed once per
/// target device and has no teardown; records returned by its operations
/// borrow it for their own follow-up fetches.
#[derive(Debug)]
pub struct Session {
    transport: Box<dyn Transport>,
    status_html: Mutex<Option<String>>,
}

impl Session {
    /// Connects to a console at `host:port` over plain HTTP.
    pub fn connect(host: &str, port: u16) -> Self {
        Self::with_transport(HttpTransport::new(host, port))
    }

    /// Builds a session over any [`Transport`].
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self { transport: Box::new(transport), status_html: Mutex::new(None) }
    }

    pub(crate) fn fetch(&self, path_and_query: &str) -> Result<String> {
        self.transport.get(path_and_query)
    }

    /// Base URL of the target, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Re-fetches the live status fragment, replacing the cached copy.
    ///
    /// [`fan_speed`](Self::fan_speed) and [`hdd_space`](Self::hdd_space)
    /// read the cached fragment, so call this first when the readings must
    /// be current.
    #[instrument(skip(self))]
    pub fn refresh(&self) -> Result<()> {
        let html = self.fetch(STATUS_PATH)?;
        *self.status_cache() = Some(html);
        Ok(())
    }

    fn status_cache(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.status_html.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn status_page(&self) -> Result<StatusPage> {
        let mut cached = self.status_cache();
        if cached.is_none() {
            *cached = Some(self.fetch(STATUS_PATH)?);
        }
        Ok(StatusPage::from_html(cached.as_deref().unwrap_or_default()))
    }

    /// CPU and RSX temperatures, in that order.
    ///
    /// This read fails softly: an error response or unparseable markup logs
    /// a warning and yields `Ok(None)`. Only a connection failure
    /// propagates. Uses its own dedicated page, not the cached fragment.
    #[instrument(skip(self))]
    pub fn temperatures(&self) -> Result<Option<(u32, u32)>> {
        let html = match self.fetch(TEMPERATURE_PATH) {
            Ok(html) => html,
            Err(err) if matches!(*err, ErrorKind::Http { .. }) => {
                tracing::warn!(error = ?err, "temperature page unavailable");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        Ok(StatusPage::from_html(&html).temperatures())
    }

    /// Fan speed percentage, from the cached status fragment (fetched first
    /// if absent).
    #[instrument(skip(self))]
    pub fn fan_speed(&self) -> Result<u32> {
        self.status_page()?.fan_speed().map_err(ErrorKind::scrape)
    }

    /// Free space on the primary storage volume in gigabytes, from the
    /// cached status fragment (fetched first if absent).
    #[instrument(skip(self))]
    pub fn hdd_space(&self) -> Result<f64> {
        self.status_page()?.hdd_space().map_err(ErrorKind::scrape)
    }

    /// Fetches a directory listing.
    ///
    /// The fetched markup is handed to the record, so its first listing call
    /// parses without a second request.
    #[instrument(skip(self))]
    pub fn directory(&self, path: &str) -> Result<DirectoryRecord<'_>> {
        let path = if path.starts_with('/') { path.to_string() } else { format!("/{path}") };
        let html = self.fetch(&path)?;
        Ok(DirectoryRecord::with_markup(self, path, html))
    }

    /// Installed titles from the game catalogue, in page order.
    #[instrument(skip(self))]
    pub fn games(&self) -> Result<Vec<GameRecord<'_>>> {
        let html = self.fetch(CATALOGUE_PATH)?;
        Ok(CataloguePage::from_html(&html)
            .games()
            .into_iter()
            .map(|entry| GameRecord::new(self, entry))
            .collect())
    }

    /// Pops a notification on the console, optionally with a sound.
    ///
    /// Fire and forget: success means the request completed, not that the
    /// console displayed anything.
    #[instrument(skip(self))]
    pub fn notify(&self, msg: &str, icon: NotifyIcon, sound: Option<Buzzer>) -> Result<()> {
        let mut query = format!("msg={}&icon={}", urlencoding::encode(msg), icon.code());
        if let Some(code) = sound.and_then(Buzzer::code) {
            query.push_str(&format!("&snd={code}"));
        }
        self.fetch(&format!("{NOTIFY_PATH}?{query}"))?;
        Ok(())
    }

    /// Sounds the console buzzer.
    ///
    /// [`Buzzer::NoSound`] is a no-op: no request is made at all.
    #[instrument(skip(self))]
    pub fn buzz(&self, sound: Buzzer) -> Result<()> {
        let Some(code) = sound.code() else {
            return Ok(());
        };
        self.fetch(&format!("{BUZZER_PATH}?snd={code}"))?;
        Ok(())
    }

    /// Drives the console's power LED.
    #[instrument(skip(self))]
    pub fn set_led(&self, color: LedColor, mode: LedMode) -> Result<()> {
        self.fetch(&format!("{LED_PATH}?color={}&mode={}", color.code(), mode.code()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockTransport;
    use rstest::rstest;
    use std::sync::Arc;

    const STATUS_FRAGMENT: &str = concat!(
        "<html><body>",
        "<a href='/cpursx.ps3?mode'>Fan: 37%</a>",
        "<a href='/dev_hdd0'>HDD: 128.5GB free</a>",
        "</body></html>",
    );

    fn session_with(
        routes: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> (Session, Arc<MockTransport>) {
        let transport = Arc::new(MockTransport::with_routes(routes));
        (Session::with_transport(Arc::clone(&transport)), transport)
    }

    #[test]
    fn status_fragment_is_fetched_once_and_shared() {
        let (session, transport) = session_with([(STATUS_PATH, STATUS_FRAGMENT)]);
        assert_eq!(session.fan_speed().unwrap(), 37);
        assert_eq!(session.hdd_space().unwrap(), 128.5);
        assert_eq!(transport.hits(STATUS_PATH), 1);
    }

    #[test]
    fn refresh_replaces_the_cached_fragment() {
        let (session, transport) = session_with([(STATUS_PATH, STATUS_FRAGMENT)]);
        session.refresh().unwrap();
        session.refresh().unwrap();
        assert_eq!(session.fan_speed().unwrap(), 37);
        assert_eq!(transport.hits(STATUS_PATH), 2);
    }

    #[test]
    fn temperatures_happy_path() {
        let (session, _) = session_with([(
            TEMPERATURE_PATH,
            "<html><body><a href='/cpursx.ps3'>CPU:45 RSX:52</a></body></html>",
        )]);
        assert_eq!(session.temperatures().unwrap(), Some((45, 52)));
    }

    #[test]
    fn temperatures_degrade_on_error_response() {
        // No route, so the mock answers 404.
        let (session, _) = session_with([]);
        assert_eq!(session.temperatures().unwrap(), None);
    }

    #[test]
    fn temperatures_degrade_on_unparseable_markup() {
        let (session, _) = session_with([(TEMPERATURE_PATH, "<html><body>rebooting</body></html>")]);
        assert_eq!(session.temperatures().unwrap(), None);
    }

    #[test]
    fn no_sound_buzz_issues_zero_requests() {
        let (session, transport) = session_with([]);
        session.buzz(Buzzer::NoSound).unwrap();
        assert!(transport.requests().is_empty());
    }

    #[rstest]
    #[case(Buzzer::Cancel, "/buzzer.ps3mapi?snd=0")]
    #[case(Buzzer::Simple, "/buzzer.ps3mapi?snd=1")]
    #[case(Buzzer::Double, "/buzzer.ps3mapi?snd=2")]
    #[case(Buzzer::Triple, "/buzzer.ps3mapi?snd=3")]
    #[case(Buzzer::Trophy, "/buzzer.ps3mapi?snd=5")]
    #[case(Buzzer::Decide, "/buzzer.ps3mapi?snd=6")]
    #[case(Buzzer::Option, "/buzzer.ps3mapi?snd=7")]
    #[case(Buzzer::SystemOk, "/buzzer.ps3mapi?snd=8")]
    #[case(Buzzer::SystemNg, "/buzzer.ps3mapi?snd=9")]
    fn every_other_buzz_issues_exactly_one_request(#[case] sound: Buzzer, #[case] expected: &str) {
        let (session, transport) = session_with([]);
        // The mock answers 404 for unknown routes; the request itself is
        // still recorded, which is all this test cares about.
        let _ = session.buzz(sound);
        assert_eq!(transport.requests(), [expected]);
    }

    #[test]
    fn notify_query_carries_message_and_icon() {
        let (session, transport) =
            session_with([("/notify.ps3mapi?msg=hello%20there&icon=3", "")]);
        session.notify("hello there", NotifyIcon::Warn, None).unwrap();
        assert_eq!(transport.requests(), ["/notify.ps3mapi?msg=hello%20there&icon=3"]);
    }

    #[test]
    fn notify_appends_sound_when_given() {
        let (session, transport) = session_with([("/notify.ps3mapi?msg=hi&icon=0&snd=1", "")]);
        session.notify("hi", NotifyIcon::Info, Some(Buzzer::Simple)).unwrap();
        assert_eq!(transport.requests(), ["/notify.ps3mapi?msg=hi&icon=0&snd=1"]);
    }

    #[test]
    fn notify_omits_sound_for_no_sound() {
        let (session, transport) = session_with([("/notify.ps3mapi?msg=hi&icon=0", "")]);
        session.notify("hi", NotifyIcon::Info, Some(Buzzer::NoSound)).unwrap();
        assert_eq!(transport.requests(), ["/notify.ps3mapi?msg=hi&icon=0"]);
    }

    #[test]
    fn led_codes_are_reproduced_exactly() {
        let (session, transport) = session_with([("/led.ps3mapi?color=2&mode=1", "")]);
        session.set_led(LedColor::Yellow, LedMode::On).unwrap();
        assert_eq!(transport.requests(), ["/led.ps3mapi?color=2&mode=1"]);
    }

    #[test]
    fn directory_path_gets_a_leading_slash() {
        let (session, transport) = session_with([("/dev_hdd0", "<html></html>")]);
        let record = session.directory("dev_hdd0").unwrap();
        assert_eq!(record.path(), Some("/dev_hdd0"));
        assert_eq!(transport.hits("/dev_hdd0"), 1);
    }

    #[test]
    fn connection_failures_propagate_from_temperatures() {
        #[derive(Debug)]
        struct DownTransport;
        impl Transport for DownTransport {
            fn get(&self, path: &str) -> crate::error::Result<String> {
                exn::bail!(ErrorKind::Connection(path.to_string()));
            }

            fn base_url(&self) -> &str {
                "http://down"
            }
        }
        let session = Session::with_transport(DownTransport);
        let err = session.temperatures().unwrap_err();
        assert!(matches!(*err, ErrorKind::Connection(_)));
    }
}

//! Screen flow: login -> dashboard -> channel detail.
//!
//! All transitions are driven by user actions processed one at a time. The
//! navigator owns the only mutable UI state; the catalog is read-only.

use tracing::{debug, info};

use crate::domain::{Channel, VideoKind, Window};
use crate::error::{AuthError, MarketError};
use crate::session::auth::{Authenticator, Credentials};
use crate::session::opener::LinkOpener;

/// Minimal receiving-email check: non-empty and contains `@` and `.`.
///
/// Deliberately weak; this is not address validation.
pub fn can_pay(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

/// Local state of the channel detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailState {
    channel: Channel,
    window: Window,
    video_kind: VideoKind,
    pending_email: String,
    show_confirmation: bool,
}

impl DetailState {
    pub fn new(channel: Channel) -> Self {
        let video_kind = channel.default_video_kind();
        Self {
            channel,
            window: Window::default(),
            video_kind,
            pending_email: String::new(),
            show_confirmation: false,
        }
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn set_window(&mut self, window: Window) {
        self.window = window;
    }

    pub fn video_kind(&self) -> VideoKind {
        self.video_kind
    }

    /// Switch long/shorts. Ignored unless the channel has both.
    pub fn set_video_kind(&mut self, kind: VideoKind) -> bool {
        if !self.channel.offers_video_switch() {
            return false;
        }
        self.video_kind = kind;
        true
    }

    pub fn toggle_video_kind(&mut self) -> bool {
        self.set_video_kind(self.video_kind.toggled())
    }

    pub fn pending_email(&self) -> &str {
        &self.pending_email
    }

    pub fn set_pending_email(&mut self, email: impl Into<String>) {
        self.pending_email = email.into();
    }

    pub fn push_email_char(&mut self, c: char) {
        self.pending_email.push(c);
    }

    pub fn pop_email_char(&mut self) {
        self.pending_email.pop();
    }

    /// "Pay Now" is clickable once something has been typed.
    pub fn pay_button_enabled(&self) -> bool {
        !self.pending_email.is_empty()
    }

    pub fn showing_confirmation(&self) -> bool {
        self.show_confirmation
    }

    /// Open the confirmation prompt if the receiving email passes [`can_pay`].
    pub fn pay_now(&mut self) -> Result<(), MarketError> {
        if !can_pay(&self.pending_email) {
            debug!(email = %self.pending_email, "pay now rejected");
            return Err(MarketError::InvalidEmail);
        }
        self.show_confirmation = true;
        Ok(())
    }

    /// Redirect to the payment link and close the prompt.
    ///
    /// No payment state is recorded. Does nothing if the prompt is closed.
    pub fn proceed(&mut self, opener: &mut dyn LinkOpener) -> bool {
        if !self.show_confirmation {
            return false;
        }
        info!(channel = %self.channel.name, "redirecting to payment link");
        opener.open(&self.channel.payment_link);
        self.show_confirmation = false;
        true
    }

    pub fn cancel(&mut self) {
        self.show_confirmation = false;
    }
}

/// Top-level screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    LoggedOut,
    Dashboard,
    ChannelDetail(Box<DetailState>),
}

/// The three-screen state machine.
pub struct Navigator<A: Authenticator> {
    auth: A,
    screen: Screen,
}

impl<A: Authenticator> Navigator<A> {
    pub fn new(auth: A) -> Self {
        Self {
            auth,
            screen: Screen::LoggedOut,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_authenticated(&self) -> bool {
        !matches!(self.screen, Screen::LoggedOut)
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        match &self.screen {
            Screen::ChannelDetail(detail) => Some(detail.channel()),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match &self.screen {
            Screen::ChannelDetail(detail) => Some(detail.as_ref()),
            _ => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut DetailState> {
        match &mut self.screen {
            Screen::ChannelDetail(detail) => Some(detail.as_mut()),
            _ => None,
        }
    }

    /// `LoggedOut -> Dashboard` when the authenticator accepts.
    ///
    /// A no-op when already logged in.
    pub fn submit_login(&mut self, credentials: &Credentials) -> Result<(), AuthError> {
        if self.is_authenticated() {
            return Ok(());
        }
        self.auth.authenticate(credentials)?;
        info!(email = %credentials.email, "logged in");
        self.screen = Screen::Dashboard;
        Ok(())
    }

    /// `Dashboard -> ChannelDetail(channel)`. Ignored on other screens.
    pub fn select_channel(&mut self, channel: &Channel) -> bool {
        if self.screen != Screen::Dashboard {
            return false;
        }
        debug!(channel = %channel.name, "view analytics");
        self.screen = Screen::ChannelDetail(Box::new(DetailState::new(channel.clone())));
        true
    }

    /// `ChannelDetail -> Dashboard`, clearing the selection.
    pub fn back(&mut self) -> bool {
        if !matches!(self.screen, Screen::ChannelDetail(_)) {
            return false;
        }
        self.screen = Screen::Dashboard;
        true
    }

    /// Any screen -> `LoggedOut`.
    pub fn logout(&mut self) {
        if self.is_authenticated() {
            info!("logged out");
        }
        self.screen = Screen::LoggedOut;
    }
}

/// "Visit Channel": open the channel page externally.
pub fn visit_channel(channel: &Channel, opener: &mut dyn LinkOpener) {
    opener.open(&channel.channel_url);
}

/// "Contact Seller" has no messaging backend; it only produces a status line.
pub fn contact_seller(channel: &Channel) -> String {
    debug!(channel = %channel.name, seller = %channel.seller.name, "contact seller");
    format!("Contact {} at {}", channel.seller.name, channel.seller.email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use crate::session::auth::AcceptNonEmpty;
    use crate::session::opener::RecordingOpener;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn channels() -> Vec<Channel> {
        Catalog::reference(&mut StdRng::seed_from_u64(0))
            .unwrap()
            .list_channels()
            .to_vec()
    }

    fn logged_in() -> Navigator<AcceptNonEmpty> {
        let mut nav = Navigator::new(AcceptNonEmpty);
        nav.submit_login(&Credentials::new("me@x.io", "pw")).unwrap();
        nav
    }

    #[test]
    fn non_empty_login_reaches_dashboard() {
        let mut nav = Navigator::new(AcceptNonEmpty);
        assert_eq!(nav.screen(), &Screen::LoggedOut);
        nav.submit_login(&Credentials::new("anything", "whatever")).unwrap();
        assert_eq!(nav.screen(), &Screen::Dashboard);
    }

    #[test]
    fn empty_login_stays_logged_out() {
        let mut nav = Navigator::new(AcceptNonEmpty);
        assert!(nav.submit_login(&Credentials::new("", "pw")).is_err());
        assert!(nav.submit_login(&Credentials::new("me", "")).is_err());
        assert_eq!(nav.screen(), &Screen::LoggedOut);
    }

    #[test]
    fn rejecting_authenticator_blocks_login() {
        struct Deny;
        impl Authenticator for Deny {
            fn authenticate(&self, _: &Credentials) -> Result<(), AuthError> {
                Err(AuthError::Rejected)
            }
        }
        let mut nav = Navigator::new(Deny);
        assert_eq!(nav.submit_login(&Credentials::new("a", "b")), Err(AuthError::Rejected));
        assert!(!nav.is_authenticated());
    }

    #[test]
    fn selecting_a_channel_holds_exactly_that_channel() {
        for ch in channels() {
            let mut nav = logged_in();
            assert!(nav.select_channel(&ch));
            assert_eq!(nav.selected_channel(), Some(&ch));
        }
    }

    #[test]
    fn select_is_ignored_when_logged_out() {
        let mut nav = Navigator::new(AcceptNonEmpty);
        assert!(!nav.select_channel(&channels()[0]));
        assert_eq!(nav.screen(), &Screen::LoggedOut);
    }

    #[test]
    fn back_returns_to_dashboard_and_clears_selection() {
        let mut nav = logged_in();
        nav.select_channel(&channels()[1]);
        assert!(nav.back());
        assert_eq!(nav.screen(), &Screen::Dashboard);
        assert!(nav.selected_channel().is_none());
        assert!(!nav.back());
    }

    #[test]
    fn logout_from_any_state() {
        let mut nav = Navigator::new(AcceptNonEmpty);
        nav.logout();
        assert_eq!(nav.screen(), &Screen::LoggedOut);

        let mut nav = logged_in();
        nav.logout();
        assert_eq!(nav.screen(), &Screen::LoggedOut);

        let mut nav = logged_in();
        nav.select_channel(&channels()[0]);
        nav.logout();
        assert_eq!(nav.screen(), &Screen::LoggedOut);
        assert!(nav.selected_channel().is_none());
    }

    #[test]
    fn can_pay_reference_cases() {
        assert!(can_pay("a@b.com"));
        assert!(!can_pay(""));
        assert!(!can_pay("abc"));
        assert!(!can_pay("a@bcom"));
        assert!(!can_pay("a.b.com"));
    }

    #[test]
    fn detail_defaults() {
        let chs = channels();
        let kg = DetailState::new(chs[0].clone());
        assert_eq!(kg.window(), Window::Days30);
        assert_eq!(kg.video_kind(), VideoKind::Long);
        assert!(!kg.showing_confirmation());
        assert!(!kg.pay_button_enabled());

        let ft = DetailState::new(chs[1].clone());
        assert_eq!(ft.video_kind(), VideoKind::Shorts);
    }

    #[test]
    fn video_switch_requires_both_kinds() {
        let chs = channels();
        let mut kg = DetailState::new(chs[0].clone());
        assert!(kg.toggle_video_kind());
        assert_eq!(kg.video_kind(), VideoKind::Shorts);

        let mut ft = DetailState::new(chs[1].clone());
        assert!(!ft.set_video_kind(VideoKind::Long));
        assert_eq!(ft.video_kind(), VideoKind::Shorts);
    }

    #[test]
    fn invalid_email_blocks_payment_without_state_change() {
        let mut d = DetailState::new(channels()[0].clone());
        d.set_pending_email("abc");
        assert_eq!(d.pay_now(), Err(MarketError::InvalidEmail));
        assert!(!d.showing_confirmation());
        assert_eq!(d.pending_email(), "abc");
    }

    #[test]
    fn proceed_opens_payment_link_and_closes_prompt() {
        let ch = channels()[0].clone();
        let mut d = DetailState::new(ch.clone());
        let mut opener = RecordingOpener::default();

        assert!(!d.proceed(&mut opener));
        assert!(opener.opened.is_empty());

        d.set_pending_email("buyer@mail.com");
        d.pay_now().unwrap();
        assert!(d.showing_confirmation());
        assert!(d.proceed(&mut opener));
        assert!(!d.showing_confirmation());
        assert_eq!(opener.opened, [ch.payment_link]);
    }

    #[test]
    fn cancel_closes_prompt_without_side_effects() {
        let mut d = DetailState::new(channels()[1].clone());
        d.set_pending_email("buyer@mail.com");
        d.pay_now().unwrap();
        d.cancel();
        assert!(!d.showing_confirmation());
        let mut opener = RecordingOpener::default();
        assert!(!d.proceed(&mut opener));
        assert!(opener.opened.is_empty());
    }

    #[test]
    fn visit_channel_opens_channel_url() {
        let ch = channels()[1].clone();
        let mut opener = RecordingOpener::default();
        visit_channel(&ch, &mut opener);
        assert_eq!(opener.opened, ["https://www.youtube.com/@FootballTime_Live/featured"]);
    }

    #[test]
    fn contact_seller_names_the_seller() {
        let ch = channels()[0].clone();
        let msg = contact_seller(&ch);
        assert!(msg.contains(&ch.seller.name));
        assert!(msg.contains(&ch.seller.email));
    }
}

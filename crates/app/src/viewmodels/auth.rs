//! Login/registration page state.

use std::time::Duration;

use maintrack_domain::auth::{Credentials, Registration};
use maintrack_domain::error::{ApiError, MaintrackError, ValidationError};

use crate::messages::auth as text;

/// Delay between a successful login and the move to the dashboard, so the
/// success banner can be read.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(1);
/// Delay between a successful registration and the switch to the login form.
pub const REGISTER_SWITCH_DELAY: Duration = Duration::from_secs(2);

/// Which of the two mutually exclusive forms is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthPanel {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Alert shown above the visible form. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    /// CSS classes of the alert element.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "alert alert-success",
            BannerKind::Error => "alert alert-error",
        }
    }
}

/// Deferred step the UI runs once the delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    GoToDashboard { after: Duration },
    ShowLogin { after: Duration },
}

/// State of the login/registration page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthViewModel {
    panel: AuthPanel,
    banner: Option<Banner>,
    login_busy: bool,
    register_busy: bool,
}

impl AuthViewModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn panel(&self) -> AuthPanel {
        self.panel
    }

    #[must_use]
    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    #[must_use]
    pub fn login_busy(&self) -> bool {
        self.login_busy
    }

    #[must_use]
    pub fn register_busy(&self) -> bool {
        self.register_busy
    }

    #[must_use]
    pub fn login_button_label(&self) -> &'static str {
        if self.login_busy {
            text::LOGIN_BUSY
        } else {
            text::LOGIN_IDLE
        }
    }

    #[must_use]
    pub fn register_button_label(&self) -> &'static str {
        if self.register_busy {
            text::REGISTER_BUSY
        } else {
            text::REGISTER_IDLE
        }
    }

    /// Show the login form and drop any banner.
    pub fn show_login(&mut self) {
        self.panel = AuthPanel::Login;
        self.banner = None;
    }

    /// Show the registration form and drop any banner.
    pub fn show_register(&mut self) {
        self.panel = AuthPanel::Register;
        self.banner = None;
    }

    /// Validate the login form. Returns the credentials to submit and marks
    /// the login button busy, or shows the validation error.
    pub fn begin_login(&mut self, email: &str, password: &str) -> Option<Credentials> {
        let credentials = Credentials::from_input(email, password);
        if let Err(err) = credentials.validate() {
            self.show_error(error_text(&err, text::LOGIN_FAILED));
            return None;
        }
        self.login_busy = true;
        Some(credentials)
    }

    /// Apply the login outcome. On success the UI must go to the dashboard
    /// after the returned delay.
    pub fn finish_login(&mut self, result: Result<(), MaintrackError>) -> Option<FollowUp> {
        self.login_busy = false;
        match result {
            Ok(()) => {
                self.show_success(text::LOGIN_SUCCESS);
                Some(FollowUp::GoToDashboard {
                    after: LOGIN_REDIRECT_DELAY,
                })
            }
            Err(err) => {
                self.show_error(error_text(&err, text::LOGIN_FAILED));
                None
            }
        }
    }

    /// Validate the registration form. Returns the registration to submit and
    /// marks the register button busy, or shows the validation error.
    pub fn begin_register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Option<Registration> {
        let registration = Registration::from_input(name, email, password);
        if let Err(err) = registration.validate() {
            self.show_error(error_text(&err, text::REGISTER_FAILED));
            return None;
        }
        self.register_busy = true;
        Some(registration)
    }

    /// Apply the registration outcome. On success the UI must call
    /// [`show_login`](Self::show_login) after the returned delay.
    pub fn finish_register(&mut self, result: Result<(), MaintrackError>) -> Option<FollowUp> {
        self.register_busy = false;
        match result {
            Ok(()) => {
                self.show_success(text::REGISTER_SUCCESS);
                Some(FollowUp::ShowLogin {
                    after: REGISTER_SWITCH_DELAY,
                })
            }
            Err(err) => {
                self.show_error(error_text(&err, text::REGISTER_FAILED));
                None
            }
        }
    }

    fn show_error(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner {
            kind: BannerKind::Error,
            text: text.into(),
        });
    }

    fn show_success(&mut self, text: impl Into<String>) {
        self.banner = Some(Banner {
            kind: BannerKind::Success,
            text: text.into(),
        });
    }
}

fn error_text(err: &MaintrackError, rejected: &str) -> String {
    match err {
        MaintrackError::Validation(ValidationError::MissingFields) => {
            text::MISSING_FIELDS.to_string()
        }
        MaintrackError::Validation(ValidationError::PasswordTooShort { .. }) => {
            text::PASSWORD_TOO_SHORT.to_string()
        }
        MaintrackError::Api(ApiError::Transport(_)) => text::CONNECTION_ERROR.to_string(),
        MaintrackError::Api(api) => api.server_message().unwrap_or(rejected).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_on_login_panel_without_banner() {
        let vm = AuthViewModel::new();
        assert_eq!(vm.panel(), AuthPanel::Login);
        assert!(vm.banner().is_none());
        assert_eq!(vm.login_button_label(), "Entrar");
        assert_eq!(vm.register_button_label(), "Criar conta");
    }

    #[test]
    fn should_clear_banner_when_switching_panels() {
        let mut vm = AuthViewModel::new();
        vm.begin_login("", "");
        assert!(vm.banner().is_some());

        vm.show_register();

        assert_eq!(vm.panel(), AuthPanel::Register);
        assert!(vm.banner().is_none());
    }

    #[test]
    fn should_show_missing_fields_error_without_going_busy() {
        let mut vm = AuthViewModel::new();

        assert!(vm.begin_login("a@b.com", "").is_none());

        assert!(!vm.login_busy());
        let banner = vm.banner().unwrap();
        assert_eq!(banner.kind, BannerKind::Error);
        assert_eq!(banner.text, "Por favor, preencha todos os campos.");
    }

    #[test]
    fn should_mark_login_busy_while_request_in_flight() {
        let mut vm = AuthViewModel::new();

        let creds = vm.begin_login(" a@b.com ", "secret1").unwrap();

        assert_eq!(creds.email, "a@b.com");
        assert!(vm.login_busy());
        assert_eq!(vm.login_button_label(), "Entrando...");
    }

    #[test]
    fn should_schedule_dashboard_redirect_after_successful_login() {
        let mut vm = AuthViewModel::new();
        vm.begin_login("a@b.com", "secret1");

        let follow_up = vm.finish_login(Ok(()));

        assert_eq!(
            follow_up,
            Some(FollowUp::GoToDashboard {
                after: Duration::from_secs(1)
            })
        );
        assert!(!vm.login_busy());
        assert_eq!(vm.banner().unwrap().text, "Login realizado com sucesso!");
        assert_eq!(vm.banner().unwrap().class(), "alert alert-success");
    }

    #[test]
    fn should_show_server_message_when_login_rejected() {
        let mut vm = AuthViewModel::new();
        vm.begin_login("a@b.com", "wrong");

        let follow_up = vm.finish_login(Err(ApiError::Http {
            status: 401,
            message: Some("Usuário ou senha inválidos".to_string()),
        }
        .into()));

        assert!(follow_up.is_none());
        assert!(!vm.login_busy());
        assert_eq!(vm.banner().unwrap().text, "Usuário ou senha inválidos");
    }

    #[test]
    fn should_show_generic_message_when_login_rejected_without_body() {
        let mut vm = AuthViewModel::new();
        vm.finish_login(Err(ApiError::Http {
            status: 401,
            message: None,
        }
        .into()));
        assert_eq!(
            vm.banner().unwrap().text,
            "Credenciais inválidas. Tente novamente."
        );
    }

    #[test]
    fn should_show_connection_message_when_login_never_completes() {
        let mut vm = AuthViewModel::new();
        vm.finish_login(Err(ApiError::Transport("offline".to_string()).into()));
        assert_eq!(
            vm.banner().unwrap().text,
            "Erro de conexão. Verifique sua internet e tente novamente."
        );
    }

    #[test]
    fn should_reject_short_password_on_register() {
        let mut vm = AuthViewModel::new();
        vm.show_register();

        assert!(vm.begin_register("Ana", "a@b.com", "12345").is_none());

        assert_eq!(
            vm.banner().unwrap().text,
            "A senha deve ter pelo menos 6 caracteres."
        );
        assert!(!vm.register_busy());
    }

    #[test]
    fn should_switch_back_to_login_after_successful_registration() {
        let mut vm = AuthViewModel::new();
        vm.show_register();
        vm.begin_register("Ana", "a@b.com", "secret1").unwrap();
        assert_eq!(vm.register_button_label(), "Criando conta...");

        let follow_up = vm.finish_register(Ok(()));

        assert_eq!(
            follow_up,
            Some(FollowUp::ShowLogin {
                after: Duration::from_secs(2)
            })
        );
        assert_eq!(vm.panel(), AuthPanel::Register);
        assert_eq!(
            vm.banner().unwrap().text,
            "Conta criada com sucesso! Redirecionando para login..."
        );

        vm.show_login();
        assert_eq!(vm.panel(), AuthPanel::Login);
        assert!(vm.banner().is_none());
    }

    #[test]
    fn should_show_generic_message_when_registration_rejected() {
        let mut vm = AuthViewModel::new();
        vm.show_register();
        vm.finish_register(Err(ApiError::Http {
            status: 400,
            message: None,
        }
        .into()));
        assert_eq!(
            vm.banner().unwrap().text,
            "Erro ao criar conta. Tente novamente."
        );
    }
}

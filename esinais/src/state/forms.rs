//! Keyboard-driven forms: auth modal, create-sign, create-user and profile.

use esinais_data::{require, DraftError, UserRole};
use secrecy::{ExposeSecret, SecretString};

pub mod labels {
    pub const NAME: &str = "Nome";
    pub const EMAIL: &str = "E-mail";
    pub const PASSWORD: &str = "Senha";
    pub const GRAMMAR_CLASS: &str = "Classificação Gramatical";
    pub const REGION: &str = "Região";
    pub const DEFINITION: &str = "Definição";
    pub const EXAMPLE: &str = "Exemplo de Uso";
    pub const CONTEXT: &str = "Contexto";
    pub const UPLOAD: &str = "Envio";
    pub const ROLE: &str = "Perfil";
    pub const FULL_NAME: &str = "Nome Completo";
    pub const CURRENT_PASSWORD: &str = "Senha Atual";
    pub const NEW_PASSWORD: &str = "Nova Senha";
    pub const CONFIRM_PASSWORD: &str = "Confirmar Nova Senha";
}

pub const GRAMMAR_CLASSES: &[&str] = &["Substantivo", "Verbo", "Adjetivo"];
pub const REGIONS: &[&str] = &["Universal", "Nordeste", "Sudeste", "Sul"];
pub const CONTEXTS: &[&str] = &["Geral", "Fruta", "Tecnologia", "Saúde"];
pub const UPLOAD_METHODS: &[&str] = &["Por arquivo", "Por vídeo", "Imagem associativa"];
pub const ROLES: &[&str] = &["Administrador", "Intérprete", "Padrão"];

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Secret(SecretString),
    Choice {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
    ReadOnly(String),
}

impl FieldValue {
    fn empty_secret() -> Self {
        Self::Secret(SecretString::from(String::new()))
    }

    fn choice(options: &'static [&'static str]) -> Self {
        Self::Choice {
            options,
            selected: None,
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Text(text) => text.clear(),
            Self::Secret(secret) => *secret = SecretString::from(String::new()),
            Self::Choice { selected, .. } => *selected = None,
            Self::ReadOnly(_) => {}
        }
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    pub label: &'static str,
    pub required: bool,
    pub value: FieldValue,
}

impl Field {
    fn new(label: &'static str, required: bool, value: FieldValue) -> Self {
        Self {
            label,
            required,
            value,
        }
    }

    fn is_editable(&self) -> bool {
        !matches!(self.value, FieldValue::ReadOnly(_))
    }

    /// Plain value; secrets are exposed, so never log this.
    fn raw(&self) -> &str {
        match &self.value {
            FieldValue::Text(text) | FieldValue::ReadOnly(text) => text.as_str(),
            FieldValue::Secret(secret) => secret.expose_secret(),
            FieldValue::Choice { options, selected } => selected
                .and_then(|index| options.get(index).copied())
                .unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<Field>,
    pub focused: usize,
    pub reveal_secrets: bool,
    pub error: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            focused: 0,
            reveal_secrets: false,
            error: None,
        }
    }

    pub fn create_sign() -> Self {
        use labels::*;
        Self::new(vec![
            Field::new(NAME, true, FieldValue::Text(String::new())),
            Field::new(GRAMMAR_CLASS, true, FieldValue::choice(GRAMMAR_CLASSES)),
            Field::new(REGION, true, FieldValue::choice(REGIONS)),
            Field::new(DEFINITION, false, FieldValue::Text(String::new())),
            Field::new(EXAMPLE, false, FieldValue::Text(String::new())),
            Field::new(CONTEXT, false, FieldValue::choice(CONTEXTS)),
            Field::new(UPLOAD, true, FieldValue::choice(UPLOAD_METHODS)),
        ])
    }

    pub fn create_user() -> Self {
        use labels::*;
        Self::new(vec![
            Field::new(NAME, true, FieldValue::Text(String::new())),
            Field::new(EMAIL, true, FieldValue::Text(String::new())),
            Field::new(PASSWORD, true, FieldValue::empty_secret()),
            Field::new(ROLE, true, FieldValue::choice(ROLES)),
        ])
    }

    pub fn profile(name: &str, email: &str) -> Self {
        use labels::*;
        Self::new(vec![
            Field::new(FULL_NAME, true, FieldValue::Text(name.to_string())),
            Field::new(EMAIL, true, FieldValue::Text(email.to_string())),
            Field::new(
                ROLE,
                false,
                FieldValue::ReadOnly(UserRole::Admin.label().to_string()),
            ),
            Field::new(CURRENT_PASSWORD, false, FieldValue::empty_secret()),
            Field::new(NEW_PASSWORD, false, FieldValue::empty_secret()),
            Field::new(CONFIRM_PASSWORD, false, FieldValue::empty_secret()),
        ])
    }

    pub fn focused_field(&self) -> Option<&Field> {
        self.fields.get(self.focused)
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_previous(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        for _ in 0..len {
            self.focused = if forward {
                (self.focused + 1) % len
            } else {
                (self.focused + len - 1) % len
            };
            if self.fields[self.focused].is_editable() {
                break;
            }
        }
    }

    pub fn push_char(&mut self, c: char) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        match &mut field.value {
            FieldValue::Text(text) => text.push(c),
            FieldValue::Secret(secret) => {
                let mut value = secret.expose_secret().to_string();
                value.push(c);
                *secret = SecretString::from(value);
            }
            FieldValue::Choice { .. } | FieldValue::ReadOnly(_) => return,
        }
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        match &mut field.value {
            FieldValue::Text(text) => {
                text.pop();
            }
            FieldValue::Secret(secret) => {
                let mut value = secret.expose_secret().to_string();
                value.pop();
                *secret = SecretString::from(value);
            }
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::ReadOnly(_) => return,
        }
        self.error = None;
    }

    /// Step the focused choice field through its options, wrapping around.
    pub fn cycle_choice(&mut self, forward: bool) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        if let FieldValue::Choice { options, selected } = &mut field.value {
            let len = options.len();
            if len == 0 {
                return;
            }
            *selected = Some(match (*selected, forward) {
                (None, true) => 0,
                (None, false) => len - 1,
                (Some(index), true) => (index + 1) % len,
                (Some(index), false) => (index + len - 1) % len,
            });
            self.error = None;
        }
    }

    pub fn value(&self, label: &str) -> &str {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(Field::raw)
            .unwrap_or("")
    }

    pub fn has_field(&self, label: &str) -> bool {
        self.fields.iter().any(|field| field.label == label)
    }

    /// Text shown for a field; secrets are masked unless revealed.
    pub fn display_value(&self, index: usize) -> String {
        let Some(field) = self.fields.get(index) else {
            return String::new();
        };
        match &field.value {
            FieldValue::Secret(secret) if !self.reveal_secrets => {
                "•".repeat(secret.expose_secret().chars().count())
            }
            FieldValue::Choice {
                selected: None, ..
            } => "Selecione...".to_string(),
            _ => field.raw().to_string(),
        }
    }

    /// First required field left blank, in display order.
    pub fn check_required(&self) -> Result<(), DraftError> {
        for field in self.fields.iter().filter(|field| field.required) {
            require(field.label, field.raw())?;
        }
        Ok(())
    }

    pub fn clear_secrets(&mut self) {
        for field in &mut self.fields {
            if matches!(field.value, FieldValue::Secret(_)) {
                field.value.clear();
            }
        }
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
        self.focused = 0;
        self.reveal_secrets = false;
        self.error = None;
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Bem-vindo de volta!",
            Self::Register => "Crie sua conta",
            Self::ForgotPassword => "Recuperar senha",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Self::Login => "Digite suas credenciais para acessar sua conta",
            Self::Register => "Preencha os dados abaixo para começar a usar",
            Self::ForgotPassword => "Digite seu e-mail para receber o link de recuperação",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Login => "Entrar na conta",
            Self::Register => "Criar conta gratuita",
            Self::ForgotPassword => "Enviar link de recuperação",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub form: FormState,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        use labels::*;
        let fields = match mode {
            AuthMode::Login => vec![
                Field::new(EMAIL, true, FieldValue::Text(String::new())),
                Field::new(PASSWORD, true, FieldValue::empty_secret()),
            ],
            AuthMode::Register => vec![
                Field::new(NAME, false, FieldValue::Text(String::new())),
                Field::new(EMAIL, false, FieldValue::Text(String::new())),
                Field::new(PASSWORD, false, FieldValue::empty_secret()),
            ],
            AuthMode::ForgotPassword => {
                vec![Field::new(EMAIL, false, FieldValue::Text(String::new()))]
            }
        };
        Self {
            mode,
            form: FormState::new(fields),
        }
    }

    /// Switching modes starts from empty fields.
    pub fn switch_mode(&mut self, mode: AuthMode) {
        *self = Self::new(mode);
    }
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new(AuthMode::Login)
    }
}

use super::forms::labels;
use crate::state::FormState;
use esinais_data::{require, validate_email, DraftError, NewSign, NewUser, UserRole};

/// Date format used for every record created at runtime
pub const DATE_FORMAT: &str = "%d-%m-%Y";

pub fn today() -> String {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}

/// Login only needs both fields filled in.
pub fn validate_login(form: &FormState) -> Result<(), DraftError> {
    require(labels::EMAIL, form.value(labels::EMAIL))?;
    require(labels::PASSWORD, form.value(labels::PASSWORD))?;
    Ok(())
}

/// Validate the create-sign form and build the draft to append
pub fn build_sign(form: &FormState, submitted_by: &str, today: &str) -> Result<NewSign, DraftError> {
    form.check_required()?;

    let name = require(labels::NAME, form.value(labels::NAME))?;

    // Context is optional on the form but every sign needs a category
    let category = match form.value(labels::CONTEXT) {
        "" => "Geral",
        context => context,
    };

    Ok(NewSign::new(name)
        .category(category)
        .submitted_by(submitted_by)
        .submitted_date(today))
}

/// Validate the create-user form and build the draft to append
pub fn build_user(form: &FormState, today: &str) -> Result<NewUser, DraftError> {
    form.check_required()?;

    let name = require(labels::NAME, form.value(labels::NAME))?;
    let email = validate_email(form.value(labels::EMAIL))?;
    let role = UserRole::ALL
        .into_iter()
        .find(|role| role.label() == form.value(labels::ROLE))
        .ok_or(DraftError::MissingField(labels::ROLE))?;

    Ok(NewUser::new(name, email, role).registered_date(today))
}

/// Validate the profile form, returning the trimmed name and email.
pub fn validate_profile(form: &FormState) -> Result<(String, String), DraftError> {
    let name = require(labels::FULL_NAME, form.value(labels::FULL_NAME))?;
    let email = validate_email(form.value(labels::EMAIL))?;

    let new_password = form.value(labels::NEW_PASSWORD);
    if !new_password.is_empty() {
        require(labels::CURRENT_PASSWORD, form.value(labels::CURRENT_PASSWORD))?;
        if new_password != form.value(labels::CONFIRM_PASSWORD) {
            return Err(DraftError::Mismatch(labels::CONFIRM_PASSWORD));
        }
    }

    Ok((name.to_string(), email.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.push_char(c);
        }
    }

    fn filled_sign_form() -> FormState {
        let mut form = FormState::create_sign();
        type_text(&mut form, "Tablet");
        form.focus_next();
        form.cycle_choice(true); // Substantivo
        form.focus_next();
        form.cycle_choice(true); // Universal
        for _ in 0..4 {
            form.focus_next();
        }
        form.cycle_choice(true); // Por arquivo
        form
    }

    #[test]
    fn test_build_sign_defaults_category() {
        let form = filled_sign_form();
        let sign = build_sign(&form, "João Admin", "01-07-2025").unwrap();

        assert_eq!(
            sign,
            NewSign::new("Tablet")
                .category("Geral")
                .submitted_by("João Admin")
                .submitted_date("01-07-2025")
        );
    }

    #[test]
    fn test_build_sign_uses_context() {
        let mut form = filled_sign_form();
        form.focused = 5;
        form.cycle_choice(true);
        form.cycle_choice(true); // Fruta

        let sign = build_sign(&form, "João Admin", "01-07-2025").unwrap();
        assert_eq!(
            sign,
            NewSign::new("Tablet")
                .category("Fruta")
                .submitted_by("João Admin")
                .submitted_date("01-07-2025")
        );
    }

    #[test]
    fn test_build_sign_reports_first_missing_field() {
        let mut form = FormState::create_sign();
        type_text(&mut form, "Tablet");

        assert_eq!(
            build_sign(&form, "João Admin", "01-07-2025"),
            Err(DraftError::MissingField(labels::GRAMMAR_CLASS))
        );
    }

    #[test]
    fn test_build_user_rejects_bad_email() {
        let mut form = FormState::create_user();
        type_text(&mut form, "Bia");
        form.focus_next();
        type_text(&mut form, "bia-at-example");
        form.focus_next();
        type_text(&mut form, "secret");
        form.focus_next();
        form.cycle_choice(false); // Padrão

        assert_eq!(
            build_user(&form, "01-07-2025"),
            Err(DraftError::InvalidEmail("bia-at-example".to_string()))
        );
    }

    #[test]
    fn test_build_user() {
        let mut form = FormState::create_user();
        type_text(&mut form, "Bia");
        form.focus_next();
        type_text(&mut form, "bia@esinais.com");
        form.focus_next();
        type_text(&mut form, "secret");
        form.focus_next();
        form.cycle_choice(true);
        form.cycle_choice(true); // Intérprete

        assert_eq!(
            build_user(&form, "01-07-2025"),
            Ok(NewUser::new("Bia", "bia@esinais.com", UserRole::Interpreter)
                .registered_date("01-07-2025"))
        );
    }

    #[test]
    fn test_validate_login_needs_password() {
        let mut form = crate::state::AuthForm::default().form;
        type_text(&mut form, "a@b.com");
        assert_eq!(
            validate_login(&form),
            Err(DraftError::MissingField(labels::PASSWORD))
        );

        form.focus_next();
        type_text(&mut form, "x");
        assert!(validate_login(&form).is_ok());
    }

    #[test]
    fn test_validate_profile_password_confirmation() {
        let mut form = FormState::profile("João Admin", "admin@esinais.com");
        form.focused = 3;
        type_text(&mut form, "old");
        form.focus_next();
        type_text(&mut form, "new-password");
        form.focus_next();
        type_text(&mut form, "typo");

        assert_eq!(
            validate_profile(&form),
            Err(DraftError::Mismatch(labels::CONFIRM_PASSWORD))
        );

        form.fields[5] = FormState::profile("", "").fields[5].clone();
        form.focused = 5;
        type_text(&mut form, "new-password");
        assert_eq!(
            validate_profile(&form),
            Ok(("João Admin".to_string(), "admin@esinais.com".to_string()))
        );
    }

    #[test]
    fn test_today_format() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, DATE_FORMAT).is_ok());
    }
}

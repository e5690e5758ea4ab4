//! Form Validation
//!
//! Client-side checks run before any request is sent. The backend is
//! authoritative, these exist so obviously bad input never leaves the page.
//! Every `Err` is the exact message shown as a toast.

use crate::models::TodoItem;

pub fn signup_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required");
    }
    if trimmed.chars().count() < 3 {
        return Err("Name must be at least 3 characters");
    }
    if !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err("Name can only contain letters");
    }
    Ok(())
}

pub fn signup_email(email: &str) -> Result<(), &'static str> {
    if is_email(email) {
        Ok(())
    } else {
        Err("Enter a valid email address")
    }
}

/// Mirrors the usual `local@host.tld` shape: one `@`, no whitespace,
/// and a dot with something on both sides in the domain.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn signup_password(password: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Password must be at least 8 characters");
    }
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(is_symbol);
    if has_upper && has_lower && has_digit && has_symbol {
        Ok(())
    } else {
        Err("Password must contain uppercase, lowercase, number & special character")
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// All signup checks in the order the form reports them
pub fn signup(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    signup_name(name)?;
    signup_email(email)?;
    signup_password(password)?;
    Ok(())
}

/// Checks a new todo title against the current list and returns the
/// trimmed title to send. Duplicates are compared case-insensitively.
pub fn new_todo_title(title: &str, existing: &[TodoItem]) -> Result<String, &'static str> {
    let trimmed = title.trim();
    if trimmed.chars().count() < 3 {
        return Err("Title must be at least 3 characters");
    }
    let lowered = trimmed.to_lowercase();
    if existing.iter().any(|t| t.title.trim().to_lowercase() == lowered) {
        return Err("Todo already exists!");
    }
    Ok(trimmed.to_string())
}

/// Edited titles only need to be non-empty
pub fn edit_todo_title(title: &str) -> Result<String, &'static str> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err("Title cannot be empty!");
    }
    Ok(trimmed.to_string())
}

/// Feedback form checks, text before rating
pub fn feedback(rating: u8, text: &str) -> Result<String, &'static str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err("Please enter your feedback");
    }
    if rating == 0 {
        return Err("Please select a rating");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(title: &str) -> TodoItem {
        TodoItem {
            id: "t1".to_string(),
            title: title.to_string(),
            completed: false,
            selected: false,
        }
    }

    #[test]
    fn name_rules() {
        assert_eq!(signup_name(""), Err("Name is required"));
        assert_eq!(signup_name("   "), Err("Name is required"));
        assert_eq!(signup_name("Jo"), Err("Name must be at least 3 characters"));
        assert_eq!(signup_name("J0hn"), Err("Name can only contain letters"));
        assert_eq!(signup_name("John Doe"), Ok(()));
        assert_eq!(signup_name("  Ada  "), Ok(()));
    }

    #[test]
    fn email_shapes() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last@sub.domain.org"));
        assert!(!is_email("plain"));
        assert!(!is_email("a@b"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("a@b."));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@b@c.com"));
        assert!(!is_email("@b.com"));
    }

    #[test]
    fn password_strength_rules() {
        assert_eq!(
            signup_password("Ab1!"),
            Err("Password must be at least 8 characters")
        );
        let classes = Err("Password must contain uppercase, lowercase, number & special character");
        assert_eq!(signup_password("abcdefg1!"), classes);
        assert_eq!(signup_password("ABCDEFG1!"), classes);
        assert_eq!(signup_password("Abcdefgh!"), classes);
        assert_eq!(signup_password("Abcdefg12"), classes);
        assert_eq!(signup_password("Abcdef1!"), Ok(()));
    }

    #[test]
    fn weak_password_fails_before_any_request_is_built() {
        // The form aborts on Err, so a failing password never reaches the API
        assert!(signup("Ada", "a@b.com", "weak").is_err());
        assert!(signup("Ada", "a@b.com", "Abcdef1!").is_ok());
    }

    #[test]
    fn signup_reports_first_failing_field() {
        assert_eq!(signup("", "bad", "weak"), Err("Name is required"));
        assert_eq!(signup("Ada", "bad", "weak"), Err("Enter a valid email address"));
        assert_eq!(
            signup("Ada", "a@b.com", "weak"),
            Err("Password must be at least 8 characters")
        );
    }

    #[test]
    fn short_todo_title_is_rejected() {
        assert_eq!(
            new_todo_title("ab", &[]),
            Err("Title must be at least 3 characters")
        );
        assert_eq!(
            new_todo_title("  a  ", &[]),
            Err("Title must be at least 3 characters")
        );
    }

    #[test]
    fn duplicate_todo_title_is_rejected_case_insensitively() {
        let existing = vec![todo("buy milk")];
        assert_eq!(new_todo_title("Buy milk", &existing), Err("Todo already exists!"));
        assert_eq!(new_todo_title("BUY MILK  ", &existing), Err("Todo already exists!"));
        assert_eq!(
            new_todo_title("Buy bread", &existing),
            Ok("Buy bread".to_string())
        );
    }

    #[test]
    fn accepted_todo_title_is_trimmed() {
        assert_eq!(
            new_todo_title("  Walk the dog  ", &[]),
            Ok("Walk the dog".to_string())
        );
    }

    #[test]
    fn edited_title_must_be_non_empty() {
        assert_eq!(edit_todo_title("   "), Err("Title cannot be empty!"));
        assert_eq!(edit_todo_title(" Done "), Ok("Done".to_string()));
    }

    #[test]
    fn feedback_requires_text_then_rating() {
        assert_eq!(feedback(0, "  "), Err("Please enter your feedback"));
        assert_eq!(feedback(0, "Nice app"), Err("Please select a rating"));
        assert_eq!(feedback(4, " Nice app "), Ok("Nice app".to_string()));
    }
}

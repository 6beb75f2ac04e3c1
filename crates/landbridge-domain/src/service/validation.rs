//! Form validation rules
//!
//! Each validator collects every failing field instead of stopping at the
//! first one, so the UI can show messages next to all offending inputs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{
    is_prefecture, ContactAddress, LoginInput, PackageDraft, ProfileInput, RegisterInput,
};
use landbridge_types::ValidationErrors;

pub const MIN_WEIGHT_KG: f64 = 0.1;
pub const MAX_WEIGHT_KG: f64 = 30.0;
pub const MIN_SIDE_CM: f64 = 1.0;
pub const MAX_SIDE_CM: f64 = 170.0;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static SHIPMENT_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0\d{9,10}$").expect("valid phone regex"));
static POSTAL_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{3}-?\d{4}$").expect("valid postal code regex"));
static PROFILE_PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\-\(\)\+\s]+$").expect("valid profile phone regex"));

/// Step 1: weight and the three sides
pub fn validate_package(package: &PackageDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match package.weight_kg {
        Some(w) if w.is_finite() && w >= MIN_WEIGHT_KG => {
            if w > MAX_WEIGHT_KG {
                errors.push("weight", "30kg以下で入力してください");
            }
        }
        _ => errors.push("weight", "重量を入力してください"),
    }

    let sides = [
        ("dimensions.length", package.length, "長さ"),
        ("dimensions.width", package.width, "幅"),
        ("dimensions.height", package.height, "高さ"),
    ];
    for (field, value, label) in sides {
        match value {
            Some(v) if v.is_finite() && v >= MIN_SIDE_CM => {
                if v > MAX_SIDE_CM {
                    errors.push(field, "170cm以下で入力してください");
                }
            }
            _ => errors.push(field, format!("{}を入力してください", label)),
        }
    }

    errors
}

/// Step 2: one address sub-form. `prefix` is "sender" or "recipient".
pub fn validate_contact_address(prefix: &str, contact: &ContactAddress) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let field = |name: &str| format!("{}.{}", prefix, name);

    if contact.name.trim().is_empty() {
        errors.push(field("name"), "お名前を入力してください");
    }
    if !SHIPMENT_PHONE_RE.is_match(contact.phone.trim()) {
        errors.push(field("phone"), "有効な電話番号を入力してください");
    }
    if !POSTAL_CODE_RE.is_match(contact.postal_code.trim()) {
        errors.push(field("postal_code"), "有効な郵便番号を入力してください");
    }
    if !is_prefecture(contact.prefecture.trim()) {
        errors.push(field("prefecture"), "都道府県を選択してください");
    }
    if contact.city.trim().is_empty() {
        errors.push(field("city"), "市区町村を入力してください");
    }
    if contact.address1.trim().is_empty() {
        errors.push(field("address1"), "番地を入力してください");
    }

    errors
}

fn validate_email(email: &str, errors: &mut ValidationErrors) {
    if email.is_empty() {
        errors.push("email", "メールアドレスを入力してください");
    } else if !EMAIL_RE.is_match(email) {
        errors.push("email", "有効なメールアドレスを入力してください");
    }
}

fn validate_password_length(password: &str, errors: &mut ValidationErrors) -> bool {
    let len = password.chars().count();
    if len < 6 {
        errors.push("password", "パスワードは6文字以上で入力してください");
        false
    } else if len > 100 {
        errors.push("password", "パスワードは100文字以下で入力してください");
        false
    } else {
        true
    }
}

fn validate_profile_fields(
    name: &str,
    phone: &str,
    company: Option<&str>,
    errors: &mut ValidationErrors,
) {
    let name_len = name.trim().chars().count();
    if name_len == 0 {
        errors.push("name", "名前を入力してください");
    } else if name_len > 50 {
        errors.push("name", "名前は50文字以下で入力してください");
    }

    if phone.is_empty() {
        errors.push("phone", "電話番号を入力してください");
    } else if !PROFILE_PHONE_RE.is_match(phone) {
        errors.push("phone", "有効な電話番号を入力してください");
    }

    if company.map(|c| c.chars().count() > 100).unwrap_or(false) {
        errors.push("company", "会社名は100文字以下で入力してください");
    }
}

pub fn validate_login(input: &LoginInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    validate_email(&input.email, &mut errors);
    validate_password_length(&input.password, &mut errors);
    errors
}

pub fn validate_register(input: &RegisterInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    validate_email(&input.email, &mut errors);

    if validate_password_length(&input.password, &mut errors) {
        let has_lower = input.password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = input.password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = input.password.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            errors.push(
                "password",
                "パスワードは英小文字、英大文字、数字を含む必要があります",
            );
        }
    }
    if input.password != input.confirm_password {
        errors.push("confirm_password", "パスワードが一致しません");
    }

    validate_profile_fields(
        &input.name,
        &input.phone,
        input.company.as_deref(),
        &mut errors,
    );
    errors
}

pub fn validate_profile(input: &ProfileInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    validate_profile_fields(
        &input.name,
        &input.phone,
        input.company.as_deref(),
        &mut errors,
    );
    errors
}

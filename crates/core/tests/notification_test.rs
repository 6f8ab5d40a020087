use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use slotbook_core::{
    locale::{format_day_heading, format_full, format_numeric},
    models::appointment::BookingDetails,
    notification::{DEFAULT_BUSINESS_NUMBER, confirmation_message, whatsapp_link},
};

fn ana() -> BookingDetails {
    BookingDetails {
        name: "Ana".to_string(),
        last_name: "Gomez".to_string(),
        phone: "+5491122334455".to_string(),
        confirmed: true,
    }
}

fn june_3rd() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

#[test]
fn test_full_date_is_spanish() {
    let full = format_full(june_3rd());

    assert!(full.contains("lunes"), "{}", full);
    assert!(full.contains("3 de junio de 2024"), "{}", full);
}

#[test]
fn test_numeric_date() {
    assert_eq!(format_numeric(june_3rd()), "03/06/2024");
}

#[test]
fn test_day_heading() {
    let heading = format_day_heading(june_3rd());

    assert!(heading.starts_with("lunes 3 "), "{}", heading);
}

#[test]
fn test_message_contains_every_field() {
    let message = confirmation_message(&ana(), june_3rd(), "10:00");

    assert!(message.starts_with("Confirmo turno.\n\n"));
    for expected in ["Ana", "Gomez", "+5491122334455", "10:00"] {
        assert!(message.contains(expected), "missing {}", expected);
    }
    assert!(message.contains(&format!("Fecha: {}", format_full(june_3rd()))));
    assert!(message.contains("- Apellido: Gomez"));
    assert!(message.ends_with("- Teléfono: +5491122334455"));
}

#[test]
fn test_link_targets_business_number() {
    let link = whatsapp_link(DEFAULT_BUSINESS_NUMBER, &ana(), june_3rd(), "10:00");

    assert!(link.starts_with("https://wa.me/+543812018090?text="));
}

#[test]
fn test_link_text_round_trips() {
    let link = whatsapp_link("5491100000000", &ana(), june_3rd(), "10:00");
    let encoded = link
        .strip_prefix("https://wa.me/5491100000000?text=")
        .expect("unexpected link prefix");

    assert!(!encoded.contains(' '));
    assert!(!encoded.contains('\n'));
    assert!(encoded.contains("%2B5491122334455"));
    assert_eq!(
        urlencoding::decode(encoded).unwrap(),
        confirmation_message(&ana(), june_3rd(), "10:00")
    );
}

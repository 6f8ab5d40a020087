//! # WhatsApp Notification Link
//!
//! Renders a booking into the fixed confirmation text and wraps it in a
//! `wa.me` deep link. Nothing is sent from here; the visitor's browser
//! follows the link.

use chrono::NaiveDate;

use crate::{locale, models::appointment::BookingDetails};

pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Business number that receives confirmations unless configured otherwise.
pub const DEFAULT_BUSINESS_NUMBER: &str = "+543812018090";

pub fn confirmation_message(details: &BookingDetails, date: NaiveDate, time: &str) -> String {
    format!(
        "Confirmo turno.\n\n\
         📅 Fecha: {date}\n\
         🕒 Hora: {time}\n\n\
         👤 Datos del cliente:\n\
         - Nombre: {name}\n\
         - Apellido: {last_name}\n\
         - Teléfono: {phone}",
        date = locale::format_full(date),
        time = time,
        name = details.name,
        last_name = details.last_name,
        phone = details.phone,
    )
}

/// Builds `https://wa.me/<number>?text=<encoded message>`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use slotbook_core::{models::appointment::BookingDetails, notification::whatsapp_link};
///
/// let details = BookingDetails {
///     name: "Ana".into(),
///     last_name: "Gomez".into(),
///     phone: "+5491122334455".into(),
///     confirmed: true,
/// };
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let link = whatsapp_link("+543812018090", &details, date, "10:00");
/// assert!(link.starts_with("https://wa.me/+543812018090?text="));
/// ```
pub fn whatsapp_link(number: &str, details: &BookingDetails, date: NaiveDate, time: &str) -> String {
    let message = confirmation_message(details, date, time);
    link_for_message(number, &message)
}

pub fn link_for_message(number: &str, message: &str) -> String {
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE_URL,
        number,
        urlencoding::encode(message)
    )
}

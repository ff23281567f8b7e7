//! # Messages
//!
//! Every visitor-facing string the pipeline produces.

use crate::error::ValidationError;
use crate::pricing::Kes;
use crate::reference::BookingReference;
use crate::tracking::TrackingResult;

pub const DEFAULT_COMPANY_NAME: &str = "SwiftConnect Logistics";
pub const DEFAULT_SUPPORT_LINE: &str = "+254 700 SWIFT (794338)";

pub const TRACKING_LOOKUP_MESSAGE: &str = "Looking up tracking information...";

/// Label a submit button shows while its timer runs.
pub const PROCESSING_LABEL: &str = "Processing...";

/// Header of the combined validation notification.
const VALIDATION_HEADER: &str = "Please correct the following errors:";

/// One notification for all errors, one line each.
pub fn validation_summary(errors: &[ValidationError]) -> String {
    let mut text = String::from(VALIDATION_HEADER);
    for error in errors {
        text.push('\n');
        text.push_str(&error.to_string());
    }
    text
}

/// What a booking needs to confirm back to the visitor.
#[derive(Debug, Clone, Copy)]
pub struct BookingDetails<'a> {
    pub pickup: &'a str,
    pub delivery: &'a str,
    pub service: &'a str,
    pub weight: &'a str,
    pub price: Kes,
    pub reference: &'a BookingReference,
}

pub fn booking_confirmation(details: &BookingDetails<'_>) -> String {
    format!(
        "Booking Request Submitted!\n\
         \n\
         Route: {} → {}\n\
         Service: {}\n\
         Weight: {}kg\n\
         Estimated Cost: {}\n\
         \n\
         Our team will contact you within 30 minutes to confirm pickup details.\n\
         Reference: {}",
        details.pickup,
        details.delivery,
        details.service,
        details.weight,
        details.price,
        details.reference
    )
}

pub fn contact_confirmation(company_name: &str, support_line: &str) -> String {
    format!(
        "Message Sent Successfully!\n\
         \n\
         Thank you for contacting {company_name}. We have received your inquiry and will respond within 24 hours.\n\
         \n\
         For urgent matters, please call:\n\
         {support_line}"
    )
}

/// Live-preview label for the booking form's submit button.
pub fn book_now_label(price: Kes) -> String {
    format!("Book Now - {price}")
}

/// Text of the persistent tracking result block.
pub fn tracking_block(result: &TrackingResult) -> String {
    format!(
        "📦 Tracking Result:\n\
         {}\n\
         Status: {}\n\
         Location: {}\n\
         Last Update: {}\n\
         Expected Delivery: {}",
        result.tracking_number,
        result.status,
        result.location,
        result.last_update,
        result.estimated_delivery
    )
}
